//! Display model implementations for table output
//!
//! Display models turn API response types into rows with CLI-friendly column
//! names. JSON output serializes the API types directly.

mod common;
mod link;
mod stat;
mod user;

pub use link::{LinkDisplay, LinkSummaryDisplay};
pub use stat::ClickDisplay;
pub use user::UserDisplay;
