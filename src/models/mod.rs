//! Display models for CLI output

pub mod display;

pub use display::{ClickDisplay, LinkDisplay, LinkSummaryDisplay, UserDisplay};
