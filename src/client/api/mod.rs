//! API trait definitions split by resource
//!
//! - [`LinkApi`] - Create, list, inspect and toggle short links
//! - [`StatApi`] - Click statistics
//! - [`UserApi`] - Current account
//!
//! [`TinySrcApi`] combines all three and is implemented for anything that
//! implements them, so consumers can depend on `&dyn TinySrcApi` and swap in
//! a mock.

mod link;
mod stat;
mod user;

pub use link::LinkApi;
pub use stat::StatApi;
pub use user::UserApi;

/// The full TinySRC API surface
pub trait TinySrcApi: LinkApi + StatApi + UserApi {}

impl<T: LinkApi + StatApi + UserApi> TinySrcApi for T {}
