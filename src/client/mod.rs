//! TinySRC API client

pub mod api;
pub mod context;
pub mod models;
pub mod pagination;
pub mod tinysrc;

pub use api::{LinkApi, StatApi, TinySrcApi, UserApi};
pub use context::{ContextError, RequestContext};
pub use pagination::Page;
pub use tinysrc::{
    API_URL, TinySrcClient, VERSION, error_response_from_body, is_success, is_unauthorized,
    parse_error_response,
};
