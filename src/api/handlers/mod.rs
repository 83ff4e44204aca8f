//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod health;
pub mod redirect;
pub mod shorten;
pub mod stats;

pub use fallback::method_not_allowed_handler;
pub use health::health_handler;
pub use redirect::{redirect_handler, redirect_query_handler};
pub use shorten::shorten_handler;
pub use stats::stats_handler;
