//! HTTP request handlers for API endpoints.

pub mod health;
pub mod redirect;
pub mod shorten;
pub mod stats;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::{
    create_short_url_handler, delete_short_url_handler, get_short_url_handler,
    update_short_url_handler,
};
pub use stats::stats_handler;
