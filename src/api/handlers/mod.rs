//! Request handlers, one module per endpoint group.

pub mod health;
pub mod info;
pub mod redirect;
pub mod shorten;

pub use health::health_handler;
pub use info::{alias_info_handler, click_count_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
