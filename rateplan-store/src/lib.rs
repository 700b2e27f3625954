pub mod app_config;
pub mod feeds;

pub use app_config::Config;
pub use feeds::{parse_month, InMemoryFeeds};
