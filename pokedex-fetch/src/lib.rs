pub mod async_util;
pub mod catalog;
pub mod client;
pub mod detail;
pub mod error;
pub mod settings;
pub mod transport;
pub mod types;

pub use catalog::{FetchEvent, fetch_catalog};
pub use client::PokeApiClient;
pub use detail::fetch_details;
pub use error::FetchError;
pub use settings::{FetchOptions, SettingSource, setting_sources, settings_path};
pub use transport::Transport;
