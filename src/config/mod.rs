pub mod app_config;
pub mod defaults;
pub mod settings;

pub use app_config::AppConfig;
pub use settings::{parse_date, Labels, Settings};
