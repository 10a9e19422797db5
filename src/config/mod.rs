pub mod config_load;
pub mod config_types;

pub use config_load::{Config, ConfigError, ConfigSource};
pub use config_types::{
    DragConfig, LoggingConfig, MoonConfig, ReleaseConfig, SkyConfig, WindowConfig,
};
