//! Environment-backed configuration loading.
//!
//! Pure schema parsing lives in `domain::configuration`.

mod load_config;

pub use load_config::{CONFIG_ENV_VAR, config_path_from_env, load_install_config};
