pub mod config;

pub use config::{
    config_path, load_config, load_config_from, save_config_to, Config, CurrentProject,
};
