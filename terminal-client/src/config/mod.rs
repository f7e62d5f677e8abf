mod main_config;

pub use main_config::get_config_manager;
