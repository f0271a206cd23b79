pub mod app_config;
pub mod env;
pub mod grid_config;
pub mod polling_config;
pub mod vision_config;
