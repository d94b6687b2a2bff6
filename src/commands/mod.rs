pub mod config_cmd;
pub mod enumerate;
pub mod info;

pub use config_cmd::execute_config;
pub use enumerate::execute_enumerate;
pub use info::execute_info;
