pub mod config;
pub mod main_module;
pub mod router;
pub mod shared;
pub mod tasks;
