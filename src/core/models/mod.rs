pub mod config_entry;
pub mod target;
