pub mod parse;
pub mod plugin;
pub mod types;
