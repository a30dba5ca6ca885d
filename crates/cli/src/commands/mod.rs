pub mod complement;
pub mod config;
pub mod generate;
pub mod mutate;
pub mod related;
