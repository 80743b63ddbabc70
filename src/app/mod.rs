pub mod commands;
pub mod generators;
pub mod templates;
