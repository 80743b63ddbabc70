pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::Cli;

pub use crate::adapters::{LocalStorage, SystemRunner};
pub use crate::app::generators::{GrpcGenerator, ProjectGenerator};
pub use crate::config::{Settings, Toolchain};
pub use crate::core::engine::ScaffoldEngine;
pub use crate::domain::model::{GenerationReport, GenerationRequest};
pub use crate::utils::error::{Result, ScaffoldError};
