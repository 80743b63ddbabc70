pub mod engine;
pub mod steps;

pub use crate::domain::model::{GenerationReport, GenerationRequest, Step, StepAction};
pub use crate::domain::ports::{CommandRunner, Generator, Storage};
pub use crate::utils::error::Result;
