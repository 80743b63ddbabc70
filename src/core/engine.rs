use crate::adapters::{LocalStorage, SystemRunner};
use crate::core::steps::StepExecutor;
use crate::core::{CommandRunner, GenerationReport, Generator, Storage};
use crate::utils::error::{Result, ScaffoldError};
use std::path::Path;

/// 依序執行產生器的步驟，遇到第一個失敗即停止
pub struct ScaffoldEngine<S: Storage, R: CommandRunner> {
    storage: S,
    runner: R,
}

impl ScaffoldEngine<LocalStorage, SystemRunner> {
    pub fn local(output_dir: &Path) -> Self {
        Self::new(LocalStorage::new(output_dir), SystemRunner)
    }
}

impl<S: Storage, R: CommandRunner> ScaffoldEngine<S, R> {
    pub fn new(storage: S, runner: R) -> Self {
        Self { storage, runner }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Already completed steps are not rolled back on failure.
    pub fn run<G: Generator + ?Sized>(&self, generator: &G) -> Result<GenerationReport> {
        let request = generator.request();
        let executor = StepExecutor::new(&self.storage, &self.runner, request.output_dir());
        let mut report = GenerationReport::default();

        tracing::info!(
            "Starting {} generation: name={}, module={}, output={}",
            generator.kind(),
            request.name(),
            request.module(),
            request.output_dir().display()
        );

        for step in generator.steps() {
            println!("  →   {}...", step.label);

            if let Err(e) = executor.execute(&step.action) {
                tracing::debug!("❌ Step '{}' failed: {}", step.label, e.report());
                return Err(ScaffoldError::Step {
                    label: step.label.to_string(),
                    source: Box::new(e),
                });
            }

            tracing::debug!("Step '{}' completed", step.label);
            report.completed_steps.push(step.label);
        }

        tracing::info!(
            "✅ {} generation finished ({} steps)",
            generator.kind(),
            report.completed_steps.len()
        );
        Ok(report)
    }
}
