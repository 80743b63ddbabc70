use crate::app::templates::project as templates;
use crate::config::Toolchain;
use crate::core::engine::ScaffoldEngine;
use crate::core::{
    CommandRunner, GenerationReport, GenerationRequest, Generator, Step, StepAction, Storage,
};
use crate::domain::model::{RenderedFile, ToolInvocation};
use crate::utils::error::Result;
use std::path::PathBuf;

/// `project init`：完整的專案骨架
#[derive(Debug, Clone)]
pub struct ProjectGenerator {
    request: GenerationRequest,
    toolchain: Toolchain,
}

impl ProjectGenerator {
    pub fn new(request: GenerationRequest, toolchain: Toolchain) -> Self {
        Self { request, toolchain }
    }

    pub fn directories(&self) -> Vec<PathBuf> {
        let name = self.request.name();
        [
            // Commands
            format!("cmd/{name}"),
            // API definitions
            "api/proto".to_string(),
            "api/openapi".to_string(),
            // Internal packages
            "internal/config".to_string(),
            "internal/infrastructure/database".to_string(),
            "internal/presentation".to_string(),
            // Public packages
            "pkg/grpc".to_string(),
            // Deployments
            "deploy/docker".to_string(),
            "deploy/k8s".to_string(),
            "scripts".to_string(),
            "test/integration".to_string(),
            "test/e2e".to_string(),
        ]
        .into_iter()
        .map(PathBuf::from)
        .collect()
    }

    /// Existing files at these paths are overwritten.
    pub fn files(&self) -> Vec<RenderedFile> {
        let request = &self.request;
        vec![
            RenderedFile::new(
                format!("cmd/{}/main.go", request.name()),
                templates::main_go(request),
            ),
            RenderedFile::new("internal/config/config.go", templates::config_go(request)),
            RenderedFile::new("internal/config/otel.go", templates::otel_go(request)),
            RenderedFile::new("deploy/docker/Dockerfile", templates::dockerfile(request)),
            RenderedFile::new(".gitignore", templates::gitignore(request)),
            RenderedFile::new("Makefile", templates::makefile(request)),
        ]
    }

    pub fn generate(&self) -> Result<GenerationReport> {
        ScaffoldEngine::local(self.request.output_dir()).run(self)
    }

    pub fn generate_with<S: Storage, R: CommandRunner>(
        &self,
        engine: &ScaffoldEngine<S, R>,
    ) -> Result<GenerationReport> {
        engine.run(self)
    }
}

impl Generator for ProjectGenerator {
    fn kind(&self) -> &'static str {
        "project"
    }

    fn request(&self) -> &GenerationRequest {
        &self.request
    }

    fn steps(&self) -> Vec<Step> {
        vec![
            Step::new("Creating directories", StepAction::CreateDirs(self.directories())),
            Step::new("Generating files", StepAction::WriteFiles(self.files())),
            Step::new(
                "Initializing go module",
                StepAction::Exec(ToolInvocation::new(
                    &self.toolchain.go,
                    ["mod", "init", self.request.module()],
                )),
            ),
            Step::new(
                "Installing dependencies",
                StepAction::Exec(ToolInvocation::new(&self.toolchain.go, ["mod", "tidy"])),
            ),
        ]
    }
}
