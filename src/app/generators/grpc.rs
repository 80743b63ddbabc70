use crate::app::templates::grpc as templates;
use crate::config::Toolchain;
use crate::core::engine::ScaffoldEngine;
use crate::core::{
    CommandRunner, GenerationReport, GenerationRequest, Generator, Step, StepAction, Storage,
};
use crate::domain::model::{MakefilePlan, RenderedFile, ToolInvocation};
use crate::utils::error::Result;
use std::path::PathBuf;

/// `project grpc`：proto 合約、Makefile proto target 與產生的 binding
#[derive(Debug, Clone)]
pub struct GrpcGenerator {
    request: GenerationRequest,
    toolchain: Toolchain,
}

impl GrpcGenerator {
    pub fn new(request: GenerationRequest, toolchain: Toolchain) -> Self {
        Self { request, toolchain }
    }

    pub fn directories(&self) -> Vec<PathBuf> {
        vec![
            PathBuf::from("api/proto/v1"),
            PathBuf::from(format!("pkg/grpc/{}/v1", self.request.name())),
            PathBuf::from("internal/presentation/grpc/v1"),
        ]
    }

    pub fn proto_file(&self) -> RenderedFile {
        RenderedFile::new(
            format!("api/proto/v1/{}.proto", self.request.name()),
            templates::proto(&self.request),
        )
    }

    pub fn makefile_plan(&self) -> MakefilePlan {
        MakefilePlan {
            path: PathBuf::from("Makefile"),
            full_template: templates::makefile(&self.request),
            fragment: templates::makefile_proto_target(&self.request),
            marker: templates::PROTO_TARGET_MARKER.to_string(),
        }
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

impl Generator for GrpcGenerator {
    fn kind(&self) -> &'static str {
        "grpc"
    }

    fn request(&self) -> &GenerationRequest {
        &self.request
    }

    fn steps(&self) -> Vec<Step> {
        vec![
            Step::new("Creating directories", StepAction::CreateDirs(self.directories())),
            Step::new(
                "Generating proto contract",
                StepAction::WriteFiles(vec![self.proto_file()]),
            ),
            Step::new("Generating Makefile", StepAction::MergeMakefile(self.makefile_plan())),
            // protoc 與搬移 *.pb.go 都由 Makefile 的 proto target 負責
            Step::new(
                "Generating proto",
                StepAction::Exec(ToolInvocation::new(&self.toolchain.make, ["proto"])),
            ),
            Step::new(
                "Installing dependencies",
                StepAction::Exec(ToolInvocation::new(&self.toolchain.go, ["mod", "tidy"])),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_order() {
        let generator =
            GrpcGenerator::new(GenerationRequest::new("user", "", "."), Toolchain::default());
        let labels: Vec<_> = generator.steps().iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec![
                "Creating directories",
                "Generating proto contract",
                "Generating Makefile",
                "Generating proto",
                "Installing dependencies"
            ]
        );
    }

    #[test]
    fn test_custom_toolchain_is_used() {
        let toolchain = Toolchain {
            go: "/opt/go/bin/go".to_string(),
            make: "gmake".to_string(),
        };
        let generator = GrpcGenerator::new(GenerationRequest::new("user", "", "."), toolchain);
        let steps = generator.steps();
        assert_eq!(steps[3].action, StepAction::Exec(ToolInvocation::new("gmake", ["proto"])));
        assert_eq!(
            steps[4].action,
            StepAction::Exec(ToolInvocation::new("/opt/go/bin/go", ["mod", "tidy"]))
        );
    }

    #[test]
    fn test_proto_file_path_follows_service_name() {
        let generator = GrpcGenerator::new(
            GenerationRequest::new("billing", "github.com/org/billing", "."),
            Toolchain::default(),
        );
        assert_eq!(generator.proto_file().path, PathBuf::from("api/proto/v1/billing.proto"));
        assert!(generator
            .directories()
            .contains(&PathBuf::from("pkg/grpc/billing/v1")));
    }
}
