//! Command layer: turns parsed arguments into generator runs and prints the
//! summary/status lines around them.

use crate::app::generators::{GrpcGenerator, ProjectGenerator};
use crate::config::Settings;
use crate::core::{GenerationReport, GenerationRequest};
use crate::utils::error::ScaffoldError;
use crate::utils::validation::Validate;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_COMMIT: &str = match option_env!("SAC_GIT_COMMIT") {
    Some(commit) => commit,
    None => "unknown",
};
pub const BUILD_DATE: &str = match option_env!("SAC_BUILD_DATE") {
    Some(date) => date,
    None => "unknown",
};

/// `project init`：輸出目錄已存在時直接失敗，不做任何寫入
pub fn init_project(
    name: &str,
    module: &str,
    output: Option<&Path>,
    settings: &Settings,
) -> anyhow::Result<GenerationReport> {
    let output = output.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(name));

    if std::fs::metadata(&output).is_ok() {
        return Err(ScaffoldError::TargetExists { path: output }.into());
    }

    let request = GenerationRequest::new(name, module, &output);
    request.validate()?;

    println!("Creating project {:?} in {}\n", name, display_absolute(&output));

    ProjectGenerator::new(request, settings.toolchain.clone())
        .generate()
        .context("failed to generate project")
}

/// `project grpc`：輸出目錄不存在時先建立
pub fn grpc_service(
    name: &str,
    module: &str,
    output: &Path,
    settings: &Settings,
) -> anyhow::Result<GenerationReport> {
    let request = GenerationRequest::new(name, module, output);
    request.validate()?;

    if std::fs::metadata(output).is_err() {
        std::fs::create_dir_all(output)
            .map_err(|e| ScaffoldError::filesystem("create directory", output, e))
            .context("failed to create output directory")?;
    }

    println!(
        "Generating gRPC service {:?} in {}\n",
        name,
        display_absolute(output)
    );

    GrpcGenerator::new(request, settings.toolchain.clone())
        .generate()
        .context("failed to generate gRPC service")
}

pub fn run_task<W: Write>(
    out: &mut W,
    name: &str,
    dry_run: bool,
    settings: &Settings,
) -> std::io::Result<()> {
    if settings.verbose {
        writeln!(out, "Running task: {}", name)?;
    }

    if dry_run {
        writeln!(out, "Dry run: would execute task '{}'", name)?;
        return Ok(());
    }

    writeln!(out, "Executing task: {}", name)
}

pub fn print_version<W: Write>(out: &mut W, short: bool) -> std::io::Result<()> {
    if short {
        return writeln!(out, "{}", VERSION);
    }
    writeln!(out, "sac {}", VERSION)?;
    writeln!(out, "  Commit:     {}", GIT_COMMIT)?;
    writeln!(out, "  Built:      {}", BUILD_DATE)?;
    writeln!(
        out,
        "  OS/Arch:    {}/{}",
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

fn display_absolute(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

#[cfg(feature = "cli")]
pub fn run_cli(cli: &crate::config::cli::Cli, settings: &Settings) -> anyhow::Result<()> {
    use crate::config::cli::{Commands, ProjectCommands};

    match &cli.command {
        Commands::Project {
            command: ProjectCommands::Init(args),
        } => {
            init_project(&args.name, &args.module, args.output.as_deref(), settings)?;
            println!("\n✅ Done");
        }
        Commands::Project {
            command: ProjectCommands::Grpc(args),
        } => {
            grpc_service(&args.name, &args.module, &args.output, settings)?;
            println!("\n✅ Done");
        }
        Commands::Run(args) => {
            run_task(&mut std::io::stdout(), &args.name, args.dry_run, settings)?
        }
        Commands::Version(args) => print_version(&mut std::io::stdout(), args.short)?,
    }
    Ok(())
}
