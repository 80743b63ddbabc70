use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sac")]
#[command(about = "SA CLI - A command line tool")]
#[command(
    long_about = "SA CLI is a command line tool for scaffolding Go projects and gRPC services."
)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Enable debug mode")]
    pub debug: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Project management commands
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Run a task
    Run(RunArgs),
    /// Print version information
    Version(VersionArgs),
}

#[derive(Debug, Clone, Subcommand)]
pub enum ProjectCommands {
    /// Initialize a new project
    ///
    /// Example:
    ///   sac project init myapp --module github.com/myorg/myapp
    Init(InitArgs),
    /// Generate gRPC service scaffold
    ///
    /// Example:
    ///   sac project grpc user --module github.com/myorg/user-service --output ./services/user
    Grpc(GrpcArgs),
}

#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Project name
    #[arg(default_value = "app")]
    pub name: String,

    /// Go module path (default: project name)
    #[arg(short, long, default_value = "")]
    pub module: String,

    /// Output directory (default: project name); must not exist yet
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct GrpcArgs {
    /// Service name
    pub name: String,

    /// Go module path (default: service name)
    #[arg(short, long, default_value = "")]
    pub module: String,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Task name
    pub name: String,

    /// Show what would be executed without running
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Args)]
pub struct VersionArgs {
    /// Print only the version number
    #[arg(short, long)]
    pub short: bool,
}

impl Commands {
    /// 子命令路徑，用於錯誤訊息中的 `--help` 提示
    pub fn path(&self) -> &'static str {
        match self {
            Commands::Project {
                command: ProjectCommands::Init(_),
            } => "project init",
            Commands::Project {
                command: ProjectCommands::Grpc(_),
            } => "project grpc",
            Commands::Run(_) => "run",
            Commands::Version(_) => "version",
        }
    }
}
