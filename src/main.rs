use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use dep_pin::config::{
    DEFAULT_GITHUB_API_URL, DEFAULT_GITHUB_URL, DEFAULT_RELEASE_REPO, DEFAULT_VERSION_FILE,
    FetcherConfig, SyncConfig,
};
use dep_pin::parser::CMakeParser;
use dep_pin::release::{GitHubReleases, ReleaseCheck, check_release, read_pinned_rev};
use dep_pin::source::NixFetcher;
use dep_pin::sync::run_sync;

/// Exit code of a sync run where some dependencies could not be pinned
const EXIT_PARTIAL: u8 = 2;

#[derive(Parser)]
#[command(name = "dep-pin")]
#[command(
    version,
    about = "Pin CMake FetchContent dependencies to commits and Nix hashes",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    sync: SyncArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan declarations and update dep.json and sha.json (default)
    Sync(SyncArgs),
    /// Print the latest upstream release tag if it is newer than the pinned one
    CheckRelease(CheckReleaseArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
struct SyncArgs {
    /// Directory the default paths are relative to
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Directory with the *.cmake declaration files [default: <root>/kvrocks/cmake]
    #[arg(long)]
    declarations_dir: Option<PathBuf>,

    /// Declaration manifest to write [default: <root>/dep.json]
    #[arg(long)]
    dep_json: Option<PathBuf>,

    /// Resolved manifest to update [default: <root>/sha.json]
    #[arg(long)]
    sha_json: Option<PathBuf>,

    /// Forge that repositories and archives are fetched from
    #[arg(long, default_value = DEFAULT_GITHUB_URL)]
    github_url: String,

    /// Exit with status 2 if any dependency could not be pinned
    #[arg(long)]
    fail_on_error: bool,
}

impl SyncArgs {
    fn sync_config(&self) -> SyncConfig {
        let mut config = SyncConfig::from_root(&self.root);
        if let Some(dir) = &self.declarations_dir {
            config.declarations_dir = dir.clone();
        }
        if let Some(path) = &self.dep_json {
            config.declaration_output_path = path.clone();
        }
        if let Some(path) = &self.sha_json {
            config.resolved_output_path = path.clone();
        }
        config
    }

    fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            github_url: self.github_url.clone(),
            ..FetcherConfig::default()
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq)]
struct CheckReleaseArgs {
    /// Directory the default version file is relative to
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Repository whose releases are tracked
    #[arg(long, default_value = DEFAULT_RELEASE_REPO)]
    repo: String,

    /// JSON file holding the pinned "rev" [default: <root>/ver.json]
    #[arg(long)]
    version_file: Option<PathBuf>,

    /// Base URL of the GitHub API
    #[arg(long, default_value = DEFAULT_GITHUB_API_URL)]
    api_url: String,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_file.as_deref())?;

    match cli.command {
        None => sync(&cli.sync),
        Some(Command::Sync(args)) => sync(&args),
        Some(Command::CheckRelease(args)) => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(release(&args)),
    }
}

fn sync(args: &SyncArgs) -> anyhow::Result<ExitCode> {
    let fetcher = NixFetcher::new(args.fetcher_config());
    let report = run_sync(&args.sync_config(), &CMakeParser::new(), &fetcher)?;

    if args.fail_on_error && report.has_failures() {
        return Ok(ExitCode::from(EXIT_PARTIAL));
    }
    Ok(ExitCode::SUCCESS)
}

async fn release(args: &CheckReleaseArgs) -> anyhow::Result<ExitCode> {
    let version_file = args
        .version_file
        .clone()
        .unwrap_or_else(|| args.root.join(DEFAULT_VERSION_FILE));
    let current = read_pinned_rev(&version_file)?;

    let source = GitHubReleases::new(&args.api_url);
    let check = check_release(&source, &args.repo, &current)
        .await
        .with_context(|| format!("Failed to check releases of {}", args.repo))?;

    if let ReleaseCheck::UpdateAvailable { latest, .. } = check {
        println!("{}", latest);
    }
    Ok(ExitCode::SUCCESS)
}

fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
        return Ok(None);
    };

    let (dir, file_name) = log_file_location(path)?;
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}

/// Splits a log file path into the directory and file name the appender expects
fn log_file_location(path: &Path) -> anyhow::Result<(&Path, &OsStr)> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    Ok((dir, file_name))
}
