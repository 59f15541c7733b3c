//! apkperm CLI - Main entry point

mod analyze;
mod known;
mod render;

use apkperm_foundation::ApkpermConfig;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 입력/파싱/설정/쓰기 오류
pub const EXIT_ERROR: u8 = 1;

/// `--fail-on-new-dangerous` 에서 새 dangerous 권한 발견
pub const EXIT_NEW_DANGEROUS: u8 = 3;

/// apkperm - Android permission inspector and release gate
#[derive(Parser, Debug)]
#[command(name = "apkperm")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Extra config file (JSON), merged over global and project config
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract and classify permissions, optionally diff against another build
    Analyze(analyze::AnalyzeArgs),
    /// List the permission classification table
    Known(known::KnownArgs),
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_ERROR),
            };
        }
    };

    init_logging(args.debug);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config = ApkpermConfig::load(args.config.as_deref())?;
    tracing::debug!(
        "Config loaded ({} custom permission(s))",
        config.custom_permissions.len()
    );

    match args.command {
        Command::Analyze(analyze_args) => analyze::run(&analyze_args, &config),
        Command::Known(known_args) => known::run(&known_args, &config),
    }
}

/// stderr 로 로그 출력 (stdout 은 표/요약 전용)
fn init_logging(debug: bool) {
    let log_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
