//! `known` 명령 - 분류 테이블 출력 (내장 + customPermissions)

use crate::render::{self, Painter};
use apkperm_foundation::{filter_any, ApkpermConfig, Category};
use clap::Args;
use std::process::ExitCode;

#[derive(Args, Debug)]
pub struct KnownArgs {
    /// Only show these categories: normal, dangerous, signature, unknown
    #[arg(long, value_name = "CATEGORY", value_delimiter = ',')]
    pub only: Vec<Category>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

pub fn run(args: &KnownArgs, config: &ApkpermConfig) -> anyhow::Result<ExitCode> {
    let classifier = config.classifier();
    let painter = Painter::new(render::color_enabled(args.no_color || config.no_color()));

    let records = filter_any(&classifier.known(), &args.only);
    render::print_table(&painter, "Known Permissions", &records);
    println!(
        "{} permission(s), {} from config",
        records.len(),
        classifier.override_count()
    );
    Ok(ExitCode::SUCCESS)
}
