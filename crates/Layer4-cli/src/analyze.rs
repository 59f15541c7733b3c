//! `analyze` 명령 - 추출, 분류, 비교, JSON 리포트

use crate::render::{self, Painter};
use crate::EXIT_NEW_DANGEROUS;
use anyhow::Context;
use apkperm_foundation::{filter_any, ApkpermConfig, Category, Report};
use apkperm_manifest::{extract, ManifestSource};
use clap::{ArgGroup, Args};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["apk", "manifest"])))]
#[command(group(ArgGroup::new("compare").args(["compare_apk", "compare_manifest"])))]
pub struct AnalyzeArgs {
    /// Path to the APK
    #[arg(short = 'a', long, value_name = "PATH")]
    pub apk: Option<PathBuf>,

    /// Path to AndroidManifest.xml (text or binary)
    #[arg(short = 'm', long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Second APK to compare against (the newer build)
    #[arg(long, value_name = "PATH")]
    pub compare_apk: Option<PathBuf>,

    /// Second manifest to compare against (the newer build)
    #[arg(long, value_name = "PATH")]
    pub compare_manifest: Option<PathBuf>,

    /// Only show these categories: normal, dangerous, signature, unknown
    #[arg(long, value_name = "CATEGORY", value_delimiter = ',')]
    pub only: Vec<Category>,

    /// Exit with code 3 when the comparison adds dangerous permissions
    #[arg(long)]
    pub fail_on_new_dangerous: bool,

    /// Write a JSON report to this path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

impl AnalyzeArgs {
    fn base_source(&self) -> anyhow::Result<ManifestSource> {
        match (&self.apk, &self.manifest) {
            (Some(apk), _) => Ok(ManifestSource::Apk(apk.clone())),
            (None, Some(manifest)) => Ok(ManifestSource::Manifest(manifest.clone())),
            (None, None) => anyhow::bail!("specify --apk or --manifest"),
        }
    }

    fn compare_source(&self) -> Option<ManifestSource> {
        match (&self.compare_apk, &self.compare_manifest) {
            (Some(apk), _) => Some(ManifestSource::Apk(apk.clone())),
            (None, Some(manifest)) => Some(ManifestSource::Manifest(manifest.clone())),
            (None, None) => None,
        }
    }
}

pub fn run(args: &AnalyzeArgs, config: &ApkpermConfig) -> anyhow::Result<ExitCode> {
    let classifier = config.classifier();
    let painter = Painter::new(render::color_enabled(args.no_color || config.no_color()));

    let base_source = args.base_source()?;
    let base = extract(&base_source).context("failed to read base input")?;
    let base_records = filter_any(&classifier.classify_all(&base), &args.only);
    render::print_table(&painter, "Permissions (Base)", &base_records);

    let mut report = Report::new(base_records);
    let mut gate_failed = false;

    if let Some(target_source) = args.compare_source() {
        let target = extract(&target_source).context("failed to read comparison input")?;
        let target_records = filter_any(&classifier.classify_all(&target), &args.only);
        render::print_table(&painter, "Permissions (Target)", &target_records);

        // --only 와 무관하게 전체 집합으로 비교
        let diff = classifier.diff(&base, &target);
        render::print_diff(&painter, &diff);

        let fail_on_new_dangerous = args.fail_on_new_dangerous || config.fail_on_new_dangerous();
        gate_failed = fail_on_new_dangerous && diff.has_new_dangerous();
        tracing::debug!(
            added = diff.added.len(),
            removed = diff.removed.len(),
            new_dangerous = diff.new_dangerous.len(),
            "Diff computed"
        );
        report = report.with_diff(diff);
    } else if args.fail_on_new_dangerous {
        tracing::warn!("--fail-on-new-dangerous has no effect without --compare-apk/--compare-manifest");
    }

    if gate_failed {
        println!("{}", painter.error("New dangerous permissions found!"));
    }

    if let Some(output) = &args.output {
        report
            .write_to(output)
            .with_context(|| format!("failed to write JSON report to {}", output.display()))?;
        println!("{}", painter.success(&format!("JSON report saved: {}", output.display())));
    }

    if gate_failed {
        return Ok(ExitCode::from(EXIT_NEW_DANGEROUS));
    }
    Ok(ExitCode::SUCCESS)
}
