mod cli;

use clap::Parser;
use cli::Args;
use dependency_license_report::adapters::outbound::archive::ArchiveScanner;
use dependency_license_report::adapters::outbound::cache::RetentionPolicy;
use dependency_license_report::adapters::outbound::console::StderrProgressReporter;
use dependency_license_report::adapters::outbound::filesystem::FileSystemReader;
use dependency_license_report::adapters::outbound::metadata::MetadataResolver;
use dependency_license_report::adapters::outbound::network::{
    HttpResourceFetcher, DEFAULT_TIMEOUT,
};
use dependency_license_report::application::dto::ReportRequest;
use dependency_license_report::application::factories::{
    ReportWriterFactory, DEFAULT_OUTPUT_PATH,
};
use dependency_license_report::application::use_cases::GenerateReportUseCase;
use dependency_license_report::config::{
    discover_config, load_config_from_path, merge_settings, CliOverrides,
};
use dependency_license_report::ports::outbound::InventoryReader;
use dependency_license_report::report_generation::services::ReportMetadataGenerator;
use dependency_license_report::shared::error::ExitCode;
use dependency_license_report::shared::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\n{} {}", "Caused by:".yellow(), err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// `--verbose` forces debug; otherwise `RUST_LOG`, falling back to warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: Args) -> Result<()> {
    let inventory_dir = match args.inventory.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => Path::new(".").to_path_buf(),
    };

    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&inventory_dir)?,
    };

    let settings = merge_settings(
        CliOverrides {
            output: args.output,
            reported_configurations: args.configurations,
            exclude_artifacts: args.exclude,
            timeout_secs: args.timeout_secs,
        },
        config,
        Path::new(DEFAULT_OUTPUT_PATH),
    );

    if !args.quiet {
        eprintln!(
            "📖 Loading dependency inventory from: {}",
            args.inventory.display()
        );
    }

    // Create adapters (Dependency Injection)
    let reader = FileSystemReader::new();
    let mut inventory = reader.read_inventory(&args.inventory)?;
    inventory.repositories.extend(settings.repositories);

    if !args.quiet {
        eprintln!(
            "✅ Detected {} artifact(s) across {} configuration(s)",
            inventory.artifact_count(),
            inventory.configurations.len()
        );
    }

    let timeout = settings
        .timeout_secs
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT);
    let retention = RetentionPolicy::from_max_entries(settings.max_cache_entries);
    tracing::info!(
        repositories = inventory.repositories.len(),
        timeout_secs = timeout.as_secs(),
        ?retention,
        "starting license report"
    );

    let fetcher = HttpResourceFetcher::new(timeout)?;
    let metadata_repository =
        MetadataResolver::with_retention(inventory.repositories.clone(), fetcher, retention);
    let license_file_repository = ArchiveScanner::with_retention(retention);
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    // Create use case with injected dependencies
    let use_case = GenerateReportUseCase::new(
        metadata_repository,
        license_file_repository,
        progress_reporter,
    );

    let metadata = ReportMetadataGenerator::generate_default_metadata();
    let mut writer =
        ReportWriterFactory::create(&settings.output, &inventory.project.name, &metadata);

    let request = ReportRequest::new(
        inventory,
        settings.reported_configurations,
        settings.exclude_artifacts,
    );
    let response = use_case.execute(request, &mut writer)?;

    tracing::info!(
        output = %response.output_path.display(),
        sections = response.configurations.len(),
        artifacts = response.artifacts_reported,
        excluded = response.artifacts_excluded,
        license_files = response.license_files_linked,
        "license report finished"
    );

    Ok(())
}
