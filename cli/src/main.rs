//! CLI entrypoint for survey-creator
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use survey_application::{
    BuildSurveyUseCase, ClipboardPort, ExportSurveyUseCase, HostNotifier, NoHostNotifier,
};
use survey_domain::{
    BusinessContext, CategoryKey, ExportVariant, GapSource, SurveySession, SurveyTemplate,
};
use survey_infrastructure::{
    CommandClipboard, ConfigLoader, FileConfig, JsonlHostNotifier, LocalSurveyWriter,
    UnavailableClipboard,
};
use survey_presentation::{
    Cli, ConsoleFormatter, OutputFormat, ReplConfig, ResizeTracker, SurveyRepl,
};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Held until exit so buffered log lines reach the file
    let _log_guard = init_logging(&cli)?;

    info!("Starting survey-creator");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    for issue in config.validate() {
        if issue.is_error() {
            error!("{}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let (policy, _) = config.engine.to_policy();

    if cli.list {
        print!(
            "{}",
            ConsoleFormatter::format_categories(&BusinessContext::new(), &policy)
        );
        print!("{}", ConsoleFormatter::format_templates(None));
        return Ok(());
    }

    if cli.tips {
        print!("{}", ConsoleFormatter::format_tips());
        return Ok(());
    }

    // === Dependency Injection ===
    let mut builder = match cli.seed {
        Some(seed) => BuildSurveyUseCase::with_seed(policy, seed),
        None => BuildSurveyUseCase::new(policy),
    };

    let clipboard: Arc<dyn ClipboardPort> = match CommandClipboard::detect() {
        Some(clipboard) => Arc::new(clipboard),
        None => Arc::new(UnavailableClipboard),
    };
    let exporter = ExportSurveyUseCase::new(clipboard, Arc::new(LocalSurveyWriter::new()));
    let notifier = host_notifier(&cli, &config);
    let gap: GapSource = cli.gap.parse()?;
    let session = SurveySession::new(build_context(&cli)?);

    if !cli.is_one_shot() {
        let repl_config = ReplConfig {
            show_preview: config.repl.show_preview,
            history_file: config.repl.history_file.as_ref().map(PathBuf::from),
            export_dir: export_dir(&config, None),
        };
        let mut repl = SurveyRepl::new(builder, exporter)
            .with_session(session)
            .with_config(repl_config)
            .with_gap(gap)
            .with_host_notifier(notifier);
        repl.run().await?;
        return Ok(());
    }

    // One-shot mode
    let mut session = session;
    let summary = match &cli.template {
        Some(template) => {
            let template: SurveyTemplate = template.parse()?;
            builder.apply_template(&mut session, template)
        }
        None => builder.generate(&mut session)?,
    };
    if cli.select_all {
        session.select_all();
    }

    if !cli.quiet {
        eprintln!("{}", ConsoleFormatter::format_summary(&summary));
    }

    let format = cli.format.unwrap_or(match config.output.format {
        Some(ExportVariant::Clipboard) => OutputFormat::Clipboard,
        _ => OutputFormat::Full,
    });
    let output = match format {
        OutputFormat::Full => exporter.render(&session, ExportVariant::Full),
        OutputFormat::Clipboard => exporter.render(&session, ExportVariant::Clipboard),
        OutputFormat::Json => ConsoleFormatter::format_json(&session),
    };
    println!("{}", output);
    ResizeTracker::new(notifier).observe(&output);

    if let Some(dir) = &cli.export {
        let dir = export_dir(&config, Some(dir));
        let path = exporter.export_to_file(&session, &dir)?;
        if !cli.quiet {
            eprintln!("Survey saved to {}", path.display());
        }
    }

    if cli.copy {
        let notice = exporter.copy_to_clipboard(&session).await?;
        eprintln!("{}", notice.message());
    }

    Ok(())
}

fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match (cli.quiet, cli.verbose) {
        (true, _) => EnvFilter::new("error"),
        (false, 0) => EnvFilter::new("warn"),
        (false, 1) => EnvFilter::new("info"),
        (false, 2) => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match &cli.log_file {
        Some(path) => {
            let Some(file_name) = path.file_name() else {
                bail!("Invalid log file path: {}", path.display());
            };
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

fn build_context(cli: &Cli) -> Result<BusinessContext> {
    let mut context = BusinessContext::new();
    if let Some(business_type) = &cli.business_type {
        context = context.with_business_type(business_type.parse()?);
    }
    if let Some(industry) = &cli.industry {
        context = context.with_industry(industry.as_str());
    }
    if let Some(product) = &cli.product {
        context = context.with_product_service(product.as_str());
    }
    let categories = cli
        .category
        .iter()
        .map(|c| c.parse::<CategoryKey>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(context.with_categories(categories))
}

/// Directory for exported files. A bare `--export` defers to the config.
fn export_dir(config: &FileConfig, flag: Option<&PathBuf>) -> PathBuf {
    let configured = config.output.export_dir.as_ref().map(PathBuf::from);
    match flag {
        Some(dir) if dir.as_path() != Path::new(".") => dir.clone(),
        _ => configured.unwrap_or_else(|| PathBuf::from(".")),
    }
}

fn host_notifier(cli: &Cli, config: &FileConfig) -> Arc<dyn HostNotifier> {
    let path = cli
        .host_messages
        .clone()
        .or_else(|| config.embed.host_messages.as_ref().map(PathBuf::from));
    match path.and_then(JsonlHostNotifier::new) {
        Some(notifier) => {
            info!("Posting host messages to {}", notifier.path().display());
            Arc::new(notifier)
        }
        None => Arc::new(NoHostNotifier),
    }
}
