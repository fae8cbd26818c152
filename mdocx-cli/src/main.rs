// ABOUTME: Main entry point for the mdocx CLI application
// ABOUTME: Parses arguments, loads configuration, and dispatches to commands

use anyhow::{Context, Result};
use clap::Parser;
use mdocx_cli::browse::{self, BrowseOptions};
use mdocx_cli::cli::{build_cli, Cli, Commands};
use mdocx_cli::cli_output::{error_hints, CliOutput};
use mdocx_cli::completions::generate_completions;
use mdocx_cli::config::{BrowseOverrides, Config};
use mdocx_cli::image_protocols::TerminalCapabilities;
use mdocx_cli::inspect::{InspectSummary, JsonFormatter, SummaryFormat, TextFormatter};
use mdocx_cli::opener::BundleOpener;
use mdocx_cli::validate::ValidationReport;
use mdocx_cli::version::BuildInfo;
use mdocx_sdk::DecodeOptions;
use std::env;
use std::io::IsTerminal;
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Determine if color should be used
    let use_color = !cli.no_color
        && env::var("NO_COLOR").is_err()
        && env::var("TERM").unwrap_or_default() != "dumb";

    let output = if use_color {
        CliOutput::new()
    } else {
        CliOutput::with_color(false)
    };

    if let Err(e) = run(cli, use_color) {
        output.error(&format!("{:#}", e));
        for hint in error_hints(&e) {
            output.hint(hint);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, use_color: bool) -> Result<()> {
    match cli.command {
        Commands::Browse {
            path,
            strict,
            no_images,
            theme,
        } => {
            let settings = Config::load().browse_settings(&BrowseOverrides {
                theme,
                strict,
                no_images,
            });
            log::debug!("Browse settings: {:?}", settings);

            let opened = open_bundle(&path, settings.strict)?;
            let capabilities = TerminalCapabilities::detect();
            let options = BrowseOptions {
                theme: settings.theme,
                images_enabled: settings.images && capabilities.supports_inline_images(),
            };
            browse::run(opened.document, opened.header, options)
        }
        Commands::Inspect { path, json } => {
            let strict = Config::load().strict.unwrap_or(true);
            let opened = open_bundle(&path, strict)?;
            let summary = InspectSummary::new(&opened.document, opened.header);

            let text = if json {
                JsonFormatter.format_summary(&summary)?
            } else {
                TextFormatter::new(use_color && std::io::stdout().is_terminal())
                    .format_summary(&summary)?
            };
            println!("{}", text);
            Ok(())
        }
        Commands::Validate { path, json, strict } => {
            let strict = strict.or(Config::load().strict).unwrap_or(true);
            let report =
                ValidationReport::for_path(&BundleOpener::new(), &path, &DecodeOptions { strict });

            let text = if json {
                report.to_json()?
            } else {
                report.to_text(use_color && std::io::stdout().is_terminal())
            };
            if !text.is_empty() {
                println!("{}", text);
            }

            match report.failure() {
                Some(message) => Err(anyhow::anyhow!(message)),
                None => Ok(()),
            }
        }
        Commands::Version => {
            println!("{}", BuildInfo::current().render());
            Ok(())
        }
        Commands::Completions { shell } => {
            let mut cmd = build_cli();
            generate_completions(shell, &mut cmd, &mut std::io::stdout());
            Ok(())
        }
    }
}

fn open_bundle(path: &Path, strict: bool) -> Result<mdocx_cli::opener::OpenedBundle> {
    BundleOpener::new()
        .open(path, &DecodeOptions { strict })
        .with_context(|| format!("Failed to open bundle {}", path.display()))
}
