//! sesh CLI: hieroglyphic sign-catalog pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use sesh_medu::catalog::gardiner;
use sesh_medu::config::PipelineConfig;
use sesh_medu::scroll::{self, ScrollOptions};
use sesh_medu::{export, pipeline};

#[derive(Parser)]
#[command(name = "sesh", version, about = "Hieroglyphic sign-catalog pipeline")]
struct Cli {
    /// Configuration file (TOML); CLI flags override its values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: parse, render, export, archive, summarize.
    Run {
        /// Directory with the .txt catalog sources.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Directory receiving all outputs.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Placeholder image edge length in pixels.
        #[arg(long)]
        image_size: Option<u32>,

        /// Re-render images that already exist.
        #[arg(long)]
        overwrite: bool,

        /// Font file to try first (repeatable; prepended to the fallback list).
        #[arg(long = "font")]
        fonts: Vec<PathBuf>,
    },

    /// Parse the sources and print the record set as JSON.
    Parse {
        /// Directory with the .txt catalog sources.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Sort records by Gardiner key for display.
        #[arg(long)]
        sort: bool,
    },

    /// Render a sequence of sign codes as a text scroll.
    Scroll {
        /// Path to a previously produced Signs_Master.json.
        #[arg(long)]
        master: PathBuf,

        /// Comma-separated sign codes (e.g. "A1,G17,D21").
        #[arg(long)]
        codes: String,

        /// Stack glyphs vertically, one per line.
        #[arg(long)]
        vertical: bool,

        /// Title line printed before the glyphs.
        #[arg(long)]
        title: Option<String>,

        /// Write the scroll to a file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Regenerate a human-readable text catalog from the master JSON.
    Catalog {
        /// Path to a previously produced Signs_Master.json.
        #[arg(long)]
        master: PathBuf,

        /// Output path for the text catalog.
        #[arg(long, default_value = "complete_catalog.txt")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let base_config = match &cli.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };

    match cli.command {
        Commands::Run {
            input,
            output,
            image_size,
            overwrite,
            fonts,
        } => {
            let mut config = base_config;
            if let Some(input) = input {
                config.input_dir = input;
            }
            if let Some(output) = output {
                config.output_dir = output;
            }
            if let Some(size) = image_size {
                config.image_size = size;
            }
            if overwrite {
                config.overwrite = true;
            }
            if !fonts.is_empty() {
                let mut paths = fonts;
                paths.extend(config.font_paths);
                config.font_paths = paths;
            }

            let summary = pipeline::run(&config)?;
            println!("{}", summary.report());
        }

        Commands::Parse { input, sort } => {
            let mut config = base_config;
            if let Some(input) = input {
                config.input_dir = input;
            }
            config.validate()?;

            let (_, mut records) = pipeline::parse_sources(&config)?;
            if sort {
                records.sort_by_key(|r| gardiner::sort_key(&r.code));
            }
            let json = serde_json::to_string_pretty(&records).into_diagnostic()?;
            println!("{json}");
        }

        Commands::Scroll {
            master,
            codes,
            vertical,
            title,
            output,
        } => {
            let records = export::load_records(&master)?;
            let map = scroll::sign_map(&records);
            let code_list: Vec<String> = codes
                .split(',')
                .map(|code| code.trim().to_string())
                .filter(|code| !code.is_empty())
                .collect();
            let options = ScrollOptions { vertical, title };
            let rendered = scroll::render_scroll(&map, &code_list, &options);

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered).into_diagnostic()?;
                    println!("Scroll written to {}", path.display());
                }
                None => println!("{rendered}"),
            }
        }

        Commands::Catalog { master, output } => {
            let records = export::load_records(&master)?;
            export::write_catalog_text(&output, &records)?;
            println!(
                "Catalog with {} signs written to {}",
                records.len(),
                output.display()
            );
        }
    }

    Ok(())
}
