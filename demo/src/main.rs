//! pixbank demo - render bank pages from the component library
//!
//! Builds pages out of the stateless components and prints them as
//! HTML or plain text. The statement command seeds a full payment
//! flow first and renders the result.
//!
//! ## Usage
//!
//! ```bash
//! # A page around ad-hoc text content
//! pixbank-demo page --text "Bem-vindo ao pixbank"
//!
//! # Seed payments and render the account statement
//! pixbank-demo statement
//!
//! # Alternative themes and outputs
//! pixbank-demo statement --styles theme.json --out extrato.html
//! pixbank-demo statement --unstyled --format text
//! ```

mod seed;
mod views;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use pixbank_dom::{html, text_content};
use pixbank_ui::{StyleConfig, layout};

/// pixbank demo - render bank pages from the component library
#[derive(Parser)]
#[command(name = "pixbank-demo")]
#[command(about = "Render pixbank pages built from stateless components")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Style-class mapping file (JSON); stock classes when omitted
    #[arg(long, global = true)]
    styles: Option<PathBuf>,

    /// Render with an empty style mapping
    #[arg(long, global = true, conflicts_with = "styles")]
    unstyled: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Write the output to a file instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page layout around the given text content
    Page {
        /// A paragraph of content; repeat for several
        #[arg(long = "text")]
        texts: Vec<String>,
    },
    /// Seed a payment flow and render the account statement
    Statement,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pixbank_payments=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let styles = load_styles(&cli)?;

    let (title, children) = match &cli.command {
        Commands::Page { texts } => ("pixbank".to_string(), views::page(texts)),
        Commands::Statement => {
            let statement = seed::run().context("Failed to seed the payment flow")?;
            let title = format!("pixbank | Extrato de {}", statement.owner.name);
            (title, views::statement(&statement))
        }
    };

    let page = layout(&styles, children);
    let output = match cli.format {
        Format::Html => html::render_document(&title, &page),
        Format::Text => text_content(&page),
    };

    write_output(&cli.out, &output)
}

fn load_styles(cli: &Cli) -> Result<StyleConfig> {
    if cli.unstyled {
        return Ok(StyleConfig::unstyled());
    }
    match &cli.styles {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read style config {}", path.display()))?;
            serde_json::from_str(&data)
                .with_context(|| format!("Failed to parse style config {}", path.display()))
        }
        None => Ok(StyleConfig::default()),
    }
}

fn write_output(out: &Option<PathBuf>, output: &str) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} wrote {}", "✓".green().bold(), path.display().to_string().cyan());
        }
        None => print!("{output}"),
    }
    Ok(())
}
