//! # Deckart CLI
//!
//! Shell front end for the seed art engine and the card image renderer.
//!
//! ## Usage
//!
//! ```bash
//! deckart art --title "Test Title" --category brief > art.svg
//! deckart render card.json --out story.png
//! deckart share card.json --dir exports/
//! ```
//!
//! Cards are read as JSON (`-` reads stdin) in the feed's shape:
//! `title`, `body`, `category`, `emoji`, `label`, `sourceName`, `image`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use deckart_core::{generate, Card, DEFAULT_CATEGORY};
use deckart_renderer::{
    CardImageRenderer, DirectoryDownloadSink, ExportOutcome, NoShareTarget, RasterFormat,
    RenderConfig,
};

/// Command-line arguments for deckart.
#[derive(Debug, Clone, Parser)]
#[command(name = "deckart")]
#[command(about = "Deterministic card art and shareable story images")]
#[command(version)]
pub struct CliArgs {
    /// Brand name used in the card header and export filenames
    #[arg(long, global = true, env = "DECKART_BRAND", default_value = "deckart")]
    pub brand: String,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print a title's seeded art as inline SVG
    Art {
        /// Card title (empty is allowed)
        #[arg(long, default_value = "")]
        title: String,

        /// Category key (defaults to "brief")
        #[arg(long)]
        category: Option<String>,

        /// Print the scene description as JSON instead of SVG
        #[arg(long)]
        json: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Render a card to a story image
    Render {
        /// Card JSON file, or `-` for stdin
        card: PathBuf,

        /// Output file (defaults to the suggested filename)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Image format
        #[arg(long, value_enum, default_value_t = Format::Png)]
        format: Format,

        /// Renderer options
        #[command(flatten)]
        render: RenderArgs,
    },

    /// Render a card and share it, downloading into a directory when
    /// sharing is unavailable
    Share {
        /// Card JSON file, or `-` for stdin
        card: PathBuf,

        /// Download directory
        #[arg(long, env = "DECKART_OUTPUT_DIR", default_value = ".")]
        dir: PathBuf,

        /// Renderer options
        #[command(flatten)]
        render: RenderArgs,
    },
}

/// Renderer options shared by `render` and `share`.
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Maximum visible body lines
    #[arg(long, env = "DECKART_MAX_BODY_LINES")]
    pub max_body_lines: Option<usize>,

    /// Skip loading system fonts (text is laid out but not painted)
    #[arg(long)]
    pub no_system_fonts: bool,
}

impl RenderArgs {
    /// Build a render configuration.
    #[must_use]
    pub fn to_config(&self, brand: &str) -> RenderConfig {
        let defaults = RenderConfig::default();
        RenderConfig {
            brand_name: brand.to_string(),
            footer_text: format!("Your daily deck \u{2022} {brand}"),
            max_body_lines: self.max_body_lines.unwrap_or(defaults.max_body_lines),
            load_system_fonts: !self.no_system_fonts,
            ..defaults
        }
    }
}

/// Image formats selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// PNG
    Png,
    /// JPEG
    Jpeg,
}

impl From<Format> for RasterFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Png => Self::Png,
            Format::Jpeg => Self::Jpeg,
        }
    }
}

/// Read a card from a JSON file, or stdin for `-`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not a card.
pub fn read_card(path: &Path) -> anyhow::Result<Card> {
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading card from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading card from {}", path.display()))?
    };
    Card::from_json(&json).with_context(|| format!("parsing card {}", path.display()))
}

fn write_or_print(out: Option<&Path>, contents: &[u8]) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, contents)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = contents.len(), "wrote output");
        }
        None => {
            use std::io::Write;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents).context("writing to stdout")?;
            stdout.write_all(b"\n").context("writing to stdout")?;
        }
    }
    Ok(())
}

/// Run a parsed command line.
///
/// # Errors
///
/// Returns an error if input cannot be read, rendering fails, or output
/// cannot be written.
pub async fn run(args: CliArgs) -> anyhow::Result<()> {
    match args.command {
        Command::Art {
            title,
            category,
            json,
            out,
        } => {
            let scene = generate(&title, category.as_deref().unwrap_or(DEFAULT_CATEGORY));
            let output = if json {
                scene.to_json().context("serializing scene")?
            } else {
                scene.to_svg()
            };
            write_or_print(out.as_deref(), output.as_bytes())
        }

        Command::Render {
            card,
            out,
            format,
            render,
        } => {
            let card = read_card(&card)?;
            let renderer = CardImageRenderer::new(render.to_config(&args.brand));
            let format = RasterFormat::from(format);
            let image = renderer
                .render_as(&card, format)
                .context("rendering card image")?;
            let out = out.unwrap_or_else(|| PathBuf::from(renderer.filename_for(&card, format)));
            write_or_print(Some(&out), &image.bytes)
        }

        Command::Share { card, dir, render } => {
            let card = read_card(&card)?;
            let renderer = CardImageRenderer::new(render.to_config(&args.brand));
            let sink = DirectoryDownloadSink::new(dir);
            match renderer
                .export_or_share(&card, &NoShareTarget, &sink)
                .await
                .context("exporting card")?
            {
                ExportOutcome::Downloaded { location } => println!("{}", location.display()),
                ExportOutcome::Shared => println!("shared"),
                ExportOutcome::Cancelled => {}
            }
            Ok(())
        }
    }
}
