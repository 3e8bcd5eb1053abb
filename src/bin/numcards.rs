use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use sha2::Digest as _;

/// Render the numbered card deck (`card_00.png` .. `card_32.png`) as PNG files.
#[derive(Parser, Debug)]
#[command(name = "numcards", version)]
struct Cli {
    /// Output directory (created if missing).
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Font file to draw labels with, overriding the deck's font.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Deck parameters as JSON; missing fields use the stock deck.
    #[arg(long)]
    deck: Option<PathBuf>,

    /// Print the resolved font family and SHA-256 of the font bytes.
    #[arg(long)]
    dump_font: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut spec = match &cli.deck {
        Some(path) => numcards::DeckSpec::from_json_file(path)
            .with_context(|| format!("load deck '{}'", path.display()))?,
        None => numcards::DeckSpec::default(),
    };
    if let Some(font) = &cli.font {
        let Some(font) = font.to_str() else {
            anyhow::bail!("--font path '{}' is not valid UTF-8", font.display());
        };
        spec.font_source = font.to_string();
    }
    spec.validate()?;

    let font_path = Path::new(&spec.font_source);
    let font = numcards::PreparedFont::load(font_path)
        .with_context(|| format!("load font '{}'", font_path.display()))?;
    if cli.dump_font {
        dump_font_diagnostics(&font);
    }

    numcards::ensure_dir(&cli.out_dir)?;
    let report = numcards::write_deck(&spec, &font, &cli.out_dir)
        .with_context(|| format!("write deck into '{}'", cli.out_dir.display()))?;

    eprintln!(
        "wrote {} cards to {}",
        report.written.len(),
        cli.out_dir.display()
    );
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn dump_font_diagnostics(font: &numcards::PreparedFont) {
    eprintln!("font diagnostics:");
    eprintln!("  source:  {}", font.source().display());
    eprintln!("  family:  {}", font.family_name());
    eprintln!("  sha256:  {}", sha256_hex(font.bytes()));
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
