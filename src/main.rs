//! qrbatch command-line entrypoint

use anyhow::Context;
use clap::Parser;
use qrbatch::batch::effective_count;
use qrbatch::{Generator, GeneratorOptions, QrBatchConfig, UrlSigner, logging};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "qrbatch",
    version,
    about = "Generate numbered QR code labels and a CSV manifest"
)]
struct Cli {
    /// Prefix prepended to each identifier, e.g. https://example.fr/scan?qr=
    #[arg(long, value_name = "URL")]
    base_url: String,

    /// Number of codes to generate (default 100); zero or negative writes only the manifest header
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    count: Option<i64>,

    /// Output directory, created if missing (default ./qr_output)
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Optional configuration file (toml/yaml). Defaults to qrbatch.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// HMAC secret; adds a `sig` query parameter to every URL (`?sig=` when the URL has no query yet) and a `sig` manifest column
    #[arg(long, value_name = "SECRET")]
    secret: Option<String>,

    /// Decode every written image and fail if it does not match its URL
    #[arg(long)]
    verify: bool,

    /// Print the run summary as JSON instead of a sentence
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = QrBatchConfig::load(cli.config.as_deref())?;
    let _log_guard = logging::init(&config.logging)?;

    match &config.source {
        Some(path) => info!("Using configuration file: {}", path.display()),
        None => debug!("No qrbatch.toml / qrbatch.yaml found, using defaults"),
    }

    let count = effective_count(cli.count.unwrap_or(config.batch.count))?;

    let signer = cli
        .secret
        .or(config.signing.secret)
        .map(UrlSigner::new)
        .transpose()?;

    let options = GeneratorOptions {
        base_url: cli.base_url,
        count,
        out_dir: cli.out.unwrap_or(config.batch.out_dir),
        signer,
        verify: cli.verify || config.batch.verify,
    };
    debug!(?options, "Resolved generator options");

    let out_dir = options.out_dir.clone();
    let summary = Generator::new(options)?
        .run()
        .with_context(|| format!("QR batch generation in {} failed", out_dir.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!("{}", summary.message());
    }

    Ok(())
}
