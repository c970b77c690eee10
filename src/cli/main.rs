use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::BufRead;
use std::path::PathBuf;

use exif_dump::config::{self, ByteOrderSetting};
use exif_dump::display;
use exif_dump::exif::{ContainerReader, tag_name};
use exif_dump::pipeline::{self, ImageReport};

#[derive(Parser, Debug)]
#[command(
    name = "exif-dump",
    version,
    about = "Decode embedded EXIF property records into readable tag/value pairs"
)]
struct Cli {
    /// Image files or directories to scan
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Path to config file (default: config.json next to binary)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Initialize a default config.json and exit
    #[arg(long)]
    init: bool,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Report dropped bytes and tags that disagree with the tag registry
    #[arg(long)]
    lint: bool,

    /// Wait for Enter after each image
    #[arg(long)]
    pause: bool,

    /// Byte order for multi-byte values
    #[arg(long, value_enum, value_name = "ORDER")]
    byte_order: Option<ByteOrderArg>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ByteOrderArg {
    Auto,
    Little,
    Big,
}

impl From<ByteOrderArg> for ByteOrderSetting {
    fn from(arg: ByteOrderArg) -> Self {
        match arg {
            ByteOrderArg::Auto => Self::Auto,
            ByteOrderArg::Little => Self::Little,
            ByteOrderArg::Big => Self::Big,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Handle --init
    if cli.init {
        let config = config::Config::default();
        let path = cli.config.as_deref();
        config.save(path)?;
        let save_path = match path {
            Some(p) => p.to_path_buf(),
            None => config::Config::config_path()?,
        };
        println!("Default config written to {}", save_path.display());
        return Ok(());
    }

    if cli.paths.is_empty() {
        anyhow::bail!("No input files or directories specified. Use --help for usage.");
    }

    // Load config, then apply CLI overrides
    let mut config = config::Config::load(cli.config.as_deref())?;
    if cli.lint {
        config.decode.lint = true;
    }
    if cli.pause {
        config.display.pause_between_files = true;
    }
    if let Some(order) = cli.byte_order {
        config.decode.byte_order = order.into();
    }

    let images = pipeline::collect_images(&cli.paths);
    if images.is_empty() {
        anyhow::bail!("No supported image files found in the specified paths.");
    }
    log::info!("Found {} image(s)", images.len());

    let mut results = Vec::new();
    let total = images.len();
    let stdin = std::io::stdin();

    for (i, image_path) in images.iter().enumerate() {
        log::debug!("[{}/{}] Reading: {}", i + 1, total, image_path.display());

        let report = pipeline::read_image(image_path, &ContainerReader, &config);

        if !cli.json {
            print_report(&report, &config);
            if config.display.pause_between_files && i + 1 < total {
                println!("Press Enter for next");
                let mut line = String::new();
                stdin.lock().read_line(&mut line)?;
            }
        }

        results.push(report);
    }

    // JSON output
    if cli.json {
        let json_results: Vec<serde_json::Value> = results
            .iter()
            .map(|r| {
                let tags: Vec<serde_json::Value> = r
                    .tags
                    .iter()
                    .map(|(id, value)| {
                        serde_json::json!({
                            "id": id,
                            "tag": tag_name(*id),
                            "value": value,
                        })
                    })
                    .collect();
                serde_json::json!({
                    "path": r.path.display().to_string(),
                    "kind": r.kind.map(|k| k.label()),
                    "width": r.width,
                    "height": r.height,
                    "resolution": r.resolution,
                    "bits_per_pixel": r.bits_per_pixel,
                    "byte_order": r.byte_order,
                    "tags": tags,
                    "diagnostics": r.diagnostics,
                    "error": r.error,
                })
            })
            .collect();

        println!("{}", serde_json::to_string_pretty(&json_results)?);
    }

    // Summary
    let success = results.iter().filter(|r| r.error.is_none()).count();
    let failed = total - success;
    log::info!("Done: {success} decoded, {failed} failed out of {total} images");

    Ok(())
}

/// Print the summary line and every visible tag of one image.
fn print_report(report: &ImageReport, config: &config::Config) {
    if let Some(ref err) = report.error {
        log::error!("{}: {err}", report.path.display());
        return;
    }

    println!(
        "{}",
        display::summary_line(report, &config.display.date_tags)
    );
    for row in display::visible_rows(&report.tags, &config.display.hidden_tags) {
        println!("\t{row}");
    }
    if report.tags.is_empty() {
        println!("\t(no EXIF metadata found)");
    }
}
