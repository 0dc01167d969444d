use chromox_core::{summarize, RegionType, VariantStatus, VERSION};
use chromox_render::palette::{color_for_key, region_color, status_color};
use chromox_render::IdeogramRenderer;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

mod config;
mod error;
mod input;

use config::Config;
use error::{print_error_and_exit, CliError, CliResult};

#[derive(Parser)]
#[command(name = "chromox")]
#[command(about = "ChromoX - Chromosome ideogram rendering")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./chromox.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an ideogram SVG from an annotation and variant list
    Render {
        /// Annotation JSON file
        #[arg(short, long)]
        annotation: PathBuf,

        /// Variant JSON file
        #[arg(long)]
        variants: Option<PathBuf>,

        /// Output SVG file
        #[arg(short, long)]
        output: PathBuf,

        /// Also write the stats fragment to this file
        #[arg(long)]
        stats: Option<PathBuf>,

        /// Title override
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Print summary statistics for an annotation and variant list
    Stats {
        /// Annotation JSON file
        #[arg(short, long)]
        annotation: PathBuf,

        /// Variant JSON file
        #[arg(long)]
        variants: Option<PathBuf>,

        /// Print as JSON instead of a single text line
        #[arg(long)]
        json: bool,
    },

    /// Show display colors, or resolve one region type / status key
    Palette {
        /// Key to resolve, e.g. AMPLICONIC or NOVEL
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Configuration helpers
    Config {
        /// Print an example chromox.toml
        #[arg(long)]
        example: bool,

        /// Write the default configuration to this file
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli) {
        print_error_and_exit(&e);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Render { annotation, variants, output, stats, title } => {
            let config = load_config(cli.config.as_deref())?;
            cmd_render(&config, &annotation, variants.as_deref(), &output, stats, title.as_deref())
        }
        Commands::Stats { annotation, variants, json } => cmd_stats(&annotation, variants.as_deref(), json),
        Commands::Palette { key } => {
            cmd_palette(key.as_deref());
            Ok(())
        }
        Commands::Config { example, write } => cmd_config(example, write.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> CliResult<Config> {
    Config::load(path).map_err(|e| CliError::config(format!("{:#}", e)))
}

fn cmd_render(
    config: &Config,
    annotation_path: &Path,
    variants_path: Option<&Path>,
    output: &Path,
    stats_path: Option<PathBuf>,
    title: Option<&str>,
) -> CliResult<()> {
    let annotation = input::load_annotation(annotation_path)?;
    let variants = input::load_variants(variants_path)?;

    let provenance = format!(
        "ChromoX v{} | {} | Generated: {}",
        VERSION,
        annotation_path.display(),
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    let renderer = IdeogramRenderer::new(config.render_options(title, Some(provenance)));
    let document = renderer.render(&annotation, &variants)?;
    std::fs::write(output, &document)?;
    log::info!("Wrote ideogram to {} ({} bytes)", output.display(), document.len());

    let stats_path = stats_path.or_else(|| config.output.write_stats.then(|| output.with_extension("stats.html")));
    if let Some(path) = stats_path {
        let summary = summarize(&annotation, &variants);
        std::fs::write(&path, summary.to_html())?;
        log::info!("Wrote stats to {}", path.display());
    }

    Ok(())
}

fn cmd_stats(annotation_path: &Path, variants_path: Option<&Path>, json: bool) -> CliResult<()> {
    let annotation = input::load_annotation(annotation_path)?;
    let variants = input::load_variants(variants_path)?;
    let summary = summarize(&annotation, &variants);

    if json {
        let text = serde_json::to_string_pretty(&summary).map_err(|e| CliError::io(e.to_string()))?;
        println!("{}", text);
    } else {
        println!("{}", summary);
    }
    Ok(())
}

fn cmd_palette(key: Option<&str>) {
    if let Some(key) = key {
        println!("{}\t{}", key, color_for_key(key));
        return;
    }
    for region_type in RegionType::ALL {
        println!("{}\t{}\t{}", region_type.key(), region_color(region_type), region_type.label());
    }
    for status in VariantStatus::ALL {
        println!("{}\t{}\t{}", status.as_str(), status_color(status), status.label());
    }
}

fn cmd_config(example: bool, write: Option<&Path>) -> CliResult<()> {
    if let Some(path) = write {
        Config::default()
            .save_to_file(path)
            .map_err(|e| CliError::config(format!("{:#}", e)))?;
        log::info!("Wrote default configuration to {}", path.display());
    }
    if example {
        let text = Config::example_toml().map_err(|e| CliError::config(format!("{:#}", e)))?;
        print!("{}", text);
    } else if write.is_none() {
        println!("Use --example to print a sample {}", config::DEFAULT_CONFIG_FILE);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn render_writes_svg_and_stats() {
        let dir = tempdir().unwrap();
        let annotation = dir.path().join("chrY.json");
        let variants = dir.path().join("variants.json");
        let output = dir.path().join("chrY.svg");
        let stats = dir.path().join("chrY.html");
        std::fs::write(&annotation, r#"{"length": 57227415, "regions": {"PAR": [{"start": 10001, "end": 2781479}]}}"#)
            .unwrap();
        std::fs::write(&variants, r#"[{"position": 2887824, "status": "CONFIRMED", "label": "M42"}]"#).unwrap();

        cmd_render(&Config::default(), &annotation, Some(variants.as_path()), &output, Some(stats.clone()), Some("chrY"))
            .unwrap();

        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.contains("M42 (CONFIRMED)"));
        assert!(svg.contains("chrY"));
        assert!(!svg.contains("Generated:"));
        let html = std::fs::read_to_string(&stats).unwrap();
        assert!(html.contains("<b>Confirmed:</b> 1"));
    }

    #[test]
    fn render_rejects_zero_length() {
        let dir = tempdir().unwrap();
        let annotation = dir.path().join("empty.json");
        std::fs::write(&annotation, r#"{"length": 0}"#).unwrap();
        let err = cmd_render(&Config::default(), &annotation, None, &dir.path().join("out.svg"), None, None)
            .unwrap_err();
        assert!(matches!(err, CliError::Rendering(_)));
        assert!(!dir.path().join("out.svg").exists());
    }

    #[test]
    fn write_stats_config_derives_path() {
        let dir = tempdir().unwrap();
        let annotation = dir.path().join("chrY.json");
        std::fs::write(&annotation, r#"{"length": 1000}"#).unwrap();
        let mut config = Config::default();
        config.output.write_stats = true;
        let output = dir.path().join("chrY.svg");

        cmd_render(&config, &annotation, None, &output, None, None).unwrap();
        assert!(dir.path().join("chrY.stats.html").exists());
    }

    #[test]
    fn config_write_round_trips_through_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(config::DEFAULT_CONFIG_FILE);
        cmd_config(false, Some(&path)).unwrap();
        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.render.title, "Chromosome Ideogram");
    }

    #[test]
    fn missing_config_file_is_a_config_error() {
        let err = load_config(Some(Path::new("/nonexistent/chromox.toml"))).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }
}
