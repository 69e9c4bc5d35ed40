//! smooth-bezier CLI.
//!
//! Liest eine Knotenfolge (Datei, stdin oder eingebaute Beispiel-Reihe),
//! berechnet die Kontrollpunkte und gibt sie im gewählten Format aus.

use anyhow::{bail, Context, Result};
use clap::Parser;
use smooth_bezier::core::{ChartSeries, KnotSource};
use smooth_bezier::io::{read_knots_file, write_segments};
use smooth_bezier::{OutputFormat, SolverOptions, SplineSolver};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Glatte kubische Bézier-Kontrollpunkte durch eine Knotenfolge")]
struct Cli {
    /// Knoten-Datei (ein Punkt pro Zeile, `-` für stdin)
    file: Option<String>,

    /// Eingebaute Beispiel-Datenreihe statt einer Datei verwenden
    #[arg(long, conflicts_with = "file")]
    demo: bool,

    /// Ausgabeformat: json, text, svg oder polyline
    #[arg(short, long, value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Optionen-Datei (Standard: smooth_bezier.toml neben der Binary)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Breite der Zielfläche für --demo
    #[arg(long)]
    width: Option<f64>,

    /// Höhe der Zielfläche für --demo
    #[arg(long)]
    height: Option<f64>,

    /// Nachkommastellen der Ausgabe
    #[arg(short, long)]
    precision: Option<usize>,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    match s.to_lowercase().as_str() {
        "json" => Ok(OutputFormat::Json),
        "text" => Ok(OutputFormat::Text),
        "svg" => Ok(OutputFormat::Svg),
        "polyline" => Ok(OutputFormat::Polyline),
        _ => Err(format!(
            "unbekanntes Format \"{s}\": erwartet json, text, svg oder polyline"
        )),
    }
}

impl Cli {
    /// Lädt die Optionen-Datei und überschreibt sie mit CLI-Flags.
    fn options(&self) -> SolverOptions {
        let path = self.config.clone().unwrap_or_else(SolverOptions::config_path);
        let mut options = SolverOptions::load_from_file(&path);

        if let Some(width) = self.width {
            options.view_width = width;
        }
        if let Some(height) = self.height {
            options.view_height = height;
        }
        if let Some(precision) = self.precision {
            options.precision = precision;
        }
        if let Some(format) = self.format {
            options.output_format = format;
        }
        options
    }
}

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("smooth-bezier v{} startet...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let options = cli.options();

    let knots = match (&cli.file, cli.demo) {
        (Some(file), _) => read_knots_file(file)?,
        (None, true) => {
            let mut series = ChartSeries::demo();
            series.value_max = options.value_max;
            series
                .in_view(options.view_width, options.view_height)
                .knots()
        }
        (None, false) => bail!("Keine Eingabe: Knoten-Datei angeben oder --demo verwenden"),
    };

    log::info!("{} Knoten geladen", knots.len());

    let segments = SplineSolver::solve(&knots);
    let output = write_segments(&knots, &segments, options.output_format, &options)
        .context("Ausgabe konnte nicht formatiert werden")?;

    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
    Ok(())
}
