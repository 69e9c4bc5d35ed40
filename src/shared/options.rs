//! Zentrale Konfiguration für smooth-bezier.
//!
//! `SolverOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Zielfläche ──────────────────────────────────────────────────────

/// Standard-Breite der Zielfläche für Datenreihen.
pub const VIEW_WIDTH: f64 = 600.0;
/// Standard-Höhe der Zielfläche für Datenreihen.
pub const VIEW_HEIGHT: f64 = 400.0;
/// Wert, der auf die volle Höhe abgebildet wird.
pub const VALUE_MAX: f64 = crate::core::DEFAULT_VALUE_MAX;

// ── Ausgabe ─────────────────────────────────────────────────────────

/// Nachkommastellen in Text- und SVG-Ausgabe.
pub const OUTPUT_PRECISION: usize = 3;
/// Zwischenpunkte pro Segment beim Abtasten zu einer Polyline.
pub const SAMPLES_PER_SEGMENT: usize = 16;

/// Ausgabeformat der berechneten Segmente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON-Array der Kontrollpunkt-Paare
    #[default]
    Json,
    /// Eine Zeile pro Segment
    Text,
    /// SVG-Pfaddaten (`M … C …`)
    Svg,
    /// Abgetastete Polyline, ein Punkt pro Zeile
    Polyline,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `smooth_bezier.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverOptions {
    // ── Zielfläche ──────────────────────────────────────────────
    /// Breite der Zielfläche für Datenreihen
    pub view_width: f64,
    /// Höhe der Zielfläche für Datenreihen
    pub view_height: f64,
    /// Maximalwert der Datenreihe (volle Höhe)
    #[serde(default = "default_value_max")]
    pub value_max: f64,

    // ── Ausgabe ─────────────────────────────────────────────────
    /// Nachkommastellen
    pub precision: usize,
    /// Zwischenpunkte pro Segment für `OutputFormat::Polyline`
    #[serde(default = "default_samples_per_segment")]
    pub samples_per_segment: usize,
    /// Standard-Ausgabeformat
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,
            value_max: VALUE_MAX,
            precision: OUTPUT_PRECISION,
            samples_per_segment: SAMPLES_PER_SEGMENT,
            output_format: OutputFormat::default(),
        }
    }
}

/// Serde-Default für `value_max` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_value_max() -> f64 {
    VALUE_MAX
}

/// Serde-Default für `samples_per_segment` (Abwärtskompatibilität).
fn default_samples_per_segment() -> usize {
    SAMPLES_PER_SEGMENT
}

impl SolverOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("smooth-bezier"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("smooth_bezier.toml")
    }

    /// Zwischenpunkte pro Segment, mindestens 1.
    pub fn effective_samples(&self) -> usize {
        self.samples_per_segment.max(1)
    }
}
