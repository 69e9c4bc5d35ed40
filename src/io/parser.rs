//! Parser für Knoten-Textdateien.
//!
//! Ein Knoten pro Zeile, `x y` oder `x,y`. Leerzeilen und Zeilen mit `#`
//! am Anfang werden übersprungen.

use anyhow::{bail, Context, Result};
use glam::DVec2;

/// Parsed eine Knotenfolge aus Text.
pub fn parse_knots(content: &str) -> Result<Vec<DVec2>> {
    let mut knots = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();

        if fields.len() != 2 {
            bail!(
                "Zeile {}: erwartet 2 Koordinaten, gefunden {} ({:?})",
                line_no,
                fields.len(),
                line
            );
        }

        let x = parse_coordinate(fields[0], line_no)?;
        let y = parse_coordinate(fields[1], line_no)?;
        knots.push(DVec2::new(x, y));
    }

    log::debug!("{} Knoten eingelesen", knots.len());
    Ok(knots)
}

fn parse_coordinate(field: &str, line_no: usize) -> Result<f64> {
    let value: f64 = field
        .parse()
        .with_context(|| format!("Zeile {}: ungültige Koordinate {:?}", line_no, field))?;
    if !value.is_finite() {
        bail!("Zeile {}: Koordinate {:?} ist nicht endlich", line_no, field);
    }
    Ok(value)
}

/// Liest Knoten aus einer Datei, `-` steht für stdin.
pub fn read_knots_file(path: &str) -> Result<Vec<DVec2>> {
    let content = if path == "-" {
        std::io::read_to_string(std::io::stdin()).context("Fehler beim Lesen von stdin")?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Fehler beim Laden der Knoten-Datei: {}", path))?
    };
    parse_knots(&content)
}
