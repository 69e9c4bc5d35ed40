//! Lieferanten für Knotenfolgen.
//!
//! `KnotSource` ersetzt den Callback-basierten Datenlieferanten einer View:
//! Aufrufer holen sich die Knoten und reichen sie direkt an den Solver weiter.

use glam::DVec2;

/// Standard-Maximalwert einer Datenreihe (Byte-Werte).
pub const DEFAULT_VALUE_MAX: f64 = 255.0;

/// Beispiel-Datenreihe (symmetrisches Tal).
pub const DEMO_VALUES: [f64; 7] = [252.0, 220.0, 101.0, 2.0, 101.0, 220.0, 252.0];

/// Liefert eine geordnete Knotenfolge.
pub trait KnotSource {
    fn knots(&self) -> Vec<DVec2>;
}

impl<F> KnotSource for F
where
    F: Fn() -> Vec<DVec2>,
{
    fn knots(&self) -> Vec<DVec2> {
        self()
    }
}

/// Eindimensionale Datenreihe, gleichmäßig über eine Fläche verteilt.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// Rohwerte in Reihenfolge
    pub values: Vec<f64>,
    /// Wert, der auf die volle Höhe abgebildet wird
    pub value_max: f64,
}

impl ChartSeries {
    /// Erstellt eine Datenreihe mit `DEFAULT_VALUE_MAX`.
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            value_max: DEFAULT_VALUE_MAX,
        }
    }

    /// Die eingebaute Beispiel-Datenreihe.
    pub fn demo() -> Self {
        Self::new(DEMO_VALUES.to_vec())
    }

    /// Skaliert die Werte in eine Fläche der Größe `width × height`.
    ///
    /// x = i / (n-1) · width, y = value / value_max · height.
    /// Ein einzelner Wert landet bei x = 0.
    pub fn knots_in(&self, width: f64, height: f64) -> Vec<DVec2> {
        let steps = self.values.len().saturating_sub(1).max(1) as f64;
        let value_max = if self.value_max.abs() > f64::EPSILON {
            self.value_max
        } else {
            log::warn!("ChartSeries: value_max ist 0, verwende {}", DEFAULT_VALUE_MAX);
            DEFAULT_VALUE_MAX
        };

        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| DVec2::new(i as f64 / steps * width, v / value_max * height))
            .collect()
    }

    /// Bindet die Datenreihe an eine feste Fläche.
    pub fn in_view(&self, width: f64, height: f64) -> ScaledChart<'_> {
        ScaledChart {
            series: self,
            size: DVec2::new(width, height),
        }
    }
}

/// Datenreihe mit fester Zielgröße, als `KnotSource` nutzbar.
#[derive(Debug, Clone, Copy)]
pub struct ScaledChart<'a> {
    series: &'a ChartSeries,
    size: DVec2,
}

impl KnotSource for ScaledChart<'_> {
    fn knots(&self) -> Vec<DVec2> {
        self.series.knots_in(self.size.x, self.size.y)
    }
}
