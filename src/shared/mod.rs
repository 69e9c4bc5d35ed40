//! Geteilte Hilfen ohne Solver-Abhängigkeit.
//!
//! Enthält Bézier-Geometrie und die Laufzeit-Konfiguration, die von
//! Pfad-Aufbau, I/O und CLI gemeinsam genutzt werden.

pub mod bezier_geometry;
pub mod options;

pub use options::{OutputFormat, SolverOptions};
