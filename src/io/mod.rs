//! Ein-/Ausgabe für Knotenfolgen und Segmente.
//!
//! Knoten werden als Text eingelesen (ein Punkt pro Zeile), Segmente als
//! JSON, Text, SVG-Pfaddaten oder abgetastete Polyline ausgegeben.

pub mod parser;
pub mod writer;

pub use parser::{parse_knots, read_knots_file};
pub use writer::write_segments;
