//! Part-of-speech annotation: explicit-tag parsing, surface-form heuristics
//! and label extraction for stored meanings.

pub mod heuristics;
pub mod labels;
pub mod parse;
pub mod tags;

pub use heuristics::guess_pos;
pub use labels::{extract_pos_labels, prepare_entry, strip_pos_markers};
pub use parse::{check_incomplete, parse_pos_input, IncompletePosInput, PosGroup, PosWordMap};
pub use tags::{canonical_label, canonical_pos, PartOfSpeech};
