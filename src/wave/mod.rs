//! Path waveform distortion
//!
//! Path text is handled as text: numbers are found, nudged and written back
//! in place. No path grammar is involved.

pub mod cache;
pub mod distort;
pub mod token;

pub use cache::BaselineCache;
pub use distort::{PathWaveDistorter, format_number, wave_offset};
pub use token::{Axis, PathToken, tokenize};
