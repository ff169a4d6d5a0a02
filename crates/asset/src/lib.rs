//! Asset loaders for the extruder.
//! Control points come from plain text point lists.

pub mod points;

pub use points::{LoaderConfig, load_points_from_path, load_points_from_reader, load_points_from_str};
