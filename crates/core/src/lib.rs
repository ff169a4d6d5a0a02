//! Core of the spline extruder: Catmull-Rom interpolation, cross-section frames
//! and tube mesh synthesis. Renderer-agnostic; math types come from glam.

use thiserror::Error;

pub use glam::{Vec2, Vec3, vec3};

pub mod config;
pub mod frame;
pub mod generator;
pub mod section;
pub mod sink;
pub mod spline;
pub mod tube;

pub use config::{ExtrudeConfig, MaterialRef};
pub use generator::{ExtrudeGenerator, RebuildSummary};
pub use section::{MeshSection, SectionKey, SegmentMesh};
pub use sink::{MeshSink, SectionStore};
pub use spline::{SplinePath, SplineSample, interpolate};
pub use tube::build_segment;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("sides per segment must be at least {min}, got {actual}")]
    TooFewSides { min: usize, actual: usize },

    #[error("segments per point must be at least {min}, got {actual}")]
    TooFewSegmentsPerPoint { min: usize, actual: usize },

    #[error("invalid extrude width: {0}")]
    InvalidWidth(f32),

    #[error("segment {index} is out of range for a path of {samples} samples")]
    SegmentOutOfRange { index: usize, samples: usize },
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_their_fields() {
        let err = CoreError::TooFewSides { min: 3, actual: 2 };
        assert_eq!(err.to_string(), "sides per segment must be at least 3, got 2");

        let err = CoreError::SegmentOutOfRange {
            index: 9,
            samples: 4,
        };
        assert!(err.to_string().contains("segment 9"));
    }
}
