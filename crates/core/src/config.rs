//! Generator configuration and the explicit shading resource handle.

use crate::{CoreError, CoreResult};

pub const MIN_SIDES_PER_SEGMENT: usize = 3;
pub const MIN_SEGMENTS_PER_POINT: usize = 1;

/// Tube shape parameters. `width` is the full diameter in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtrudeConfig {
    pub width: f32,
    /// Polygon resolution of the cross-section.
    pub sides_per_segment: usize,
    /// Interpolated samples between two consecutive control points.
    pub segments_per_point: usize,
}

impl Default for ExtrudeConfig {
    fn default() -> Self {
        Self {
            width: 1.0,
            sides_per_segment: 12,
            segments_per_point: 100,
        }
    }
}

impl ExtrudeConfig {
    #[must_use]
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_sides_per_segment(mut self, sides: usize) -> Self {
        self.sides_per_segment = sides;
        self
    }

    #[must_use]
    pub fn with_segments_per_point(mut self, segments: usize) -> Self {
        self.segments_per_point = segments;
        self
    }

    pub fn validate(&self) -> CoreResult<()> {
        check_width(self.width)?;
        check_sides(self.sides_per_segment)?;
        check_segments_per_point(self.segments_per_point)
    }
}

pub(crate) fn check_width(width: f32) -> CoreResult<()> {
    if !width.is_finite() || width < 0.0 {
        return Err(CoreError::InvalidWidth(width));
    }
    Ok(())
}

pub(crate) fn check_sides(sides: usize) -> CoreResult<()> {
    if sides < MIN_SIDES_PER_SEGMENT {
        return Err(CoreError::TooFewSides {
            min: MIN_SIDES_PER_SEGMENT,
            actual: sides,
        });
    }
    Ok(())
}

pub(crate) fn check_segments_per_point(segments: usize) -> CoreResult<()> {
    if segments < MIN_SEGMENTS_PER_POINT {
        return Err(CoreError::TooFewSegmentsPerPoint {
            min: MIN_SEGMENTS_PER_POINT,
            actual: segments,
        });
    }
    Ok(())
}

/// Opaque handle to the shading resource applied to every emitted section.
/// The core never resolves it; sinks interpret the URI.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MaterialRef(String);

impl MaterialRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn uri(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = ExtrudeConfig::default();
        assert_eq!(cfg.sides_per_segment, 12);
        assert_eq!(cfg.segments_per_point, 100);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let cfg = ExtrudeConfig::default().with_sides_per_segment(2);
        assert_eq!(
            cfg.validate(),
            Err(CoreError::TooFewSides { min: 3, actual: 2 })
        );

        let cfg = ExtrudeConfig::default().with_segments_per_point(0);
        assert!(matches!(
            cfg.validate(),
            Err(CoreError::TooFewSegmentsPerPoint { actual: 0, .. })
        ));

        assert!(ExtrudeConfig::default().with_width(-1.0).validate().is_err());
        assert!(ExtrudeConfig::default().with_width(f32::NAN).validate().is_err());
        assert!(ExtrudeConfig::default().with_width(0.0).validate().is_ok());
    }

    #[test]
    fn material_ref_keeps_uri() {
        let m = MaterialRef::new("materials/road.mat");
        assert_eq!(m.uri(), "materials/road.mat");
    }
}
