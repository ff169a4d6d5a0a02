//! Stateful generator: owns control points and config, and drives full rebuilds
//! into a [`MeshSink`].
//!
//! There is no incremental path. Every change to points or shape clears the
//! sink and re-emits all sections.

use crate::config::{
    ExtrudeConfig, MaterialRef, check_segments_per_point, check_sides, check_width,
};
use crate::sink::MeshSink;
use crate::spline::{MIN_CONTROL_POINTS, SplinePath, interpolate};
use crate::tube::segment_mesh;
use crate::{CoreResult, Vec3};

/// What one rebuild produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RebuildSummary {
    pub control_points: usize,
    pub samples: usize,
    pub sections: usize,
}

#[derive(Clone, Debug, Default)]
pub struct ExtrudeGenerator {
    config: ExtrudeConfig,
    control_points: Vec<Vec3>,
    material: Option<MaterialRef>,
    path: SplinePath,
}

impl ExtrudeGenerator {
    pub fn new(config: ExtrudeConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Default::default()
        })
    }

    #[inline]
    pub fn config(&self) -> &ExtrudeConfig {
        &self.config
    }

    #[inline]
    pub fn control_points(&self) -> &[Vec3] {
        &self.control_points
    }

    /// Dense path from the last rebuild.
    #[inline]
    pub fn path(&self) -> &SplinePath {
        &self.path
    }

    #[inline]
    pub fn material(&self) -> Option<&MaterialRef> {
        self.material.as_ref()
    }

    /// Store the tube width without rebuilding.
    pub fn set_properties(&mut self, width: f32) -> CoreResult<()> {
        check_width(width)?;
        self.config.width = width;
        Ok(())
    }

    pub fn set_material(&mut self, material: Option<MaterialRef>) {
        self.material = material;
    }

    pub fn set_sides_per_segment(&mut self, sides: usize) -> CoreResult<()> {
        check_sides(sides)?;
        self.config.sides_per_segment = sides;
        Ok(())
    }

    pub fn set_segments_per_point(&mut self, segments: usize) -> CoreResult<()> {
        check_segments_per_point(segments)?;
        self.config.segments_per_point = segments;
        Ok(())
    }

    /// Replace the control points without rebuilding.
    pub fn set_control_points(&mut self, points: Vec<Vec3>) {
        self.control_points = points;
    }

    /// Clear the sink, re-interpolate the stored control points and emit every
    /// segment in increasing index order.
    pub fn rebuild(&mut self, sink: &mut impl MeshSink) -> RebuildSummary {
        sink.clear_all_sections();

        if self.control_points.len() < MIN_CONTROL_POINTS {
            log::warn!(
                "Rebuild skipped: {} control points, need at least {}",
                self.control_points.len(),
                MIN_CONTROL_POINTS
            );
        }

        self.path = interpolate(&self.control_points, self.config.segments_per_point);

        let mut sections = 0;
        for index in 0..self.path.segment_count() {
            // Width and sides were validated by the setters.
            let segment = segment_mesh(
                &self.path,
                index,
                self.config.width,
                self.config.sides_per_segment,
            );
            for (key, section) in segment.into_keyed_sections(index) {
                sink.create_section(key, section, self.material.as_ref());
                sections += 1;
            }
        }

        let summary = RebuildSummary {
            control_points: self.control_points.len(),
            samples: self.path.len(),
            sections,
        };
        log::debug!(
            "Rebuilt extrude geometry: {} control points -> {} samples, {} sections",
            summary.control_points,
            summary.samples,
            summary.sections
        );
        summary
    }

    /// Replace the control points and rebuild everything.
    pub fn update_control_points(
        &mut self,
        points: Vec<Vec3>,
        sink: &mut impl MeshSink,
    ) -> RebuildSummary {
        self.set_control_points(points);
        self.rebuild(sink)
    }

    /// Store a new width and rebuild so the change is visible immediately.
    pub fn update_width(
        &mut self,
        width: f32,
        sink: &mut impl MeshSink,
    ) -> CoreResult<RebuildSummary> {
        self.set_properties(width)?;
        Ok(self.rebuild(sink))
    }
}
