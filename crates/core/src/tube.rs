//! Sweeps a regular polygon along one segment of a dense spline path.

use crate::config::{check_sides, check_width};
use crate::frame::{CrossSectionFrame, safe_normal};
use crate::section::{MeshSection, SegmentMesh};
use crate::spline::SplinePath;
use crate::{CoreError, CoreResult, Vec2, Vec3};

/// Ring of cross-section vertices around one path sample.
struct Ring {
    center: Vec3,
    frame: CrossSectionFrame,
    vertices: Vec<Vec3>,
    normals: Vec<Vec3>,
}

impl Ring {
    fn around(center: Vec3, tangent: Vec3, radius: f32, sides: usize) -> Self {
        let frame = CrossSectionFrame::from_tangent(tangent);
        let mut vertices = Vec::with_capacity(sides);
        let mut normals = Vec::with_capacity(sides);
        for k in 0..sides {
            let angle = (k as f32 * 360.0 / sides as f32).to_radians();
            let offset = frame.offset(angle, radius);
            vertices.push(center + offset);
            normals.push(safe_normal(offset));
        }
        Self {
            center,
            frame,
            vertices,
            normals,
        }
    }

    #[inline]
    fn sides(&self) -> usize {
        self.vertices.len()
    }
}

/// Build the mesh for segment `index`, the span between samples `index` and `index + 1`.
///
/// The tube section holds one quad per side with four unshared vertices, so
/// `4 * sides` vertices and `2 * sides` triangles. The first segment also gets a
/// start cap and the last segment an end cap. All triangles wind clockwise when
/// viewed from outside the tube.
pub fn build_segment(
    path: &SplinePath,
    index: usize,
    width: f32,
    sides: usize,
) -> CoreResult<SegmentMesh> {
    check_width(width)?;
    check_sides(sides)?;
    let samples = path.samples();
    if index + 1 >= samples.len() {
        return Err(CoreError::SegmentOutOfRange {
            index,
            samples: samples.len(),
        });
    }

    Ok(segment_mesh(path, index, width, sides))
}

/// Unchecked body of [`build_segment`].
///
/// Callers guarantee `width` and `sides` are valid and that `index + 1` is a
/// sample of `path`.
pub(crate) fn segment_mesh(path: &SplinePath, index: usize, width: f32, sides: usize) -> SegmentMesh {
    let samples = path.samples();
    let start = samples[index];
    let end = samples[index + 1];
    let radius = width / 2.0;

    let disc1 = Ring::around(start.position, start.tangent, radius, sides);
    let disc2 = Ring::around(end.position, end.tangent, radius, sides);

    let start_cap = (index == 0).then(|| cap(&disc1, CapEnd::Start));
    let end_cap = (index == samples.len() - 2).then(|| cap(&disc2, CapEnd::End));

    SegmentMesh {
        tube: quad_strip(&disc1, &disc2),
        start_cap,
        end_cap,
    }
}

fn quad_strip(disc1: &Ring, disc2: &Ring) -> MeshSection {
    let sides = disc1.sides();
    let mut section = MeshSection::with_capacity(sides * 4, sides * 2);
    section.uvs.reserve(sides * 4);
    section.tangents.reserve(sides * 4);

    let axis1 = disc1.frame.axis;
    let axis2 = disc2.frame.axis;

    for k in 0..sides {
        let next = (k + 1) % sides;

        section.vertices.extend_from_slice(&[
            disc1.vertices[k],
            disc2.vertices[k],
            disc1.vertices[next],
            disc2.vertices[next],
        ]);

        section.normals.extend_from_slice(&[
            disc1.normals[k],
            disc2.normals[k],
            disc1.normals[next],
            disc2.normals[next],
        ]);

        // `next` wraps to 0 on the closing quad, so its far edge samples u = 0.
        let u1 = k as f32 / sides as f32;
        let u2 = next as f32 / sides as f32;
        section.uvs.extend_from_slice(&[
            Vec2::new(u1, 0.0),
            Vec2::new(u1, 1.0),
            Vec2::new(u2, 0.0),
            Vec2::new(u2, 1.0),
        ]);

        section
            .tangents
            .extend_from_slice(&[axis1, axis2, axis1, axis2]);

        let base = (k * 4) as u32;
        section
            .triangles
            .extend_from_slice(&[base, base + 2, base + 1, base + 1, base + 2, base + 3]);
    }

    section
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CapEnd {
    Start,
    End,
}

/// Flat-shaded triangle fan closing the tube at `ring`; no UVs or tangents.
fn cap(ring: &Ring, end: CapEnd) -> MeshSection {
    let sides = ring.sides();
    let normal = match end {
        CapEnd::Start => -ring.frame.axis,
        CapEnd::End => ring.frame.axis,
    };

    let mut section = MeshSection::with_capacity(sides * 3, sides);
    for k in 0..sides {
        let next = (k + 1) % sides;
        let triangle = match end {
            CapEnd::Start => [ring.vertices[k], ring.center, ring.vertices[next]],
            CapEnd::End => [ring.center, ring.vertices[k], ring.vertices[next]],
        };
        section.vertices.extend_from_slice(&triangle);
        section.normals.extend_from_slice(&[normal; 3]);

        let base = (k * 3) as u32;
        section.triangles.extend_from_slice(&[base, base + 1, base + 2]);
    }

    section
}
