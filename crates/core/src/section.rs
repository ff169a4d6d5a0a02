//! Mesh sections: the independently replaceable unit of output.

use crate::{Vec2, Vec3};

/// Integer address of a section in the sink.
///
/// Segment `i` owns key `i + 1`; its start cap (first segment only) uses `i`
/// and its end cap (last segment only) uses `i + 2`. Over a whole path the
/// keys are `0..=segments + 1` with no collisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionKey(pub usize);

impl SectionKey {
    #[inline]
    pub const fn start_cap(segment: usize) -> Self {
        Self(segment)
    }

    #[inline]
    pub const fn tube(segment: usize) -> Self {
        Self(segment + 1)
    }

    #[inline]
    pub const fn end_cap(segment: usize) -> Self {
        Self(segment + 2)
    }
}

/// Indexed triangle buffers with per-vertex attributes.
///
/// `uvs` and `tangents` are either empty (caps) or one per vertex.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshSection {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<u32>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub tangents: Vec<Vec3>,
}

impl MeshSection {
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles * 3),
            normals: Vec::with_capacity(vertices),
            uvs: Vec::new(),
            tangents: Vec::new(),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Triangles as index triples.
    pub fn triangle_indices(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.triangles.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Returns `true` if the section is non-empty, made of whole triangles that
    /// only reference its own vertices, and its attribute buffers line up.
    pub fn is_valid(&self) -> bool {
        let n = self.vertices.len();
        let attr_ok = |len: usize| len == 0 || len == n;
        n > 0
            && !self.triangles.is_empty()
            && self.triangles.len() % 3 == 0
            && self.triangles.iter().all(|&i| (i as usize) < n)
            && self.normals.len() == n
            && attr_ok(self.uvs.len())
            && attr_ok(self.tangents.len())
    }
}

/// Output of building one segment of the path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmentMesh {
    pub tube: MeshSection,
    pub start_cap: Option<MeshSection>,
    pub end_cap: Option<MeshSection>,
}

impl SegmentMesh {
    /// Number of sections this segment registers.
    pub fn section_count(&self) -> usize {
        1 + usize::from(self.start_cap.is_some()) + usize::from(self.end_cap.is_some())
    }

    /// Pair every section with its key, in ascending key order.
    pub fn into_keyed_sections(self, segment: usize) -> Vec<(SectionKey, MeshSection)> {
        let mut out = Vec::with_capacity(self.section_count());
        if let Some(cap) = self.start_cap {
            out.push((SectionKey::start_cap(segment), cap));
        }
        out.push((SectionKey::tube(segment), self.tube));
        if let Some(cap) = self.end_cap {
            out.push((SectionKey::end_cap(segment), cap));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> MeshSection {
        MeshSection {
            vertices: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            triangles: vec![0, 1, 2],
            normals: vec![Vec3::Z; 3],
            ..Default::default()
        }
    }

    #[test]
    fn keys_follow_segment_index() {
        assert_eq!(SectionKey::start_cap(0), SectionKey(0));
        assert_eq!(SectionKey::tube(0), SectionKey(1));
        assert_eq!(SectionKey::tube(7), SectionKey(8));
        assert_eq!(SectionKey::end_cap(7), SectionKey(9));
    }

    #[test]
    fn section_validity() {
        assert!(triangle().is_valid());
        assert!(!MeshSection::default().is_valid());

        let mut bad = triangle();
        bad.triangles[2] = 3;
        assert!(!bad.is_valid());

        let mut bad = triangle();
        bad.uvs = vec![Vec2::ZERO];
        assert!(!bad.is_valid());
    }

    #[test]
    fn keyed_sections_are_ordered() {
        let seg = SegmentMesh {
            tube: triangle(),
            start_cap: Some(triangle()),
            end_cap: Some(triangle()),
        };
        assert_eq!(seg.section_count(), 3);
        let keys: Vec<_> = seg.into_keyed_sections(0).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![SectionKey(0), SectionKey(1), SectionKey(2)]);
    }
}
