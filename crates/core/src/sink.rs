//! Consumers of generated sections.

use std::collections::BTreeMap;

use crate::config::MaterialRef;
use crate::section::{MeshSection, SectionKey};

/// Receiver of mesh sections, keyed by [`SectionKey`].
///
/// `create_section` replaces whatever was stored under the key before.
pub trait MeshSink {
    fn clear_all_sections(&mut self);

    fn create_section(
        &mut self,
        key: SectionKey,
        section: MeshSection,
        material: Option<&MaterialRef>,
    );
}

/// A section together with the material it was registered with.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredSection {
    pub section: MeshSection,
    pub material: Option<MaterialRef>,
}

/// In-memory sink, ordered by key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionStore {
    sections: BTreeMap<SectionKey, StoredSection>,
}

impl SectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, key: SectionKey) -> Option<&StoredSection> {
        self.sections.get(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = SectionKey> + '_ {
        self.sections.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &StoredSection)> {
        self.sections.iter().map(|(k, v)| (*k, v))
    }

    pub fn vertex_count(&self) -> usize {
        self.sections.values().map(|s| s.section.vertex_count()).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.sections.values().map(|s| s.section.triangle_count()).sum()
    }
}

impl MeshSink for SectionStore {
    fn clear_all_sections(&mut self) {
        self.sections.clear();
    }

    fn create_section(
        &mut self,
        key: SectionKey,
        section: MeshSection,
        material: Option<&MaterialRef>,
    ) {
        self.sections.insert(
            key,
            StoredSection {
                section,
                material: material.cloned(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3;

    fn point_section(p: Vec3) -> MeshSection {
        MeshSection {
            vertices: vec![p],
            ..Default::default()
        }
    }

    #[test]
    fn create_replaces_and_clear_empties() {
        let mut store = SectionStore::new();
        let mat = MaterialRef::new("m");
        store.create_section(SectionKey(2), point_section(Vec3::X), None);
        store.create_section(SectionKey(0), point_section(Vec3::Y), Some(&mat));
        store.create_section(SectionKey(2), point_section(Vec3::Z), None);

        assert_eq!(store.len(), 2);
        assert_eq!(store.keys().collect::<Vec<_>>(), vec![SectionKey(0), SectionKey(2)]);
        assert_eq!(store.get(SectionKey(2)).map(|s| s.section.vertices[0]), Some(Vec3::Z));
        assert_eq!(
            store.get(SectionKey(0)).and_then(|s| s.material.as_ref()),
            Some(&mat)
        );
        assert_eq!(store.vertex_count(), 2);

        store.clear_all_sections();
        assert!(store.is_empty());
    }
}
