use indexmap::IndexMap;
use super::{Coordinate, Junction};

/// Immutable lookup from junction identifier to map coordinate
///
/// The registry is the only source of drawable geometry. Identifiers coming back
/// from the backend that are not registered are skipped by callers, never treated
/// as errors.
#[derive(Debug, Clone, Default)]
pub struct CoordinateRegistry {
    junctions: IndexMap<String, Coordinate>,
}

impl CoordinateRegistry {
    /// Build a registry, keeping the first coordinate seen for a duplicated identifier
    #[must_use]
    pub fn new(junctions: impl IntoIterator<Item = Junction>) -> Self {
        let mut map = IndexMap::new();
        for junction in junctions {
            map.entry(junction.id).or_insert(junction.coordinate);
        }
        Self { junctions: map }
    }

    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<Coordinate> {
        self.junctions.get(id).copied()
    }

    /// Resolve a sequence of identifiers, dropping the ones that are not registered
    #[must_use]
    pub fn resolve_all<S: AsRef<str>>(&self, ids: &[S]) -> Vec<Coordinate> {
        ids.iter().filter_map(|id| self.lookup(id.as_ref())).collect()
    }

    /// Junctions in registration order
    pub fn junctions(&self) -> impl Iterator<Item = Junction> + '_ {
        self.junctions.iter().map(|(id, coordinate)| Junction::new(id.clone(), *coordinate))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.junctions.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.junctions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.junctions.is_empty()
    }
}
