//! Tectonic-plate context consumed by the volcano placement pass.
//!
//! The synthesis engine does not simulate plates; it accepts the outcome of
//! an upstream plate model as an assignment of polygons to plate ids plus a
//! classification of each touching plate pair.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Relative motion at the boundary between two plates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryType {
    /// Plates collide; subduction arcs build steep stratovolcanoes.
    Convergent,
    /// Plates separate; upwelling builds broad shield volcanoes.
    Divergent,
    /// Plates slide past each other; occasional lava domes.
    Transform,
    /// No significant relative motion.
    Inactive,
}

/// Unordered pair of plate ids, normalized so lookups are order-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatePair {
    low: u32,
    high: u32,
}

impl PlatePair {
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b {
            PlatePair { low: a, high: b }
        } else {
            PlatePair { low: b, high: a }
        }
    }
}

/// Plate id per polygon, indexed by polygon index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateAssignment {
    plate_of: Vec<u32>,
}

impl PlateAssignment {
    pub fn new(plate_of: Vec<u32>) -> Self {
        PlateAssignment { plate_of }
    }

    pub fn len(&self) -> usize {
        self.plate_of.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plate_of.is_empty()
    }

    pub fn plate_of(&self, polygon: usize) -> u32 {
        self.plate_of[polygon]
    }
}

/// Boundary classification per touching plate pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoundaryAnalysis {
    boundaries: HashMap<PlatePair, BoundaryType>,
}

impl BoundaryAnalysis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pair: PlatePair, boundary: BoundaryType) {
        self.boundaries.insert(pair, boundary);
    }

    /// Classification for the pair, if the two plates touch.
    pub fn boundary_type(&self, pair: PlatePair) -> Option<BoundaryType> {
        self.boundaries.get(&pair).copied()
    }
}

impl FromIterator<(PlatePair, BoundaryType)> for BoundaryAnalysis {
    fn from_iter<T: IntoIterator<Item = (PlatePair, BoundaryType)>>(iter: T) -> Self {
        BoundaryAnalysis {
            boundaries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plate_pair_is_unordered() {
        assert_eq!(PlatePair::new(3, 7), PlatePair::new(7, 3));
    }

    #[test]
    fn test_boundary_lookup_either_order() {
        let mut analysis = BoundaryAnalysis::new();
        analysis.insert(PlatePair::new(1, 2), BoundaryType::Convergent);
        assert_eq!(
            analysis.boundary_type(PlatePair::new(2, 1)),
            Some(BoundaryType::Convergent)
        );
        assert_eq!(analysis.boundary_type(PlatePair::new(1, 3)), None);
    }
}
