//! Structural validation errors.
//!
//! All surface synthesis is pure computation; the only failure mode is a
//! caller handing over mismatched mesh data, which is rejected before any
//! elevation is touched.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    #[error("elevation length {elevations} does not match polygon count {polygons}")]
    ElevationLengthMismatch { polygons: usize, elevations: usize },

    #[error("adjacency has {lists} neighbor lists for {polygons} polygons")]
    AdjacencyLengthMismatch { polygons: usize, lists: usize },

    #[error("polygon {polygon} lists out-of-range neighbor {neighbor} (polygon count {polygons})")]
    NeighborOutOfRange {
        polygon: usize,
        neighbor: usize,
        polygons: usize,
    },

    #[error("plate assignment covers {assigned} polygons, mesh has {polygons}")]
    PlateAssignmentMismatch { polygons: usize, assigned: usize },
}
