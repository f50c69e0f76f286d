//! Polygon-mesh adjacency and hop distances.
//!
//! The planet surface is a set of polygons identified by index, each with a
//! center point, plus a neighbor list per polygon. Feature footprints are
//! measured in BFS hops over that adjacency rather than in world units, so
//! crater shapes follow the mesh topology.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::geom::Vec3;

/// One surface polygon, reduced to the data the synthesis passes need.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Center point, typically on the unit sphere.
    pub center: Vec3,
}

impl Polygon {
    pub fn new(center: Vec3) -> Self {
        Polygon { center }
    }
}

/// Neighbor lists for every polygon, validated on construction so traversal
/// code can index without bounds concerns.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    /// Builds the graph, rejecting a list count that does not match the
    /// polygon count and any out-of-range neighbor index.
    pub fn new(polygon_count: usize, neighbors: Vec<Vec<usize>>) -> Result<Self, MeshError> {
        if neighbors.len() != polygon_count {
            return Err(MeshError::AdjacencyLengthMismatch {
                polygons: polygon_count,
                lists: neighbors.len(),
            });
        }
        for (polygon, list) in neighbors.iter().enumerate() {
            for &neighbor in list {
                if neighbor >= polygon_count {
                    return Err(MeshError::NeighborOutOfRange {
                        polygon,
                        neighbor,
                        polygons: polygon_count,
                    });
                }
            }
        }
        Ok(AdjacencyGraph { neighbors })
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub fn neighbors(&self, polygon: usize) -> &[usize] {
        &self.neighbors[polygon]
    }

    /// BFS hop distances from `start`, capped at `max_hops` inclusive.
    /// The start polygon maps to 0.
    pub fn hop_distances(&self, start: usize, max_hops: u32) -> HashMap<usize, u32> {
        let mut distances = HashMap::new();
        let mut queue = VecDeque::new();

        distances.insert(start, 0u32);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let distance = distances[&current];
            if distance >= max_hops {
                continue;
            }
            for &neighbor in &self.neighbors[current] {
                if !distances.contains_key(&neighbor) {
                    distances.insert(neighbor, distance + 1);
                    queue.push_back(neighbor);
                }
            }
        }

        distances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph(n: usize) -> AdjacencyGraph {
        let neighbors = (0..n)
            .map(|i| {
                let mut list = Vec::new();
                if i > 0 {
                    list.push(i - 1);
                }
                if i + 1 < n {
                    list.push(i + 1);
                }
                list
            })
            .collect();
        AdjacencyGraph::new(n, neighbors).unwrap()
    }

    #[test]
    fn test_hop_distances_on_a_line() {
        let graph = line_graph(10);
        let distances = graph.hop_distances(3, 4);
        assert_eq!(distances[&3], 0);
        assert_eq!(distances[&0], 3);
        assert_eq!(distances[&7], 4);
        assert!(!distances.contains_key(&8), "hop cap not honored");
    }

    #[test]
    fn test_hop_distances_shortest_path() {
        // 0-1-2 plus a direct 0-2 edge; distance to 2 must be 1.
        let graph =
            AdjacencyGraph::new(3, vec![vec![1, 2], vec![0, 2], vec![0, 1]]).unwrap();
        let distances = graph.hop_distances(0, 5);
        assert_eq!(distances[&2], 1);
    }

    #[test]
    fn test_rejects_wrong_list_count() {
        let err = AdjacencyGraph::new(3, vec![vec![], vec![]]).unwrap_err();
        assert_eq!(
            err,
            MeshError::AdjacencyLengthMismatch {
                polygons: 3,
                lists: 2
            }
        );
    }

    #[test]
    fn test_rejects_out_of_range_neighbor() {
        let err = AdjacencyGraph::new(2, vec![vec![1], vec![5]]).unwrap_err();
        assert_eq!(
            err,
            MeshError::NeighborOutOfRange {
                polygon: 1,
                neighbor: 5,
                polygons: 2
            }
        );
    }
}
