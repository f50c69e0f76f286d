//! Deterministic surface-feature synthesis for polygon-mesh planets.
//!
//! Two layers:
//!
//! * [`noise`] is a self-contained coherent-noise engine (simplex, cellular,
//!   Perlin, value, fractal combinators, domain warp) over `f64` with `i32`
//!   seeds. Same config and coordinates always give bit-identical output.
//! * [`impact`] places craters and volcanoes on a polygon mesh, using the
//!   noise engine for site selection and BFS hop distances for footprints,
//!   then applies radial height profiles to the elevation field.
//!
//! Everything derives from a single [`planet::PlanetConfig`] seed, so a
//! planet can be regenerated exactly from its configuration.

pub mod error;
pub mod geom;
pub mod impact;
pub mod mesh;
pub mod noise;
pub mod planet;
pub mod plates;

pub use error::MeshError;
pub use geom::{Vec2, Vec3};
pub use impact::{CraterCalculator, FeatureProfile, ImpactResult, PlacedFeature};
pub use mesh::{AdjacencyGraph, Polygon};
pub use noise::{NoiseConfig, NoiseEngine};
pub use planet::{Phase, PlanetConfig};
pub use plates::{BoundaryAnalysis, BoundaryType, PlateAssignment, PlatePair};
