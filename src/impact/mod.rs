//! Impact crater and volcano placement over a polygon mesh.
//!
//! Crater centers come from cellular noise (distinct cells give natural
//! spacing), volcano sites from plate-boundary classification plus a
//! hotspot noise field. Footprints are measured in BFS hops through the
//! mesh adjacency; every probabilistic draw comes from one phase-seeded
//! RNG stream, so a planet regenerates identically from its seed.

mod profiles;

pub use profiles::FeatureProfile;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::MeshError;
use crate::mesh::{AdjacencyGraph, Polygon};
use crate::noise::{CellularReturnType, NoiseEngine, NoiseType};
use crate::planet::{Phase, PlanetConfig};
use crate::plates::{BoundaryAnalysis, BoundaryType, PlateAssignment, PlatePair};

const MIN_RADIUS: u32 = 2;

/// One placed surface feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedFeature {
    /// Polygon index of the feature center.
    pub center: usize,
    pub profile: FeatureProfile,
    /// Footprint radius in mesh hops.
    pub radius: u32,
}

/// Outcome of one placement run. Elevations are modified in place through
/// the calculator; this carries the feature metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub craters: Vec<PlacedFeature>,
    pub volcanoes: Vec<PlacedFeature>,
}

/// Summary counts in the shape used by exporters and UI layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactStats {
    pub crater_count: usize,
    pub volcano_count: usize,
    pub largest_crater_radius: Option<u32>,
    pub largest_volcano_radius: Option<u32>,
}

impl ImpactResult {
    /// Result of a run that placed nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn crater_count(&self) -> usize {
        self.craters.len()
    }

    pub fn volcano_count(&self) -> usize {
        self.volcanoes.len()
    }

    pub fn has_features(&self) -> bool {
        !self.craters.is_empty() || !self.volcanoes.is_empty()
    }

    pub fn stats(&self) -> ImpactStats {
        ImpactStats {
            crater_count: self.craters.len(),
            volcano_count: self.volcanoes.len(),
            largest_crater_radius: self.craters.iter().map(|f| f.radius).max(),
            largest_volcano_radius: self.volcanoes.iter().map(|f| f.radius).max(),
        }
    }
}

/// Places craters and volcanoes and applies their height profiles.
#[derive(Debug)]
pub struct CraterCalculator<'a> {
    config: &'a PlanetConfig,
    polygons: &'a [Polygon],
    adjacency: &'a AdjacencyGraph,
    elevations: &'a mut [f64],
    plates: Option<&'a PlateAssignment>,
    boundaries: Option<&'a BoundaryAnalysis>,
    rng: ChaCha8Rng,
    crater_noise: NoiseEngine,
    hotspot_noise: NoiseEngine,
    craters: Vec<PlacedFeature>,
    volcanoes: Vec<PlacedFeature>,
}

impl<'a> CraterCalculator<'a> {
    /// Validates the mesh data and prepares the phase-seeded noise engines.
    /// Fails before any elevation is touched.
    pub fn new(
        config: &'a PlanetConfig,
        polygons: &'a [Polygon],
        adjacency: &'a AdjacencyGraph,
        elevations: &'a mut [f64],
        plates: Option<&'a PlateAssignment>,
        boundaries: Option<&'a BoundaryAnalysis>,
    ) -> Result<Self, MeshError> {
        if elevations.len() != polygons.len() {
            return Err(MeshError::ElevationLengthMismatch {
                polygons: polygons.len(),
                elevations: elevations.len(),
            });
        }
        if adjacency.len() != polygons.len() {
            return Err(MeshError::AdjacencyLengthMismatch {
                polygons: polygons.len(),
                lists: adjacency.len(),
            });
        }
        if let Some(plates) = plates {
            if plates.len() != polygons.len() {
                return Err(MeshError::PlateAssignmentMismatch {
                    polygons: polygons.len(),
                    assigned: plates.len(),
                });
            }
        }

        let mut crater_noise = NoiseEngine::from_seed(config.sub_seed(Phase::Impacts) as i32);
        {
            let noise_config = crater_noise.config_mut();
            noise_config.noise_type = NoiseType::Cellular;
            noise_config.cellular_return = CellularReturnType::CellValue;
            noise_config.frequency = 0.5;
        }

        let mut hotspot_noise = NoiseEngine::from_seed(config.sub_seed(Phase::Hotspots) as i32);
        hotspot_noise.config_mut().frequency = 0.3;

        Ok(CraterCalculator {
            rng: ChaCha8Rng::seed_from_u64(config.sub_seed(Phase::Impacts)),
            config,
            polygons,
            adjacency,
            elevations,
            plates,
            boundaries,
            crater_noise,
            hotspot_noise,
            craters: Vec::new(),
            volcanoes: Vec::new(),
        })
    }

    /// Runs both placement phases and applies them to the elevations.
    pub fn calculate(mut self) -> ImpactResult {
        let crater_density = self.config.crater_density;
        let volcano_density = self.config.volcano_density;

        if crater_density <= 0.0 && volcano_density <= 0.0 {
            return ImpactResult::empty();
        }

        if crater_density > 0.0 {
            self.place_craters(crater_density);
        }
        if self.config.volcanoes_enabled && volcano_density > 0.0 {
            self.place_volcanoes(volcano_density);
        }

        info!(
            craters = self.craters.len(),
            volcanoes = self.volcanoes.len(),
            polygons = self.polygons.len(),
            "impact placement complete"
        );

        ImpactResult {
            craters: self.craters,
            volcanoes: self.volcanoes,
        }
    }

    /// Crater phase: cellular noise picks centers, each crater claims its
    /// whole BFS footprint so recorded craters never overlap.
    fn place_craters(&mut self, density: f64) {
        let threshold = 1.0 - density;
        let mut mask = vec![false; self.polygons.len()];

        for i in 0..self.polygons.len() {
            if mask[i] {
                continue;
            }

            let center = self.polygons[i].center;
            let cell_value =
                self.crater_noise
                    .get_noise_3d(center.x * 10.0, center.y * 10.0, center.z * 10.0);
            let normalized = (cell_value + 1.0) / 2.0;
            if normalized <= threshold {
                continue;
            }

            let radius = self.crater_radius();
            let profile = self.select_crater_profile(radius);

            let footprint = self.adjacency.hop_distances(i, radius);
            if footprint.keys().any(|&idx| mask[idx]) {
                continue;
            }
            for &idx in footprint.keys() {
                mask[idx] = true;
            }

            let scale = self.config.crater_depth_multiplier * profile.typical_multiplier();
            for (&idx, &hops) in &footprint {
                let d = hops as f64 / radius as f64;
                self.elevations[idx] += profile.height(d) * scale;
            }

            debug!(center = i, ?profile, radius, "placed crater");
            self.craters.push(PlacedFeature {
                center: i,
                profile,
                radius,
            });
        }
    }

    fn place_volcanoes(&mut self, density: f64) {
        let mut mask = vec![false; self.polygons.len()];

        if let (Some(plates), Some(boundaries)) = (self.plates, self.boundaries) {
            self.place_boundary_volcanoes(&mut mask, density, plates, boundaries);
        }
        self.place_hotspot_volcanoes(&mut mask, density);
    }

    /// Boundary pass: land polygons on an active plate boundary host the
    /// volcano style their boundary type produces.
    fn place_boundary_volcanoes(
        &mut self,
        mask: &mut [bool],
        density: f64,
        plates: &PlateAssignment,
        boundaries: &BoundaryAnalysis,
    ) {
        // Boundary volcanoes are rarer than raw density suggests.
        let boundary_density = density * 0.3;

        for i in 0..self.polygons.len() {
            if mask[i] {
                continue;
            }

            let plate = plates.plate_of(i);
            let mut boundary = None;
            for &neighbor in self.adjacency.neighbors(i) {
                let neighbor_plate = plates.plate_of(neighbor);
                if neighbor_plate != plate {
                    boundary = boundaries.boundary_type(PlatePair::new(plate, neighbor_plate));
                    break;
                }
            }
            let Some(boundary) = boundary else { continue };

            // Submarine volcanism stays invisible.
            if self.elevations[i] < 0.0 {
                continue;
            }

            if self.rng.gen::<f64>() > boundary_density {
                continue;
            }

            let profile = match boundary {
                BoundaryType::Convergent => Some(FeatureProfile::StratoVolcano),
                BoundaryType::Divergent => Some(FeatureProfile::ShieldVolcano),
                BoundaryType::Transform => {
                    if self.rng.gen::<bool>() {
                        Some(FeatureProfile::DomeVolcano)
                    } else {
                        None
                    }
                }
                BoundaryType::Inactive => None,
            };
            let Some(profile) = profile else { continue };

            let radius = self.volcano_radius(profile);
            self.apply_volcano(mask, i, radius, profile);
        }
    }

    /// Hotspot pass: a low-frequency simplex field marks mantle plumes.
    fn place_hotspot_volcanoes(&mut self, mask: &mut [bool], density: f64) {
        let threshold = 1.0 - density * 0.5;

        for i in 0..self.polygons.len() {
            if mask[i] {
                continue;
            }
            if self.elevations[i] < 0.0 {
                continue;
            }

            let center = self.polygons[i].center;
            let noise =
                self.hotspot_noise
                    .get_noise_3d(center.x * 8.0, center.y * 8.0, center.z * 8.0);
            let normalized = (noise + 1.0) / 2.0;
            if normalized <= threshold {
                continue;
            }

            let profile = if self.rng.gen::<f64>() < 0.7 {
                FeatureProfile::ShieldVolcano
            } else {
                FeatureProfile::DomeVolcano
            };
            let radius = self.volcano_radius(profile);
            self.apply_volcano(mask, i, radius, profile);
        }
    }

    fn apply_volcano(&mut self, mask: &mut [bool], center: usize, radius: u32, profile: FeatureProfile) {
        let footprint = self.adjacency.hop_distances(center, radius);
        for &idx in footprint.keys() {
            mask[idx] = true;
        }

        let scale = profile.typical_multiplier();
        for (&idx, &hops) in &footprint {
            let d = hops as f64 / radius as f64;
            let modified = self.elevations[idx] + profile.height(d) * scale;
            // Volcanoes build up; they never carve existing terrain.
            self.elevations[idx] = self.elevations[idx].max(modified);
        }

        debug!(center, ?profile, radius, "placed volcano");
        self.volcanoes.push(PlacedFeature {
            center,
            profile,
            radius,
        });
    }

    /// Radius biased toward small craters (quadratic weighting).
    fn crater_radius(&mut self) -> u32 {
        let limit = self.config.crater_radius_limit();
        let span = limit.saturating_sub(MIN_RADIUS);
        let r = self.rng.gen::<f64>();
        MIN_RADIUS + ((r * r) * span as f64) as u32
    }

    fn volcano_radius(&mut self, profile: FeatureProfile) -> u32 {
        match profile {
            FeatureProfile::StratoVolcano => MIN_RADIUS + self.rng.gen_range(0..3),
            FeatureProfile::ShieldVolcano => MIN_RADIUS + 2 + self.rng.gen_range(0..4),
            FeatureProfile::DomeVolcano => MIN_RADIUS + self.rng.gen_range(0..2),
            _ => MIN_RADIUS,
        }
    }

    /// Large craters tend to be complex, small ones simple.
    fn select_crater_profile(&mut self, radius: u32) -> FeatureProfile {
        if radius >= 5 {
            let r = self.rng.gen::<f64>();
            if r < 0.3 {
                return FeatureProfile::ComplexRings;
            }
            if r < 0.5 {
                return FeatureProfile::ComplexSteps;
            }
            if r < 0.7 {
                return FeatureProfile::ComplexFlat;
            }
        }

        if self.rng.gen::<f64>() < 0.6 {
            FeatureProfile::SimpleRound
        } else {
            FeatureProfile::SimpleFlat
        }
    }
}
