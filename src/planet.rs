//! Planet-level configuration for surface-feature synthesis.
//!
//! One master seed drives every stochastic decision; each generation phase
//! derives its own stream with [`PlanetConfig::sub_seed`], so re-running a
//! single phase reproduces its output regardless of the others.

use serde::{Deserialize, Serialize};

/// Generation phases with a dedicated seed stream. The discriminants are
/// stable identifiers; changing one re-rolls that phase everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u64)]
pub enum Phase {
    Impacts = 7,
    Hotspots = 8,
}

/// Immutable parameters for one planet's feature synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetConfig {
    /// Master seed; all phase streams derive from it.
    pub seed: u64,
    /// Fraction of the surface considered for impact craters, 0 to 1.
    pub crater_density: f64,
    /// Fraction of eligible sites considered for volcanoes, 0 to 1.
    pub volcano_density: f64,
    /// Largest crater radius in mesh hops. 0 falls back to the default of 8.
    pub max_crater_radius: u32,
    /// Scales crater depth without changing the radial shape.
    pub crater_depth_multiplier: f64,
    /// Master switch for both volcano passes.
    pub volcanoes_enabled: bool,
}

impl Default for PlanetConfig {
    fn default() -> Self {
        PlanetConfig {
            seed: 0,
            crater_density: 0.0,
            volcano_density: 0.0,
            max_crater_radius: 8,
            crater_depth_multiplier: 1.0,
            volcanoes_enabled: true,
        }
    }
}

impl PlanetConfig {
    pub fn builder() -> PlanetConfigBuilder {
        PlanetConfigBuilder::default()
    }

    /// Seed for one generation phase, decorrelated from the master seed by a
    /// golden-ratio multiply.
    pub fn sub_seed(&self, phase: Phase) -> u64 {
        self.seed ^ (phase as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }

    /// Effective crater radius ceiling.
    pub(crate) fn crater_radius_limit(&self) -> u32 {
        if self.max_crater_radius == 0 {
            8
        } else {
            self.max_crater_radius
        }
    }
}

/// Builder with densities clamped to [0, 1].
#[derive(Debug, Clone, Default)]
pub struct PlanetConfigBuilder {
    config: PlanetConfig,
}

impl PlanetConfigBuilder {
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn crater_density(mut self, density: f64) -> Self {
        self.config.crater_density = density.clamp(0.0, 1.0);
        self
    }

    pub fn volcano_density(mut self, density: f64) -> Self {
        self.config.volcano_density = density.clamp(0.0, 1.0);
        self
    }

    pub fn max_crater_radius(mut self, radius: u32) -> Self {
        self.config.max_crater_radius = radius;
        self
    }

    pub fn crater_depth_multiplier(mut self, multiplier: f64) -> Self {
        self.config.crater_depth_multiplier = multiplier;
        self
    }

    pub fn volcanoes_enabled(mut self, enabled: bool) -> Self {
        self.config.volcanoes_enabled = enabled;
        self
    }

    pub fn build(self) -> PlanetConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_seeds_differ_per_phase() {
        let config = PlanetConfig::builder().seed(42).build();
        assert_ne!(config.sub_seed(Phase::Impacts), config.sub_seed(Phase::Hotspots));
        assert_ne!(config.sub_seed(Phase::Impacts), config.seed);
    }

    #[test]
    fn test_sub_seed_stable_for_same_seed() {
        let a = PlanetConfig::builder().seed(7).build();
        let b = PlanetConfig::builder().seed(7).crater_density(0.9).build();
        assert_eq!(a.sub_seed(Phase::Impacts), b.sub_seed(Phase::Impacts));
    }

    #[test]
    fn test_builder_clamps_densities() {
        let config = PlanetConfig::builder()
            .crater_density(1.7)
            .volcano_density(-0.2)
            .build();
        assert_eq!(config.crater_density, 1.0);
        assert_eq!(config.volcano_density, 0.0);
    }

    #[test]
    fn test_radius_limit_default() {
        let config = PlanetConfig::builder().max_crater_radius(0).build();
        assert_eq!(config.crater_radius_limit(), 8);
        let config = PlanetConfig::builder().max_crater_radius(5).build();
        assert_eq!(config.crater_radius_limit(), 5);
    }
}
