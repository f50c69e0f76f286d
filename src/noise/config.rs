//! Noise parameter set and its derived state.
//!
//! `NoiseConfig` is a plain bag of parameters. The two derived values the
//! generators need, the fractal bounding factor (keeps fractal sums in range
//! regardless of octave count) and the 3D coordinate transform implied by the
//! noise/rotation type pair, are computed on demand so they can never go
//! stale, including after deserialization.

use serde::{Deserialize, Serialize};

/// Base coherent-noise generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoiseType {
    /// Fast simplex-style gradient noise.
    OpenSimplex2,
    /// Smoother variant with wider kernel support.
    OpenSimplex2S,
    /// Worley/Voronoi cell noise.
    Cellular,
    /// Classic Perlin gradient noise.
    Perlin,
    /// Cubic-interpolated lattice value noise.
    ValueCubic,
    /// Linearly interpolated lattice value noise.
    Value,
}

/// Domain rotation applied to 3D coordinates to hide grid artifacts in a
/// chosen plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationType3D {
    None,
    ImproveXYPlanes,
    ImproveXZPlanes,
}

/// Fractal combination policy layered over the base generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FractalType {
    None,
    Fbm,
    Ridged,
    PingPong,
    Billow,
    HybridMulti,
    /// Warp applied once, then each fractal warp octave warps the already
    /// warped coordinates.
    DomainWarpProgressive,
    /// Every fractal warp octave reads the original coordinates.
    DomainWarpIndependent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellularDistanceFunction {
    Euclidean,
    EuclideanSq,
    Manhattan,
    /// Manhattan plus Euclidean-squared.
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellularReturnType {
    /// Hashed value of the closest cell.
    CellValue,
    /// Distance to the closest feature point.
    Distance,
    /// Distance to the second-closest feature point.
    Distance2,
    Distance2Add,
    Distance2Sub,
    Distance2Mul,
    Distance2Div,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainWarpType {
    /// Gradient of OpenSimplex2 noise.
    OpenSimplex2,
    /// Cheaper single-direction-per-vertex variant.
    OpenSimplex2Reduced,
    /// Hermite-interpolated offsets on the integer grid.
    BasicGrid,
}

/// Internal 3D coordinate transform, derived from noise + rotation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TransformType3D {
    None,
    ImproveXYPlanes,
    ImproveXZPlanes,
    DefaultOpenSimplex2,
}

/// Full parameter set for a [`super::NoiseEngine`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseConfig {
    pub seed: i32,
    pub frequency: f64,
    pub noise_type: NoiseType,
    pub rotation_type: RotationType3D,

    pub fractal_type: FractalType,
    pub octaves: u32,
    pub lacunarity: f64,
    pub gain: f64,
    pub weighted_strength: f64,
    pub ping_pong_strength: f64,

    pub cellular_distance: CellularDistanceFunction,
    pub cellular_return: CellularReturnType,
    pub cellular_jitter: f64,

    pub domain_warp_type: DomainWarpType,
    pub domain_warp_amp: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        NoiseConfig {
            seed: 1337,
            frequency: 0.01,
            noise_type: NoiseType::OpenSimplex2,
            rotation_type: RotationType3D::None,
            fractal_type: FractalType::None,
            octaves: 3,
            lacunarity: 2.0,
            gain: 0.5,
            weighted_strength: 0.0,
            ping_pong_strength: 2.0,
            cellular_distance: CellularDistanceFunction::EuclideanSq,
            cellular_return: CellularReturnType::Distance,
            cellular_jitter: 1.0,
            domain_warp_type: DomainWarpType::OpenSimplex2,
            domain_warp_amp: 1.0,
        }
    }
}

impl NoiseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// `1 / (1 + |gain| + |gain|^2 + ...)`, one term per octave past the
    /// first. Scales fractal sums back toward [-1, 1].
    pub(crate) fn fractal_bounding(&self) -> f64 {
        let gain = self.gain.abs();
        let mut amp = gain;
        let mut amp_fractal = 1.0;
        for _ in 1..self.octaves {
            amp_fractal += amp;
            amp *= gain;
        }
        1.0 / amp_fractal
    }

    pub(crate) fn transform_type(&self) -> TransformType3D {
        match self.rotation_type {
            RotationType3D::ImproveXYPlanes => TransformType3D::ImproveXYPlanes,
            RotationType3D::ImproveXZPlanes => TransformType3D::ImproveXZPlanes,
            RotationType3D::None => match self.noise_type {
                NoiseType::OpenSimplex2 | NoiseType::OpenSimplex2S => {
                    TransformType3D::DefaultOpenSimplex2
                }
                _ => TransformType3D::None,
            },
        }
    }

    pub(crate) fn warp_transform_type(&self) -> TransformType3D {
        match self.rotation_type {
            RotationType3D::ImproveXYPlanes => TransformType3D::ImproveXYPlanes,
            RotationType3D::ImproveXZPlanes => TransformType3D::ImproveXZPlanes,
            RotationType3D::None => match self.domain_warp_type {
                DomainWarpType::OpenSimplex2 | DomainWarpType::OpenSimplex2Reduced => {
                    TransformType3D::DefaultOpenSimplex2
                }
                DomainWarpType::BasicGrid => TransformType3D::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fractal_bounding() {
        let config = NoiseConfig::default();
        // octaves 3, gain 0.5 -> 1 / (1 + 0.5 + 0.25)
        assert!((config.fractal_bounding() - 1.0 / 1.75).abs() < 1e-12);
    }

    #[test]
    fn test_fractal_bounding_tracks_octaves_and_gain() {
        let mut config = NoiseConfig::default();
        config.octaves = 1;
        assert!((config.fractal_bounding() - 1.0).abs() < 1e-12);
        config.octaves = 2;
        config.gain = 1.0;
        assert!((config.fractal_bounding() - 0.5).abs() < 1e-12);
        config.gain = -0.5;
        assert!((config.fractal_bounding() - 1.0 / 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_transform_follows_noise_type() {
        let mut config = NoiseConfig::default();
        assert_eq!(config.transform_type(), TransformType3D::DefaultOpenSimplex2);
        config.noise_type = NoiseType::Perlin;
        assert_eq!(config.transform_type(), TransformType3D::None);
        config.rotation_type = RotationType3D::ImproveXZPlanes;
        assert_eq!(config.transform_type(), TransformType3D::ImproveXZPlanes);
        assert_eq!(config.warp_transform_type(), TransformType3D::ImproveXZPlanes);
    }

    #[test]
    fn test_warp_transform_follows_warp_type() {
        let mut config = NoiseConfig::default();
        assert_eq!(
            config.warp_transform_type(),
            TransformType3D::DefaultOpenSimplex2
        );
        config.domain_warp_type = DomainWarpType::BasicGrid;
        assert_eq!(config.warp_transform_type(), TransformType3D::None);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let mut config = NoiseConfig::default();
        config.noise_type = NoiseType::Cellular;
        config.octaves = 5;
        let json = serde_json::to_string(&config).unwrap();
        let back: NoiseConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.noise_type, NoiseType::Cellular);
        assert_eq!(back.octaves, 5);
        assert!((back.fractal_bounding() - config.fractal_bounding()).abs() < 1e-12);
    }
}
