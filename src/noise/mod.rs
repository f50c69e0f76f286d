//! Coherent-noise sampling engine.
//!
//! [`NoiseEngine`] owns a [`NoiseConfig`] and exposes 2D/3D sampling plus
//! in-place domain warping. The concrete generator dispatch is resolved
//! lazily on first sample and cached for the life of the configuration;
//! mutating the config through [`NoiseEngine::config_mut`] drops the cache.
//!
//! Sampling is pure: the same engine returns bit-identical values for the
//! same coordinates, and `&self` sampling has no observable side effects
//! beyond the one-time cache fill.

mod cellular;
mod config;
mod fractal;
mod math;
mod perlin;
mod simplex;
mod value;
mod warp;

pub use config::{
    CellularDistanceFunction, CellularReturnType, DomainWarpType, FractalType, NoiseConfig,
    NoiseType, RotationType3D,
};

use std::cell::OnceCell;

use math::{rotate_3d, skew_2d};

/// Base-generator entry points for one noise type.
#[derive(Debug)]
struct Generator {
    sample_2d: fn(&NoiseConfig, i32, f64, f64) -> f64,
    sample_3d: fn(&NoiseConfig, i32, f64, f64, f64) -> f64,
}

fn resolve_generator(noise_type: NoiseType) -> Generator {
    match noise_type {
        NoiseType::OpenSimplex2 => Generator {
            sample_2d: |_, seed, x, y| simplex::open_simplex_2_2d(seed, x, y),
            sample_3d: |_, seed, x, y, z| simplex::open_simplex_2_3d(seed, x, y, z),
        },
        NoiseType::OpenSimplex2S => Generator {
            sample_2d: |_, seed, x, y| simplex::open_simplex_2s_2d(seed, x, y),
            sample_3d: |_, seed, x, y, z| simplex::open_simplex_2s_3d(seed, x, y, z),
        },
        NoiseType::Cellular => Generator {
            sample_2d: |c, seed, x, y| {
                cellular::cellular_2d(
                    seed,
                    x,
                    y,
                    c.cellular_distance,
                    c.cellular_return,
                    c.cellular_jitter,
                )
            },
            sample_3d: |c, seed, x, y, z| {
                cellular::cellular_3d(
                    seed,
                    x,
                    y,
                    z,
                    c.cellular_distance,
                    c.cellular_return,
                    c.cellular_jitter,
                )
            },
        },
        NoiseType::Perlin => Generator {
            sample_2d: |_, seed, x, y| perlin::perlin_2d(seed, x, y),
            sample_3d: |_, seed, x, y, z| perlin::perlin_3d(seed, x, y, z),
        },
        NoiseType::ValueCubic => Generator {
            sample_2d: |_, seed, x, y| value::value_cubic_2d(seed, x, y),
            sample_3d: |_, seed, x, y, z| value::value_cubic_3d(seed, x, y, z),
        },
        NoiseType::Value => Generator {
            sample_2d: |_, seed, x, y| value::value_2d(seed, x, y),
            sample_3d: |_, seed, x, y, z| value::value_3d(seed, x, y, z),
        },
    }
}

/// Deterministic coherent-noise sampler.
#[derive(Debug)]
pub struct NoiseEngine {
    config: NoiseConfig,
    generator: OnceCell<Generator>,
}

impl NoiseEngine {
    pub fn new(config: NoiseConfig) -> Self {
        NoiseEngine {
            config,
            generator: OnceCell::new(),
        }
    }

    /// Engine with default parameters and the given seed.
    pub fn from_seed(seed: i32) -> Self {
        let mut config = NoiseConfig::default();
        config.seed = seed;
        Self::new(config)
    }

    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    /// Mutable access to the parameters; invalidates the generator cache.
    pub fn config_mut(&mut self) -> &mut NoiseConfig {
        self.generator.take();
        &mut self.config
    }

    fn generator(&self) -> &Generator {
        self.generator
            .get_or_init(|| resolve_generator(self.config.noise_type))
    }

    /// Sample at `(x, y)`, applying frequency, coordinate transform and the
    /// configured fractal policy. Result is nominally in [-1, 1].
    pub fn get_noise_2d(&self, x: f64, y: f64) -> f64 {
        let config = &self.config;
        let mut x = x * config.frequency;
        let mut y = y * config.frequency;

        match config.noise_type {
            NoiseType::OpenSimplex2 | NoiseType::OpenSimplex2S => {
                let (xs, ys) = skew_2d(x, y);
                x = xs;
                y = ys;
            }
            _ => {}
        }

        let generator = self.generator();
        let sample = |seed: i32, x: f64, y: f64| (generator.sample_2d)(config, seed, x, y);

        match config.fractal_type {
            FractalType::None
            | FractalType::DomainWarpProgressive
            | FractalType::DomainWarpIndependent => sample(config.seed, x, y),
            FractalType::Fbm => fractal::fbm_2d(config, sample, x, y),
            FractalType::Ridged => fractal::ridged_2d(config, sample, x, y),
            FractalType::PingPong => fractal::ping_pong_2d(config, sample, x, y),
            FractalType::Billow => fractal::billow_2d(config, sample, x, y),
            FractalType::HybridMulti => fractal::hybrid_multi_2d(config, sample, x, y),
        }
    }

    /// Sample at `(x, y, z)`. See [`Self::get_noise_2d`].
    pub fn get_noise_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        let config = &self.config;
        let x = x * config.frequency;
        let y = y * config.frequency;
        let z = z * config.frequency;
        let (x, y, z) = rotate_3d(config.transform_type(), x, y, z);

        let generator = self.generator();
        let sample =
            |seed: i32, x: f64, y: f64, z: f64| (generator.sample_3d)(config, seed, x, y, z);

        match config.fractal_type {
            FractalType::None
            | FractalType::DomainWarpProgressive
            | FractalType::DomainWarpIndependent => sample(config.seed, x, y, z),
            FractalType::Fbm => fractal::fbm_3d(config, sample, x, y, z),
            FractalType::Ridged => fractal::ridged_3d(config, sample, x, y, z),
            FractalType::PingPong => fractal::ping_pong_3d(config, sample, x, y, z),
            FractalType::Billow => fractal::billow_3d(config, sample, x, y, z),
            FractalType::HybridMulti => fractal::hybrid_multi_3d(config, sample, x, y, z),
        }
    }

    /// Displace `(x, y)` by the configured warp field. Pairs with a
    /// subsequent `get_noise_2d` call on the warped coordinates.
    pub fn domain_warp_2d(&self, x: &mut f64, y: &mut f64) {
        warp::domain_warp_2d(&self.config, x, y);
    }

    /// Displace `(x, y, z)` by the configured warp field.
    pub fn domain_warp_3d(&self, x: &mut f64, y: &mut f64, z: &mut f64) {
        warp::domain_warp_3d(&self.config, x, y, z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TYPES: [NoiseType; 6] = [
        NoiseType::OpenSimplex2,
        NoiseType::OpenSimplex2S,
        NoiseType::Cellular,
        NoiseType::Perlin,
        NoiseType::ValueCubic,
        NoiseType::Value,
    ];

    const FRACTALS: [FractalType; 5] = [
        FractalType::Fbm,
        FractalType::Ridged,
        FractalType::PingPong,
        FractalType::Billow,
        FractalType::HybridMulti,
    ];

    fn scan_points() -> Vec<(f64, f64)> {
        let mut points = Vec::new();
        for i in 0..16 {
            for j in 0..16 {
                points.push((i as f64 * 13.7 - 100.0, j as f64 * 17.3 - 80.0));
            }
        }
        points
    }

    #[test]
    fn test_sampling_is_bit_identical() {
        for noise_type in TYPES {
            let mut config = NoiseConfig::default();
            config.noise_type = noise_type;
            config.frequency = 0.05;
            let engine = NoiseEngine::new(config);
            for &(x, y) in &scan_points() {
                assert_eq!(
                    engine.get_noise_2d(x, y).to_bits(),
                    engine.get_noise_2d(x, y).to_bits()
                );
                assert_eq!(
                    engine.get_noise_3d(x, y, x * 0.3).to_bits(),
                    engine.get_noise_3d(x, y, x * 0.3).to_bits()
                );
            }
        }
    }

    #[test]
    fn test_two_engines_same_config_agree() {
        let mut config = NoiseConfig::default();
        config.fractal_type = FractalType::Fbm;
        config.frequency = 0.03;
        let a = NoiseEngine::new(config.clone());
        let b = NoiseEngine::new(config);
        for &(x, y) in &scan_points() {
            assert_eq!(a.get_noise_2d(x, y).to_bits(), b.get_noise_2d(x, y).to_bits());
        }
    }

    #[test]
    fn test_single_samples_bounded() {
        for noise_type in TYPES {
            // Distance-style cellular returns live in [-1, inf) by design;
            // bounds only hold for the value-flavoured returns.
            let mut config = NoiseConfig::default();
            config.noise_type = noise_type;
            config.frequency = 0.07;
            config.cellular_return = CellularReturnType::CellValue;
            let engine = NoiseEngine::new(config);
            for &(x, y) in &scan_points() {
                let v = engine.get_noise_2d(x, y);
                assert!(
                    v.abs() <= 1.0 + 1e-6,
                    "{noise_type:?} 2d out of range: {v}"
                );
                let v = engine.get_noise_3d(x, y, y * 0.7);
                assert!(
                    v.abs() <= 1.0 + 1e-6,
                    "{noise_type:?} 3d out of range: {v}"
                );
            }
        }
    }

    #[test]
    fn test_fractal_envelopes() {
        for fractal in FRACTALS {
            let mut config = NoiseConfig::default();
            config.fractal_type = fractal;
            config.frequency = 0.04;
            config.octaves = 5;
            let engine = NoiseEngine::new(config);
            let limit = if fractal == FractalType::HybridMulti {
                3.0
            } else {
                2.0
            };
            for &(x, y) in &scan_points() {
                let v = engine.get_noise_2d(x, y);
                assert!(v.abs() <= limit, "{fractal:?} out of envelope: {v}");
                let v = engine.get_noise_3d(x, y, x - y);
                assert!(v.abs() <= limit, "{fractal:?} 3d out of envelope: {v}");
            }
        }
    }

    #[test]
    fn test_fractal_policies_are_distinct() {
        let points = scan_points();
        for (i, a) in FRACTALS.iter().enumerate() {
            for b in &FRACTALS[i + 1..] {
                let mut ca = NoiseConfig::default();
                ca.fractal_type = *a;
                ca.frequency = 0.04;
                let mut cb = ca.clone();
                cb.fractal_type = *b;
                let ea = NoiseEngine::new(ca);
                let eb = NoiseEngine::new(cb);
                let differing = points
                    .iter()
                    .filter(|&&(x, y)| (ea.get_noise_2d(x, y) - eb.get_noise_2d(x, y)).abs() > 1e-9)
                    .count();
                assert!(
                    differing * 10 >= points.len() * 9,
                    "{a:?} vs {b:?}: only {differing}/{} differ",
                    points.len()
                );
            }
        }
    }

    #[test]
    fn test_base_generators_distinct_under_fbm() {
        let points = scan_points();
        for (i, a) in TYPES.iter().enumerate() {
            for b in &TYPES[i + 1..] {
                let mut ca = NoiseConfig::default();
                ca.noise_type = *a;
                ca.fractal_type = FractalType::Fbm;
                ca.frequency = 0.04;
                ca.cellular_return = CellularReturnType::CellValue;
                let mut cb = ca.clone();
                cb.noise_type = *b;
                let ea = NoiseEngine::new(ca);
                let eb = NoiseEngine::new(cb);
                let differing = points
                    .iter()
                    .filter(|&&(x, y)| (ea.get_noise_2d(x, y) - eb.get_noise_2d(x, y)).abs() > 1e-9)
                    .count();
                assert!(
                    differing * 10 >= points.len() * 9,
                    "{a:?} vs {b:?}: only {differing}/{} differ",
                    points.len()
                );
            }
        }
    }

    #[test]
    fn test_warped_sampling_deterministic() {
        let mut config = NoiseConfig::default();
        config.domain_warp_amp = 30.0;
        config.frequency = 0.02;
        let engine = NoiseEngine::new(config);

        let sample_warped = |x: f64, y: f64| {
            let (mut wx, mut wy) = (x, y);
            engine.domain_warp_2d(&mut wx, &mut wy);
            engine.get_noise_2d(wx, wy)
        };

        for &(x, y) in &scan_points() {
            assert_eq!(sample_warped(x, y).to_bits(), sample_warped(x, y).to_bits());
        }
    }

    #[test]
    fn test_config_mut_rebuilds_dispatch() {
        let mut engine = NoiseEngine::from_seed(42);
        let before = engine.get_noise_2d(10.0, 20.0);
        engine.config_mut().noise_type = NoiseType::Value;
        let after = engine.get_noise_2d(10.0, 20.0);
        assert!((before - after).abs() > 1e-12);
    }
}
