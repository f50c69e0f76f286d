//! Radial height profiles for impact craters and volcanoes.
//!
//! A profile maps normalized distance from the feature center (0 at the
//! center, 1 at the footprint edge) to a height modification in profile
//! units. Crater profiles are negative at the center; every profile is
//! exactly 0 at distance 1 so features never leak past their footprint.

use serde::{Deserialize, Serialize};

/// Shape families based on real impact and volcanic morphologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureProfile {
    /// Bowl-shaped crater with a raised rim, typical of small impacts.
    SimpleRound,
    /// Flat-floored crater with steep walls, common in flooded terrain.
    SimpleFlat,
    /// Large crater with a rebound central peak over a flat annular floor.
    ComplexFlat,
    /// Very large crater with terraced, slumped walls.
    ComplexSteps,
    /// Multi-ring basin with concentric ridges.
    ComplexRings,
    /// Viscous-lava dome with gentle slopes and a small summit crater.
    DomeVolcano,
    /// Steep explosive cone with a summit crater.
    StratoVolcano,
    /// Broad fluid-lava shield with a summit caldera.
    ShieldVolcano,
}

fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn gaussian(d: f64, center: f64, width: f64) -> f64 {
    (-((d - center) / width).powi(2)).exp()
}

impl FeatureProfile {
    /// Height modification at normalized distance `d` from the center.
    /// Returns exactly 0 for `d >= 1`.
    pub fn height(&self, d: f64) -> f64 {
        if d >= 1.0 {
            return 0.0;
        }
        match self {
            FeatureProfile::SimpleRound => {
                // Parabolic bowl; rim peak near 0.85 fades to zero at the edge.
                let floor = -(1.0 - d * d);
                let rim = gaussian(d, 0.85, 0.08) * 0.3 * (1.0 - smoothstep(0.85, 1.0, d));
                if d < 0.7 {
                    floor
                } else {
                    let blend = smoothstep(0.7, 0.85, d);
                    floor * (1.0 - blend) + (floor + rim) * blend
                }
            }
            FeatureProfile::SimpleFlat => {
                if d < 0.6 {
                    -0.8
                } else if d < 0.8 {
                    let t = (d - 0.6) / 0.2;
                    -0.8 + smoothstep(0.0, 1.0, t) * 0.8
                } else {
                    let rim = gaussian(d, 0.85, 0.07) * 0.25;
                    rim * (1.0 - smoothstep(0.85, 1.0, d))
                }
            }
            FeatureProfile::ComplexFlat => {
                // Central peak rises from the floor but stays below datum.
                let central_peak = gaussian(d, 0.0, 0.15) * 0.4;
                if d < 0.25 {
                    central_peak - 0.6
                } else if d < 0.7 {
                    -0.6
                } else if d < 0.85 {
                    let t = (d - 0.7) / 0.15;
                    -0.6 + smoothstep(0.0, 1.0, t) * 0.7
                } else {
                    let rim = gaussian(d, 0.88, 0.06) * 0.2;
                    rim * (1.0 - smoothstep(0.88, 1.0, d))
                }
            }
            FeatureProfile::ComplexSteps => {
                if d < 0.3 {
                    -0.7 + gaussian(d, 0.0, 0.1) * 0.25
                } else if d < 0.5 {
                    -0.7
                } else if d < 0.6 {
                    -0.5
                } else if d < 0.7 {
                    -0.3
                } else if d < 0.8 {
                    -0.1
                } else {
                    let rim = gaussian(d, 0.87, 0.06) * 0.2;
                    rim * (1.0 - smoothstep(0.87, 1.0, d))
                }
            }
            FeatureProfile::ComplexRings => {
                let mut height = -0.5;
                height += gaussian(d, 0.3, 0.05) * 0.3;
                height += gaussian(d, 0.55, 0.05) * 0.25;
                height += gaussian(d, 0.8, 0.05) * 0.2;
                height += gaussian(d, 0.92, 0.04) * 0.3;
                if d > 0.92 {
                    height *= 1.0 - smoothstep(0.92, 1.0, d);
                }
                height
            }
            FeatureProfile::DomeVolcano => {
                let mut dome = gaussian(d, 0.0, 0.5) * 0.8;
                if d < 0.1 {
                    dome -= (1.0 - d / 0.1) * 0.15;
                }
                if d > 0.7 {
                    dome *= 1.0 - smoothstep(0.7, 1.0, d);
                }
                dome
            }
            FeatureProfile::StratoVolcano => {
                let mut cone = (1.0 - d) * 1.2;
                if d < 0.12 {
                    let rim_boost = gaussian(d, 0.1, 0.03) * 0.15;
                    cone = cone * 0.85 + rim_boost;
                    if d < 0.08 {
                        cone -= (1.0 - d / 0.08) * 0.2;
                    }
                }
                if d > 0.85 {
                    cone *= 1.0 - smoothstep(0.85, 1.0, d);
                }
                cone
            }
            FeatureProfile::ShieldVolcano => {
                let mut shield = (1.0 - d * d) * 0.5;
                if d < 0.15 {
                    shield += gaussian(d, 0.12, 0.04) * 0.1;
                    if d < 0.1 {
                        shield -= (1.0 - d / 0.1) * 0.15;
                    }
                }
                shield
            }
        }
    }

    /// Depression (crater) or elevation (volcano).
    pub fn is_crater(&self) -> bool {
        matches!(
            self,
            FeatureProfile::SimpleRound
                | FeatureProfile::SimpleFlat
                | FeatureProfile::ComplexFlat
                | FeatureProfile::ComplexSteps
                | FeatureProfile::ComplexRings
        )
    }

    pub fn is_volcano(&self) -> bool {
        !self.is_crater()
    }

    /// Relative depth/height scale for the profile family.
    pub fn typical_multiplier(&self) -> f64 {
        match self {
            FeatureProfile::SimpleRound => 1.0,
            FeatureProfile::SimpleFlat => 0.8,
            FeatureProfile::ComplexFlat => 1.2,
            FeatureProfile::ComplexSteps => 1.3,
            FeatureProfile::ComplexRings => 1.5,
            FeatureProfile::DomeVolcano => 0.6,
            FeatureProfile::StratoVolcano => 1.4,
            FeatureProfile::ShieldVolcano => 0.4,
        }
    }
}

#[cfg(test)]
pub(crate) const ALL_PROFILES: [FeatureProfile; 8] = [
    FeatureProfile::SimpleRound,
    FeatureProfile::SimpleFlat,
    FeatureProfile::ComplexFlat,
    FeatureProfile::ComplexSteps,
    FeatureProfile::ComplexRings,
    FeatureProfile::DomeVolcano,
    FeatureProfile::StratoVolcano,
    FeatureProfile::ShieldVolcano,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_profiles_zero_at_edge() {
        for profile in ALL_PROFILES {
            assert_eq!(profile.height(1.0), 0.0, "{profile:?} nonzero at edge");
            assert_eq!(profile.height(1.5), 0.0, "{profile:?} nonzero past edge");
            // Approach from below must also fade out.
            assert!(
                profile.height(0.999).abs() < 0.05,
                "{profile:?} does not fade near the edge"
            );
        }
    }

    #[test]
    fn test_crater_centers_are_depressions() {
        for profile in ALL_PROFILES.iter().filter(|p| p.is_crater()) {
            assert!(
                profile.height(0.0) < 0.0,
                "{profile:?} center is not a depression: {}",
                profile.height(0.0)
            );
        }
    }

    #[test]
    fn test_volcano_centers_are_elevated() {
        for profile in ALL_PROFILES.iter().filter(|p| p.is_volcano()) {
            assert!(
                profile.height(0.0) > 0.0,
                "{profile:?} center is not elevated: {}",
                profile.height(0.0)
            );
        }
    }

    #[test]
    fn test_crater_rims_rise_above_floor() {
        for profile in ALL_PROFILES.iter().filter(|p| p.is_crater()) {
            let floor = profile.height(0.0);
            let rim: f64 = (80..95)
                .map(|i| profile.height(i as f64 / 100.0))
                .fold(f64::MIN, f64::max);
            assert!(rim > floor, "{profile:?} rim {rim} not above floor {floor}");
        }
    }

    #[test]
    fn test_simple_round_bowl_is_monotone_inside() {
        let p = FeatureProfile::SimpleRound;
        let mut prev = p.height(0.0);
        for i in 1..70 {
            let h = p.height(i as f64 / 100.0);
            assert!(h >= prev, "bowl not rising at d={}", i as f64 / 100.0);
            prev = h;
        }
    }

    #[test]
    fn test_multipliers_match_morphology() {
        // Multi-ring basins are the deepest family, shields the flattest.
        assert_eq!(FeatureProfile::ComplexRings.typical_multiplier(), 1.5);
        assert_eq!(FeatureProfile::ShieldVolcano.typical_multiplier(), 0.4);
    }
}
