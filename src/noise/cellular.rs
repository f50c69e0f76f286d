//! Cellular (Worley) noise over a jittered lattice.
//!
//! Scans the 3x3 (2D) or 3x3x3 (3D) neighbourhood around the rounded sample
//! point, tracking the two smallest feature-point distances plus the hash of
//! the closest cell, then maps them through the configured return type.

use super::config::{CellularDistanceFunction, CellularReturnType};
use super::math::{
    fast_round, grad_coord_out_2d, grad_coord_out_3d, hash_2d, hash_3d, PRIME_X, PRIME_Y, PRIME_Z,
};

/// Keeps jittered feature points inside their own cell's support.
const JITTER_2D: f64 = 0.43701595;
const JITTER_3D: f64 = 0.39614353;

pub(crate) fn cellular_2d(
    seed: i32,
    x: f64,
    y: f64,
    distance_fn: CellularDistanceFunction,
    return_type: CellularReturnType,
    jitter_modifier: f64,
) -> f64 {
    let xr = fast_round(x);
    let yr = fast_round(y);

    let mut distance0 = f64::MAX;
    let mut distance1 = f64::MAX;
    let mut closest_hash: i32 = 0;

    let jitter = JITTER_2D * jitter_modifier;

    let mut x_primed = (xr - 1).wrapping_mul(PRIME_X);
    for xi in (xr - 1)..=(xr + 1) {
        let mut y_primed = (yr - 1).wrapping_mul(PRIME_Y);
        for yi in (yr - 1)..=(yr + 1) {
            let hash = hash_2d(seed, x_primed, y_primed);
            let (ox, oy) = grad_coord_out_2d(seed, x_primed, y_primed);

            let vec_x = (xi as f64 - x) + ox * jitter;
            let vec_y = (yi as f64 - y) + oy * jitter;

            let new_distance = match distance_fn {
                CellularDistanceFunction::Euclidean | CellularDistanceFunction::EuclideanSq => {
                    vec_x * vec_x + vec_y * vec_y
                }
                CellularDistanceFunction::Manhattan => vec_x.abs() + vec_y.abs(),
                CellularDistanceFunction::Hybrid => {
                    (vec_x.abs() + vec_y.abs()) + (vec_x * vec_x + vec_y * vec_y)
                }
            };

            distance1 = distance1.min(new_distance).max(distance0);
            if new_distance < distance0 {
                distance0 = new_distance;
                closest_hash = hash;
            }

            y_primed = y_primed.wrapping_add(PRIME_Y);
        }
        x_primed = x_primed.wrapping_add(PRIME_X);
    }

    if distance_fn == CellularDistanceFunction::Euclidean
        && return_type != CellularReturnType::CellValue
    {
        distance0 = distance0.sqrt();
        if !matches!(return_type, CellularReturnType::Distance) {
            distance1 = distance1.sqrt();
        }
    }

    apply_return_type(return_type, distance0, distance1, closest_hash)
}

pub(crate) fn cellular_3d(
    seed: i32,
    x: f64,
    y: f64,
    z: f64,
    distance_fn: CellularDistanceFunction,
    return_type: CellularReturnType,
    jitter_modifier: f64,
) -> f64 {
    let xr = fast_round(x);
    let yr = fast_round(y);
    let zr = fast_round(z);

    let mut distance0 = f64::MAX;
    let mut distance1 = f64::MAX;
    let mut closest_hash: i32 = 0;

    let jitter = JITTER_3D * jitter_modifier;

    let mut x_primed = (xr - 1).wrapping_mul(PRIME_X);
    for xi in (xr - 1)..=(xr + 1) {
        let mut y_primed = (yr - 1).wrapping_mul(PRIME_Y);
        for yi in (yr - 1)..=(yr + 1) {
            let mut z_primed = (zr - 1).wrapping_mul(PRIME_Z);
            for zi in (zr - 1)..=(zr + 1) {
                let hash = hash_3d(seed, x_primed, y_primed, z_primed);
                let (ox, oy, oz) = grad_coord_out_3d(seed, x_primed, y_primed, z_primed);

                let vec_x = (xi as f64 - x) + ox * jitter;
                let vec_y = (yi as f64 - y) + oy * jitter;
                let vec_z = (zi as f64 - z) + oz * jitter;

                let new_distance = match distance_fn {
                    CellularDistanceFunction::Euclidean
                    | CellularDistanceFunction::EuclideanSq => {
                        vec_x * vec_x + vec_y * vec_y + vec_z * vec_z
                    }
                    CellularDistanceFunction::Manhattan => {
                        vec_x.abs() + vec_y.abs() + vec_z.abs()
                    }
                    CellularDistanceFunction::Hybrid => {
                        (vec_x.abs() + vec_y.abs() + vec_z.abs())
                            + (vec_x * vec_x + vec_y * vec_y + vec_z * vec_z)
                    }
                };

                distance1 = distance1.min(new_distance).max(distance0);
                if new_distance < distance0 {
                    distance0 = new_distance;
                    closest_hash = hash;
                }

                z_primed = z_primed.wrapping_add(PRIME_Z);
            }
            y_primed = y_primed.wrapping_add(PRIME_Y);
        }
        x_primed = x_primed.wrapping_add(PRIME_X);
    }

    if distance_fn == CellularDistanceFunction::Euclidean
        && return_type != CellularReturnType::CellValue
    {
        distance0 = distance0.sqrt();
        if !matches!(return_type, CellularReturnType::Distance) {
            distance1 = distance1.sqrt();
        }
    }

    apply_return_type(return_type, distance0, distance1, closest_hash)
}

fn apply_return_type(
    return_type: CellularReturnType,
    distance0: f64,
    distance1: f64,
    closest_hash: i32,
) -> f64 {
    match return_type {
        CellularReturnType::CellValue => closest_hash as f64 * (1.0 / 2147483648.0),
        CellularReturnType::Distance => distance0 - 1.0,
        CellularReturnType::Distance2 => distance1 - 1.0,
        CellularReturnType::Distance2Add => (distance1 + distance0) * 0.5 - 1.0,
        CellularReturnType::Distance2Sub => distance1 - distance0 - 1.0,
        CellularReturnType::Distance2Mul => distance1 * distance0 * 0.5 - 1.0,
        CellularReturnType::Distance2Div => distance0 / distance1 - 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_constant_within_cell() {
        // Points well inside the same cell share a closest feature point.
        let sample = |x: f64, y: f64| {
            cellular_2d(
                1337,
                x,
                y,
                CellularDistanceFunction::EuclideanSq,
                CellularReturnType::CellValue,
                1.0,
            )
        };
        // Pairs this close straddle a Voronoi edge almost never; require
        // most of them to agree.
        let agreeing = (0..20)
            .filter(|&i| {
                let x = 5.0 + i as f64 * 0.37;
                let y = 3.0 - i as f64 * 0.21;
                sample(x, y).to_bits() == sample(x + 1e-4, y + 1e-4).to_bits()
            })
            .count();
        assert!(agreeing >= 18, "only {agreeing}/20 pairs share a cell value");
    }

    #[test]
    fn test_cell_value_bounded() {
        for i in 0..30 {
            for j in 0..30 {
                let x = i as f64 * 0.47 - 3.3;
                let y = j as f64 * 0.67 - 8.9;
                let v = cellular_2d(
                    7,
                    x,
                    y,
                    CellularDistanceFunction::EuclideanSq,
                    CellularReturnType::CellValue,
                    1.0,
                );
                assert!(v.abs() <= 1.0 + 1e-6, "cell value out of range: {v}");
                let v3 = cellular_3d(
                    7,
                    x,
                    y,
                    x * 0.5,
                    CellularDistanceFunction::Euclidean,
                    CellularReturnType::CellValue,
                    1.0,
                );
                assert!(v3.abs() <= 1.0 + 1e-6);
            }
        }
    }

    #[test]
    fn test_second_distance_never_below_first() {
        for i in 0..25 {
            let x = i as f64 * 0.59 + 0.1;
            let y = i as f64 * 0.31 - 4.2;
            let d1 = cellular_2d(
                3,
                x,
                y,
                CellularDistanceFunction::Euclidean,
                CellularReturnType::Distance,
                1.0,
            );
            let d2 = cellular_2d(
                3,
                x,
                y,
                CellularDistanceFunction::Euclidean,
                CellularReturnType::Distance2,
                1.0,
            );
            assert!(d2 >= d1 - 1e-12, "distance2 {d2} below distance {d1}");
        }
    }

    #[test]
    fn test_distance_metrics_disagree() {
        let mut differing = 0;
        for i in 0..50 {
            let x = i as f64 * 0.73;
            let y = i as f64 * 0.41 + 2.0;
            let e = cellular_2d(
                11,
                x,
                y,
                CellularDistanceFunction::EuclideanSq,
                CellularReturnType::Distance,
                1.0,
            );
            let m = cellular_2d(
                11,
                x,
                y,
                CellularDistanceFunction::Manhattan,
                CellularReturnType::Distance,
                1.0,
            );
            if (e - m).abs() > 1e-9 {
                differing += 1;
            }
        }
        assert!(differing >= 45);
    }
}
