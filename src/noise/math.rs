//! Shared numeric primitives for the noise generators.
//!
//! Lattice coordinates are pre-multiplied by large primes before hashing so
//! that neighbouring cells decorrelate; all integer math wraps. Gradient
//! vectors come from small fixed tables, while the "offset" vectors used by
//! cellular jitter and grid warping are derived directly from hash bits
//! (a hash byte mapped onto the unit circle/sphere), so no large random
//! vector table is needed.

use std::f64::consts::TAU;

use super::config::TransformType3D;

pub(crate) const PRIME_X: i32 = 501125321;
pub(crate) const PRIME_Y: i32 = 1136930381;
pub(crate) const PRIME_Z: i32 = 1720413743;

/// 16 unit vectors evenly spaced around the circle (22.5 degree steps).
const GRAD_2D: [[f64; 2]; 16] = [
    [1.0, 0.0],
    [0.923879532511287, 0.382683432365090],
    [0.707106781186548, 0.707106781186548],
    [0.382683432365090, 0.923879532511287],
    [0.0, 1.0],
    [-0.382683432365090, 0.923879532511287],
    [-0.707106781186548, 0.707106781186548],
    [-0.923879532511287, 0.382683432365090],
    [-1.0, 0.0],
    [-0.923879532511287, -0.382683432365090],
    [-0.707106781186548, -0.707106781186548],
    [-0.382683432365090, -0.923879532511287],
    [0.0, -1.0],
    [0.382683432365090, -0.923879532511287],
    [0.707106781186548, -0.707106781186548],
    [0.923879532511287, -0.382683432365090],
];

/// The 12 cube-edge directions (magnitude sqrt 2), with 4 repeats to fill a
/// power-of-two table.
const GRAD_3D: [[f64; 3]; 16] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
    [1.0, 1.0, 0.0],
    [0.0, -1.0, 1.0],
    [-1.0, 1.0, 0.0],
    [0.0, -1.0, -1.0],
];

#[inline(always)]
pub(crate) fn fast_floor(f: f64) -> i32 {
    if f >= 0.0 {
        f as i32
    } else {
        f as i32 - 1
    }
}

#[inline(always)]
pub(crate) fn fast_round(f: f64) -> i32 {
    if f >= 0.0 {
        (f + 0.5) as i32
    } else {
        (f - 0.5) as i32
    }
}

#[inline(always)]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

#[inline(always)]
pub(crate) fn interp_hermite(t: f64) -> f64 {
    t * t * (t * -2.0 + 3.0)
}

#[inline(always)]
pub(crate) fn interp_quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline(always)]
pub(crate) fn cubic_lerp(a: f64, b: f64, c: f64, d: f64, t: f64) -> f64 {
    let p = (d - c) - (a - b);
    t * t * t * p + t * t * ((a - b) - p) + t * (c - a) + b
}

/// Reflected sawtooth over [0, 2): rises 0..1 then falls back to 0.
#[inline(always)]
pub(crate) fn ping_pong(t: f64) -> f64 {
    let t = t - (t * 0.5).trunc() * 2.0;
    if t < 1.0 {
        t
    } else {
        2.0 - t
    }
}

/// Simplex skew for 2D lattice noise.
#[inline(always)]
pub(crate) fn skew_2d(x: f64, y: f64) -> (f64, f64) {
    const SQRT3: f64 = 1.7320508075688892;
    const F2: f64 = 0.5 * (SQRT3 - 1.0);
    let t = (x + y) * F2;
    (x + t, y + t)
}

/// Domain rotation for 3D lattice noise.
#[inline(always)]
pub(crate) fn rotate_3d(transform: TransformType3D, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    match transform {
        TransformType3D::None => (x, y, z),
        TransformType3D::ImproveXYPlanes => {
            let xy = x + y;
            let s2 = xy * -0.211324865405187;
            let z = z * 0.577350269189626;
            (x + s2 - z, y + s2 - z, z + xy * 0.577350269189626)
        }
        TransformType3D::ImproveXZPlanes => {
            let xz = x + z;
            let s2 = xz * -0.211324865405187;
            let y = y * 0.577350269189626;
            (x + s2 - y, y + xz * 0.577350269189626, z + s2 - y)
        }
        TransformType3D::DefaultOpenSimplex2 => {
            const R3: f64 = 2.0 / 3.0;
            let r = (x + y + z) * R3;
            (r - x, r - y, r - z)
        }
    }
}

#[inline(always)]
pub(crate) fn hash_2d(seed: i32, x_primed: i32, y_primed: i32) -> i32 {
    (seed ^ x_primed ^ y_primed).wrapping_mul(0x27d4eb2d)
}

#[inline(always)]
pub(crate) fn hash_3d(seed: i32, x_primed: i32, y_primed: i32, z_primed: i32) -> i32 {
    (seed ^ x_primed ^ y_primed ^ z_primed).wrapping_mul(0x27d4eb2d)
}

/// Hashed lattice value in [-1, 1].
#[inline(always)]
pub(crate) fn val_coord_2d(seed: i32, x_primed: i32, y_primed: i32) -> f64 {
    let hash = hash_2d(seed, x_primed, y_primed);
    let hash = hash.wrapping_mul(hash);
    let hash = hash ^ (hash << 19);
    hash as f64 * (1.0 / 2147483648.0)
}

#[inline(always)]
pub(crate) fn val_coord_3d(seed: i32, x_primed: i32, y_primed: i32, z_primed: i32) -> f64 {
    let hash = hash_3d(seed, x_primed, y_primed, z_primed);
    let hash = hash.wrapping_mul(hash);
    let hash = hash ^ (hash << 19);
    hash as f64 * (1.0 / 2147483648.0)
}

/// Dot product of the cell gradient with the offset from the lattice point.
#[inline(always)]
pub(crate) fn grad_coord_2d(seed: i32, x_primed: i32, y_primed: i32, xd: f64, yd: f64) -> f64 {
    let hash = hash_2d(seed, x_primed, y_primed);
    let hash = hash ^ (hash >> 15);
    let g = GRAD_2D[(hash & 15) as usize];
    xd * g[0] + yd * g[1]
}

#[inline(always)]
pub(crate) fn grad_coord_3d(
    seed: i32,
    x_primed: i32,
    y_primed: i32,
    z_primed: i32,
    xd: f64,
    yd: f64,
    zd: f64,
) -> f64 {
    let hash = hash_3d(seed, x_primed, y_primed, z_primed);
    let hash = hash ^ (hash >> 15);
    let g = GRAD_3D[(hash & 15) as usize];
    xd * g[0] + yd * g[1] + zd * g[2]
}

/// Unit vector derived from the low byte of a hash (angle over a full turn).
#[inline(always)]
fn unit_vec_2d(hash: i32) -> (f64, f64) {
    let a = (hash & 255) as f64 * (TAU / 256.0);
    (a.cos(), a.sin())
}

/// Unit vector on the sphere from two hash bytes: one picks the azimuth, the
/// other the z-component (area-preserving cylindrical mapping).
#[inline(always)]
fn unit_vec_3d(hash: i32) -> (f64, f64, f64) {
    let a = (hash & 255) as f64 * (TAU / 256.0);
    let z = ((hash >> 8) & 255) as f64 * (2.0 / 255.0) - 1.0;
    let r = (1.0 - z * z).max(0.0).sqrt();
    (r * a.cos(), r * a.sin(), z)
}

/// Hashed offset vector for a lattice cell (cellular jitter, grid warp).
#[inline(always)]
pub(crate) fn grad_coord_out_2d(seed: i32, x_primed: i32, y_primed: i32) -> (f64, f64) {
    unit_vec_2d(hash_2d(seed, x_primed, y_primed))
}

#[inline(always)]
pub(crate) fn grad_coord_out_3d(
    seed: i32,
    x_primed: i32,
    y_primed: i32,
    z_primed: i32,
) -> (f64, f64, f64) {
    unit_vec_3d(hash_3d(seed, x_primed, y_primed, z_primed))
}

/// Gradient dot product scaled onto a second hashed direction; used by the
/// simplex-gradient domain warp, where the warp vector carries the magnitude
/// of the local gradient contribution.
#[inline(always)]
pub(crate) fn grad_coord_dual_2d(
    seed: i32,
    x_primed: i32,
    y_primed: i32,
    xd: f64,
    yd: f64,
) -> (f64, f64) {
    let hash = hash_2d(seed, x_primed, y_primed);
    let folded = hash ^ (hash >> 15);
    let g = GRAD_2D[(folded & 15) as usize];
    let value = xd * g[0] + yd * g[1];
    let (xo, yo) = unit_vec_2d(hash >> 7);
    (value * xo, value * yo)
}

#[inline(always)]
pub(crate) fn grad_coord_dual_3d(
    seed: i32,
    x_primed: i32,
    y_primed: i32,
    z_primed: i32,
    xd: f64,
    yd: f64,
    zd: f64,
) -> (f64, f64, f64) {
    let hash = hash_3d(seed, x_primed, y_primed, z_primed);
    let folded = hash ^ (hash >> 15);
    let g = GRAD_3D[(folded & 15) as usize];
    let value = xd * g[0] + yd * g[1] + zd * g[2];
    let (xo, yo, zo) = unit_vec_3d(hash >> 6);
    (value * xo, value * yo, value * zo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_floor_matches_floor() {
        for &v in &[-2.7, -1.0, -0.3, 0.0, 0.4, 1.0, 3.9] {
            assert_eq!(fast_floor(v), v.floor() as i32, "floor of {v}");
        }
    }

    #[test]
    fn test_fast_round_matches_round() {
        for &v in &[-2.7, -1.5, -0.3, 0.0, 0.49, 1.5, 3.9] {
            assert_eq!(fast_round(v), v.round() as i32, "round of {v}");
        }
    }

    #[test]
    fn test_ping_pong_reflects() {
        assert!((ping_pong(0.25) - 0.25).abs() < 1e-12);
        assert!((ping_pong(1.25) - 0.75).abs() < 1e-12);
        assert!((ping_pong(2.25) - 0.25).abs() < 1e-12);
        assert!(ping_pong(1.0).abs() < 1e-12 || (ping_pong(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_val_coord_in_range() {
        for i in -20i32..20 {
            for j in -20i32..20 {
                let v = val_coord_2d(1337, i.wrapping_mul(PRIME_X), j.wrapping_mul(PRIME_Y));
                assert!((-1.0..=1.0).contains(&v), "value {v} out of range");
            }
        }
    }

    #[test]
    fn test_offset_vectors_are_unit_length() {
        for i in -10i32..10 {
            for j in -10i32..10 {
                let xp = i.wrapping_mul(PRIME_X);
                let yp = j.wrapping_mul(PRIME_Y);
                let (x, y) = grad_coord_out_2d(7, xp, yp);
                assert!((x * x + y * y - 1.0).abs() < 1e-9);
                let (x, y, z) = grad_coord_out_3d(7, xp, yp, 0);
                assert!((x * x + y * y + z * z - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash_2d(42, PRIME_X, PRIME_Y), hash_2d(42, PRIME_X, PRIME_Y));
        assert_ne!(hash_2d(42, PRIME_X, PRIME_Y), hash_2d(43, PRIME_X, PRIME_Y));
    }
}
