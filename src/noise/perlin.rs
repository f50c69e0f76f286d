//! Classic Perlin gradient noise with quintic fade.

use super::math::{
    fast_floor, grad_coord_2d, grad_coord_3d, interp_quintic, lerp, PRIME_X, PRIME_Y, PRIME_Z,
};

pub(crate) fn perlin_2d(seed: i32, x: f64, y: f64) -> f64 {
    let x0 = fast_floor(x);
    let y0 = fast_floor(y);

    let xd0 = x - x0 as f64;
    let yd0 = y - y0 as f64;
    let xd1 = xd0 - 1.0;
    let yd1 = yd0 - 1.0;

    let xs = interp_quintic(xd0);
    let ys = interp_quintic(yd0);

    let x0 = x0.wrapping_mul(PRIME_X);
    let y0 = y0.wrapping_mul(PRIME_Y);
    let x1 = x0.wrapping_add(PRIME_X);
    let y1 = y0.wrapping_add(PRIME_Y);

    let xf0 = lerp(
        grad_coord_2d(seed, x0, y0, xd0, yd0),
        grad_coord_2d(seed, x1, y0, xd1, yd0),
        xs,
    );
    let xf1 = lerp(
        grad_coord_2d(seed, x0, y1, xd0, yd1),
        grad_coord_2d(seed, x1, y1, xd1, yd1),
        xs,
    );

    lerp(xf0, xf1, ys) * 1.4247691104677813
}

pub(crate) fn perlin_3d(seed: i32, x: f64, y: f64, z: f64) -> f64 {
    let x0 = fast_floor(x);
    let y0 = fast_floor(y);
    let z0 = fast_floor(z);

    let xd0 = x - x0 as f64;
    let yd0 = y - y0 as f64;
    let zd0 = z - z0 as f64;
    let xd1 = xd0 - 1.0;
    let yd1 = yd0 - 1.0;
    let zd1 = zd0 - 1.0;

    let xs = interp_quintic(xd0);
    let ys = interp_quintic(yd0);
    let zs = interp_quintic(zd0);

    let x0 = x0.wrapping_mul(PRIME_X);
    let y0 = y0.wrapping_mul(PRIME_Y);
    let z0 = z0.wrapping_mul(PRIME_Z);
    let x1 = x0.wrapping_add(PRIME_X);
    let y1 = y0.wrapping_add(PRIME_Y);
    let z1 = z0.wrapping_add(PRIME_Z);

    let xf00 = lerp(
        grad_coord_3d(seed, x0, y0, z0, xd0, yd0, zd0),
        grad_coord_3d(seed, x1, y0, z0, xd1, yd0, zd0),
        xs,
    );
    let xf10 = lerp(
        grad_coord_3d(seed, x0, y1, z0, xd0, yd1, zd0),
        grad_coord_3d(seed, x1, y1, z0, xd1, yd1, zd0),
        xs,
    );
    let xf01 = lerp(
        grad_coord_3d(seed, x0, y0, z1, xd0, yd0, zd1),
        grad_coord_3d(seed, x1, y0, z1, xd1, yd0, zd1),
        xs,
    );
    let xf11 = lerp(
        grad_coord_3d(seed, x0, y1, z1, xd0, yd1, zd1),
        grad_coord_3d(seed, x1, y1, z1, xd1, yd1, zd1),
        xs,
    );

    let yf0 = lerp(xf00, xf10, ys);
    let yf1 = lerp(xf01, xf11, ys);

    lerp(yf0, yf1, zs) * 0.964921414852142
}
