//! Domain warping: displaces sample coordinates by a vector-valued noise
//! field before the base generator reads them.
//!
//! Three application policies mirror the fractal types: a single warp, a
//! progressive fractal (each octave warps the already warped point) and an
//! independent fractal (each octave reads the original point). Three warp
//! algorithms: simplex gradients, a reduced single-direction variant, and
//! hermite-interpolated grid offsets.

use super::config::{DomainWarpType, NoiseConfig, TransformType3D};
use super::math::{
    fast_floor, fast_round, grad_coord_dual_2d, grad_coord_dual_3d, grad_coord_out_2d,
    grad_coord_out_3d, interp_hermite, lerp, rotate_3d, skew_2d, PRIME_X, PRIME_Y, PRIME_Z,
};

const SQRT3: f64 = 1.7320508075688892;
const G2: f64 = (3.0 - SQRT3) / 6.0;

/// Warp `(x, y)` in place according to the config's warp and fractal types.
pub(crate) fn domain_warp_2d(config: &NoiseConfig, x: &mut f64, y: &mut f64) {
    use super::config::FractalType;
    match config.fractal_type {
        FractalType::DomainWarpProgressive => progressive_2d(config, x, y),
        FractalType::DomainWarpIndependent => independent_2d(config, x, y),
        _ => single_2d(config, x, y),
    }
}

pub(crate) fn domain_warp_3d(config: &NoiseConfig, x: &mut f64, y: &mut f64, z: &mut f64) {
    use super::config::FractalType;
    match config.fractal_type {
        FractalType::DomainWarpProgressive => progressive_3d(config, x, y, z),
        FractalType::DomainWarpIndependent => independent_3d(config, x, y, z),
        _ => single_3d(config, x, y, z),
    }
}

fn transform_2d(config: &NoiseConfig, x: f64, y: f64) -> (f64, f64) {
    match config.warp_transform_type() {
        TransformType3D::DefaultOpenSimplex2 => skew_2d(x, y),
        _ => (x, y),
    }
}

fn single_2d(config: &NoiseConfig, x: &mut f64, y: &mut f64) {
    let seed = config.seed;
    let amp = config.domain_warp_amp * config.fractal_bounding();
    let freq = config.frequency;

    let (xs, ys) = transform_2d(config, *x, *y);
    do_single_warp_2d(config.domain_warp_type, seed, amp, freq, xs, ys, x, y);
}

fn progressive_2d(config: &NoiseConfig, x: &mut f64, y: &mut f64) {
    let mut seed = config.seed;
    let mut amp = config.domain_warp_amp * config.fractal_bounding();
    let mut freq = config.frequency;

    for _ in 0..config.octaves {
        let (xs, ys) = transform_2d(config, *x, *y);
        do_single_warp_2d(config.domain_warp_type, seed, amp, freq, xs, ys, x, y);

        seed = seed.wrapping_add(1);
        amp *= config.gain;
        freq *= config.lacunarity;
    }
}

fn independent_2d(config: &NoiseConfig, x: &mut f64, y: &mut f64) {
    let (xs, ys) = transform_2d(config, *x, *y);

    let mut seed = config.seed;
    let mut amp = config.domain_warp_amp * config.fractal_bounding();
    let mut freq = config.frequency;

    for _ in 0..config.octaves {
        do_single_warp_2d(config.domain_warp_type, seed, amp, freq, xs, ys, x, y);

        seed = seed.wrapping_add(1);
        amp *= config.gain;
        freq *= config.lacunarity;
    }
}

fn single_3d(config: &NoiseConfig, x: &mut f64, y: &mut f64, z: &mut f64) {
    let seed = config.seed;
    let amp = config.domain_warp_amp * config.fractal_bounding();
    let freq = config.frequency;

    let (xs, ys, zs) = rotate_3d(config.warp_transform_type(), *x, *y, *z);
    do_single_warp_3d(config.domain_warp_type, seed, amp, freq, xs, ys, zs, x, y, z);
}

fn progressive_3d(config: &NoiseConfig, x: &mut f64, y: &mut f64, z: &mut f64) {
    let mut seed = config.seed;
    let mut amp = config.domain_warp_amp * config.fractal_bounding();
    let mut freq = config.frequency;

    for _ in 0..config.octaves {
        let (xs, ys, zs) = rotate_3d(config.warp_transform_type(), *x, *y, *z);
        do_single_warp_3d(config.domain_warp_type, seed, amp, freq, xs, ys, zs, x, y, z);

        seed = seed.wrapping_add(1);
        amp *= config.gain;
        freq *= config.lacunarity;
    }
}

fn independent_3d(config: &NoiseConfig, x: &mut f64, y: &mut f64, z: &mut f64) {
    let (xs, ys, zs) = rotate_3d(config.warp_transform_type(), *x, *y, *z);

    let mut seed = config.seed;
    let mut amp = config.domain_warp_amp * config.fractal_bounding();
    let mut freq = config.frequency;

    for _ in 0..config.octaves {
        do_single_warp_3d(config.domain_warp_type, seed, amp, freq, xs, ys, zs, x, y, z);

        seed = seed.wrapping_add(1);
        amp *= config.gain;
        freq *= config.lacunarity;
    }
}

#[allow(clippy::too_many_arguments)]
fn do_single_warp_2d(
    warp_type: DomainWarpType,
    seed: i32,
    amp: f64,
    freq: f64,
    xs: f64,
    ys: f64,
    xr: &mut f64,
    yr: &mut f64,
) {
    match warp_type {
        DomainWarpType::OpenSimplex2 => {
            simplex_gradient_2d(seed, amp * 38.283687591552734, freq, xs, ys, xr, yr, false)
        }
        DomainWarpType::OpenSimplex2Reduced => {
            simplex_gradient_2d(seed, amp * 16.0, freq, xs, ys, xr, yr, true)
        }
        DomainWarpType::BasicGrid => basic_grid_2d(seed, amp, freq, xs, ys, xr, yr),
    }
}

#[allow(clippy::too_many_arguments)]
fn do_single_warp_3d(
    warp_type: DomainWarpType,
    seed: i32,
    amp: f64,
    freq: f64,
    xs: f64,
    ys: f64,
    zs: f64,
    xr: &mut f64,
    yr: &mut f64,
    zr: &mut f64,
) {
    match warp_type {
        DomainWarpType::OpenSimplex2 => simplex_gradient_3d(
            seed,
            amp * 32.69428253173828125,
            freq,
            xs,
            ys,
            zs,
            xr,
            yr,
            zr,
            false,
        ),
        DomainWarpType::OpenSimplex2Reduced => {
            simplex_gradient_3d(seed, amp * 7.71604938271605, freq, xs, ys, zs, xr, yr, zr, true)
        }
        DomainWarpType::BasicGrid => basic_grid_3d(seed, amp, freq, xs, ys, zs, xr, yr, zr),
    }
}

fn basic_grid_2d(seed: i32, warp_amp: f64, freq: f64, x: f64, y: f64, xr: &mut f64, yr: &mut f64) {
    let xf = x * freq;
    let yf = y * freq;

    let x0 = fast_floor(xf);
    let y0 = fast_floor(yf);

    let xs = interp_hermite(xf - x0 as f64);
    let ys = interp_hermite(yf - y0 as f64);

    let x0 = x0.wrapping_mul(PRIME_X);
    let y0 = y0.wrapping_mul(PRIME_Y);
    let x1 = x0.wrapping_add(PRIME_X);
    let y1 = y0.wrapping_add(PRIME_Y);

    let (v00x, v00y) = grad_coord_out_2d(seed, x0, y0);
    let (v10x, v10y) = grad_coord_out_2d(seed, x1, y0);
    let (v01x, v01y) = grad_coord_out_2d(seed, x0, y1);
    let (v11x, v11y) = grad_coord_out_2d(seed, x1, y1);

    let lx0 = lerp(v00x, v10x, xs);
    let ly0 = lerp(v00y, v10y, xs);
    let lx1 = lerp(v01x, v11x, xs);
    let ly1 = lerp(v01y, v11y, xs);

    *xr += lerp(lx0, lx1, ys) * warp_amp;
    *yr += lerp(ly0, ly1, ys) * warp_amp;
}

#[allow(clippy::too_many_arguments)]
fn basic_grid_3d(
    seed: i32,
    warp_amp: f64,
    freq: f64,
    x: f64,
    y: f64,
    z: f64,
    xr: &mut f64,
    yr: &mut f64,
    zr: &mut f64,
) {
    let xf = x * freq;
    let yf = y * freq;
    let zf = z * freq;

    let x0 = fast_floor(xf);
    let y0 = fast_floor(yf);
    let z0 = fast_floor(zf);

    let xs = interp_hermite(xf - x0 as f64);
    let ys = interp_hermite(yf - y0 as f64);
    let zs = interp_hermite(zf - z0 as f64);

    let x0 = x0.wrapping_mul(PRIME_X);
    let y0 = y0.wrapping_mul(PRIME_Y);
    let z0 = z0.wrapping_mul(PRIME_Z);
    let x1 = x0.wrapping_add(PRIME_X);
    let y1 = y0.wrapping_add(PRIME_Y);
    let z1 = z0.wrapping_add(PRIME_Z);

    let corner = |xp, yp, zp| grad_coord_out_3d(seed, xp, yp, zp);

    let (v000x, v000y, v000z) = corner(x0, y0, z0);
    let (v100x, v100y, v100z) = corner(x1, y0, z0);
    let (v010x, v010y, v010z) = corner(x0, y1, z0);
    let (v110x, v110y, v110z) = corner(x1, y1, z0);
    let (v001x, v001y, v001z) = corner(x0, y0, z1);
    let (v101x, v101y, v101z) = corner(x1, y0, z1);
    let (v011x, v011y, v011z) = corner(x0, y1, z1);
    let (v111x, v111y, v111z) = corner(x1, y1, z1);

    let lx0 = lerp(lerp(v000x, v100x, xs), lerp(v010x, v110x, xs), ys);
    let ly0 = lerp(lerp(v000y, v100y, xs), lerp(v010y, v110y, xs), ys);
    let lz0 = lerp(lerp(v000z, v100z, xs), lerp(v010z, v110z, xs), ys);
    let lx1 = lerp(lerp(v001x, v101x, xs), lerp(v011x, v111x, xs), ys);
    let ly1 = lerp(lerp(v001y, v101y, xs), lerp(v011y, v111y, xs), ys);
    let lz1 = lerp(lerp(v001z, v101z, xs), lerp(v011z, v111z, xs), ys);

    *xr += lerp(lx0, lx1, zs) * warp_amp;
    *yr += lerp(ly0, ly1, zs) * warp_amp;
    *zr += lerp(lz0, lz1, zs) * warp_amp;
}

#[allow(clippy::too_many_arguments)]
fn simplex_gradient_2d(
    seed: i32,
    warp_amp: f64,
    freq: f64,
    x: f64,
    y: f64,
    xr: &mut f64,
    yr: &mut f64,
    out_grad_only: bool,
) {
    let x = x * freq;
    let y = y * freq;

    let i = fast_floor(x);
    let j = fast_floor(y);
    let xi = x - i as f64;
    let yi = y - j as f64;

    let t = (xi + yi) * G2;
    let x0 = xi - t;
    let y0 = yi - t;

    let i = i.wrapping_mul(PRIME_X);
    let j = j.wrapping_mul(PRIME_Y);

    let mut vx = 0.0;
    let mut vy = 0.0;

    let mut add = |ip: i32, jp: i32, xd: f64, yd: f64, falloff: f64| {
        let aaaa = (falloff * falloff) * (falloff * falloff);
        let (xo, yo) = if out_grad_only {
            grad_coord_out_2d(seed, ip, jp)
        } else {
            grad_coord_dual_2d(seed, ip, jp, xd, yd)
        };
        vx += aaaa * xo;
        vy += aaaa * yo;
    };

    let a = 0.5 - x0 * x0 - y0 * y0;
    if a > 0.0 {
        add(i, j, x0, y0, a);
    }

    let c = (2.0 * (1.0 - 2.0 * G2) * (1.0 / G2 - 2.0)) * t
        + (-2.0 * (1.0 - 2.0 * G2) * (1.0 - 2.0 * G2) + a);
    if c > 0.0 {
        let x2 = x0 + (2.0 * G2 - 1.0);
        let y2 = y0 + (2.0 * G2 - 1.0);
        add(i.wrapping_add(PRIME_X), j.wrapping_add(PRIME_Y), x2, y2, c);
    }

    if y0 > x0 {
        let x1 = x0 + G2;
        let y1 = y0 + (G2 - 1.0);
        let b = 0.5 - x1 * x1 - y1 * y1;
        if b > 0.0 {
            add(i, j.wrapping_add(PRIME_Y), x1, y1, b);
        }
    } else {
        let x1 = x0 + (G2 - 1.0);
        let y1 = y0 + G2;
        let b = 0.5 - x1 * x1 - y1 * y1;
        if b > 0.0 {
            add(i.wrapping_add(PRIME_X), j, x1, y1, b);
        }
    }

    *xr += vx * warp_amp;
    *yr += vy * warp_amp;
}

#[allow(clippy::too_many_arguments)]
fn simplex_gradient_3d(
    seed: i32,
    warp_amp: f64,
    freq: f64,
    x: f64,
    y: f64,
    z: f64,
    xr: &mut f64,
    yr: &mut f64,
    zr: &mut f64,
    out_grad_only: bool,
) {
    let x = x * freq;
    let y = y * freq;
    let z = z * freq;

    let mut seed = seed;
    let mut i = fast_round(x);
    let mut j = fast_round(y);
    let mut k = fast_round(z);
    let mut x0 = x - i as f64;
    let mut y0 = y - j as f64;
    let mut z0 = z - k as f64;

    let mut x_nsign = (-x0 - 1.0) as i32 | 1;
    let mut y_nsign = (-y0 - 1.0) as i32 | 1;
    let mut z_nsign = (-z0 - 1.0) as i32 | 1;

    let mut ax0 = x_nsign as f64 * -x0;
    let mut ay0 = y_nsign as f64 * -y0;
    let mut az0 = z_nsign as f64 * -z0;

    i = i.wrapping_mul(PRIME_X);
    j = j.wrapping_mul(PRIME_Y);
    k = k.wrapping_mul(PRIME_Z);

    let mut vx = 0.0;
    let mut vy = 0.0;
    let mut vz = 0.0;

    let mut a = (0.6 - x0 * x0) - (y0 * y0 + z0 * z0);

    for l in 0.. {
        if a > 0.0 {
            let aaaa = (a * a) * (a * a);
            let (xo, yo, zo) = if out_grad_only {
                grad_coord_out_3d(seed, i, j, k)
            } else {
                grad_coord_dual_3d(seed, i, j, k, x0, y0, z0)
            };
            vx += aaaa * xo;
            vy += aaaa * yo;
            vz += aaaa * zo;
        }

        let mut b = a;
        let mut i1 = i;
        let mut j1 = j;
        let mut k1 = k;
        let mut x1 = x0;
        let mut y1 = y0;
        let mut z1 = z0;

        if ax0 >= ay0 && ax0 >= az0 {
            x1 += x_nsign as f64;
            b += ax0 + ax0;
            i1 = i1.wrapping_sub(x_nsign.wrapping_mul(PRIME_X));
        } else if ay0 > ax0 && ay0 >= az0 {
            y1 += y_nsign as f64;
            b += ay0 + ay0;
            j1 = j1.wrapping_sub(y_nsign.wrapping_mul(PRIME_Y));
        } else {
            z1 += z_nsign as f64;
            b += az0 + az0;
            k1 = k1.wrapping_sub(z_nsign.wrapping_mul(PRIME_Z));
        }

        if b > 1.0 {
            let b = b - 1.0;
            let bbbb = (b * b) * (b * b);
            let (xo, yo, zo) = if out_grad_only {
                grad_coord_out_3d(seed, i1, j1, k1)
            } else {
                grad_coord_dual_3d(seed, i1, j1, k1, x1, y1, z1)
            };
            vx += bbbb * xo;
            vy += bbbb * yo;
            vz += bbbb * zo;
        }

        if l == 1 {
            break;
        }

        ax0 = 0.5 - ax0;
        ay0 = 0.5 - ay0;
        az0 = 0.5 - az0;

        x0 = x_nsign as f64 * ax0;
        y0 = y_nsign as f64 * ay0;
        z0 = z_nsign as f64 * az0;

        a += (0.75 - ax0) - (ay0 + az0);

        i = i.wrapping_add((x_nsign >> 1) & PRIME_X);
        j = j.wrapping_add((y_nsign >> 1) & PRIME_Y);
        k = k.wrapping_add((z_nsign >> 1) & PRIME_Z);

        x_nsign = -x_nsign;
        y_nsign = -y_nsign;
        z_nsign = -z_nsign;

        seed = seed.wrapping_add(1293373);
    }

    *xr += vx * warp_amp;
    *yr += vy * warp_amp;
    *zr += vz * warp_amp;
}
