//! OpenSimplex2 and OpenSimplex2S gradient noise.
//!
//! The 2D entry points expect coordinates that have already been through the
//! simplex skew; the 3D entry points expect the rotation picked by the
//! engine's transform step. Both are applied in `NoiseEngine` so fractal
//! octaves share one transform per sample.

use super::math::{
    fast_floor, fast_round, grad_coord_2d, grad_coord_3d, PRIME_X, PRIME_Y, PRIME_Z,
};

const SQRT3: f64 = 1.7320508075688892;
const G2: f64 = (3.0 - SQRT3) / 6.0;

/// Offset in seed space for the second lattice sheet of OpenSimplex2S 3D.
const SEED_OFFSET_2S: i32 = 1293373;

pub(crate) fn open_simplex_2_2d(seed: i32, x: f64, y: f64) -> f64 {
    let i = fast_floor(x);
    let j = fast_floor(y);
    let xi = x - i as f64;
    let yi = y - j as f64;

    let t = (xi + yi) * G2;
    let x0 = xi - t;
    let y0 = yi - t;

    let i = i.wrapping_mul(PRIME_X);
    let j = j.wrapping_mul(PRIME_Y);

    let a = 0.5 - x0 * x0 - y0 * y0;
    let n0 = if a <= 0.0 {
        0.0
    } else {
        (a * a) * (a * a) * grad_coord_2d(seed, i, j, x0, y0)
    };

    let c = (2.0 * (1.0 - 2.0 * G2) * (1.0 / G2 - 2.0)) * t
        + (-2.0 * (1.0 - 2.0 * G2) * (1.0 - 2.0 * G2) + a);
    let n2 = if c <= 0.0 {
        0.0
    } else {
        let x2 = x0 + (2.0 * G2 - 1.0);
        let y2 = y0 + (2.0 * G2 - 1.0);
        (c * c)
            * (c * c)
            * grad_coord_2d(seed, i.wrapping_add(PRIME_X), j.wrapping_add(PRIME_Y), x2, y2)
    };

    let n1 = if y0 > x0 {
        let x1 = x0 + G2;
        let y1 = y0 + (G2 - 1.0);
        let b = 0.5 - x1 * x1 - y1 * y1;
        if b <= 0.0 {
            0.0
        } else {
            (b * b) * (b * b) * grad_coord_2d(seed, i, j.wrapping_add(PRIME_Y), x1, y1)
        }
    } else {
        let x1 = x0 + (G2 - 1.0);
        let y1 = y0 + G2;
        let b = 0.5 - x1 * x1 - y1 * y1;
        if b <= 0.0 {
            0.0
        } else {
            (b * b) * (b * b) * grad_coord_2d(seed, i.wrapping_add(PRIME_X), j, x1, y1)
        }
    };

    (n0 + n1 + n2) * 99.83685446303647
}

pub(crate) fn open_simplex_2_3d(seed: i32, x: f64, y: f64, z: f64) -> f64 {
    let mut seed = seed;
    let mut i = fast_round(x);
    let mut j = fast_round(y);
    let mut k = fast_round(z);
    let mut x0 = x - i as f64;
    let mut y0 = y - j as f64;
    let mut z0 = z - k as f64;

    let mut x_nsign = (-1.0 - x0) as i32 | 1;
    let mut y_nsign = (-1.0 - y0) as i32 | 1;
    let mut z_nsign = (-1.0 - z0) as i32 | 1;

    let mut ax0 = x_nsign as f64 * -x0;
    let mut ay0 = y_nsign as f64 * -y0;
    let mut az0 = z_nsign as f64 * -z0;

    i = i.wrapping_mul(PRIME_X);
    j = j.wrapping_mul(PRIME_Y);
    k = k.wrapping_mul(PRIME_Z);

    let mut value = 0.0;
    let mut a = (0.6 - x0 * x0) - (y0 * y0 + z0 * z0);

    // Two passes over the closest vertex pair of the BCC lattice.
    for l in 0.. {
        if a > 0.0 {
            value += (a * a) * (a * a) * grad_coord_3d(seed, i, j, k, x0, y0, z0);
        }

        if ax0 >= ay0 && ax0 >= az0 {
            let mut b = a + ax0 + ax0;
            if b > 1.0 {
                b -= 1.0;
                value += (b * b)
                    * (b * b)
                    * grad_coord_3d(
                        seed,
                        i.wrapping_sub(x_nsign.wrapping_mul(PRIME_X)),
                        j,
                        k,
                        x0 + x_nsign as f64,
                        y0,
                        z0,
                    );
            }
        } else if ay0 > ax0 && ay0 >= az0 {
            let mut b = a + ay0 + ay0;
            if b > 1.0 {
                b -= 1.0;
                value += (b * b)
                    * (b * b)
                    * grad_coord_3d(
                        seed,
                        i,
                        j.wrapping_sub(y_nsign.wrapping_mul(PRIME_Y)),
                        k,
                        x0,
                        y0 + y_nsign as f64,
                        z0,
                    );
            }
        } else {
            let mut b = a + az0 + az0;
            if b > 1.0 {
                b -= 1.0;
                value += (b * b)
                    * (b * b)
                    * grad_coord_3d(
                        seed,
                        i,
                        j,
                        k.wrapping_sub(z_nsign.wrapping_mul(PRIME_Z)),
                        x0,
                        y0,
                        z0 + z_nsign as f64,
                    );
            }
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

        seed = !seed;
    }

    value * 32.69428253173828125
}

pub(crate) fn open_simplex_2s_2d(seed: i32, x: f64, y: f64) -> f64 {
    let i = fast_floor(x);
    let j = fast_floor(y);
    let xi = x - i as f64;
    let yi = y - j as f64;

    let i = i.wrapping_mul(PRIME_X);
    let j = j.wrapping_mul(PRIME_Y);
    let i1 = i.wrapping_add(PRIME_X);
    let j1 = j.wrapping_add(PRIME_Y);

    let t = (xi + yi) * G2;
    let x0 = xi - t;
    let y0 = yi - t;

    let a0 = (2.0 / 3.0) - x0 * x0 - y0 * y0;
    let mut value = (a0 * a0) * (a0 * a0) * grad_coord_2d(seed, i, j, x0, y0);

    let a1 = (2.0 * (1.0 - 2.0 * G2) * (1.0 / G2 - 2.0)) * t
        + (-2.0 * (1.0 - 2.0 * G2) * (1.0 - 2.0 * G2) + a0);
    let x1 = x0 - (1.0 - 2.0 * G2);
    let y1 = y0 - (1.0 - 2.0 * G2);
    value += (a1 * a1) * (a1 * a1) * grad_coord_2d(seed, i1, j1, x1, y1);

    let xmyi = xi - yi;
    if t > G2 {
        if xi + xmyi > 1.0 {
            let x2 = x0 + (3.0 * G2 - 2.0);
            let y2 = y0 + (3.0 * G2 - 1.0);
            let a2 = (2.0 / 3.0) - x2 * x2 - y2 * y2;
            if a2 > 0.0 {
                value += (a2 * a2)
                    * (a2 * a2)
                    * grad_coord_2d(seed, i.wrapping_add(PRIME_X << 1), j1, x2, y2);
            }
        } else {
            let x2 = x0 + G2;
            let y2 = y0 + (G2 - 1.0);
            let a2 = (2.0 / 3.0) - x2 * x2 - y2 * y2;
            if a2 > 0.0 {
                value += (a2 * a2) * (a2 * a2) * grad_coord_2d(seed, i, j1, x2, y2);
            }
        }

        if yi - xmyi > 1.0 {
            let x3 = x0 + (3.0 * G2 - 1.0);
            let y3 = y0 + (3.0 * G2 - 2.0);
            let a3 = (2.0 / 3.0) - x3 * x3 - y3 * y3;
            if a3 > 0.0 {
                value += (a3 * a3)
                    * (a3 * a3)
                    * grad_coord_2d(seed, i1, j.wrapping_add(PRIME_Y << 1), x3, y3);
            }
        } else {
            let x3 = x0 + (G2 - 1.0);
            let y3 = y0 + G2;
            let a3 = (2.0 / 3.0) - x3 * x3 - y3 * y3;
            if a3 > 0.0 {
                value += (a3 * a3) * (a3 * a3) * grad_coord_2d(seed, i1, j, x3, y3);
            }
        }
    } else {
        if xi + xmyi < 0.0 {
            let x2 = x0 + (1.0 - G2);
            let y2 = y0 - G2;
            let a2 = (2.0 / 3.0) - x2 * x2 - y2 * y2;
            if a2 > 0.0 {
                value += (a2 * a2)
                    * (a2 * a2)
                    * grad_coord_2d(seed, i.wrapping_sub(PRIME_X), j, x2, y2);
            }
        } else {
            let x2 = x0 + (G2 - 1.0);
            let y2 = y0 + G2;
            let a2 = (2.0 / 3.0) - x2 * x2 - y2 * y2;
            if a2 > 0.0 {
                value += (a2 * a2) * (a2 * a2) * grad_coord_2d(seed, i1, j, x2, y2);
            }
        }

        if yi < xmyi {
            let x3 = x0 - G2;
            let y3 = y0 - (G2 - 1.0);
            let a3 = (2.0 / 3.0) - x3 * x3 - y3 * y3;
            if a3 > 0.0 {
                value += (a3 * a3)
                    * (a3 * a3)
                    * grad_coord_2d(seed, i, j.wrapping_sub(PRIME_Y), x3, y3);
            }
        } else {
            let x3 = x0 + G2;
            let y3 = y0 + (G2 - 1.0);
            let a3 = (2.0 / 3.0) - x3 * x3 - y3 * y3;
            if a3 > 0.0 {
                value += (a3 * a3) * (a3 * a3) * grad_coord_2d(seed, i, j1, x3, y3);
            }
        }
    }

    value * 18.24196194486065
}

pub(crate) fn open_simplex_2s_3d(seed: i32, x: f64, y: f64, z: f64) -> f64 {
    let i = fast_floor(x);
    let j = fast_floor(y);
    let k = fast_floor(z);
    let xi = x - i as f64;
    let yi = y - j as f64;
    let zi = z - k as f64;

    let i = i.wrapping_mul(PRIME_X);
    let j = j.wrapping_mul(PRIME_Y);
    let k = k.wrapping_mul(PRIME_Z);
    let seed2 = seed.wrapping_add(SEED_OFFSET_2S);

    let x_nmask = (-0.5 - xi) as i32;
    let y_nmask = (-0.5 - yi) as i32;
    let z_nmask = (-0.5 - zi) as i32;

    let x0 = xi + x_nmask as f64;
    let y0 = yi + y_nmask as f64;
    let z0 = zi + z_nmask as f64;
    let a0 = 0.75 - x0 * x0 - y0 * y0 - z0 * z0;
    let mut value = (a0 * a0)
        * (a0 * a0)
        * grad_coord_3d(
            seed,
            i.wrapping_add(x_nmask & PRIME_X),
            j.wrapping_add(y_nmask & PRIME_Y),
            k.wrapping_add(z_nmask & PRIME_Z),
            x0,
            y0,
            z0,
        );

    let x1 = xi - 0.5;
    let y1 = yi - 0.5;
    let z1 = zi - 0.5;
    let a1 = 0.75 - x1 * x1 - y1 * y1 - z1 * z1;
    value += (a1 * a1)
        * (a1 * a1)
        * grad_coord_3d(
            seed2,
            i.wrapping_add(PRIME_X),
            j.wrapping_add(PRIME_Y),
            k.wrapping_add(PRIME_Z),
            x1,
            y1,
            z1,
        );

    let x_aflip_mask0 = ((x_nmask | 1) << 1) as f64 * x1;
    let y_aflip_mask0 = ((y_nmask | 1) << 1) as f64 * y1;
    let z_aflip_mask0 = ((z_nmask | 1) << 1) as f64 * z1;
    let x_aflip_mask1 = (-2 - (x_nmask << 2)) as f64 * x1 - 1.0;
    let y_aflip_mask1 = (-2 - (y_nmask << 2)) as f64 * y1 - 1.0;
    let z_aflip_mask1 = (-2 - (z_nmask << 2)) as f64 * z1 - 1.0;

    let mut skip5 = false;
    let a2 = x_aflip_mask0 + a0;
    if a2 > 0.0 {
        let x2 = x0 - (x_nmask | 1) as f64;
        value += (a2 * a2)
            * (a2 * a2)
            * grad_coord_3d(
                seed,
                i.wrapping_add(!x_nmask & PRIME_X),
                j.wrapping_add(y_nmask & PRIME_Y),
                k.wrapping_add(z_nmask & PRIME_Z),
                x2,
                y0,
                z0,
            );
    } else {
        let a3 = y_aflip_mask0 + z_aflip_mask0 + a0;
        if a3 > 0.0 {
            let y3 = y0 - (y_nmask | 1) as f64;
            let z3 = z0 - (z_nmask | 1) as f64;
            value += (a3 * a3)
                * (a3 * a3)
                * grad_coord_3d(
                    seed,
                    i.wrapping_add(x_nmask & PRIME_X),
                    j.wrapping_add(!y_nmask & PRIME_Y),
                    k.wrapping_add(!z_nmask & PRIME_Z),
                    x0,
                    y3,
                    z3,
                );
        }

        let a4 = x_aflip_mask1 + a1;
        if a4 > 0.0 {
            let x4 = (x_nmask | 1) as f64 + x1;
            value += (a4 * a4)
                * (a4 * a4)
                * grad_coord_3d(
                    seed2,
                    i.wrapping_add(x_nmask & (PRIME_X << 1)),
                    j.wrapping_add(PRIME_Y),
                    k.wrapping_add(PRIME_Z),
                    x4,
                    y1,
                    z1,
                );
            skip5 = true;
        }
    }

    let mut skip9 = false;
    let a6 = y_aflip_mask0 + a0;
    if a6 > 0.0 {
        let y6 = y0 - (y_nmask | 1) as f64;
        value += (a6 * a6)
            * (a6 * a6)
            * grad_coord_3d(
                seed,
                i.wrapping_add(x_nmask & PRIME_X),
                j.wrapping_add(!y_nmask & PRIME_Y),
                k.wrapping_add(z_nmask & PRIME_Z),
                x0,
                y6,
                z0,
            );
    } else {
        let a7 = x_aflip_mask0 + z_aflip_mask0 + a0;
        if a7 > 0.0 {
            let x7 = x0 - (x_nmask | 1) as f64;
            let z7 = z0 - (z_nmask | 1) as f64;
            value += (a7 * a7)
                * (a7 * a7)
                * grad_coord_3d(
                    seed,
                    i.wrapping_add(!x_nmask & PRIME_X),
                    j.wrapping_add(y_nmask & PRIME_Y),
                    k.wrapping_add(!z_nmask & PRIME_Z),
                    x7,
                    y0,
                    z7,
                );
        }

        let a8 = y_aflip_mask1 + a1;
        if a8 > 0.0 {
            let y8 = (y_nmask | 1) as f64 + y1;
            value += (a8 * a8)
                * (a8 * a8)
                * grad_coord_3d(
                    seed2,
                    i.wrapping_add(PRIME_X),
                    j.wrapping_add(y_nmask & (PRIME_Y << 1)),
                    k.wrapping_add(PRIME_Z),
                    x1,
                    y8,
                    z1,
                );
            skip9 = true;
        }
    }

    let mut skip_d = false;
    let aa = z_aflip_mask0 + a0;
    if aa > 0.0 {
        let za = z0 - (z_nmask | 1) as f64;
        value += (aa * aa)
            * (aa * aa)
            * grad_coord_3d(
                seed,
                i.wrapping_add(x_nmask & PRIME_X),
                j.wrapping_add(y_nmask & PRIME_Y),
                k.wrapping_add(!z_nmask & PRIME_Z),
                x0,
                y0,
                za,
            );
    } else {
        let ab = x_aflip_mask0 + y_aflip_mask0 + a0;
        if ab > 0.0 {
            let xb = x0 - (x_nmask | 1) as f64;
            let yb = y0 - (y_nmask | 1) as f64;
            value += (ab * ab)
                * (ab * ab)
                * grad_coord_3d(
                    seed,
                    i.wrapping_add(!x_nmask & PRIME_X),
                    j.wrapping_add(!y_nmask & PRIME_Y),
                    k.wrapping_add(z_nmask & PRIME_Z),
                    xb,
                    yb,
                    z0,
                );
        }

        let ac = z_aflip_mask1 + a1;
        if ac > 0.0 {
            let zc = (z_nmask | 1) as f64 + z1;
            value += (ac * ac)
                * (ac * ac)
                * grad_coord_3d(
                    seed2,
                    i.wrapping_add(PRIME_X),
                    j.wrapping_add(PRIME_Y),
                    k.wrapping_add(z_nmask & (PRIME_Z << 1)),
                    x1,
                    y1,
                    zc,
                );
            skip_d = true;
        }
    }

    if !skip5 {
        let a5 = y_aflip_mask1 + z_aflip_mask1 + a1;
        if a5 > 0.0 {
            let y5 = (y_nmask | 1) as f64 + y1;
            let z5 = (z_nmask | 1) as f64 + z1;
            value += (a5 * a5)
                * (a5 * a5)
                * grad_coord_3d(
                    seed2,
                    i.wrapping_add(PRIME_X),
                    j.wrapping_add(y_nmask & (PRIME_Y << 1)),
                    k.wrapping_add(z_nmask & (PRIME_Z << 1)),
                    x1,
                    y5,
                    z5,
                );
        }
    }

    if !skip9 {
        let a9 = x_aflip_mask1 + z_aflip_mask1 + a1;
        if a9 > 0.0 {
            let x9 = (x_nmask | 1) as f64 + x1;
            let z9 = (z_nmask | 1) as f64 + z1;
            value += (a9 * a9)
                * (a9 * a9)
                * grad_coord_3d(
                    seed2,
                    i.wrapping_add(x_nmask & (PRIME_X << 1)),
                    j.wrapping_add(PRIME_Y),
                    k.wrapping_add(z_nmask & (PRIME_Z << 1)),
                    x9,
                    y1,
                    z9,
                );
        }
    }

    if !skip_d {
        let ad = x_aflip_mask1 + y_aflip_mask1 + a1;
        if ad > 0.0 {
            let xd = (x_nmask | 1) as f64 + x1;
            let yd = (y_nmask | 1) as f64 + y1;
            value += (ad * ad)
                * (ad * ad)
                * grad_coord_3d(
                    seed2,
                    i.wrapping_add(x_nmask & (PRIME_X << 1)),
                    j.wrapping_add(y_nmask & (PRIME_Y << 1)),
                    k.wrapping_add(PRIME_Z),
                    xd,
                    yd,
                    z1,
                );
        }
    }

    value * 9.046026385208288
}
