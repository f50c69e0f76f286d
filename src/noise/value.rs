//! Hashed-lattice value noise, hermite-smoothed linear and cubic variants.

use super::math::{
    cubic_lerp, fast_floor, interp_hermite, lerp, val_coord_2d, val_coord_3d, PRIME_X, PRIME_Y,
    PRIME_Z,
};

pub(crate) fn value_2d(seed: i32, x: f64, y: f64) -> f64 {
    let x0 = fast_floor(x);
    let y0 = fast_floor(y);

    let xs = interp_hermite(x - x0 as f64);
    let ys = interp_hermite(y - y0 as f64);

    let x0 = x0.wrapping_mul(PRIME_X);
    let y0 = y0.wrapping_mul(PRIME_Y);
    let x1 = x0.wrapping_add(PRIME_X);
    let y1 = y0.wrapping_add(PRIME_Y);

    let xf0 = lerp(val_coord_2d(seed, x0, y0), val_coord_2d(seed, x1, y0), xs);
    let xf1 = lerp(val_coord_2d(seed, x0, y1), val_coord_2d(seed, x1, y1), xs);

    lerp(xf0, xf1, ys)
}

pub(crate) fn value_3d(seed: i32, x: f64, y: f64, z: f64) -> f64 {
    let x0 = fast_floor(x);
    let y0 = fast_floor(y);
    let z0 = fast_floor(z);

    let xs = interp_hermite(x - x0 as f64);
    let ys = interp_hermite(y - y0 as f64);
    let zs = interp_hermite(z - z0 as f64);

    let x0 = x0.wrapping_mul(PRIME_X);
    let y0 = y0.wrapping_mul(PRIME_Y);
    let z0 = z0.wrapping_mul(PRIME_Z);
    let x1 = x0.wrapping_add(PRIME_X);
    let y1 = y0.wrapping_add(PRIME_Y);
    let z1 = z0.wrapping_add(PRIME_Z);

    let xf00 = lerp(
        val_coord_3d(seed, x0, y0, z0),
        val_coord_3d(seed, x1, y0, z0),
        xs,
    );
    let xf10 = lerp(
        val_coord_3d(seed, x0, y1, z0),
        val_coord_3d(seed, x1, y1, z0),
        xs,
    );
    let xf01 = lerp(
        val_coord_3d(seed, x0, y0, z1),
        val_coord_3d(seed, x1, y0, z1),
        xs,
    );
    let xf11 = lerp(
        val_coord_3d(seed, x0, y1, z1),
        val_coord_3d(seed, x1, y1, z1),
        xs,
    );

    let yf0 = lerp(xf00, xf10, ys);
    let yf1 = lerp(xf01, xf11, ys);

    lerp(yf0, yf1, zs)
}

pub(crate) fn value_cubic_2d(seed: i32, x: f64, y: f64) -> f64 {
    let x1 = fast_floor(x);
    let y1 = fast_floor(y);

    let xs = x - x1 as f64;
    let ys = y - y1 as f64;

    let x1 = x1.wrapping_mul(PRIME_X);
    let y1 = y1.wrapping_mul(PRIME_Y);
    let x0 = x1.wrapping_sub(PRIME_X);
    let y0 = y1.wrapping_sub(PRIME_Y);
    let x2 = x1.wrapping_add(PRIME_X);
    let y2 = y1.wrapping_add(PRIME_Y);
    let x3 = x1.wrapping_add(PRIME_X.wrapping_mul(2));
    let y3 = y1.wrapping_add(PRIME_Y.wrapping_mul(2));

    cubic_lerp(
        cubic_lerp(
            val_coord_2d(seed, x0, y0),
            val_coord_2d(seed, x1, y0),
            val_coord_2d(seed, x2, y0),
            val_coord_2d(seed, x3, y0),
            xs,
        ),
        cubic_lerp(
            val_coord_2d(seed, x0, y1),
            val_coord_2d(seed, x1, y1),
            val_coord_2d(seed, x2, y1),
            val_coord_2d(seed, x3, y1),
            xs,
        ),
        cubic_lerp(
            val_coord_2d(seed, x0, y2),
            val_coord_2d(seed, x1, y2),
            val_coord_2d(seed, x2, y2),
            val_coord_2d(seed, x3, y2),
            xs,
        ),
        cubic_lerp(
            val_coord_2d(seed, x0, y3),
            val_coord_2d(seed, x1, y3),
            val_coord_2d(seed, x2, y3),
            val_coord_2d(seed, x3, y3),
            xs,
        ),
        ys,
    ) * (1.0 / (1.5 * 1.5))
}

pub(crate) fn value_cubic_3d(seed: i32, x: f64, y: f64, z: f64) -> f64 {
    let x1 = fast_floor(x);
    let y1 = fast_floor(y);
    let z1 = fast_floor(z);

    let xs = x - x1 as f64;
    let ys = y - y1 as f64;
    let zs = z - z1 as f64;

    let x1 = x1.wrapping_mul(PRIME_X);
    let y1 = y1.wrapping_mul(PRIME_Y);
    let z1 = z1.wrapping_mul(PRIME_Z);
    let x0 = x1.wrapping_sub(PRIME_X);
    let y0 = y1.wrapping_sub(PRIME_Y);
    let z0 = z1.wrapping_sub(PRIME_Z);
    let x2 = x1.wrapping_add(PRIME_X);
    let y2 = y1.wrapping_add(PRIME_Y);
    let z2 = z1.wrapping_add(PRIME_Z);
    let x3 = x1.wrapping_add(PRIME_X.wrapping_mul(2));
    let y3 = y1.wrapping_add(PRIME_Y.wrapping_mul(2));
    let z3 = z1.wrapping_add(PRIME_Z.wrapping_mul(2));

    let layer = |zp: i32| -> f64 {
        cubic_lerp(
            cubic_lerp(
                val_coord_3d(seed, x0, y0, zp),
                val_coord_3d(seed, x1, y0, zp),
                val_coord_3d(seed, x2, y0, zp),
                val_coord_3d(seed, x3, y0, zp),
                xs,
            ),
            cubic_lerp(
                val_coord_3d(seed, x0, y1, zp),
                val_coord_3d(seed, x1, y1, zp),
                val_coord_3d(seed, x2, y1, zp),
                val_coord_3d(seed, x3, y1, zp),
                xs,
            ),
            cubic_lerp(
                val_coord_3d(seed, x0, y2, zp),
                val_coord_3d(seed, x1, y2, zp),
                val_coord_3d(seed, x2, y2, zp),
                val_coord_3d(seed, x3, y2, zp),
                xs,
            ),
            cubic_lerp(
                val_coord_3d(seed, x0, y3, zp),
                val_coord_3d(seed, x1, y3, zp),
                val_coord_3d(seed, x2, y3, zp),
                val_coord_3d(seed, x3, y3, zp),
                xs,
            ),
            ys,
        )
    };

    cubic_lerp(layer(z0), layer(z1), layer(z2), layer(z3), zs) * (1.0 / (1.5 * 1.5 * 1.5))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_matches_lattice_hash_at_integers() {
        for i in -3..4 {
            for j in -3..4 {
                let direct = val_coord_2d(
                    42,
                    (i as i32).wrapping_mul(PRIME_X),
                    (j as i32).wrapping_mul(PRIME_Y),
                );
                let sampled = value_2d(42, i as f64, j as f64);
                assert!((direct - sampled).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_value_bounded() {
        for i in 0..40 {
            for j in 0..40 {
                let x = i as f64 * 0.43 - 6.1;
                let y = j as f64 * 0.61 - 3.7;
                assert!(value_2d(9, x, y).abs() <= 1.0 + 1e-6);
                assert!(value_3d(9, x, y, x - y).abs() <= 1.0 + 1e-6);
                assert!(value_cubic_2d(9, x, y).abs() <= 1.0 + 1e-6);
                assert!(value_cubic_3d(9, x, y, x - y).abs() <= 1.0 + 1e-6);
            }
        }
    }
}
