//! Interpolation curves and lattice helpers.
//!
//! Everything here is a small `#[inline]` function on `f64`. The exact operation
//! order matters: the noise kernels are regression-tested bit-for-bit, so these
//! helpers must not be "simplified" into algebraically equal forms.

/// Values at or beyond this magnitude are folded back by [`make_int32_range`].
const INT32_FOLD: f64 = 1_073_741_824.0;

/// Linear interpolation between `n0` and `n1`.
///
/// `a` is expected in `[0, 1]`. Computed as `(1 - a) * n0 + a * n1`, which is
/// exact at both ends.
#[inline]
#[must_use]
pub fn linear_interp(n0: f64, n1: f64, a: f64) -> f64 {
    ((1.0 - a) * n0) + (a * n1)
}

/// Cubic interpolation between `n1` and `n2`, using `n0` and `n3` as the outer
/// neighbours that shape the tangents.
#[inline]
#[must_use]
pub fn cubic_interp(n0: f64, n1: f64, n2: f64, n3: f64, a: f64) -> f64 {
    let p = (n3 - n2) - (n0 - n1);
    let q = (n0 - n1) - p;
    let r = n2 - n0;
    let s = n1;
    p * a * a * a + q * a * a + r * a + s
}

/// Third-order S-curve: `3a² - 2a³`.
///
/// First derivative is zero at both ends.
#[inline]
#[must_use]
pub fn s_curve3(a: f64) -> f64 {
    a * a * (3.0 - 2.0 * a)
}

/// Fifth-order S-curve: `6a⁵ - 15a⁴ + 10a³`.
///
/// First and second derivatives are zero at both ends.
#[inline]
#[must_use]
pub fn s_curve5(a: f64) -> f64 {
    let a3 = a * a * a;
    let a4 = a3 * a;
    let a5 = a4 * a;
    (6.0 * a5) - (15.0 * a4) + (10.0 * a3)
}

/// Fold a coordinate into a range the 32-bit lattice hash can represent.
///
/// Values with `|n| < 2^30` are returned unchanged. Larger values are wrapped
/// with `2 * fmod(n, 2^30) ∓ 2^30`, which keeps octave loops well-defined for
/// very large inputs at the cost of repeating the pattern.
#[inline]
#[must_use]
pub fn make_int32_range(n: f64) -> f64 {
    if n >= INT32_FOLD {
        (2.0 * (n % INT32_FOLD)) - INT32_FOLD
    } else if n <= -INT32_FOLD {
        (2.0 * (n % INT32_FOLD)) + INT32_FOLD
    } else {
        n
    }
}

/// Integer coordinate of the lattice cell containing `x`.
///
/// Truncates positive values and subtracts one from the truncation otherwise,
/// so `0.0` and negative integers land in the cell *below* them. The kernels
/// rely on this exact rule rather than `floor`.
#[inline]
#[must_use]
pub fn lattice_floor(x: f64) -> i32 {
    if x > 0.0 {
        x as i32
    } else {
        (x as i32).wrapping_sub(1)
    }
}
