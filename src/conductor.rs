//! Conductor proxy and Chen's ratio for a decomposition N = p + q.
//!
//! The proxy is the square of the odd-radical product
//!   base = rad_odd(p) * rad_odd(q) * rad_odd(N/2)^2
//!   conductor = base^2
//! and Chen's ratio normalizes it against N:
//!   rho = ln(conductor) / ln(N).
//!
//! The squaring convention is what the exported reference tables reproduce;
//! both the single-N and the range-scan paths go through this module so the
//! formula exists in exactly one place.
//!
//! When N is an exact power of two, N/2 is as well, rad_odd(N/2) = 1, and
//! the proxy collapses to (rad_odd(p) * rad_odd(q))^2. That degeneracy falls
//! out of the formula with no special case and downstream tables depend on
//! it exactly.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use crate::radical::odd_radical;

/// Conductor proxy for the decomposition N = p + q, with q = N - p.
///
/// Callers guarantee p < N and N even; the value grows past `u64` for N in
/// the tens of thousands, hence the `BigUint`.
pub fn conductor_proxy(n: u64, p: u64) -> BigUint {
    let q = n - p;
    let half = n / 2;

    let base = BigUint::from(odd_radical(p))
        * BigUint::from(odd_radical(q))
        * BigUint::from(odd_radical(half)).pow(2);

    &base * &base
}

/// Chen's ratio rho = ln(conductor) / ln(N).
///
/// Returns 0.0 when N <= 1 or when the conductor degenerates to <= 1
/// (both radicals collapse, i.e. both summands are powers of two). That
/// fallback is a defined value, not an error.
pub fn chens_ratio(n: u64, p: u64) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    let cond = conductor_proxy(n, p);
    if cond <= BigUint::one() {
        return 0.0;
    }
    ln_biguint(&cond) / (n as f64).ln()
}

/// Natural log of a positive `BigUint`.
///
/// Goes through `f64` directly when the value fits; beyond `f64` range it
/// splits into a top-64-bit mantissa plus `shift * ln 2`.
fn ln_biguint(value: &BigUint) -> f64 {
    match value.to_f64() {
        Some(v) if v.is_finite() && v > 0.0 => v.ln(),
        _ => {
            let bits = value.bits();
            let shift = bits.saturating_sub(64);
            let head = (value >> shift).to_f64().unwrap_or(f64::MAX);
            head.ln() + shift as f64 * std::f64::consts::LN_2
        }
    }
}
