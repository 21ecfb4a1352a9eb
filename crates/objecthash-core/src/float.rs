// crates/objecthash-core/src/float.rs
// ============================================================================
// Module: ObjectHash Numeric Normalizer
// Description: Canonical sign/exponent/mantissa encoding of real numbers.
// Purpose: Serialize equal numbers identically regardless of host float format.
// Dependencies: bigdecimal, num-traits
// ============================================================================

//! ## Overview
//! A nonzero number `x` is written as `sign exponent ":" mantissa` where
//! `|x| = m * 2^exponent` with `0.5 < m <= 1`, and the mantissa lists the
//! binary digits of `m` starting at the `2^0` place. Zero is `+0:`.
//!
//! All arithmetic runs on exact [`BigDecimal`] values, so the encoding only
//! depends on the mathematical value. Numbers whose binary expansion does not
//! terminate within [`MAX_CANONICAL_FLOAT_LEN`] characters (for example the
//! exact decimal `0.1`) are rejected.

// ============================================================================
// SECTION: Imports
// ============================================================================

use bigdecimal::BigDecimal;
use bigdecimal::num_bigint::BigInt;
use num_traits::One;
use num_traits::Zero;

use crate::error::HashError;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum length of a canonical float string, sign and exponent included.
pub const MAX_CANONICAL_FLOAT_LEN: usize = 1000;

/// Maximum magnitude of the binary exponent.
pub const MAX_BINARY_EXPONENT: i64 = 16_384;

/// Exponent of the smallest subnormal `f64` (`2^-1074`).
const F64_MIN_EXPONENT: i64 = -1074;

/// Bias plus mantissa width of the `f64` exponent field.
const F64_EXPONENT_OFFSET: i64 = 1075;

/// Width of the `f64` fraction field in bits.
const F64_FRACTION_BITS: u32 = 52;

// ============================================================================
// SECTION: Normalization
// ============================================================================

/// Normalizes an exact decimal into its canonical float string.
///
/// # Errors
///
/// Returns [`HashError::InvalidNumber`] when the binary expansion exceeds the
/// canonical length bound or the exponent exceeds [`MAX_BINARY_EXPONENT`].
pub fn normalize_float(value: &BigDecimal) -> Result<String, HashError> {
    expand(value).ok_or_else(|| HashError::invalid_number(value.to_string()))
}

/// Normalizes a host float into its canonical float string.
///
/// # Errors
///
/// Returns [`HashError::InvalidNumber`] for NaN and infinities.
pub fn normalize_f64(value: f64) -> Result<String, HashError> {
    let decimal = float_to_decimal(value)?;
    expand(&decimal).ok_or_else(|| HashError::invalid_number(value.to_string()))
}

/// Converts a finite `f64` into the exact decimal it represents.
///
/// # Errors
///
/// Returns [`HashError::InvalidNumber`] for NaN and infinities.
pub fn float_to_decimal(value: f64) -> Result<BigDecimal, HashError> {
    if !value.is_finite() {
        return Err(HashError::invalid_number(value.to_string()));
    }
    let bits = value.to_bits();
    let fraction = bits & ((1u64 << F64_FRACTION_BITS) - 1);
    let biased = i64::try_from((bits >> F64_FRACTION_BITS) & 0x7ff).unwrap_or_default();
    let (significand, exponent) = if biased == 0 {
        (fraction, F64_MIN_EXPONENT)
    } else {
        (fraction | (1u64 << F64_FRACTION_BITS), biased - F64_EXPONENT_OFFSET)
    };

    let mut digits = BigInt::from(significand);
    if value.is_sign_negative() {
        digits = -digits;
    }
    let shift = u32::try_from(exponent.unsigned_abs())
        .map_err(|_| HashError::invalid_number(value.to_string()))?;
    if exponent >= 0 {
        return Ok(BigDecimal::from(digits << shift));
    }
    // m * 2^-k == m * 5^k / 10^k
    let scaled = digits * BigInt::from(5u8).pow(shift);
    Ok(BigDecimal::new(scaled, i64::from(shift)))
}

/// Runs the sign, exponent, and mantissa expansion. `None` means a bound hit.
fn expand(value: &BigDecimal) -> Option<String> {
    if value.is_zero() {
        return Some("+0:".to_string());
    }

    let mut out = String::new();
    let mut x = if *value < BigDecimal::zero() {
        out.push('-');
        value.abs()
    } else {
        out.push('+');
        value.clone()
    };

    let one = BigDecimal::one();
    let two = BigDecimal::from(2);
    let half = BigDecimal::new(BigInt::from(5u8), 1);

    let mut exponent: i64 = 0;
    while x > one {
        x = &x * &half;
        exponent += 1;
        if exponent > MAX_BINARY_EXPONENT {
            return None;
        }
    }
    while x <= half {
        x = &x * &two;
        exponent -= 1;
        if exponent < -MAX_BINARY_EXPONENT {
            return None;
        }
    }
    out.push_str(&exponent.to_string());
    out.push(':');

    while !x.is_zero() {
        if x >= one {
            out.push('1');
            x = &x - &one;
        } else {
            out.push('0');
        }
        if out.len() >= MAX_CANONICAL_FLOAT_LEN || x >= one {
            return None;
        }
        x = &x * &two;
    }
    Some(out)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
