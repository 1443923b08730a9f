// This file is part of the float8 project.
//
// Copyright (C) 2024-2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Conversion between the 8-bit encoding and `f32`
//!
//! Layout: `s eeee mmm`.  The exponent is biased by [`EXPONENT_BIAS`] and the
//! mantissa carries an implicit leading 1.  Both directions are total.

use alloc::vec::Vec;

use crate::detail::exp2i;

/// Sign bit
pub const SIGN_MASK: u8 = 0b1000_0000;

/// Biased exponent field
pub const EXPONENT_MASK: u8 = 0b0111_1000;

/// Explicit mantissa field
pub const MANTISSA_MASK: u8 = 0b0000_0111;

/// Number of explicit mantissa bits
pub const MANTISSA_BITS: u32 = 3;

/// `2^exponent_bits / 2 - 1`
pub const EXPONENT_BIAS: i32 = 7;

/// Smallest biased exponent
pub const EXPONENT_MIN: i32 = 0;

/// Largest biased exponent
pub const EXPONENT_MAX: i32 = 15;

/// The only zero produced by conversion and arithmetic
pub const ZERO: u8 = 0x00;

/// Saturation sentinel for large positive values
pub const POS_INFINITY: u8 = EXPONENT_MASK | MANTISSA_MASK;

/// Saturation sentinel for large negative values
pub const NEG_INFINITY: u8 = SIGN_MASK | POS_INFINITY;

/// `2^MANTISSA_BITS` as a float
pub(crate) const MANTISSA_SCALE: f32 = (1 << MANTISSA_BITS) as f32;

const F32_EXPONENT_BIAS: i32 = 127;
const F32_MANTISSA_BITS: u32 = f32::MANTISSA_DIGITS - 1;

/// Infinity sentinel carrying `sign` (0 or 1)
#[must_use]
pub(crate) const fn infinity(sign: u8) -> u8 {
    if sign == 0 {
        POS_INFINITY
    } else {
        NEG_INFINITY
    }
}

/// Whether the exponent and mantissa fields are both clear
///
/// Both `0x00` and `0x80` are zero.  Only `0x00` is ever produced.
#[must_use]
pub(crate) const fn is_zero(bits: u8) -> bool {
    bits & !SIGN_MASK == 0
}

/// Pack already range-checked fields into a byte
#[must_use]
pub(crate) const fn compose(sign: u8, exponent: u8, mantissa: u8) -> u8 {
    sign << 7 | exponent << MANTISSA_BITS | mantissa & MANTISSA_MASK
}

/// Convert `f32` to the 8-bit encoding
///
/// The mantissa is truncated toward zero.  Magnitudes beyond the exponent
/// range saturate to the signed infinity sentinel; magnitudes below it,
/// including every `f32` subnormal, flush to [`ZERO`].  NaN has an all-ones
/// exponent field and so saturates like infinity, keeping its sign bit.
#[must_use]
pub const fn encode(value: f32) -> u8 {
    if value == 0.0 {
        return ZERO;
    }

    let bits = value.to_bits();
    let sign = (bits >> 31) as u8;
    #[allow(clippy::cast_possible_wrap)]
    let exponent =
        ((bits >> F32_MANTISSA_BITS) & 0xFF) as i32 - F32_EXPONENT_BIAS + EXPONENT_BIAS;

    if exponent > EXPONENT_MAX {
        return infinity(sign);
    }
    if exponent < EXPONENT_MIN {
        return ZERO;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mantissa = (bits >> (F32_MANTISSA_BITS - MANTISSA_BITS)) as u8 & MANTISSA_MASK;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let packed = compose(sign, exponent as u8, mantissa);

    if is_zero(packed) {
        ZERO
    } else {
        packed
    }
}

/// Convert the 8-bit encoding to `f32`
///
/// Every byte decodes: zeros to `0.0`, the sentinels to `±inf`, and the rest
/// to `±(1 + m/8) × 2^(e - 7)`.
#[must_use]
pub fn decode(value: u8) -> f32 {
    let magnitude = match value & !SIGN_MASK {
        ZERO => return 0.0,
        POS_INFINITY => f32::INFINITY,
        bits => {
            let exponent = i32::from(bits >> MANTISSA_BITS) - EXPONENT_BIAS;
            let mantissa = 1.0 + f32::from(bits & MANTISSA_MASK) / MANTISSA_SCALE;
            mantissa * exp2i(exponent)
        }
    };

    if value & SIGN_MASK == 0 {
        magnitude
    } else {
        -magnitude
    }
}

/// Encode a slice of `f32` into a new vector of the same length
#[must_use]
pub fn encode_many(values: &[f32]) -> Vec<u8> {
    values.iter().copied().map(encode).collect()
}

/// Encode `src` into `dst` element by element
///
/// Converts `min(src.len(), dst.len())` elements and returns that count.
pub fn encode_into(src: &[f32], dst: &mut [u8]) -> usize {
    let len = src.len().min(dst.len());
    dst.iter_mut().zip(src).for_each(|(y, &x)| *y = encode(x));
    len
}

/// Decode a slice of bytes into a new vector of the same length
#[must_use]
pub fn decode_many(values: &[u8]) -> Vec<f32> {
    values.iter().copied().map(decode).collect()
}
