// This file is part of the float8 project.
//
// Copyright (C) 2024-2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reference arithmetic on the 8-bit encoding
//!
//! Every operation unpacks its operands into a sign, a biased exponent, and
//! an `f32` mantissa in `[1, 2)`, computes on those, and packs the result
//! directly.  The `f32` intermediate is wide enough that alignment, sums,
//! and products are exact, so the only rounding is the final truncation to
//! 3 mantissa bits, which matches [`encode`](crate::encode).
//!
//! All operations are total.  Overflow saturates to the signed infinity
//! sentinel and underflow flushes to [`ZERO`].
//!
//! These functions are the ground truth for the codebooks in
//! [`TabledOp`](crate::TabledOp) and the [`fast`](crate::fast) path.

use core::cmp::Ordering;

use crate::codec::{
    compose, infinity, is_zero, EXPONENT_BIAS, EXPONENT_MASK, EXPONENT_MAX, EXPONENT_MIN,
    MANTISSA_BITS, MANTISSA_MASK, MANTISSA_SCALE, SIGN_MASK, ZERO,
};
use crate::detail::exp2i;
use crate::op::Opcode;

/// Sign, biased exponent, and mantissa in `[1, 2)` of a nonzero operand
#[derive(Debug, Clone, Copy)]
struct Unpacked {
    sign: u8,
    exponent: i32,
    mantissa: f32,
}

impl Unpacked {
    fn new(bits: u8) -> Self {
        Self {
            sign: bits >> 7,
            exponent: i32::from((bits & EXPONENT_MASK) >> MANTISSA_BITS),
            mantissa: 1.0 + f32::from(bits & MANTISSA_MASK) / MANTISSA_SCALE,
        }
    }

    /// Bring a positive mantissa back into `[1, 2)`
    fn normalize(mut self) -> Self {
        if self.mantissa >= 2.0 {
            self.mantissa /= 2.0;
            self.exponent += 1;
        }
        while self.mantissa < 1.0 && self.mantissa > 0.0 {
            self.mantissa *= 2.0;
            self.exponent -= 1;
        }
        self
    }

    /// Saturate and truncate to the 8-bit encoding
    fn pack(self) -> u8 {
        if self.exponent > EXPONENT_MAX {
            return infinity(self.sign);
        }
        if self.exponent < EXPONENT_MIN {
            return ZERO;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let mantissa = ((self.mantissa - 1.0) * MANTISSA_SCALE) as u8;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let packed = compose(self.sign, self.exponent as u8, mantissa.min(MANTISSA_MASK));

        // The lowest exponent with an empty mantissa is zero, whatever the sign
        if is_zero(packed) {
            ZERO
        } else {
            packed
        }
    }
}

/// `a + b`
///
/// Adding [`ZERO`] on either side returns the other operand unchanged.
/// Exact cancellation gives [`ZERO`].
#[must_use]
pub fn add(a: u8, b: u8) -> u8 {
    if b == ZERO {
        return a;
    }
    if is_zero(a) {
        return b;
    }
    if is_zero(b) {
        return a;
    }

    let mut x = Unpacked::new(a);
    let mut y = Unpacked::new(b);

    match x.exponent.cmp(&y.exponent) {
        Ordering::Greater => y.mantissa /= exp2i(x.exponent - y.exponent),
        Ordering::Less => x.mantissa /= exp2i(y.exponent - x.exponent),
        Ordering::Equal => (),
    }

    let (sign, mantissa) = if x.sign == y.sign {
        (x.sign, x.mantissa + y.mantissa)
    } else {
        match x.mantissa.total_cmp(&y.mantissa) {
            Ordering::Greater => (x.sign, x.mantissa - y.mantissa),
            Ordering::Less => (y.sign, y.mantissa - x.mantissa),
            Ordering::Equal => return ZERO,
        }
    };

    Unpacked {
        sign,
        exponent: x.exponent.max(y.exponent),
        mantissa,
    }
    .normalize()
    .pack()
}

/// `a - b`
///
/// Subtracting any byte from itself gives [`ZERO`], infinities included.
#[must_use]
pub fn sub(a: u8, b: u8) -> u8 {
    if a == b {
        return ZERO;
    }
    add(a, b ^ SIGN_MASK)
}

/// `a × b`
#[must_use]
pub fn mul(a: u8, b: u8) -> u8 {
    if is_zero(a) || is_zero(b) {
        return ZERO;
    }

    let x = Unpacked::new(a);
    let y = Unpacked::new(b);

    Unpacked {
        sign: x.sign ^ y.sign,
        exponent: x.exponent + y.exponent - EXPONENT_BIAS,
        mantissa: x.mantissa * y.mantissa,
    }
    .normalize()
    .pack()
}

/// `a ÷ b`
///
/// A zero dividend gives [`ZERO`] even for a zero divisor.  A zero divisor
/// gives the infinity sentinel with the sign of `a`.
#[must_use]
pub fn div(a: u8, b: u8) -> u8 {
    if is_zero(a) {
        return ZERO;
    }
    if is_zero(b) {
        return infinity(a >> 7);
    }

    let x = Unpacked::new(a);
    let y = Unpacked::new(b);

    Unpacked {
        sign: x.sign ^ y.sign,
        exponent: x.exponent - y.exponent + EXPONENT_BIAS,
        mantissa: x.mantissa / y.mantissa,
    }
    .normalize()
    .pack()
}

/// Evaluate `opcode` on `a` and `b`
///
/// This is the function a table generator enumerates over all 65536 pairs.
#[must_use]
pub fn apply(opcode: Opcode, a: u8, b: u8) -> u8 {
    match opcode {
        Opcode::Add => add(a, b),
        Opcode::Sub => sub(a, b),
        Opcode::Mul => mul(a, b),
        Opcode::Div => div(a, b),
    }
}
