// This file is part of the float8 project.
//
// Copyright (C) 2024-2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(not(feature = "std"))]
use crate::arith as engine;
use crate::codec::{self, is_zero, NEG_INFINITY, POS_INFINITY, SIGN_MASK, ZERO};
#[cfg(feature = "std")]
use crate::fast as engine;

/// 8-bit E4M3 minifloat
///
/// Arithmetic saturates instead of producing NaN.  With the `std` feature it
/// goes through the shared codebooks in [`fast`](crate::fast); without it,
/// through [`arith`](crate::arith).  Both give identical bits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Float8(u8);

impl Float8 {
    pub const ZERO: Self = Self(ZERO);
    pub const ONE: Self = Self(0x38);
    pub const INFINITY: Self = Self(POS_INFINITY);
    pub const NEG_INFINITY: Self = Self(NEG_INFINITY);

    /// Largest finite value, 448
    pub const MAX: Self = Self(0x7E);

    /// Smallest finite value, -448
    pub const MIN: Self = Self(0xFE);

    /// Smallest positive value, 1.125 × 2<sup>-7</sup>
    pub const MIN_POSITIVE: Self = Self(0x01);

    #[must_use]
    pub const fn from_bits(v: u8) -> Self {
        Self(v)
    }

    #[must_use]
    pub const fn to_bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn from_f32(x: f32) -> Self {
        Self(codec::encode(x))
    }

    #[must_use]
    pub fn to_f32(self) -> f32 {
        codec::decode(self.0)
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        is_zero(self.0)
    }

    #[must_use]
    pub const fn is_infinite(self) -> bool {
        self.0 & !SIGN_MASK == POS_INFINITY
    }

    #[must_use]
    pub const fn is_finite(self) -> bool {
        !self.is_infinite()
    }

    /// Whether the sign bit is set and the value is not zero
    #[must_use]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & SIGN_MASK != 0 && !self.is_zero()
    }
}

impl From<f32> for Float8 {
    fn from(x: f32) -> Self {
        Self::from_f32(x)
    }
}

impl From<Float8> for f32 {
    fn from(x: Float8) -> Self {
        x.to_f32()
    }
}

impl fmt::Display for Float8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}

impl Neg for Float8 {
    type Output = Self;

    fn neg(self) -> Self {
        if self.is_zero() {
            Self::ZERO
        } else {
            Self(self.0 ^ SIGN_MASK)
        }
    }
}

macro_rules! binary_op {
    ($Trait:ident, $method:ident, $AssignTrait:ident, $assign:ident) => {
        impl $Trait for Float8 {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self(engine::$method(self.0, rhs.0))
            }
        }

        impl $AssignTrait for Float8 {
            fn $assign(&mut self, rhs: Self) {
                *self = $Trait::$method(*self, rhs);
            }
        }
    };
}

binary_op!(Add, add, AddAssign, add_assign);
binary_op!(Sub, sub, SubAssign, sub_assign);
binary_op!(Mul, mul, MulAssign, mul_assign);
binary_op!(Div, div, DivAssign, div_assign);

impl num_traits::Zero for Float8 {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(*self)
    }
}

impl num_traits::One for Float8 {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}
