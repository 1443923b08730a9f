// This file is part of the float8 project.
//
// Copyright (C) 2024-2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! 8-bit E4M3 minifloat with saturating arithmetic
//!
//! A [`Float8`] is one byte: 1 sign bit, 4 exponent bits with bias 7, and 3
//! mantissa bits with an implicit leading 1.  There is no NaN and no
//! subnormal.  `0x00` is zero, and `0x7F`/`0xFF` are saturating infinities.
//!
//! The crate has two layers that agree bit for bit:
//!
//! - [`codec`] and [`arith`] compute every result directly from the bits.
//! - [`fast`] answers the same questions with one table lookup, using
//!   [`TabledOp`] codebooks memoized from the direct computation.
//!
//! ```
//! use float8::{add, decode, encode, mul};
//!
//! let one = encode(1.0);
//! assert_eq!(decode(add(one, one)), 2.0);
//! assert_eq!(decode(mul(encode(2.0), encode(0.5))), 1.0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod arith;
pub mod codec;
mod detail;
#[cfg(feature = "std")]
pub mod fast;
mod float8;
pub mod op;

pub use arith::{add, apply, div, mul, sub};
pub use codec::{
    decode, decode_many, encode, encode_into, encode_many, EXPONENT_BIAS, EXPONENT_MASK,
    EXPONENT_MAX, EXPONENT_MIN, MANTISSA_BITS, MANTISSA_MASK, NEG_INFINITY, POS_INFINITY,
    SIGN_MASK, ZERO,
};
pub use float8::Float8;
pub use op::{
    codebook_index, BinaryOp, DecodeTable, Opcode, ParseOpcodeError, ReferenceOp, TabledOp,
    CODEBOOK_LEN,
};
