// This file is part of the float8 project.
//
// Copyright (C) 2024-2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Binary operations as values, and their memoized codebooks
//!
//! [`ReferenceOp`] computes with [`arith`](crate::arith).  [`TabledOp`] looks
//! the answer up in a flat array indexed by [`codebook_index`].  Both
//! implement [`BinaryOp`], and the tables are built from the reference so
//! the two agree on every one of the 65536 operand pairs.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::{arith, codec};

/// Number of entries in a binary operation codebook
pub const CODEBOOK_LEN: usize = 1 << 16;

/// Position of `(a, b)` in a binary operation codebook
#[must_use]
pub const fn codebook_index(a: u8, b: u8) -> usize {
    (a as usize) << 8 | b as usize
}

/// One of the four arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Add,
    Sub,
    Mul,
    Div,
}

impl Opcode {
    /// Every opcode, in declaration order
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Lowercase name, also accepted by [`FromStr`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
        }
    }

    /// Operator symbol, also accepted by [`FromStr`]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The string named no known operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown float8 operation {0:?}, expected add, sub, mul, or div")]
pub struct ParseOpcodeError(String);

impl ParseOpcodeError {
    /// The rejected input
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for Opcode {
    type Err = ParseOpcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| {
                op.name().eq_ignore_ascii_case(trimmed)
                    || trimmed.chars().eq(core::iter::once(op.symbol()))
            })
            .ok_or_else(|| ParseOpcodeError(s.to_string()))
    }
}

/// A total function `(a, b) -> result` on the 8-bit encoding
pub trait BinaryOp {
    /// The operation this computes
    fn opcode(&self) -> Opcode;

    /// Compute `a op b`
    fn apply(&self, a: u8, b: u8) -> u8;
}

/// Direct computation with [`arith`](crate::arith)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceOp(pub Opcode);

impl BinaryOp for ReferenceOp {
    fn opcode(&self) -> Opcode {
        self.0
    }

    fn apply(&self, a: u8, b: u8) -> u8 {
        arith::apply(self.0, a, b)
    }
}

/// Lookup into an immutable codebook of [`CODEBOOK_LEN`] results
#[derive(Clone, PartialEq, Eq)]
pub struct TabledOp {
    opcode: Opcode,
    table: Box<[u8]>,
}

impl TabledOp {
    /// Memoize the reference implementation of `opcode`
    #[must_use]
    pub fn build(opcode: Opcode) -> Self {
        Self::memoize(&ReferenceOp(opcode))
    }

    /// Evaluate `op` on every operand pair and keep the results
    #[must_use]
    pub fn memoize(op: &impl BinaryOp) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let table = (0..CODEBOOK_LEN)
            .map(|i| op.apply((i >> 8) as u8, i as u8))
            .collect();

        Self {
            opcode: op.opcode(),
            table,
        }
    }

    /// The flat codebook, indexed by [`codebook_index`]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.table
    }
}

impl BinaryOp for TabledOp {
    fn opcode(&self) -> Opcode {
        self.opcode
    }

    #[inline]
    fn apply(&self, a: u8, b: u8) -> u8 {
        self.table[codebook_index(a, b)]
    }
}

impl fmt::Debug for TabledOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabledOp")
            .field("opcode", &self.opcode)
            .finish_non_exhaustive()
    }
}

/// Lookup table of [`decode`](crate::decode) for all 256 bytes
#[derive(Clone, PartialEq)]
pub struct DecodeTable([f32; 256]);

impl DecodeTable {
    /// Decode every byte once
    #[must_use]
    pub fn build() -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let table = core::array::from_fn(|i| codec::decode(i as u8));
        Self(table)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, value: u8) -> f32 {
        self.0[usize::from(value)]
    }

    /// The flat table, indexed by the encoded byte
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

impl Default for DecodeTable {
    fn default() -> Self {
        Self::build()
    }
}

impl fmt::Debug for DecodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeTable").finish_non_exhaustive()
    }
}
