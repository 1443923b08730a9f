// This file is part of the float8 project.
//
// Copyright (C) 2024-2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Constant-time arithmetic through process-wide codebooks
//!
//! The codebooks are built from the reference implementation on first use
//! and never change afterwards, so any number of threads may read them
//! concurrently.  Call [`init`] at startup to keep construction off the hot
//! path.

use std::sync::OnceLock;

use crate::op::{BinaryOp, DecodeTable, Opcode, TabledOp};

/// Decode table and one codebook per [`Opcode`]
#[derive(Debug, Clone)]
pub struct Codebooks {
    decode: DecodeTable,
    add: TabledOp,
    sub: TabledOp,
    mul: TabledOp,
    div: TabledOp,
}

impl Codebooks {
    /// Enumerate the reference implementation over the whole domain
    #[must_use]
    pub fn build() -> Self {
        Self {
            decode: DecodeTable::build(),
            add: TabledOp::build(Opcode::Add),
            sub: TabledOp::build(Opcode::Sub),
            mul: TabledOp::build(Opcode::Mul),
            div: TabledOp::build(Opcode::Div),
        }
    }

    #[must_use]
    pub fn decode_table(&self) -> &DecodeTable {
        &self.decode
    }

    #[must_use]
    pub fn get(&self, opcode: Opcode) -> &TabledOp {
        match opcode {
            Opcode::Add => &self.add,
            Opcode::Sub => &self.sub,
            Opcode::Mul => &self.mul,
            Opcode::Div => &self.div,
        }
    }
}

static CODEBOOKS: OnceLock<Codebooks> = OnceLock::new();

/// The shared codebooks, built on first call
pub fn codebooks() -> &'static Codebooks {
    CODEBOOKS.get_or_init(|| {
        log::debug!("building float8 codebooks");
        let codebooks = Codebooks::build();
        log::debug!(
            "built float8 codebooks: {} decode entries, {} operations",
            codebooks.decode.as_slice().len(),
            Opcode::ALL.len(),
        );
        codebooks
    })
}

/// Build the shared codebooks now instead of on first lookup
pub fn init() {
    codebooks();
}

/// Table-backed [`decode`](crate::decode)
#[inline]
#[must_use]
pub fn to_f32(value: u8) -> f32 {
    codebooks().decode.get(value)
}

/// Table-backed [`add`](crate::add)
#[inline]
#[must_use]
pub fn add(a: u8, b: u8) -> u8 {
    codebooks().add.apply(a, b)
}

/// Table-backed [`sub`](crate::sub)
#[inline]
#[must_use]
pub fn sub(a: u8, b: u8) -> u8 {
    codebooks().sub.apply(a, b)
}

/// Table-backed [`mul`](crate::mul)
#[inline]
#[must_use]
pub fn mul(a: u8, b: u8) -> u8 {
    codebooks().mul.apply(a, b)
}

/// Table-backed [`div`](crate::div)
#[inline]
#[must_use]
pub fn div(a: u8, b: u8) -> u8 {
    codebooks().div.apply(a, b)
}

/// Table-backed [`apply`](crate::apply)
#[inline]
#[must_use]
pub fn apply(opcode: Opcode, a: u8, b: u8) -> u8 {
    codebooks().get(opcode).apply(a, b)
}
