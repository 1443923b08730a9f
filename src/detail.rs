// This file is part of the float8 project.
//
// Copyright (C) 2024-2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Implementation details shared by the codec and the arithmetic

/// Fast 2<sup>`x`</sup> with bit manipulation
///
/// Saturates to infinity above the `f32` range and flushes to zero below the
/// smallest subnormal.
#[must_use]
pub const fn exp2i(x: i32) -> f32 {
    f32::from_bits(match 0x7F + x {
        0xFF.. => 0xFF << 23,
        #[allow(clippy::cast_sign_loss)]
        s @ 1..=0xFE => (s as u32) << 23,
        s @ -22..=0 => 1 << (22 + s),
        _ => 0,
    })
}
