// This file is part of the float8 project.
//
// Copyright (C) 2024-2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
use float8::{
    add, apply, codebook_index, decode, div, encode, fast, mul, sub, BinaryOp, DecodeTable, Opcode,
    ReferenceOp, TabledOp, CODEBOOK_LEN, NEG_INFINITY, POS_INFINITY, SIGN_MASK, ZERO,
};

const NEG_ZERO: u8 = SIGN_MASK;

fn for_all(f: impl Fn(u8) -> bool) -> bool {
    (0..=u8::MAX).all(f)
}

fn for_all_pairs(f: impl Fn(u8, u8) -> bool) -> bool {
    (0..=u8::MAX).all(|a| (0..=u8::MAX).all(|b| f(a, b)))
}

/// Neither an infinity sentinel nor the negative zero pattern
const fn is_plain(x: u8) -> bool {
    x & POS_INFINITY != POS_INFINITY && x != NEG_ZERO
}

const fn is_zero(x: u8) -> bool {
    x & !SIGN_MASK == 0
}

#[test]
fn test_tabled_matches_reference() {
    for op in Opcode::ALL {
        let tabled = TabledOp::build(op);
        let reference = ReferenceOp(op);

        assert_eq!(tabled.opcode(), op);
        assert_eq!(tabled.as_slice().len(), CODEBOOK_LEN);

        for a in 0..=u8::MAX {
            for b in 0..=u8::MAX {
                assert_eq!(
                    tabled.apply(a, b),
                    reference.apply(a, b),
                    "{op} {a:#04x} {b:#04x}"
                );
            }
        }
    }
}

#[test]
fn test_fast_matches_reference() {
    fast::init();

    assert!(for_all(|x| fast::to_f32(x).to_bits() == decode(x).to_bits()));
    assert!(for_all_pairs(|a, b| fast::add(a, b) == add(a, b)));
    assert!(for_all_pairs(|a, b| fast::sub(a, b) == sub(a, b)));
    assert!(for_all_pairs(|a, b| fast::mul(a, b) == mul(a, b)));
    assert!(for_all_pairs(|a, b| fast::div(a, b) == div(a, b)));

    for op in Opcode::ALL {
        assert!(for_all_pairs(|a, b| fast::apply(op, a, b) == apply(op, a, b)));
    }
}

#[test]
fn test_codebook_layout() {
    assert_eq!(codebook_index(0x00, 0x00), 0);
    assert_eq!(codebook_index(0x12, 0x34), 0x1234);
    assert_eq!(codebook_index(0xFF, 0xFF), CODEBOOK_LEN - 1);

    let table = fast::codebooks().get(Opcode::Mul);
    assert_eq!(table.as_slice()[0x4030], mul(0x40, 0x30));
    assert_eq!(TabledOp::memoize(table), TabledOp::build(Opcode::Mul));

    let decode_table = DecodeTable::build();
    assert_eq!(decode_table.as_slice().len(), 256);
    assert_eq!(&decode_table, fast::codebooks().decode_table());
}

#[test]
fn test_concurrent_readers() {
    std::thread::scope(|s| {
        for op in Opcode::ALL {
            s.spawn(move || {
                assert!(for_all_pairs(|a, b| fast::apply(op, a, b) == apply(op, a, b)));
            });
        }
    });
}

#[test]
fn test_decode_is_total() {
    assert!(for_all(|x| !decode(x).is_nan()));
    assert!(for_all(|x| decode(x).is_infinite() == (x & POS_INFINITY == POS_INFINITY)));
}

#[test]
fn test_exact_round_trip() {
    assert!(for_all(|x| x == NEG_ZERO || encode(decode(x)) == x));
    assert_eq!(encode(decode(NEG_ZERO)), ZERO);
}

#[test]
fn test_additive_identity() {
    assert!(for_all(|x| add(x, ZERO) == x));
    assert!(for_all(|x| add(ZERO, x) == x));
}

#[test]
fn test_self_subtraction() {
    assert!(for_all(|x| sub(x, x) == ZERO));
}

#[test]
fn test_commutativity() {
    assert!(for_all_pairs(|a, b| add(a, b) == add(b, a)));
    assert!(for_all_pairs(|a, b| mul(a, b) == mul(b, a)));
}

#[test]
fn test_division_by_zero() {
    assert!(for_all(|x| is_zero(x) || div(ZERO, x) == ZERO));
    assert!(for_all(|x| {
        let expected = if x & SIGN_MASK == 0 { POS_INFINITY } else { NEG_INFINITY };
        is_zero(x) || div(x, ZERO) == expected
    }));
}

#[test]
fn test_negative_zero_is_never_produced() {
    assert!(for_all_pairs(|a, b| mul(a, b) != NEG_ZERO));
    assert!(for_all_pairs(|a, b| div(a, b) != NEG_ZERO));
    assert!(for_all_pairs(|a, b| {
        a == NEG_ZERO || b == NEG_ZERO || (add(a, b) != NEG_ZERO && sub(a, b) != NEG_ZERO)
    }));
}

/// The intermediate is exact, so the reference engine must agree with `f32`
/// arithmetic followed by the truncating encoder.
#[test]
fn test_reference_matches_f32_arithmetic() {
    let plain = |f: fn(u8, u8) -> u8, g: fn(f32, f32) -> f32| {
        for_all_pairs(|a, b| {
            !is_plain(a) || !is_plain(b) || f(a, b) == encode(g(decode(a), decode(b)))
        })
    };

    assert!(plain(add, |x, y| x + y));
    assert!(plain(sub, |x, y| x - y));
    assert!(plain(mul, |x, y| x * y));
    assert!(for_all_pairs(|a, b| {
        !is_plain(a) || !is_plain(b) || is_zero(a) || div(a, b) == encode(decode(a) / decode(b))
    }));
}
