// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Conversion between 243-trit balanced-ternary blocks and the 48-byte big-endian two's-complement
//! integers Kerl feeds to Keccak-384.
//!
//! A 243-trit chunk has its last trit forced to zero so its magnitude fits in 384 bits. The trit
//! array is evaluated directly as a signed balanced-ternary integer over fixed-precision 384-bit
//! two's-complement arithmetic; no general bigint crate is pulled in for this since the only
//! operations needed are add/negate/compare and division by the small constant 3.

use ternary::Btrit;
use std::cmp::Ordering;
use std::convert::TryFrom;

/// Number of bytes in the binary representation of a 243-trit block (the top trit is dropped).
pub const BINARY_LEN: usize = 48;
const WORDS: usize = BINARY_LEN / 4;

type Words = [u32; WORDS];

fn add(a: Words, b: Words) -> Words {
    let mut out = [0u32; WORDS];
    let mut carry: u64 = 0;
    for i in 0..WORDS {
        let sum = a[i] as u64 + b[i] as u64 + carry;
        out[i] = sum as u32;
        carry = sum >> 32;
    }
    out
}

fn not(a: Words) -> Words {
    let mut out = [0u32; WORDS];
    for i in 0..WORDS {
        out[i] = !a[i];
    }
    out
}

fn negate(a: Words) -> Words {
    add(not(a), sign_extend(1))
}

fn sub(a: Words, b: Words) -> Words {
    add(a, negate(b))
}

fn is_negative(a: Words) -> bool {
    a[WORDS - 1] & 0x8000_0000 != 0
}

fn is_zero(a: Words) -> bool {
    a.iter().all(|&w| w == 0)
}

fn cmp_signed(a: Words, b: Words) -> Ordering {
    let diff = sub(a, b);
    if is_zero(diff) {
        Ordering::Equal
    } else if is_negative(diff) {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Sign-extends a small signed value (-3..=3 suffices for our uses) into 384-bit two's complement.
fn sign_extend(v: i64) -> Words {
    let fill = if v < 0 { 0xFFFF_FFFFu32 } else { 0u32 };
    let mut out = [fill; WORDS];
    out[0] = v as u32;
    out[1] = (v >> 32) as u32;
    out
}

fn mul3(a: Words) -> Words {
    add(add(a, a), a)
}

/// Divides an unsigned 384-bit value by 3, returning the quotient and remainder.
fn divmod3(a: Words) -> (Words, u32) {
    let mut q = [0u32; WORDS];
    let mut rem: u64 = 0;
    for i in (0..WORDS).rev() {
        let cur = (rem << 32) | a[i] as u64;
        q[i] = (cur / 3) as u32;
        rem = cur % 3;
    }
    (q, rem as u32)
}

fn words_to_bytes_be(words: Words) -> [u8; BINARY_LEN] {
    let mut le = [0u8; BINARY_LEN];
    for (i, word) in words.iter().enumerate() {
        le[i * 4..i * 4 + 4].copy_from_slice(&word.to_le_bytes());
    }
    le.reverse();
    le
}

fn bytes_be_to_words(bytes: &[u8; BINARY_LEN]) -> Words {
    let mut le = *bytes;
    le.reverse();
    let mut words = [0u32; WORDS];
    for (i, word) in words.iter_mut().enumerate() {
        *word = u32::from_le_bytes(<[u8; 4]>::try_from(&le[i * 4..i * 4 + 4]).unwrap());
    }
    words
}

/// `(3^242 - 1) / 2`, the unsigned-offset half applied when re-balancing a raw Keccak output back
/// into a balanced trit array.
const HALF_MAX_T242: Words = {
    let bytes_le: [u8; BINARY_LEN] = [
        0x64, 0x89, 0xce, 0xa5, 0x69, 0x76, 0x00, 0x9f, 0x4f, 0x50, 0x84, 0x14, 0xd9, 0x00, 0xde, 0x3a, 0x6e, 0x48,
        0x24, 0x0c, 0x57, 0x9d, 0x97, 0x50, 0x02, 0xc7, 0xa4, 0x79, 0x36, 0xae, 0xbb, 0x48, 0x8b, 0x80, 0xf6, 0xa9,
        0x05, 0xa8, 0x06, 0xaa, 0xdf, 0xab, 0x7f, 0xa8, 0xef, 0xeb, 0x69, 0x5e,
    ];
    le_bytes_to_words(bytes_le)
};

/// `3^242`, used to wrap a value back into range when it falls outside `±HALF_MAX_T242`.
const P242: Words = {
    let bytes_le: [u8; BINARY_LEN] = [
        0xc9, 0x12, 0x9d, 0x4b, 0xd3, 0xec, 0x00, 0x3e, 0x9f, 0xa0, 0x08, 0x29, 0xb2, 0x01, 0xbc, 0x75, 0xdc, 0x90,
        0x48, 0x18, 0xae, 0x3a, 0x2f, 0xa1, 0x04, 0x8e, 0x49, 0xf3, 0x6c, 0x5c, 0x77, 0x91, 0x16, 0x01, 0xed, 0x53,
        0x0b, 0x50, 0x0d, 0x54, 0xbf, 0x57, 0xff, 0x50, 0xdf, 0xd7, 0xd3, 0xbc,
    ];
    le_bytes_to_words(bytes_le)
};

const fn le_bytes_to_words(bytes: [u8; BINARY_LEN]) -> Words {
    let mut words = [0u32; WORDS];
    let mut i = 0;
    while i < WORDS {
        words[i] = u32::from_le_bytes([bytes[i * 4], bytes[i * 4 + 1], bytes[i * 4 + 2], bytes[i * 4 + 3]]);
        i += 1;
    }
    words
}

/// Converts a 243-trit block (only the first 242 trits are significant; the 243rd is ignored) into
/// its 48-byte big-endian two's-complement representation.
pub fn trits_to_bytes(trits: &[Btrit]) -> [u8; BINARY_LEN] {
    debug_assert!(trits.len() >= 242);
    let mut acc: Words = [0; WORDS];
    for &trit in trits[..242].iter().rev() {
        acc = mul3(acc);
        acc = add(acc, sign_extend(trit.as_i8() as i64));
    }
    words_to_bytes_be(acc)
}

/// Inverse of [`trits_to_bytes`]: recovers a 243-trit block from its 48-byte big-endian
/// representation, with the 243rd trit forced to zero.
pub fn bytes_to_trits(bytes: &[u8; BINARY_LEN]) -> [Btrit; 243] {
    let mut val = bytes_be_to_words(bytes);

    match cmp_signed(val, HALF_MAX_T242) {
        Ordering::Greater => val = sub(val, P242),
        _ => {
            if cmp_signed(val, negate(HALF_MAX_T242)) == Ordering::Less {
                val = add(val, P242);
            }
        }
    }

    let mut unsigned = add(val, HALF_MAX_T242);
    let mut trits = [Btrit::Zero; 243];
    for slot in trits[..242].iter_mut() {
        let (q, rem) = divmod3(unsigned);
        unsigned = q;
        *slot = Btrit::try_from(rem as i8 - 1).expect("divmod3 remainder is always in 0..3");
    }
    trits
}

/// Flips every bit of a Kerl binary state, used by the squeeze continuation rule.
pub fn complement_bytes(bytes: &mut [u8; BINARY_LEN]) {
    for b in bytes.iter_mut() {
        *b = !*b;
    }
}
