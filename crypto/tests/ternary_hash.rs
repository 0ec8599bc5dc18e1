// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use crypto::ternary::{Hash, HASH_LENGTH};
use std::convert::TryFrom;
use ternary::{Btrit, TritBuf};

#[test]
fn hash_weight() {
    for i in 0..20 {
        let mut buf = TritBuf::zeros(HASH_LENGTH);
        buf.set(HASH_LENGTH - i - 1, Btrit::PlusOne);
        let hash = Hash::try_from(buf.as_trits()).unwrap();
        assert_eq!(hash.weight(), i as u8);
    }
}

#[test]
fn hash_zeros_has_full_weight() {
    let hash = Hash::zeros();
    assert_eq!(hash.weight(), HASH_LENGTH as u8);
}

#[test]
fn wrong_length_is_rejected() {
    let buf = TritBuf::zeros(HASH_LENGTH - 1);
    assert!(Hash::try_from(buf.as_trits()).is_err());
}
