// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use crypto::ternary::sponge::{CurlP27, CurlP81, Sponge};
use ternary::{Btrit, T1B1Buf, TritBuf, TryteBuf};

fn trytes_to_trits(s: &str) -> TritBuf {
    TryteBuf::try_from_str(s).unwrap().as_trits()
}

#[test]
fn curlp81_all_zero_input_is_not_all_zero_output() {
    let input: TritBuf<T1B1Buf> = TritBuf::zeros(243);
    let mut curl = CurlP81::new();
    let digest = curl.digest(&input).unwrap();
    assert_ne!(digest, TritBuf::zeros(243));
}

#[test]
fn curlp81_is_deterministic() {
    let input = trytes_to_trits("EMIDYNHBWMBCXVDEFOFWINXTERALUKYYPPHKP9JJFGJEIUY9MUDVNFZHMMWZUYUSWAIOWEVTHNWMHANBH");

    let mut curl_a = CurlP81::new();
    let digest_a = curl_a.digest(&input).unwrap();

    let mut curl_b = CurlP81::new();
    let digest_b = curl_b.digest(&input).unwrap();

    assert_eq!(digest_a, digest_b);
}

#[test]
fn curlp81_distinguishes_inputs() {
    let a = trytes_to_trits("EMIDYNHBWMBCXVDEFOFWINXTERALUKYYPPHKP9JJFGJEIUY9MUDVNFZHMMWZUYUSWAIOWEVTHNWMHANBH");
    let b = trytes_to_trits("9MIDYNHBWMBCXVDEFOFWINXTERALUKYYPPHKP9JJFGJEIUY9MUDVNFZHMMWZUYUSWAIOWEVTHNWMHANBH");

    let mut curl = CurlP81::new();
    let digest_a = curl.digest(&a).unwrap();

    let mut curl = CurlP81::new();
    let digest_b = curl.digest(&b).unwrap();

    assert_ne!(digest_a, digest_b);
}

#[test]
fn curlp27_and_curlp81_diverge() {
    let input = trytes_to_trits("EMIDYNHBWMBCXVDEFOFWINXTERALUKYYPPHKP9JJFGJEIUY9MUDVNFZHMMWZUYUSWAIOWEVTHNWMHANBH");

    let mut curl27 = CurlP27::new();
    let digest27 = curl27.digest(&input).unwrap();

    let mut curl81 = CurlP81::new();
    let digest81 = curl81.digest(&input).unwrap();

    assert_ne!(digest27, digest81);
}

#[test]
fn reset_reproduces_output() {
    let input = trytes_to_trits("EMIDYNHBWMBCXVDEFOFWINXTERALUKYYPPHKP9JJFGJEIUY9MUDVNFZHMMWZUYUSWAIOWEVTHNWMHANBH");

    let mut curl = CurlP81::new();
    curl.absorb(&input).unwrap();
    let mut first = vec![Btrit::Zero; 243];
    curl.squeeze_into(&mut first).unwrap();

    curl.reset();
    curl.absorb(&input).unwrap();
    let mut second = vec![Btrit::Zero; 243];
    curl.squeeze_into(&mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn multi_block_absorb_changes_state() {
    let one_block = trytes_to_trits("EMIDYNHBWMBCXVDEFOFWINXTERALUKYYPPHKP9JJFGJEIUY9MUDVNFZHMMWZUYUSWAIOWEVTHNWMHANBH");
    let mut two_blocks = one_block.clone();
    two_blocks.extend(&one_block);

    let mut curl = CurlP81::new();
    let digest_one = curl.digest(&one_block).unwrap();

    let mut curl = CurlP81::new();
    let digest_two = curl.digest(&two_blocks).unwrap();

    assert_ne!(digest_one, digest_two);
}
