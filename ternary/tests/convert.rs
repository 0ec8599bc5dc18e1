// Copyright 2020 IOTA Stiftung
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with
// the License. You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on
// an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and limitations under the License.

use ternary::{trits_from_value, value, TritBuf};

#[test]
fn empty_is_zero() {
    let buf: TritBuf = TritBuf::zeros(0);
    assert_eq!(value(&buf), 0);
}

#[test]
fn round_robin() {
    let nums = [0, 1, -1, 42, -42, 7331, -7331, i64::MAX / 2, i64::MIN / 2];
    for &n in &nums {
        let buf: TritBuf = trits_from_value(n, 64);
        assert_eq!(value(&buf), n);
    }
}

#[test]
fn range_round_trip() {
    for n in -10_000..10_001i64 {
        let buf: TritBuf = trits_from_value(n, 32);
        assert_eq!(value(&buf), n, "num {}", n);
    }
}

#[test]
fn truncation_drops_high_trits() {
    // 3^5 = 243, so a value that doesn't fit in 5 trits gets truncated.
    let buf: TritBuf = trits_from_value(1000, 5);
    assert_eq!(buf.len(), 5);
    assert!(value(&buf) != 1000);
}

#[test]
fn zero_padding_does_not_change_value() {
    let short: TritBuf = trits_from_value(45, 5);
    let padded: TritBuf = trits_from_value(45, 9);
    assert_eq!(value(&short), value(&padded));
}
