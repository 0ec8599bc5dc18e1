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

mod common;
use self::common::*;

use rand::prelude::*;
use ternary::{T1B1Buf, TritBuf};

#[test]
fn create() {
    assert_eq!(TritBuf::<T1B1Buf>::new().len(), 0);
    fuzz(100, || {
        let len = thread_rng().gen_range(0..100);
        assert_eq!(TritBuf::<T1B1Buf>::zeros(len).len(), len);
    });
    fuzz(100, || {
        let trits = gen_buf(0..1000).1;
        let buf: TritBuf = trits.iter().copied().collect();
        assert_eq!(buf.len(), trits.len());
    });
}

#[test]
fn push_pop() {
    fuzz(100, || {
        let (mut a, mut b) = gen_buf(0..100);
        for _ in 0..1000 {
            if thread_rng().gen() {
                let trit = gen_trit();
                a.push(trit);
                b.push(trit.as_i8());
            } else {
                assert_eq!(a.pop().map(|t| t.as_i8()), b.pop());
            }
        }
    });
}

#[test]
fn eq() {
    fuzz(100, || {
        let a = gen_buf(0..1000).0;
        let b = a.clone();
        assert_eq!(a, b);
    });
}

#[test]
fn encode_roundtrip() {
    fuzz(49, || {
        let a = gen_buf(0..100).0;
        let b = a.clone().encode::<ternary::T1B1Buf>();
        assert_eq!(a, b);
        assert_eq!(a.len(), b.len());
    });
}
