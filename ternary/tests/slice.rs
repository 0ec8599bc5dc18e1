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

#[test]
fn get() {
    fuzz(100, || {
        let (a, a_i8) = gen_buf(1..1000);

        fuzz(25, || {
            assert_eq!(a.get(a.len() + thread_rng().gen_range(0..20)), None);
        });

        for _ in 0..20 {
            if a.is_empty() {
                break;
            }
            let i = thread_rng().gen_range(0..a.len());
            assert_eq!(a.get(i).map(|t| t.as_i8()), Some(a_i8[i]));
        }
    });
}

#[test]
fn set() {
    fuzz(100, || {
        let (mut a, mut a_i8) = gen_buf(1..1000);
        if a.is_empty() {
            return;
        }
        for _ in 0..10 {
            let i = thread_rng().gen_range(0..a.len());
            let trit = thread_rng().gen_range(-1i8..2);
            a.set(i, std::convert::TryFrom::try_from(trit).unwrap());
            a_i8[i] = trit;
        }
        assert!(a.iter().zip(a_i8.iter()).all(|(a, b)| a.as_i8() == *b));
        assert_eq!(a.len(), a_i8.len());
    });
}

#[test]
#[should_panic]
fn set_out_of_bounds_panics() {
    let mut a = gen_buf(0..1000).0;
    let len = a.len();
    a.set(len, ternary::Btrit::Zero);
}

#[test]
fn chunks() {
    fuzz(100, || {
        let (a, a_i8) = gen_buf(2..1000);

        let chunk_len = thread_rng().gen_range(1..a.len());
        for (chunk, chunk_i8) in a.chunks(chunk_len).zip(a_i8.chunks(chunk_len)) {
            assert_eq!(chunk.len(), chunk_i8.len());
            assert!(chunk.iter().zip(chunk_i8.iter()).all(|(a, b)| a.as_i8() == *b));
        }
    });
}
