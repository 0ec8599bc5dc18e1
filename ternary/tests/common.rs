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

use rand::prelude::*;
use std::convert::TryFrom;
use ternary::{Btrit, TritBuf};

pub fn gen_trit() -> Btrit {
    Btrit::try_from((thread_rng().gen::<u8>() % 3) as i8 - 1).unwrap()
}

pub fn gen_buf(len: std::ops::Range<usize>) -> (TritBuf, Vec<i8>) {
    let len = thread_rng().gen_range(len.start..len.end);
    let trits = (0..len).map(|_| gen_trit()).collect::<Vec<_>>();
    (trits.iter().copied().collect(), trits.iter().map(|t| t.as_i8()).collect())
}

// Not exactly fuzzing, just doing something a lot
pub fn fuzz(n: usize, mut f: impl FnMut()) {
    (0..n).for_each(|_| f());
}
