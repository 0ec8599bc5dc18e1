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

use ternary::{Btrit, Trits, T1B1};

use std::{cmp::PartialEq, convert::TryFrom, fmt, hash, ops::Deref};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("expected {HASH_LENGTH} trits, found {0}")]
    WrongLength(usize),
}

/// The length of a hash in units of balanced trits.
pub const HASH_LENGTH: usize = 243;

/// Ternary cryptographic hash.
#[derive(Copy, Clone)]
pub struct Hash([Btrit; HASH_LENGTH]);

impl Hash {
    /// Creates a hash filled with zeros.
    pub fn zeros() -> Self {
        Self([Btrit::Zero; HASH_LENGTH])
    }

    /// Interpret the `Hash` as a trit slice.
    pub fn as_trits(&self) -> Trits<'_, T1B1> {
        Trits::from_raw(&self.0)
    }

    /// Returns the weight - number of trailing zero trits - of the `Hash`.
    #[allow(clippy::cast_possible_truncation)] // `HASH_LENGTH` is smaller than `u8::MAX`.
    pub fn weight(&self) -> u8 {
        self.0.iter().rev().take_while(|&&t| t == Btrit::Zero).count() as u8
    }
}

impl<'a> TryFrom<Trits<'a, T1B1>> for Hash {
    type Error = Error;

    fn try_from(trits: Trits<'a, T1B1>) -> Result<Self, Self::Error> {
        if trits.len() == HASH_LENGTH {
            let mut hash = Self([Btrit::Zero; HASH_LENGTH]);
            for (slot, trit) in hash.0.iter_mut().zip(trits.iter()) {
                *slot = trit;
            }
            Ok(hash)
        } else {
            Err(Error::WrongLength(trits.len()))
        }
    }
}

impl Deref for Hash {
    type Target = [Btrit];

    fn deref(&self) -> &[Btrit] {
        &self.0
    }
}

impl PartialEq for Hash {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Hash {}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.as_trits().deref())
    }
}

impl hash::Hash for Hash {
    fn hash<H: hash::Hasher>(&self, hasher: &mut H) {
        self.0.hash(hasher)
    }
}
