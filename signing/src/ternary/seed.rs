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

use crypto::ternary::{
    sponge::{Kerl, Sponge},
    HASH_LENGTH,
};
use rand::Rng;
use ternary::{Btrit, Trits, TryteBuf, T1B1Buf};

/// A master secret a [`super::wots`] private key generator derives subseeds from.
///
/// Logically one or more concatenated 81-tryte (243-trit) blocks: absorbing a seed into a sponge
/// requires its length to be a positive multiple of 243 trits, same as any other sponge input.
/// Shorter source material is the caller's responsibility to right-pad with `9` trytes (balanced
/// value zero) to the next block boundary before constructing a `Seed`.
#[derive(Clone)]
pub struct Seed(ternary::TritBuf);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("seed length must be a positive multiple of {HASH_LENGTH} trits, found {0}")]
    InvalidLength(usize),
    #[error("seed contains a character outside the tryte alphabet")]
    InvalidTrytes,
}

impl Seed {
    /// Parses a seed from a tryte string.
    pub fn from_str(trytes: &str) -> Result<Self, Error> {
        let trit_buf = TryteBuf::try_from_str(trytes)
            .map_err(|_| Error::InvalidTrytes)?
            .as_trits();
        Self::from_trits(trit_buf)
    }

    /// Builds a seed from a trit buffer whose length is a positive multiple of 243.
    pub fn from_trits(trits: ternary::TritBuf) -> Result<Self, Error> {
        if trits.is_empty() || trits.len() % HASH_LENGTH != 0 {
            return Err(Error::InvalidLength(trits.len()));
        }
        Ok(Self(trits))
    }

    /// Generates a random seed using the operating system's source of randomness.
    pub fn rand() -> Self {
        let mut rng = rand::thread_rng();
        let trits = (0..HASH_LENGTH)
            .map(|_| match rng.gen_range(0..3) {
                0 => Btrit::NegOne,
                1 => Btrit::Zero,
                _ => Btrit::PlusOne,
            })
            .collect();
        Self(trits)
    }

    /// Returns the trit representation of the seed.
    pub fn as_trits(&self) -> Trits<'_, T1B1Buf> {
        self.0.as_slice()
    }

    /// Derives the subseed at `index`.
    ///
    /// The seed, read as a little-endian balanced-ternary integer, is incremented `index` times with
    /// carry propagation; the result is absorbed into a fresh Kerl sponge and 243 trits are squeezed
    /// back out.
    pub fn subseed(&self, index: u64) -> ternary::TritBuf {
        let mut trits = self.0.clone();

        for _ in 0..index {
            let mut carry = Btrit::PlusOne;
            for trit in trits.iter_mut() {
                let (sum, carry_out) = trit.add_with_carry(Btrit::Zero, carry);
                *trit = sum;
                carry = carry_out;
                if carry == Btrit::Zero {
                    break;
                }
            }
        }

        let mut kerl = Kerl::new();
        kerl.digest(&trits).expect("subseed length is a multiple of HASH_LENGTH by construction")
    }
}
