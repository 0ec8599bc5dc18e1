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

//! Winternitz one-time signatures over a ternary sponge.
//!
//! A private key is a multiple of 27 key fragments of 243 trits each, one multiple per security
//! level. Signing a 243-trit message hashes each key fragment block a number of times derived from
//! the message's normalized digits; verification redoes the complementary hashing and checks the
//! recovered address.

use crate::ternary::{PrivateKey, PrivateKeyGenerator, PublicKey, RecoverableSignature, Signature};

use crypto::ternary::{
    sponge::Sponge,
    HASH_LENGTH,
};
use ternary::{Btrit, T1B1Buf, Tryte, TritBuf};
use zeroize::Zeroize;

use std::marker::PhantomData;

/// Number of 243-trit blocks in a single key/signature fragment.
const FRAGMENT_CHUNKS: usize = 27;
/// Length, in trits, of a single key/signature fragment.
const FRAGMENT_LENGTH: usize = FRAGMENT_CHUNKS * HASH_LENGTH;
/// Largest balanced-tryte digit.
const MAX_TRYTE_VALUE: i8 = 13;
/// Number of times each key fragment block is hashed to produce its digest.
const KEY_DIGEST_ROUNDS: usize = 26;

/// Security level of a Winternitz key: the number of 6561-trit fragments that make up the key,
/// signature and signing digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WotsSecurityLevel {
    /// One fragment.
    Low = 1,
    /// Two fragments.
    Medium = 2,
    /// Three fragments.
    High = 3,
}

impl Default for WotsSecurityLevel {
    fn default() -> Self {
        WotsSecurityLevel::Medium
    }
}

/// Errors that can occur while generating, signing or verifying with Winternitz keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No security level was set on the generator builder.
    #[error("missing security level")]
    MissingSecurityLevel,
    /// The entropy passed to the generator was not a single 243-trit subseed.
    #[error("entropy must be {HASH_LENGTH} trits long, found {0}")]
    InvalidEntropyLength(usize),
    /// The message passed to sign/verify was not 243 trits long.
    #[error("message must be {HASH_LENGTH} trits long, found {0}")]
    InvalidMessageLength(usize),
    /// A buffer decoded as a public key was not 243 trits long.
    #[error("public key must be {HASH_LENGTH} trits long, found {0}")]
    InvalidPublicKeyLength(usize),
    /// A buffer decoded as a signature was not a multiple of 6561 trits.
    #[error("signature length must be a positive multiple of {FRAGMENT_LENGTH}, found {0}")]
    InvalidSignatureLength(usize),
    /// The underlying sponge failed.
    #[error("sponge operation failed")]
    FailedSpongeOperation,
}

/// Errors that can occur while normalizing a hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// The hash passed to [`normalize`] was not 243 trits long.
    #[error("hash must be {HASH_LENGTH} trits long, found {0}")]
    InvalidMessageLength(usize),
}

/// Normalizes a 243-trit hash into 81 balanced-tryte digits whose three 27-digit chunks each sum
/// to zero.
///
/// Bundle hashes are normalized before signing so that no signature ever reveals the extreme digit
/// value (13 or -13) for every digit of a chunk, which would leak key material faster than
/// intended.
pub fn normalize(hash: &[Btrit]) -> Result<TritBuf, NormalizeError> {
    if hash.len() != HASH_LENGTH {
        return Err(NormalizeError::InvalidMessageLength(hash.len()));
    }

    let mut values: Vec<i8> = hash
        .chunks(3)
        .map(|chunk| Tryte::from_trits([chunk[0], chunk[1], chunk[2]]).value())
        .collect();

    for fragment in values.chunks_mut(FRAGMENT_CHUNKS) {
        let mut sum: i32 = fragment.iter().map(|&value| i32::from(value)).sum();

        while sum > 0 {
            for value in fragment.iter_mut() {
                if *value > -MAX_TRYTE_VALUE {
                    *value -= 1;
                    sum -= 1;
                    break;
                }
            }
        }

        while sum < 0 {
            for value in fragment.iter_mut() {
                if *value < MAX_TRYTE_VALUE {
                    *value += 1;
                    sum += 1;
                    break;
                }
            }
        }
    }

    let mut normalized = TritBuf::<T1B1Buf>::new();
    for value in values {
        let tryte = Tryte::from_value(value).expect("normalized digit out of tryte range");
        normalized.extend(&tryte.as_trits());
    }

    Ok(normalized)
}

/// Hashes `block` `rounds` times through a fresh sponge each time, returning the final block.
fn hash_rounds<S: Sponge + Default>(mut block: TritBuf, rounds: usize) -> Result<TritBuf, Error> {
    for _ in 0..rounds {
        block = S::default().digest(&block).map_err(|_| Error::FailedSpongeOperation)?;
    }
    Ok(block)
}

/// Builds a [`WotsSpongePrivateKeyGenerator`].
pub struct WotsSpongePrivateKeyGeneratorBuilder<S> {
    security_level: Option<WotsSecurityLevel>,
    _sponge: PhantomData<S>,
}

impl<S> Default for WotsSpongePrivateKeyGeneratorBuilder<S> {
    fn default() -> Self {
        Self {
            security_level: None,
            _sponge: PhantomData,
        }
    }
}

impl<S> WotsSpongePrivateKeyGeneratorBuilder<S> {
    /// Sets the security level of the keys this generator will produce.
    pub fn security_level(mut self, security_level: WotsSecurityLevel) -> Self {
        self.security_level = Some(security_level);
        self
    }

    /// Builds the generator.
    pub fn build(self) -> Result<WotsSpongePrivateKeyGenerator<S>, Error> {
        Ok(WotsSpongePrivateKeyGenerator {
            security_level: self.security_level.ok_or(Error::MissingSecurityLevel)?,
            _sponge: PhantomData,
        })
    }
}

/// Derives Winternitz private keys from subseeds, using `S` as the sponge construction.
pub struct WotsSpongePrivateKeyGenerator<S> {
    security_level: WotsSecurityLevel,
    _sponge: PhantomData<S>,
}

impl<S: Sponge + Default> PrivateKeyGenerator for WotsSpongePrivateKeyGenerator<S> {
    type PrivateKey = WotsPrivateKey<S>;
    type Error = Error;

    /// Derives a private key from a 243-trit subseed.
    ///
    /// `entropy` is absorbed into a fresh sponge once, then `security_level * 6561` trits are
    /// squeezed out to become the key fragments.
    fn generate_from_entropy(&self, entropy: &[Btrit]) -> Result<Self::PrivateKey, Self::Error> {
        if entropy.len() != HASH_LENGTH {
            return Err(Error::InvalidEntropyLength(entropy.len()));
        }

        let mut sponge = S::default();
        sponge.absorb(entropy).map_err(|_| Error::FailedSpongeOperation)?;

        let mut state = TritBuf::<T1B1Buf>::zeros(self.security_level as usize * FRAGMENT_LENGTH);
        sponge.squeeze_into(&mut state).map_err(|_| Error::FailedSpongeOperation)?;

        Ok(WotsPrivateKey {
            state,
            _sponge: PhantomData,
        })
    }
}

/// A Winternitz private key: `security_level` key fragments of 6561 trits each.
///
/// Reusing a key to sign a second message leaks enough of it to forge further signatures; callers
/// are responsible for signing at most one message per key. The key material is wiped from memory
/// when the key is dropped.
pub struct WotsPrivateKey<S> {
    state: TritBuf,
    _sponge: PhantomData<S>,
}

impl<S: Sponge + Default> WotsPrivateKey<S> {
    fn digests(&self) -> Result<TritBuf, Error> {
        digests::<S>(&self.state)
    }
}

impl<S> Drop for WotsPrivateKey<S> {
    fn drop(&mut self) {
        self.state.as_i8_slice_mut().zeroize();
    }
}

/// Hashes each 243-trit block of each fragment of `key` 26 times, then folds each fragment into a
/// single 243-trit digest.
fn digests<S: Sponge + Default>(key: &[Btrit]) -> Result<TritBuf, Error> {
    let mut digests = TritBuf::<T1B1Buf>::new();

    for fragment in key.chunks(FRAGMENT_LENGTH) {
        let mut hashed_fragment = TritBuf::<T1B1Buf>::new();

        for block in fragment.chunks(HASH_LENGTH) {
            let block = hash_rounds::<S>(TritBuf::from_trits(block), KEY_DIGEST_ROUNDS)?;
            hashed_fragment.extend(&block);
        }

        let digest = S::default()
            .digest(&hashed_fragment)
            .map_err(|_| Error::FailedSpongeOperation)?;
        digests.extend(&digest);
    }

    Ok(digests)
}

/// Absorbs `digests` into a fresh sponge and squeezes out the 243-trit address.
fn address_from_digests<S: Sponge + Default>(digests: &[Btrit]) -> Result<TritBuf, Error> {
    S::default().digest(digests).map_err(|_| Error::FailedSpongeOperation)
}

impl<S: Sponge + Default> PrivateKey for WotsPrivateKey<S> {
    type PublicKey = WotsPublicKey<S>;
    type Signature = WotsSignature<S>;
    type Error = Error;

    fn generate_public_key(&self) -> Result<Self::PublicKey, Self::Error> {
        let digests = self.digests()?;
        let address = address_from_digests::<S>(&digests)?;
        Ok(WotsPublicKey {
            state: address,
            _sponge: PhantomData,
        })
    }

    /// Signs `message`, a normalized 243-trit bundle hash.
    ///
    /// Fragment `j`'s key block is hashed `13 - h[j]` times, where `h[j]` is the digit of the
    /// message aligned with that block.
    fn sign(&mut self, message: &[Btrit]) -> Result<Self::Signature, Self::Error> {
        if message.len() != HASH_LENGTH {
            return Err(Error::InvalidMessageLength(message.len()));
        }

        let mut signature = TritBuf::<T1B1Buf>::new();

        for fragment in self.state.chunks(FRAGMENT_LENGTH) {
            for (block, digit) in fragment.chunks(HASH_LENGTH).zip(message.chunks(3)) {
                let value = Tryte::from_trits([digit[0], digit[1], digit[2]]).value();
                // `value` is a tryte digit in -13..=13, so 13 - value is always in 0..=26.
                #[allow(clippy::cast_sign_loss)]
                let rounds = (MAX_TRYTE_VALUE - value) as usize;
                let block = hash_rounds::<S>(TritBuf::from_trits(&block), rounds)?;
                signature.extend(&block);
            }
        }

        Ok(WotsSignature {
            state: signature,
            _sponge: PhantomData,
        })
    }
}

/// A Winternitz public key: the 243-trit address derived from a private key's digests.
pub struct WotsPublicKey<S> {
    state: TritBuf,
    _sponge: PhantomData<S>,
}

impl<S: Sponge + Default> PublicKey for WotsPublicKey<S> {
    type Signature = WotsSignature<S>;
    type Error = Error;

    fn verify(&self, message: &[Btrit], signature: &Self::Signature) -> Result<bool, Self::Error> {
        if message.len() != HASH_LENGTH {
            return Err(Error::InvalidMessageLength(message.len()));
        }

        let recovered = signature.recover_public_key(message)?;

        Ok(recovered.state == self.state)
    }

    fn as_trits(&self) -> &[Btrit] {
        &self.state
    }

    fn from_trits(trits: TritBuf) -> Result<Self, Self::Error> {
        if trits.len() != HASH_LENGTH {
            return Err(Error::InvalidPublicKeyLength(trits.len()));
        }

        Ok(Self {
            state: trits,
            _sponge: PhantomData,
        })
    }
}

/// A Winternitz signature: `security_level` signature fragments of 6561 trits each.
pub struct WotsSignature<S> {
    state: TritBuf,
    _sponge: PhantomData<S>,
}

impl<S: Sponge + Default> Signature for WotsSignature<S> {
    type Error = Error;

    fn size(&self) -> usize {
        self.state.len()
    }

    fn as_trits(&self) -> &[Btrit] {
        &self.state
    }

    fn from_trits(trits: TritBuf) -> Result<Self, Self::Error> {
        if trits.is_empty() || trits.len() % FRAGMENT_LENGTH != 0 {
            return Err(Error::InvalidSignatureLength(trits.len()));
        }

        Ok(Self {
            state: trits,
            _sponge: PhantomData,
        })
    }
}

impl<S: Sponge + Default> RecoverableSignature for WotsSignature<S> {
    type PublicKey = WotsPublicKey<S>;

    /// Hashes each signature block `13 + h[j]` more times, folds each fragment into a digest, and
    /// absorbs the digests into the recovered address.
    fn recover_public_key(&self, message: &[Btrit]) -> Result<Self::PublicKey, Self::Error> {
        if message.len() != HASH_LENGTH {
            return Err(Error::InvalidMessageLength(message.len()));
        }

        let mut digests = TritBuf::<T1B1Buf>::new();

        for fragment in self.state.chunks(FRAGMENT_LENGTH) {
            let mut hashed_fragment = TritBuf::<T1B1Buf>::new();

            for (block, digit) in fragment.chunks(HASH_LENGTH).zip(message.chunks(3)) {
                let value = Tryte::from_trits([digit[0], digit[1], digit[2]]).value();
                // `value` is a tryte digit in -13..=13, so 13 + value is always in 0..=26.
                #[allow(clippy::cast_sign_loss)]
                let rounds = (MAX_TRYTE_VALUE + value) as usize;
                let block = hash_rounds::<S>(TritBuf::from_trits(&block), rounds)?;
                hashed_fragment.extend(&block);
            }

            let digest = S::default()
                .digest(&hashed_fragment)
                .map_err(|_| Error::FailedSpongeOperation)?;
            digests.extend(&digest);
        }

        let address = address_from_digests::<S>(&digests)?;

        Ok(WotsPublicKey {
            state: address,
            _sponge: PhantomData,
        })
    }
}
