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

//! Ternary seed derivation and Winternitz one-time signatures.

pub mod checksum;
pub mod seed;
pub mod wots;

use ternary::{Btrit, TritBuf};

/// A private key that can generate its matching public key and sign one message.
///
/// Winternitz-style private keys are one-time: signing two different messages with the same key
/// reveals enough of it for a third party to forge further signatures. Callers, not this trait,
/// are responsible for signing at most one message per key.
pub trait PrivateKey {
    /// The matching public key type.
    type PublicKey: PublicKey;
    /// The signature type produced by this private key.
    type Signature: Signature;
    /// Errors that can occur while operating on this private key.
    type Error;

    /// Derives the public key matching this private key.
    fn generate_public_key(&self) -> Result<Self::PublicKey, Self::Error>;

    /// Signs `message`.
    fn sign(&mut self, message: &[Btrit]) -> Result<Self::Signature, Self::Error>;
}

/// Generates [`PrivateKey`]s from raw entropy.
pub trait PrivateKeyGenerator {
    /// The private key type this generator produces.
    type PrivateKey: PrivateKey;
    /// Errors that can occur while generating a private key.
    type Error;

    /// Deterministically derives a private key from `entropy`.
    fn generate_from_entropy(&self, entropy: &[Btrit]) -> Result<Self::PrivateKey, Self::Error>;
}

/// A public key that can verify signatures produced by its matching private key.
pub trait PublicKey: Sized {
    /// The signature type this public key verifies.
    type Signature: Signature;
    /// Errors that can occur while operating on this public key.
    type Error;

    /// Verifies that `signature` is a valid signature of `message` under this public key.
    fn verify(&self, message: &[Btrit], signature: &Self::Signature) -> Result<bool, Self::Error>;

    /// Returns the trit representation of this public key.
    fn as_trits(&self) -> &[Btrit];

    /// Reconstructs a public key from its trit representation.
    fn from_trits(trits: TritBuf) -> Result<Self, Self::Error>;
}

/// A signature produced by a [`PrivateKey`].
pub trait Signature: Sized {
    /// Errors that can occur while operating on this signature.
    type Error;

    /// Returns the number of trits of this signature.
    fn size(&self) -> usize;

    /// Returns the trit representation of this signature.
    fn as_trits(&self) -> &[Btrit];

    /// Reconstructs a signature from its trit representation.
    fn from_trits(trits: TritBuf) -> Result<Self, Self::Error>;
}

/// A [`Signature`] from which the signer's public key can be recovered given the signed message.
pub trait RecoverableSignature: Signature {
    /// The public key type recoverable from this signature.
    type PublicKey: PublicKey;

    /// Recovers the public key that would verify this signature against `message`.
    fn recover_public_key(&self, message: &[Btrit]) -> Result<Self::PublicKey, Self::Error>;
}
