// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use crate::ternary::{
    bigint::{self, BINARY_LEN},
    sponge::Sponge,
    HASH_LENGTH,
};
use ternary::Btrit;

use tiny_keccak::{Hasher, Keccak};

/// State of the ternary cryptographic function `Kerl`: a ternary-interfaced sponge backed by
/// binary Keccak-384.
#[derive(Clone)]
pub struct Kerl {
    keccak: Keccak,
    binary_state: [u8; BINARY_LEN],
}

impl Default for Kerl {
    fn default() -> Self {
        Self {
            keccak: Keccak::v384(),
            binary_state: [0; BINARY_LEN],
        }
    }
}

impl Kerl {
    /// Creates a new `Kerl`.
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input/output length must be a positive multiple of {HASH_LENGTH}")]
    NotMultipleOfHashLength,
}

impl Sponge for Kerl {
    type Error = Error;

    /// Reset the internal state by overwriting it with zeros.
    fn reset(&mut self) {
        // `Keccak::v384::reset()` is not exposed, so a fresh hasher is swapped in instead.
        self.keccak = Keccak::v384();
        self.binary_state = [0; BINARY_LEN];
    }

    /// Absorb `input` into the sponge by converting each 243-trit block to 48 bytes (forcing the
    /// last trit to zero) and feeding those bytes into the underlying Keccak-384.
    fn absorb(&mut self, input: &[Btrit]) -> Result<(), Self::Error> {
        if input.is_empty() || input.len() % HASH_LENGTH != 0 {
            return Err(Error::NotMultipleOfHashLength);
        }

        for block in input.chunks(HASH_LENGTH) {
            let bytes = bigint::trits_to_bytes(block);
            self.keccak.update(&bytes);
        }

        Ok(())
    }

    /// Squeeze the sponge by finalizing the Keccak state into 48 bytes, converting back to 243
    /// trits, then complementing the bytes and reseeding a fresh Keccak for any subsequent block
    /// (the continuation rule).
    fn squeeze_into(&mut self, buf: &mut [Btrit]) -> Result<(), Self::Error> {
        if buf.is_empty() || buf.len() % HASH_LENGTH != 0 {
            return Err(Error::NotMultipleOfHashLength);
        }

        for block in buf.chunks_mut(HASH_LENGTH) {
            let mut keccak = Keccak::v384();
            std::mem::swap(&mut self.keccak, &mut keccak);
            keccak.finalize(&mut self.binary_state);

            let trits = bigint::bytes_to_trits(&self.binary_state);
            block.copy_from_slice(&trits);

            bigint::complement_bytes(&mut self.binary_state);
            self.keccak.update(&self.binary_state);
        }
        Ok(())
    }
}
