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

//! Address checksumming.
//!
//! An IOTA address is checksummed by hashing its 243 trits with Kerl and appending the last 9
//! trytes of the digest to the address.

use crypto::ternary::{
    sponge::{Kerl, Sponge},
    HASH_LENGTH,
};
use ternary::{T1B1Buf, TritBuf, Trits};

const CHECKSUM_LENGTH: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("address must be {HASH_LENGTH} trits long, found {0}")]
    InvalidAddressLength(usize),
    #[error(
        "checksummed address must be {} trits long, found {0}",
        HASH_LENGTH + CHECKSUM_LENGTH * 3
    )]
    InvalidChecksummedAddressLength(usize),
    #[error("sponge operation failed")]
    FailedSpongeOperation,
}

fn checksum_trits(address: &[ternary::Btrit]) -> Result<TritBuf, Error> {
    if address.len() != HASH_LENGTH {
        return Err(Error::InvalidAddressLength(address.len()));
    }

    let digest = Kerl::new().digest(address).map_err(|_| Error::FailedSpongeOperation)?;

    Ok(TritBuf::<T1B1Buf>::from_trits(&digest[HASH_LENGTH - CHECKSUM_LENGTH * 3..]))
}

/// Computes the 9-tryte (27-trit) checksum of an 81-tryte (243-trit) address.
pub fn checksum(address: &[ternary::Btrit]) -> Result<TritBuf, Error> {
    checksum_trits(address)
}

/// Appends the checksum to `address`, returning the resulting 90-tryte (270-trit) buffer.
pub fn add_checksum(address: &[ternary::Btrit]) -> Result<TritBuf, Error> {
    let checksum = checksum_trits(address)?;
    let mut with_checksum = TritBuf::<T1B1Buf>::from_trits(address);
    with_checksum.extend(&checksum);
    Ok(with_checksum)
}

/// Returns `true` if `checksummed_address`'s trailing 27 trits are the checksum of its leading 243 trits.
pub fn is_valid_checksum(checksummed_address: &[ternary::Btrit]) -> Result<bool, Error> {
    if checksummed_address.len() != HASH_LENGTH + CHECKSUM_LENGTH * 3 {
        return Err(Error::InvalidChecksummedAddressLength(checksummed_address.len()));
    }

    let (address, checksum) = checksummed_address.split_at(HASH_LENGTH);
    let expected = checksum_trits(address)?;

    Ok(expected.as_slice() == Trits::<T1B1Buf>::from_raw(checksum))
}

/// Strips a trailing checksum off `checksummed_address`, returning the 243-trit address.
pub fn remove_checksum(checksummed_address: &[ternary::Btrit]) -> Result<TritBuf, Error> {
    if checksummed_address.len() != HASH_LENGTH + CHECKSUM_LENGTH * 3 {
        return Err(Error::InvalidChecksummedAddressLength(checksummed_address.len()));
    }

    Ok(TritBuf::<T1B1Buf>::from_trits(&checksummed_address[..HASH_LENGTH]))
}
