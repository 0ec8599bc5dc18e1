// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

//! Ternary cryptographic primitives of the IOTA protocol.

mod hash;

pub mod bigint;
pub mod sponge;

pub use hash::{Hash, HASH_LENGTH};
