// Copyright 2020 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use super::{CurlP27, CurlP81, Kerl, Sponge};

use ternary::Btrit;

/// The different kinds of Sponges.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SpongeKind {
    /// Kerl.
    Kerl,
    /// CurlP with 27 rounds.
    CurlP27,
    /// CurlP with 81 rounds.
    CurlP81,
}

impl SpongeKind {
    /// Constructs a fresh sponge of the variant named by `self`.
    pub fn create(self) -> Sponges {
        match self {
            SpongeKind::Kerl => Sponges::Kerl(Kerl::new()),
            SpongeKind::CurlP27 => Sponges::CurlP27(CurlP27::new()),
            SpongeKind::CurlP81 => Sponges::CurlP81(CurlP81::new()),
        }
    }
}

/// A sponge built by [`SpongeKind::create`]: a closed sum of every sponge variant, dispatching
/// `Sponge` operations to whichever one it holds.
#[derive(Clone)]
pub enum Sponges {
    /// Kerl.
    Kerl(Kerl),
    /// CurlP with 27 rounds.
    CurlP27(CurlP27),
    /// CurlP with 81 rounds.
    CurlP81(CurlP81),
}

/// Errors produced by a [`Sponges`] constructed through [`SpongeKind::create`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The underlying Kerl sponge failed.
    #[error(transparent)]
    Kerl(#[from] <Kerl as Sponge>::Error),
}

impl Sponge for Sponges {
    type Error = Error;

    fn reset(&mut self) {
        match self {
            Sponges::Kerl(sponge) => sponge.reset(),
            Sponges::CurlP27(sponge) => sponge.reset(),
            Sponges::CurlP81(sponge) => sponge.reset(),
        }
    }

    fn absorb(&mut self, input: &[Btrit]) -> Result<(), Self::Error> {
        match self {
            Sponges::Kerl(sponge) => sponge.absorb(input).map_err(Error::Kerl),
            // `CurlP`'s absorb is infallible; its `Result` exists only to satisfy `Sponge`.
            Sponges::CurlP27(sponge) => Ok(sponge.absorb(input).unwrap_or_else(|never| match never {})),
            Sponges::CurlP81(sponge) => Ok(sponge.absorb(input).unwrap_or_else(|never| match never {})),
        }
    }

    fn squeeze_into(&mut self, buf: &mut [Btrit]) -> Result<(), Self::Error> {
        match self {
            Sponges::Kerl(sponge) => sponge.squeeze_into(buf).map_err(Error::Kerl),
            Sponges::CurlP27(sponge) => Ok(sponge.squeeze_into(buf).unwrap_or_else(|never| match never {})),
            Sponges::CurlP81(sponge) => Ok(sponge.squeeze_into(buf).unwrap_or_else(|never| match never {})),
        }
    }
}
