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

use crate::buf::{T1B1Buf, TritBuf, Trits};
use crate::trit::Btrit;
use std::convert::TryFrom;
use std::fmt;

pub const TRYTE_ALPHABET: &[u8; 27] = b"9ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// One tryte: three trits, displayed as one of the 27 alphabet characters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tryte(u8);

impl Tryte {
    /// Balanced value in `-13..=13`.
    pub fn value(self) -> i8 {
        let index = self.0 as i8;
        if index <= 13 {
            index
        } else {
            index - 27
        }
    }

    pub fn from_value(value: i8) -> Result<Self, TryteError> {
        if !(-13..=13).contains(&value) {
            return Err(TryteError::InvalidValue(value));
        }
        let index = if value >= 0 { value } else { value + 27 };
        Ok(Tryte(index as u8))
    }

    pub fn as_trits(self) -> [Btrit; 3] {
        let mut v = self.value() as i64;
        let mut trits = [Btrit::Zero; 3];
        for slot in trits.iter_mut() {
            let rem = ((v % 3) + 3) % 3;
            let (digit, borrow) = match rem {
                0 => (0i8, 0),
                1 => (1i8, 0),
                _ => (-1i8, 1),
            };
            *slot = Btrit::try_from(digit).unwrap();
            v = v / 3 + borrow;
        }
        trits
    }

    pub fn from_trits(trits: [Btrit; 3]) -> Self {
        let value = trits[0].as_i8() as i64 + 3 * trits[1].as_i8() as i64 + 9 * trits[2].as_i8() as i64;
        Self::from_value(value as i8).expect("trit triple out of tryte range")
    }
}

impl TryFrom<char> for Tryte {
    type Error = TryteError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let byte = c as u32;
        if byte > 127 {
            return Err(TryteError::InvalidChar(c));
        }
        TRYTE_ALPHABET
            .iter()
            .position(|&b| b == byte as u8)
            .map(|index| Tryte(index as u8))
            .ok_or(TryteError::InvalidChar(c))
    }
}

impl From<Tryte> for char {
    fn from(tryte: Tryte) -> Self {
        TRYTE_ALPHABET[tryte.0 as usize] as char
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TryteError {
    #[error("'{0}' is not a tryte alphabet character")]
    InvalidChar(char),
    #[error("{0} is outside the balanced tryte range -13..=13")]
    InvalidValue(i8),
}

/// An owned string of [`Tryte`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TryteBuf {
    inner: Vec<Tryte>,
}

impl TryteBuf {
    pub fn new() -> Self {
        Self { inner: Vec::new() }
    }

    pub fn try_from_str(s: &str) -> Result<Self, TryteError> {
        let inner = s.chars().map(Tryte::try_from).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { inner })
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn as_trytes(&self) -> &[Tryte] {
        &self.inner
    }

    /// Encodes this tryte string as a trit buffer, 3 trits per tryte, little-endian within each
    /// tryte.
    pub fn as_trits(&self) -> TritBuf<T1B1Buf> {
        let mut buf = TritBuf::new();
        for tryte in &self.inner {
            buf.extend(&tryte.as_trits());
        }
        buf
    }

    /// Builds a tryte string from a trit buffer whose length is a multiple of 3.
    pub fn from_trits(trits: Trits<'_, T1B1Buf>) -> Result<Self, TryteError> {
        if trits.len() % 3 != 0 {
            return Err(TryteError::InvalidValue(0));
        }
        let mut inner = Vec::with_capacity(trits.len() / 3);
        for chunk in trits.chunks(3) {
            let triple = [chunk.get(0).unwrap(), chunk.get(1).unwrap(), chunk.get(2).unwrap()];
            inner.push(Tryte::from_trits(triple));
        }
        Ok(Self { inner })
    }
}

impl fmt::Display for TryteBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tryte in &self.inner {
            write!(f, "{}", char::from(*tryte))?;
        }
        Ok(())
    }
}
