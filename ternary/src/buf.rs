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

//! Trit buffers.
//!
//! The upstream ternary crate this module is descended from offers several bit-packed trit
//! encodings (`T1B1`, `T2B1`, `T3B1`, ...) chosen for memory density versus access speed. None of
// the sponge constructions or signing code in this crate are hot enough to need packing, so only
//! the one-trit-per-byte encoding (`T1B1`) is implemented here; the marker types are kept so call
//! sites read the same way.

use crate::trit::Btrit;
use std::convert::TryFrom;
use std::iter::FromIterator;

/// Marker for the one-trit-per-byte slice encoding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct T1B1;

/// Marker for the one-trit-per-byte owned-buffer encoding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct T1B1Buf;

/// A borrowed run of trits.
#[derive(Debug, PartialEq, Eq)]
pub struct Trits<'a, T = T1B1> {
    inner: &'a [Btrit],
    _marker: std::marker::PhantomData<T>,
}

impl<'a, T> Clone for Trits<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, T> Copy for Trits<'a, T> {}

impl<'a, T> Trits<'a, T> {
    pub fn from_raw(inner: &'a [Btrit]) -> Self {
        Self {
            inner,
            _marker: std::marker::PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn as_i8_slice(&self) -> &[i8] {
        // `Btrit` is `#[repr(i8)]`, so this reinterpretation is sound.
        unsafe { std::slice::from_raw_parts(self.inner.as_ptr() as *const i8, self.inner.len()) }
    }

    pub fn iter(&self) -> impl Iterator<Item = Btrit> + '_ {
        self.inner.iter().copied()
    }

    pub fn get(&self, index: usize) -> Option<Btrit> {
        self.inner.get(index).copied()
    }

    pub fn subslice(&self, range: std::ops::Range<usize>) -> Trits<'a, T> {
        Trits::from_raw(&self.inner[range])
    }

    pub fn chunks(&self, size: usize) -> impl Iterator<Item = Trits<'a, T>> + '_ {
        self.inner.chunks(size).map(Trits::from_raw)
    }

    /// Copies the slice into an owned [`TritBuf`], matching the encoding asked for.
    pub fn encode<U>(&self) -> TritBuf<U> {
        TritBuf::from_trits(self.inner)
    }

    pub fn to_buf(&self) -> TritBuf<T1B1Buf> {
        TritBuf::from_trits(self.inner)
    }
}

impl<'a, T> std::ops::Deref for Trits<'a, T> {
    type Target = [Btrit];

    fn deref(&self) -> &Self::Target {
        self.inner
    }
}

impl<'a, T> IntoIterator for Trits<'a, T> {
    type Item = Btrit;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Btrit>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter().copied()
    }
}

/// An owned, growable run of trits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TritBuf<T = T1B1Buf> {
    inner: Vec<Btrit>,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TritBuf<T> {
    pub fn new() -> Self {
        Self {
            inner: Vec::new(),
            _marker: std::marker::PhantomData,
        }
    }

    pub fn from_trits(trits: &[Btrit]) -> Self {
        Self {
            inner: trits.to_vec(),
            _marker: std::marker::PhantomData,
        }
    }

    /// Builds a buffer of `len` zero trits.
    pub fn zeros(len: usize) -> Self {
        Self::filled(len, Btrit::Zero)
    }

    /// Builds a buffer of `len` trits, all set to `trit`.
    pub fn filled(len: usize, trit: Btrit) -> Self {
        Self {
            inner: vec![trit; len],
            _marker: std::marker::PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn push(&mut self, trit: Btrit) {
        self.inner.push(trit);
    }

    pub fn pop(&mut self) -> Option<Btrit> {
        self.inner.pop()
    }

    pub fn extend(&mut self, other: &[Btrit]) {
        self.inner.extend_from_slice(other);
    }

    pub fn truncate(&mut self, len: usize) {
        self.inner.truncate(len);
    }

    pub fn set(&mut self, index: usize, trit: Btrit) {
        self.inner[index] = trit;
    }

    pub fn get(&self, index: usize) -> Option<Btrit> {
        self.inner.get(index).copied()
    }

    pub fn as_slice(&self) -> Trits<'_, T> {
        Trits::from_raw(&self.inner)
    }

    pub fn as_trits(&self) -> Trits<'_, T> {
        self.as_slice()
    }

    pub fn subslice(&self, range: std::ops::Range<usize>) -> Trits<'_, T> {
        Trits::from_raw(&self.inner[range])
    }

    pub fn chunks(&self, size: usize) -> impl Iterator<Item = Trits<'_, T>> + '_ {
        self.inner.chunks(size).map(Trits::from_raw)
    }

    pub fn iter(&self) -> impl Iterator<Item = Btrit> + '_ {
        self.inner.iter().copied()
    }

    pub fn encode<U>(&self) -> TritBuf<U> {
        TritBuf::from_trits(&self.inner)
    }

    pub fn as_i8_slice(&self) -> &[i8] {
        unsafe { std::slice::from_raw_parts(self.inner.as_ptr() as *const i8, self.inner.len()) }
    }

    /// Mutable counterpart of [`TritBuf::as_i8_slice`], used by callers that need to overwrite trit
    /// buffers containing sensitive material in place.
    pub fn as_i8_slice_mut(&mut self) -> &mut [i8] {
        unsafe { std::slice::from_raw_parts_mut(self.inner.as_mut_ptr() as *mut i8, self.inner.len()) }
    }
}

impl<T> std::ops::Deref for TritBuf<T> {
    type Target = [Btrit];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> std::ops::DerefMut for TritBuf<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<'a, T> PartialEq<Trits<'a, T>> for TritBuf<T> {
    fn eq(&self, other: &Trits<'a, T>) -> bool {
        self.inner.as_slice() == other.inner
    }
}

impl<T> FromIterator<Btrit> for TritBuf<T> {
    fn from_iter<I: IntoIterator<Item = Btrit>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T> FromIterator<i8> for TritBuf<T> {
    fn from_iter<I: IntoIterator<Item = i8>>(iter: I) -> Self {
        iter.into_iter().map(|v| Btrit::try_from(v).expect("trit out of range")).collect()
    }
}

impl<T> IntoIterator for TritBuf<T> {
    type Item = Btrit;
    type IntoIter = std::vec::IntoIter<Btrit>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

/// Balanced-ternary Horner evaluation: `Σ trits[i] * 3^i`, little-endian (index 0 is least
/// significant). Saturates rather than panics when the magnitude would overflow `i64`.
pub fn value(trits: &[Btrit]) -> i64 {
    let mut acc: i64 = 0;
    for &trit in trits.iter().rev() {
        acc = acc.saturating_mul(3).saturating_add(trit.as_i8() as i64);
    }
    acc
}

/// Inverse of [`value`]: encodes `v` as a `length`-trit balanced-ternary buffer, little-endian.
/// High trits that do not fit are truncated.
pub fn trits_from_value<T>(mut v: i64, length: usize) -> TritBuf<T> {
    let mut buf = TritBuf::zeros(length);
    for i in 0..length {
        let rem = ((v % 3) + 3) % 3;
        let (digit, borrow) = match rem {
            0 => (0i8, 0i64),
            1 => (1i8, 0i64),
            _ => (-1i8, 1i64),
        };
        buf.set(i, Btrit::try_from(digit).unwrap());
        v = v / 3 + borrow;
    }
    buf
}
