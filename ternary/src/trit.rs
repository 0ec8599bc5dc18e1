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

use std::convert::TryFrom;
use std::ops::Neg;

/// A single balanced-ternary digit: `-1`, `0`, or `1`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum Btrit {
    NegOne = -1,
    #[default]
    Zero = 0,
    PlusOne = 1,
}

impl Btrit {
    /// The signed integer value of this trit.
    pub fn as_i8(self) -> i8 {
        self as i8
    }

    /// Adds `self` and `rhs`, returning the result trit and the carry trit produced by
    /// balancing the sum back into `{-1, 0, 1}`.
    pub fn add_with_carry(self, rhs: Self, carry_in: Self) -> (Self, Self) {
        let sum = self.as_i8() + rhs.as_i8() + carry_in.as_i8();
        let carry_out = match sum {
            -3..=-2 => -1,
            -1..=1 => 0,
            2..=3 => 1,
            _ => unreachable!("sum of three trits is bounded to [-3, 3]"),
        };
        let digit = sum - 3 * carry_out;
        (Self::try_from(digit).unwrap(), Self::try_from(carry_out).unwrap())
    }
}

impl TryFrom<i8> for Btrit {
    type Error = TritError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Btrit::NegOne),
            0 => Ok(Btrit::Zero),
            1 => Ok(Btrit::PlusOne),
            _ => Err(TritError::InvalidRepresentation(value)),
        }
    }
}

impl From<Btrit> for i8 {
    fn from(trit: Btrit) -> Self {
        trit.as_i8()
    }
}

impl Neg for Btrit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Btrit::NegOne => Btrit::PlusOne,
            Btrit::Zero => Btrit::Zero,
            Btrit::PlusOne => Btrit::NegOne,
        }
    }
}

/// Error produced when converting an out-of-range integer to a [`Btrit`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TritError {
    #[error("{0} is not a valid balanced trit representation (expected -1, 0 or 1)")]
    InvalidRepresentation(i8),
}
