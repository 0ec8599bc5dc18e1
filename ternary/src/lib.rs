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

//! Balanced ternary trit and tryte primitives shared by the sponge and signing crates.

mod buf;
mod error;
mod trit;
mod tryte;

pub use buf::{trits_from_value, value, T1B1Buf, TritBuf, Trits, T1B1};
pub use error::{TritError, TryteError};
pub use trit::Btrit;
pub use tryte::{Tryte, TryteBuf, TRYTE_ALPHABET};
