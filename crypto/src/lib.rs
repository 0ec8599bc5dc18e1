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

//! Cryptographic primitives of the IOTA protocol.

#![warn(missing_docs, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#![deny(clippy::cast_lossless, clippy::cast_possible_wrap, clippy::checked_conversions)]

pub mod ternary;
