// Copyright 2023 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Decomposition of an exact rational number into a list of fractions whose
//! denominators are pairwise coprime, and whose sum is exactly the input.
//!
//! ```
//! use coprime_fractions::decompose::{decompose, DecomposeOptions};
//! use coprime_fractions::parse::parse_rational;
//!
//! let value = parse_rational("7/12").unwrap();
//! let terms = decompose(&value, &DecomposeOptions::default()).unwrap();
//! assert_eq!(terms.iter().sum::<num::BigRational>(), value);
//! ```

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod arithmetic;
pub mod decompose;
pub mod factor;
pub mod normalize;
pub mod parse;
mod util;
