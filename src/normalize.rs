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

//! Normalization of the integer parts of a list of fractions.

use log::debug;
use num::traits::Zero;
use num::{BigInt, BigRational, Integer};

/// Moves the integer parts of all the terms into a single term, in place.
///
/// Each term is replaced by its remainder modulo one (in `[0, 1)`), and the sum
/// of all the integer parts is added back to the term with the smallest
/// denominator (the first one in case of ties). The sum of the list is
/// unchanged, and normalizing an already normalized list is a no-op.
pub fn normalize(terms: &mut [BigRational]) {
    let mut whole = BigInt::zero();
    for term in terms.iter_mut() {
        let (quotient, remainder) = term.numer().div_mod_floor(term.denom());
        whole += quotient;
        *term = BigRational::new(remainder, term.denom().clone());
    }

    let Some((index, smallest)) = terms
        .iter_mut()
        .enumerate()
        .min_by(|(_, x), (_, y)| x.denom().cmp(y.denom()))
    else {
        return;
    };

    debug!("Adding whole part {whole} to term #{index} ({smallest})");
    *smallest += BigRational::from_integer(whole);
}
