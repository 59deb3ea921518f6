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

//! Command-line program to decompose fractions into fractions with pairwise
//! coprime denominators.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use clap::Parser;
use coprime_fractions::{
    decompose::{decompose, DecomposeOptions, DecompositionError},
    factor::FactorOptions,
    parse::{parse_rational, parse_rationals},
};
use log::info;
use num::BigRational;
use rayon::prelude::*;
use std::io::{self, Write};

/// Decomposes fractions into sums of fractions with pairwise coprime
/// denominators.
#[derive(Parser, Debug, PartialEq, Eq)]
struct Cli {
    /// Fractions to decompose, written as `numerator/denominator`. If none is
    /// given, fractions are read from the standard input, one per line.
    /// Negative fractions must come after a `--` separator.
    fractions: Vec<String>,

    /// Largest factor tried when splitting denominators.
    #[arg(long, default_value_t = 10_000)]
    trial_division_bound: u64,

    /// Number of Miller-Rabin rounds of the primality test.
    #[arg(long, default_value_t = 100)]
    primality_rounds: usize,

    /// Move the integer parts of all terms into a single term.
    #[arg(long, action = clap::ArgAction::Set, default_value = "true")]
    normalize: bool,

    /// Decompose the fractions in parallel, based on the rayon crate.
    #[arg(long, action = clap::ArgAction::Set, default_value = "false")]
    parallel: bool,
}

impl Cli {
    fn options(&self) -> DecomposeOptions {
        DecomposeOptions {
            factor: FactorOptions {
                trial_division_bound: self.trial_division_bound,
                primality_rounds: self.primality_rounds,
            },
            normalize: self.normalize,
        }
    }

    /// Parses the input fractions, either from the command line or from the
    /// given reader.
    fn inputs(
        &self,
        stdin: impl io::BufRead,
    ) -> Result<Vec<BigRational>, Box<dyn std::error::Error>> {
        if self.fractions.is_empty() {
            parse_rationals(stdin)
        } else {
            let inputs = self
                .fractions
                .iter()
                .map(|x| parse_rational(x))
                .collect::<Result<_, _>>()?;
            Ok(inputs)
        }
    }

    /// Decomposes all the inputs, writing one line per input.
    fn run(
        &self,
        output: &mut impl Write,
        inputs: &[BigRational],
    ) -> Result<(), Box<dyn std::error::Error>> {
        let options = self.options();
        let results: Vec<Result<Vec<BigRational>, DecompositionError>> = if self.parallel {
            inputs
                .par_iter()
                .map(|value| decompose(value, &options))
                .collect()
        } else {
            inputs
                .iter()
                .map(|value| decompose(value, &options))
                .collect()
        };

        for (value, terms) in inputs.iter().zip(results) {
            let terms = terms?;
            info!("Decomposed {value} into {} term(s)", terms.len());
            writeln!(output, "{}", format_decomposition(value, &terms))?;
        }
        Ok(())
    }
}

/// Formats a decomposition as `value = term + term + ...`.
fn format_decomposition(value: &BigRational, terms: &[BigRational]) -> String {
    let sum = if terms.is_empty() {
        "0".to_owned()
    } else {
        terms
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
            .join(" + ")
    };
    format!("{value} = {sum}")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let inputs = cli.inputs(io::stdin().lock())?;
    cli.run(&mut io::stdout().lock(), &inputs)
}
