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

//! Module to parse fractions written as `numerator/denominator`.

use log::trace;
use num::traits::Zero;
use num::{BigInt, BigRational};
use regex::Regex;
use std::fmt::{self, Display};
use std::io::BufRead;
use std::sync::OnceLock;

/// Error returned when a fraction can't be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input isn't of the form `numerator/denominator` or `integer`.
    Malformed(String),
    /// The denominator is zero.
    ZeroDenominator,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::Malformed(input) => write!(f, "Malformed fraction: {input:?}"),
            ParseError::ZeroDenominator => f.write_str("Denominator is zero"),
        }
    }
}

impl std::error::Error for ParseError {}

fn fraction_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*([+-]?[0-9]+)\s*(?:/\s*([+-]?[0-9]+))?\s*$").unwrap())
}

/// Parses a fraction of the form `numerator/denominator`, or an integer. The
/// result is reduced to lowest terms, with a positive denominator.
pub fn parse_rational(input: &str) -> Result<BigRational, ParseError> {
    let malformed = || ParseError::Malformed(input.to_owned());

    let captures = fraction_regex().captures(input).ok_or_else(malformed)?;
    let numer: BigInt = captures[1].parse().map_err(|_| malformed())?;
    let denom: BigInt = match captures.get(2) {
        Some(denom) => denom.as_str().parse().map_err(|_| malformed())?,
        None => BigInt::from(1),
    };
    if denom.is_zero() {
        return Err(ParseError::ZeroDenominator);
    }

    let result = BigRational::new(numer, denom);
    trace!("Parsed {input:?} as {result}");
    Ok(result)
}

/// Parses one fraction per line, skipping blank lines and lines starting with
/// `#`.
pub fn parse_rationals(
    input: impl BufRead,
) -> Result<Vec<BigRational>, Box<dyn std::error::Error>> {
    let mut result = Vec::new();
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        result.push(parse_rational(line)?);
    }
    Ok(result)
}

#[cfg(test)]
mod test {
    use super::*;

    fn ratio(num: i64, denom: i64) -> BigRational {
        BigRational::new(BigInt::from(num), BigInt::from(denom))
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(parse_rational("1/2"), Ok(ratio(1, 2)));
        assert_eq!(parse_rational("7234823/92374893"), Ok(ratio(7234823, 92374893)));
    }

    #[test]
    fn test_parse_reduces() {
        assert_eq!(parse_rational("6/4"), Ok(ratio(3, 2)));
        assert_eq!(parse_rational("0/17"), Ok(ratio(0, 1)));
        assert_eq!(parse_rational("1/-2"), Ok(ratio(-1, 2)));
        assert_eq!(parse_rational("-3/-6"), Ok(ratio(1, 2)));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_rational("42"), Ok(ratio(42, 1)));
        assert_eq!(parse_rational("-42"), Ok(ratio(-42, 1)));
        assert_eq!(parse_rational("+0"), Ok(ratio(0, 1)));
    }

    #[test]
    fn test_parse_whitespace() {
        assert_eq!(parse_rational("  5 / 7 \t"), Ok(ratio(5, 7)));
        assert_eq!(parse_rational("-5/ 7"), Ok(ratio(-5, 7)));
    }

    #[test]
    fn test_parse_big() {
        let value =
            parse_rational("123456789012345678901234567890/98765432109876543210987654321")
                .unwrap();
        assert_eq!(value, ratio(137174210, 109739369));
    }

    #[test]
    fn test_parse_zero_denominator() {
        assert_eq!(parse_rational("1/0"), Err(ParseError::ZeroDenominator));
        assert_eq!(parse_rational("0/0"), Err(ParseError::ZeroDenominator));
    }

    #[test]
    fn test_parse_malformed() {
        for input in ["", "/", "1/", "/2", "1/2/3", "1.5", "a/b", "1 2", "--1/2"] {
            assert_eq!(
                parse_rational(input),
                Err(ParseError::Malformed(input.to_owned())),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_display_error() {
        assert_eq!(
            ParseError::Malformed("x/y".to_owned()).to_string(),
            "Malformed fraction: \"x/y\""
        );
        assert_eq!(ParseError::ZeroDenominator.to_string(), "Denominator is zero");
    }

    #[test]
    fn test_parse_rationals() {
        let input = r#"# Some fractions.
1/2

 -7/12
3
"#;
        assert_eq!(
            parse_rationals(input.as_bytes()).unwrap(),
            vec![ratio(1, 2), ratio(-7, 12), ratio(3, 1)]
        );
    }

    #[test]
    fn test_parse_rationals_error() {
        let error = parse_rationals("1/2\n3/0\n".as_bytes()).unwrap_err();
        assert_eq!(error.to_string(), "Denominator is zero");
    }
}
