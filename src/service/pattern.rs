//! Pattern sampler for registration numbers without a checksum.
//!
//! Parses pattern strings like `"CK{DIGITS:2}/{DIGITS:4-10}/23|{DIGITS:4}/{DIGITS:4-10}/23"`
//! and fills them with random digits. Top-level `|` separates alternatives; one is
//! chosen uniformly per fill.

use crate::random::RandomSource;

/// Upper bound on a single digit run.
const MAX_DIGITS: u8 = 32;

/// Parsed placeholder in a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// Literal text.
    Literal(String),
    /// Run of uniform digits whose length is drawn from `min..=max`.
    Digits {
        /// Shortest run.
        min: u8,
        /// Longest run.
        max: u8,
    },
}

/// One alternative of a pattern.
#[derive(Debug, Clone)]
pub struct ParsedPattern {
    /// Pattern parts.
    parts: Vec<Placeholder>,
}

impl ParsedPattern {
    /// Parse a single alternative (no `|`).
    pub fn parse(pattern: &str) -> Result<Self, String> {
        let mut parts = Vec::new();
        let mut chars = pattern.chars();
        let mut literal = String::new();

        while let Some(c) = chars.next() {
            if c == '{' {
                if !literal.is_empty() {
                    parts.push(Placeholder::Literal(std::mem::take(&mut literal)));
                }

                let mut placeholder = String::new();
                let mut found_close = false;

                for inner in chars.by_ref() {
                    if inner == '}' {
                        found_close = true;
                        break;
                    }
                    placeholder.push(inner);
                }

                if !found_close {
                    return Err("unclosed placeholder".to_string());
                }

                parts.push(parse_placeholder(&placeholder)?);
            } else if c == '}' {
                return Err("unexpected '}'".to_string());
            } else {
                literal.push(c);
            }
        }

        if !literal.is_empty() {
            parts.push(Placeholder::Literal(literal));
        }

        if parts.is_empty() {
            return Err("empty pattern".to_string());
        }

        Ok(Self { parts })
    }

    /// Parts of this alternative.
    #[must_use]
    pub fn parts(&self) -> &[Placeholder] {
        &self.parts
    }

    /// Fill this alternative.
    pub fn fill<R: RandomSource + ?Sized>(&self, rng: &mut R) -> String {
        let mut result = String::new();

        for part in &self.parts {
            match part {
                Placeholder::Literal(s) => result.push_str(s),
                Placeholder::Digits { min, max } => {
                    let len = if min == max {
                        *min
                    } else {
                        rng.uniform_int(*min..=*max)
                    };
                    for _ in 0..len {
                        result.push(char::from(b'0' + rng.digit()));
                    }
                }
            }
        }

        result
    }
}

/// A full pattern: one or more alternatives.
#[derive(Debug, Clone)]
pub struct PatternSet {
    alternatives: Vec<ParsedPattern>,
}

impl PatternSet {
    /// Parse a pattern with optional `|`-separated alternatives.
    pub fn parse(pattern: &str) -> Result<Self, String> {
        let alternatives = pattern
            .split('|')
            .map(ParsedPattern::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { alternatives })
    }

    /// Number of alternatives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Whether the set has no alternatives. Never true for a parsed set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Pick one alternative uniformly and fill it.
    pub fn fill<R: RandomSource + ?Sized>(&self, rng: &mut R) -> String {
        if self.alternatives.len() == 1 {
            return self.alternatives[0].fill(rng);
        }
        rng.sample_one(&self.alternatives).fill(rng)
    }
}

/// Parse and fill in one step.
pub fn fill_pattern<R: RandomSource + ?Sized>(pattern: &str, rng: &mut R) -> Result<String, String> {
    Ok(PatternSet::parse(pattern)?.fill(rng))
}

/// Parse a placeholder string.
fn parse_placeholder(placeholder: &str) -> Result<Placeholder, String> {
    let count = placeholder
        .strip_prefix("DIGITS:")
        .ok_or_else(|| format!("unknown placeholder: {{{placeholder}}}"))?;

    let (min, max) = match count.split_once('-') {
        Some((lo, hi)) => (parse_width(lo)?, parse_width(hi)?),
        None => {
            let n = parse_width(count)?;
            (n, n)
        }
    };

    if min > max {
        return Err(format!("digit range is reversed: {min}-{max}"));
    }

    Ok(Placeholder::Digits { min, max })
}

fn parse_width(s: &str) -> Result<u8, String> {
    let n: u8 = s
        .parse()
        .map_err(|_| format!("invalid digit count: {s}"))?;
    if n == 0 || n > MAX_DIGITS {
        return Err(format!("digit count must be 1-{MAX_DIGITS}, got {n}"));
    }
    Ok(n)
}
