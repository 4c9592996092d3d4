use std::fmt::Formatter;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CEP_RE: Regex = Regex::new(r"^\d{5}-?\d{3}$")
        .expect("Could not create regex");
}

/// A validated CEP, stored as its 8 digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cep(String);

#[derive(Debug)]
pub struct InvalidCep {
    pub input: String
}

impl std::fmt::Display for InvalidCep {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Invalid CEP: '{}'", self.input)
    }
}

impl Cep {
    /// Accepts `#####-###` and `########`, with surrounding whitespace.
    pub fn parse(input: &str) -> Result<Cep, InvalidCep> {
        let trimmed = input.trim();
        if !CEP_RE.is_match(trimmed) {
            return Err(InvalidCep { input: input.to_owned() });
        }
        Ok(Cep(trimmed.replace('-', "")))
    }

    /// The 8-digit form used in the request path.
    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cep {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}-{}", &self.0[..5], &self.0[5..])
    }
}
