use std::fmt::Display;

use crate::error::Error;
use crate::nullable::*;

#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(about = "Wrap a literal in a nullable container"))]
#[derive(Debug, Clone)]
pub struct Cli {
    /// Literal to wrap; `#NULL` or `NULL` produces a null
    pub value: String,

    #[cfg_attr(
        feature = "cli",
        arg(short = 't', long = "type", default_value_t = ElementType::Character)
    )]
    pub element: ElementType,

    #[cfg_attr(feature = "cli", arg(short, long, default_value_t = Format::Full))]
    pub format: Format,

    #[cfg_attr(feature = "cli", arg(long))]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn is_null_literal(&self) -> bool {
        matches!(self.value.trim(), NULL_LITERAL | "NULL")
    }

    /// Convert the literal and render it, followed by its hash when seeded
    pub fn run(&self) -> Result<String, Error> {
        let (rendered, hash) = match self.element {
            ElementType::Logical => self.render(
                |s: &str| Logical::convert(s),
                |x, seed| x.hash_with_seed(seed),
            )?,
            ElementType::Integer => self.render(
                |s: &str| Integer::convert(s),
                |x, seed| x.hash_with_seed(seed),
            )?,
            ElementType::Double => self.render(
                |s: &str| Double::convert(s),
                |x, seed| x.as_ref().map(|v| v.to_bits()).hash_with_seed(seed),
            )?,
            ElementType::Character => self.render(
                |s: &str| Ok(Character::convert(s)?),
                |x, seed| x.hash_with_seed(seed),
            )?,
        };

        Ok(match hash {
            Some(hash) => format!("{rendered}\n{hash:#018x}"),
            None => rendered,
        })
    }

    fn render<T, F, H>(&self, convert: F, hash: H) -> Result<(String, Option<u64>), Error>
    where
        T: Display,
        F: Fn(&str) -> Result<Nullable<T>, Error>,
        H: Fn(&Nullable<T>, u64) -> u64,
    {
        let x = if self.is_null_literal() {
            Nullable::convert(NoValue)?
        } else {
            convert(self.value.trim())?
        };

        let hash = self.seed.map(|seed| hash(&x, seed));
        Ok((x.format(self.format), hash))
    }
}
