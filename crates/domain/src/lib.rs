#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

/// Implements `code`, `FromStr` and `TryFrom<u8>` for a fieldless enum with explicit
/// discriminants.
macro_rules! codes {
    ($type: ident, $what: literal, $($variant: ident => $code: literal),+ $(,)?) => {
        impl $type {
            #[must_use]
            pub fn code(self) -> &'static str {
                match self {
                    $($type::$variant => $code),+
                }
            }
        }

        impl std::str::FromStr for $type {
            type Err = crate::CodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($code => Ok($type::$variant),)+
                    _ => Err(crate::CodeError::Invalid($what, s.to_string())),
                }
            }
        }

        impl TryFrom<u8> for $type {
            type Error = crate::CodeError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $(x if x == $type::$variant as u8 => Ok($type::$variant),)+
                    _ => Err(crate::CodeError::InvalidCode($what, value)),
                }
            }
        }
    };
}

pub mod catalog;
mod error;
mod exercise;
mod generator;
mod plan;
mod policy;
mod profile;
mod progression;
mod selection;
mod service;
mod split;

pub use error::*;
pub use exercise::*;
pub use generator::*;
pub use plan::*;
pub use policy::*;
pub use profile::*;
pub use progression::*;
pub use selection::*;
pub use service::*;
pub use split::*;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CodeError {
    #[error("Invalid {0}: \"{1}\"")]
    Invalid(&'static str, String),
    #[error("Invalid {0} code: {1}")]
    InvalidCode(&'static str, u8),
}
