//! ISO country and currency codes.
//!
//! # Design
//! Thin validating wrappers around externally maintained tables
//! (`isocountry` for ISO 3166-1, `iso_currency` for ISO 4217). Neither type
//! owns any table data; validity is delegated to the table on construction,
//! and the failure contract is the same `InvalidEnum` used by the controlled
//! vocabularies in `enums`, so the envelope mapper treats every attribute
//! field uniformly.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// ISO 3166-1 country, encoded on the wire as its 2-letter alpha-2 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryCode(isocountry::CountryCode);

impl CountryCode {
    pub const fn new(code: isocountry::CountryCode) -> Self {
        Self(code)
    }

    /// Canonical uppercase alpha-2 code, e.g. `"GB"`.
    pub fn alpha2(&self) -> &'static str {
        self.0.alpha2()
    }
}

impl From<isocountry::CountryCode> for CountryCode {
    fn from(code: isocountry::CountryCode) -> Self {
        Self(code)
    }
}

impl Display for CountryCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.alpha2())
    }
}

impl FromStr for CountryCode {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        isocountry::CountryCode::for_alpha2(value)
            .map(Self)
            .map_err(|_| ApiError::InvalidEnum {
                value: value.to_owned(),
            })
    }
}

impl Serialize for CountryCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.alpha2())
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// ISO 4217 currency, encoded on the wire as its 3-letter uppercase code.
///
/// Holds the canonical code after validating it against the `iso_currency`
/// table, so encoding can never emit a code the table does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: &str) -> Result<Self, ApiError> {
        code.parse()
    }

    /// Canonical uppercase code, e.g. `"GBP"`.
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if iso_currency::Currency::from_code(value).is_some() {
            Ok(Self(value.to_owned()))
        } else {
            Err(ApiError::InvalidEnum {
                value: value.to_owned(),
            })
        }
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
