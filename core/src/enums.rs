//! Controlled vocabularies used by account attributes.
//!
//! # Design
//! Each vocabulary is a closed sum type with an exhaustive `as_str`/`FromStr`
//! pair, and the serde impls delegate to that pair so the wire form and the
//! parser can never drift apart. Matching is exact and case-sensitive: the
//! casing asymmetry between classifications (`"Personal"`) and statuses
//! (`"confirmed"`) is part of the service contract and must be preserved.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Classification of an account as `"Personal"` or `"Business"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountClassification {
    #[default]
    Personal,
    Business,
}

impl AccountClassification {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Business => "Business",
        }
    }
}

impl Display for AccountClassification {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountClassification {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Personal" => Ok(Self::Personal),
            "Business" => Ok(Self::Business),
            other => Err(ApiError::InvalidEnum {
                value: other.to_owned(),
            }),
        }
    }
}

impl Serialize for AccountClassification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AccountClassification {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Status of an account: `"confirmed"`, `"pending"` or `"failed"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountStatus {
    #[default]
    Confirmed,
    Pending,
    Failed,
}

impl AccountStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }
}

impl Display for AccountStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "confirmed" => Ok(Self::Confirmed),
            "pending" => Ok(Self::Pending),
            "failed" => Ok(Self::Failed),
            other => Err(ApiError::InvalidEnum {
                value: other.to_owned(),
            }),
        }
    }
}

impl Serialize for AccountStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AccountStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Type of a resource record. This client only supports the account
/// management subset: `"accounts"` and `"account_events"`.
///
/// `None` encodes to the empty string and exists only so the field can be
/// left out without resorting to a nullable representation; it is never a
/// valid value to receive, so parsing `""` fails like any unknown string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordType {
    #[default]
    None,
    Accounts,
    AccountEvents,
}

impl RecordType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Accounts => "accounts",
            Self::AccountEvents => "account_events",
        }
    }
}

impl Display for RecordType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "accounts" => Ok(Self::Accounts),
            "account_events" => Ok(Self::AccountEvents),
            other => Err(ApiError::InvalidEnum {
                value: other.to_owned(),
            }),
        }
    }
}

impl Serialize for RecordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecordType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_round_trips() {
        for value in [AccountClassification::Personal, AccountClassification::Business] {
            assert_eq!(value.as_str().parse::<AccountClassification>().unwrap(), value);
        }
    }

    #[test]
    fn classification_is_capitalized_on_the_wire() {
        let json = serde_json::to_string(&AccountClassification::Personal).unwrap();
        assert_eq!(json, r#""Personal""#);
        // The lowercase form is not a member.
        let err = "personal".parse::<AccountClassification>().unwrap_err();
        assert!(matches!(err, ApiError::InvalidEnum { .. }));
    }

    #[test]
    fn status_round_trips() {
        for value in [
            AccountStatus::Confirmed,
            AccountStatus::Pending,
            AccountStatus::Failed,
        ] {
            assert_eq!(value.as_str().parse::<AccountStatus>().unwrap(), value);
        }
    }

    #[test]
    fn status_is_lowercase_on_the_wire() {
        let json = serde_json::to_string(&AccountStatus::Confirmed).unwrap();
        assert_eq!(json, r#""confirmed""#);
        let err = "Confirmed".parse::<AccountStatus>().unwrap_err();
        assert!(matches!(err, ApiError::InvalidEnum { .. }));
    }

    #[test]
    fn record_type_round_trips() {
        for value in [RecordType::Accounts, RecordType::AccountEvents] {
            assert_eq!(value.as_str().parse::<RecordType>().unwrap(), value);
        }
    }

    #[test]
    fn record_type_none_encodes_to_empty_string() {
        assert_eq!(serde_json::to_string(&RecordType::None).unwrap(), r#""""#);
        // The empty string is an omission marker, never a parseable member.
        let err = "".parse::<RecordType>().unwrap_err();
        assert!(matches!(err, ApiError::InvalidEnum { value } if value.is_empty()));
    }

    #[test]
    fn unknown_member_fails_with_invalid_enum() {
        let err = "Banana".parse::<AccountClassification>().unwrap_err();
        assert!(matches!(err, ApiError::InvalidEnum { value } if value == "Banana"));
        let err = serde_json::from_str::<AccountStatus>(r#""unknown""#).unwrap_err();
        assert!(err.to_string().contains("invalid enum value 'unknown'"));
    }
}
