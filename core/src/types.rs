//! Canonical in-memory representation of an account resource.
//!
//! # Design
//! `Account` deliberately has no serde derives: everything that crosses the
//! wire goes through the envelope types in `wire`, which decide what is
//! caller-set and what is server-assigned. `Attributes` is the serializable
//! bundle shared by requests and responses; its field names are the exact
//! snake_case strings of the service contract.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::codes::{CountryCode, Currency};
use crate::enums::{AccountClassification, AccountStatus, RecordType};

/// Attributes of an account. Optional fields are omitted from request
/// bodies when unset and defaulted when missing from responses. The
/// free-text banking identifiers are passed through unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub country: CountryCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_id_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternative_names: Vec<String>,
    #[serde(default)]
    pub account_classification: AccountClassification,
    #[serde(default)]
    pub joint_account: bool,
    #[serde(default)]
    pub account_matching_opt_out: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_identification: Option<String>,
    #[serde(default)]
    pub switched: bool,
    #[serde(default)]
    pub status: AccountStatus,
}

impl Attributes {
    /// Minimal bundle with the required `country`; everything else starts
    /// out unset or at its vocabulary default.
    pub fn new(country: CountryCode) -> Self {
        Self {
            country,
            base_currency: None,
            account_number: None,
            bank_id: None,
            bank_id_code: None,
            bic: None,
            iban: None,
            name: Vec::new(),
            alternative_names: Vec::new(),
            account_classification: AccountClassification::default(),
            joint_account: false,
            account_matching_opt_out: false,
            secondary_identification: None,
            switched: false,
            status: AccountStatus::default(),
        }
    }
}

/// A bank account resource.
///
/// `id` and `organisation_id` are caller-set and immutable. `version` is
/// exclusively server-owned: `create` never sends it, and every mapped
/// response carries the server's value. `record_type` is likewise forced to
/// `accounts` on create regardless of what the caller put here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub record_type: RecordType,
    pub id: Uuid,
    pub organisation_id: Uuid,
    pub version: i64,
    pub attributes: Attributes,
}

impl Account {
    /// A record ready for `create`. The version starts at 0 and is ignored
    /// by the create envelope; the server assigns the real one.
    pub fn new(id: Uuid, organisation_id: Uuid, attributes: Attributes) -> Self {
        Self {
            record_type: RecordType::Accounts,
            id,
            organisation_id,
            version: 0,
            attributes,
        }
    }
}
