//! Wire envelopes for the account service (JSON-API flavoured `data`/`links`).
//!
//! # Design
//! `AccountData` is the payload shape shared by requests and responses; its
//! optional fields let requests omit what the server assigns. The mapping
//! into `Account` enforces the resource contract: a response must carry the
//! `accounts` record type and a version, and a violation of either is a
//! client/server mismatch that panics rather than producing a record the
//! caller could mistake for valid data.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::RecordType;
use crate::types::{Account, Attributes};

/// Account payload as it travels inside an envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountData {
    pub id: Uuid,
    pub organisation_id: Uuid,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<RecordType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// Server timestamps; carried on the wire but not exposed on `Account`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<String>,
    pub attributes: Attributes,
}

/// Pagination links attached to responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

/// Response carrying a single account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleResponse {
    pub data: AccountData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Response carrying a page of accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub data: Vec<AccountData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Request envelope for `create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequest {
    pub data: AccountData,
}

impl CreateRequest {
    /// Builds the create envelope from a caller record.
    ///
    /// The record type is always `accounts` — other record types cannot be
    /// created through this client, whatever the record says — and the
    /// version is omitted because the server assigns it.
    pub fn from_account(account: &Account) -> Self {
        Self {
            data: AccountData {
                id: account.id,
                organisation_id: account.organisation_id,
                record_type: Some(RecordType::Accounts),
                version: None,
                created_on: None,
                modified_on: None,
                attributes: account.attributes.clone(),
            },
        }
    }
}

/// Request envelope for `delete`: identity and version only, no attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub data: DeleteData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteData {
    pub id: Uuid,
    pub version: i64,
}

impl DeleteRequest {
    pub fn new(id: Uuid, version: i64) -> Self {
        Self {
            data: DeleteData { id, version },
        }
    }
}

/// Body the server sends with any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(rename = "error_message")]
    pub message: String,
}

/// Body of the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl Account {
    /// Maps a response payload into an `Account`.
    ///
    /// # Panics
    /// Panics when the payload's record type is anything but `accounts`, or
    /// when the server-assigned version is missing. Both mean the server
    /// broke the resource contract; coercing to a default would hand the
    /// caller a record that no correct exchange could have produced.
    pub fn from_data(data: AccountData) -> Self {
        match data.record_type {
            Some(RecordType::Accounts) => {}
            other => panic!("account response has unsupported record type {other:?}"),
        }
        let Some(version) = data.version else {
            panic!("account response is missing the server-assigned version");
        };
        Self {
            record_type: RecordType::Accounts,
            id: data.id,
            organisation_id: data.organisation_id,
            version,
            attributes: data.attributes,
        }
    }

    /// Maps a list payload element-wise, preserving server order. An empty
    /// wire array yields an empty vector, never an absent value.
    pub fn from_list(data: Vec<AccountData>) -> Vec<Account> {
        data.into_iter().map(Account::from_data).collect()
    }
}
