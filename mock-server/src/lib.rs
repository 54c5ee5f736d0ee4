//! In-memory fake of the organisation accounts service.
//!
//! Implements the subset of the API the client exercises: create, fetch,
//! paginated list, versioned delete and the health probe. Accounts are kept
//! in insertion order so `page[number]`/`first`/`last` behave
//! deterministically, and attributes are carried opaquely as JSON and
//! echoed back verbatim — schema validation is the client's job, which is
//! exactly what the integration tests want to observe.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

const DEFAULT_PAGE_SIZE: usize = 100;

/// Stored account record, serialized as the `data` payload of responses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: Uuid,
    pub organisation_id: Uuid,
    #[serde(rename = "type")]
    pub record_type: String,
    pub version: i64,
    pub attributes: Value,
}

#[derive(Deserialize)]
pub struct CreateBody {
    pub data: CreateData,
}

#[derive(Deserialize)]
pub struct CreateData {
    pub id: Uuid,
    pub organisation_id: Uuid,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub attributes: Value,
}

#[derive(Serialize, Deserialize)]
pub struct Single {
    pub data: AccountRecord,
    pub links: Links,
}

#[derive(Serialize, Deserialize)]
pub struct Listed {
    pub data: Vec<AccountRecord>,
    pub links: Links,
}

#[derive(Serialize, Deserialize, Default)]
pub struct Links {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorBody {
    pub error_message: String,
}

pub type Db = Arc<RwLock<Vec<AccountRecord>>>;

type ErrorResponse = (StatusCode, Json<ErrorBody>);

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/v1/health", get(health))
        .route(
            "/v1/organisation/accounts",
            get(list_accounts).post(create_account),
        )
        .route(
            "/v1/organisation/accounts/{id}",
            get(fetch_account).delete(delete_account),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn error(status: StatusCode, message: impl Into<String>) -> ErrorResponse {
    (
        status,
        Json(ErrorBody {
            error_message: message.into(),
        }),
    )
}

fn not_found(id: Uuid) -> ErrorResponse {
    error(StatusCode::NOT_FOUND, format!("record {id} does not exist"))
}

fn self_links(id: Uuid) -> Links {
    Links {
        self_link: Some(format!("/v1/organisation/accounts/{id}")),
    }
}

async fn health() -> Json<Value> {
    Json(serde_json::json!({"status": "up"}))
}

async fn create_account(
    State(db): State<Db>,
    Json(body): Json<CreateBody>,
) -> Result<(StatusCode, Json<Single>), ErrorResponse> {
    if body.data.record_type.as_deref() != Some("accounts") {
        return Err(error(
            StatusCode::BAD_REQUEST,
            "type must be accounts".to_string(),
        ));
    }
    let mut accounts = db.write().await;
    if accounts.iter().any(|a| a.id == body.data.id) {
        return Err(error(
            StatusCode::CONFLICT,
            format!("account {} already exists", body.data.id),
        ));
    }
    let record = AccountRecord {
        id: body.data.id,
        organisation_id: body.data.organisation_id,
        record_type: "accounts".to_string(),
        version: 0,
        attributes: body.data.attributes,
    };
    accounts.push(record.clone());
    let links = self_links(record.id);
    Ok((StatusCode::CREATED, Json(Single { data: record, links })))
}

async fn fetch_account(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Single>, ErrorResponse> {
    let accounts = db.read().await;
    accounts
        .iter()
        .find(|a| a.id == id)
        .cloned()
        .map(|record| {
            let links = self_links(record.id);
            Json(Single { data: record, links })
        })
        .ok_or_else(|| not_found(id))
}

async fn list_accounts(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Listed>, ErrorResponse> {
    let accounts = db.read().await;

    let size = match params.get("page[size]") {
        None => DEFAULT_PAGE_SIZE,
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(error(
                    StatusCode::BAD_REQUEST,
                    format!("invalid page[size] '{raw}'"),
                ))
            }
        },
    };

    let pages = accounts.len().div_ceil(size);
    let number = match params.get("page[number]").map(String::as_str) {
        None => 0,
        Some("first") => 0,
        Some("last") => pages.saturating_sub(1),
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                return Err(error(
                    StatusCode::BAD_REQUEST,
                    format!("invalid page[number] '{raw}'"),
                ))
            }
        },
    };

    let data: Vec<AccountRecord> = accounts
        .iter()
        .skip(number.saturating_mul(size))
        .take(size)
        .cloned()
        .collect();
    Ok(Json(Listed {
        data,
        links: Links::default(),
    }))
}

async fn delete_account(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<StatusCode, ErrorResponse> {
    let version = params
        .get("version")
        .and_then(|raw| raw.parse::<i64>().ok())
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, "missing or malformed version"))?;

    let mut accounts = db.write().await;
    let index = accounts
        .iter()
        .position(|a| a.id == id)
        .ok_or_else(|| not_found(id))?;
    if accounts[index].version != version {
        return Err(error(
            StatusCode::CONFLICT,
            format!("invalid version {version}"),
        ));
    }
    accounts.remove(index);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_record_serializes_with_type_field() {
        let record = AccountRecord {
            id: Uuid::nil(),
            organisation_id: Uuid::nil(),
            record_type: "accounts".to_string(),
            version: 0,
            attributes: serde_json::json!({"country": "GB"}),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "accounts");
        assert_eq!(json["version"], 0);
        assert_eq!(json["attributes"]["country"], "GB");
    }

    #[test]
    fn create_body_requires_data_envelope() {
        let result: Result<CreateBody, _> = serde_json::from_str(r#"{"id":"nope"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_body_type_is_optional_in_the_schema() {
        let body: CreateBody = serde_json::from_str(
            r#"{"data":{"id":"00000000-0000-0000-0000-000000000001",
                "organisation_id":"00000000-0000-0000-0000-000000000002",
                "attributes":{}}}"#,
        )
        .unwrap();
        assert!(body.data.record_type.is_none());
    }
}
