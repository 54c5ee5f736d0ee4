//! Account service client.
//!
//! # Design
//! Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`,
//! both free of I/O; the public operation composes the two around a single
//! `Transport::send` call. The split keeps request construction and
//! response mapping deterministic and unit-testable without a network, and
//! makes the one blocking round trip per operation explicit.
//!
//! Operations share no mutable state: concurrent calls on one client only
//! contend inside the transport's connection pool.

use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::page::{page_query, PageNumber};
use crate::transport::{Config, UreqTransport};
use crate::types::Account;
use crate::wire::{
    CreateRequest, DeleteRequest, ErrorMessage, HealthResponse, ListResponse, SingleResponse,
};

const ACCOUNTS_PATH: &str = "/v1/organisation/accounts";
const HEALTH_PATH: &str = "/v1/health";

/// Synchronous client for the organisation accounts resource.
#[derive(Clone)]
pub struct AccountClient<T = UreqTransport> {
    base_url: String,
    transport: T,
}

impl AccountClient<UreqTransport> {
    /// Client backed by the default pooled blocking transport.
    pub fn new(config: Config) -> Self {
        let transport = UreqTransport::new(&config);
        Self::with_transport(config.server, transport)
    }
}

impl<T: Transport> AccountClient<T> {
    /// Client over a caller-provided transport implementation.
    pub fn with_transport(server: impl Into<String>, transport: T) -> Self {
        let server = server.into();
        Self {
            base_url: server.trim_end_matches('/').to_string(),
            transport,
        }
    }

    // --- create ---

    pub fn build_create(&self, account: &Account) -> Result<HttpRequest, ApiError> {
        let envelope = CreateRequest::from_account(account);
        let body =
            serde_json::to_string(&envelope).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}{ACCOUNTS_PATH}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Account, ApiError> {
        let envelope: SingleResponse = decode_success(response)?;
        Ok(Account::from_data(envelope.data))
    }

    /// Creates an account. The envelope always requests record type
    /// `accounts`; the returned record carries the server-assigned version.
    pub fn create(&self, account: &Account) -> Result<Account, ApiError> {
        let request = self.build_create(account)?;
        let response = self.transport.send(&request)?;
        self.parse_create(response)
    }

    // --- fetch ---

    pub fn build_fetch(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{ACCOUNTS_PATH}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_fetch(&self, response: HttpResponse) -> Result<Account, ApiError> {
        let envelope: SingleResponse = decode_success(response)?;
        Ok(Account::from_data(envelope.data))
    }

    /// Fetches one account by id.
    pub fn fetch(&self, id: Uuid) -> Result<Account, ApiError> {
        let request = self.build_fetch(id);
        let response = self.transport.send(&request)?;
        self.parse_fetch(response)
    }

    // --- list ---

    /// Builds the list request. `InvalidArgument` from the pagination
    /// builder is returned as-is, before anything touches the transport.
    pub fn build_list(
        &self,
        page: Option<PageNumber>,
        size: Option<i64>,
    ) -> Result<HttpRequest, ApiError> {
        let query = page_query(page, size)?;
        let path = if query.is_empty() {
            format!("{}{ACCOUNTS_PATH}", self.base_url)
        } else {
            format!("{}{ACCOUNTS_PATH}?{query}", self.base_url)
        };
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Account>, ApiError> {
        let envelope: ListResponse = decode_success(response)?;
        Ok(Account::from_list(envelope.data))
    }

    /// Lists accounts on the selected page. An empty result set is an empty
    /// vector, never an absent value.
    pub fn list(
        &self,
        page: Option<PageNumber>,
        size: Option<i64>,
    ) -> Result<Vec<Account>, ApiError> {
        let request = self.build_list(page, size)?;
        let response = self.transport.send(&request)?;
        self.parse_list(response)
    }

    // --- delete ---

    pub fn build_delete(&self, id: Uuid, version: i64) -> Result<HttpRequest, ApiError> {
        let envelope = DeleteRequest::new(id, version);
        let body =
            serde_json::to_string(&envelope).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            // The version travels both as a query parameter and in the body.
            path: format!("{}{ACCOUNTS_PATH}/{id}?version={version}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    /// Deletes the account identified by id and version. Success carries no
    /// payload.
    pub fn delete(&self, id: Uuid, version: i64) -> Result<(), ApiError> {
        let request = self.build_delete(id, version)?;
        let response = self.transport.send(&request)?;
        self.parse_delete(response)
    }

    // --- health ---

    pub fn build_health(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{HEALTH_PATH}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_health(&self, response: HttpResponse) -> bool {
        if !is_success(response.status) {
            return false;
        }
        serde_json::from_str::<HealthResponse>(&response.body)
            .map(|health| health.status == "up")
            .unwrap_or(false)
    }

    /// Liveness probe. The only operation that swallows error detail: any
    /// transport, status or decode failure is reported as `false`.
    pub fn health(&self) -> bool {
        let request = self.build_health();
        match self.transport.send(&request) {
            Ok(response) => self.parse_health(response),
            Err(_) => false,
        }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Maps a non-2xx response to `ApiError::Api` with the server's message.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if is_success(response.status) {
        return Ok(());
    }
    let decoded: ErrorMessage = serde_json::from_str(&response.body)
        .map_err(|e| ApiError::Deserialization(e.to_string()))?;
    Err(ApiError::Api {
        status: response.status,
        message: decoded.message,
    })
}

fn decode_success<D: DeserializeOwned>(response: HttpResponse) -> Result<D, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
