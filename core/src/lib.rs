//! Synchronous typed client for the organisation accounts JSON API.
//!
//! # Overview
//! The crate covers one resource type — organisation accounts — and a fixed
//! set of controlled vocabularies for its attribute fields. It builds
//! JSON-API-style envelopes for create/fetch/list/delete, maps pagination
//! selectors onto `page[number]`/`page[size]` query parameters, and checks
//! every enumerated attribute value against its vocabulary on both encode
//! and decode.
//!
//! # Design
//! - `AccountClient` is stateless; every operation is one blocking round
//!   trip through the narrow `Transport` collaborator, with no retries and
//!   no shared mutable state.
//! - Each operation is split into `build_*` (produces an `HttpRequest`) and
//!   `parse_*` (consumes an `HttpResponse`), so the I/O boundary is
//!   explicit and both halves are testable without a network.
//! - Vocabularies are closed sum types with exhaustive text codecs; the ISO
//!   country/currency wrappers delegate validity to external tables but
//!   share the same failure contract.
//! - Wire DTOs are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod client;
pub mod codes;
pub mod enums;
pub mod error;
pub mod http;
pub mod page;
pub mod transport;
pub mod types;
pub mod wire;

pub use client::AccountClient;
pub use codes::{CountryCode, Currency};
pub use enums::{AccountClassification, AccountStatus, RecordType};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use page::{page_query, PageNumber};
pub use transport::{Config, UreqTransport};
pub use types::{Account, Attributes};
