//! Pagination parameters for the list operation.
//!
//! # Design
//! The server accepts `page[number]` as a non-negative integer or the
//! keywords `first`/`last`, and `page[size]` as a positive integer. Omission
//! is expressed with `Option::None` at the call site rather than sentinel
//! values. `page_query` is pure: it performs no I/O and fails only on the
//! two documented out-of-range inputs.

use crate::error::ApiError;

/// Page selector for `list`: a numeric page index or one of the keyword
/// selectors. A numeric selector must be non-negative; 0 is passed through
/// to the server unchanged rather than treated as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNumber {
    First,
    Last,
    Number(i64),
}

/// Builds the pagination query string.
///
/// Contributed parameters are joined with a single `&`, `page[number]`
/// before `page[size]`; the result is empty when both are omitted. A
/// negative page number or a non-positive page size fails with
/// `InvalidArgument` naming the offending value, before any request is sent.
pub fn page_query(page: Option<PageNumber>, size: Option<i64>) -> Result<String, ApiError> {
    let mut params = Vec::with_capacity(2);
    match page {
        None => {}
        Some(PageNumber::First) => params.push("page[number]=first".to_string()),
        Some(PageNumber::Last) => params.push("page[number]=last".to_string()),
        Some(PageNumber::Number(n)) if n >= 0 => params.push(format!("page[number]={n}")),
        Some(PageNumber::Number(n)) => {
            return Err(ApiError::InvalidArgument {
                argument: format!("page_number={n}"),
            })
        }
    }
    match size {
        None => {}
        Some(n) if n > 0 => params.push(format!("page[size]={n}")),
        Some(n) => {
            return Err(ApiError::InvalidArgument {
                argument: format!("page_size={n}"),
            })
        }
    }
    Ok(params.join("&"))
}
