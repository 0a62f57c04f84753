// src/api/responses.rs
//! Inbound response envelopes.
//!
//! Every list-shaped endpoint shares one pagination envelope; callers
//! drive pagination by resubmitting the opaque cursor. The error body
//! shape is decoded here and mapped onto the sentinel taxonomy in
//! `crate::error`.

use crate::error::{Error, ErrorCode};
use crate::model::{Block, Comment, Page, SearchResult, User};
use serde::Deserialize;

/// Generic paginated response wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

pub type BlockChildrenResponse = ListResponse<Block>;
pub type DatabaseQueryResponse = ListResponse<Page>;
pub type SearchResponse = ListResponse<SearchResult>;
pub type ListUsersResponse = ListResponse<User>;
pub type CommentsResponse = ListResponse<Comment>;

/// The structured error body returned with every non-2xx response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub object: String,
    pub status: u16,
    pub code: String,
    pub message: String,
}

/// Maps a non-2xx response body onto the sentinel taxonomy. Bodies
/// that don't parse as the error shape fall back to a generic entry
/// carrying the HTTP status.
pub(crate) fn parse_api_error(status: u16, body: &str) -> Error {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(err) => Error::Api {
            status: err.status,
            code: ErrorCode::from_code(&err.code),
            message: err.message,
        },
        Err(_) => {
            let preview: String = body.chars().take(200).collect();
            Error::Api {
                status,
                code: ErrorCode::Unknown(format!("http_{}", status)),
                message: preview,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_error_mapping() {
        let body = r#"{"object":"error","status":400,"code":"validation_error","message":"foobar"}"#;
        let err = parse_api_error(400, body);
        assert_eq!(err.api_code(), Some(&ErrorCode::Validation));
        assert!(err
            .to_string()
            .contains("foobar (code: validation_error, status: 400)"));
    }

    #[test]
    fn test_unparseable_body_falls_back_to_status() {
        let err = parse_api_error(502, "<html>bad gateway</html>");
        assert_eq!(
            err.api_code(),
            Some(&ErrorCode::Unknown("http_502".to_string()))
        );
    }

    #[test]
    fn test_list_envelope_decode() {
        let json = r#"{"object":"list","results":[],"has_more":true,"next_cursor":"abc123"}"#;
        let list: ListResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(list.has_more);
        assert_eq!(list.next_cursor.as_deref(), Some("abc123"));
    }
}
