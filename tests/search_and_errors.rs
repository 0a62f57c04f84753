//! Search union decoding and API error mapping tests.

use notionkit::{ErrorCode, SearchResult};
use pretty_assertions::assert_eq;

#[test]
fn search_results_mix_pages_and_databases_in_order() {
    let json = r#"{
        "object": "list",
        "results": [
            {
                "object": "database",
                "id": "668d797c-76fa-4934-9b05-ad288df2d136",
                "created_time": "2020-03-17T19:10:04.968Z",
                "last_edited_time": "2020-03-17T21:49:37.913Z",
                "title": [{"type": "text", "text": {"content": "Tasks", "link": null}, "plain_text": "Tasks"}],
                "parent": {"type": "page_id", "page_id": "b8595b75-abd1-4cad-8dfe-f935a8ef57cb"},
                "properties": {
                    "Name": {"id": "title", "name": "Name", "type": "title", "title": {}}
                }
            },
            {
                "object": "page",
                "id": "276ee3f5-5f1b-4182-ab4c-e3c05f4be78a",
                "created_time": "2021-05-19T19:34:05.068Z",
                "last_edited_time": "2021-05-19T19:34:05.069Z",
                "parent": {"type": "workspace", "workspace": true},
                "archived": false,
                "properties": {"title": [{"type": "text", "text": {"content": "Home", "link": null}, "plain_text": "Home"}]}
            }
        ],
        "has_more": true,
        "next_cursor": "cursor-xyz"
    }"#;
    let list: notionkit::ListResponse<SearchResult> = serde_json::from_str(json).unwrap();
    assert_eq!(list.results.len(), 2);
    assert!(list.has_more);
    assert_eq!(list.next_cursor.as_deref(), Some("cursor-xyz"));

    let database = list.results[0].as_database().unwrap();
    assert_eq!(database.title_text(), "Tasks");
    assert!(list.results[0].as_page().is_none());

    let page = list.results[1].as_page().unwrap();
    assert_eq!(notionkit::plain_text(page.properties.title().unwrap()), "Home");
}

#[test]
fn unknown_search_object_kind_is_an_error() {
    let json = r#"{"object": "data_source", "id": "abc"}"#;
    let err = serde_json::from_str::<SearchResult>(json).unwrap_err();
    assert!(err.to_string().contains("data_source"));
}

#[test]
fn search_result_without_object_field_is_an_error() {
    let json = r#"{"id": "abc"}"#;
    assert!(serde_json::from_str::<SearchResult>(json).is_err());
}

#[test]
fn error_code_taxonomy_covers_the_documented_codes() {
    assert_eq!(ErrorCode::from_code("object_not_found"), ErrorCode::ObjectNotFound);
    assert!(ErrorCode::from_code("rate_limited").is_retryable());
    assert!(!ErrorCode::from_code("unauthorized").is_retryable());

    // Unrecognized codes are preserved verbatim.
    let code = ErrorCode::from_code("brand_new_code");
    assert_eq!(code, ErrorCode::Unknown("brand_new_code".to_string()));
    assert_eq!(code.to_string(), "brand_new_code");
}

#[test]
fn api_error_display_matches_wire_format() {
    let err = notionkit::Error::Api {
        status: 400,
        code: ErrorCode::Validation,
        message: "foobar".to_string(),
    };
    assert_eq!(err.to_string(), "foobar (code: validation_error, status: 400)");
}
