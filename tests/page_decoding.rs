//! Page decoding tests.
//!
//! The properties container of a page depends on its parent, so these
//! tests cover each parent kind plus the rejected one.

use notionkit::{Page, PageProperties, Parent, PropertyValue};
use pretty_assertions::assert_eq;

#[test]
fn database_parented_page_carries_property_map() {
    let json = r#"{
        "object": "page",
        "id": "216cd412-8533-8087-a989-cf37889137c3",
        "created_time": "2023-01-01T00:00:00.000Z",
        "last_edited_time": "2023-01-02T00:00:00.000Z",
        "parent": {"type": "database_id", "database_id": "a1b2c3d4-e5f6-7890-abcd-ef1234567890"},
        "archived": false,
        "url": "https://www.notion.so/Test-Page",
        "properties": {
            "Name": {
                "id": "title",
                "type": "title",
                "title": [{
                    "type": "text",
                    "text": {"content": "Weekly sync", "link": null},
                    "plain_text": "Weekly sync"
                }]
            },
            "Done": {"id": "done", "type": "checkbox", "checkbox": true},
            "Priority": {"id": "prio", "type": "number", "number": 5}
        }
    }"#;
    let page: Page = serde_json::from_str(json).unwrap();
    assert!(matches!(page.parent, Parent::DatabaseId { .. }));

    let props = page.properties.database().unwrap();
    // Server order is preserved.
    let names: Vec<&str> = props.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Name", "Done", "Priority"]);
    assert_eq!(props["Done"].value.as_checkbox(), Some(true));
    assert_eq!(props["Priority"].value.as_number(), Some(5.0));
    assert_eq!(notionkit::plain_text(page.properties.title().unwrap()), "Weekly sync");
}

#[test]
fn page_parented_page_carries_title_only() {
    let json = r#"{
        "object": "page",
        "id": "b0668f48-8d66-4733-9bdb-2f82215707f7",
        "created_time": "2023-01-01T00:00:00.000Z",
        "last_edited_time": "2023-01-01T00:00:00.000Z",
        "parent": {"type": "page_id", "page_id": "5c6a2821-6bb1-4a7e-b6e1-c50111515c3d"},
        "archived": false,
        "icon": {"type": "emoji", "emoji": "🚀"},
        "properties": {
            "title": [{
                "type": "text",
                "text": {"content": "Subpage", "link": null},
                "plain_text": "Subpage"
            }]
        }
    }"#;
    let page: Page = serde_json::from_str(json).unwrap();
    assert!(matches!(page.properties, PageProperties::Title(_)));
    assert!(page.properties.database().is_none());
    assert_eq!(notionkit::plain_text(page.properties.title().unwrap()), "Subpage");
    assert!(matches!(page.icon, Some(notionkit::Icon::Emoji { .. })));
}

#[test]
fn workspace_parented_page_decodes_like_page_parent() {
    let json = r#"{
        "object": "page",
        "id": "b0668f48-8d66-4733-9bdb-2f82215707f7",
        "created_time": "2023-01-01T00:00:00.000Z",
        "last_edited_time": "2023-01-01T00:00:00.000Z",
        "parent": {"type": "workspace", "workspace": true},
        "archived": false,
        "properties": {"title": []}
    }"#;
    let page: Page = serde_json::from_str(json).unwrap();
    assert!(matches!(page.parent, Parent::Workspace { workspace: true }));
    assert!(matches!(page.properties, PageProperties::Title(_)));
}

#[test]
fn block_parented_page_is_rejected() {
    let json = r#"{
        "object": "page",
        "id": "b0668f48-8d66-4733-9bdb-2f82215707f7",
        "created_time": "2023-01-01T00:00:00.000Z",
        "last_edited_time": "2023-01-01T00:00:00.000Z",
        "parent": {"type": "block_id", "block_id": "048e165e-352d-4119-8128-e46c3527d95c"},
        "archived": false,
        "properties": {"title": []}
    }"#;
    let err = serde_json::from_str::<Page>(json).unwrap_err();
    assert!(err.to_string().contains("block_id"));
}

#[test]
fn database_row_with_date_and_select_values() {
    let json = r#"{
        "object": "page",
        "id": "216cd412-8533-8087-a989-cf37889137c3",
        "created_time": "2023-01-01T00:00:00.000Z",
        "last_edited_time": "2023-01-01T00:00:00.000Z",
        "parent": {"type": "database_id", "database_id": "a1b2c3d4-e5f6-7890-abcd-ef1234567890"},
        "archived": false,
        "properties": {
            "When": {"type": "date", "date": {"start": "2021-05-18", "end": null}},
            "Stage": {"type": "select", "select": {"id": "1", "name": "Shipped", "color": "green"}}
        }
    }"#;
    let page: Page = serde_json::from_str(json).unwrap();
    let props = page.properties.database().unwrap();
    let date = props["When"].value.as_date().unwrap();
    assert!(!date.start.has_time());
    assert_eq!(date.start.to_wire(), "2021-05-18");
    assert_eq!(props["Stage"].value.as_select().unwrap().name, "Shipped");
    assert!(matches!(props["When"].value, PropertyValue::Date { .. }));
}
