//! Block decoding and encoding tests across the payload vocabulary,
//! including nesting and the unsupported-type fallback.

use notionkit::{Block, BlockData};
use pretty_assertions::assert_eq;

#[test]
fn paragraph_with_nested_children_round_trips() {
    let json = r#"{
        "object": "block",
        "id": "048e165e-352d-4119-8128-e46c3527d95c",
        "created_time": "2022-01-01T00:00:00.000Z",
        "last_edited_time": "2022-01-01T00:00:00.000Z",
        "has_children": true,
        "type": "toggle",
        "toggle": {
            "rich_text": [{"type": "text", "text": {"content": "Details", "link": null}, "plain_text": "Details"}],
            "color": "default",
            "children": [
                {"type": "paragraph", "paragraph": {
                    "rich_text": [{"type": "text", "text": {"content": "Hidden", "link": null}, "plain_text": "Hidden"}]
                }}
            ]
        }
    }"#;
    let block: Block = serde_json::from_str(json).unwrap();
    assert_eq!(block.block_type(), "toggle");
    assert!(block.has_children);
    assert_eq!(block.children().len(), 1);
    assert_eq!(block.children()[0].block_type(), "paragraph");

    let encoded = serde_json::to_value(&block).unwrap();
    assert_eq!(encoded["object"], "block");
    assert_eq!(
        encoded["toggle"]["children"][0]["paragraph"]["rich_text"][0]["text"]["content"],
        "Hidden"
    );
}

#[test]
fn table_preserves_row_order_and_cells() {
    let json = r#"{
        "object": "block",
        "type": "table",
        "table": {
            "table_width": 2,
            "has_column_header": true,
            "has_row_header": false,
            "children": [
                {"type": "table_row", "table_row": {"cells": [
                    [{"type": "text", "text": {"content": "Name", "link": null}, "plain_text": "Name"}],
                    [{"type": "text", "text": {"content": "Age", "link": null}, "plain_text": "Age"}]
                ]}},
                {"type": "table_row", "table_row": {"cells": [
                    [{"type": "text", "text": {"content": "Ada", "link": null}, "plain_text": "Ada"}],
                    [{"type": "text", "text": {"content": "36", "link": null}, "plain_text": "36"}]
                ]}}
            ]
        }
    }"#;
    let block: Block = serde_json::from_str(json).unwrap();
    let table = match &block.data {
        BlockData::Table(table) => table,
        other => panic!("expected table, got {:?}", other),
    };
    assert_eq!(table.table_width, 2);
    assert!(table.has_column_header);
    assert_eq!(table.children.len(), 2);

    let first_row = match &table.children[0].data {
        BlockData::TableRow(row) => row,
        other => panic!("expected table_row, got {:?}", other),
    };
    assert_eq!(first_row.cells.len(), 2);
    assert_eq!(notionkit::plain_text(&first_row.cells[0]), "Name");
}

#[test]
fn media_blocks_share_the_file_object_shape() {
    let json = r#"{
        "object": "block",
        "type": "image",
        "image": {
            "type": "file",
            "file": {"url": "https://s3.example.com/img.png", "expiry_time": "2022-07-15T20:00:00.000Z"},
            "caption": [{"type": "text", "text": {"content": "A chart", "link": null}, "plain_text": "A chart"}]
        }
    }"#;
    let block: Block = serde_json::from_str(json).unwrap();
    match &block.data {
        BlockData::Image(media) => {
            assert_eq!(media.file.url(), "https://s3.example.com/img.png");
            assert_eq!(notionkit::plain_text(&media.caption), "A chart");
        }
        other => panic!("expected image, got {:?}", other),
    }
}

#[test]
fn unknown_block_type_degrades_instead_of_failing_the_list() {
    let json = r#"{
        "object": "list",
        "results": [
            {"object": "block", "type": "paragraph", "paragraph": {"rich_text": []}},
            {"object": "block", "type": "ai_summary", "ai_summary": {"opaque": true}},
            {"object": "block", "type": "divider", "divider": {}}
        ],
        "has_more": false,
        "next_cursor": null
    }"#;
    let list: notionkit::ListResponse<Block> = serde_json::from_str(json).unwrap();
    assert_eq!(list.results.len(), 3);
    assert_eq!(list.results[1].block_type(), "ai_summary");
    assert!(matches!(
        list.results[1].data,
        BlockData::Unsupported { .. }
    ));
    assert_eq!(list.results[2].block_type(), "divider");
}

#[test]
fn code_block_keeps_language_and_caption() {
    let json = r#"{
        "object": "block",
        "type": "code",
        "code": {
            "rich_text": [{"type": "text", "text": {"content": "fn main() {}", "link": null}, "plain_text": "fn main() {}"}],
            "caption": [],
            "language": "rust"
        }
    }"#;
    let block: Block = serde_json::from_str(json).unwrap();
    match &block.data {
        BlockData::Code(code) => {
            assert_eq!(code.language, "rust");
            assert_eq!(notionkit::plain_text(&code.rich_text), "fn main() {}");
        }
        other => panic!("expected code, got {:?}", other),
    }
}
