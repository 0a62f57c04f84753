use super::blocks::*;
use crate::types::BlockId;
use chrono::{DateTime, Utc};
use serde::de::Error as DeError;
use serde::ser::Error as SerError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A content block: the common envelope plus exactly one typed payload.
///
/// Blocks decoded from responses carry an id and timestamps; blocks
/// built locally for append requests carry only the payload. The codec
/// is hand-written because the payload key is the value of the `type`
/// tag, and because unknown tags must degrade to
/// [`BlockData::Unsupported`] instead of failing the whole parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: Option<BlockId>,
    pub created_time: Option<DateTime<Utc>>,
    pub last_edited_time: Option<DateTime<Utc>>,
    pub has_children: bool,
    pub archived: bool,
    pub data: BlockData,
}

impl Block {
    /// A fresh block carrying only a payload, ready for an append call.
    pub fn new(data: BlockData) -> Self {
        Self {
            id: None,
            created_time: None,
            last_edited_time: None,
            has_children: false,
            archived: false,
            data,
        }
    }

    /// The wire `type` tag of the payload.
    pub fn block_type(&self) -> &str {
        self.data.block_type()
    }

    /// Nested child blocks, empty for payloads that cannot nest.
    pub fn children(&self) -> &[Block] {
        self.data.children()
    }
}

impl From<BlockData> for Block {
    fn from(data: BlockData) -> Self {
        Block::new(data)
    }
}

/// All block payload variants, keyed by the wire `type` tag.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockData {
    Paragraph(ParagraphBlock),
    Heading1(HeadingBlock),
    Heading2(HeadingBlock),
    Heading3(HeadingBlock),
    BulletedListItem(BulletedListItemBlock),
    NumberedListItem(NumberedListItemBlock),
    ToDo(ToDoBlock),
    Toggle(ToggleBlock),
    Quote(QuoteBlock),
    Callout(CalloutBlock),
    Code(CodeBlock),
    Equation(EquationBlock),
    Embed(EmbedBlock),
    Bookmark(BookmarkBlock),
    Image(MediaBlock),
    Video(MediaBlock),
    File(MediaBlock),
    Pdf(MediaBlock),
    ChildPage(ChildPageBlock),
    ChildDatabase(ChildDatabaseBlock),
    LinkPreview(LinkPreviewBlock),
    LinkToPage(LinkToPageBlock),
    Table(TableBlock),
    TableRow(TableRowBlock),
    ColumnList(ColumnListBlock),
    Column(ColumnBlock),
    Synced(SyncedBlock),
    Template(TemplateBlock),
    Divider(DividerBlock),
    Breadcrumb(BreadcrumbBlock),
    TableOfContents(TableOfContentsBlock),
    /// A block type this client doesn't recognize yet. The raw tag is
    /// preserved so callers can see what the server sent.
    Unsupported { block_type: String },
}

impl BlockData {
    /// The wire `type` tag for this payload.
    pub fn block_type(&self) -> &str {
        match self {
            BlockData::Paragraph(_) => "paragraph",
            BlockData::Heading1(_) => "heading_1",
            BlockData::Heading2(_) => "heading_2",
            BlockData::Heading3(_) => "heading_3",
            BlockData::BulletedListItem(_) => "bulleted_list_item",
            BlockData::NumberedListItem(_) => "numbered_list_item",
            BlockData::ToDo(_) => "to_do",
            BlockData::Toggle(_) => "toggle",
            BlockData::Quote(_) => "quote",
            BlockData::Callout(_) => "callout",
            BlockData::Code(_) => "code",
            BlockData::Equation(_) => "equation",
            BlockData::Embed(_) => "embed",
            BlockData::Bookmark(_) => "bookmark",
            BlockData::Image(_) => "image",
            BlockData::Video(_) => "video",
            BlockData::File(_) => "file",
            BlockData::Pdf(_) => "pdf",
            BlockData::ChildPage(_) => "child_page",
            BlockData::ChildDatabase(_) => "child_database",
            BlockData::LinkPreview(_) => "link_preview",
            BlockData::LinkToPage(_) => "link_to_page",
            BlockData::Table(_) => "table",
            BlockData::TableRow(_) => "table_row",
            BlockData::ColumnList(_) => "column_list",
            BlockData::Column(_) => "column",
            BlockData::Synced(_) => "synced_block",
            BlockData::Template(_) => "template",
            BlockData::Divider(_) => "divider",
            BlockData::Breadcrumb(_) => "breadcrumb",
            BlockData::TableOfContents(_) => "table_of_contents",
            BlockData::Unsupported { block_type } => block_type,
        }
    }

    /// Nested child blocks for payloads that can nest.
    pub fn children(&self) -> &[Block] {
        match self {
            BlockData::Paragraph(b) => &b.children,
            BlockData::BulletedListItem(b) => &b.children,
            BlockData::NumberedListItem(b) => &b.children,
            BlockData::ToDo(b) => &b.children,
            BlockData::Toggle(b) => &b.children,
            BlockData::Quote(b) => &b.children,
            BlockData::Callout(b) => &b.children,
            BlockData::Table(b) => &b.children,
            BlockData::ColumnList(b) => &b.children,
            BlockData::Column(b) => &b.children,
            BlockData::Synced(b) => &b.children,
            BlockData::Template(b) => &b.children,
            _ => &[],
        }
    }

    fn decode(tag: &str, payload: Value) -> Result<Self, serde_json::Error> {
        Ok(match tag {
            "paragraph" => BlockData::Paragraph(serde_json::from_value(payload)?),
            "heading_1" => BlockData::Heading1(serde_json::from_value(payload)?),
            "heading_2" => BlockData::Heading2(serde_json::from_value(payload)?),
            "heading_3" => BlockData::Heading3(serde_json::from_value(payload)?),
            "bulleted_list_item" => BlockData::BulletedListItem(serde_json::from_value(payload)?),
            "numbered_list_item" => BlockData::NumberedListItem(serde_json::from_value(payload)?),
            "to_do" => BlockData::ToDo(serde_json::from_value(payload)?),
            "toggle" => BlockData::Toggle(serde_json::from_value(payload)?),
            "quote" => BlockData::Quote(serde_json::from_value(payload)?),
            "callout" => BlockData::Callout(serde_json::from_value(payload)?),
            "code" => BlockData::Code(serde_json::from_value(payload)?),
            "equation" => BlockData::Equation(serde_json::from_value(payload)?),
            "embed" => BlockData::Embed(serde_json::from_value(payload)?),
            "bookmark" => BlockData::Bookmark(serde_json::from_value(payload)?),
            "image" => BlockData::Image(serde_json::from_value(payload)?),
            "video" => BlockData::Video(serde_json::from_value(payload)?),
            "file" => BlockData::File(serde_json::from_value(payload)?),
            "pdf" => BlockData::Pdf(serde_json::from_value(payload)?),
            "child_page" => BlockData::ChildPage(serde_json::from_value(payload)?),
            "child_database" => BlockData::ChildDatabase(serde_json::from_value(payload)?),
            "link_preview" => BlockData::LinkPreview(serde_json::from_value(payload)?),
            "link_to_page" => BlockData::LinkToPage(serde_json::from_value(payload)?),
            "table" => BlockData::Table(serde_json::from_value(payload)?),
            "table_row" => BlockData::TableRow(serde_json::from_value(payload)?),
            "column_list" => BlockData::ColumnList(serde_json::from_value(payload)?),
            "column" => BlockData::Column(serde_json::from_value(payload)?),
            "synced_block" => BlockData::Synced(serde_json::from_value(payload)?),
            "template" => BlockData::Template(serde_json::from_value(payload)?),
            "divider" => BlockData::Divider(serde_json::from_value(payload)?),
            "breadcrumb" => BlockData::Breadcrumb(serde_json::from_value(payload)?),
            "table_of_contents" => BlockData::TableOfContents(serde_json::from_value(payload)?),
            other => BlockData::Unsupported {
                block_type: other.to_string(),
            },
        })
    }

    fn encode_payload(&self) -> Result<Option<Value>, serde_json::Error> {
        Ok(Some(match self {
            BlockData::Paragraph(b) => serde_json::to_value(b)?,
            BlockData::Heading1(b) => serde_json::to_value(b)?,
            BlockData::Heading2(b) => serde_json::to_value(b)?,
            BlockData::Heading3(b) => serde_json::to_value(b)?,
            BlockData::BulletedListItem(b) => serde_json::to_value(b)?,
            BlockData::NumberedListItem(b) => serde_json::to_value(b)?,
            BlockData::ToDo(b) => serde_json::to_value(b)?,
            BlockData::Toggle(b) => serde_json::to_value(b)?,
            BlockData::Quote(b) => serde_json::to_value(b)?,
            BlockData::Callout(b) => serde_json::to_value(b)?,
            BlockData::Code(b) => serde_json::to_value(b)?,
            BlockData::Equation(b) => serde_json::to_value(b)?,
            BlockData::Embed(b) => serde_json::to_value(b)?,
            BlockData::Bookmark(b) => serde_json::to_value(b)?,
            BlockData::Image(b) => serde_json::to_value(b)?,
            BlockData::Video(b) => serde_json::to_value(b)?,
            BlockData::File(b) => serde_json::to_value(b)?,
            BlockData::Pdf(b) => serde_json::to_value(b)?,
            BlockData::ChildPage(b) => serde_json::to_value(b)?,
            BlockData::ChildDatabase(b) => serde_json::to_value(b)?,
            BlockData::LinkPreview(b) => serde_json::to_value(b)?,
            BlockData::LinkToPage(b) => serde_json::to_value(b)?,
            BlockData::Table(b) => serde_json::to_value(b)?,
            BlockData::TableRow(b) => serde_json::to_value(b)?,
            BlockData::ColumnList(b) => serde_json::to_value(b)?,
            BlockData::Column(b) => serde_json::to_value(b)?,
            BlockData::Synced(b) => serde_json::to_value(b)?,
            BlockData::Template(b) => serde_json::to_value(b)?,
            BlockData::Divider(b) => serde_json::to_value(b)?,
            BlockData::Breadcrumb(b) => serde_json::to_value(b)?,
            BlockData::TableOfContents(b) => serde_json::to_value(b)?,
            // No payload is invented for tags this client doesn't know.
            BlockData::Unsupported { .. } => return Ok(None),
        }))
    }
}

/// Intermediate shape for the two-stage block decode: common envelope
/// fields plus the raw tag and whatever keys remain.
#[derive(Deserialize)]
struct RawBlock {
    #[serde(default)]
    id: Option<BlockId>,
    #[serde(default)]
    created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    last_edited_time: Option<DateTime<Utc>>,
    #[serde(default)]
    has_children: bool,
    #[serde(default)]
    archived: bool,
    #[serde(rename = "type")]
    block_type: String,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let mut raw = RawBlock::deserialize(deserializer)?;
        let payload = raw
            .rest
            .remove(&raw.block_type)
            .unwrap_or(Value::Object(Map::new()));
        let data = BlockData::decode(&raw.block_type, payload).map_err(D::Error::custom)?;
        Ok(Block {
            id: raw.id,
            created_time: raw.created_time,
            last_edited_time: raw.last_edited_time,
            has_children: raw.has_children,
            archived: raw.archived,
            data,
        })
    }
}

impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = Map::new();
        // Normalizing write-time invariant: the object kind is always
        // "block" regardless of what the value was built from.
        map.insert("object".to_string(), Value::from("block"));
        if let Some(id) = &self.id {
            map.insert("id".to_string(), Value::from(id.as_str()));
        }
        if let Some(t) = &self.created_time {
            map.insert("created_time".to_string(), Value::from(t.to_rfc3339()));
        }
        if let Some(t) = &self.last_edited_time {
            map.insert("last_edited_time".to_string(), Value::from(t.to_rfc3339()));
        }
        if self.has_children {
            map.insert("has_children".to_string(), Value::from(true));
        }
        if self.archived {
            map.insert("archived".to_string(), Value::from(true));
        }
        let tag = self.data.block_type().to_string();
        map.insert("type".to_string(), Value::from(tag.clone()));
        if let Some(payload) = self.data.encode_payload().map_err(S::Error::custom)? {
            map.insert(tag, payload);
        }
        Value::Object(map).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_type_decodes_to_unsupported() {
        let json = r#"{
            "object": "block",
            "id": "048e165e-352d-4119-8128-e46c3527d95c",
            "type": "ai_block",
            "ai_block": {"some": "payload"},
            "has_children": false
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.block_type(), "ai_block");
        assert!(matches!(block.data, BlockData::Unsupported { .. }));

        let encoded = serde_json::to_value(&block).unwrap();
        assert_eq!(encoded["type"], "ai_block");
        assert!(encoded.get("ai_block").is_none());
    }

    #[test]
    fn test_serialize_forces_object_block() {
        let block = Block::new(BlockData::Divider(DividerBlock::default()));
        let encoded = serde_json::to_value(&block).unwrap();
        assert_eq!(encoded["object"], "block");
        assert_eq!(encoded["type"], "divider");
        assert_eq!(encoded["divider"], serde_json::json!({}));
    }

    #[test]
    fn test_children_accessor() {
        let inner = Block::new(BlockData::Paragraph(ParagraphBlock {
            rich_text: vec![crate::model::RichText::text("nested")],
            ..Default::default()
        }));
        let toggle = Block::new(BlockData::Toggle(ToggleBlock {
            rich_text: vec![crate::model::RichText::text("outer")],
            children: vec![inner],
            ..Default::default()
        }));
        assert_eq!(toggle.children().len(), 1);
        assert_eq!(toggle.children()[0].block_type(), "paragraph");

        let divider = Block::new(BlockData::Divider(DividerBlock::default()));
        assert!(divider.children().is_empty());
    }
}
