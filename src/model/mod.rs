//! The Notion object model: envelopes for pages, databases, blocks,
//! users, and comments, plus the tagged-union payloads they carry.

mod block;
pub mod blocks;
mod comment;
pub mod properties;
mod property_value;
pub mod rich_text;
mod user;

pub use block::{Block, BlockData};
pub use blocks::*;
pub use comment::Comment;
pub use properties::{
    DatabaseProperty, DatabasePropertyConfig, EmptyObject, FormulaConfig, NumberConfig,
    NumberFormat, RelationConfig, RollupConfig, SelectConfig, SelectOption, StatusConfig,
    StatusGroup,
};
pub use property_value::{
    DateValue, FileValue, FormulaResult, PageProperty, PropertyValue, RelationRef, RollupResult,
};
pub use rich_text::{
    plain_text, Annotations, DatabaseRef, Equation, Link, LinkPreviewRef, Mention, PageRef,
    RichText, RichTextVariant, TemplateMention, Text,
};
pub use user::{Bot, BotOwner, PartialUser, Person, User, UserKind};

use crate::types::{BlockId, DatabaseId, PageId};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::de::Error as DeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reference to the object a resource lives under. Exactly one
/// identifying payload is populated, selected by the `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Parent {
    PageId { page_id: PageId },
    DatabaseId { database_id: DatabaseId },
    BlockId { block_id: BlockId },
    Workspace { workspace: bool },
}

impl Parent {
    pub fn page(page_id: PageId) -> Self {
        Parent::PageId { page_id }
    }

    pub fn database(database_id: DatabaseId) -> Self {
        Parent::DatabaseId { database_id }
    }

    pub fn block(block_id: BlockId) -> Self {
        Parent::BlockId { block_id }
    }

    pub fn workspace() -> Self {
        Parent::Workspace { workspace: true }
    }
}

/// A Notion page.
///
/// The shape of `properties` depends on the parent: database-parented
/// pages carry the named property-value map, pages under a page or the
/// workspace carry only a title container. Decoding is therefore
/// staged: the parent is extracted first and selects how the raw
/// properties blob is decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub id: PageId,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    pub parent: Parent,
    pub archived: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<FileObject>,
    pub properties: PageProperties,
}

/// The parent-dependent property container of a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PageProperties {
    /// Pages under a page or the workspace: a title and nothing else.
    Title(PageTitle),
    /// Database rows: the named property-value map, in server order.
    Database(IndexMap<String, PageProperty>),
}

impl PageProperties {
    /// The title runs, whichever container shape holds them.
    pub fn title(&self) -> Option<&[RichText]> {
        match self {
            PageProperties::Title(t) => Some(&t.title),
            PageProperties::Database(map) => {
                map.values().find_map(|prop| prop.value.as_title())
            }
        }
    }

    /// The named property map of a database row.
    pub fn database(&self) -> Option<&IndexMap<String, PageProperty>> {
        match self {
            PageProperties::Database(map) => Some(map),
            PageProperties::Title(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageTitle {
    #[serde(default)]
    pub title: Vec<RichText>,
}

#[derive(Deserialize)]
struct RawPage {
    id: PageId,
    created_time: DateTime<Utc>,
    last_edited_time: DateTime<Utc>,
    parent: Parent,
    #[serde(default)]
    archived: bool,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    icon: Option<Icon>,
    #[serde(default)]
    cover: Option<FileObject>,
    properties: Value,
}

impl<'de> Deserialize<'de> for Page {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawPage::deserialize(deserializer)?;
        // Second pass: the parent kind decides the properties shape.
        let properties = match &raw.parent {
            Parent::DatabaseId { .. } => PageProperties::Database(
                serde_json::from_value(raw.properties).map_err(D::Error::custom)?,
            ),
            Parent::PageId { .. } | Parent::Workspace { .. } => PageProperties::Title(
                serde_json::from_value(raw.properties).map_err(D::Error::custom)?,
            ),
            Parent::BlockId { .. } => {
                return Err(D::Error::custom("unrecognized page parent type \"block_id\""))
            }
        };
        Ok(Page {
            id: raw.id,
            created_time: raw.created_time,
            last_edited_time: raw.last_edited_time,
            parent: raw.parent,
            archived: raw.archived,
            url: raw.url,
            icon: raw.icon,
            cover: raw.cover,
            properties,
        })
    }
}

/// A Notion database: title plus the named schema map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub id: DatabaseId,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    #[serde(default)]
    pub title: Vec<RichText>,
    pub parent: Parent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<FileObject>,
    pub properties: IndexMap<String, DatabaseProperty>,
}

impl Database {
    /// The database title as plain text.
    pub fn title_text(&self) -> String {
        plain_text(&self.title)
    }
}

/// One element of a search response, discriminated at decode time by
/// the embedded `object` kind.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    Page(Page),
    Database(Database),
}

impl SearchResult {
    pub fn as_page(&self) -> Option<&Page> {
        match self {
            SearchResult::Page(page) => Some(page),
            _ => None,
        }
    }

    pub fn as_database(&self) -> Option<&Database> {
        match self {
            SearchResult::Database(db) => Some(db),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for SearchResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let object = value
            .get("object")
            .and_then(Value::as_str)
            .ok_or_else(|| D::Error::missing_field("object"))?
            .to_string();
        match object.as_str() {
            "page" => Ok(SearchResult::Page(
                serde_json::from_value(value).map_err(D::Error::custom)?,
            )),
            "database" => Ok(SearchResult::Database(
                serde_json::from_value(value).map_err(D::Error::custom)?,
            )),
            other => Err(D::Error::custom(format!(
                "unsupported search result object \"{}\"",
                other
            ))),
        }
    }
}
