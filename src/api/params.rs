// src/api/params.rs
//! Outbound parameter structs, one per write-shaped operation.
//!
//! Each struct is validated before it is encoded; a request that would
//! be malformed is rejected locally with `Error::Validation` instead of
//! ever reaching the wire. The custom `Serialize` impls produce the
//! request envelopes (parent object, title-vs-properties map) the API
//! expects.

use crate::error::{Error, Result};
use crate::model::{
    Block, DatabasePropertyConfig, FileObject, Icon, PageProperty, PageTitle, RichText,
};
use crate::types::PageId;
use indexmap::IndexMap;
use serde::ser::Error as SerError;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// The two parent kinds a page can be created under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentType {
    Page,
    Database,
}

/// Parameters for creating a page.
///
/// Exactly one property representation must be supplied, consistent
/// with the parent type: a title for page parents, the named property
/// map for database parents.
#[derive(Debug, Clone, Default)]
pub struct CreatePageParams {
    pub parent_type: Option<ParentType>,
    pub parent_id: Option<String>,
    pub title: Option<Vec<RichText>>,
    pub properties: Option<IndexMap<String, PageProperty>>,
    pub children: Vec<Block>,
    pub icon: Option<Icon>,
    pub cover: Option<FileObject>,
}

impl CreatePageParams {
    pub fn validate(&self) -> Result<()> {
        let parent_type = self
            .parent_type
            .ok_or_else(|| Error::Validation("parent type is required".to_string()))?;
        if self.parent_id.as_deref().map_or(true, str::is_empty) {
            return Err(Error::Validation("parent ID is required".to_string()));
        }
        match parent_type {
            ParentType::Page => {
                if self.title.is_none() {
                    return Err(Error::Validation(
                        "title is required when parent type is page".to_string(),
                    ));
                }
                if self.properties.is_some() {
                    return Err(Error::Validation(
                        "database page properties cannot be set when parent type is page"
                            .to_string(),
                    ));
                }
            }
            ParentType::Database => {
                if self.properties.is_none() {
                    return Err(Error::Validation(
                        "database page properties are required when parent type is database"
                            .to_string(),
                    ));
                }
                if self.title.is_some() {
                    return Err(Error::Validation(
                        "title cannot be set when parent type is database".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Serialize for CreatePageParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = Map::new();

        let parent_key = match self.parent_type {
            Some(ParentType::Page) => "page_id",
            Some(ParentType::Database) => "database_id",
            None => return Err(S::Error::custom("params not validated: missing parent type")),
        };
        let parent_id = self
            .parent_id
            .as_deref()
            .ok_or_else(|| S::Error::custom("params not validated: missing parent ID"))?;
        let mut parent = Map::new();
        parent.insert(parent_key.to_string(), Value::from(parent_id));
        map.insert("parent".to_string(), Value::Object(parent));

        let properties = if let Some(properties) = &self.properties {
            to_value(properties)?
        } else {
            to_value(&PageTitle {
                title: self.title.clone().unwrap_or_default(),
            })?
        };
        map.insert("properties".to_string(), properties);

        if !self.children.is_empty() {
            map.insert("children".to_string(), to_value(&self.children)?);
        }
        if let Some(icon) = &self.icon {
            map.insert("icon".to_string(), to_value(icon)?);
        }
        if let Some(cover) = &self.cover {
            map.insert("cover".to_string(), to_value(cover)?);
        }

        Value::Object(map).serialize(serializer)
    }
}

/// Parameters for updating a page. At least one field must be set.
#[derive(Debug, Clone, Default)]
pub struct UpdatePageParams {
    pub properties: Option<IndexMap<String, PageProperty>>,
    pub title: Option<Vec<RichText>>,
    pub icon: Option<Icon>,
    pub cover: Option<FileObject>,
    pub archived: Option<bool>,
}

impl UpdatePageParams {
    pub fn validate(&self) -> Result<()> {
        if self.properties.is_none()
            && self.title.is_none()
            && self.icon.is_none()
            && self.cover.is_none()
            && self.archived.is_none()
        {
            return Err(Error::Validation(
                "at least one of properties, title, icon, cover, or archived is required"
                    .to_string(),
            ));
        }
        if self.properties.is_some() && self.title.is_some() {
            return Err(Error::Validation(
                "properties and title cannot both be set".to_string(),
            ));
        }
        Ok(())
    }
}

impl Serialize for UpdatePageParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = Map::new();
        if let Some(properties) = &self.properties {
            map.insert("properties".to_string(), to_value(properties)?);
        } else if let Some(title) = &self.title {
            map.insert(
                "properties".to_string(),
                to_value(&PageTitle {
                    title: title.clone(),
                })?,
            );
        }
        if let Some(icon) = &self.icon {
            map.insert("icon".to_string(), to_value(icon)?);
        }
        if let Some(cover) = &self.cover {
            map.insert("cover".to_string(), to_value(cover)?);
        }
        if let Some(archived) = self.archived {
            map.insert("archived".to_string(), Value::from(archived));
        }
        Value::Object(map).serialize(serializer)
    }
}

/// Parameters for creating a database under a page.
#[derive(Debug, Clone, Default)]
pub struct CreateDatabaseParams {
    pub parent_page_id: Option<PageId>,
    pub title: Vec<RichText>,
    pub properties: Option<IndexMap<String, DatabasePropertyConfig>>,
    pub icon: Option<Icon>,
    pub cover: Option<FileObject>,
}

impl CreateDatabaseParams {
    pub fn validate(&self) -> Result<()> {
        if self.parent_page_id.is_none() {
            return Err(Error::Validation("parent page ID is required".to_string()));
        }
        if self.properties.is_none() {
            return Err(Error::Validation(
                "database properties are required".to_string(),
            ));
        }
        Ok(())
    }
}

impl Serialize for CreateDatabaseParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = Map::new();

        let page_id = self
            .parent_page_id
            .as_ref()
            .ok_or_else(|| S::Error::custom("params not validated: missing parent page ID"))?;
        let mut parent = Map::new();
        parent.insert("type".to_string(), Value::from("page_id"));
        parent.insert("page_id".to_string(), Value::from(page_id.to_hyphenated()));
        map.insert("parent".to_string(), Value::Object(parent));

        map.insert("title".to_string(), to_value(&self.title)?);
        if let Some(properties) = &self.properties {
            map.insert("properties".to_string(), to_value(properties)?);
        }
        if let Some(icon) = &self.icon {
            map.insert("icon".to_string(), to_value(icon)?);
        }
        if let Some(cover) = &self.cover {
            map.insert("cover".to_string(), to_value(cover)?);
        }
        Value::Object(map).serialize(serializer)
    }
}

/// Parameters for updating a database's title or schema. A `None`
/// entry in `properties` removes that column.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDatabaseParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Vec<RichText>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Option<DatabasePropertyConfig>>>,
}

impl UpdateDatabaseParams {
    pub fn validate(&self) -> Result<()> {
        if self.title.is_none() && self.properties.is_none() {
            return Err(Error::Validation(
                "at least one of title or properties is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// A database query: optional filter tree, sort order, and pagination.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DatabaseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<DatabaseQueryFilter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<DatabaseQuerySort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// A filter node: either one property condition, or an `and`/`or`
/// compound of nested filters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DatabaseQueryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TextCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rich_text: Option<TextCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<TextCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<TextCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<TextCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<NumberCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkbox: Option<CheckboxCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<SelectCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_select: Option<MultiSelectCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SelectCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateCondition>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub and: Vec<DatabaseQueryFilter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub or: Vec<DatabaseQueryFilter>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TextCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub does_not_equal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub does_not_contain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_with: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_with: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_empty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_not_empty: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NumberCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equals: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub does_not_equal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greater_than: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub less_than: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greater_than_or_equal_to: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub less_than_or_equal_to: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_empty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_not_empty: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckboxCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equals: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub does_not_equal: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SelectCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub does_not_equal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_empty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_not_empty: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MultiSelectCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub does_not_contain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_empty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_not_empty: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DateCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_or_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_or_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub past_week: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_empty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_not_empty: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatabaseQuerySort {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<SortTimestamp>,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortTimestamp {
    CreatedTime,
    LastEditedTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Parameters for appending children to a block.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppendBlockChildrenParams {
    pub children: Vec<Block>,
}

impl AppendBlockChildrenParams {
    pub fn validate(&self) -> Result<()> {
        if self.children.is_empty() {
            return Err(Error::Validation("children are required".to_string()));
        }
        Ok(())
    }
}

/// Parameters for creating a comment: either a new discussion on a
/// page, or a reply within an existing discussion. Exactly one of the
/// two targets must be set.
#[derive(Debug, Clone, Default)]
pub struct CreateCommentParams {
    pub parent_page_id: Option<PageId>,
    pub discussion_id: Option<String>,
    pub rich_text: Vec<RichText>,
}

impl CreateCommentParams {
    pub fn validate(&self) -> Result<()> {
        match (&self.parent_page_id, &self.discussion_id) {
            (None, None) => {
                return Err(Error::Validation(
                    "either parent page ID or discussion ID is required".to_string(),
                ))
            }
            (Some(_), Some(_)) => {
                return Err(Error::Validation(
                    "parent page ID and discussion ID cannot both be set".to_string(),
                ))
            }
            _ => {}
        }
        if self.rich_text.is_empty() {
            return Err(Error::Validation("rich text is required".to_string()));
        }
        Ok(())
    }
}

impl Serialize for CreateCommentParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = Map::new();
        if let Some(page_id) = &self.parent_page_id {
            let mut parent = Map::new();
            parent.insert("page_id".to_string(), Value::from(page_id.to_hyphenated()));
            map.insert("parent".to_string(), Value::Object(parent));
        }
        if let Some(discussion_id) = &self.discussion_id {
            map.insert(
                "discussion_id".to_string(),
                Value::from(discussion_id.as_str()),
            );
        }
        map.insert("rich_text".to_string(), to_value(&self.rich_text)?);
        Value::Object(map).serialize(serializer)
    }
}

/// Parameters for the search endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SearchSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<SearchFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchSort {
    pub direction: SortDirection,
    pub timestamp: SearchSortTimestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchSortTimestamp {
    LastEditedTime,
}

/// Restricts search results to one object kind.
#[derive(Debug, Clone, Serialize)]
pub struct SearchFilter {
    pub property: SearchFilterProperty,
    pub value: SearchFilterValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchFilterProperty {
    Object,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchFilterValue {
    Page,
    Database,
}

/// Cursor/page-size query parameters for GET list endpoints.
#[derive(Debug, Clone, Default)]
pub struct PaginationQuery {
    pub start_cursor: Option<String>,
    pub page_size: Option<u32>,
}

fn to_value<T: Serialize, E: SerError>(value: &T) -> Result<Value, E> {
    serde_json::to_value(value).map_err(E::custom)
}
