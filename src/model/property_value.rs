use super::blocks::FileObject;
use super::properties::SelectOption;
use super::rich_text::RichText;
use super::user::User;
use crate::types::{DateOrDateTime, PageId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A date property payload: a start, an optional end for ranges, and
/// an optional named time zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: DateOrDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateOrDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl DateValue {
    pub fn start(start: DateOrDateTime) -> Self {
        Self {
            start,
            end: None,
            time_zone: None,
        }
    }
}

/// One named property of a database-parented page: the property id
/// plus the type-selected value payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub value: PropertyValue,
}

impl PageProperty {
    /// A bare value without a property id, for create/update requests.
    pub fn value(value: PropertyValue) -> Self {
        Self { id: None, value }
    }
}

/// Value-level property data. Shares the discriminant vocabulary of
/// the schema-level configuration but holds data: the chosen option,
/// the actual number, the computed formula result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        title: Vec<RichText>,
    },
    RichText {
        rich_text: Vec<RichText>,
    },
    Number {
        number: Option<f64>,
    },
    Select {
        select: Option<SelectOption>,
    },
    MultiSelect {
        multi_select: Vec<SelectOption>,
    },
    Status {
        status: Option<SelectOption>,
    },
    Date {
        date: Option<DateValue>,
    },
    People {
        people: Vec<User>,
    },
    Files {
        files: Vec<FileValue>,
    },
    Checkbox {
        checkbox: bool,
    },
    Url {
        url: Option<String>,
    },
    Email {
        email: Option<String>,
    },
    PhoneNumber {
        phone_number: Option<String>,
    },
    Formula {
        formula: FormulaResult,
    },
    Relation {
        relation: Vec<RelationRef>,
    },
    Rollup {
        rollup: RollupResult,
    },
    CreatedTime {
        created_time: DateTime<Utc>,
    },
    CreatedBy {
        created_by: User,
    },
    LastEditedTime {
        last_edited_time: DateTime<Utc>,
    },
    LastEditedBy {
        last_edited_by: User,
    },
}

impl PropertyValue {
    /// The wire `type` tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Title { .. } => "title",
            Self::RichText { .. } => "rich_text",
            Self::Number { .. } => "number",
            Self::Select { .. } => "select",
            Self::MultiSelect { .. } => "multi_select",
            Self::Status { .. } => "status",
            Self::Date { .. } => "date",
            Self::People { .. } => "people",
            Self::Files { .. } => "files",
            Self::Checkbox { .. } => "checkbox",
            Self::Url { .. } => "url",
            Self::Email { .. } => "email",
            Self::PhoneNumber { .. } => "phone_number",
            Self::Formula { .. } => "formula",
            Self::Relation { .. } => "relation",
            Self::Rollup { .. } => "rollup",
            Self::CreatedTime { .. } => "created_time",
            Self::CreatedBy { .. } => "created_by",
            Self::LastEditedTime { .. } => "last_edited_time",
            Self::LastEditedBy { .. } => "last_edited_by",
        }
    }

    /// The checkbox state, when this is a checkbox value.
    pub fn as_checkbox(&self) -> Option<bool> {
        match self {
            Self::Checkbox { checkbox } => Some(*checkbox),
            _ => None,
        }
    }

    /// The number, when this is a non-empty number value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number { number } => *number,
            _ => None,
        }
    }

    /// The title runs, when this is a title value.
    pub fn as_title(&self) -> Option<&[RichText]> {
        match self {
            Self::Title { title } => Some(title),
            _ => None,
        }
    }

    /// The rich text runs, when this is a rich text value.
    pub fn as_rich_text(&self) -> Option<&[RichText]> {
        match self {
            Self::RichText { rich_text } => Some(rich_text),
            _ => None,
        }
    }

    /// The chosen option of a select or status value.
    pub fn as_select(&self) -> Option<&SelectOption> {
        match self {
            Self::Select { select } => select.as_ref(),
            Self::Status { status } => status.as_ref(),
            _ => None,
        }
    }

    /// The date payload, when this is a non-empty date value.
    pub fn as_date(&self) -> Option<&DateValue> {
        match self {
            Self::Date { date } => date.as_ref(),
            _ => None,
        }
    }
}

/// A file attached through a `files` property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub file: FileObject,
}

/// A related page reference in a `relation` property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationRef {
    pub id: PageId,
}

/// The computed result of a formula column, one of four result kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormulaResult {
    String { string: Option<String> },
    Number { number: Option<f64> },
    Boolean { boolean: Option<bool> },
    Date { date: Option<DateValue> },
}

impl FormulaResult {
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String { string } => string.as_deref(),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number { number } => *number,
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean { boolean } => *boolean,
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateValue> {
        match self {
            Self::Date { date } => date.as_ref(),
            _ => None,
        }
    }
}

/// The computed result of a rollup column. Array rollups hold bare
/// tagged values, one per aggregated page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RollupResult {
    Number { number: Option<f64> },
    Date { date: Option<DateValue> },
    Array { array: Vec<PropertyValue> },
}

impl RollupResult {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number { number } => *number,
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[PropertyValue]> {
        match self {
            Self::Array { array } => Some(array),
            _ => None,
        }
    }
}
