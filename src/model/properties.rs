use crate::types::{Color, DatabaseId};
use serde::{Deserialize, Serialize};

/// One named column of a database schema: id, display name, and the
/// type-selected configuration payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub config: DatabasePropertyConfig,
}

impl DatabaseProperty {
    /// A bare configuration without id/name, for create/update schema
    /// requests where the column name is the map key.
    pub fn config(config: DatabasePropertyConfig) -> Self {
        Self {
            id: None,
            name: None,
            config,
        }
    }
}

/// Schema-level property configuration, tagged by the shared property
/// type vocabulary. Types without extra configuration still carry an
/// explicit empty-object payload, distinguishing "declared with this
/// type" from a missing field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DatabasePropertyConfig {
    Title { title: EmptyObject },
    RichText { rich_text: EmptyObject },
    Number { number: NumberConfig },
    Select { select: SelectConfig },
    MultiSelect { multi_select: SelectConfig },
    Status { status: StatusConfig },
    Date { date: EmptyObject },
    People { people: EmptyObject },
    Files { files: EmptyObject },
    Checkbox { checkbox: EmptyObject },
    Url { url: EmptyObject },
    Email { email: EmptyObject },
    PhoneNumber { phone_number: EmptyObject },
    Formula { formula: FormulaConfig },
    Relation { relation: RelationConfig },
    Rollup { rollup: RollupConfig },
    CreatedTime { created_time: EmptyObject },
    CreatedBy { created_by: EmptyObject },
    LastEditedTime { last_edited_time: EmptyObject },
    LastEditedBy { last_edited_by: EmptyObject },
}

impl DatabasePropertyConfig {
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

    /// Options of a select, multi-select, or status column.
    pub fn select_options(&self) -> Option<&[SelectOption]> {
        match self {
            Self::Select { select } => Some(&select.options),
            Self::MultiSelect { multi_select } => Some(&multi_select.options),
            Self::Status { status } => Some(&status.options),
            _ => None,
        }
    }

    /// Formula expression of a formula column.
    pub fn formula_expression(&self) -> Option<&str> {
        match self {
            Self::Formula { formula } => Some(&formula.expression),
            _ => None,
        }
    }
}

/// Marker payload for property types with no extra configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmptyObject {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberConfig {
    pub format: NumberFormat,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectConfig {
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatusConfig {
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<StatusGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub option_ids: Vec<String>,
}

/// An option of a select-like column. The id is server-assigned and
/// absent on options being created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl SelectOption {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaConfig {
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationConfig {
    pub database_id: DatabaseId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_property_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollupConfig {
    pub relation_property_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_property_id: Option<String>,
    pub rollup_property_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollup_property_id: Option<String>,
    pub function: String,
}

/// Number format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    Number,
    NumberWithCommas,
    Percent,
    Dollar,
    CanadianDollar,
    Euro,
    Pound,
    Yen,
    Ruble,
    Rupee,
    Won,
    Yuan,
    Real,
    Lira,
    Rupiah,
    Franc,
    HongKongDollar,
    NewZealandDollar,
    Krona,
    NorwegianKrone,
    MexicanPeso,
    Rand,
    NewTaiwanDollar,
    DanishKrone,
    Zloty,
    Baht,
    Forint,
    Koruna,
    Shekel,
    ChileanPeso,
    PhilippinePeso,
    Dirham,
    ColombianPeso,
    Riyal,
    Ringgit,
    Leu,
    ArgentinePeso,
    UruguayanPeso,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_marker_payload_decodes() {
        let json = r#"{"id": "Z%3BS%3F", "name": "Done", "type": "checkbox", "checkbox": {}}"#;
        let prop: DatabaseProperty = serde_json::from_str(json).unwrap();
        assert_eq!(prop.config.type_name(), "checkbox");
        assert!(matches!(
            prop.config,
            DatabasePropertyConfig::Checkbox { .. }
        ));
    }

    #[test]
    fn test_select_config_options() {
        let json = r#"{
            "id": "abc",
            "name": "Tag",
            "type": "select",
            "select": {"options": [
                {"id": "1", "name": "alpha", "color": "green"},
                {"id": "2", "name": "beta", "color": "red"}
            ]}
        }"#;
        let prop: DatabaseProperty = serde_json::from_str(json).unwrap();
        let options = prop.config.select_options().unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].name, "alpha");
        assert_eq!(prop.config.formula_expression(), None);
    }

    #[test]
    fn test_unknown_type_tag_rejected() {
        let json = r#"{"id": "x", "type": "telepathy", "telepathy": {}}"#;
        assert!(serde_json::from_str::<DatabaseProperty>(json).is_err());
    }

    #[test]
    fn test_number_format_wire_names() {
        let json = r#"{"id": "n", "type": "number", "number": {"format": "number_with_commas"}}"#;
        let prop: DatabaseProperty = serde_json::from_str(json).unwrap();
        match prop.config {
            DatabasePropertyConfig::Number { number } => {
                assert_eq!(number.format, NumberFormat::NumberWithCommas)
            }
            other => panic!("expected number config, got {:?}", other),
        }
    }
}
