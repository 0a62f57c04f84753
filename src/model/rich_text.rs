use super::property_value::DateValue;
use super::user::PartialUser;
use crate::types::{Color, DatabaseId, PageId};
use serde::{Deserialize, Serialize};

/// One run of rich text with formatting annotations.
///
/// `variant` carries the content — text, mention, or equation — and
/// `plain_text` is the server's fallback rendering for any variant.
/// Outbound runs constructed by callers leave `plain_text` unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
    #[serde(flatten)]
    pub variant: RichTextVariant,
}

/// The kind of rich text content. The `type` tag on the wire selects
/// the variant; an unrecognized tag is a decode error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextVariant {
    Text { text: Text },
    Mention { mention: Mention },
    Equation { equation: Equation },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equation {
    pub expression: String,
}

/// Style annotations shared by every rich text variant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default)]
    pub color: Color,
}

/// An inline mention, nested one tag level below the rich text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mention {
    User { user: PartialUser },
    Page { page: PageRef },
    Database { database: DatabaseRef },
    Date { date: DateValue },
    LinkPreview { link_preview: LinkPreviewRef },
    TemplateMention { template_mention: TemplateMention },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRef {
    pub id: PageId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseRef {
    pub id: DatabaseId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkPreviewRef {
    pub url: String,
}

/// Mentions inside template blocks, resolved when the template runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TemplateMention {
    TemplateMentionDate { template_mention_date: String },
    TemplateMentionUser { template_mention_user: String },
}

impl RichText {
    /// A plain text run — the most common variant callers construct.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            plain_text: None,
            href: None,
            annotations: None,
            variant: RichTextVariant::Text {
                text: Text {
                    content: content.into(),
                    link: None,
                },
            },
        }
    }

    /// An equation run.
    pub fn equation(expression: impl Into<String>) -> Self {
        Self {
            plain_text: None,
            href: None,
            annotations: None,
            variant: RichTextVariant::Equation {
                equation: Equation {
                    expression: expression.into(),
                },
            },
        }
    }

    /// The run's textual content: the server-provided `plain_text` when
    /// present, otherwise the text content for locally built runs.
    pub fn as_plain_text(&self) -> &str {
        if let Some(plain) = &self.plain_text {
            return plain;
        }
        match &self.variant {
            RichTextVariant::Text { text } => &text.content,
            RichTextVariant::Equation { equation } => &equation.expression,
            RichTextVariant::Mention { .. } => "",
        }
    }
}

/// Concatenates the plain text of a run sequence, e.g. a title.
pub fn plain_text(runs: &[RichText]) -> String {
    runs.iter().map(RichText::as_plain_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_run_decode() {
        let json = r#"{
            "type": "text",
            "text": {"content": "hello", "link": {"url": "https://example.com"}},
            "annotations": {"bold": true, "italic": false, "strikethrough": false, "underline": false, "code": false, "color": "default"},
            "plain_text": "hello",
            "href": "https://example.com"
        }"#;
        let run: RichText = serde_json::from_str(json).unwrap();
        assert_eq!(run.as_plain_text(), "hello");
        match &run.variant {
            RichTextVariant::Text { text } => {
                assert_eq!(text.content, "hello");
                assert_eq!(text.link.as_ref().unwrap().url, "https://example.com");
            }
            other => panic!("expected text variant, got {:?}", other),
        }
        assert!(run.annotations.unwrap().bold);
    }

    #[test]
    fn test_mention_decode_nested_discriminant() {
        let json = r#"{
            "type": "mention",
            "mention": {"type": "user", "user": {"id": "8f3e9c1a-1111-4222-8333-944455566677", "name": "Jane"}},
            "plain_text": "@Jane"
        }"#;
        let run: RichText = serde_json::from_str(json).unwrap();
        match &run.variant {
            RichTextVariant::Mention {
                mention: Mention::User { user },
            } => assert_eq!(user.name.as_deref(), Some("Jane")),
            other => panic!("expected user mention, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_discriminant_rejected() {
        let json = r#"{"type": "hologram", "hologram": {}}"#;
        assert!(serde_json::from_str::<RichText>(json).is_err());
    }

    #[test]
    fn test_outbound_text_sets_tag() {
        let run = RichText::text("hi");
        let value = serde_json::to_value(&run).unwrap();
        assert_eq!(value["type"], "text");
        assert_eq!(value["text"]["content"], "hi");
        assert!(value.get("plain_text").is_none());
    }

    #[test]
    fn test_template_mention_round_trip() {
        let json = r#"{
            "type": "mention",
            "mention": {"type": "template_mention", "template_mention": {"type": "template_mention_date", "template_mention_date": "today"}}
        }"#;
        let run: RichText = serde_json::from_str(json).unwrap();
        let encoded = serde_json::to_value(&run).unwrap();
        assert_eq!(
            encoded["mention"]["template_mention"]["template_mention_date"],
            "today"
        );
    }
}
