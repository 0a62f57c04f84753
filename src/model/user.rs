use crate::types::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Notion user as returned by the users endpoints and `people`
/// property values. The `type` tag selects the person or bot payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(flatten)]
    pub kind: UserKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UserKind {
    Person { person: Person },
    Bot { bot: Bot },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Bot payload. The API returns an (often empty) object whose fields
/// depend on the token's capabilities; only the owner is modeled.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Bot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<BotOwner>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BotOwner {
    Workspace { workspace: bool },
    User { user: PartialUser },
}

/// A user reference without the person/bot tag, as embedded in mentions
/// and `created_by`/`last_edited_by` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialUser {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "User {}", self.id),
        }
    }
}

impl fmt::Display for PartialUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "User {}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_decode() {
        let json = r#"{
            "object": "user",
            "id": "d40e767c-d7af-4b18-a86d-55c61f1e39a4",
            "name": "Avocado Lovelace",
            "avatar_url": "https://example.com/avatar.png",
            "type": "person",
            "person": {"email": "avo@example.com"}
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        match &user.kind {
            UserKind::Person { person } => {
                assert_eq!(person.email.as_deref(), Some("avo@example.com"))
            }
            other => panic!("expected person, got {:?}", other),
        }
        assert_eq!(user.to_string(), "Avocado Lovelace");
    }

    #[test]
    fn test_bot_decode() {
        let json = r#"{
            "object": "user",
            "id": "9a3b5ae0-c6e6-482d-b0e1-ed315ee6dc57",
            "name": "Integration",
            "type": "bot",
            "bot": {"owner": {"type": "workspace", "workspace": true}}
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(matches!(user.kind, UserKind::Bot { .. }));
    }
}
