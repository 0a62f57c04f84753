use super::rich_text::RichText;
use super::user::PartialUser;
use super::Parent;
use crate::types::CommentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment in a page or block discussion thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub parent: Parent,
    pub discussion_id: String,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    pub created_by: PartialUser,
    pub rich_text: Vec<RichText>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::rich_text::plain_text;

    #[test]
    fn test_comment_decode() {
        let json = r#"{
            "object": "comment",
            "id": "7a793800-3e55-4d5e-8009-2261de026179",
            "parent": {"type": "page_id", "page_id": "5c6a2821-6bb1-4a7e-b6e1-c50111515c3d"},
            "discussion_id": "f1407351-36f5-4c49-90dc-517031d4692e",
            "created_time": "2022-07-15T16:52:00.000Z",
            "last_edited_time": "2022-07-15T19:16:00.000Z",
            "created_by": {"object": "user", "id": "e450a39e-9051-4d36-bc4e-8581611fc592"},
            "rich_text": [{
                "type": "text",
                "text": {"content": "Hello world", "link": null},
                "plain_text": "Hello world"
            }]
        }"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(plain_text(&comment.rich_text), "Hello world");
        assert!(matches!(comment.parent, Parent::PageId { .. }));
    }
}
