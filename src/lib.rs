// src/lib.rs
//! notionkit — a typed client for the Notion API.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `Error`, `ErrorCode`, `Result`
//! - **Domain model** — `Page`, `Database`, `Block`, `RichText`, etc.
//! - **Domain types** — `PageId`, `BlockId`, `DateOrDateTime`, `Color`, etc.
//! - **API client** — `Client`, request params, response envelopes
//!
//! # Example
//!
//! ```no_run
//! use notionkit::{Client, PageId};
//!
//! # async fn run() -> notionkit::Result<()> {
//! let client = Client::new(std::env::var("NOTION_API_KEY").unwrap_or_default());
//! let id: PageId = "b0668f48-8d66-4733-9bdb-2f82215707f7".parse()?;
//! let page = client.find_page_by_id(&id).await?;
//! if let Some(title) = page.properties.title() {
//!     println!("{}", notionkit::plain_text(title));
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod model;
pub mod types;

// --- Error Handling ---
pub use crate::error::{Error, ErrorCode, Result};

// --- Domain Model ---
pub use crate::model::{
    Block, BlockData, Comment, Database, DatabaseProperty, DatabasePropertyConfig, Page,
    PageProperties, PageProperty, PageTitle, Parent, PropertyValue, SearchResult, User,
};

// --- Rich Text ---
pub use crate::model::rich_text::{
    plain_text, Annotations, Equation, Link, Mention, RichText, RichTextVariant, Text,
};

// --- Block Payloads ---
pub use crate::model::blocks::{FileObject, Icon};

// --- Domain Types ---
pub use crate::types::{
    BlockId, Color, CommentId, DatabaseId, DateOrDateTime, PageId, ParseError, UserId,
};

// --- API Client ---
pub use crate::api::{
    AppendBlockChildrenParams, Client, CreateCommentParams, CreateDatabaseParams,
    CreatePageParams, DatabaseQuery, ListResponse, PaginationQuery, ParentType, SearchParams,
    UpdateDatabaseParams, UpdatePageParams,
};
