// src/api/client.rs
//! HTTP client for the Notion API.
//!
//! A thin wrapper around reqwest: it attaches authentication and
//! version headers, encodes validated params, and decodes responses
//! into the typed model. No retries and no automatic pagination;
//! callers resubmit cursors themselves.

use crate::api::params::{
    AppendBlockChildrenParams, CreateCommentParams, CreateDatabaseParams, CreatePageParams,
    DatabaseQuery, PaginationQuery, SearchParams, UpdateDatabaseParams, UpdatePageParams,
};
use crate::api::responses::{
    parse_api_error, BlockChildrenResponse, CommentsResponse, DatabaseQueryResponse,
    ListUsersResponse, SearchResponse,
};
use crate::error::Result;
use crate::model::{Block, Database, Page, User};
use crate::types::{BlockId, DatabaseId, PageId, UserId};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

const NOTION_VERSION: &str = "2022-06-28";
const API_BASE_URL: &str = "https://api.notion.com/v1/";
const USER_AGENT: &str = concat!("notionkit/", env!("CARGO_PKG_VERSION"));

/// A Notion API client bound to one integration token.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl Client {
    /// Creates a client with a default reqwest transport.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_http_client(api_key, reqwest::Client::new())
    }

    /// Creates a client on top of a caller-owned reqwest client, so
    /// transport concerns like proxies, timeouts, or middleware stay
    /// under the caller's control.
    pub fn with_http_client(api_key: impl Into<String>, http: reqwest::Client) -> Self {
        // The constant is a valid URL, so this cannot fail.
        let base_url = Url::parse(API_BASE_URL).unwrap_or_else(|_| unreachable!());
        Self {
            http,
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Overrides the API base URL. Intended for tests against a local
    /// mock server.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        log::debug!("{} {}", method, url);
        Ok(self
            .http
            .request(method, url)
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .header(reqwest::header::USER_AGENT, USER_AGENT))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(parse_api_error(status.as_u16(), &read_body(response).await?));
        }
        let body = read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn apply_pagination(request: RequestBuilder, query: &PaginationQuery) -> RequestBuilder {
        let mut request = request;
        if let Some(cursor) = &query.start_cursor {
            request = request.query(&[("start_cursor", cursor.as_str())]);
        }
        if let Some(page_size) = query.page_size {
            request = request.query(&[("page_size", page_size)]);
        }
        request
    }

    /// Retrieves a page by its identifier.
    pub async fn find_page_by_id(&self, id: &PageId) -> Result<Page> {
        let request = self.request(Method::GET, &format!("pages/{}", id.to_hyphenated()))?;
        self.send(request).await
    }

    /// Creates a page under a page or database parent.
    pub async fn create_page(&self, params: &CreatePageParams) -> Result<Page> {
        params.validate()?;
        let request = self.request(Method::POST, "pages")?.json(params);
        self.send(request).await
    }

    /// Updates a page's properties, decorations, or archived state.
    pub async fn update_page(&self, id: &PageId, params: &UpdatePageParams) -> Result<Page> {
        params.validate()?;
        let request = self
            .request(Method::PATCH, &format!("pages/{}", id.to_hyphenated()))?
            .json(params);
        self.send(request).await
    }

    /// Retrieves a database's schema by its identifier.
    pub async fn find_database_by_id(&self, id: &DatabaseId) -> Result<Database> {
        let request = self.request(Method::GET, &format!("databases/{}", id.to_hyphenated()))?;
        self.send(request).await
    }

    /// Creates a database under a page parent.
    pub async fn create_database(&self, params: &CreateDatabaseParams) -> Result<Database> {
        params.validate()?;
        let request = self.request(Method::POST, "databases")?.json(params);
        self.send(request).await
    }

    /// Updates a database's title or schema.
    pub async fn update_database(
        &self,
        id: &DatabaseId,
        params: &UpdateDatabaseParams,
    ) -> Result<Database> {
        params.validate()?;
        let request = self
            .request(Method::PATCH, &format!("databases/{}", id.to_hyphenated()))?
            .json(params);
        self.send(request).await
    }

    /// Queries a database for pages, one result page per call.
    pub async fn query_database(
        &self,
        id: &DatabaseId,
        query: &DatabaseQuery,
    ) -> Result<DatabaseQueryResponse> {
        let request = self
            .request(
                Method::POST,
                &format!("databases/{}/query", id.to_hyphenated()),
            )?
            .json(query);
        self.send(request).await
    }

    /// Retrieves a single block by its identifier.
    pub async fn find_block_by_id(&self, id: &BlockId) -> Result<Block> {
        let request = self.request(Method::GET, &format!("blocks/{}", id.to_hyphenated()))?;
        self.send(request).await
    }

    /// Retrieves one page of a block's direct children.
    pub async fn find_block_children(
        &self,
        id: &BlockId,
        query: &PaginationQuery,
    ) -> Result<BlockChildrenResponse> {
        let request = self.request(
            Method::GET,
            &format!("blocks/{}/children", id.to_hyphenated()),
        )?;
        self.send(Self::apply_pagination(request, query)).await
    }

    /// Appends new child blocks to a block or page.
    pub async fn append_block_children(
        &self,
        id: &BlockId,
        params: &AppendBlockChildrenParams,
    ) -> Result<BlockChildrenResponse> {
        params.validate()?;
        let request = self
            .request(
                Method::PATCH,
                &format!("blocks/{}/children", id.to_hyphenated()),
            )?
            .json(params);
        self.send(request).await
    }

    /// Retrieves a user by their identifier.
    pub async fn find_user_by_id(&self, id: &UserId) -> Result<User> {
        let request = self.request(Method::GET, &format!("users/{}", id.to_hyphenated()))?;
        self.send(request).await
    }

    /// Lists the workspace's users, one result page per call.
    pub async fn list_users(&self, query: &PaginationQuery) -> Result<ListUsersResponse> {
        let request = self.request(Method::GET, "users")?;
        self.send(Self::apply_pagination(request, query)).await
    }

    /// Creates a comment on a page or in an existing discussion.
    pub async fn create_comment(
        &self,
        params: &CreateCommentParams,
    ) -> Result<crate::model::Comment> {
        params.validate()?;
        let request = self.request(Method::POST, "comments")?.json(params);
        self.send(request).await
    }

    /// Lists the open comments attached to a page or block.
    pub async fn find_comments_by_block_id(
        &self,
        block_id: &BlockId,
        query: &PaginationQuery,
    ) -> Result<CommentsResponse> {
        let request = self
            .request(Method::GET, "comments")?
            .query(&[("block_id", block_id.to_hyphenated())]);
        self.send(Self::apply_pagination(request, query)).await
    }

    /// Searches pages and databases shared with the integration.
    pub async fn search(&self, params: &SearchParams) -> Result<SearchResponse> {
        let request = self.request(Method::POST, "search")?.json(params);
        self.send(request).await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never expose the token.
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

async fn read_body(response: Response) -> Result<String> {
    Ok(response.text().await?)
}
