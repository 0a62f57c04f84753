//! The HTTP surface: client, request params, and response envelopes.

pub mod client;
pub mod params;
pub mod responses;

pub use client::Client;
pub use params::{
    AppendBlockChildrenParams, CheckboxCondition, CreateCommentParams, CreateDatabaseParams,
    CreatePageParams, DatabaseQuery, DatabaseQueryFilter, DatabaseQuerySort, DateCondition,
    MultiSelectCondition, NumberCondition, PaginationQuery, ParentType, SearchFilter,
    SearchFilterProperty, SearchFilterValue, SearchParams, SearchSort, SearchSortTimestamp,
    SelectCondition, SortDirection, SortTimestamp, TextCondition, UpdateDatabaseParams,
    UpdatePageParams,
};
pub use responses::{
    ApiErrorBody, BlockChildrenResponse, CommentsResponse, DatabaseQueryResponse, ListResponse,
    ListUsersResponse, SearchResponse,
};
