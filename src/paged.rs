use crate::{SchemaError, SortOrder, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::debug;
#[cfg(feature = "utoipa")]
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 100;
pub const MAX_LIMIT: i64 = 1000;

/// Pagination options shared by every endpoint that pages its results.
///
/// - `page`, the page number, starting at 1
/// - `limit`, the number of results per page, at most [`MAX_LIMIT`]
/// - `continuation_id`, the last numeric ID that was read, if any
/// - `sort_order`, the direction in which results are ordered
///
/// Values are validated when built, whether through [`PageOptions::new`] or
/// through deserialization, so a `PageOptions` in hand always satisfies
/// `page > 0` and `0 < limit <= MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PageOptionsParams")]
#[cfg_attr(feature = "utoipa", derive(ToSchema, IntoParams))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct PageOptions {
    /// Page number.
    #[cfg_attr(
        feature = "utoipa",
        schema(required = false, default = 1, minimum = 1),
        param(required = false, default = 1, minimum = 1)
    )]
    #[cfg_attr(feature = "schemars", schemars(range(min = 1)))]
    page: i64,
    /// Maximum number of results per page.
    #[cfg_attr(
        feature = "utoipa",
        schema(required = false, default = 100, minimum = 1, maximum = 1000),
        param(required = false, default = 100, minimum = 1, maximum = 1000)
    )]
    #[cfg_attr(feature = "schemars", schemars(range(min = 1, max = 1000)))]
    limit: i64,
    /// If provided, the ID of the last object that was retrieved.
    #[cfg_attr(feature = "utoipa", schema(required = false), param(required = false))]
    continuation_id: Option<i64>,
    /// Order in which results are returned.
    #[cfg_attr(
        feature = "utoipa",
        schema(required = false, default = "ASC"),
        param(required = false, default = "ASC")
    )]
    sort_order: SortOrder,
}

impl PageOptions {
    /// Builds validated pagination options. `None` selects the field default.
    pub fn new(
        page: Option<i64>,
        limit: Option<i64>,
        continuation_id: Option<i64>,
        sort_order: Option<SortOrder>,
    ) -> Result<Self, SchemaError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if page <= 0 {
            debug!(page, "Rejecting page options: page must be positive");
            return Err(ValidationError::must_be_positive("page", page).into());
        }
        if limit <= 0 || limit > MAX_LIMIT {
            debug!(limit, "Rejecting page options: limit out of range");
            return Err(ValidationError::out_of_range("limit", limit, 1, MAX_LIMIT).into());
        }

        Ok(Self {
            page,
            limit,
            continuation_id,
            sort_order: sort_order.unwrap_or_default(),
        })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn continuation_id(&self) -> Option<i64> {
        self.continuation_id
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    #[must_use]
    pub fn with_continuation_id(self, continuation_id: Option<i64>) -> Self {
        Self {
            continuation_id,
            ..self
        }
    }

    #[must_use]
    pub fn with_sort_order(self, sort_order: SortOrder) -> Self {
        Self { sort_order, ..self }
    }
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            continuation_id: None,
            sort_order: SortOrder::default(),
        }
    }
}

// Decoded form before validation; every field may be omitted.
#[derive(Debug, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
struct PageOptionsParams {
    /// Page number.
    #[cfg_attr(feature = "schemars", schemars(range(min = 1)))]
    page: i64,
    /// Maximum number of results per page.
    #[cfg_attr(feature = "schemars", schemars(range(min = 1, max = 1000)))]
    limit: i64,
    /// If provided, the ID of the last object that was retrieved.
    continuation_id: Option<i64>,
    /// Order in which results are returned.
    sort_order: SortOrder,
}

impl Default for PageOptionsParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            continuation_id: None,
            sort_order: SortOrder::default(),
        }
    }
}

impl TryFrom<PageOptionsParams> for PageOptions {
    type Error = SchemaError;

    fn try_from(params: PageOptionsParams) -> Result<Self, Self::Error> {
        PageOptions::new(
            Some(params.page),
            Some(params.limit),
            params.continuation_id,
            Some(params.sort_order),
        )
    }
}

/// A page of results, echoing the options it was produced for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub limit: i64,
    pub continuation_id: Option<i64>,
    pub sort_order: SortOrder,
}

impl<T> Paged<T> {
    pub fn new(items: Vec<T>, options: &PageOptions) -> Self {
        Self {
            items,
            page: options.page(),
            limit: options.limit(),
            continuation_id: options.continuation_id(),
            sort_order: options.sort_order(),
        }
    }
}
