use crate::types::{SearchField, SortMethod};

/// Base search endpoint with the page size pre-set.
pub const INITIAL_NEWS_URL: &str = "https://newsapi.org/v2/everything?pageSize=20";

/// Document fields a full-text query may be scoped to. Order matters: the
/// query builder joins these into the comma-separated `searchIn` parameter,
/// and UIs list them in this order.
pub const SEARCH_IN_FIELDS: [SearchField; 3] = [
    SearchField::Title,
    SearchField::Description,
    SearchField::Content,
];

/// Result orderings accepted by the upstream API, in display order.
pub const SORT_METHODS: [SortMethod; 3] = [
    SortMethod { value: "publishedAt", label: "published at" },
    SortMethod { value: "relevancy", label: "relevancy" },
    SortMethod { value: "popularity", label: "popularity" },
];
