use anyhow::Context as _;
use reqwest::Url;

use crate::constants::INITIAL_NEWS_URL;
use crate::types::{SearchField, SortMethod};

/// Builder for a full-text search request against the articles endpoint.
///
/// Only well-typed parameters can be expressed here; semantic validation
/// (unknown sources, out-of-range pages) stays with the remote API.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    q: String,
    search_in: Vec<SearchField>,
    sort_by: Option<SortMethod>,
    page: Option<u32>,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Default::default()
        }
    }

    /// Restrict the search to a subset of document fields. Fields are
    /// serialized comma-joined, in the order given.
    pub fn search_in(mut self, fields: impl IntoIterator<Item = SearchField>) -> Self {
        self.search_in = fields.into_iter().collect();
        self
    }

    pub fn sort_by(mut self, sort: SortMethod) -> Self {
        self.sort_by = Some(sort);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn build_url(&self) -> anyhow::Result<Url> {
        self.build_url_from(INITIAL_NEWS_URL)
    }

    /// Compose the query onto `base`, keeping whatever parameters the base
    /// already carries (the default base pre-sets `pageSize`).
    pub fn build_url_from(&self, base: &str) -> anyhow::Result<Url> {
        let mut url = Url::parse(base).context("parsing base url")?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", &self.q);

            if !self.search_in.is_empty() {
                let fields: Vec<&str> = self.search_in.iter().map(SearchField::as_str).collect();
                pairs.append_pair("searchIn", &fields.join(","));
            }

            if let Some(sort) = self.sort_by {
                pairs.append_pair("sortBy", sort.value);
            }

            if let Some(page) = self.page {
                pairs.append_pair("page", &page.to_string());
            }
        }

        Ok(url)
    }
}
