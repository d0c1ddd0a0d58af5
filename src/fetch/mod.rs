
use std::sync::Arc;

use anyhow::Context as _;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::config::Settings;
use crate::error::FetchError;
use crate::query::SearchQuery;
use crate::types::ArticlesResponse;

/// Header carrying the credential on every outgoing request.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Client for the news API. Holds the connection pool and the injected
/// credential; cheap to clone and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    api_key: HeaderValue,
    base_url: String,
}

impl NewsClient {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(settings.api.user_agent.as_str())
            .build()
            .context("http client")?;

        let api_key = HeaderValue::from_str(&settings.api.key)
            .context("api key is not a valid header value")?;

        Ok(Self {
            http,
            api_key,
            base_url: settings.api.base_url.clone(),
        })
    }

    /// Build a client with an explicit credential and default settings
    /// otherwise.
    pub fn with_api_key(key: &str) -> anyhow::Result<Self> {
        let mut settings = Settings::default();
        settings.api.key = key.to_string();
        Self::new(&settings)
    }

    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = base.into();
        self
    }

    /// Perform a single authenticated GET and decode the body as JSON.
    ///
    /// Caller headers are applied first and the credential last, so a
    /// caller-supplied `X-Api-Key` never shadows the configured one.
    /// Exactly one network attempt; any failure is terminal.
    pub async fn get_json(
        &self,
        url: &str,
        extra_headers: Option<HeaderMap>,
    ) -> Result<Value, FetchError> {
        let mut headers = extra_headers.unwrap_or_default();
        headers.insert(API_KEY_HEADER, self.api_key.clone());

        let response = self.http.get(url).headers(headers).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "request failed");
            return Err(FetchError::Status { status, body });
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(url, error = %e, "failed to parse response body");
                Err(e.into())
            }
        }
    }

    /// Dispatch a GET in the background and return a handle observing its
    /// three-state lifecycle: `Pending` until the request settles, then
    /// exactly one of `Succeeded` or `Failed`.
    ///
    /// Dropping every handle does not cancel the request; it completes
    /// unobserved.
    pub fn fetch(&self, url: impl Into<String>) -> FetchHandle {
        let url = url.into();
        let (tx, rx) = watch::channel(FetchState::Pending);
        let client = self.clone();

        tokio::spawn(async move {
            let state = match client.get_json(&url, None).await {
                Ok(value) => FetchState::Succeeded(value),
                Err(e) => FetchState::Failed(Arc::new(e)),
            };

            // Fails only when all handles are gone; the result is then
            // simply never observed.
            let _ = tx.send(state);
        });

        FetchHandle { rx }
    }

    /// Typed search against the configured base endpoint.
    pub async fn search(&self, query: &SearchQuery) -> anyhow::Result<ArticlesResponse> {
        let url = query.build_url_from(&self.base_url)?;
        let value = self.get_json(url.as_str(), None).await?;

        serde_json::from_value(value).context("article envelope")
    }
}

/// Lifecycle of one fetch call.
#[derive(Debug, Clone)]
pub enum FetchState {
    Pending,
    Succeeded(Value),
    Failed(Arc<FetchError>),
}

impl FetchState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Observer side of a dispatched fetch. Clonable; every clone sees the
/// same state updates.
#[derive(Debug, Clone)]
pub struct FetchHandle {
    rx: watch::Receiver<FetchState>,
}

impl FetchHandle {
    /// Snapshot of the current state. May be `Pending` before settlement.
    pub fn state(&self) -> FetchState {
        self.rx.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        !self.rx.borrow().is_settled()
    }

    /// Decoded body, once the call has succeeded.
    pub fn data(&self) -> Option<Value> {
        match &*self.rx.borrow() {
            FetchState::Succeeded(value) => Some(value.clone()),
            _ => None,
        }
    }

    /// Terminal error, once the call has failed.
    pub fn error(&self) -> Option<Arc<FetchError>> {
        match &*self.rx.borrow() {
            FetchState::Failed(e) => Some(Arc::clone(e)),
            _ => None,
        }
    }

    /// Wait for the terminal state of this call.
    pub async fn settled(&mut self) -> FetchState {
        if let Ok(state) = self.rx.wait_for(FetchState::is_settled).await {
            return state.clone();
        }
        // Sender gone without settling; report the last observed state.
        self.rx.borrow().clone()
    }

    /// Live stream of state updates, starting from the current value.
    pub fn updates(&self) -> WatchStream<FetchState> {
        WatchStream::new(self.rx.clone())
    }
}
