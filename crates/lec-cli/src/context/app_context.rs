use std::sync::Arc;

use anyhow::Context;
use lec_api::ApiClient;
use lec_auth::{SessionProvider, StoredSession, TokenStore};
use lec_config::LecternConfig;
use lec_query::{Notifier, QueryCache, QueryClient};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: LecternConfig,
    pub session: Arc<StoredSession>,
    pub queries: QueryClient,
}

impl AppContext {
    /// Wire the stored session, HTTP client, and query cache together.
    pub fn init(config: LecternConfig, notifier: Arc<dyn Notifier>) -> anyhow::Result<Self> {
        let session = Arc::new(StoredSession::new(TokenStore::from_config(&config.auth)));
        let provider: Arc<dyn SessionProvider> = session.clone();

        let api = ApiClient::new(&config.api, provider)
            .context("failed to build course API client")?;
        let cache = QueryCache::from_config(&config.cache);
        tracing::debug!(base_url = api.base_url(), "application context ready");

        Ok(Self {
            config,
            session,
            queries: QueryClient::new(api, cache, notifier),
        })
    }

    /// Default list size from `general.default_limit`.
    #[must_use]
    pub const fn default_limit(&self) -> u32 {
        self.config.general.default_limit
    }
}
