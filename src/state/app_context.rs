// ============================================================================
// APP CONTEXT - API client + session, threaded through every flow
// ============================================================================

use crate::services::api_client::ApiClient;
use crate::services::http::HttpTransport;
use crate::state::session_store::{KeyValueStore, SessionStore};

pub struct AppContext<T, S> {
    pub api: ApiClient<T>,
    pub session: SessionStore<S>,
}

impl<T: HttpTransport, S: KeyValueStore> AppContext<T, S> {
    pub fn new(api: ApiClient<T>, session: SessionStore<S>) -> Self {
        Self { api, session }
    }
}

#[cfg(target_arch = "wasm32")]
pub type BrowserContext = AppContext<
    crate::services::gloo_transport::GlooTransport,
    crate::utils::storage::LocalStorageBackend,
>;

#[cfg(target_arch = "wasm32")]
impl BrowserContext {
    pub fn browser() -> Self {
        use crate::services::gloo_transport::GlooTransport;
        use crate::utils::storage::LocalStorageBackend;

        Self::new(
            ApiClient::new(GlooTransport::new()),
            SessionStore::new(LocalStorageBackend::new()),
        )
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::services::mock::MockTransport;
    use crate::state::session_store::MemoryStore;

    pub type TestContext = AppContext<MockTransport, MemoryStore>;

    pub fn context(transport: MockTransport) -> TestContext {
        AppContext::new(
            ApiClient::with_base_url("http://api.test/api", transport),
            SessionStore::new(MemoryStore::new()),
        )
    }
}
