use crate::api::ApiClient;
use crate::config::EnvConfig;
use leptos::prelude::*;

/// App-wide context. Holds no collection data; each page loads the
/// collection set from storage when it mounts.
#[derive(Clone)]
pub(crate) struct AppState {
    pub api_client: RwSignal<ApiClient>,

    /// How many trending titles the catalog requests.
    pub trending_per_page: u32,
}

impl AppState {
    pub fn new(config: &EnvConfig) -> Self {
        Self {
            api_client: RwSignal::new(ApiClient::new(config.api_url.clone())),
            trending_per_page: config.trending_per_page,
        }
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
