//! Application State
//!
//! Holds shared state for the server: the gateway client, the optional CDN
//! uploader, and the optional library repository.

use anyhow::Result;
use std::sync::Arc;

use imaginary_core::gateway::GatewayClient;
use imaginary_core::library::{LibraryRepository, PgLibraryRepository};
use imaginary_core::media::CdnUploader;

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub(crate) inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub gateway: GatewayClient,
    pub uploader: Option<CdnUploader>,
    pub repository: Option<Arc<dyn LibraryRepository>>,
}

impl AppState {
    pub async fn new(config: &ServerConfig) -> Result<Self> {
        let gateway =
            GatewayClient::new(config.gateway_base_url.clone(), config.gateway_api_key.clone());

        let uploader = config
            .cdn
            .as_ref()
            .map(|c| CdnUploader::new(&c.cloud_name, &c.api_key, &c.api_secret));

        let repository: Option<Arc<dyn LibraryRepository>> = match &config.database_url {
            Some(url) => {
                let repo = PgLibraryRepository::connect(url)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to connect library store: {}", e))?;
                Some(Arc::new(repo))
            }
            None => None,
        };

        Ok(Self::with_components(gateway, uploader, repository))
    }

    /// Assemble state from pre-built components (tests, embedding).
    pub fn with_components(
        gateway: GatewayClient,
        uploader: Option<CdnUploader>,
        repository: Option<Arc<dyn LibraryRepository>>,
    ) -> Self {
        Self { inner: Arc::new(AppStateInner { gateway, uploader, repository }) }
    }

    pub fn gateway(&self) -> &GatewayClient {
        &self.inner.gateway
    }

    pub fn uploader(&self) -> Option<&CdnUploader> {
        self.inner.uploader.as_ref()
    }

    pub fn repository(&self) -> Option<&Arc<dyn LibraryRepository>> {
        self.inner.repository.as_ref()
    }
}
