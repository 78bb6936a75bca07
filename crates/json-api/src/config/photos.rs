//! Photo Store Config

use clap::Args;
use partsmith_app::photos::PhotoStoreConfig;

/// Photo blob store settings.
#[derive(Debug, Args)]
pub struct PhotoStoreArgs {
    /// Base URL photos are uploaded to; uploads are disabled when omitted
    #[arg(long, env = "PHOTO_STORE_ENDPOINT")]
    pub photo_store_endpoint: Option<String>,

    /// Base URL photos are served from; defaults to the upload endpoint
    #[arg(long, env = "PHOTO_STORE_PUBLIC_URL")]
    pub photo_store_public_url: Option<String>,

    /// Bearer token sent with uploads
    #[arg(long, env = "PHOTO_STORE_TOKEN", hide_env_values = true)]
    pub photo_store_token: Option<String>,
}

impl PhotoStoreArgs {
    /// Uploader configuration, `None` when no endpoint is set.
    pub fn config(&self) -> Option<PhotoStoreConfig> {
        self.photo_store_endpoint
            .as_ref()
            .map(|endpoint| PhotoStoreConfig {
                endpoint: endpoint.clone(),
                public_url: self
                    .photo_store_public_url
                    .clone()
                    .unwrap_or_else(|| endpoint.clone()),
                token: self.photo_store_token.clone(),
            })
    }
}
