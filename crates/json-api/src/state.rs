//! State

use std::sync::Arc;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use partsmith_app::context::AppContext;

use crate::config::server::DEFAULT_MAX_PHOTO_BYTES;

/// Optional outbound integrations and whether they are configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct Integrations {
    /// A language model endpoint is configured
    pub recommendations: bool,

    /// A photo blob store is configured
    pub photo_uploads: bool,
}

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) max_photo_bytes: usize,
    pub(crate) integrations: Integrations,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext) -> Self {
        Self {
            app,
            max_photo_bytes: DEFAULT_MAX_PHOTO_BYTES,
            integrations: Integrations::default(),
        }
    }

    #[must_use]
    pub(crate) fn with_max_photo_bytes(mut self, max_photo_bytes: usize) -> Self {
        self.max_photo_bytes = max_photo_bytes;
        self
    }

    #[must_use]
    pub(crate) fn with_integrations(mut self, integrations: Integrations) -> Self {
        self.integrations = integrations;
        self
    }

    #[must_use]
    pub(crate) fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
