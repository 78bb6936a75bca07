//! Partsmith JSON API Healthcheck Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::Integrations};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthResponse {
    /// Service status
    pub status: String,

    /// Server version
    pub version: String,

    /// Which optional integrations are configured
    pub integrations: Integrations,
}

/// Healthcheck handler
///
/// Returns service health status and which optional integrations are
/// configured.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.state_or_500()?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        integrations: state.integrations,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use partsmith_app::domain::catalog::CatalogStores;

    use crate::{state::State, test_helpers::app};

    use super::*;

    #[tokio::test]
    async fn healthcheck_reports_configured_integrations() -> TestResult {
        let state = State::new(app(CatalogStores::in_memory()))
            .with_integrations(Integrations {
                recommendations: true,
                photo_uploads: false,
            })
            .shared();

        let router = Router::new()
            .hoop(inject(state))
            .push(Router::with_path("healthcheck").get(handler));

        let response: HealthResponse = TestClient::get("http://example.com/healthcheck")
            .send(&Service::new(router))
            .await
            .take_json()
            .await?;

        assert_eq!(response.status, "ok");
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
        assert!(response.integrations.recommendations);
        assert!(!response.integrations.photo_uploads);

        Ok(())
    }
}
