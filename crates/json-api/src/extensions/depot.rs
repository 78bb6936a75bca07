//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::state::State;

/// Access to the [`State`] injected by the router.
pub(crate) trait DepotExt {
    /// The injected state, or a 500 when none was injected.
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError>;
}

impl DepotExt for Depot {
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError> {
        self.obtain::<Arc<State>>().map_err(|_missing| {
            error!("server state missing from depot");

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn missing_state_is_internal_error() {
        let depot = Depot::new();

        let error = depot.state_or_500().err();

        assert_eq!(
            error.map(|error| error.code),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
    }
}
