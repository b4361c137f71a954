use super::types::Portal;
use super::PortalError;
use crate::hubspot::{HubSpotClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Where and how to reach the API when preparing portals.
#[derive(Debug, Clone)]
pub struct PrepareOptions {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Verify a portal's credential and bind an authenticated client to it.
///
/// Fails without touching the network when the credential is empty. Otherwise
/// one identity call is made and the portal id it reports must match the
/// configured one.
pub async fn prepare_portal(portal: &mut Portal, options: &PrepareOptions) -> Result<(), PortalError> {
    if portal.api_key().trim().is_empty() {
        return Err(PortalError::MissingCredential(portal.name().to_string()));
    }
    if portal.is_prepared() {
        return Err(PortalError::AlreadyPrepared(portal.name().to_string()));
    }

    let client = HubSpotClient::new(
        &options.base_url,
        portal.api_key(),
        portal.auth(),
        options.timeout,
    )
    .map_err(|source| PortalError::Verification {
        name: portal.name().to_string(),
        source,
    })?;

    let details = client
        .account_details()
        .await
        .map_err(|source| PortalError::Verification {
            name: portal.name().to_string(),
            source,
        })?;

    if details.portal_id != portal.portal_id() {
        return Err(PortalError::PortalIdMismatch {
            name: portal.name().to_string(),
            expected: portal.portal_id(),
            actual: details.portal_id,
        });
    }

    portal.bind_api(Arc::new(client))?;
    info!(portal = %portal.name(), portal_id = portal.portal_id(), "Portal verified");
    Ok(())
}
