use super::PortalError;
use crate::hubspot::{AuthScheme, SchemaApi};
use std::fmt;
use std::sync::Arc;

/// One HubSpot account and, once prepared, its authenticated API handle.
///
/// Id, name and credential are fixed at construction. The API handle is bound
/// exactly once by [`prepare_portal`](super::prepare_portal) (or
/// [`Portal::bind_api`]) and only read afterwards, so a prepared portal can be
/// reused across any number of sync runs.
pub struct Portal {
    portal_id: u64,
    name: String,
    api_key: String,
    auth: AuthScheme,
    api: Option<Arc<dyn SchemaApi>>,
}

impl Portal {
    pub fn new(portal_id: u64, name: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            portal_id,
            name: name.into(),
            api_key: api_key.into(),
            auth: AuthScheme::default(),
            api: None,
        }
    }

    /// Use a different scheme for attaching the credential.
    pub fn with_auth(mut self, auth: AuthScheme) -> Self {
        self.auth = auth;
        self
    }

    pub fn portal_id(&self) -> u64 {
        self.portal_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn auth(&self) -> AuthScheme {
        self.auth
    }

    pub fn is_prepared(&self) -> bool {
        self.api.is_some()
    }

    /// The bound API handle, if the portal has been prepared.
    pub fn api(&self) -> Option<&dyn SchemaApi> {
        self.api.as_deref()
    }

    /// Bind an API handle without going through verification.
    ///
    /// Fails if a handle is already bound.
    pub fn bind_api(&mut self, api: Arc<dyn SchemaApi>) -> Result<(), PortalError> {
        if self.api.is_some() {
            return Err(PortalError::AlreadyPrepared(self.name.clone()));
        }
        self.api = Some(api);
        Ok(())
    }
}

impl fmt::Debug for Portal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Portal")
            .field("portal_id", &self.portal_id)
            .field("name", &self.name)
            .field("auth", &self.auth)
            .field("prepared", &self.is_prepared())
            .finish_non_exhaustive()
    }
}
