mod prepare;
mod types;

pub use prepare::{prepare_portal, PrepareOptions};
pub use types::Portal;

use crate::hubspot::HubSpotError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Missing API key for portal {0}")]
    MissingCredential(String),

    #[error("Portal {name}: credential belongs to portal {actual}, expected {expected}")]
    PortalIdMismatch {
        name: String,
        expected: u64,
        actual: u64,
    },

    #[error("Portal {0} is already prepared")]
    AlreadyPrepared(String),

    #[error("Failed to verify portal {name}: {source}")]
    Verification {
        name: String,
        #[source]
        source: HubSpotError,
    },
}
