pub mod config;
pub mod hubspot;
pub mod portal;
pub mod reconciliation;
pub mod runner;

// Re-export commonly used types
pub use config::{read_config, ConfigError, PortalConfig, PortalPair, SyncConfig};
pub use hubspot::{
    AuthScheme, HubSpotClient, HubSpotError, ObjectType, Property, PropertyGroup, SchemaApi,
};
pub use portal::{prepare_portal, Portal, PortalError, PrepareOptions};
pub use reconciliation::{
    sync_properties, sync_properties_with, ManualSyncRequired, SharedItemHandler, SyncError,
    SyncReport,
};
pub use runner::{run, AbortedTriple, RunSummary};
