//! Remote schema access for HubSpot portals.

mod client;
mod error;
mod types;

pub use client::{AuthScheme, HubSpotClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{HubSpotError, HubSpotResult};
pub use types::{
    AccountDetails, ObjectType, Property, PropertyCreate, PropertyGroup, PropertyGroupCreate,
    PropertyOption,
};

use async_trait::async_trait;

/// Schema operations the reconciler needs from a portal.
///
/// `HubSpotClient` is the production implementation; tests plug in
/// in-memory doubles.
#[async_trait]
pub trait SchemaApi: Send + Sync {
    /// All property groups of `object_type`, in the order the API returns them.
    async fn list_property_groups(
        &self,
        object_type: &ObjectType,
    ) -> HubSpotResult<Vec<PropertyGroup>>;

    /// All properties of `object_type`, in the order the API returns them.
    async fn list_properties(&self, object_type: &ObjectType) -> HubSpotResult<Vec<Property>>;

    async fn create_property_group(
        &self,
        object_type: &ObjectType,
        group: &PropertyGroupCreate,
    ) -> HubSpotResult<()>;

    async fn create_property(
        &self,
        object_type: &ObjectType,
        property: &PropertyCreate,
    ) -> HubSpotResult<()>;
}
