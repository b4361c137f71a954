use super::report::SyncReport;
use super::shared::SharedItemHandler;
use crate::hubspot::{
    HubSpotResult, ObjectType, Property, PropertyCreate, PropertyGroup, PropertyGroupCreate,
    SchemaApi,
};
use async_trait::async_trait;

/// A named schema object that can be diffed by name and created on a portal.
#[async_trait]
pub trait SchemaItem: Clone + Send + Sync {
    /// Human name of the kind, used in report entries and logs.
    const KIND: &'static str;

    fn name(&self) -> &str;

    /// Why this item cannot be created through the API, if it can't.
    fn manual_creation_reason(&self) -> Option<&'static str> {
        None
    }

    /// Submit a creation request for this item to `api`.
    async fn create_on(&self, api: &dyn SchemaApi, object_type: &ObjectType) -> HubSpotResult<()>;

    /// Route a name present on both portals to the matching handler method.
    async fn handle_shared(
        handler: &dyn SharedItemHandler,
        object_type: &ObjectType,
        source: &Self,
        target: &Self,
        report: &mut SyncReport,
    );
}

#[async_trait]
impl SchemaItem for PropertyGroup {
    const KIND: &'static str = "property group";

    fn name(&self) -> &str {
        &self.name
    }

    async fn create_on(&self, api: &dyn SchemaApi, object_type: &ObjectType) -> HubSpotResult<()> {
        api.create_property_group(object_type, &PropertyGroupCreate::from(self))
            .await
    }

    async fn handle_shared(
        handler: &dyn SharedItemHandler,
        object_type: &ObjectType,
        source: &Self,
        target: &Self,
        report: &mut SyncReport,
    ) {
        handler
            .on_shared_group(object_type, source, target, report)
            .await;
    }
}

#[async_trait]
impl SchemaItem for Property {
    const KIND: &'static str = "property";

    fn name(&self) -> &str {
        &self.name
    }

    fn manual_creation_reason(&self) -> Option<&'static str> {
        // The API rejects calculated fields; they have to be rebuilt in the UI.
        self.calculated.then_some("it is a calculated property")
    }

    async fn create_on(&self, api: &dyn SchemaApi, object_type: &ObjectType) -> HubSpotResult<()> {
        api.create_property(object_type, &PropertyCreate::from(self))
            .await
    }

    async fn handle_shared(
        handler: &dyn SharedItemHandler,
        object_type: &ObjectType,
        source: &Self,
        target: &Self,
        report: &mut SyncReport,
    ) {
        handler
            .on_shared_property(object_type, source, target, report)
            .await;
    }
}
