use super::report::SyncReport;
use crate::hubspot::{ObjectType, Property, PropertyGroup};
use async_trait::async_trait;
use tracing::info;

/// Called for every name that exists on both portals.
///
/// The sync never compares or updates such items itself. Implementations may
/// add report entries or do content-level reconciliation of their own.
#[async_trait]
pub trait SharedItemHandler: Send + Sync {
    async fn on_shared_group(
        &self,
        object_type: &ObjectType,
        source: &PropertyGroup,
        target: &PropertyGroup,
        report: &mut SyncReport,
    );

    async fn on_shared_property(
        &self,
        object_type: &ObjectType,
        source: &Property,
        target: &Property,
        report: &mut SyncReport,
    );
}

/// Default handler: leaves existing items alone and only logs them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualSyncRequired;

#[async_trait]
impl SharedItemHandler for ManualSyncRequired {
    async fn on_shared_group(
        &self,
        object_type: &ObjectType,
        source: &PropertyGroup,
        _target: &PropertyGroup,
        _report: &mut SyncReport,
    ) {
        info!(
            object_type = %object_type,
            name = %source.name,
            "Skipped existing property group: sync it manually"
        );
    }

    async fn on_shared_property(
        &self,
        object_type: &ObjectType,
        source: &Property,
        _target: &Property,
        _report: &mut SyncReport,
    ) {
        info!(
            object_type = %object_type,
            name = %source.name,
            "Skipped existing property: sync it manually"
        );
    }
}
