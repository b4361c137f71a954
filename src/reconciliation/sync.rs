use super::execute::execute_sync_plan;
use super::item::SchemaItem;
use super::plan::build_sync_plan;
use super::report::SyncReport;
use super::shared::{ManualSyncRequired, SharedItemHandler};
use crate::hubspot::{HubSpotError, ObjectType, Property, PropertyGroup, SchemaApi};
use crate::portal::Portal;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Portal {0} has not been prepared")]
    NotPrepared(String),

    #[error("Failed listing {kind} items of {object_type} on portal {portal}: {source}")]
    Fetch {
        portal: String,
        kind: &'static str,
        object_type: ObjectType,
        #[source]
        source: HubSpotError,
    },
}

/// Copy custom property groups and properties of `object_type` from `source`
/// to `target`.
///
/// Items missing on the target are created there; items that only exist on
/// the target, and items that could not be created, end up in the returned
/// report. Names present on both portals are left untouched. Only a failed
/// listing call makes the whole run fail.
pub async fn sync_properties(
    object_type: &ObjectType,
    source: &Portal,
    target: &Portal,
) -> Result<SyncReport, SyncError> {
    sync_properties_with(object_type, source, target, &ManualSyncRequired).await
}

/// Same as [`sync_properties`] with a custom handler for names present on
/// both portals.
pub async fn sync_properties_with(
    object_type: &ObjectType,
    source: &Portal,
    target: &Portal,
    handler: &dyn SharedItemHandler,
) -> Result<SyncReport, SyncError> {
    let source_api = prepared_api(source)?;
    let target_api = prepared_api(target)?;

    info!(
        object_type = %object_type,
        source = %source.name(),
        target = %target.name(),
        "Syncing properties and groups"
    );

    let mut report = SyncReport::new(object_type.clone(), source.name(), target.name());

    let source_groups = source_api
        .list_property_groups(object_type)
        .await
        .map_err(|e| fetch_error::<PropertyGroup>(source, object_type, e))?;
    let source_properties = source_api
        .list_properties(object_type)
        .await
        .map_err(|e| fetch_error::<Property>(source, object_type, e))?;
    let target_groups = target_api
        .list_property_groups(object_type)
        .await
        .map_err(|e| fetch_error::<PropertyGroup>(target, object_type, e))?;
    let target_properties = target_api
        .list_properties(object_type)
        .await
        .map_err(|e| fetch_error::<Property>(target, object_type, e))?;

    // Groups first so new properties can reference them
    let group_plan = build_sync_plan(source_groups, target_groups);
    execute_sync_plan(&group_plan, target_api, object_type, handler, &mut report).await;

    let property_plan = build_sync_plan(source_properties, target_properties);
    execute_sync_plan(&property_plan, target_api, object_type, handler, &mut report).await;

    info!(
        object_type = %object_type,
        source = %source.name(),
        target = %target.name(),
        entries = report.len(),
        "Sync finished"
    );

    Ok(report)
}

fn prepared_api(portal: &Portal) -> Result<&dyn SchemaApi, SyncError> {
    portal
        .api()
        .ok_or_else(|| SyncError::NotPrepared(portal.name().to_string()))
}

fn fetch_error<T: SchemaItem>(portal: &Portal, object_type: &ObjectType, source: HubSpotError) -> SyncError {
    SyncError::Fetch {
        portal: portal.name().to_string(),
        kind: T::KIND,
        object_type: object_type.clone(),
        source,
    }
}
