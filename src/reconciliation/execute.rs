use super::item::SchemaItem;
use super::plan::{ForwardStep, ReverseStep, SyncPlan};
use super::report::SyncReport;
use super::shared::SharedItemHandler;
use crate::hubspot::{HubSpotError, HubSpotResult, ObjectType, SchemaApi};
use tracing::{debug, info, warn};

/// Result of handling one source item missing on the target.
#[derive(Debug)]
pub enum ItemOutcome {
    Created,
    /// Not submitted because the API can't create it
    ManualCreation(&'static str),
    Failed(HubSpotError),
}

impl ItemOutcome {
    fn from_result(result: HubSpotResult<()>) -> Self {
        match result {
            Ok(()) => ItemOutcome::Created,
            Err(e) => ItemOutcome::Failed(e),
        }
    }

    /// Report entry for this outcome, if it needs a human.
    pub fn attention_message(&self, kind: &str, name: &str) -> Option<String> {
        match self {
            ItemOutcome::Created => None,
            ItemOutcome::ManualCreation(reason) => {
                Some(format!("skipped {kind} {name}: {reason}, create it manually"))
            }
            ItemOutcome::Failed(e) => Some(format!("failed creating {kind} {name}: {e}")),
        }
    }
}

/// Create one missing item on the target, capturing any failure.
pub async fn create_missing<T: SchemaItem>(
    item: &T,
    target: &dyn SchemaApi,
    object_type: &ObjectType,
) -> ItemOutcome {
    if let Some(reason) = item.manual_creation_reason() {
        return ItemOutcome::ManualCreation(reason);
    }

    info!(object_type = %object_type, name = %item.name(), "Creating new {}", T::KIND);
    ItemOutcome::from_result(item.create_on(target, object_type).await)
}

/// Carry out a plan against the target portal, recording what needs a human.
///
/// Steps run in listing order. Creation failures never stop the run; each one
/// becomes a report entry.
pub async fn execute_sync_plan<T: SchemaItem>(
    plan: &SyncPlan<T>,
    target: &dyn SchemaApi,
    object_type: &ObjectType,
    handler: &dyn SharedItemHandler,
    report: &mut SyncReport,
) {
    for step in &plan.forward {
        match step {
            ForwardStep::Reserved(name) => {
                debug!(
                    object_type = %object_type,
                    name = %name,
                    "Skipped HubSpot-owned {} in source",
                    T::KIND
                );
            }
            ForwardStep::Create(item) => {
                let outcome = create_missing(item, target, object_type).await;
                if let Some(message) = outcome.attention_message(T::KIND, item.name()) {
                    warn!(object_type = %object_type, "{}", message);
                    report.add_message(message);
                }
            }
            ForwardStep::Shared(source_item, target_item) => {
                T::handle_shared(handler, object_type, source_item, target_item, report).await;
            }
        }
    }

    for step in &plan.reverse {
        match step {
            ReverseStep::Reserved(name) => {
                debug!(
                    object_type = %object_type,
                    name = %name,
                    "Skipped HubSpot-owned {} in target",
                    T::KIND
                );
            }
            ReverseStep::Shared(name) => {
                debug!(
                    object_type = %object_type,
                    name = %name,
                    "Skipped existing {} in target: sync it manually",
                    T::KIND
                );
            }
            ReverseStep::OnlyInTarget(item) => {
                report.add_message(format!(
                    "{} {} exists only on target - delete it manually or sync the other way",
                    T::KIND,
                    item.name()
                ));
            }
        }
    }
}
