mod execute;
mod item;
mod plan;
mod report;
mod shared;
mod sync;

pub use execute::{create_missing, execute_sync_plan, ItemOutcome};
pub use item::SchemaItem;
pub use plan::{
    build_sync_plan, index_by_name, is_platform_owned, ForwardStep, ReverseStep, SyncPlan,
    RESERVED_PREFIX,
};
pub use report::SyncReport;
pub use shared::{ManualSyncRequired, SharedItemHandler};
pub use sync::{sync_properties, sync_properties_with, SyncError};
