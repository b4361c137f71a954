use super::item::SchemaItem;
use std::collections::HashMap;

/// Name prefix HubSpot uses for the schema objects it owns.
pub const RESERVED_PREFIX: &str = "hs_";

/// Whether a group or property name belongs to the platform itself.
pub fn is_platform_owned(name: &str) -> bool {
    name.starts_with(RESERVED_PREFIX)
}

/// Action for one source name.
#[derive(Debug, Clone)]
pub enum ForwardStep<T> {
    /// Platform-owned, never synced
    Reserved(String),
    /// Missing on the target
    Create(T),
    /// Present on both portals as (source, target)
    Shared(T, T),
}

/// Action for one target name.
#[derive(Debug, Clone)]
pub enum ReverseStep<T> {
    Reserved(String),
    /// Present on both portals; already handled by the forward pass
    Shared(String),
    /// No source counterpart
    OnlyInTarget(T),
}

/// What to do with every item of one kind for a source/target pair.
///
/// Both passes keep the order in which the API listed the names.
#[derive(Debug, Clone)]
pub struct SyncPlan<T> {
    /// One step per source name
    pub forward: Vec<ForwardStep<T>>,

    /// One step per target name
    pub reverse: Vec<ReverseStep<T>>,
}

impl<T> Default for SyncPlan<T> {
    fn default() -> Self {
        Self {
            forward: Vec::new(),
            reverse: Vec::new(),
        }
    }
}

/// Index items by name.
///
/// A repeated name replaces the earlier item but keeps its position, so the
/// result follows the order in which names first appeared.
pub fn index_by_name<T: SchemaItem>(items: Vec<T>) -> (Vec<T>, HashMap<String, usize>) {
    let mut ordered: Vec<T> = Vec::with_capacity(items.len());
    let mut positions: HashMap<String, usize> = HashMap::new();

    for item in items {
        match positions.get(item.name()) {
            Some(&index) => ordered[index] = item,
            None => {
                positions.insert(item.name().to_string(), ordered.len());
                ordered.push(item);
            }
        }
    }

    (ordered, positions)
}

/// Partition source and target items by name.
pub fn build_sync_plan<T: SchemaItem>(source: Vec<T>, target: Vec<T>) -> SyncPlan<T> {
    let (source, source_index) = index_by_name(source);
    let (target, target_index) = index_by_name(target);

    let forward = source
        .iter()
        .map(|item| {
            if is_platform_owned(item.name()) {
                return ForwardStep::Reserved(item.name().to_string());
            }
            match target_index.get(item.name()) {
                None => ForwardStep::Create(item.clone()),
                Some(&index) => ForwardStep::Shared(item.clone(), target[index].clone()),
            }
        })
        .collect();

    let reverse = target
        .iter()
        .map(|item| {
            if is_platform_owned(item.name()) {
                ReverseStep::Reserved(item.name().to_string())
            } else if source_index.contains_key(item.name()) {
                ReverseStep::Shared(item.name().to_string())
            } else {
                ReverseStep::OnlyInTarget(item.clone())
            }
        })
        .collect();

    SyncPlan { forward, reverse }
}
