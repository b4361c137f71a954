//! Runs every configured pair and object type, one triple at a time.
//!
//! A portal that fails preparation aborts every triple naming it; a failed
//! listing call aborts only its own triple. Either way the remaining triples
//! still run, and the aborts are returned next to the report entries.

use crate::config::{PortalPair, SyncConfig};
use crate::hubspot::ObjectType;
use crate::portal::{prepare_portal, Portal};
use crate::reconciliation::sync_properties;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use tracing::{error, info};

/// A (source, target, object type) combination that could not be synced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbortedTriple {
    pub source: String,
    pub target: String,
    pub object_type: ObjectType,
    pub reason: String,
}

/// Outcome of a whole run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Report entries from every triple, in run order
    pub messages: Vec<String>,
    pub aborted: Vec<AbortedTriple>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunSummary {
    pub fn requires_attention(&self) -> bool {
        !self.messages.is_empty() || !self.aborted.is_empty()
    }
}

/// Portals by name, each either prepared or with the reason it couldn't be.
#[derive(Debug, Default)]
pub struct PreparedPortals {
    ready: HashMap<String, Portal>,
    failed: HashMap<String, String>,
}

impl PreparedPortals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an already prepared portal.
    pub fn insert(&mut self, portal: Portal) {
        self.ready.insert(portal.name().to_string(), portal);
    }

    pub fn insert_failure(&mut self, name: impl Into<String>, reason: impl Into<String>) {
        self.failed.insert(name.into(), reason.into());
    }

    pub fn get(&self, name: &str) -> Result<&Portal, String> {
        if let Some(portal) = self.ready.get(name) {
            return Ok(portal);
        }
        Err(self
            .failed
            .get(name)
            .cloned()
            .unwrap_or_else(|| format!("portal {name} is not configured")))
    }

    /// Prepare every portal referenced by a pair, once each.
    pub async fn prepare_all(config: &SyncConfig) -> Self {
        let options = config.prepare_options();
        let referenced: HashSet<&str> = config
            .pairs
            .iter()
            .flat_map(|p| [p.source.as_str(), p.target.as_str()])
            .collect();

        let mut portals = Self::new();
        for portal_config in config
            .portals
            .iter()
            .filter(|p| referenced.contains(p.name.as_str()))
        {
            let mut portal = portal_config.to_portal();
            match prepare_portal(&mut portal, &options).await {
                Ok(()) => portals.insert(portal),
                Err(e) => {
                    error!(portal = %portal_config.name, error = %e, "Failed to prepare portal");
                    portals.insert_failure(portal_config.name.clone(), e.to_string());
                }
            }
        }
        portals
    }
}

/// Prepare the configured portals and sync every pair and object type.
pub async fn run(config: &SyncConfig) -> RunSummary {
    let started_at = Utc::now();
    let portals = PreparedPortals::prepare_all(config).await;
    let mut summary = sync_all(&config.pairs, &config.object_types, &portals).await;
    summary.started_at = started_at;
    summary
}

/// Sync the Cartesian product of `pairs` and `object_types`, sequentially.
pub async fn sync_all(
    pairs: &[PortalPair],
    object_types: &[ObjectType],
    portals: &PreparedPortals,
) -> RunSummary {
    let started_at = Utc::now();
    let mut messages = Vec::new();
    let mut aborted = Vec::new();

    for pair in pairs {
        for object_type in object_types {
            let abort = |reason: String| AbortedTriple {
                source: pair.source.clone(),
                target: pair.target.clone(),
                object_type: object_type.clone(),
                reason,
            };

            let (source, target) = match (portals.get(&pair.source), portals.get(&pair.target)) {
                (Ok(source), Ok(target)) => (source, target),
                (Err(reason), _) | (_, Err(reason)) => {
                    aborted.push(abort(reason));
                    continue;
                }
            };

            match sync_properties(object_type, source, target).await {
                Ok(report) => messages.extend(report.into_messages()),
                Err(e) => {
                    error!(
                        source = %pair.source,
                        target = %pair.target,
                        object_type = %object_type,
                        error = %e,
                        "Sync aborted"
                    );
                    aborted.push(abort(e.to_string()));
                }
            }
        }
    }

    info!(
        entries = messages.len(),
        aborted = aborted.len(),
        "Run finished"
    );

    RunSummary {
        messages,
        aborted,
        started_at,
        finished_at: Utc::now(),
    }
}
