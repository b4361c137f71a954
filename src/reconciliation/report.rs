use crate::hubspot::ObjectType;

/// Items needing manual attention after syncing one object type between
/// two portals.
///
/// Entries are prefixed with `source->target (object type)` so reports from
/// different runs can be concatenated and still read on their own.
#[derive(Debug, Clone)]
pub struct SyncReport {
    object_type: ObjectType,
    source: String,
    target: String,
    messages: Vec<String>,
}

impl SyncReport {
    pub fn new(object_type: ObjectType, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            object_type,
            source: source.into(),
            target: target.into(),
            messages: Vec::new(),
        }
    }

    pub fn add_message(&mut self, message: impl AsRef<str>) {
        self.messages.push(format!(
            "{}->{} ({}): {}",
            self.source,
            self.target,
            self.object_type,
            message.as_ref()
        ));
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}
