use dispatched_rust::{ChangedFields, Entity, EntityState, FieldValue, TrackedState};

/// Minimal order aggregate shared by the integration suites.
///
/// Starts with `status = "draft"` and `email_sent = false`, with a clean
/// changed-fields set. The `should_send_email` computed attribute mirrors
/// the inverse of `email_sent`.
pub struct Order {
    tracked: TrackedState,
}

impl Order {
    pub fn new(id: &str) -> Self {
        Order {
            tracked: TrackedState::from_state(
                EntityState::new(id)
                    .with_field("status", "draft")
                    .with_field("email_sent", false),
            ),
        }
    }

    /// Start with a given status already persisted (no pending change).
    pub fn with_status(id: &str, status: &str) -> Self {
        Order {
            tracked: TrackedState::from_state(
                EntityState::new(id)
                    .with_field("status", status)
                    .with_field("email_sent", false),
            ),
        }
    }

    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.tracked.set(field, value);
    }

    pub fn changed_fields(&self) -> &ChangedFields {
        self.tracked.changed_fields()
    }

    pub fn mark_saved(&mut self) {
        self.tracked.mark_saved();
    }
}

impl Entity for Order {
    fn state(&self) -> &EntityState {
        self.tracked.state()
    }

    fn property(&self, name: &str) -> Option<bool> {
        match name {
            "should_send_email" => Some(!self.field("email_sent")?.is_truthy()),
            _ => None,
        }
    }
}
