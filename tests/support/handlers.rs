use std::sync::{Arc, Mutex, PoisonError};

use dispatched_rust::{Context, Entity, Handler, HandlerError, Phase};

/// Records each invocation; optionally probes a field so tests can assert
/// which entity state the handler actually saw.
pub struct RecordingHandler {
    name: String,
    probe: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl RecordingHandler {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(RecordingHandler {
            name: name.to_string(),
            probe: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Record `<identity>:<field value>` per call instead of the identity.
    pub fn probing(name: &str, field: &str) -> Arc<Self> {
        Arc::new(RecordingHandler {
            name: name.to_string(),
            probe: Some(field.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

impl Handler for RecordingHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&self, entity: &dyn Entity, _context: &Context) -> Result<(), HandlerError> {
        let entry = match &self.probe {
            Some(field) => {
                let value = entity
                    .field(field)
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "<missing>".to_string());
                format!("{}:{}", entity.identity(), value)
            }
            None => entity.identity().to_string(),
        };
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
        Ok(())
    }
}

/// Appends its own name to a log shared across handlers, for call-order
/// assertions.
pub struct SharedLogHandler {
    name: String,
    log: Arc<Mutex<Vec<String>>>,
}

impl SharedLogHandler {
    pub fn new(name: &str, log: &Arc<Mutex<Vec<String>>>) -> Arc<Self> {
        Arc::new(SharedLogHandler {
            name: name.to_string(),
            log: Arc::clone(log),
        })
    }
}

impl Handler for SharedLogHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&self, _entity: &dyn Entity, _context: &Context) -> Result<(), HandlerError> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(self.name.clone());
        Ok(())
    }
}

/// Always fails, for fail-fast and deferred-failure assertions.
pub struct FailingHandler;

impl Handler for FailingHandler {
    fn name(&self) -> &str {
        "always_fails"
    }

    fn handle(&self, _entity: &dyn Entity, _context: &Context) -> Result<(), HandlerError> {
        Err(HandlerError::new("intentional failure"))
    }
}

/// Self-gating handler with a declared phase: `can_handle` is the truthiness
/// of a named field.
pub struct GatedHandler {
    name: String,
    gate_field: String,
    phase: Phase,
    inner: Arc<RecordingHandler>,
}

impl GatedHandler {
    pub fn new(name: &str, gate_field: &str, phase: Phase) -> Arc<Self> {
        Arc::new(GatedHandler {
            name: name.to_string(),
            gate_field: gate_field.to_string(),
            phase,
            inner: RecordingHandler::new(name),
        })
    }

    pub fn call_count(&self) -> usize {
        self.inner.call_count()
    }
}

impl Handler for GatedHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_handle(&self, entity: &dyn Entity, _context: &Context) -> bool {
        entity
            .field(&self.gate_field)
            .map(|value| value.is_truthy())
            .unwrap_or(false)
    }

    fn handle(&self, entity: &dyn Entity, context: &Context) -> Result<(), HandlerError> {
        self.inner.handle(entity, context)
    }

    fn phase(&self) -> Option<Phase> {
        Some(self.phase)
    }
}
