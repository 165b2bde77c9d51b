mod orchestrator;

pub use orchestrator::{Dispatchable, Orchestrator};
