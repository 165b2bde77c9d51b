mod context;
mod dispatch;
mod entity;
mod error;
mod handler;
mod lifecycle;
mod unit_of_work;

pub use context::Context;
pub use dispatch::{Dispatch, HandlerDispatcher, Phase, PropertyDispatcher, StateDispatcher};
pub use entity::{ChangedFields, Entity, EntityState, FieldValue, TrackedState};
pub use error::{DispatchError, HandlerError};
pub use handler::{Handler, OnceGuard, OneTimePreCommitHandler, PreCommitHandler};
pub use lifecycle::{Dispatchable, Orchestrator};
pub use unit_of_work::{SuccessCallback, Transaction, UnitOfWork};
