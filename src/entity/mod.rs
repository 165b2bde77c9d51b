mod entity;
mod field_value;
mod state;
mod tracked;

pub use entity::{ChangedFields, Entity};
pub use field_value::FieldValue;
pub use state::EntityState;
pub use tracked::TrackedState;
