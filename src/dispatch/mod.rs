mod dispatcher;
mod handler;
mod property;
mod state;

pub(crate) use dispatcher::execute;
pub use dispatcher::{Dispatch, Phase};
pub use handler::HandlerDispatcher;
pub use property::PropertyDispatcher;
pub use state::StateDispatcher;
