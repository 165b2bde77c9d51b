mod guard;
mod handler;
mod once;
mod precommit;

pub use guard::OnceGuard;
pub use handler::Handler;
pub use once::OneTimePreCommitHandler;
pub use precommit::PreCommitHandler;
