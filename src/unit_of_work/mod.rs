mod transaction;
mod unit_of_work;

pub use transaction::Transaction;
pub use unit_of_work::{SuccessCallback, UnitOfWork};
