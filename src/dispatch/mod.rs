// Dispatch module - ENTRY POINT
// Routes (operation name, positional arguments) to the ledger service

mod dispatcher;
mod operation;

pub use dispatcher::{Dispatcher, Response, ResponseError, Status};
pub use operation::Operation;
