pub mod cors;
pub mod session;

pub use cors::create_cors;
pub use session::{
    extract_bearer_token, Authenticated, Operation, OperationTable, SessionAuth, SessionContext,
};
