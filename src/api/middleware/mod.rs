pub mod guard_chain;
pub mod request_id;

pub use guard_chain::GuardChain;
pub use request_id::{REQUEST_ID_HEADER, request_id};
