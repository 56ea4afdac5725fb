//! Instruction handlers for the privacy pool program.

pub mod admin;
pub mod initialize_pool;
pub mod set_verification_key;
pub mod transact;

pub use admin::*;
pub use initialize_pool::*;
pub use set_verification_key::*;
pub use transact::*;
