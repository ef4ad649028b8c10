//! Front ends for Derrick: the REST server and its configuration.
//!
//! The `derrick` binary wires these together with the command-line
//! interface. They live in a library target so integration tests can start
//! the router in-process.

pub mod config;
pub mod server;
