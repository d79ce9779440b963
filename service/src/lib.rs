//! Infrastructure shared by the relay binary and the domain layer:
//! command line / environment configuration and console logging.

pub mod config;
pub mod logging;
