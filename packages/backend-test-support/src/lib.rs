//! Backend test support utilities
//!
//! Shared initialization for backend test binaries, currently just the
//! unified logging setup.

pub mod logging;
