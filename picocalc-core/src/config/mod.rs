//! Configuration types
//!
//! Board wiring and bus settings. Controller register values are protocol
//! constants and live with the drivers, not here.

pub mod board;

pub use board::*;
