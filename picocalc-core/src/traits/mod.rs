//! Hardware abstraction traits
//!
//! These traits define the interface between drawing code (glyph rendering,
//! UI) and the concrete targets it draws on.

pub mod displayer;

pub use displayer::Displayer;
