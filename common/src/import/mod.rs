//! Import core modules shared across CLI and server.

#[cfg(feature = "excel")]
pub mod excel_reader;
