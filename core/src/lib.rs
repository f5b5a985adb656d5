//! Conversion engine for Sapphire.js command modules: parsing, the
//! fixed rewrite rules, directory traversal, and the file I/O boundary.

pub mod converter;
pub mod io;
pub mod pipeline;
pub mod syntax;
pub mod walker;
