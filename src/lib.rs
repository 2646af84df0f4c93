//! Tonepot - offline localization toolchain for the TonePress AI WordPress plugin
//!
//! Tonepot is a CLI tool and library with two pipelines: an extractor that
//! scans PHP sources for gettext-style marker calls scoped to the plugin's
//! text domain and writes a POT catalog template, and an applier that fills
//! the template from a built-in English→French dictionary, writes the fr_FR
//! PO catalog, and compiles it to a binary MO catalog with `msgfmt`.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and fixed toolchain constants
//! - `extract`: Source tree scanning and marker-call matching
//! - `catalog`: POT/PO serialization, translation dictionary, MO compilation

pub mod catalog;
pub mod cli;
pub mod config;
pub mod extract;
