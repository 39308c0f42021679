//! Repkg - feature-subpackage reorganizer for Android Java sources
//!
//! Repkg takes a flat directory of Java classes and an explicit
//! class-to-subpackage assignment, relocates each class into its subpackage,
//! rewrites its `package` declaration, and injects the cross-package
//! `import` statements the move makes necessary. The same renaming is
//! propagated to the AndroidManifest.xml and to layout XMLs that reference
//! classes by qualified name.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit codes)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core engine (stripping, scanning, import injection, relocation,
//!   artifact rewriting)

pub mod cli;
pub mod config;
pub mod core;
