//! Core reorganization engine.
//!
//! The engine runs against one source root at a time, driven by a
//! [`PackageMap`]:
//!
//! 1. `relocate` moves every class into its subpackage and rewrites its
//!    package declaration, then scans the relocated set and injects the
//!    cross-package imports the move made necessary (`strip` + `scan` +
//!    `imports`).
//! 2. `manifest` and `layout` propagate the renaming to the dependent
//!    artifacts by literal substitution.

pub mod imports;
pub mod layout;
pub mod manifest;
pub mod mapping;
pub mod relocate;
pub mod scan;
pub mod strip;

pub use mapping::PackageMap;
pub use scan::ClassRef;
