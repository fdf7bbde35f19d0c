//! Per-app state machines and the suite-level launcher.
//!
//! Each app owns its collections and a closed page enum; every transition is
//! an explicit named method invoked from the input layer.

pub mod jobs;
pub mod portfolio;
pub mod projects;
pub mod quiz;
pub mod shop;
pub mod suite;

pub use jobs::*;
pub use portfolio::*;
pub use projects::*;
pub use quiz::*;
pub use shop::*;
pub use suite::*;
