//! kiosk - Terminal Demo App Suite
//!
//! Five self-contained demo apps (storefront, job board, project tracker,
//! quiz maker, portfolio) sharing one collection/state core, built in Rust.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::*;
pub use domain::*;
