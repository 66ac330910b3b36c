//! Core library components.
//!
//! This module contains the reusable scan logic: store backends,
//! pagination, enumeration and the value search.

pub mod config;
pub mod constants;
pub mod enumerate;
pub mod pages;
pub mod search;
pub mod store;
pub mod types;
