//! Core domain logic for docval
//!
//! This module contains pure validation logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`DocumentType`)
//! - `services/` - Checkers and the dispatcher

pub mod models;
pub mod services;
