//! Strata Core Types
//!
//! This crate provides the foundational types shared by the table and the
//! update engine:
//! - PRE/DIST arithmetic (`Pre`)
//! - Node kinds (`NodeKind`)
//! - Table rows (`NodeRecord`)
//! - Insertion payloads (`DataClip`, `ClipSource`)
//! - Table primitive errors

mod clip;
mod error;
mod kind;
mod record;

pub use clip::*;
pub use error::*;
pub use kind::*;
pub use record::*;
