//! Device-side Matter data model and client-side command dispatch.
//!
//! A [`data_model::Node`] owns a tree of endpoints, each composed from a
//! fixed device-type template (`data_model::device_type`). The [`client`]
//! module resolves secure sessions to remote peers and drives bounded
//! cluster commands over them, including binding-table fanout.

#[macro_use]
extern crate num_derive;

/// Cluster definitions, ids, features and command payloads
pub mod cluster;
pub mod constants;
pub mod data_model;
mod error;
pub mod tlv;

/// Session resolution, binding fanout and command invocation
pub mod client;

pub use error::{Error, Result};

pub type TlvAnyData = heapless::Vec<u8, 1024>;
