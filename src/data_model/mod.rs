//! Defines core types in the data model

use crate::constants::{AttributeId, DeviceTypeId};

pub mod config;
pub mod device_type;
pub mod endpoint;
pub mod node;

pub use endpoint::{Endpoint, EndpointFlags};
pub use node::Node;

/// Data Model Specification (7.1)
pub const DATA_MODEL_REVISION: u8 = 16;

/// Device Type (7.15)
///
/// The immutable (id, version) tag stamped on an endpoint at composition
/// time. Endpoints never change device type after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceType {
    pub device_type: DeviceTypeId,
    pub device_revision: u8,
}

pub struct Attribute {
    pub id: AttributeId,
    pub value: AttributeValue,
}

pub enum AttributeValue {
    Boolean(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Utf8(String),
    Composite,
}
