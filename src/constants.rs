//! Identifier types shared with the wire protocol.
//! The widths are a compatibility contract and must not change.

pub type NodeId = u64;
pub type EndpointId = u16;
pub type ClusterId = u32;
pub type AttributeId = u32;
pub type CommandId = u32;
pub type EventId = u32;
pub type DeviceTypeId = u32;
pub type FabricIndex = u8;

/// The root endpoint is created exactly once per node.
pub const ROOT_ENDPOINT_ID: EndpointId = 0;

/// Feature bitmask of a cluster created without optional features.
pub const NONE_FEATURE_MAP: u32 = 0;
