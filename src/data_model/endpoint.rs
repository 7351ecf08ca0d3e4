use bitflags::bitflags;

use crate::{
    cluster::Cluster,
    constants::{ClusterId, EndpointId},
    data_model::DeviceType,
    Error, Result,
};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EndpointFlags: u8 {
        /// The endpoint can be removed at runtime. Set for bridged/dynamic
        /// endpoints, never for static device-type endpoints.
        const DESTROYABLE = 0x01;
    }
}

/// An addressable sub-unit of a node, composed from exactly one
/// device-type template at creation time.
pub struct Endpoint {
    id: EndpointId,
    flags: EndpointFlags,
    device_type: Option<DeviceType>,
    clusters: Vec<Cluster>,
}

impl Endpoint {
    pub(crate) fn new(id: EndpointId, flags: EndpointFlags) -> Self {
        Self {
            id,
            flags,
            device_type: None,
            clusters: Vec::new(),
        }
    }

    pub fn id(&self) -> EndpointId {
        self.id
    }

    pub fn is_destroyable(&self) -> bool {
        self.flags.contains(EndpointFlags::DESTROYABLE)
    }

    pub fn device_type(&self) -> Option<&DeviceType> {
        self.device_type.as_ref()
    }

    /// Stamp the device type tag on this endpoint. The tag is immutable:
    /// stamping the same tag again is a no-op, a different tag is an error.
    pub(crate) fn add_device_type(&mut self, device_type: DeviceType) -> Result<()> {
        match self.device_type {
            None => {
                self.device_type = Some(device_type);
                Ok(())
            }
            Some(existing) if existing == device_type => Ok(()),
            Some(_) => Err(Error::InvalidState(
                "endpoint already composed with a different device type",
            )),
        }
    }

    pub(crate) fn push_cluster(&mut self, cluster: Cluster) {
        self.clusters.push(cluster);
    }

    pub fn cluster(&self, cluster_id: ClusterId) -> Option<&Cluster> {
        self.clusters.iter().find(|c| c.id == cluster_id)
    }

    pub fn cluster_mut(&mut self, cluster_id: ClusterId) -> Option<&mut Cluster> {
        self.clusters.iter_mut().find(|c| c.id == cluster_id)
    }

    pub fn has_cluster(&self, cluster_id: ClusterId) -> bool {
        self.cluster(cluster_id).is_some()
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Cluster ids in composition order.
    pub fn cluster_ids(&self) -> impl Iterator<Item = ClusterId> + '_ {
        self.clusters.iter().map(|c| c.id)
    }
}
