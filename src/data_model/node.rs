//! Node composition (7.8).
//!
//! A node owns the ordered set of endpoints and hands out endpoint ids.
//! It is created once at startup via [`create`], which also synthesizes
//! the mandatory root endpoint.

use log::warn;

use crate::{
    constants::{AttributeId, ClusterId, EndpointId, ROOT_ENDPOINT_ID},
    data_model::{
        config::NodeConfig,
        device_type::{self, ROOT_NODE},
        endpoint::{Endpoint, EndpointFlags},
    },
    Error, Result,
};

/// Hook invoked on attribute writes, before and after the store updates.
pub type AttributeCallback = Box<dyn Fn(EndpointId, ClusterId, AttributeId) + Send + Sync>;
/// Hook invoked when an identify interaction targets an endpoint.
pub type IdentificationCallback = Box<dyn Fn(EndpointId) + Send + Sync>;

pub struct Node {
    endpoints: Vec<Endpoint>,
    next_endpoint_id: EndpointId,
    attribute_callback: AttributeCallback,
    identification_callback: IdentificationCallback,
}

/// Create the node and its root endpoint.
///
/// Both callback hooks live inside the returned node, so a failed
/// composition cannot leave them registered against a node that does not
/// exist.
pub fn create(
    config: &NodeConfig,
    attribute_callback: AttributeCallback,
    identification_callback: IdentificationCallback,
) -> Result<Node> {
    let mut node = Node {
        endpoints: Vec::new(),
        next_endpoint_id: ROOT_ENDPOINT_ID,
        attribute_callback,
        identification_callback,
    };
    let root_id = device_type::create(
        &mut node,
        &ROOT_NODE,
        &config.root_node,
        EndpointFlags::empty(),
    )?;
    debug_assert_eq!(root_id, ROOT_ENDPOINT_ID);
    Ok(node)
}

impl Node {
    /// Allocate the next endpoint id and create an empty endpoint for it.
    pub(crate) fn create_endpoint(&mut self, flags: EndpointFlags) -> Result<&mut Endpoint> {
        let id = self.next_endpoint_id;
        self.next_endpoint_id = self
            .next_endpoint_id
            .checked_add(1)
            .ok_or(Error::InvalidState("endpoint ids exhausted"))?;
        self.endpoints.push(Endpoint::new(id, flags));
        Ok(self.endpoints.last_mut().expect("just pushed"))
    }

    /// Re-create an endpoint under a previously known id without allocating
    /// a new one. If the endpoint already exists it is returned as-is.
    pub(crate) fn resume_endpoint(
        &mut self,
        flags: EndpointFlags,
        endpoint_id: EndpointId,
    ) -> Result<&mut Endpoint> {
        if let Some(index) = self.endpoints.iter().position(|e| e.id() == endpoint_id) {
            return Ok(&mut self.endpoints[index]);
        }
        if endpoint_id >= self.next_endpoint_id {
            // Keep later allocations clear of the restored id
            self.next_endpoint_id = endpoint_id
                .checked_add(1)
                .ok_or(Error::InvalidState("endpoint ids exhausted"))?;
        }
        self.endpoints.push(Endpoint::new(endpoint_id, flags));
        Ok(self.endpoints.last_mut().expect("just pushed"))
    }

    /// Remove a dynamic endpoint. Static endpoints are not removable.
    pub fn destroy_endpoint(&mut self, endpoint_id: EndpointId) -> Result<()> {
        let index = self
            .endpoints
            .iter()
            .position(|e| e.id() == endpoint_id)
            .ok_or(Error::NoEndpoint(endpoint_id))?;
        if !self.endpoints[index].is_destroyable() {
            return Err(Error::InvalidState("endpoint is not destroyable"));
        }
        self.endpoints.remove(index);
        Ok(())
    }

    pub fn endpoint(&self, endpoint_id: EndpointId) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.id() == endpoint_id)
    }

    pub fn endpoint_mut(&mut self, endpoint_id: EndpointId) -> Option<&mut Endpoint> {
        self.endpoints.iter_mut().find(|e| e.id() == endpoint_id)
    }

    pub fn root_endpoint(&self) -> &Endpoint {
        self.endpoint(ROOT_ENDPOINT_ID)
            .expect("root endpoint exists for the node's lifetime")
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// Fan an attribute update out to the registered hook.
    pub fn attribute_update(
        &self,
        endpoint_id: EndpointId,
        cluster_id: ClusterId,
        attribute_id: AttributeId,
    ) {
        if self.endpoint(endpoint_id).is_none() {
            warn!("attribute update for unknown endpoint {endpoint_id}");
            return;
        }
        (self.attribute_callback)(endpoint_id, cluster_id, attribute_id);
    }

    /// Deliver an identify request to the registered hook.
    pub fn identify(&self, endpoint_id: EndpointId) {
        (self.identification_callback)(endpoint_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::on_off;
    use std::sync::{Arc, Mutex};

    #[test]
    fn registered_hooks_receive_updates() {
        let attribute_calls = Arc::new(Mutex::new(Vec::new()));
        let identify_calls = Arc::new(Mutex::new(Vec::new()));
        let attribute_in_hook = attribute_calls.clone();
        let identify_in_hook = identify_calls.clone();
        let node = create(
            &NodeConfig::default(),
            Box::new(move |endpoint_id, cluster_id, attribute_id| {
                attribute_in_hook
                    .lock()
                    .unwrap()
                    .push((endpoint_id, cluster_id, attribute_id));
            }),
            Box::new(move |endpoint_id| {
                identify_in_hook.lock().unwrap().push(endpoint_id);
            }),
        )
        .unwrap();

        node.attribute_update(ROOT_ENDPOINT_ID, on_off::CLUSTER_ID, 0x0000);
        node.identify(ROOT_ENDPOINT_ID);

        assert_eq!(
            *attribute_calls.lock().unwrap(),
            vec![(ROOT_ENDPOINT_ID, on_off::CLUSTER_ID, 0x0000)]
        );
        assert_eq!(*identify_calls.lock().unwrap(), vec![ROOT_ENDPOINT_ID]);
    }

    #[test]
    fn attribute_update_for_unknown_endpoint_is_dropped() {
        let attribute_calls = Arc::new(Mutex::new(0usize));
        let attribute_in_hook = attribute_calls.clone();
        let node = create(
            &NodeConfig::default(),
            Box::new(move |_, _, _| {
                *attribute_in_hook.lock().unwrap() += 1;
            }),
            Box::new(|_| {}),
        )
        .unwrap();

        node.attribute_update(42, on_off::CLUSTER_ID, 0x0000);
        assert_eq!(*attribute_calls.lock().unwrap(), 0);
    }
}
