//! Secure-session resolution against remote peers (4.13).
//!
//! The transport below us is abstracted behind two traits: a
//! [`FabricTable`] that maps fabric indices to operational identity, and
//! a [`SessionResolver`] that either hands back an existing session or
//! establishes one asynchronously. The rest of the client layer only
//! ever sees a [`PeerHandle`].

use std::sync::Arc;

use crate::{
    constants::{CommandId, EndpointId, FabricIndex, NodeId},
    Error, Result, TlvAnyData,
};

/// Operational identity of a remote node, scoped to one fabric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeerId {
    pub compressed_fabric_id: u64,
    pub node_id: NodeId,
}

impl PeerId {
    pub const fn new(compressed_fabric_id: u64, node_id: NodeId) -> Self {
        Self {
            compressed_fabric_id,
            node_id,
        }
    }
}

impl core::fmt::Display for PeerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:016X}:{:016X}",
            self.compressed_fabric_id, self.node_id
        )
    }
}

/// Local view of one commissioned fabric.
#[derive(Debug, Clone, Copy)]
pub struct FabricInfo {
    pub fabric_index: FabricIndex,
    pub compressed_fabric_id: u64,
    pub local_node_id: NodeId,
}

impl FabricInfo {
    /// Identity of `node_id` as seen from this fabric.
    pub fn peer_id_for_node(&self, node_id: NodeId) -> PeerId {
        PeerId::new(self.compressed_fabric_id, node_id)
    }
}

pub trait FabricTable {
    fn fabric(&self, fabric_index: FabricIndex) -> Option<FabricInfo>;
}

/// An open secure session, ready to carry invokes.
#[derive(Clone)]
pub struct PeerHandle {
    pub peer_id: PeerId,
    pub exchange: Arc<dyn ExchangeSender + Send + Sync>,
}

impl PeerHandle {
    pub fn new(peer_id: PeerId, exchange: Arc<dyn ExchangeSender + Send + Sync>) -> Self {
        Self { peer_id, exchange }
    }
}

impl core::fmt::Debug for PeerHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PeerHandle")
            .field("peer_id", &self.peer_id)
            .finish_non_exhaustive()
    }
}

pub type SessionSuccess = Box<dyn FnOnce(PeerHandle) + Send>;
pub type SessionFailure = Box<dyn FnOnce(PeerId, Error) + Send>;

pub trait SessionResolver {
    /// Cheap lookup of an already established session.
    fn find_existing_session(&self, peer: PeerId) -> Option<PeerHandle>;

    /// Start establishing a session to `peer`, invoking exactly one of
    /// the two callbacks when the attempt settles. Implementations may
    /// complete synchronously.
    fn find_or_establish_session(
        &self,
        peer: PeerId,
        on_success: SessionSuccess,
        on_failure: SessionFailure,
    );
}

/// Path addressing a single command on a single remote cluster instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandPath {
    pub endpoint_id: EndpointId,
    pub cluster_id: u32,
    pub command_id: CommandId,
}

pub type InvokeSuccess = Box<dyn FnOnce() + Send>;
pub type InvokeFailure = Box<dyn FnOnce(Error) + Send>;

/// One in-flight invoke. Held by the exchange layer until the response
/// (or failure) arrives, then released through exactly one of
/// [`succeed`](Self::succeed) or [`fail`](Self::fail); consuming `self`
/// makes double release unrepresentable.
pub struct PendingCommand {
    pub node_id: NodeId,
    pub path: CommandPath,
    pub payload: TlvAnyData,
    on_success: Option<InvokeSuccess>,
    on_failure: Option<InvokeFailure>,
}

impl PendingCommand {
    pub fn new(
        node_id: NodeId,
        path: CommandPath,
        payload: TlvAnyData,
        on_success: Option<InvokeSuccess>,
        on_failure: Option<InvokeFailure>,
    ) -> Self {
        Self {
            node_id,
            path,
            payload,
            on_success,
            on_failure,
        }
    }

    pub fn succeed(mut self) {
        if let Some(cb) = self.on_success.take() {
            cb();
        }
    }

    pub fn fail(mut self, err: Error) {
        if let Some(cb) = self.on_failure.take() {
            cb(err);
        }
    }
}

impl core::fmt::Debug for PendingCommand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PendingCommand")
            .field("node_id", &self.node_id)
            .field("path", &self.path)
            .field("payload_len", &self.payload.len())
            .finish_non_exhaustive()
    }
}

pub trait ExchangeSender {
    /// Hand an invoke to the transport. Ownership of the command moves
    /// to the exchange, which settles it when the peer answers.
    fn send_invoke(&self, command: PendingCommand) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    fn path() -> CommandPath {
        CommandPath {
            endpoint_id: 1,
            cluster_id: 0x0006,
            command_id: 0x01,
        }
    }

    #[test]
    fn pending_command_settles_success_only() {
        let ok = Arc::new(AtomicUsize::new(0));
        let bad = Arc::new(AtomicUsize::new(0));
        let cmd = PendingCommand::new(
            0x1234,
            path(),
            TlvAnyData::new(),
            Some({
                let ok = ok.clone();
                Box::new(move || {
                    ok.fetch_add(1, Ordering::SeqCst);
                })
            }),
            Some({
                let bad = bad.clone();
                Box::new(move |_| {
                    bad.fetch_add(1, Ordering::SeqCst);
                })
            }),
        );
        cmd.succeed();
        assert_eq!(ok.load(Ordering::SeqCst), 1);
        assert_eq!(bad.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn pending_command_without_callbacks_settles_quietly() {
        let cmd = PendingCommand::new(1, path(), TlvAnyData::new(), None, None);
        cmd.fail(Error::NoSession(PeerId::new(0, 1)));
    }

    #[test]
    fn peer_id_is_fabric_scoped() {
        let fabric = FabricInfo {
            fabric_index: 1,
            compressed_fabric_id: 0xABCD,
            local_node_id: 1,
        };
        let other = FabricInfo {
            fabric_index: 2,
            compressed_fabric_id: 0xEF01,
            local_node_id: 1,
        };
        assert_ne!(fabric.peer_id_for_node(7), other.peer_id_for_node(7));
        assert_eq!(fabric.peer_id_for_node(7), PeerId::new(0xABCD, 7));
    }
}
