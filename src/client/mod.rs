//! Client-side interaction: session resolution, bindings and command
//! dispatch.
//!
//! The application registers one command callback; [`ClientContext`]
//! then turns connect requests and bound-cluster updates into callback
//! invocations, each carrying the open session and the remote endpoint
//! the caller addressed. Establishment failures are logged and the
//! request dropped, never retried.

pub mod binding;
pub mod commands;
pub mod session;

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use log::{debug, warn};
use once_cell::sync::OnceCell;

use crate::{
    constants::{ClusterId, EndpointId, FabricIndex, NodeId},
    Error, Result,
};
use binding::{BindingEntry, BindingTable};
use session::{FabricTable, PeerHandle, PeerId, SessionResolver};

/// Invoked once per resolved request, on the session's context.
pub type CommandCallback = Arc<dyn Fn(&PeerHandle, EndpointId) + Send + Sync>;

struct Waiter {
    callback: CommandCallback,
    remote_endpoint_id: EndpointId,
}

/// Shared client state. One per node.
pub struct ClientContext {
    fabrics: Arc<dyn FabricTable + Send + Sync>,
    sessions: Arc<dyn SessionResolver + Send + Sync>,
    bindings: Mutex<BindingTable>,
    command_callback: OnceCell<CommandCallback>,
    // Requests parked behind an in-flight establishment, keyed by peer.
    // A key's presence means exactly one establishment is running.
    pending: Arc<Mutex<HashMap<PeerId, Vec<Waiter>>>>,
}

impl ClientContext {
    pub fn new(
        fabrics: Arc<dyn FabricTable + Send + Sync>,
        sessions: Arc<dyn SessionResolver + Send + Sync>,
    ) -> Self {
        Self {
            fabrics,
            sessions,
            bindings: Mutex::new(BindingTable::new()),
            command_callback: OnceCell::new(),
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Register the application's command callback. Write-once; a second
    /// registration is an error rather than a silent swap.
    pub fn set_command_callback(&self, callback: CommandCallback) -> Result<()> {
        self.command_callback
            .set(callback)
            .map_err(|_| Error::InvalidState("command callback already registered"))
    }

    pub fn add_binding(&self, entry: BindingEntry) {
        self.bindings.lock().unwrap().add(entry);
    }

    pub fn remove_binding(&self, entry: &BindingEntry) {
        self.bindings.lock().unwrap().remove(entry);
    }

    /// Resolve a session to `node_id` on the fabric at `fabric_index`
    /// and run the registered callback against `remote_endpoint_id`.
    pub fn connect(
        &self,
        fabric_index: FabricIndex,
        node_id: NodeId,
        remote_endpoint_id: EndpointId,
    ) -> Result<()> {
        let callback = self
            .command_callback
            .get()
            .cloned()
            .ok_or(Error::InvalidState("no command callback registered"))?;
        let fabric = self
            .fabrics
            .fabric(fabric_index)
            .ok_or(Error::InvalidFabricIndex(fabric_index))?;
        let peer = fabric.peer_id_for_node(node_id);
        self.resolve_and_dispatch(peer, callback, remote_endpoint_id);
        Ok(())
    }

    /// Fan a bound-cluster update out to every matching binding entry.
    /// Entries whose fabric is gone are skipped with a warning; one bad
    /// entry never blocks the rest of the table.
    pub fn cluster_update(
        &self,
        local_endpoint_id: EndpointId,
        cluster_id: ClusterId,
    ) -> Result<()> {
        let callback = self
            .command_callback
            .get()
            .cloned()
            .ok_or(Error::InvalidState("no command callback registered"))?;

        let targets: Vec<BindingEntry> = {
            let bindings = self.bindings.lock().unwrap();
            bindings
                .matching(local_endpoint_id, cluster_id)
                .copied()
                .collect()
        };
        debug!(
            "cluster {cluster_id:#06x} on endpoint {local_endpoint_id} updated, \
             {} bound target(s)",
            targets.len()
        );
        for entry in targets {
            let Some(fabric) = self.fabrics.fabric(entry.fabric_index) else {
                warn!(
                    "binding to node {:#X} names unknown fabric index {}, skipping",
                    entry.node_id, entry.fabric_index
                );
                continue;
            };
            let peer = fabric.peer_id_for_node(entry.node_id);
            self.resolve_and_dispatch(peer, callback.clone(), entry.remote_endpoint_id);
        }
        Ok(())
    }

    /// Run `callback` once a session to `peer` is available. A cached
    /// session dispatches synchronously; otherwise the request parks
    /// behind the (single) in-flight establishment for this peer.
    fn resolve_and_dispatch(
        &self,
        peer: PeerId,
        callback: CommandCallback,
        remote_endpoint_id: EndpointId,
    ) {
        if let Some(handle) = self.sessions.find_existing_session(peer) {
            callback(&handle, remote_endpoint_id);
            return;
        }

        let first = {
            let mut pending = self.pending.lock().unwrap();
            let waiters = pending.entry(peer).or_default();
            waiters.push(Waiter {
                callback,
                remote_endpoint_id,
            });
            waiters.len() == 1
        };
        if !first {
            return;
        }

        let on_success = {
            let pending = self.pending.clone();
            Box::new(move |handle: PeerHandle| {
                let waiters = pending
                    .lock()
                    .unwrap()
                    .remove(&handle.peer_id)
                    .unwrap_or_default();
                for waiter in waiters {
                    (waiter.callback)(&handle, waiter.remote_endpoint_id);
                }
            })
        };
        let on_failure = {
            let pending = self.pending.clone();
            Box::new(move |peer: PeerId, err: Error| {
                let dropped = pending
                    .lock()
                    .unwrap()
                    .remove(&peer)
                    .map(|w| w.len())
                    .unwrap_or(0);
                warn!("session establishment to {peer} failed ({err}), dropping {dropped} request(s)");
            })
        };
        self.sessions
            .find_or_establish_session(peer, on_success, on_failure);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::session::{
        ExchangeSender, FabricInfo, PendingCommand, SessionFailure, SessionSuccess,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockFabricTable {
        fabrics: Vec<FabricInfo>,
    }

    impl MockFabricTable {
        fn with_fabric(fabric_index: FabricIndex, compressed_fabric_id: u64) -> Arc<Self> {
            Arc::new(Self {
                fabrics: vec![FabricInfo {
                    fabric_index,
                    compressed_fabric_id,
                    local_node_id: 1,
                }],
            })
        }
    }

    impl FabricTable for MockFabricTable {
        fn fabric(&self, fabric_index: FabricIndex) -> Option<FabricInfo> {
            self.fabrics
                .iter()
                .find(|f| f.fabric_index == fabric_index)
                .copied()
        }
    }

    #[derive(Default)]
    struct MockExchange {
        sent: Mutex<Vec<PendingCommand>>,
    }

    impl ExchangeSender for MockExchange {
        fn send_invoke(&self, command: PendingCommand) -> Result<()> {
            self.sent.lock().unwrap().push(command);
            Ok(())
        }
    }

    enum Establish {
        Succeed,
        Fail,
        /// Park the callbacks so the test can settle them later.
        Defer,
    }

    struct MockResolver {
        mode: Establish,
        cached: Mutex<Vec<PeerId>>,
        establish_calls: AtomicUsize,
        deferred: Mutex<Vec<(PeerId, SessionSuccess, SessionFailure)>>,
        exchange: Arc<MockExchange>,
    }

    impl MockResolver {
        fn new(mode: Establish) -> Arc<Self> {
            Arc::new(Self {
                mode,
                cached: Mutex::new(Vec::new()),
                establish_calls: AtomicUsize::new(0),
                deferred: Mutex::new(Vec::new()),
                exchange: Arc::new(MockExchange::default()),
            })
        }

        fn cache(&self, peer: PeerId) {
            self.cached.lock().unwrap().push(peer);
        }

        fn handle(&self, peer: PeerId) -> PeerHandle {
            PeerHandle::new(peer, self.exchange.clone())
        }

        fn settle_deferred_success(&self) {
            for (peer, on_success, _) in self.deferred.lock().unwrap().drain(..) {
                on_success(PeerHandle::new(peer, self.exchange.clone()));
            }
        }
    }

    impl SessionResolver for MockResolver {
        fn find_existing_session(&self, peer: PeerId) -> Option<PeerHandle> {
            self.cached
                .lock()
                .unwrap()
                .contains(&peer)
                .then(|| self.handle(peer))
        }

        fn find_or_establish_session(
            &self,
            peer: PeerId,
            on_success: SessionSuccess,
            on_failure: SessionFailure,
        ) {
            self.establish_calls.fetch_add(1, Ordering::SeqCst);
            match self.mode {
                Establish::Succeed => on_success(self.handle(peer)),
                Establish::Fail => on_failure(peer, Error::SessionEstablishment(peer)),
                Establish::Defer => {
                    self.deferred.lock().unwrap().push((peer, on_success, on_failure));
                }
            }
        }
    }

    fn counting_callback() -> (CommandCallback, Arc<Mutex<Vec<EndpointId>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_in_cb = seen.clone();
        let callback: CommandCallback = Arc::new(move |_peer, endpoint_id| {
            seen_in_cb.lock().unwrap().push(endpoint_id);
        });
        (callback, seen)
    }

    #[test]
    fn connect_requires_a_registered_callback() {
        let ctx = ClientContext::new(
            MockFabricTable::with_fabric(0, 0xAB),
            MockResolver::new(Establish::Succeed),
        );
        assert!(matches!(
            ctx.connect(0, 0x1234, 1),
            Err(Error::InvalidState(_))
        ));
    }

    #[test]
    fn callback_registration_is_write_once() {
        let ctx = ClientContext::new(
            MockFabricTable::with_fabric(0, 0xAB),
            MockResolver::new(Establish::Succeed),
        );
        let (callback, _) = counting_callback();
        ctx.set_command_callback(callback.clone()).unwrap();
        assert!(matches!(
            ctx.set_command_callback(callback),
            Err(Error::InvalidState(_))
        ));
    }

    #[test]
    fn connect_with_cached_session_dispatches_synchronously() {
        let resolver = MockResolver::new(Establish::Succeed);
        resolver.cache(PeerId::new(0xAB, 0x1234));
        let ctx = ClientContext::new(MockFabricTable::with_fabric(0, 0xAB), resolver.clone());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_in_cb = seen.clone();
        ctx.set_command_callback(Arc::new(move |peer, endpoint_id| {
            seen_in_cb.lock().unwrap().push((peer.peer_id, endpoint_id));
        }))
        .unwrap();

        ctx.connect(0, 0x1234, 7).unwrap();
        assert_eq!(
            *seen.lock().unwrap(),
            vec![(PeerId::new(0xAB, 0x1234), 7)]
        );
        assert_eq!(resolver.establish_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn connect_establishes_when_no_session_is_cached() {
        let resolver = MockResolver::new(Establish::Succeed);
        let ctx = ClientContext::new(MockFabricTable::with_fabric(0, 0xAB), resolver.clone());
        let (callback, seen) = counting_callback();
        ctx.set_command_callback(callback).unwrap();

        ctx.connect(0, 0x1234, 3).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![3]);
        assert_eq!(resolver.establish_calls.load(Ordering::SeqCst), 1);
        assert!(ctx.pending.lock().unwrap().is_empty());
    }

    #[test]
    fn establishment_failure_drops_the_request() {
        let resolver = MockResolver::new(Establish::Fail);
        let ctx = ClientContext::new(MockFabricTable::with_fabric(0, 0xAB), resolver.clone());
        let (callback, seen) = counting_callback();
        ctx.set_command_callback(callback).unwrap();

        ctx.connect(0, 0x1234, 3).unwrap();
        assert!(seen.lock().unwrap().is_empty());
        assert!(ctx.pending.lock().unwrap().is_empty());
    }

    #[test]
    fn concurrent_requests_share_one_establishment() {
        let resolver = MockResolver::new(Establish::Defer);
        let ctx = ClientContext::new(MockFabricTable::with_fabric(0, 0xAB), resolver.clone());
        let (callback, seen) = counting_callback();
        ctx.set_command_callback(callback).unwrap();

        ctx.connect(0, 0x1234, 1).unwrap();
        ctx.connect(0, 0x1234, 2).unwrap();
        assert_eq!(resolver.establish_calls.load(Ordering::SeqCst), 1);
        assert!(seen.lock().unwrap().is_empty());

        resolver.settle_deferred_success();
        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
        assert!(ctx.pending.lock().unwrap().is_empty());
    }

    #[test]
    fn cluster_update_fans_out_per_binding_entry() {
        let resolver = MockResolver::new(Establish::Succeed);
        let ctx = ClientContext::new(MockFabricTable::with_fabric(1, 0xAB), resolver.clone());
        let (callback, seen) = counting_callback();
        ctx.set_command_callback(callback).unwrap();

        for (node_id, remote_endpoint_id) in [(10, 1), (11, 2), (12, 3)] {
            ctx.add_binding(BindingEntry {
                local_endpoint_id: 1,
                cluster_id: 0x0006,
                fabric_index: 1,
                node_id,
                remote_endpoint_id,
            });
        }
        // A different cluster's entry must not fire
        ctx.add_binding(BindingEntry {
            local_endpoint_id: 1,
            cluster_id: 0x0008,
            fabric_index: 1,
            node_id: 13,
            remote_endpoint_id: 9,
        });

        ctx.cluster_update(1, 0x0006).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn cluster_update_skips_entries_with_unknown_fabric() {
        let resolver = MockResolver::new(Establish::Succeed);
        let ctx = ClientContext::new(MockFabricTable::with_fabric(1, 0xAB), resolver.clone());
        let (callback, seen) = counting_callback();
        ctx.set_command_callback(callback).unwrap();

        ctx.add_binding(BindingEntry {
            local_endpoint_id: 1,
            cluster_id: 0x0006,
            fabric_index: 9, // not commissioned
            node_id: 10,
            remote_endpoint_id: 1,
        });
        ctx.add_binding(BindingEntry {
            local_endpoint_id: 1,
            cluster_id: 0x0006,
            fabric_index: 1,
            node_id: 11,
            remote_endpoint_id: 2,
        });

        ctx.cluster_update(1, 0x0006).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![2]);
    }

    #[test]
    fn light_node_end_to_end() {
        use crate::{
            client::commands,
            cluster::on_off,
            data_model::{config::NodeConfig, device_type, node, EndpointFlags},
        };

        // Compose a node with an on/off light on endpoint 1
        let mut node = node::create(
            &NodeConfig::default(),
            Box::new(|_, _, _| {}),
            Box::new(|_| {}),
        )
        .unwrap();
        let light = device_type::create(
            &mut node,
            &device_type::ON_OFF_LIGHT,
            &Default::default(),
            EndpointFlags::empty(),
        )
        .unwrap();
        assert_eq!(light, 1);

        // Fabric 0 knows node 0x1234 and already holds a session to it
        let resolver = MockResolver::new(Establish::Succeed);
        resolver.cache(PeerId::new(0xAB, 0x1234));
        let ctx = ClientContext::new(MockFabricTable::with_fabric(0, 0xAB), resolver.clone());

        let ok = Arc::new(AtomicUsize::new(0));
        let bad = Arc::new(AtomicUsize::new(0));
        let ok_in_cb = ok.clone();
        let bad_in_cb = bad.clone();
        ctx.set_command_callback(Arc::new(move |peer, endpoint_id| {
            commands::send_command_on(
                peer,
                endpoint_id,
                Some({
                    let ok = ok_in_cb.clone();
                    Box::new(move || {
                        ok.fetch_add(1, Ordering::SeqCst);
                    })
                }),
                Some({
                    let bad = bad_in_cb.clone();
                    Box::new(move |_| {
                        bad.fetch_add(1, Ordering::SeqCst);
                    })
                }),
            )
            .unwrap();
        }))
        .unwrap();

        ctx.connect(0, 0x1234, light).unwrap();

        // The invoke is now parked on the exchange; the peer answers
        let command = resolver.exchange.sent.lock().unwrap().pop().unwrap();
        assert_eq!(command.path.endpoint_id, light);
        assert_eq!(command.path.cluster_id, on_off::CLUSTER_ID);
        command.succeed();
        assert_eq!(ok.load(Ordering::SeqCst), 1);
        assert_eq!(bad.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn connect_rejects_unknown_fabric_index() {
        let ctx = ClientContext::new(
            MockFabricTable::with_fabric(0, 0xAB),
            MockResolver::new(Establish::Succeed),
        );
        let (callback, _) = counting_callback();
        ctx.set_command_callback(callback).unwrap();
        assert!(matches!(
            ctx.connect(5, 0x1234, 1),
            Err(Error::InvalidFabricIndex(5))
        ));
    }
}
