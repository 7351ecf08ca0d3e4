//! Client-side command invocation (8.2).
//!
//! [`Command`] types carry their own addressing constants and field
//! encoding; [`send_command`] wraps the fields in the payload structure
//! and hands the invoke to the peer's exchange. The per-command wrappers
//! below keep call sites flat for the common lighting clusters.

use crate::{
    client::session::{
        CommandPath, InvokeFailure, InvokeSuccess, PeerHandle, PendingCommand,
    },
    cluster::{color_control, level_control, on_off},
    constants::{ClusterId, CommandId, EndpointId},
    tlv::Encoder,
    Result,
};

/// A typed command request for one cluster.
pub trait Command {
    const CLUSTER_ID: ClusterId;
    const COMMAND_ID: CommandId;

    /// Encode the request fields, context-tagged in field order. The
    /// enclosing structure is written by the dispatcher.
    fn encode_fields(&self, encoder: &mut Encoder);
}

/// Encode `request` and hand it to `peer`'s exchange, addressed at
/// `endpoint_id`. At most one of the callbacks fires, when the invoke
/// settles.
pub fn send_command<T: Command>(
    peer: &PeerHandle,
    endpoint_id: EndpointId,
    request: &T,
    on_success: Option<InvokeSuccess>,
    on_failure: Option<InvokeFailure>,
) -> Result<()> {
    let mut encoder = Encoder::default();
    encoder.start_structure();
    request.encode_fields(&mut encoder);
    encoder.end_container();

    let path = CommandPath {
        endpoint_id,
        cluster_id: T::CLUSTER_ID,
        command_id: T::COMMAND_ID,
    };
    let command = PendingCommand::new(
        peer.peer_id.node_id,
        path,
        encoder.inner(),
        on_success,
        on_failure,
    );
    peer.exchange.send_invoke(command)
}

pub fn send_command_on(
    peer: &PeerHandle,
    endpoint_id: EndpointId,
    on_success: Option<InvokeSuccess>,
    on_failure: Option<InvokeFailure>,
) -> Result<()> {
    send_command(peer, endpoint_id, &on_off::commands::On, on_success, on_failure)
}

pub fn send_command_off(
    peer: &PeerHandle,
    endpoint_id: EndpointId,
    on_success: Option<InvokeSuccess>,
    on_failure: Option<InvokeFailure>,
) -> Result<()> {
    send_command(peer, endpoint_id, &on_off::commands::Off, on_success, on_failure)
}

pub fn send_command_toggle(
    peer: &PeerHandle,
    endpoint_id: EndpointId,
    on_success: Option<InvokeSuccess>,
    on_failure: Option<InvokeFailure>,
) -> Result<()> {
    send_command(peer, endpoint_id, &on_off::commands::Toggle, on_success, on_failure)
}

#[allow(clippy::too_many_arguments)]
pub fn send_command_move_to_level(
    peer: &PeerHandle,
    endpoint_id: EndpointId,
    level: u8,
    transition_time: u16,
    option_mask: u8,
    option_override: u8,
    on_success: Option<InvokeSuccess>,
    on_failure: Option<InvokeFailure>,
) -> Result<()> {
    let request = level_control::commands::MoveToLevel {
        level,
        transition_time,
        option_mask,
        option_override,
    };
    send_command(peer, endpoint_id, &request, on_success, on_failure)
}

#[allow(clippy::too_many_arguments)]
pub fn send_command_move(
    peer: &PeerHandle,
    endpoint_id: EndpointId,
    move_mode: u8,
    rate: u8,
    option_mask: u8,
    option_override: u8,
    on_success: Option<InvokeSuccess>,
    on_failure: Option<InvokeFailure>,
) -> Result<()> {
    let request = level_control::commands::Move {
        move_mode,
        rate,
        option_mask,
        option_override,
    };
    send_command(peer, endpoint_id, &request, on_success, on_failure)
}

#[allow(clippy::too_many_arguments)]
pub fn send_command_step(
    peer: &PeerHandle,
    endpoint_id: EndpointId,
    step_mode: u8,
    step_size: u8,
    transition_time: u16,
    option_mask: u8,
    option_override: u8,
    on_success: Option<InvokeSuccess>,
    on_failure: Option<InvokeFailure>,
) -> Result<()> {
    let request = level_control::commands::Step {
        step_mode,
        step_size,
        transition_time,
        option_mask,
        option_override,
    };
    send_command(peer, endpoint_id, &request, on_success, on_failure)
}

pub fn send_command_stop(
    peer: &PeerHandle,
    endpoint_id: EndpointId,
    option_mask: u8,
    option_override: u8,
    on_success: Option<InvokeSuccess>,
    on_failure: Option<InvokeFailure>,
) -> Result<()> {
    let request = level_control::commands::Stop {
        option_mask,
        option_override,
    };
    send_command(peer, endpoint_id, &request, on_success, on_failure)
}

pub fn send_command_move_to_level_with_on_off(
    peer: &PeerHandle,
    endpoint_id: EndpointId,
    level: u8,
    transition_time: u16,
    on_success: Option<InvokeSuccess>,
    on_failure: Option<InvokeFailure>,
) -> Result<()> {
    let request = level_control::commands::MoveToLevelWithOnOff {
        level,
        transition_time,
    };
    send_command(peer, endpoint_id, &request, on_success, on_failure)
}

pub fn send_command_move_with_on_off(
    peer: &PeerHandle,
    endpoint_id: EndpointId,
    move_mode: u8,
    rate: u8,
    on_success: Option<InvokeSuccess>,
    on_failure: Option<InvokeFailure>,
) -> Result<()> {
    let request = level_control::commands::MoveWithOnOff { move_mode, rate };
    send_command(peer, endpoint_id, &request, on_success, on_failure)
}

#[allow(clippy::too_many_arguments)]
pub fn send_command_step_with_on_off(
    peer: &PeerHandle,
    endpoint_id: EndpointId,
    step_mode: u8,
    step_size: u8,
    transition_time: u16,
    on_success: Option<InvokeSuccess>,
    on_failure: Option<InvokeFailure>,
) -> Result<()> {
    let request = level_control::commands::StepWithOnOff {
        step_mode,
        step_size,
        transition_time,
    };
    send_command(peer, endpoint_id, &request, on_success, on_failure)
}

pub fn send_command_stop_with_on_off(
    peer: &PeerHandle,
    endpoint_id: EndpointId,
    on_success: Option<InvokeSuccess>,
    on_failure: Option<InvokeFailure>,
) -> Result<()> {
    send_command(
        peer,
        endpoint_id,
        &level_control::commands::StopWithOnOff,
        on_success,
        on_failure,
    )
}

#[allow(clippy::too_many_arguments)]
pub fn send_command_move_hue(
    peer: &PeerHandle,
    endpoint_id: EndpointId,
    move_mode: u8,
    rate: u8,
    options_mask: u8,
    options_override: u8,
    on_success: Option<InvokeSuccess>,
    on_failure: Option<InvokeFailure>,
) -> Result<()> {
    let request = color_control::commands::MoveHue {
        move_mode,
        rate,
        options_mask,
        options_override,
    };
    send_command(peer, endpoint_id, &request, on_success, on_failure)
}

#[allow(clippy::too_many_arguments)]
pub fn send_command_move_saturation(
    peer: &PeerHandle,
    endpoint_id: EndpointId,
    move_mode: u8,
    rate: u8,
    options_mask: u8,
    options_override: u8,
    on_success: Option<InvokeSuccess>,
    on_failure: Option<InvokeFailure>,
) -> Result<()> {
    let request = color_control::commands::MoveSaturation {
        move_mode,
        rate,
        options_mask,
        options_override,
    };
    send_command(peer, endpoint_id, &request, on_success, on_failure)
}

#[allow(clippy::too_many_arguments)]
pub fn send_command_move_to_hue(
    peer: &PeerHandle,
    endpoint_id: EndpointId,
    hue: u8,
    direction: u8,
    transition_time: u16,
    options_mask: u8,
    options_override: u8,
    on_success: Option<InvokeSuccess>,
    on_failure: Option<InvokeFailure>,
) -> Result<()> {
    let request = color_control::commands::MoveToHue {
        hue,
        direction,
        transition_time,
        options_mask,
        options_override,
    };
    send_command(peer, endpoint_id, &request, on_success, on_failure)
}

#[allow(clippy::too_many_arguments)]
pub fn send_command_move_to_hue_and_saturation(
    peer: &PeerHandle,
    endpoint_id: EndpointId,
    hue: u8,
    saturation: u8,
    transition_time: u16,
    options_mask: u8,
    options_override: u8,
    on_success: Option<InvokeSuccess>,
    on_failure: Option<InvokeFailure>,
) -> Result<()> {
    let request = color_control::commands::MoveToHueAndSaturation {
        hue,
        saturation,
        transition_time,
        options_mask,
        options_override,
    };
    send_command(peer, endpoint_id, &request, on_success, on_failure)
}

#[allow(clippy::too_many_arguments)]
pub fn send_command_move_to_saturation(
    peer: &PeerHandle,
    endpoint_id: EndpointId,
    saturation: u8,
    transition_time: u16,
    options_mask: u8,
    options_override: u8,
    on_success: Option<InvokeSuccess>,
    on_failure: Option<InvokeFailure>,
) -> Result<()> {
    let request = color_control::commands::MoveToSaturation {
        saturation,
        transition_time,
        options_mask,
        options_override,
    };
    send_command(peer, endpoint_id, &request, on_success, on_failure)
}

#[allow(clippy::too_many_arguments)]
pub fn send_command_step_hue(
    peer: &PeerHandle,
    endpoint_id: EndpointId,
    step_mode: u8,
    step_size: u8,
    transition_time: u16,
    options_mask: u8,
    options_override: u8,
    on_success: Option<InvokeSuccess>,
    on_failure: Option<InvokeFailure>,
) -> Result<()> {
    let request = color_control::commands::StepHue {
        step_mode,
        step_size,
        transition_time,
        options_mask,
        options_override,
    };
    send_command(peer, endpoint_id, &request, on_success, on_failure)
}

#[allow(clippy::too_many_arguments)]
pub fn send_command_step_saturation(
    peer: &PeerHandle,
    endpoint_id: EndpointId,
    step_mode: u8,
    step_size: u8,
    transition_time: u16,
    options_mask: u8,
    options_override: u8,
    on_success: Option<InvokeSuccess>,
    on_failure: Option<InvokeFailure>,
) -> Result<()> {
    let request = color_control::commands::StepSaturation {
        step_mode,
        step_size,
        transition_time,
        options_mask,
        options_override,
    };
    send_command(peer, endpoint_id, &request, on_success, on_failure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::session::{ExchangeSender, PeerId, PendingCommand};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingExchange {
        sent: Mutex<Vec<PendingCommand>>,
    }

    impl ExchangeSender for RecordingExchange {
        fn send_invoke(&self, command: PendingCommand) -> Result<()> {
            self.sent.lock().unwrap().push(command);
            Ok(())
        }
    }

    fn peer(exchange: Arc<RecordingExchange>) -> PeerHandle {
        PeerHandle::new(PeerId::new(0xAB, 0x1234), exchange)
    }

    #[test]
    fn send_command_addresses_the_request() {
        let exchange = Arc::new(RecordingExchange::default());
        send_command_toggle(&peer(exchange.clone()), 7, None, None).unwrap();

        let sent = exchange.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].node_id, 0x1234);
        assert_eq!(sent[0].path.endpoint_id, 7);
        assert_eq!(sent[0].path.cluster_id, on_off::CLUSTER_ID);
        assert_eq!(sent[0].path.command_id, on_off::commands::Toggle::COMMAND_ID);
        // Field-free commands still carry the payload structure
        assert_eq!(sent[0].payload.as_slice(), &[0x15, 0x18]);
    }

    #[test]
    fn move_to_level_encodes_fields_in_order() {
        let exchange = Arc::new(RecordingExchange::default());
        send_command_move_to_level(&peer(exchange.clone()), 1, 0x40, 0x000A, 0, 0, None, None)
            .unwrap();

        let sent = exchange.sent.lock().unwrap();
        assert_eq!(sent[0].path.cluster_id, level_control::CLUSTER_ID);
        assert_eq!(
            sent[0].payload.as_slice(),
            &[
                0x15, // structure
                0x24, 0x00, 0x40, // level
                0x25, 0x01, 0x0A, 0x00, // transition time
                0x24, 0x02, 0x00, // option mask
                0x24, 0x03, 0x00, // option override
                0x18, // end
            ]
        );
    }

    #[test]
    fn invoke_callbacks_travel_with_the_command() {
        let exchange = Arc::new(RecordingExchange::default());
        let fired = Arc::new(Mutex::new(0));
        let fired_in_cb = fired.clone();
        send_command_on(
            &peer(exchange.clone()),
            1,
            Some(Box::new(move || *fired_in_cb.lock().unwrap() += 1)),
            None,
        )
        .unwrap();

        let command = exchange.sent.lock().unwrap().pop().unwrap();
        command.succeed();
        assert_eq!(*fired.lock().unwrap(), 1);
    }
}
