//! On/Off cluster (1.5)

use crate::{
    client::commands::Command,
    constants::{ClusterId, CommandId},
    data_model::{config::OnOffConfig, Attribute, AttributeValue},
    tlv::Encoder,
};

pub const CLUSTER_ID: ClusterId = 0x0006;
pub const CLUSTER_REVISION: u8 = 6;

pub mod feature {
    pub const LIGHTING: u32 = 0x01;
    pub const DEAD_FRONT_BEHAVIOR: u32 = 0x02;
    pub const OFF_ONLY: u32 = 0x04;
}

#[repr(u32)]
#[derive(FromPrimitive)]
pub enum Attributes {
    OnOff = 0x0000,
    GlobalSceneControl = 0x4000,
    OnTime = 0x4001,
    OffWaitTime = 0x4002,
    StartUpOnOff = 0x4003,
}

#[repr(u32)]
#[derive(FromPrimitive)]
pub enum Commands {
    Off = 0x00,
    On = 0x01,
    Toggle = 0x02,
    OffWithEffect = 0x40,
    OnWithRecallGlobalScene = 0x41,
    OnWithTimedOff = 0x42,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, FromPrimitive)]
pub enum StartUpOnOff {
    Off = 0,
    On = 1,
    Toggle = 2,
}

pub(crate) fn attributes(config: &OnOffConfig, features: u32) -> Vec<Attribute> {
    let mut attrs = vec![Attribute {
        id: Attributes::OnOff as _,
        value: AttributeValue::Boolean(config.on_off),
    }];
    if features & feature::LIGHTING != 0 {
        attrs.push(Attribute {
            id: Attributes::GlobalSceneControl as _,
            value: AttributeValue::Boolean(true),
        });
        attrs.push(Attribute {
            id: Attributes::OnTime as _,
            value: AttributeValue::U16(0),
        });
        attrs.push(Attribute {
            id: Attributes::OffWaitTime as _,
            value: AttributeValue::U16(0),
        });
        attrs.push(Attribute {
            id: Attributes::StartUpOnOff as _,
            value: AttributeValue::U8(config.start_up_on_off),
        });
    }
    attrs
}

pub(crate) fn accepted_commands() -> Vec<CommandId> {
    vec![
        Commands::Off as _,
        Commands::On as _,
        Commands::Toggle as _,
    ]
}

/// Command payloads. Field-free commands encode an empty structure.
pub mod commands {
    use super::*;

    pub struct On;

    impl Command for On {
        const CLUSTER_ID: ClusterId = super::CLUSTER_ID;
        const COMMAND_ID: CommandId = Commands::On as _;

        fn encode_fields(&self, _encoder: &mut Encoder) {}
    }

    pub struct Off;

    impl Command for Off {
        const CLUSTER_ID: ClusterId = super::CLUSTER_ID;
        const COMMAND_ID: CommandId = Commands::Off as _;

        fn encode_fields(&self, _encoder: &mut Encoder) {}
    }

    pub struct Toggle;

    impl Command for Toggle {
        const CLUSTER_ID: ClusterId = super::CLUSTER_ID;
        const COMMAND_ID: CommandId = Commands::Toggle as _;

        fn encode_fields(&self, _encoder: &mut Encoder) {}
    }
}
