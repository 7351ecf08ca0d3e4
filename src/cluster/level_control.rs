//! Level Control cluster (1.6)

use crate::{
    client::commands::Command,
    constants::{ClusterId, CommandId},
    data_model::{config::LevelControlConfig, Attribute, AttributeValue},
    tlv::Encoder,
};

pub const CLUSTER_ID: ClusterId = 0x0008;
pub const CLUSTER_REVISION: u8 = 5;

pub mod feature {
    pub const ON_OFF: u32 = 0x01;
    pub const LIGHTING: u32 = 0x02;
    pub const FREQUENCY: u32 = 0x04;
}

#[repr(u32)]
#[derive(FromPrimitive)]
pub enum Attributes {
    CurrentLevel = 0x0000,
    RemainingTime = 0x0001,
    MinLevel = 0x0002,
    MaxLevel = 0x0003,
    CurrentFrequency = 0x0004,
    OnLevel = 0x0011,
    StartUpCurrentLevel = 0x4000,
}

#[repr(u32)]
#[derive(FromPrimitive)]
pub enum Commands {
    MoveToLevel = 0x00,
    Move = 0x01,
    Step = 0x02,
    Stop = 0x03,
    MoveToLevelWithOnOff = 0x04,
    MoveWithOnOff = 0x05,
    StepWithOnOff = 0x06,
    StopWithOnOff = 0x07,
}

/// Direction for `Move` commands. Raw values travel unvalidated; the enum
/// exists for callers' convenience.
#[repr(u8)]
#[derive(Debug, Clone, Copy, FromPrimitive)]
pub enum MoveMode {
    Up = 0,
    Down = 1,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, FromPrimitive)]
pub enum StepMode {
    Up = 0,
    Down = 1,
}

pub(crate) fn attributes(config: &LevelControlConfig, features: u32) -> Vec<Attribute> {
    let mut attrs = vec![Attribute {
        id: Attributes::CurrentLevel as _,
        value: AttributeValue::U8(config.current_level),
    }];
    if features & feature::LIGHTING != 0 {
        attrs.push(Attribute {
            id: Attributes::RemainingTime as _,
            value: AttributeValue::U16(0),
        });
        attrs.push(Attribute {
            id: Attributes::MinLevel as _,
            value: AttributeValue::U8(config.min_level),
        });
        attrs.push(Attribute {
            id: Attributes::MaxLevel as _,
            value: AttributeValue::U8(config.max_level),
        });
        attrs.push(Attribute {
            id: Attributes::StartUpCurrentLevel as _,
            value: AttributeValue::U8(config.current_level),
        });
    }
    if features & feature::ON_OFF != 0 {
        attrs.push(Attribute {
            id: Attributes::OnLevel as _,
            value: AttributeValue::U8(config.on_level),
        });
    }
    attrs
}

pub(crate) fn accepted_commands() -> Vec<CommandId> {
    vec![
        Commands::MoveToLevel as _,
        Commands::Move as _,
        Commands::Step as _,
        Commands::Stop as _,
        Commands::MoveToLevelWithOnOff as _,
        Commands::MoveWithOnOff as _,
        Commands::StepWithOnOff as _,
        Commands::StopWithOnOff as _,
    ]
}

pub mod commands {
    use super::*;

    pub struct MoveToLevel {
        pub level: u8,
        pub transition_time: u16,
        pub option_mask: u8,
        pub option_override: u8,
    }

    impl Command for MoveToLevel {
        const CLUSTER_ID: ClusterId = super::CLUSTER_ID;
        const COMMAND_ID: CommandId = Commands::MoveToLevel as _;

        fn encode_fields(&self, encoder: &mut Encoder) {
            encoder.write_u8(0, self.level);
            encoder.write_u16(1, self.transition_time);
            encoder.write_u8(2, self.option_mask);
            encoder.write_u8(3, self.option_override);
        }
    }

    pub struct Move {
        pub move_mode: u8,
        pub rate: u8,
        pub option_mask: u8,
        pub option_override: u8,
    }

    impl Command for Move {
        const CLUSTER_ID: ClusterId = super::CLUSTER_ID;
        const COMMAND_ID: CommandId = Commands::Move as _;

        fn encode_fields(&self, encoder: &mut Encoder) {
            encoder.write_u8(0, self.move_mode);
            encoder.write_u8(1, self.rate);
            encoder.write_u8(2, self.option_mask);
            encoder.write_u8(3, self.option_override);
        }
    }

    pub struct Step {
        pub step_mode: u8,
        pub step_size: u8,
        pub transition_time: u16,
        pub option_mask: u8,
        pub option_override: u8,
    }

    impl Command for Step {
        const CLUSTER_ID: ClusterId = super::CLUSTER_ID;
        const COMMAND_ID: CommandId = Commands::Step as _;

        fn encode_fields(&self, encoder: &mut Encoder) {
            encoder.write_u8(0, self.step_mode);
            encoder.write_u8(1, self.step_size);
            encoder.write_u16(2, self.transition_time);
            encoder.write_u8(3, self.option_mask);
            encoder.write_u8(4, self.option_override);
        }
    }

    pub struct Stop {
        pub option_mask: u8,
        pub option_override: u8,
    }

    impl Command for Stop {
        const CLUSTER_ID: ClusterId = super::CLUSTER_ID;
        const COMMAND_ID: CommandId = Commands::Stop as _;

        fn encode_fields(&self, encoder: &mut Encoder) {
            encoder.write_u8(0, self.option_mask);
            encoder.write_u8(1, self.option_override);
        }
    }

    pub struct MoveToLevelWithOnOff {
        pub level: u8,
        pub transition_time: u16,
    }

    impl Command for MoveToLevelWithOnOff {
        const CLUSTER_ID: ClusterId = super::CLUSTER_ID;
        const COMMAND_ID: CommandId = Commands::MoveToLevelWithOnOff as _;

        fn encode_fields(&self, encoder: &mut Encoder) {
            encoder.write_u8(0, self.level);
            encoder.write_u16(1, self.transition_time);
        }
    }

    pub struct MoveWithOnOff {
        pub move_mode: u8,
        pub rate: u8,
    }

    impl Command for MoveWithOnOff {
        const CLUSTER_ID: ClusterId = super::CLUSTER_ID;
        const COMMAND_ID: CommandId = Commands::MoveWithOnOff as _;

        fn encode_fields(&self, encoder: &mut Encoder) {
            encoder.write_u8(0, self.move_mode);
            encoder.write_u8(1, self.rate);
        }
    }

    pub struct StepWithOnOff {
        pub step_mode: u8,
        pub step_size: u8,
        pub transition_time: u16,
    }

    impl Command for StepWithOnOff {
        const CLUSTER_ID: ClusterId = super::CLUSTER_ID;
        const COMMAND_ID: CommandId = Commands::StepWithOnOff as _;

        fn encode_fields(&self, encoder: &mut Encoder) {
            encoder.write_u8(0, self.step_mode);
            encoder.write_u8(1, self.step_size);
            encoder.write_u16(2, self.transition_time);
        }
    }

    pub struct StopWithOnOff;

    impl Command for StopWithOnOff {
        const CLUSTER_ID: ClusterId = super::CLUSTER_ID;
        const COMMAND_ID: CommandId = Commands::StopWithOnOff as _;

        fn encode_fields(&self, _encoder: &mut Encoder) {}
    }
}
