//! Color Control cluster (3.2)

use crate::{
    client::commands::Command,
    constants::{ClusterId, CommandId},
    data_model::{config::ColorControlConfig, Attribute, AttributeValue},
    tlv::Encoder,
};

pub const CLUSTER_ID: ClusterId = 0x0300;
pub const CLUSTER_REVISION: u8 = 6;

pub mod feature {
    pub const HUE_SATURATION: u32 = 0x01;
    pub const ENHANCED_HUE: u32 = 0x02;
    pub const COLOR_LOOP: u32 = 0x04;
    pub const XY: u32 = 0x08;
    pub const COLOR_TEMPERATURE: u32 = 0x10;
}

#[repr(u32)]
#[derive(FromPrimitive)]
pub enum Attributes {
    CurrentHue = 0x0000,
    CurrentSaturation = 0x0001,
    CurrentX = 0x0003,
    CurrentY = 0x0004,
    ColorTemperatureMireds = 0x0007,
    ColorMode = 0x0008,
    EnhancedColorMode = 0x4001,
}

#[repr(u32)]
#[derive(FromPrimitive)]
pub enum Commands {
    MoveToHue = 0x00,
    MoveHue = 0x01,
    StepHue = 0x02,
    MoveToSaturation = 0x03,
    MoveSaturation = 0x04,
    StepSaturation = 0x05,
    MoveToHueAndSaturation = 0x06,
    MoveToColor = 0x07,
    MoveToColorTemperature = 0x0A,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, FromPrimitive)]
pub enum HueMoveMode {
    Stop = 0,
    Up = 1,
    Down = 3,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, FromPrimitive)]
pub enum HueStepMode {
    Up = 1,
    Down = 3,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, FromPrimitive)]
pub enum HueDirection {
    ShortestDistance = 0,
    LongestDistance = 1,
    Up = 2,
    Down = 3,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, FromPrimitive)]
pub enum SaturationMoveMode {
    Stop = 0,
    Up = 1,
    Down = 3,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, FromPrimitive)]
pub enum SaturationStepMode {
    Up = 1,
    Down = 3,
}

pub(crate) fn attributes(config: &ColorControlConfig, features: u32) -> Vec<Attribute> {
    let mut attrs = vec![
        Attribute {
            id: Attributes::ColorMode as _,
            value: AttributeValue::U8(config.color_mode),
        },
        Attribute {
            id: Attributes::EnhancedColorMode as _,
            value: AttributeValue::U8(config.enhanced_color_mode),
        },
    ];
    if features & feature::HUE_SATURATION != 0 {
        attrs.push(Attribute {
            id: Attributes::CurrentHue as _,
            value: AttributeValue::U8(config.current_hue),
        });
        attrs.push(Attribute {
            id: Attributes::CurrentSaturation as _,
            value: AttributeValue::U8(config.current_saturation),
        });
    }
    if features & feature::XY != 0 {
        attrs.push(Attribute {
            id: Attributes::CurrentX as _,
            value: AttributeValue::U16(config.current_x),
        });
        attrs.push(Attribute {
            id: Attributes::CurrentY as _,
            value: AttributeValue::U16(config.current_y),
        });
    }
    if features & feature::COLOR_TEMPERATURE != 0 {
        attrs.push(Attribute {
            id: Attributes::ColorTemperatureMireds as _,
            value: AttributeValue::U16(config.color_temperature_mireds),
        });
    }
    attrs
}

pub(crate) fn accepted_commands(features: u32) -> Vec<CommandId> {
    let mut commands = Vec::new();
    if features & feature::HUE_SATURATION != 0 {
        commands.extend([
            Commands::MoveToHue as CommandId,
            Commands::MoveHue as CommandId,
            Commands::StepHue as CommandId,
            Commands::MoveToSaturation as CommandId,
            Commands::MoveSaturation as CommandId,
            Commands::StepSaturation as CommandId,
            Commands::MoveToHueAndSaturation as CommandId,
        ]);
    }
    if features & feature::XY != 0 {
        commands.push(Commands::MoveToColor as _);
    }
    if features & feature::COLOR_TEMPERATURE != 0 {
        commands.push(Commands::MoveToColorTemperature as _);
    }
    commands
}

pub mod commands {
    use super::*;

    pub struct MoveHue {
        pub move_mode: u8,
        pub rate: u8,
        pub options_mask: u8,
        pub options_override: u8,
    }

    impl Command for MoveHue {
        const CLUSTER_ID: ClusterId = super::CLUSTER_ID;
        const COMMAND_ID: CommandId = Commands::MoveHue as _;

        fn encode_fields(&self, encoder: &mut Encoder) {
            encoder.write_u8(0, self.move_mode);
            encoder.write_u8(1, self.rate);
            encoder.write_u8(2, self.options_mask);
            encoder.write_u8(3, self.options_override);
        }
    }

    pub struct MoveSaturation {
        pub move_mode: u8,
        pub rate: u8,
        pub options_mask: u8,
        pub options_override: u8,
    }

    impl Command for MoveSaturation {
        const CLUSTER_ID: ClusterId = super::CLUSTER_ID;
        const COMMAND_ID: CommandId = Commands::MoveSaturation as _;

        fn encode_fields(&self, encoder: &mut Encoder) {
            encoder.write_u8(0, self.move_mode);
            encoder.write_u8(1, self.rate);
            encoder.write_u8(2, self.options_mask);
            encoder.write_u8(3, self.options_override);
        }
    }

    pub struct MoveToHue {
        pub hue: u8,
        pub direction: u8,
        pub transition_time: u16,
        pub options_mask: u8,
        pub options_override: u8,
    }

    impl Command for MoveToHue {
        const CLUSTER_ID: ClusterId = super::CLUSTER_ID;
        const COMMAND_ID: CommandId = Commands::MoveToHue as _;

        fn encode_fields(&self, encoder: &mut Encoder) {
            encoder.write_u8(0, self.hue);
            encoder.write_u8(1, self.direction);
            encoder.write_u16(2, self.transition_time);
            encoder.write_u8(3, self.options_mask);
            encoder.write_u8(4, self.options_override);
        }
    }

    pub struct MoveToHueAndSaturation {
        pub hue: u8,
        pub saturation: u8,
        pub transition_time: u16,
        pub options_mask: u8,
        pub options_override: u8,
    }

    impl Command for MoveToHueAndSaturation {
        const CLUSTER_ID: ClusterId = super::CLUSTER_ID;
        const COMMAND_ID: CommandId = Commands::MoveToHueAndSaturation as _;

        fn encode_fields(&self, encoder: &mut Encoder) {
            encoder.write_u8(0, self.hue);
            encoder.write_u8(1, self.saturation);
            encoder.write_u16(2, self.transition_time);
            encoder.write_u8(3, self.options_mask);
            encoder.write_u8(4, self.options_override);
        }
    }

    pub struct MoveToSaturation {
        pub saturation: u8,
        pub transition_time: u16,
        pub options_mask: u8,
        pub options_override: u8,
    }

    impl Command for MoveToSaturation {
        const CLUSTER_ID: ClusterId = super::CLUSTER_ID;
        const COMMAND_ID: CommandId = Commands::MoveToSaturation as _;

        fn encode_fields(&self, encoder: &mut Encoder) {
            encoder.write_u8(0, self.saturation);
            encoder.write_u16(1, self.transition_time);
            encoder.write_u8(2, self.options_mask);
            encoder.write_u8(3, self.options_override);
        }
    }

    pub struct StepHue {
        pub step_mode: u8,
        pub step_size: u8,
        pub transition_time: u16,
        pub options_mask: u8,
        pub options_override: u8,
    }

    impl Command for StepHue {
        const CLUSTER_ID: ClusterId = super::CLUSTER_ID;
        const COMMAND_ID: CommandId = Commands::StepHue as _;

        fn encode_fields(&self, encoder: &mut Encoder) {
            encoder.write_u8(0, self.step_mode);
            encoder.write_u8(1, self.step_size);
            encoder.write_u16(2, self.transition_time);
            encoder.write_u8(3, self.options_mask);
            encoder.write_u8(4, self.options_override);
        }
    }

    pub struct StepSaturation {
        pub step_mode: u8,
        pub step_size: u8,
        pub transition_time: u16,
        pub options_mask: u8,
        pub options_override: u8,
    }

    impl Command for StepSaturation {
        const CLUSTER_ID: ClusterId = super::CLUSTER_ID;
        const COMMAND_ID: CommandId = Commands::StepSaturation as _;

        fn encode_fields(&self, encoder: &mut Encoder) {
            encoder.write_u8(0, self.step_mode);
            encoder.write_u8(1, self.step_size);
            encoder.write_u16(2, self.transition_time);
            encoder.write_u8(3, self.options_mask);
            encoder.write_u8(4, self.options_override);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_commands_follow_the_feature_map() {
        assert!(accepted_commands(0).is_empty());

        let hs = accepted_commands(feature::HUE_SATURATION);
        assert_eq!(
            hs,
            vec![
                Commands::MoveToHue as CommandId,
                Commands::MoveHue as CommandId,
                Commands::StepHue as CommandId,
                Commands::MoveToSaturation as CommandId,
                Commands::MoveSaturation as CommandId,
                Commands::StepSaturation as CommandId,
                Commands::MoveToHueAndSaturation as CommandId,
            ]
        );

        let ct_xy = accepted_commands(feature::COLOR_TEMPERATURE | feature::XY);
        assert_eq!(
            ct_xy,
            vec![
                Commands::MoveToColor as CommandId,
                Commands::MoveToColorTemperature as CommandId,
            ]
        );
    }
}
