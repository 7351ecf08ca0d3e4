//! Measurement and sensing clusters referenced by the sensor templates.

pub mod temperature_measurement {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0402;
    pub const CLUSTER_REVISION: u8 = 4;
}

pub mod relative_humidity_measurement {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0405;
    pub const CLUSTER_REVISION: u8 = 3;
}

pub mod occupancy_sensing {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0406;
    pub const CLUSTER_REVISION: u8 = 4;
}

pub mod boolean_state {
    use crate::{
        constants::{ClusterId, EventId},
        data_model::{config::BooleanStateConfig, Attribute, AttributeValue},
    };

    pub const CLUSTER_ID: ClusterId = 0x0045;
    pub const CLUSTER_REVISION: u8 = 1;

    #[repr(u32)]
    #[derive(FromPrimitive)]
    pub enum Attributes {
        StateValue = 0x0000,
    }

    /// Optional event the contact-sensor and rain-sensor templates layer on.
    pub const STATE_CHANGE: EventId = 0x00;

    pub(crate) fn attributes(config: &BooleanStateConfig) -> Vec<Attribute> {
        vec![Attribute {
            id: Attributes::StateValue as _,
            value: AttributeValue::Boolean(config.state_value),
        }]
    }
}

pub mod illuminance_measurement {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0400;
    pub const CLUSTER_REVISION: u8 = 3;
}

pub mod pressure_measurement {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0403;
    pub const CLUSTER_REVISION: u8 = 3;
}

pub mod flow_measurement {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0404;
    pub const CLUSTER_REVISION: u8 = 3;
}

pub mod air_quality {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x005B;
    pub const CLUSTER_REVISION: u8 = 1;
}

pub mod power_topology {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x009C;
    pub const CLUSTER_REVISION: u8 = 1;

    pub mod feature {
        pub const NODE_TOPOLOGY: u32 = 0x01;
        pub const TREE_TOPOLOGY: u32 = 0x02;
        pub const SET_TOPOLOGY: u32 = 0x04;
        pub const DYNAMIC_POWER_FLOW: u32 = 0x08;
    }
}

pub mod electrical_power_measurement {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0090;
    pub const CLUSTER_REVISION: u8 = 1;

    pub mod feature {
        pub const DIRECT_CURRENT: u32 = 0x01;
        pub const ALTERNATING_CURRENT: u32 = 0x02;
        pub const POLYPHASE_POWER: u32 = 0x04;
        pub const HARMONICS: u32 = 0x08;
        pub const POWER_QUALITY: u32 = 0x10;
    }
}
