//! Appliance, actuator and mode clusters referenced by the remaining
//! device-type templates.

pub mod switch {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x003B;
    pub const CLUSTER_REVISION: u8 = 1;
}

pub mod fan_control {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0202;
    pub const CLUSTER_REVISION: u8 = 4;
}

pub mod thermostat {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0201;
    pub const CLUSTER_REVISION: u8 = 6;

    pub mod feature {
        pub const HEATING: u32 = 0x01;
        pub const COOLING: u32 = 0x02;
        pub const OCCUPANCY: u32 = 0x04;
        pub const SCHEDULE_CONFIGURATION: u32 = 0x08;
        pub const SETBACK: u32 = 0x10;
        pub const AUTO_MODE: u32 = 0x20;
    }
}

pub mod operational_state {
    use crate::constants::{AttributeId, ClusterId};

    pub const CLUSTER_ID: ClusterId = 0x0060;
    pub const CLUSTER_REVISION: u8 = 1;

    /// Optional attribute the microwave-oven template layers on.
    pub const COUNTDOWN_TIME: AttributeId = 0x0002;
}

pub mod smoke_co_alarm {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x005C;
    pub const CLUSTER_REVISION: u8 = 1;
}

pub mod door_lock {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0101;
    pub const CLUSTER_REVISION: u8 = 7;
}

pub mod window_covering {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0102;
    pub const CLUSTER_REVISION: u8 = 5;
}

pub mod pump_configuration_and_control {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0200;
    pub const CLUSTER_REVISION: u8 = 4;
}

pub mod mode_select {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0050;
    pub const CLUSTER_REVISION: u8 = 2;
}

pub mod temperature_control {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0056;
    pub const CLUSTER_REVISION: u8 = 1;
}

pub mod rvc_run_mode {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0054;
    pub const CLUSTER_REVISION: u8 = 1;
}

pub mod rvc_operational_state {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0061;
    pub const CLUSTER_REVISION: u8 = 1;
}

pub mod energy_evse {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0099;
    pub const CLUSTER_REVISION: u8 = 2;
}

pub mod energy_evse_mode {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x009D;
    pub const CLUSTER_REVISION: u8 = 1;
}

pub mod microwave_oven_mode {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x005E;
    pub const CLUSTER_REVISION: u8 = 1;
}

pub mod microwave_oven_control {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x005F;
    pub const CLUSTER_REVISION: u8 = 1;
}

pub mod valve_configuration_and_control {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0081;
    pub const CLUSTER_REVISION: u8 = 1;
}

pub mod device_energy_management {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0098;
    pub const CLUSTER_REVISION: u8 = 3;
}

pub mod device_energy_management_mode {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x009F;
    pub const CLUSTER_REVISION: u8 = 1;
}
