//! Utility clusters (9): identification, grouping, and the administrative
//! set every root endpoint carries. Only ids, revisions and the mandatory
//! command/attribute seeds survive at this layer; the interaction handlers
//! live with the attribute store.

pub mod descriptor {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x001D;
    pub const CLUSTER_REVISION: u8 = 2;

    #[repr(u32)]
    #[derive(FromPrimitive)]
    pub enum Attributes {
        DeviceTypeList = 0x0000,
        ServerList = 0x0001,
        ClientList = 0x0002,
        PartsList = 0x0003,
    }
}

pub mod binding {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x001E;
    pub const CLUSTER_REVISION: u8 = 1;
}

pub mod access_control {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x001F;
    pub const CLUSTER_REVISION: u8 = 2;
}

pub mod basic_information {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0028;
    pub const CLUSTER_REVISION: u8 = 3;

    #[repr(u32)]
    #[derive(FromPrimitive)]
    pub enum Attributes {
        DataModelRevision = 0x0000,
        VendorName = 0x0001,
        VendorId = 0x0002,
        ProductName = 0x0003,
        ProductId = 0x0004,
        NodeLabel = 0x0005,
        HardwareVersion = 0x0007,
        SoftwareVersion = 0x0009,
    }
}

pub mod general_commissioning {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0030;
    pub const CLUSTER_REVISION: u8 = 1;
}

pub mod network_commissioning {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0031;
    pub const CLUSTER_REVISION: u8 = 2;
}

pub mod general_diagnostics {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0033;
    pub const CLUSTER_REVISION: u8 = 2;
}

pub mod administrator_commissioning {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x003C;
    pub const CLUSTER_REVISION: u8 = 1;
}

pub mod operational_credentials {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x003E;
    pub const CLUSTER_REVISION: u8 = 1;
}

pub mod group_key_management {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x003F;
    pub const CLUSTER_REVISION: u8 = 2;
}

pub mod bridged_device_basic_information {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0039;
    pub const CLUSTER_REVISION: u8 = 3;
}

pub mod power_source {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x002F;
    pub const CLUSTER_REVISION: u8 = 2;
}

pub mod identify {
    use crate::{
        constants::{ClusterId, CommandId},
        data_model::{config::IdentifyConfig, Attribute, AttributeValue},
    };

    pub const CLUSTER_ID: ClusterId = 0x0003;
    pub const CLUSTER_REVISION: u8 = 4;

    #[repr(u32)]
    #[derive(FromPrimitive)]
    pub enum Attributes {
        IdentifyTime = 0x0000,
        IdentifyType = 0x0001,
    }

    #[repr(u32)]
    #[derive(FromPrimitive)]
    pub enum Commands {
        Identify = 0x00,
        TriggerEffect = 0x40,
    }

    /// Optional command several lighting templates layer on.
    pub const TRIGGER_EFFECT: CommandId = Commands::TriggerEffect as _;

    pub(crate) fn attributes(config: &IdentifyConfig) -> Vec<Attribute> {
        vec![
            Attribute {
                id: Attributes::IdentifyTime as _,
                value: AttributeValue::U16(config.identify_time),
            },
            Attribute {
                id: Attributes::IdentifyType as _,
                value: AttributeValue::U8(config.identify_type),
            },
        ]
    }

    pub(crate) fn accepted_commands() -> Vec<CommandId> {
        vec![Commands::Identify as _]
    }
}

pub mod groups {
    use crate::constants::ClusterId;

    pub const CLUSTER_ID: ClusterId = 0x0004;
    pub const CLUSTER_REVISION: u8 = 4;
}

pub mod scenes_management {
    use crate::constants::{ClusterId, CommandId};

    pub const CLUSTER_ID: ClusterId = 0x0062;
    pub const CLUSTER_REVISION: u8 = 1;

    #[repr(u32)]
    #[derive(FromPrimitive)]
    pub enum Commands {
        AddScene = 0x00,
        ViewScene = 0x01,
        RemoveScene = 0x02,
        RemoveAllScenes = 0x03,
        StoreScene = 0x04,
        RecallScene = 0x05,
        GetSceneMembership = 0x06,
        CopyScene = 0x40,
    }

    /// Optional command the extended-color-light template layers on.
    pub const COPY_SCENE: CommandId = Commands::CopyScene as _;
}
