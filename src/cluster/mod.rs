//! Cluster definitions: ids, roles, features and the composition factory.

use bitflags::bitflags;

use crate::{
    constants::{AttributeId, ClusterId, CommandId, EventId, NONE_FEATURE_MAP},
    data_model::{config::EndpointConfig, endpoint::Endpoint, Attribute, AttributeValue},
    Error, Result,
};

pub mod appliance;
pub mod color_control;
pub mod level_control;
pub mod measurement;
pub mod on_off;
pub mod utility;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClusterFlags: u8 {
        const SERVER = 0x01;
        const CLIENT = 0x02;
    }
}

/// The classification of the cluster (7.10.8)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterClassification {
    /// Used for the primary operation of the endpoint.
    Application,
    /// Used for configuration, discovery, addressing, diagnosing, monitoring, etc.
    Utility,
}

/// A capability bundle instantiated on an endpoint.
pub struct Cluster {
    pub id: ClusterId,
    pub classification: ClusterClassification,
    pub revision: u8,
    pub flags: ClusterFlags,
    pub features: u32,
    pub attributes: Vec<Attribute>,
    pub commands: Vec<CommandId>,
    pub events: Vec<EventId>,
}

impl Cluster {
    pub fn is_server(&self) -> bool {
        self.flags.contains(ClusterFlags::SERVER)
    }

    pub fn is_client(&self) -> bool {
        self.flags.contains(ClusterFlags::CLIENT)
    }

    pub fn has_attribute(&self, id: AttributeId) -> bool {
        self.attributes.iter().any(|a| a.id == id)
    }

    pub fn has_command(&self, id: CommandId) -> bool {
        self.commands.contains(&id)
    }

    pub fn has_event(&self, id: EventId) -> bool {
        self.events.contains(&id)
    }
}

/// Global attributes present on every cluster (7.13)
#[repr(u32)]
#[derive(FromPrimitive)]
pub enum GlobalAttributes {
    ClusterRevision = 0xFFFD,
    FeatureMap = 0xFFFC,
    AttributeList = 0xFFFB,
    EventList = 0xFFFA,
    AcceptedCommandList = 0xFFF9,
    GeneratedCommandList = 0xFFF8,
    FabricIndex = 0xFE,
}

/// Every cluster a device-type template can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterKind {
    Descriptor,
    Binding,
    AccessControl,
    BasicInformation,
    GeneralCommissioning,
    NetworkCommissioning,
    GeneralDiagnostics,
    AdministratorCommissioning,
    OperationalCredentials,
    GroupKeyManagement,
    BridgedDeviceBasicInformation,
    PowerSource,
    Identify,
    Groups,
    ScenesManagement,
    OnOff,
    LevelControl,
    ColorControl,
    Switch,
    FanControl,
    Thermostat,
    OperationalState,
    SmokeCoAlarm,
    DoorLock,
    WindowCovering,
    PumpConfigurationAndControl,
    ModeSelect,
    TemperatureControl,
    RvcRunMode,
    RvcOperationalState,
    EnergyEvse,
    EnergyEvseMode,
    MicrowaveOvenMode,
    MicrowaveOvenControl,
    ValveConfigurationAndControl,
    DeviceEnergyManagement,
    DeviceEnergyManagementMode,
    TemperatureMeasurement,
    RelativeHumidityMeasurement,
    OccupancySensing,
    BooleanState,
    IlluminanceMeasurement,
    PressureMeasurement,
    FlowMeasurement,
    AirQuality,
    PowerTopology,
    ElectricalPowerMeasurement,
}

impl ClusterKind {
    pub const fn id(&self) -> ClusterId {
        use ClusterKind::*;
        match self {
            Descriptor => utility::descriptor::CLUSTER_ID,
            Binding => utility::binding::CLUSTER_ID,
            AccessControl => utility::access_control::CLUSTER_ID,
            BasicInformation => utility::basic_information::CLUSTER_ID,
            GeneralCommissioning => utility::general_commissioning::CLUSTER_ID,
            NetworkCommissioning => utility::network_commissioning::CLUSTER_ID,
            GeneralDiagnostics => utility::general_diagnostics::CLUSTER_ID,
            AdministratorCommissioning => utility::administrator_commissioning::CLUSTER_ID,
            OperationalCredentials => utility::operational_credentials::CLUSTER_ID,
            GroupKeyManagement => utility::group_key_management::CLUSTER_ID,
            BridgedDeviceBasicInformation => utility::bridged_device_basic_information::CLUSTER_ID,
            PowerSource => utility::power_source::CLUSTER_ID,
            Identify => utility::identify::CLUSTER_ID,
            Groups => utility::groups::CLUSTER_ID,
            ScenesManagement => utility::scenes_management::CLUSTER_ID,
            OnOff => on_off::CLUSTER_ID,
            LevelControl => level_control::CLUSTER_ID,
            ColorControl => color_control::CLUSTER_ID,
            Switch => appliance::switch::CLUSTER_ID,
            FanControl => appliance::fan_control::CLUSTER_ID,
            Thermostat => appliance::thermostat::CLUSTER_ID,
            OperationalState => appliance::operational_state::CLUSTER_ID,
            SmokeCoAlarm => appliance::smoke_co_alarm::CLUSTER_ID,
            DoorLock => appliance::door_lock::CLUSTER_ID,
            WindowCovering => appliance::window_covering::CLUSTER_ID,
            PumpConfigurationAndControl => appliance::pump_configuration_and_control::CLUSTER_ID,
            ModeSelect => appliance::mode_select::CLUSTER_ID,
            TemperatureControl => appliance::temperature_control::CLUSTER_ID,
            RvcRunMode => appliance::rvc_run_mode::CLUSTER_ID,
            RvcOperationalState => appliance::rvc_operational_state::CLUSTER_ID,
            EnergyEvse => appliance::energy_evse::CLUSTER_ID,
            EnergyEvseMode => appliance::energy_evse_mode::CLUSTER_ID,
            MicrowaveOvenMode => appliance::microwave_oven_mode::CLUSTER_ID,
            MicrowaveOvenControl => appliance::microwave_oven_control::CLUSTER_ID,
            ValveConfigurationAndControl => appliance::valve_configuration_and_control::CLUSTER_ID,
            DeviceEnergyManagement => appliance::device_energy_management::CLUSTER_ID,
            DeviceEnergyManagementMode => appliance::device_energy_management_mode::CLUSTER_ID,
            TemperatureMeasurement => measurement::temperature_measurement::CLUSTER_ID,
            RelativeHumidityMeasurement => measurement::relative_humidity_measurement::CLUSTER_ID,
            OccupancySensing => measurement::occupancy_sensing::CLUSTER_ID,
            BooleanState => measurement::boolean_state::CLUSTER_ID,
            IlluminanceMeasurement => measurement::illuminance_measurement::CLUSTER_ID,
            PressureMeasurement => measurement::pressure_measurement::CLUSTER_ID,
            FlowMeasurement => measurement::flow_measurement::CLUSTER_ID,
            AirQuality => measurement::air_quality::CLUSTER_ID,
            PowerTopology => measurement::power_topology::CLUSTER_ID,
            ElectricalPowerMeasurement => measurement::electrical_power_measurement::CLUSTER_ID,
        }
    }

    pub const fn revision(&self) -> u8 {
        use ClusterKind::*;
        match self {
            Descriptor => utility::descriptor::CLUSTER_REVISION,
            Binding => utility::binding::CLUSTER_REVISION,
            AccessControl => utility::access_control::CLUSTER_REVISION,
            BasicInformation => utility::basic_information::CLUSTER_REVISION,
            GeneralCommissioning => utility::general_commissioning::CLUSTER_REVISION,
            NetworkCommissioning => utility::network_commissioning::CLUSTER_REVISION,
            GeneralDiagnostics => utility::general_diagnostics::CLUSTER_REVISION,
            AdministratorCommissioning => utility::administrator_commissioning::CLUSTER_REVISION,
            OperationalCredentials => utility::operational_credentials::CLUSTER_REVISION,
            GroupKeyManagement => utility::group_key_management::CLUSTER_REVISION,
            BridgedDeviceBasicInformation => {
                utility::bridged_device_basic_information::CLUSTER_REVISION
            }
            PowerSource => utility::power_source::CLUSTER_REVISION,
            Identify => utility::identify::CLUSTER_REVISION,
            Groups => utility::groups::CLUSTER_REVISION,
            ScenesManagement => utility::scenes_management::CLUSTER_REVISION,
            OnOff => on_off::CLUSTER_REVISION,
            LevelControl => level_control::CLUSTER_REVISION,
            ColorControl => color_control::CLUSTER_REVISION,
            Switch => appliance::switch::CLUSTER_REVISION,
            FanControl => appliance::fan_control::CLUSTER_REVISION,
            Thermostat => appliance::thermostat::CLUSTER_REVISION,
            OperationalState => appliance::operational_state::CLUSTER_REVISION,
            SmokeCoAlarm => appliance::smoke_co_alarm::CLUSTER_REVISION,
            DoorLock => appliance::door_lock::CLUSTER_REVISION,
            WindowCovering => appliance::window_covering::CLUSTER_REVISION,
            PumpConfigurationAndControl => {
                appliance::pump_configuration_and_control::CLUSTER_REVISION
            }
            ModeSelect => appliance::mode_select::CLUSTER_REVISION,
            TemperatureControl => appliance::temperature_control::CLUSTER_REVISION,
            RvcRunMode => appliance::rvc_run_mode::CLUSTER_REVISION,
            RvcOperationalState => appliance::rvc_operational_state::CLUSTER_REVISION,
            EnergyEvse => appliance::energy_evse::CLUSTER_REVISION,
            EnergyEvseMode => appliance::energy_evse_mode::CLUSTER_REVISION,
            MicrowaveOvenMode => appliance::microwave_oven_mode::CLUSTER_REVISION,
            MicrowaveOvenControl => appliance::microwave_oven_control::CLUSTER_REVISION,
            ValveConfigurationAndControl => {
                appliance::valve_configuration_and_control::CLUSTER_REVISION
            }
            DeviceEnergyManagement => appliance::device_energy_management::CLUSTER_REVISION,
            DeviceEnergyManagementMode => {
                appliance::device_energy_management_mode::CLUSTER_REVISION
            }
            TemperatureMeasurement => measurement::temperature_measurement::CLUSTER_REVISION,
            RelativeHumidityMeasurement => {
                measurement::relative_humidity_measurement::CLUSTER_REVISION
            }
            OccupancySensing => measurement::occupancy_sensing::CLUSTER_REVISION,
            BooleanState => measurement::boolean_state::CLUSTER_REVISION,
            IlluminanceMeasurement => measurement::illuminance_measurement::CLUSTER_REVISION,
            PressureMeasurement => measurement::pressure_measurement::CLUSTER_REVISION,
            FlowMeasurement => measurement::flow_measurement::CLUSTER_REVISION,
            AirQuality => measurement::air_quality::CLUSTER_REVISION,
            PowerTopology => measurement::power_topology::CLUSTER_REVISION,
            ElectricalPowerMeasurement => {
                measurement::electrical_power_measurement::CLUSTER_REVISION
            }
        }
    }

    pub const fn classification(&self) -> ClusterClassification {
        use ClusterKind::*;
        match self {
            Descriptor | Binding | AccessControl | BasicInformation | GeneralCommissioning
            | NetworkCommissioning | GeneralDiagnostics | AdministratorCommissioning
            | OperationalCredentials | GroupKeyManagement | BridgedDeviceBasicInformation
            | PowerSource | Identify | Groups | ScenesManagement => {
                ClusterClassification::Utility
            }
            _ => ClusterClassification::Application,
        }
    }
}

/// An extra command, event or attribute a template layers onto a cluster
/// beyond the mandatory set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    Command(CommandId),
    Event(EventId),
    Attribute(AttributeId),
}

/// One line of a device-type template: which cluster to instantiate, in
/// which role, with which features.
pub struct ClusterSpec {
    pub kind: ClusterKind,
    pub flags: ClusterFlags,
    pub features: u32,
    pub with: &'static [Extension],
}

impl ClusterSpec {
    pub const fn server(kind: ClusterKind) -> Self {
        Self {
            kind,
            flags: ClusterFlags::SERVER,
            features: NONE_FEATURE_MAP,
            with: &[],
        }
    }

    pub const fn client(kind: ClusterKind) -> Self {
        Self {
            kind,
            flags: ClusterFlags::CLIENT,
            features: NONE_FEATURE_MAP,
            with: &[],
        }
    }

    pub const fn features(mut self, features: u32) -> Self {
        self.features = features;
        self
    }

    pub const fn extend(mut self, with: &'static [Extension]) -> Self {
        self.with = with;
        self
    }

    pub const fn and_client(mut self) -> Self {
        self.flags = self.flags.union(ClusterFlags::CLIENT);
        self
    }
}

/// Instantiate one cluster on an endpoint.
///
/// Attribute and command sets are seeded from the config only for server
/// roles; client-role clusters carry ids and flags alone, as the remote
/// server owns the state.
pub fn create(endpoint: &mut Endpoint, config: &EndpointConfig, spec: &ClusterSpec) -> Result<()> {
    if spec.flags.is_empty() {
        return Err(Error::InvalidArgument("cluster role flags are empty"));
    }
    let server = spec.flags.contains(ClusterFlags::SERVER);
    let (mut attributes, commands) = if server {
        seeded_sets(spec, config)
    } else {
        (Vec::new(), Vec::new())
    };
    if server {
        // Global attributes every server cluster instance reports (7.13)
        attributes.push(Attribute {
            id: GlobalAttributes::ClusterRevision as _,
            value: AttributeValue::U8(spec.kind.revision()),
        });
        attributes.push(Attribute {
            id: GlobalAttributes::FeatureMap as _,
            value: AttributeValue::U32(spec.features),
        });
    }
    let mut cluster = Cluster {
        id: spec.kind.id(),
        classification: spec.kind.classification(),
        revision: spec.kind.revision(),
        flags: spec.flags,
        features: spec.features,
        attributes,
        commands,
        events: Vec::new(),
    };
    for extension in spec.with {
        match *extension {
            Extension::Command(id) => cluster.commands.push(id),
            Extension::Event(id) => cluster.events.push(id),
            Extension::Attribute(id) => cluster.attributes.push(Attribute {
                id,
                value: crate::data_model::AttributeValue::U32(0),
            }),
        }
    }
    endpoint.push_cluster(cluster);
    Ok(())
}

fn seeded_sets(
    spec: &ClusterSpec,
    config: &EndpointConfig,
) -> (Vec<Attribute>, Vec<CommandId>) {
    match spec.kind {
        ClusterKind::Identify => (
            utility::identify::attributes(&config.identify),
            utility::identify::accepted_commands(),
        ),
        ClusterKind::OnOff => (
            on_off::attributes(&config.on_off, spec.features),
            on_off::accepted_commands(),
        ),
        ClusterKind::LevelControl => (
            level_control::attributes(&config.level_control, spec.features),
            level_control::accepted_commands(),
        ),
        ClusterKind::ColorControl => (
            color_control::attributes(&config.color_control, spec.features),
            color_control::accepted_commands(spec.features),
        ),
        ClusterKind::BooleanState => (
            measurement::boolean_state::attributes(&config.boolean_state),
            Vec::new(),
        ),
        ClusterKind::BasicInformation => (
            vec![Attribute {
                id: utility::basic_information::Attributes::DataModelRevision as _,
                value: AttributeValue::U8(crate::data_model::DATA_MODEL_REVISION),
            }],
            Vec::new(),
        ),
        _ => (Vec::new(), Vec::new()),
    }
}
