//! Device-type templates (7.15) and the composition engine.
//!
//! Every device type is one table entry: an (id, version) tag plus the
//! ordered cluster list its endpoints always carry. A single generic
//! routine walks the entry; there is no per-type composition code.

use log::error;

use crate::{
    cluster::{
        self, appliance, color_control, level_control, measurement, on_off, utility, ClusterKind,
        ClusterSpec, Extension,
    },
    constants::{DeviceTypeId, EndpointId},
    data_model::{
        config::EndpointConfig,
        endpoint::{Endpoint, EndpointFlags},
        node::Node,
        DeviceType,
    },
    Error, Result,
};

pub struct DeviceTypeTemplate {
    pub id: DeviceTypeId,
    pub version: u8,
    /// Endpoints of this type are always removable at runtime.
    pub destroyable: bool,
    /// The template supports [`resume`] under a previously known endpoint id.
    pub resumable: bool,
    pub clusters: &'static [ClusterSpec],
}

impl DeviceTypeTemplate {
    pub const fn tag(&self) -> DeviceType {
        DeviceType {
            device_type: self.id,
            device_revision: self.version,
        }
    }
}

const fn template(
    id: DeviceTypeId,
    version: u8,
    clusters: &'static [ClusterSpec],
) -> DeviceTypeTemplate {
    DeviceTypeTemplate {
        id,
        version,
        destroyable: false,
        resumable: false,
        clusters,
    }
}

const TRIGGER_EFFECT: &[Extension] = &[Extension::Command(utility::identify::TRIGGER_EFFECT)];
const COPY_SCENE: &[Extension] = &[Extension::Command(utility::scenes_management::COPY_SCENE)];
const STATE_CHANGE: &[Extension] = &[Extension::Event(measurement::boolean_state::STATE_CHANGE)];
const COUNTDOWN_TIME: &[Extension] =
    &[Extension::Attribute(appliance::operational_state::COUNTDOWN_TIME)];

pub static ROOT_NODE: DeviceTypeTemplate = template(
    0x0016,
    2,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::AccessControl),
        ClusterSpec::server(ClusterKind::BasicInformation),
        ClusterSpec::server(ClusterKind::GeneralCommissioning),
        ClusterSpec::server(ClusterKind::NetworkCommissioning),
        ClusterSpec::server(ClusterKind::GeneralDiagnostics),
        ClusterSpec::server(ClusterKind::AdministratorCommissioning),
        ClusterSpec::server(ClusterKind::OperationalCredentials),
        ClusterSpec::server(ClusterKind::GroupKeyManagement),
    ],
);

pub static POWER_SOURCE_DEVICE: DeviceTypeTemplate = template(
    0x0011,
    1,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::PowerSource),
    ],
);

pub static ON_OFF_LIGHT: DeviceTypeTemplate = template(
    0x0100,
    3,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify).extend(TRIGGER_EFFECT),
        ClusterSpec::server(ClusterKind::Groups),
        ClusterSpec::server(ClusterKind::ScenesManagement),
        ClusterSpec::server(ClusterKind::OnOff).features(on_off::feature::LIGHTING),
    ],
);

pub static DIMMABLE_LIGHT: DeviceTypeTemplate = template(
    0x0101,
    3,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify).extend(TRIGGER_EFFECT),
        ClusterSpec::server(ClusterKind::Groups),
        ClusterSpec::server(ClusterKind::ScenesManagement),
        ClusterSpec::server(ClusterKind::OnOff).features(on_off::feature::LIGHTING),
        ClusterSpec::server(ClusterKind::LevelControl)
            .features(level_control::feature::ON_OFF | level_control::feature::LIGHTING),
    ],
);

pub static COLOR_TEMPERATURE_LIGHT: DeviceTypeTemplate = template(
    0x010C,
    4,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify).extend(TRIGGER_EFFECT),
        ClusterSpec::server(ClusterKind::Groups),
        ClusterSpec::server(ClusterKind::ScenesManagement),
        ClusterSpec::server(ClusterKind::OnOff).features(on_off::feature::LIGHTING),
        ClusterSpec::server(ClusterKind::LevelControl)
            .features(level_control::feature::ON_OFF | level_control::feature::LIGHTING),
        ClusterSpec::server(ClusterKind::ColorControl)
            .features(color_control::feature::COLOR_TEMPERATURE),
    ],
);

pub static EXTENDED_COLOR_LIGHT: DeviceTypeTemplate = template(
    0x010D,
    4,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify).extend(TRIGGER_EFFECT),
        ClusterSpec::server(ClusterKind::Groups),
        ClusterSpec::server(ClusterKind::ScenesManagement).extend(COPY_SCENE),
        ClusterSpec::server(ClusterKind::OnOff).features(on_off::feature::LIGHTING),
        ClusterSpec::server(ClusterKind::LevelControl)
            .features(level_control::feature::ON_OFF | level_control::feature::LIGHTING),
        ClusterSpec::server(ClusterKind::ColorControl)
            .features(color_control::feature::COLOR_TEMPERATURE | color_control::feature::XY),
    ],
);

pub static ON_OFF_SWITCH: DeviceTypeTemplate = template(
    0x0103,
    3,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Binding),
        ClusterSpec::server(ClusterKind::Identify).and_client(),
        ClusterSpec::client(ClusterKind::OnOff),
    ],
);

pub static DIMMER_SWITCH: DeviceTypeTemplate = template(
    0x0104,
    3,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Binding),
        ClusterSpec::server(ClusterKind::Identify).and_client(),
        ClusterSpec::client(ClusterKind::OnOff),
        ClusterSpec::client(ClusterKind::LevelControl),
    ],
);

pub static COLOR_DIMMER_SWITCH: DeviceTypeTemplate = template(
    0x0105,
    3,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Binding),
        ClusterSpec::server(ClusterKind::Identify).and_client(),
        ClusterSpec::client(ClusterKind::OnOff),
        ClusterSpec::client(ClusterKind::LevelControl),
        ClusterSpec::client(ClusterKind::ColorControl),
    ],
);

pub static GENERIC_SWITCH: DeviceTypeTemplate = template(
    0x000F,
    3,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::Switch),
    ],
);

pub static ON_OFF_PLUGIN_UNIT: DeviceTypeTemplate = template(
    0x010A,
    3,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify).extend(TRIGGER_EFFECT),
        ClusterSpec::server(ClusterKind::Groups),
        ClusterSpec::server(ClusterKind::ScenesManagement),
        ClusterSpec::server(ClusterKind::OnOff).features(on_off::feature::LIGHTING),
    ],
);

pub static DIMMABLE_PLUGIN_UNIT: DeviceTypeTemplate = template(
    0x010B,
    4,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify).extend(TRIGGER_EFFECT),
        ClusterSpec::server(ClusterKind::Groups),
        ClusterSpec::server(ClusterKind::ScenesManagement),
        ClusterSpec::server(ClusterKind::OnOff).features(on_off::feature::LIGHTING),
        ClusterSpec::server(ClusterKind::LevelControl)
            .features(level_control::feature::ON_OFF | level_control::feature::LIGHTING),
    ],
);

pub static FAN: DeviceTypeTemplate = template(
    0x002B,
    2,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::Groups),
        ClusterSpec::server(ClusterKind::FanControl),
    ],
);

pub static THERMOSTAT: DeviceTypeTemplate = template(
    0x0301,
    3,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::Groups),
        ClusterSpec::server(ClusterKind::Thermostat)
            .features(appliance::thermostat::feature::HEATING | appliance::thermostat::feature::COOLING),
    ],
);

/// Intentional placeholder: composes nothing beyond the descriptor.
pub static AGGREGATOR: DeviceTypeTemplate = template(
    0x000E,
    2,
    &[ClusterSpec::server(ClusterKind::Descriptor)],
);

pub static AIR_QUALITY_SENSOR: DeviceTypeTemplate = template(
    0x002C,
    1,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::AirQuality),
    ],
);

pub static AIR_PURIFIER: DeviceTypeTemplate = template(
    0x002D,
    2,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::FanControl),
    ],
);

pub static DISH_WASHER: DeviceTypeTemplate = template(
    0x0075,
    1,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::OperationalState),
    ],
);

pub static LAUNDRY_WASHER: DeviceTypeTemplate = template(
    0x0073,
    1,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::OperationalState),
    ],
);

pub static LAUNDRY_DRYER: DeviceTypeTemplate = template(
    0x007C,
    1,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::OperationalState),
    ],
);

pub static SMOKE_CO_ALARM: DeviceTypeTemplate = template(
    0x0076,
    1,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::SmokeCoAlarm),
    ],
);

/// Bridged endpoints are always destroyable and can be restored under a
/// previously known endpoint id after a restart.
pub static BRIDGED_NODE: DeviceTypeTemplate = DeviceTypeTemplate {
    id: 0x0013,
    version: 2,
    destroyable: true,
    resumable: true,
    clusters: &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::BridgedDeviceBasicInformation),
    ],
};

pub static DOOR_LOCK: DeviceTypeTemplate = template(
    0x000A,
    3,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::DoorLock),
    ],
);

pub static WINDOW_COVERING_DEVICE: DeviceTypeTemplate = template(
    0x0202,
    3,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::Groups),
        ClusterSpec::server(ClusterKind::ScenesManagement),
        ClusterSpec::server(ClusterKind::WindowCovering),
    ],
);

pub static TEMPERATURE_SENSOR: DeviceTypeTemplate = template(
    0x0302,
    2,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::TemperatureMeasurement),
    ],
);

pub static HUMIDITY_SENSOR: DeviceTypeTemplate = template(
    0x0307,
    2,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::RelativeHumidityMeasurement),
    ],
);

pub static OCCUPANCY_SENSOR: DeviceTypeTemplate = template(
    0x0107,
    3,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::OccupancySensing),
    ],
);

pub static CONTACT_SENSOR: DeviceTypeTemplate = template(
    0x0015,
    2,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::BooleanState).extend(STATE_CHANGE),
    ],
);

pub static LIGHT_SENSOR: DeviceTypeTemplate = template(
    0x0106,
    3,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::IlluminanceMeasurement),
    ],
);

pub static PRESSURE_SENSOR: DeviceTypeTemplate = template(
    0x0305,
    2,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::PressureMeasurement),
    ],
);

pub static FLOW_SENSOR: DeviceTypeTemplate = template(
    0x0306,
    2,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::FlowMeasurement),
    ],
);

pub static PUMP: DeviceTypeTemplate = template(
    0x0303,
    3,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::OnOff),
        ClusterSpec::server(ClusterKind::PumpConfigurationAndControl),
    ],
);

pub static PUMP_CONTROLLER: DeviceTypeTemplate = template(
    0x0304,
    4,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::client(ClusterKind::OnOff),
        ClusterSpec::client(ClusterKind::PumpConfigurationAndControl),
        ClusterSpec::server(ClusterKind::Binding),
    ],
);

pub static MODE_SELECT_DEVICE: DeviceTypeTemplate = template(
    0x0027,
    1,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::ModeSelect),
    ],
);

pub static ROOM_AIR_CONDITIONER: DeviceTypeTemplate = template(
    0x0072,
    1,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::OnOff).features(on_off::feature::DEAD_FRONT_BEHAVIOR),
        ClusterSpec::server(ClusterKind::Thermostat)
            .features(appliance::thermostat::feature::HEATING | appliance::thermostat::feature::COOLING),
    ],
);

pub static TEMPERATURE_CONTROLLED_CABINET: DeviceTypeTemplate = template(
    0x0071,
    3,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::TemperatureControl),
    ],
);

/// Intentional placeholder: composes nothing beyond the descriptor.
pub static REFRIGERATOR: DeviceTypeTemplate = template(
    0x0070,
    2,
    &[ClusterSpec::server(ClusterKind::Descriptor)],
);

/// Intentional placeholder: composes nothing beyond the descriptor.
pub static OVEN: DeviceTypeTemplate = template(
    0x007B,
    1,
    &[ClusterSpec::server(ClusterKind::Descriptor)],
);

pub static ROBOTIC_VACUUM_CLEANER: DeviceTypeTemplate = template(
    0x0074,
    2,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::RvcRunMode),
        ClusterSpec::server(ClusterKind::RvcOperationalState),
    ],
);

pub static WATER_LEAK_DETECTOR: DeviceTypeTemplate = template(
    0x0043,
    1,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::BooleanState),
    ],
);

pub static WATER_FREEZE_DETECTOR: DeviceTypeTemplate = template(
    0x0041,
    1,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::BooleanState),
    ],
);

pub static RAIN_SENSOR: DeviceTypeTemplate = template(
    0x0044,
    1,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::BooleanState).extend(STATE_CHANGE),
    ],
);

pub static ELECTRICAL_SENSOR: DeviceTypeTemplate = template(
    0x0510,
    1,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::PowerTopology)
            .features(measurement::power_topology::feature::SET_TOPOLOGY),
        ClusterSpec::server(ClusterKind::ElectricalPowerMeasurement).features(
            measurement::electrical_power_measurement::feature::DIRECT_CURRENT
                | measurement::electrical_power_measurement::feature::ALTERNATING_CURRENT,
        ),
    ],
);

pub static COOK_SURFACE: DeviceTypeTemplate = template(
    0x0077,
    1,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::TemperatureControl),
    ],
);

pub static COOKTOP: DeviceTypeTemplate = template(
    0x0078,
    1,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::OnOff).features(on_off::feature::OFF_ONLY),
    ],
);

pub static ENERGY_EVSE: DeviceTypeTemplate = template(
    0x050C,
    1,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::EnergyEvse),
        ClusterSpec::server(ClusterKind::EnergyEvseMode),
    ],
);

pub static MICROWAVE_OVEN: DeviceTypeTemplate = template(
    0x0079,
    1,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::OperationalState).extend(COUNTDOWN_TIME),
        ClusterSpec::server(ClusterKind::MicrowaveOvenMode),
        ClusterSpec::server(ClusterKind::MicrowaveOvenControl),
    ],
);

pub static EXTRACTOR_HOOD: DeviceTypeTemplate = template(
    0x007A,
    1,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::FanControl),
    ],
);

pub static WATER_VALVE: DeviceTypeTemplate = template(
    0x0042,
    1,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::Identify),
        ClusterSpec::server(ClusterKind::ValveConfigurationAndControl),
    ],
);

pub static DEVICE_ENERGY_MANAGEMENT: DeviceTypeTemplate = template(
    0x050D,
    1,
    &[
        ClusterSpec::server(ClusterKind::Descriptor),
        ClusterSpec::server(ClusterKind::DeviceEnergyManagement),
        ClusterSpec::server(ClusterKind::DeviceEnergyManagementMode),
    ],
);

/// Every known template, for enumeration and lookup by id.
pub static TEMPLATES: &[&DeviceTypeTemplate] = &[
    &ROOT_NODE,
    &POWER_SOURCE_DEVICE,
    &ON_OFF_LIGHT,
    &DIMMABLE_LIGHT,
    &COLOR_TEMPERATURE_LIGHT,
    &EXTENDED_COLOR_LIGHT,
    &ON_OFF_SWITCH,
    &DIMMER_SWITCH,
    &COLOR_DIMMER_SWITCH,
    &GENERIC_SWITCH,
    &ON_OFF_PLUGIN_UNIT,
    &DIMMABLE_PLUGIN_UNIT,
    &FAN,
    &THERMOSTAT,
    &AGGREGATOR,
    &AIR_QUALITY_SENSOR,
    &AIR_PURIFIER,
    &DISH_WASHER,
    &LAUNDRY_WASHER,
    &LAUNDRY_DRYER,
    &SMOKE_CO_ALARM,
    &BRIDGED_NODE,
    &DOOR_LOCK,
    &WINDOW_COVERING_DEVICE,
    &TEMPERATURE_SENSOR,
    &HUMIDITY_SENSOR,
    &OCCUPANCY_SENSOR,
    &CONTACT_SENSOR,
    &LIGHT_SENSOR,
    &PRESSURE_SENSOR,
    &FLOW_SENSOR,
    &PUMP,
    &PUMP_CONTROLLER,
    &MODE_SELECT_DEVICE,
    &ROOM_AIR_CONDITIONER,
    &TEMPERATURE_CONTROLLED_CABINET,
    &REFRIGERATOR,
    &OVEN,
    &ROBOTIC_VACUUM_CLEANER,
    &WATER_LEAK_DETECTOR,
    &WATER_FREEZE_DETECTOR,
    &RAIN_SENSOR,
    &ELECTRICAL_SENSOR,
    &COOK_SURFACE,
    &COOKTOP,
    &ENERGY_EVSE,
    &MICROWAVE_OVEN,
    &EXTRACTOR_HOOD,
    &WATER_VALVE,
    &DEVICE_ENERGY_MANAGEMENT,
];

pub fn find_template(id: DeviceTypeId) -> Option<&'static DeviceTypeTemplate> {
    TEMPLATES.iter().copied().find(|t| t.id == id)
}

/// Create a new endpoint on `node` composed from `template`.
///
/// Destroyable templates force the flag regardless of what the caller
/// passed. A composition failure after endpoint allocation leaves the
/// partially composed endpoint in place, matching [`add`]'s contract.
pub fn create(
    node: &mut Node,
    template: &DeviceTypeTemplate,
    config: &EndpointConfig,
    flags: EndpointFlags,
) -> Result<EndpointId> {
    let flags = if template.destroyable {
        flags | EndpointFlags::DESTROYABLE
    } else {
        flags
    };
    let endpoint = node.create_endpoint(flags)?;
    let id = endpoint.id();
    add(endpoint, template, config)?;
    Ok(id)
}

/// Apply `template` to an existing endpoint: stamp the device-type tag,
/// then instantiate every listed cluster in order.
///
/// Cluster ids already present are skipped, which makes repeated calls
/// (and [`resume`]) idempotent. On a cluster-factory failure the clusters
/// created so far are deliberately left on the endpoint; the caller sees
/// `InvalidState` and the partial state is observable.
pub fn add(
    endpoint: &mut Endpoint,
    template: &DeviceTypeTemplate,
    config: &EndpointConfig,
) -> Result<()> {
    endpoint.add_device_type(template.tag())?;
    for spec in template.clusters {
        if endpoint.has_cluster(spec.kind.id()) {
            continue;
        }
        if let Err(e) = cluster::create(endpoint, config, spec) {
            error!(
                "failed to create cluster {:#06x} on endpoint {}: {e}",
                spec.kind.id(),
                endpoint.id()
            );
            return Err(Error::InvalidState("cluster composition failed"));
        }
    }
    Ok(())
}

/// Reconstruct an endpoint under a previously known id, without
/// allocating a new one. Only resumable (bridged) templates support this.
pub fn resume(
    node: &mut Node,
    template: &DeviceTypeTemplate,
    config: &EndpointConfig,
    flags: EndpointFlags,
    endpoint_id: EndpointId,
) -> Result<EndpointId> {
    if !template.resumable {
        return Err(Error::InvalidArgument("device type does not support resume"));
    }
    let endpoint = node.resume_endpoint(flags | EndpointFlags::DESTROYABLE, endpoint_id)?;
    add(endpoint, template, config)?;
    Ok(endpoint.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_model::{config::NodeConfig, node};

    fn test_node() -> Node {
        node::create(
            &NodeConfig::default(),
            Box::new(|_, _, _| {}),
            Box::new(|_| {}),
        )
        .unwrap()
    }

    fn cluster_ids(node: &Node, endpoint_id: EndpointId) -> Vec<u32> {
        node.endpoint(endpoint_id).unwrap().cluster_ids().collect()
    }

    #[test]
    fn root_endpoint_composes_administrative_clusters() {
        let node = test_node();
        let root = node.root_endpoint();
        assert_eq!(root.id(), 0);
        assert!(!root.is_destroyable());
        assert_eq!(root.device_type().unwrap().device_type, 0x0016);
        for kind in [
            ClusterKind::Descriptor,
            ClusterKind::AccessControl,
            ClusterKind::BasicInformation,
            ClusterKind::GeneralCommissioning,
            ClusterKind::GeneralDiagnostics,
            ClusterKind::OperationalCredentials,
            ClusterKind::GroupKeyManagement,
        ] {
            assert!(root.has_cluster(kind.id()), "missing {kind:?}");
        }
    }

    #[test]
    fn on_off_light_cluster_set() {
        let mut node = test_node();
        let id = create(
            &mut node,
            &ON_OFF_LIGHT,
            &EndpointConfig::default(),
            EndpointFlags::empty(),
        )
        .unwrap();
        assert_eq!(id, 1);
        assert_eq!(
            cluster_ids(&node, id),
            vec![
                utility::descriptor::CLUSTER_ID,
                utility::identify::CLUSTER_ID,
                utility::groups::CLUSTER_ID,
                utility::scenes_management::CLUSTER_ID,
                on_off::CLUSTER_ID,
            ]
        );
        let endpoint = node.endpoint(id).unwrap();
        let on_off = endpoint.cluster(on_off::CLUSTER_ID).unwrap();
        assert!(on_off.is_server());
        assert_eq!(on_off.features, on_off::feature::LIGHTING);
        let identify = endpoint.cluster(utility::identify::CLUSTER_ID).unwrap();
        assert!(identify.has_command(utility::identify::TRIGGER_EFFECT));
    }

    #[test]
    fn every_template_composes_its_documented_clusters() {
        for template in TEMPLATES.iter().skip(1) {
            let mut node = test_node();
            let id = create(
                &mut node,
                template,
                &EndpointConfig::default(),
                EndpointFlags::empty(),
            )
            .unwrap();
            let endpoint = node.endpoint(id).unwrap();
            assert_eq!(endpoint.device_type().unwrap().device_type, template.id);
            assert_eq!(endpoint.device_type().unwrap().device_revision, template.version);
            let expected: Vec<u32> = template.clusters.iter().map(|s| s.kind.id()).collect();
            let actual: Vec<u32> = endpoint.cluster_ids().collect();
            assert_eq!(actual, expected, "template {:#06x}", template.id);
            assert_eq!(endpoint.is_destroyable(), template.destroyable);
        }
    }

    #[test]
    fn placeholder_templates_compose_descriptor_only() {
        for template in [&AGGREGATOR, &OVEN, &REFRIGERATOR] {
            let mut node = test_node();
            let id = create(
                &mut node,
                template,
                &EndpointConfig::default(),
                EndpointFlags::empty(),
            )
            .unwrap();
            assert_eq!(
                cluster_ids(&node, id),
                vec![utility::descriptor::CLUSTER_ID]
            );
        }
    }

    #[test]
    fn switch_templates_carry_client_roles_and_binding() {
        let mut node = test_node();
        let id = create(
            &mut node,
            &DIMMER_SWITCH,
            &EndpointConfig::default(),
            EndpointFlags::empty(),
        )
        .unwrap();
        let endpoint = node.endpoint(id).unwrap();
        assert!(endpoint.has_cluster(utility::binding::CLUSTER_ID));
        let on_off = endpoint.cluster(on_off::CLUSTER_ID).unwrap();
        assert!(on_off.is_client() && !on_off.is_server());
        assert!(on_off.attributes.is_empty());
        let identify = endpoint.cluster(utility::identify::CLUSTER_ID).unwrap();
        assert!(identify.is_server() && identify.is_client());
    }

    #[test]
    fn bridged_node_resume_reuses_endpoint_id() {
        let mut node = test_node();
        let config = EndpointConfig::default();
        let restored = resume(&mut node, &BRIDGED_NODE, &config, EndpointFlags::empty(), 5)
            .unwrap();
        assert_eq!(restored, 5);
        let expected: Vec<u32> = BRIDGED_NODE.clusters.iter().map(|s| s.kind.id()).collect();
        assert_eq!(cluster_ids(&node, 5), expected);
        assert!(node.endpoint(5).unwrap().is_destroyable());

        // Resuming the same id again must not duplicate clusters
        let again = resume(&mut node, &BRIDGED_NODE, &config, EndpointFlags::empty(), 5)
            .unwrap();
        assert_eq!(again, 5);
        assert_eq!(cluster_ids(&node, 5), expected);

        // A later create must steer clear of the restored id
        let next = create(&mut node, &BRIDGED_NODE, &config, EndpointFlags::empty()).unwrap();
        assert_eq!(next, 6);
    }

    #[test]
    fn resume_is_bridged_only() {
        let mut node = test_node();
        let err = resume(
            &mut node,
            &ON_OFF_LIGHT,
            &EndpointConfig::default(),
            EndpointFlags::empty(),
            3,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn device_type_is_immutable_after_creation() {
        let mut node = test_node();
        let config = EndpointConfig::default();
        let id = create(&mut node, &ON_OFF_LIGHT, &config, EndpointFlags::empty()).unwrap();
        let endpoint = node.endpoint_mut(id).unwrap();
        let err = add(endpoint, &DIMMABLE_LIGHT, &config).unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
        // Re-adding the same template is an idempotent no-op
        let before: Vec<u32> = endpoint.cluster_ids().collect();
        add(endpoint, &ON_OFF_LIGHT, &config).unwrap();
        let after: Vec<u32> = endpoint.cluster_ids().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn only_destroyable_endpoints_can_be_destroyed() {
        let mut node = test_node();
        let config = EndpointConfig::default();
        let static_id = create(&mut node, &ON_OFF_LIGHT, &config, EndpointFlags::empty()).unwrap();
        let bridged_id = create(&mut node, &BRIDGED_NODE, &config, EndpointFlags::empty()).unwrap();
        assert!(matches!(
            node.destroy_endpoint(static_id),
            Err(Error::InvalidState(_))
        ));
        node.destroy_endpoint(bridged_id).unwrap();
        assert!(node.endpoint(bridged_id).is_none());
    }

    #[test]
    fn templates_are_unique_by_id() {
        for (i, a) in TEMPLATES.iter().enumerate() {
            for b in &TEMPLATES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
        assert_eq!(find_template(0x0100).unwrap().id, ON_OFF_LIGHT.id);
        assert!(find_template(0xFFFF_FFFF).is_none());
    }
}
