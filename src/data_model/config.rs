//! Plain-aggregate composition configs.
//!
//! Borrowed by reference for the duration of a composition call; no state
//! outlives the call. Every field has a usable default so callers only
//! spell out what differs.

/// Per-node configuration. The root endpoint is composed from `root_node`.
#[derive(Default)]
pub struct NodeConfig {
    pub root_node: EndpointConfig,
}

/// Per-endpoint configuration, one entry per configurable cluster.
/// Clusters a template does not list simply ignore their entry.
#[derive(Default)]
pub struct EndpointConfig {
    pub identify: IdentifyConfig,
    pub on_off: OnOffConfig,
    pub level_control: LevelControlConfig,
    pub color_control: ColorControlConfig,
    pub boolean_state: BooleanStateConfig,
}

pub struct IdentifyConfig {
    pub identify_time: u16,
    pub identify_type: u8,
}

impl Default for IdentifyConfig {
    fn default() -> Self {
        Self {
            identify_time: 0,
            identify_type: 0,
        }
    }
}

pub struct OnOffConfig {
    pub on_off: bool,
    /// Start-up behavior, meaningful with the lighting feature.
    pub start_up_on_off: u8,
}

impl Default for OnOffConfig {
    fn default() -> Self {
        Self {
            on_off: false,
            start_up_on_off: 0,
        }
    }
}

pub struct LevelControlConfig {
    pub current_level: u8,
    pub on_level: u8,
    pub min_level: u8,
    pub max_level: u8,
}

impl Default for LevelControlConfig {
    fn default() -> Self {
        Self {
            current_level: 1,
            on_level: 1,
            min_level: 1,
            max_level: 254,
        }
    }
}

pub struct ColorControlConfig {
    pub color_mode: u8,
    pub enhanced_color_mode: u8,
    pub current_hue: u8,
    pub current_saturation: u8,
    pub color_temperature_mireds: u16,
    pub current_x: u16,
    pub current_y: u16,
}

impl Default for ColorControlConfig {
    fn default() -> Self {
        Self {
            color_mode: 1,
            enhanced_color_mode: 1,
            current_hue: 0,
            current_saturation: 0,
            color_temperature_mireds: 250,
            current_x: 0x616B,
            current_y: 0x607D,
        }
    }
}

#[derive(Default)]
pub struct BooleanStateConfig {
    pub state_value: bool,
}
