use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashSettings {
    #[serde(default)]
    pub spec_path: String,
    /// Pixel size of one logical grid cell. Default: 80.
    #[serde(default = "default_unit_size")]
    pub unit_size: u32,
    /// How long a toast stays visible before auto-dismissal, in ms. Default: 4000.
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

fn default_unit_size() -> u32 {
    80
}

fn default_toast_duration_ms() -> u64 {
    4000
}

impl Default for DashSettings {
    fn default() -> Self {
        DashSettings {
            spec_path: String::new(),
            unit_size: default_unit_size(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}
