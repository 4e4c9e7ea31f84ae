use serde::{Deserialize, Serialize};

use super::{DeviceType, Platform};

/// Classification result for one User-Agent header: a coarse device-type
/// bucket and a platform label. Created fresh per call, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub device_type: DeviceType,
    pub platform: Platform,
}

impl DeviceInfo {
    /// Result used when no header was available to classify.
    pub fn unknown() -> Self {
        Self {
            device_type: DeviceType::Unknown,
            platform: Platform::Undetermined,
        }
    }

    pub fn device_type(&self) -> DeviceType {
        self.device_type
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn is_tablet(&self) -> bool {
        self.device_type == DeviceType::Tablet
    }

    pub fn is_mobile(&self) -> bool {
        self.device_type == DeviceType::Mobile
    }

    pub fn is_desktop(&self) -> bool {
        self.device_type == DeviceType::Desktop
    }
}
