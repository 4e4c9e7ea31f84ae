use log::debug;

use super::error::Result;
use super::markers::{Marker, MarkerScanner, MarkerSet};
use super::types::{DeviceInfo, DeviceType, Platform};

/// Heuristic User-Agent classifier.
///
/// The marker automaton is built once at construction time; `classify` is
/// read-only, so a single instance can be shared freely across threads.
pub struct DeviceClassifier {
    markers: MarkerScanner,
}

impl DeviceClassifier {
    pub fn new() -> Result<Self> {
        Ok(Self {
            markers: MarkerScanner::build()?,
        })
    }

    /// Classify a raw `User-Agent` header value.
    ///
    /// A missing or empty header short-circuits to the unknown device; no
    /// platform detection is attempted in that case. Total: every input
    /// produces a classification.
    pub fn classify(&self, user_agent: Option<&str>) -> DeviceInfo {
        let ua = match user_agent {
            Some(ua) if !ua.is_empty() => ua,
            _ => {
                debug!("empty user agent, returning unknown device");
                return DeviceInfo::unknown();
            }
        };

        let found = self.markers.scan(ua);
        let info = DeviceInfo {
            device_type: detect_device_type(&found),
            platform: detect_platform(&found),
        };
        debug!(
            "detected device - type: {}, platform: {}",
            info.device_type.as_str(),
            info.platform.as_str()
        );
        info
    }
}

/// Tablets are checked before mobiles since their identifier strings often
/// carry a `Mobile` token as well. An `android` marker without `mobile` is
/// the tie-break that separates Android tablets from Android phones, both of
/// which embed `Android` in the header.
fn detect_device_type(found: &MarkerSet) -> DeviceType {
    if found.contains_any(&[Marker::Ipad, Marker::Tablet, Marker::Kindle])
        || (found.contains(Marker::Android) && !found.contains(Marker::Mobile))
    {
        return DeviceType::Tablet;
    }

    if found.contains_any(&[
        Marker::Mobile,
        Marker::Iphone,
        Marker::Ipod,
        Marker::Android,
        Marker::Blackberry,
        Marker::WindowsPhone,
        Marker::OperaMini,
        Marker::Webos,
    ]) {
        return DeviceType::Mobile;
    }

    DeviceType::Desktop
}

/// Ordered platform checks, first match wins. Independent of the device-type
/// pass; any combination of the two labels can come out of one header.
fn detect_platform(found: &MarkerSet) -> Platform {
    if found.contains_any(&[Marker::Iphone, Marker::Ipad, Marker::Ipod]) {
        return Platform::Ios;
    }
    if found.contains(Marker::Android) {
        return Platform::Android;
    }
    if found.contains(Marker::Windows) {
        return Platform::Windows;
    }
    if found.contains(Marker::MacOs) {
        return Platform::Mac;
    }
    if found.contains(Marker::Linux) {
        return Platform::Linux;
    }
    Platform::Unknown
}
