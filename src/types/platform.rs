use serde::{Deserialize, Serialize};

/// Operating-system family inferred from the User-Agent header.
///
/// `Unknown` means the platform checks ran and no token matched;
/// `Undetermined` means there was no header to inspect, so detection never
/// ran. The two render as `UNKNOWN` and `unknown` respectively, which is why
/// `from_str` is case-sensitive here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Platform {
    Ios,
    Android,
    Windows,
    Mac,
    Linux,
    Unknown,
    #[serde(rename = "unknown")]
    Undetermined,
}

impl Platform {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "IOS" => Some(Self::Ios),
            "ANDROID" => Some(Self::Android),
            "WINDOWS" => Some(Self::Windows),
            "MAC" => Some(Self::Mac),
            "LINUX" => Some(Self::Linux),
            "UNKNOWN" => Some(Self::Unknown),
            "unknown" => Some(Self::Undetermined),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "IOS",
            Self::Android => "ANDROID",
            Self::Windows => "WINDOWS",
            Self::Mac => "MAC",
            Self::Linux => "LINUX",
            Self::Unknown => "UNKNOWN",
            Self::Undetermined => "unknown",
        }
    }
}
