//! Host facts reported by the status endpoint.
//!
//! `HostProbe` is the seam between the handlers and the running machine.
//! `SystemHost` reads the real host; tests plug in fixed hosts to cover
//! platforms with and without a load-average facility.

use serde::{Serialize, Serializer};

/// Sentinel reported in place of load averages on hosts that lack them
pub const LOAD_UNAVAILABLE: &str = "N/A";

/// Source of operating system facts.
pub trait HostProbe: Send + Sync {
    /// Platform name, e.g. "Linux", "Darwin", "Windows"
    fn os_name(&self) -> String;

    /// Kernel or OS release string, empty when unknown
    fn os_release(&self) -> String;

    /// 1, 5 and 15 minute load averages, or `None` when the platform has no
    /// such facility.
    fn load_average(&self) -> Option<[f64; 3]>;
}

/// Probe backed by the machine the process runs on.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl HostProbe for SystemHost {
    fn os_name(&self) -> String {
        platform_name(std::env::consts::OS).to_string()
    }

    fn os_release(&self) -> String {
        sysinfo::System::kernel_version().unwrap_or_default()
    }

    #[cfg(unix)]
    fn load_average(&self) -> Option<[f64; 3]> {
        let load = sysinfo::System::load_average();
        Some([load.one, load.five, load.fifteen])
    }

    #[cfg(not(unix))]
    fn load_average(&self) -> Option<[f64; 3]> {
        None
    }
}

/// Map a Rust target OS identifier to the conventional platform name.
fn platform_name(target_os: &str) -> &str {
    match target_os {
        "linux" | "android" => "Linux",
        "macos" | "ios" => "Darwin",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        "netbsd" => "NetBSD",
        "dragonfly" => "DragonFly",
        "solaris" | "illumos" => "SunOS",
        other => other,
    }
}

/// Load averages, or the "N/A" sentinel when the host cannot report them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Load {
    Averages([f64; 3]),
    Unavailable,
}

impl From<Option<[f64; 3]>> for Load {
    fn from(value: Option<[f64; 3]>) -> Self {
        value.map_or(Load::Unavailable, Load::Averages)
    }
}

impl Serialize for Load {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Load::Averages(values) => values.serialize(serializer),
            Load::Unavailable => serializer.serialize_str(LOAD_UNAVAILABLE),
        }
    }
}

/// The `system` record of a status response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemFacts {
    pub os: String,
    pub release: String,
    pub load: Load,
}

impl SystemFacts {
    pub fn collect(host: &dyn HostProbe) -> Self {
        Self {
            os: host.os_name(),
            release: host.os_release(),
            load: host.load_average().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoLoadHost;

    impl HostProbe for NoLoadHost {
        fn os_name(&self) -> String {
            "Windows".to_string()
        }

        fn os_release(&self) -> String {
            "10".to_string()
        }

        fn load_average(&self) -> Option<[f64; 3]> {
            None
        }
    }

    #[test]
    fn test_platform_name_mapping() {
        assert_eq!(platform_name("linux"), "Linux");
        assert_eq!(platform_name("android"), "Linux");
        assert_eq!(platform_name("macos"), "Darwin");
        assert_eq!(platform_name("windows"), "Windows");
        assert_eq!(platform_name("freebsd"), "FreeBSD");
        assert_eq!(platform_name("haiku"), "haiku");
    }

    #[test]
    fn test_missing_load_serializes_as_sentinel() {
        let facts = SystemFacts::collect(&NoLoadHost);
        assert_eq!(facts.load, Load::Unavailable);

        let json = serde_json::to_value(&facts).unwrap();
        assert_eq!(json["os"], "Windows");
        assert_eq!(json["release"], "10");
        assert_eq!(json["load"], "N/A");
    }

    #[test]
    fn test_load_averages_serialize_as_array() {
        let json = serde_json::to_value(Load::Averages([0.5, 0.25, 0.125])).unwrap();
        assert_eq!(json, serde_json::json!([0.5, 0.25, 0.125]));
    }

    #[test]
    fn test_system_host_reports_os() {
        let facts = SystemFacts::collect(&SystemHost);
        assert!(!facts.os.is_empty());

        #[cfg(unix)]
        assert!(matches!(facts.load, Load::Averages(_)));
        #[cfg(not(unix))]
        assert_eq!(facts.load, Load::Unavailable);
    }
}
