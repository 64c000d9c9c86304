use crate::error::FlamethrowerError;
use derive_more::Display;

/// Transport and, for DNS over HTTPS, the HTTP method used by a flamethrower run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, PartialOrd, Ord)]
pub enum Protocol {
    #[display("udp")]
    Udp,
    #[display("https-GET")]
    HttpsGet,
    #[display("https-POST")]
    HttpsPost,
}

pub const DEFAULT_PROTOCOL: &str = "udp";
pub const DEFAULT_HTTP_METHOD: &str = "GET";

impl Protocol {
    pub const ALL: [Protocol; 3] = [Protocol::Udp, Protocol::HttpsGet, Protocol::HttpsPost];

    /// Resolves the values of the `-P` and `-M` flags. The method only matters for https.
    pub fn from_flags(protocol: &str, method: Option<&str>) -> Result<Self, FlamethrowerError> {
        match protocol {
            "udp" => Ok(Protocol::Udp),
            "https" => match method.unwrap_or(DEFAULT_HTTP_METHOD) {
                "GET" => Ok(Protocol::HttpsGet),
                "POST" => Ok(Protocol::HttpsPost),
                other => Err(FlamethrowerError::UnsupportedProtocol(format!(
                    "{protocol}-{other}"
                ))),
            },
            other => Err(FlamethrowerError::UnsupportedProtocol(other.to_owned())),
        }
    }

    pub fn legend(&self) -> &'static str {
        match self {
            Protocol::Udp => "UDP",
            Protocol::HttpsGet => "HTTPS GET",
            Protocol::HttpsPost => "HTTPS POST",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("udp", None, Protocol::Udp; "udp ignores method")]
    #[test_case("udp", Some("POST"), Protocol::Udp; "udp with method flag")]
    #[test_case("https", None, Protocol::HttpsGet; "https defaults to get")]
    #[test_case("https", Some("GET"), Protocol::HttpsGet; "https get")]
    #[test_case("https", Some("POST"), Protocol::HttpsPost; "https post")]
    fn should_resolve_protocol_from_flags(
        protocol: &str,
        method: Option<&str>,
        expected: Protocol,
    ) {
        assert_eq!(Protocol::from_flags(protocol, method).unwrap(), expected);
    }

    #[test]
    fn should_reject_unknown_transport_and_method() {
        assert!(matches!(
            Protocol::from_flags("tcp", None),
            Err(FlamethrowerError::UnsupportedProtocol(p)) if p == "tcp"
        ));
        assert!(matches!(
            Protocol::from_flags("https", Some("PUT")),
            Err(FlamethrowerError::UnsupportedProtocol(p)) if p == "https-PUT"
        ));
    }

    #[test]
    fn should_display_effective_labels() {
        let labels: Vec<String> = Protocol::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(labels, vec!["udp", "https-GET", "https-POST"]);
    }
}
