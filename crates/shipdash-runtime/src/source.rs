use crate::{Error, Result};
use reqwest::Url;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where the shipment list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipmentSource {
    /// GET endpoint returning a JSON array of shipments
    Http(Url),
    /// Local JSON file with the same shape
    File(PathBuf),
}

impl ShipmentSource {
    /// `http://` and `https://` are HTTP sources; `file://` URLs and anything
    /// else are treated as file paths.
    pub fn parse(endpoint: &str) -> Result<Self> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            return Err(Error::InvalidSource("endpoint is empty".to_string()));
        }

        let lower = endpoint.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(endpoint)
                .map_err(|e| Error::InvalidSource(format!("{}: {}", endpoint, e)))?;
            return Ok(ShipmentSource::Http(url));
        }

        if lower.starts_with("file://") {
            let path = Url::parse(endpoint)
                .ok()
                .and_then(|url| url.to_file_path().ok())
                .ok_or_else(|| {
                    Error::InvalidSource(format!("{}: not a local file URL", endpoint))
                })?;
            return Ok(ShipmentSource::File(path));
        }

        if let Some((scheme, _)) = endpoint.split_once("://") {
            return Err(Error::InvalidSource(format!(
                "unsupported scheme: {} (only http, https and file are allowed)",
                scheme
            )));
        }

        Ok(ShipmentSource::File(PathBuf::from(endpoint)))
    }
}

impl FromStr for ShipmentSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ShipmentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipmentSource::Http(url) => write!(f, "{}", url),
            ShipmentSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_sources() {
        let source = ShipmentSource::parse("https://api.example.com/shipments").unwrap();
        assert!(matches!(source, ShipmentSource::Http(ref url) if url.host_str() == Some("api.example.com")));

        let source: ShipmentSource = "HTTP://localhost:3000/shipments".parse().unwrap();
        assert!(matches!(source, ShipmentSource::Http(_)));
    }

    #[test]
    fn test_file_sources() {
        assert_eq!(
            ShipmentSource::parse("data/shipments.json").unwrap(),
            ShipmentSource::File(PathBuf::from("data/shipments.json"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_file_url_sources() {
        assert_eq!(
            ShipmentSource::parse("file:///tmp/shipments.json").unwrap(),
            ShipmentSource::File(PathBuf::from("/tmp/shipments.json"))
        );
    }

    #[test]
    fn test_rejects_unusable_endpoints() {
        assert!(matches!(
            ShipmentSource::parse("   "),
            Err(Error::InvalidSource(_))
        ));
        assert!(matches!(
            ShipmentSource::parse("ftp://example.com/shipments.json"),
            Err(Error::InvalidSource(_))
        ));
        assert!(matches!(
            ShipmentSource::parse("http://"),
            Err(Error::InvalidSource(_))
        ));
    }

    #[test]
    fn test_display() {
        let source = ShipmentSource::parse("/srv/shipments.json").unwrap();
        assert_eq!(source.to_string(), "/srv/shipments.json");
    }
}
