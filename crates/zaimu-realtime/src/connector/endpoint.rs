// zaimu-core-client/zaimu-realtime
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{anyhow, Result};
use url::Url;

/// Resolves the socket endpoint for a deployment. An explicit override wins,
/// local development origins fall back to the conventional dev server port,
/// everything else derives the endpoint from the origin itself.
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    origin: Url,
    endpoint_override: Option<Url>,
}

impl EndpointResolver {
    pub fn new(origin: Url) -> Self {
        EndpointResolver {
            origin,
            endpoint_override: None,
        }
    }

    pub fn with_override(mut self, endpoint: Url) -> Self {
        self.endpoint_override = Some(endpoint);
        self
    }

    pub fn resolve(&self) -> Result<Url> {
        if let Some(endpoint) = &self.endpoint_override {
            return Ok(endpoint.clone());
        }

        let host = self
            .origin
            .host_str()
            .ok_or_else(|| anyhow!("Origin {} has no host", self.origin))?;

        if host == "localhost" || host == "127.0.0.1" {
            return Ok(Url::parse("ws://localhost:8000")?);
        }

        let scheme = match self.origin.scheme() {
            "https" | "wss" => "wss",
            _ => "ws",
        };

        let mut endpoint = self.origin.clone();
        endpoint
            .set_scheme(scheme)
            .map_err(|_| anyhow!("Cannot derive socket scheme for {}", self.origin))?;
        endpoint.set_path("");
        endpoint.set_query(None);
        endpoint.set_fragment(None);
        Ok(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn resolver(origin: &str) -> EndpointResolver {
        EndpointResolver::new(Url::parse(origin).unwrap())
    }

    #[test]
    fn test_override_takes_precedence() {
        let endpoint = resolver("https://app.zaimu.jp")
            .with_override(Url::parse("wss://sockets.zaimu.jp:9443").unwrap())
            .resolve()
            .unwrap();
        assert_eq!(endpoint.as_str(), "wss://sockets.zaimu.jp:9443/");
    }

    #[test]
    fn test_loopback_origin_uses_dev_server() {
        assert_eq!(
            resolver("http://localhost:5173").resolve().unwrap().as_str(),
            "ws://localhost:8000/"
        );
        assert_eq!(
            resolver("http://127.0.0.1:5173").resolve().unwrap().as_str(),
            "ws://localhost:8000/"
        );
    }

    #[test]
    fn test_production_origin_derives_endpoint() {
        assert_eq!(
            resolver("https://app.zaimu.jp/tasks?f=1")
                .resolve()
                .unwrap()
                .as_str(),
            "wss://app.zaimu.jp/"
        );
        assert_eq!(
            resolver("http://staging.zaimu.jp").resolve().unwrap().as_str(),
            "ws://staging.zaimu.jp/"
        );
    }
}
