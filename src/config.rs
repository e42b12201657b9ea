/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Service configuration.
//!
//! [`Config`] carries the pieces of client configuration this crate needs to
//! assemble a request: the region (which determines the endpoint) and an
//! optional endpoint override for testing or private deployments. Everything
//! else a live client needs (credentials, timeouts, retry policy) belongs to
//! the transport runtime and has no representation here.

use aws_types::region::Region;
use http::Uri;

/// Configuration for the RDS service.
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub(crate) region: Option<Region>,
    pub(crate) endpoint: Option<Uri>,
}

impl Config {
    /// Returns a builder for `Config`.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The region requests are routed to.
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Resolves the endpoint for a request.
    ///
    /// An explicitly configured endpoint wins; otherwise the regional
    /// `rds.{region}.amazonaws.com` endpoint is constructed. Returns `None`
    /// when neither an endpoint nor a region is configured.
    pub(crate) fn resolve_endpoint(&self) -> Option<Uri> {
        if let Some(endpoint) = &self.endpoint {
            return Some(endpoint.clone());
        }
        let region = self.region.as_ref()?;
        let uri = format!("https://rds.{}.amazonaws.com/", region)
            .parse::<Uri>()
            .ok()?;
        tracing::debug!(region = %region, endpoint = %uri, "resolved regional endpoint");
        Some(uri)
    }
}

/// Builder for [`Config`].
#[derive(Debug, Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint: Option<Uri>,
}

impl Builder {
    /// Sets the region requests are routed to.
    pub fn region(mut self, region: impl Into<Region>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Overrides the endpoint all requests are sent to.
    ///
    /// When set, the region is ignored for routing (but remains available to
    /// callers that need it, e.g. for signing).
    pub fn endpoint(mut self, endpoint: Uri) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Builds the [`Config`].
    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint: self.endpoint,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use aws_types::region::Region;
    use http::Uri;

    #[test]
    fn regional_endpoint() {
        let config = Config::builder().region(Region::new("eu-west-2")).build();
        assert_eq!(
            config.resolve_endpoint(),
            Some(Uri::from_static("https://rds.eu-west-2.amazonaws.com/"))
        );
    }

    #[test]
    fn endpoint_override_wins() {
        let config = Config::builder()
            .region(Region::new("eu-west-2"))
            .endpoint(Uri::from_static("http://localhost:8000"))
            .build();
        assert_eq!(
            config.resolve_endpoint(),
            Some(Uri::from_static("http://localhost:8000"))
        );
    }

    #[test]
    fn unconfigured_has_no_endpoint() {
        assert_eq!(Config::default().resolve_endpoint(), None);
    }
}
