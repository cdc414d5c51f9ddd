//! Public base-origin resolution.
//!
//! Short URLs are persisted and shared, so the origin baked into them must
//! stay stable even though the compute platform hands out a different
//! hostname per deployment. Resolution walks an ordered list of sources and
//! takes the first one that yields an origin.

use url::Url;

/// Path prefix reserved for short-link redirects: `<origin>/s/<code>`.
pub const REDIRECT_PREFIX: &str = "/s";

/// One layer of the base-origin resolution chain.
#[derive(Debug, Clone)]
pub enum BaseUrlSource {
    /// Explicitly configured public origin (`APP_URL`). Always wins when set.
    Explicit(Option<String>),

    /// Fixed, known production origin; applies only when the deployment
    /// environment reports itself as production.
    ProductionOrigin { environment: String, origin: String },

    /// Platform-issued deployment URL (`DEPLOYMENT_URL`). Trusted only when
    /// its host is the production host or one of its subdomains — ephemeral
    /// preview hostnames must never end up inside persisted short links.
    DeploymentUrl {
        url: Option<String>,
        production_host: String,
    },

    /// Local development fallback.
    Localhost { port: u16 },
}

impl BaseUrlSource {
    /// Returns the origin this layer contributes, if any.
    pub fn resolve(&self) -> Option<String> {
        match self {
            BaseUrlSource::Explicit(value) => value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| v.trim_end_matches('/').to_string()),

            BaseUrlSource::ProductionOrigin {
                environment,
                origin,
            } => (environment == "production")
                .then(|| origin.trim_end_matches('/').to_string()),

            BaseUrlSource::DeploymentUrl {
                url,
                production_host,
            } => {
                let raw = url.as_deref().map(str::trim).filter(|v| !v.is_empty())?;

                // Platforms commonly hand out a bare hostname.
                let candidate = if raw.contains("://") {
                    raw.to_string()
                } else {
                    format!("https://{raw}")
                };

                let parsed = Url::parse(&candidate).ok()?;
                let host = parsed.host_str()?;

                let is_production_host = host == production_host
                    || host
                        .strip_suffix(production_host)
                        .is_some_and(|prefix| prefix.ends_with('.'));

                is_production_host.then(|| format!("{}://{}", parsed.scheme(), host))
            }

            BaseUrlSource::Localhost { port } => Some(format!("http://localhost:{port}")),
        }
    }
}

/// Ordered base-origin resolution chain.
#[derive(Debug, Clone)]
pub struct BaseUrlResolver {
    sources: Vec<BaseUrlSource>,
}

impl BaseUrlResolver {
    pub fn new(sources: Vec<BaseUrlSource>) -> Self {
        Self { sources }
    }

    /// Resolves the public base origin: first source that yields one wins.
    pub fn resolve(&self) -> String {
        self.sources
            .iter()
            .find_map(BaseUrlSource::resolve)
            .unwrap_or_else(|| "http://localhost:3000".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_origin_wins() {
        let source = BaseUrlSource::Explicit(Some("https://links.example.com/".into()));
        assert_eq!(source.resolve().unwrap(), "https://links.example.com");
    }

    #[test]
    fn test_explicit_empty_is_skipped() {
        assert!(BaseUrlSource::Explicit(Some("   ".into())).resolve().is_none());
        assert!(BaseUrlSource::Explicit(None).resolve().is_none());
    }

    #[test]
    fn test_production_origin_only_in_production() {
        let prod = BaseUrlSource::ProductionOrigin {
            environment: "production".into(),
            origin: "https://biolink.page".into(),
        };
        assert_eq!(prod.resolve().unwrap(), "https://biolink.page");

        let preview = BaseUrlSource::ProductionOrigin {
            environment: "preview".into(),
            origin: "https://biolink.page".into(),
        };
        assert!(preview.resolve().is_none());
    }

    #[test]
    fn test_deployment_url_matching_production_host() {
        let source = BaseUrlSource::DeploymentUrl {
            url: Some("biolink.page".into()),
            production_host: "biolink.page".into(),
        };
        assert_eq!(source.resolve().unwrap(), "https://biolink.page");
    }

    #[test]
    fn test_deployment_url_subdomain_accepted() {
        let source = BaseUrlSource::DeploymentUrl {
            url: Some("https://www.biolink.page".into()),
            production_host: "biolink.page".into(),
        };
        assert_eq!(source.resolve().unwrap(), "https://www.biolink.page");
    }

    #[test]
    fn test_deployment_url_preview_hostname_rejected() {
        // Per-deployment preview hosts must not leak into shared links.
        let source = BaseUrlSource::DeploymentUrl {
            url: Some("biolink-git-feature-team.platform.app".into()),
            production_host: "biolink.page".into(),
        };
        assert!(source.resolve().is_none());
    }

    #[test]
    fn test_deployment_url_suffix_lookalike_rejected() {
        let source = BaseUrlSource::DeploymentUrl {
            url: Some("https://evilbiolink.page".into()),
            production_host: "biolink.page".into(),
        };
        assert!(source.resolve().is_none());
    }

    #[test]
    fn test_deployment_url_absent() {
        let source = BaseUrlSource::DeploymentUrl {
            url: None,
            production_host: "biolink.page".into(),
        };
        assert!(source.resolve().is_none());
    }

    #[test]
    fn test_localhost_fallback() {
        let source = BaseUrlSource::Localhost { port: 4000 };
        assert_eq!(source.resolve().unwrap(), "http://localhost:4000");
    }

    #[test]
    fn test_resolver_priority_order() {
        let resolver = BaseUrlResolver::new(vec![
            BaseUrlSource::Explicit(None),
            BaseUrlSource::ProductionOrigin {
                environment: "production".into(),
                origin: "https://biolink.page".into(),
            },
            BaseUrlSource::Localhost { port: 3000 },
        ]);

        assert_eq!(resolver.resolve(), "https://biolink.page");
    }

    #[test]
    fn test_resolver_explicit_beats_production() {
        let resolver = BaseUrlResolver::new(vec![
            BaseUrlSource::Explicit(Some("https://go.example.com".into())),
            BaseUrlSource::ProductionOrigin {
                environment: "production".into(),
                origin: "https://biolink.page".into(),
            },
        ]);

        assert_eq!(resolver.resolve(), "https://go.example.com");
    }

    #[test]
    fn test_resolver_falls_through_to_localhost() {
        let resolver = BaseUrlResolver::new(vec![
            BaseUrlSource::Explicit(None),
            BaseUrlSource::ProductionOrigin {
                environment: "development".into(),
                origin: "https://biolink.page".into(),
            },
            BaseUrlSource::DeploymentUrl {
                url: Some("preview-abc123.platform.app".into()),
                production_host: "biolink.page".into(),
            },
            BaseUrlSource::Localhost { port: 3000 },
        ]);

        assert_eq!(resolver.resolve(), "http://localhost:3000");
    }
}
