//! Route classification used by the access middleware.
//!
//! Patterns ending in `/*` match by prefix; everything else matches the path
//! exactly. The table is immutable configuration: it is compiled in rather
//! than read from the environment so the gate cannot drift per deployment.

/// Query parameter attached by the bot-challenge provider on replayed
/// requests. Requests carrying it are neutralized with a redirect instead of
/// being processed.
pub const CHALLENGE_TOKEN_PARAM: &str = "_cf_chl_tk";

/// Paths reachable without an authenticated session.
const PUBLIC_ROUTE_PATTERNS: &[&str] = &[
    "/",
    "/legal",
    "/s/",
    "/api/webhook",
    "/api/tutor",
    "/image",
    "/validation",
    "/auth/callback",
    "/auth/confirm",
    "/preview/*",
    "/my-story/*",
];

/// Paths the middleware never inspects at all (static assets, the image
/// optimizer, favicon, served videos).
const MATCHER_EXCLUSIONS: &[&str] = &["/static/", "/image-opt/", "/favicon.ico", "/videos/"];

const ASSET_PREFIX: &str = "/images";
const AUTH_CALLBACK_PREFIX: &str = "/auth/callback";

/// One entry in the public-route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicRoute {
    Exact(String),
    Prefix(String),
}

impl PublicRoute {
    /// Parse a table pattern: a trailing `/*` makes it a prefix pattern.
    pub fn parse(pattern: &str) -> Self {
        match pattern.strip_suffix("/*") {
            Some(prefix) => PublicRoute::Prefix(format!("{prefix}/")),
            None => PublicRoute::Exact(pattern.to_string()),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            PublicRoute::Exact(route) => route == path,
            PublicRoute::Prefix(prefix) => path.starts_with(prefix.as_str()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RoutesConfig {
    pub public_routes: Vec<PublicRoute>,
    pub matcher_exclusions: Vec<String>,
    pub asset_prefix: String,
    pub auth_callback_prefix: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            public_routes: PUBLIC_ROUTE_PATTERNS
                .iter()
                .map(|p| PublicRoute::parse(p))
                .collect(),
            matcher_exclusions: MATCHER_EXCLUSIONS.iter().map(|p| p.to_string()).collect(),
            asset_prefix: ASSET_PREFIX.to_string(),
            auth_callback_prefix: AUTH_CALLBACK_PREFIX.to_string(),
        }
    }
}

impl RoutesConfig {
    pub fn is_public(&self, path: &str) -> bool {
        self.public_routes.iter().any(|route| route.matches(path))
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.matcher_exclusions
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    pub fn is_asset(&self, path: &str) -> bool {
        path.starts_with(self.asset_prefix.as_str())
    }

    pub fn is_auth_callback(&self, path: &str) -> bool {
        path.starts_with(self.auth_callback_prefix.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_patterns_do_not_match_prefixes() {
        let config = RoutesConfig::default();

        assert!(config.is_public("/"));
        assert!(config.is_public("/legal"));
        assert!(!config.is_public("/legal/terms"));
        assert!(config.is_public("/s/"));
        assert!(!config.is_public("/s/abc123"));
    }

    #[test]
    fn wildcard_patterns_match_by_prefix() {
        let config = RoutesConfig::default();

        assert!(config.is_public("/preview/anything/here"));
        assert!(config.is_public("/my-story/42"));
        assert!(!config.is_public("/preview"));
        assert!(!config.is_public("/my-stories/42"));
    }

    #[test]
    fn api_surface_is_selectively_public() {
        let config = RoutesConfig::default();

        assert!(config.is_public("/api/webhook"));
        assert!(config.is_public("/api/tutor"));
        assert!(!config.is_public("/api/invite"));
    }

    #[test]
    fn matcher_exclusions_cover_asset_namespaces() {
        let config = RoutesConfig::default();

        assert!(config.is_excluded("/static/app.css"));
        assert!(config.is_excluded("/favicon.ico"));
        assert!(config.is_excluded("/videos/intro.mp4"));
        assert!(!config.is_excluded("/settings"));
    }

    #[test]
    fn parse_keeps_trailing_slash_semantics() {
        assert_eq!(
            PublicRoute::parse("/preview/*"),
            PublicRoute::Prefix("/preview/".to_string())
        );
        assert_eq!(
            PublicRoute::parse("/s/"),
            PublicRoute::Exact("/s/".to_string())
        );
    }
}
