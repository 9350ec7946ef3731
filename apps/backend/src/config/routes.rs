//! Route-class configuration for the session gate.
//!
//! All prefix matching for the gate lives here, in one matcher, so the
//! admin-redirect and login-redirect rules cannot drift apart. The prefix
//! lists are configuration data: env-overridable, defaults matching the
//! site's layout.

use std::env;

/// Route classes a path can belong to. A path may be in zero classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteClass {
    /// Path is under an admin-protected prefix (back-office pages).
    pub admin_protected: bool,
    /// Path is under an auth-only prefix (login/register/password-reset).
    pub auth_only: bool,
}

/// Prefix lists and redirect targets consumed solely by the session gate.
#[derive(Debug, Clone)]
pub struct RouteRules {
    /// Prefixes that require a valid session (e.g. `/admin`)
    pub admin_prefixes: Vec<String>,
    /// Prefixes that only make sense for anonymous visitors (e.g. `/auth`)
    pub auth_prefixes: Vec<String>,
    /// Prefixes the gate never touches: API, static assets, health
    pub exempt_prefixes: Vec<String>,
    /// Where anonymous visitors to admin pages are sent
    pub login_path: String,
    /// Where authenticated visitors to auth pages are sent
    pub admin_home: String,
}

impl RouteRules {
    /// Read the rules from the environment, falling back to the site defaults.
    ///
    /// `ADMIN_ROUTE_PREFIXES`, `AUTH_ROUTE_PREFIXES` and `GATE_EXEMPT_PREFIXES`
    /// are comma-separated path prefixes.
    pub fn from_env() -> Self {
        Self {
            admin_prefixes: prefix_list("ADMIN_ROUTE_PREFIXES", &["/admin"]),
            auth_prefixes: prefix_list("AUTH_ROUTE_PREFIXES", &["/auth"]),
            exempt_prefixes: prefix_list(
                "GATE_EXEMPT_PREFIXES",
                &["/api", "/static", "/assets", "/health", "/favicon.ico"],
            ),
            login_path: env::var("LOGIN_PATH").unwrap_or_else(|_| "/auth/login".to_string()),
            admin_home: env::var("ADMIN_HOME_PATH").unwrap_or_else(|_| "/admin".to_string()),
        }
    }

    /// Whether the gate skips this path entirely (forwarded untouched, never
    /// redirected, no session refresh).
    pub fn is_exempt(&self, path: &str) -> bool {
        if self.exempt_prefixes.iter().any(|p| path.starts_with(p)) {
            return true;
        }
        // Static asset filenames: a dot in the last path segment.
        path.rsplit('/').next().is_some_and(|seg| seg.contains('.'))
    }

    /// Classify a path into route classes by prefix.
    pub fn classify(&self, path: &str) -> RouteClass {
        RouteClass {
            admin_protected: self.admin_prefixes.iter().any(|p| path.starts_with(p)),
            auth_only: self.auth_prefixes.iter().any(|p| path.starts_with(p)),
        }
    }
}

impl Default for RouteRules {
    fn default() -> Self {
        Self {
            admin_prefixes: vec!["/admin".to_string()],
            auth_prefixes: vec!["/auth".to_string()],
            exempt_prefixes: vec![
                "/api".to_string(),
                "/static".to_string(),
                "/assets".to_string(),
                "/health".to_string(),
                "/favicon.ico".to_string(),
            ],
            login_path: "/auth/login".to_string(),
            admin_home: "/admin".to_string(),
        }
    }
}

fn prefix_list(var: &str, defaults: &[&str]) -> Vec<String> {
    match env::var(var) {
        Ok(raw) => {
            let parsed: Vec<String> = raw
                .split(',')
                .map(|s| s.trim())
                .filter(|s| s.starts_with('/'))
                .map(|s| s.to_string())
                .collect();
            if parsed.is_empty() {
                defaults.iter().map(|s| s.to_string()).collect()
            } else {
                parsed
            }
        }
        Err(_) => defaults.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_admin_paths() {
        let rules = RouteRules::default();
        assert!(rules.classify("/admin").admin_protected);
        assert!(rules.classify("/admin/projects").admin_protected);
        assert!(!rules.classify("/admin").auth_only);
        assert!(!rules.classify("/blog/post-1").admin_protected);
    }

    #[test]
    fn classify_auth_paths() {
        let rules = RouteRules::default();
        assert!(rules.classify("/auth/login").auth_only);
        assert!(rules.classify("/auth/register").auth_only);
        assert!(!rules.classify("/auth/login").admin_protected);
    }

    #[test]
    fn public_paths_are_in_no_class() {
        let rules = RouteRules::default();
        let class = rules.classify("/projects");
        assert!(!class.admin_protected);
        assert!(!class.auth_only);
    }

    #[test]
    fn api_and_assets_are_exempt() {
        let rules = RouteRules::default();
        assert!(rules.is_exempt("/api/auth/login"));
        assert!(rules.is_exempt("/static/css/site.css"));
        assert!(rules.is_exempt("/health"));
        assert!(rules.is_exempt("/favicon.ico"));
        assert!(rules.is_exempt("/images/hero.webp"));
        assert!(!rules.is_exempt("/admin/projects"));
        assert!(!rules.is_exempt("/blog"));
    }
}
