//! Property tests for the route matcher and gate decision table.

use backend::config::routes::{RouteClass, RouteRules};
use backend::middleware::session_gate::{decide, GateDecision};
use proptest::prelude::*;

proptest! {
    // Fail-closed: whatever hangs off an admin prefix, no session means a
    // login redirect.
    #[test]
    fn admin_paths_without_session_always_redirect(suffix in "[a-z0-9/\\-]{0,40}") {
        let rules = RouteRules::default();
        let path = format!("/admin{suffix}");
        let class = rules.classify(&path);
        prop_assert!(class.admin_protected);
        prop_assert_eq!(decide(class, false), GateDecision::RedirectToLogin);
    }

    // The gate is total: every (class, session) combination lands on exactly
    // one outcome, and redirects only occur under the two redirect rules.
    #[test]
    fn decision_is_total_and_unique(
        admin in any::<bool>(),
        auth in any::<bool>(),
        session in any::<bool>(),
    ) {
        let class = RouteClass { admin_protected: admin, auth_only: auth };
        match decide(class, session) {
            GateDecision::RedirectToLogin => prop_assert!(admin && !session),
            GateDecision::RedirectToAdminHome => prop_assert!(!admin && auth && session),
            GateDecision::Forward => prop_assert!(
                (admin && session) || (!admin && auth && !session) || (!admin && !auth)
            ),
        }
    }

    // Exempt prefixes are exempt no matter the suffix.
    #[test]
    fn api_paths_are_always_exempt(suffix in "[a-z0-9/\\-\\.]{0,40}") {
        let rules = RouteRules::default();
        let path = format!("/api{}", suffix);
        prop_assert!(rules.is_exempt(&path));
    }
}
