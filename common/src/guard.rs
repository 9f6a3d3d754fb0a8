//! Per-navigation access decisions.
//!
//! The layout component runs `evaluate` against the target path and the
//! live session state before rendering anything, so protected pages never
//! flash for signed-out visitors.

/// Path prefixes reachable only with a valid session.
const PROTECTED_PREFIXES: &[&str] = &["/admin"];

/// Sign-in/sign-up paths that signed-in users are bounced away from.
const AUTH_PREFIXES: &[&str] = &["/login", "/signup"];

/// Static file suffixes the guard never inspects.
const IMAGE_EXTENSIONS: &[&str] = &[".svg", ".png", ".jpg", ".jpeg", ".gif", ".webp"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Send to the login page, carrying the originally requested path so
    /// the user lands back where they were headed.
    RedirectToLogin { redirect: String },
    /// Already signed in; auth pages redirect to the catalog.
    RedirectToCatalog,
}

/// Whether the guard inspects this path at all. API calls, bundled assets,
/// the favicon, and raw images pass through untouched.
pub fn applies_to(path: &str) -> bool {
    if path.starts_with("/api/") || path == "/api" {
        return false;
    }
    if path.starts_with("/assets/") || path == "/favicon.ico" {
        return false;
    }
    if IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        return false;
    }
    true
}

/// The decision for one navigation.
pub fn evaluate(path: &str, authenticated: bool) -> GuardDecision {
    if !applies_to(path) {
        return GuardDecision::Allow;
    }

    let is_protected = PROTECTED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix));
    let is_auth_route = AUTH_PREFIXES.iter().any(|prefix| path.starts_with(prefix));

    if is_protected && !authenticated {
        return GuardDecision::RedirectToLogin {
            redirect: path.to_string(),
        };
    }
    if is_auth_route && authenticated {
        return GuardDecision::RedirectToCatalog;
    }
    GuardDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_route_without_session_goes_to_login() {
        assert_eq!(
            evaluate("/admin", false),
            GuardDecision::RedirectToLogin {
                redirect: "/admin".into()
            }
        );
        assert_eq!(
            evaluate("/admin/add-food", false),
            GuardDecision::RedirectToLogin {
                redirect: "/admin/add-food".into()
            }
        );
    }

    #[test]
    fn protected_route_with_session_passes() {
        assert_eq!(evaluate("/admin", true), GuardDecision::Allow);
        assert_eq!(evaluate("/admin/add-food", true), GuardDecision::Allow);
    }

    #[test]
    fn auth_routes_bounce_signed_in_users() {
        assert_eq!(evaluate("/login", true), GuardDecision::RedirectToCatalog);
        assert_eq!(evaluate("/signup", true), GuardDecision::RedirectToCatalog);
        assert_eq!(
            evaluate("/login?redirect=/admin", true),
            GuardDecision::RedirectToCatalog
        );
    }

    #[test]
    fn auth_routes_allow_signed_out_users() {
        assert_eq!(evaluate("/login", false), GuardDecision::Allow);
        assert_eq!(evaluate("/signup", false), GuardDecision::Allow);
    }

    #[test]
    fn public_routes_always_pass() {
        for path in ["/", "/foods", "/foods/abc123"] {
            assert_eq!(evaluate(path, false), GuardDecision::Allow);
            assert_eq!(evaluate(path, true), GuardDecision::Allow);
        }
    }

    #[test]
    fn matcher_skips_api_assets_and_images() {
        assert!(!applies_to("/api/foods"));
        assert!(!applies_to("/assets/main.css"));
        assert!(!applies_to("/favicon.ico"));
        assert!(!applies_to("/hero.png"));
        assert!(!applies_to("/img/banner.webp"));
        assert!(applies_to("/foods"));
        assert!(applies_to("/admin"));
    }

    #[test]
    fn skipped_paths_are_never_redirected() {
        // Even "protected-looking" asset paths pass through.
        assert_eq!(evaluate("/admin/logo.png", false), GuardDecision::Allow);
    }
}
