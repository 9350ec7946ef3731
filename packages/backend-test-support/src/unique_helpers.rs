//! Test helpers for generating unique test data
//!
//! ULID-based so concurrent test runs never collide on unique columns.

use ulid::Ulid;

/// Generate a unique string in the format `{prefix}-{ulid}`
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("slug");
/// let b = unique_str("slug");
/// assert_ne!(a, b);
/// assert!(a.starts_with("slug-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique email address in the format `{prefix}-{ulid}@example.test`
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let email = unique_email("login");
/// assert!(email.starts_with("login-"));
/// assert!(email.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    // Lowercase so the address survives login normalization unchanged.
    format!("{}-{}@example.test", prefix, Ulid::new()).to_lowercase()
}
