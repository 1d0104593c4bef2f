//! Ambient user identity.
//!
//! Used only to attribute ownership of uploads and for display. The parsing
//! core never consults it.

/// Environment variable that overrides the detected user.
pub const USER_ENV: &str = "SYNOPSIS_USER";

/// Resolve the current user name.
///
/// Checks `SYNOPSIS_USER`, then the platform `USER` variable, then falls
/// back to "anonymous".
#[must_use]
pub fn current_user() -> String {
    std::env::var(USER_ENV)
        .or_else(|_| std::env::var("USER"))
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "anonymous".to_string())
}
