//! Subdomain label validation
//!
//! Checked portal-side before any upstream call; the backend repeats the
//! same checks authoritatively.

use crate::error::{CoreError, CoreResult};

/// Labels the platform keeps for itself.
const RESERVED: &[&str] = &[
    "api", "admin", "www", "mail", "ftp", "test", "dev", "support", "help",
];

/// DNS label bounds (RFC 1035, lower bound tightened by product policy).
const MIN_LEN: usize = 3;
const MAX_LEN: usize = 63;

/// Validate a requested subdomain label.
///
/// Rules: lowercase `[a-z0-9-]`, 3-63 characters, no leading/trailing
/// hyphen, not on the reserved list.
pub fn validate_subdomain(subdomain: &str) -> CoreResult<()> {
    if subdomain.len() < MIN_LEN {
        return Err(CoreError::Validation(format!(
            "Subdomain must be at least {MIN_LEN} characters"
        )));
    }
    if subdomain.len() > MAX_LEN {
        return Err(CoreError::Validation(format!(
            "Subdomain must be at most {MAX_LEN} characters"
        )));
    }
    if !subdomain
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(
            "Subdomain may only contain lowercase letters, digits and hyphens".to_string(),
        ));
    }
    if subdomain.starts_with('-') || subdomain.ends_with('-') {
        return Err(CoreError::Validation(
            "Subdomain may not start or end with a hyphen".to_string(),
        ));
    }
    if RESERVED.contains(&subdomain) {
        return Err(CoreError::Validation(format!(
            "Subdomain '{subdomain}' is reserved"
        )));
    }
    Ok(())
}
