//! Cached session token
//!
//! Tokens are issued elsewhere (web login) and dropped into a file this
//! CLI reads. When the backend rejects the session, the cache is cleared
//! so the next call starts unauthenticated instead of looping on a dead
//! token.

use std::path::PathBuf;

use tracing::{debug, warn};

/// Location of the cached token
///
/// `GANTRY_TOKEN_FILE` when set, otherwise `$HOME/.gantry/token`.
fn token_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("GANTRY_TOKEN_FILE") {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".gantry").join("token"))
}

/// Read the cached session token, if one exists
pub fn load_token() -> Option<String> {
    let path = token_file()?;
    match std::fs::read_to_string(&path) {
        Ok(token) => {
            let token = token.trim().to_string();
            (!token.is_empty()).then_some(token)
        }
        Err(err) => {
            debug!(path = %path.display(), %err, "no cached token");
            None
        }
    }
}

/// Remove the cached session token
pub fn clear_token() {
    let Some(path) = token_file() else {
        return;
    };
    if !path.exists() {
        return;
    }
    if let Err(err) = std::fs::remove_file(&path) {
        warn!(path = %path.display(), %err, "failed to clear cached token");
    }
}
