//! Cookie-carried sessions.
//!
//! The session is a single signed cookie whose value is the authenticated
//! username. Signing uses a [`Key`] derived from the configured secret, or a
//! random key when no secret is configured, in which case every restart logs
//! all users out.

use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use sha2::{Digest, Sha512};
use tracing::warn;

pub const SESSION_COOKIE_NAME: &str = "atelier_session";

/// Username of the authenticated caller, inserted into request extensions by
/// the session middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub username: String,
}

/// Build the cookie signing key.
///
/// Any secret length is accepted; it is stretched to the 64 bytes the signer
/// needs with SHA-512.
pub fn cookie_key(secret: Option<&str>) -> Key {
    match secret {
        Some(secret) => {
            let digest = Sha512::digest(secret.as_bytes());
            Key::from(digest.as_slice())
        }
        None => {
            warn!(
                "ATELIER_SESSION_SECRET is not set; generated a random session key, sessions will not survive a restart"
            );
            Key::generate()
        }
    }
}

pub fn create_session_cookie(username: &str, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, username.to_string()))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}

pub fn start_session(jar: SignedCookieJar, username: &str, secure: bool) -> SignedCookieJar {
    jar.add(create_session_cookie(username, secure))
}

pub fn end_session(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE_NAME).path("/"))
}

/// Username from a verified session cookie. Tampered or foreign-key cookies
/// are treated as absent.
pub fn session_username(jar: &SignedCookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .filter(|username| !username.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_secret_derives_same_key() {
        let a = cookie_key(Some("hunter2"));
        let b = cookie_key(Some("hunter2"));
        assert_eq!(a.master(), b.master());

        let c = cookie_key(Some("other"));
        assert_ne!(a.master(), c.master());
    }

    #[test]
    fn missing_secret_generates_fresh_keys() {
        assert_ne!(cookie_key(None).master(), cookie_key(None).master());
    }

    #[test]
    fn started_session_exposes_username() {
        let key = cookie_key(Some("secret"));
        let jar = start_session(SignedCookieJar::new(key), "alice", false);
        assert_eq!(session_username(&jar).as_deref(), Some("alice"));
    }

    #[test]
    fn session_cookie_attributes() {
        let cookie = create_session_cookie("alice", true);
        assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn ended_session_reads_as_anonymous() {
        let key = cookie_key(Some("secret"));
        let jar = start_session(SignedCookieJar::new(key), "alice", false);
        let jar = end_session(jar);
        assert_eq!(session_username(&jar), None);
    }
}
