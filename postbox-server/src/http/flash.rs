//! One-shot flash messages in a signed cookie.
//!
//! A message queued during one request (a failed submission) rides to the
//! next page render in a single signed cookie and is cleared as soon as it
//! is shown.

use axum_extra::extract::cookie::{Cookie, Key, SignedCookieJar};
use sha2::{Digest, Sha512};

const FLASH_COOKIE: &str = "postbox_flash";

/// Derive the cookie-signing key from the configured secret. SHA-512
/// output is exactly the 64 bytes `Key::from` requires, so secrets of any
/// length work.
pub fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Queue a flash message for the next page render.
pub fn set(jar: SignedCookieJar, message: &str) -> SignedCookieJar {
    jar.add(Cookie::build((FLASH_COOKIE, message.to_owned())).path("/"))
}

/// Take the pending flash message, clearing it from the jar.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Option<String>) {
    match jar.get(FLASH_COOKIE) {
        Some(cookie) => {
            let message = cookie.value().to_owned();
            (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), Some(message))
        }
        None => (jar, None),
    }
}
