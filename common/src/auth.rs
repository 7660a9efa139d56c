use serde::{Deserialize, Serialize};
use thiserror::Error;

use api::encode_component;

use crate::config::AuthConfig;

// refresh a little before the provider's expiry so requests don't race it
const EXPIRY_MARGIN_SECS: i64 = 60;

// the bearer token handed back by the hosted sign-in page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id_token: String,
    pub expires_at: Option<i64>,
}

impl Session {
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at
            .is_some_and(|expires_at| now >= expires_at - EXPIRY_MARGIN_SECS)
    }
}

// counts sign-ins and sign-outs
//
// a request remembers the epoch it was issued under.  once the user has
// signed out or in again, its answer belongs to another session and must not
// touch the current one
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Epoch(u64);

impl Epoch {
    pub fn advance(&mut self) -> Epoch {
        self.0 += 1;
        *self
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum AuthError {
    #[error("sign-in failed: {error} {description}")]
    Provider { error: String, description: String },

    #[error("sign-in response did not include an id token")]
    MissingToken,
}

// the hosted login page, implicit grant
pub fn login_url(config: &AuthConfig) -> String {
    format!(
        "{}/login?response_type=token&client_id={}&redirect_uri={}&scope={}",
        config.domain.trim_end_matches('/'),
        encode_component(&config.client_id),
        encode_component(&config.redirect_uri),
        encode_component(&config.scope),
    )
}

pub fn logout_url(config: &AuthConfig) -> String {
    format!(
        "{}/logout?client_id={}&logout_uri={}",
        config.domain.trim_end_matches('/'),
        encode_component(&config.client_id),
        encode_component(&config.logout_uri),
    )
}

fn decode_component(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut idx = 0;

    while idx < bytes.len() {
        match bytes[idx] {
            b'+' => out.push(b' '),
            b'%' if idx + 2 < bytes.len()
                && bytes[idx + 1].is_ascii_hexdigit()
                && bytes[idx + 2].is_ascii_hexdigit() =>
            {
                let hex = [bytes[idx + 1], bytes[idx + 2]];
                let hex = std::str::from_utf8(&hex).unwrap_or("00");
                out.push(u8::from_str_radix(hex, 16).unwrap_or(0));
                idx += 2;
            }
            byte => out.push(byte),
        }
        idx += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

// pull the session out of the redirect fragment
//
//   #id_token=eyJ..&access_token=eyJ..&expires_in=3600&token_type=Bearer
//   #error=access_denied&error_description=User+cancelled
pub fn parse_callback(fragment: &str, now: i64) -> Result<Session, AuthError> {
    let mut id_token = None;
    let mut expires_in = None;
    let mut error = None;
    let mut description = String::new();

    for pair in fragment.trim_start_matches('#').split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));

        match key {
            "id_token" if !value.is_empty() => id_token = Some(decode_component(value)),
            "expires_in" => expires_in = value.parse::<i64>().ok(),
            "error" => error = Some(decode_component(value)),
            "error_description" => description = decode_component(value),
            _ => {}
        }
    }

    if let Some(error) = error {
        return Err(AuthError::Provider { error, description });
    }

    Ok(Session {
        id_token: id_token.ok_or(AuthError::MissingToken)?,
        expires_at: expires_in.map(|secs| now + secs),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AuthConfig {
        AuthConfig {
            domain: String::from("https://carnus.auth.example.com/"),
            client_id: String::from("abc123"),
            redirect_uri: String::from("https://console.example.com/signin"),
            logout_uri: String::from("https://console.example.com/"),
            scope: String::from("openid email"),
        }
    }

    #[test]
    fn hosted_urls() {
        assert_eq!(
            login_url(&config()),
            "https://carnus.auth.example.com/login?response_type=token&client_id=abc123\
             &redirect_uri=https%3A%2F%2Fconsole.example.com%2Fsignin&scope=openid%20email"
        );
        assert_eq!(
            logout_url(&config()),
            "https://carnus.auth.example.com/logout?client_id=abc123\
             &logout_uri=https%3A%2F%2Fconsole.example.com%2F"
        );
    }

    #[test]
    fn callback_yields_a_session() {
        let session = parse_callback(
            "#id_token=aaa.bbb.ccc&access_token=xxx&expires_in=3600&token_type=Bearer",
            1000,
        )
        .unwrap();

        assert_eq!(session.id_token, "aaa.bbb.ccc");
        assert_eq!(session.expires_at, Some(4600));
        assert!(!session.is_expired(1000));
        assert!(session.is_expired(4600 - EXPIRY_MARGIN_SECS));
    }

    #[test]
    fn callback_errors_are_reported() {
        assert_eq!(
            parse_callback("#error=access_denied&error_description=User+cancelled%21", 0),
            Err(AuthError::Provider {
                error: String::from("access_denied"),
                description: String::from("User cancelled!"),
            })
        );
        assert_eq!(parse_callback("", 0), Err(AuthError::MissingToken));
        assert_eq!(parse_callback("#id_token=", 0), Err(AuthError::MissingToken));
    }

    #[test]
    fn tokens_are_form_decoded() {
        let session = parse_callback("#id_token=aaa%2Ebbb.c%2Bc&expires_in=60", 0).unwrap();
        assert_eq!(session.id_token, "aaa.bbb.c+c");

        let session = parse_callback("#id_token=a+b%%41", 0).unwrap();
        assert_eq!(session.id_token, "a b%A");
    }

    #[test]
    fn sessions_without_expiry_never_expire() {
        let session = Session {
            id_token: String::from("t"),
            expires_at: None,
        };
        assert!(!session.is_expired(i64::MAX));
    }

    #[test]
    fn malformed_escapes_pass_through() {
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
        assert_eq!(decode_component("%41b"), "Ab");
    }

    #[test]
    fn epochs_never_repeat() {
        let mut current = Epoch::default();
        let issued = current;

        let signed_in = current.advance();
        assert_ne!(issued, current);
        assert_eq!(signed_in, current);

        current.advance();
        assert_ne!(signed_in, current);
        assert_ne!(issued, current);
    }
}
