//! Shareable progress tokens and links.
//!
//! Visited progress travels between machines as a compact URL-safe token in
//! the `v` query parameter of a share link. Tokens carry a one-character
//! version prefix so old links stay readable if the format changes; tokens
//! from an unknown version decode to nothing rather than erroring.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use log::warn;
use thiserror::Error;
use url::Url;

/// Query parameter carrying encoded progress in a share link.
pub const SHARE_PARAM: &str = "v";
/// Version prefix of the current token format.
pub const TOKEN_VERSION: char = '1';

/// Reasons a share token can fail strict decoding.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token too short to carry a payload")]
    TooShort,
    #[error("unsupported token version '{0}'")]
    UnknownVersion(char),
    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload is not a JSON array")]
    NotAnArray,
}

/// Encode a slug list into a shareable token.
///
/// An empty list encodes to an empty string; callers must not put that in a
/// URL (see [`share_url`], which omits the parameter instead).
pub fn encode_token(slugs: &[String]) -> String {
    if slugs.is_empty() {
        return String::new();
    }
    let payload = match serde_json::to_vec(slugs) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("failed to serialize progress token payload: {err}");
            return String::new();
        },
    };
    let mut token = String::with_capacity(payload.len().div_ceil(3) * 4 + 1);
    token.push(TOKEN_VERSION);
    token.push_str(&URL_SAFE_NO_PAD.encode(payload));
    token
}

/// Decode a token into its slug list.
///
/// Malformed or unrecognized input yields an empty contribution, never an
/// error; the failure is logged and the caller merges nothing.
pub fn decode_token(token: &str) -> Vec<String> {
    match try_decode_token(token) {
        Ok(slugs) => slugs,
        Err(err) => {
            if !token.is_empty() {
                warn!("ignoring share token: {err}");
            }
            Vec::new()
        },
    }
}

/// Strict decoder behind [`decode_token`]; the public surface degrades to an
/// empty list so startup can never fail on a bad link.
fn try_decode_token(token: &str) -> Result<Vec<String>, TokenError> {
    let mut chars = token.chars();
    let version = chars.next().ok_or(TokenError::TooShort)?;
    let body = chars.as_str();
    if body.is_empty() {
        return Err(TokenError::TooShort);
    }
    if version != TOKEN_VERSION {
        return Err(TokenError::UnknownVersion(version));
    }

    let bytes = URL_SAFE_NO_PAD.decode(body)?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)?;
    let serde_json::Value::Array(items) = value else {
        return Err(TokenError::NotAnArray);
    };

    // Non-string elements are dropped, not an error.
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            serde_json::Value::String(slug) => Some(slug),
            _ => None,
        })
        .collect())
}

/// Build a share link: `base` with the progress parameter set to `token`.
///
/// Existing query parameters other than the progress key are kept. An empty
/// token yields `base` with no progress parameter at all.
pub fn share_url(base: &Url, token: &str) -> Url {
    let kept: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != SHARE_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = base.clone();
    url.set_query(None);
    if kept.is_empty() && token.is_empty() {
        return url;
    }

    let mut pairs = url.query_pairs_mut();
    for (key, value) in &kept {
        pairs.append_pair(key, value);
    }
    if !token.is_empty() {
        pairs.append_pair(SHARE_PARAM, token);
    }
    drop(pairs);
    url
}

/// Pull a share token out of pasted input: either a bare token or a full
/// share link carrying the progress parameter.
pub fn extract_token(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(url) = Url::parse(trimmed) {
        return url
            .query_pairs()
            .find(|(key, _)| key == SHARE_PARAM)
            .map(|(_, value)| value.into_owned());
    }
    Some(trimmed.to_string())
}
