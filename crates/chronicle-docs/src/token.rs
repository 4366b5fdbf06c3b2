// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! OAuth 2.0 JWT-bearer token exchange for service accounts

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::api_error;
use crate::credentials::Credentials;
use crate::error::DocsError;

/// Grant type for the JWT-bearer flow
pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for the signed assertion, in seconds (Google's maximum)
pub const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Claims of the signed assertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer: the service account email
    pub iss: String,
    /// Space-separated scopes
    pub scope: String,
    /// Audience: the token endpoint
    pub aud: String,
    /// Issued-at, unix seconds
    pub iat: i64,
    /// Expiry, unix seconds
    pub exp: i64,
}

impl Claims {
    /// Claims for `credentials` issued at `now`
    #[must_use]
    pub fn new(credentials: &Credentials, now: DateTime<Utc>) -> Self {
        let iat = now.timestamp();
        Self {
            iss: credentials.key().client_email.clone(),
            scope: credentials.scope_string(),
            aud: credentials.key().token_uri.clone(),
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        }
    }
}

/// Sign the RS256 assertion exchanged for an access token
///
/// # Errors
///
/// Returns `DocsError::InvalidKey` if the private key is not a usable RSA PEM.
pub fn sign_assertion(credentials: &Credentials, now: DateTime<Utc>) -> Result<String, DocsError> {
    let key = EncodingKey::from_rsa_pem(credentials.key().private_key.as_bytes())?;
    let mut header = Header::new(Algorithm::RS256);
    header.kid.clone_from(&credentials.key().private_key_id);
    Ok(jsonwebtoken::encode(
        &header,
        &Claims::new(credentials, now),
        &key,
    )?)
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Exchange a signed assertion for a bearer access token
///
/// # Errors
///
/// Returns `DocsError` if signing fails, the request fails, or the endpoint
/// rejects the assertion.
pub fn fetch_access_token(http: &Client, credentials: &Credentials) -> Result<String, DocsError> {
    let assertion = sign_assertion(credentials, Utc::now())?;
    let token_uri = &credentials.key().token_uri;
    debug!(token_uri = %token_uri, "Requesting access token");

    let response = http
        .post(token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()?;

    let status = response.status();
    let body = response.text()?;
    if !status.is_success() {
        return Err(api_error("token", status.as_u16(), &body));
    }

    let token: TokenResponse = serde_json::from_str(&body).map_err(|source| DocsError::Decode {
        service: "token",
        source,
    })?;
    debug!(expires_in = ?token.expires_in, "Access token granted");
    Ok(token.access_token)
}
