use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{config, types::Token};

/// Requests an access token via the OAuth client-credentials grant.
///
/// Exchanges the configured client ID and secret for a short-lived bearer
/// token by POSTing to Spotify's token endpoint with an HTTP Basic
/// authorization header. This is the only authentication step the tool
/// needs: all catalog reads are app-level and require no user consent.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - token with access token, type and expiration metadata
/// - `Err(reqwest::Error)` - network error, API error, or other HTTP-related
///   error (including invalid credentials surfacing as a 4xx status)
///
/// # Token Contents
///
/// The returned token includes:
/// - Access token for API authentication
/// - Token type (always "Bearer")
/// - Expiration time in seconds
/// - Timestamp when the token was obtained
///
/// # Error Handling
///
/// Errors are propagated immediately, without retries. The caller reports the
/// failure and ends the run with zero tracks; a single invocation never
/// outlives the token's lifetime, so no refresh handling exists.
///
/// # Example
///
/// ```
/// let token = request_token().await?;
/// println!("Token expires in {} seconds", token.expires_in);
/// ```
pub async fn request_token() -> Result<Token, reqwest::Error> {
    let credentials = format!("{}:{}", config::client_id(), config::client_secret());
    let encoded = STANDARD.encode(credentials);

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .header("Authorization", format!("Basic {}", encoded))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?
        .error_for_status()?;

    let json: Value = res.json().await?;

    Ok(Token {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        token_type: json["token_type"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
