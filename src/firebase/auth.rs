//! Identity Toolkit Client
//!
//! Email/password and Google federated sign-in against the Firebase
//! Identity Toolkit REST API, plus local session persistence. The stored
//! session is refreshed through the secure-token endpoint when its ID token
//! expires (the JS SDK used to do this internally).

use chrono::{DateTime, Duration, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::config::FirebaseConfig;
use crate::firebase::error::FirebaseError;

/// An authenticated Firebase session as kept in memory and in localStorage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub local_id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Expired (with a small safety margin), so the ID token must be
    /// refreshed before the next request.
    pub fn is_expired(&self) -> bool {
        Utc::now() + Duration::seconds(30) >= self.expires_at
    }

    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

const SESSION_STORAGE_KEY: &str = "stockpilot.session";

fn local_storage() -> Result<web_sys::Storage, FirebaseError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(FirebaseError::Storage)
}

/// Read the persisted session, if any. A corrupt entry is treated as absent.
pub fn load_session() -> Option<Session> {
    let storage = local_storage().ok()?;
    let raw = storage.get_item(SESSION_STORAGE_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

pub fn save_session(session: &Session) {
    if let (Ok(storage), Ok(raw)) = (local_storage(), serde_json::to_string(session)) {
        let _ = storage.set_item(SESSION_STORAGE_KEY, &raw);
    }
}

pub fn clear_session() {
    if let Ok(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}

// ========================
// Request / response bodies
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    local_id: String,
    #[serde(default)]
    email: String,
    display_name: Option<String>,
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProfileRequest<'a> {
    id_token: &'a str,
    display_name: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProfileResponse {
    display_name: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    id_token: &'a str,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<AccountInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub local_id: String,
    #[serde(default)]
    pub email: String,
    pub display_name: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IdpRequest<'a> {
    request_uri: &'a str,
    post_body: String,
    return_secure_token: bool,
    return_idp_credential: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
struct RefreshResponse {
    user_id: String,
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

// ========================
// Client
// ========================

#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    config: FirebaseConfig,
}

impl AuthClient {
    pub fn new(config: FirebaseConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, FirebaseError> {
        let body = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };
        let response = self
            .http
            .post(self.config.identity_url("signInWithPassword"))
            .json(&body)
            .send()
            .await?;
        let token: TokenResponse = decode(response).await?;
        Ok(session_from_token(token))
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Session, FirebaseError> {
        let body = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };
        let response = self
            .http
            .post(self.config.identity_url("signUp"))
            .json(&body)
            .send()
            .await?;
        let token: TokenResponse = decode(response).await?;
        Ok(session_from_token(token))
    }

    /// Set the account's display name; returns the name the server kept.
    pub async fn update_profile(
        &self,
        id_token: &str,
        display_name: &str,
    ) -> Result<Option<String>, FirebaseError> {
        let body = UpdateProfileRequest {
            id_token,
            display_name,
            return_secure_token: false,
        };
        let response = self
            .http
            .post(self.config.identity_url("update"))
            .json(&body)
            .send()
            .await?;
        let updated: UpdateProfileResponse = decode(response).await?;
        Ok(updated.display_name)
    }

    /// Validate an ID token and fetch the account it belongs to.
    pub async fn lookup(&self, id_token: &str) -> Result<AccountInfo, FirebaseError> {
        let response = self
            .http
            .post(self.config.identity_url("lookup"))
            .json(&LookupRequest { id_token })
            .send()
            .await?;
        let looked_up: LookupResponse = decode(response).await?;
        looked_up
            .users
            .into_iter()
            .next()
            .ok_or(FirebaseError::NotSignedIn)
    }

    /// Complete a Google federated sign-in from the OAuth `id_token`.
    pub async fn sign_in_with_google(&self, google_id_token: &str) -> Result<Session, FirebaseError> {
        let body = IdpRequest {
            request_uri: "http://localhost",
            post_body: format!("id_token={}&providerId=google.com", google_id_token),
            return_secure_token: true,
            return_idp_credential: true,
        };
        let response = self
            .http
            .post(self.config.identity_url("signInWithIdp"))
            .json(&body)
            .send()
            .await?;
        let token: TokenResponse = decode(response).await?;
        Ok(session_from_token(token))
    }

    /// Exchange the refresh token for a fresh ID token, keeping the profile
    /// data of the old session.
    pub async fn refresh(&self, session: &Session) -> Result<Session, FirebaseError> {
        let form = [
            ("grant_type", "refresh_token"),
            ("refresh_token", session.refresh_token.as_str()),
        ];
        let response = self
            .http
            .post(self.config.token_url())
            .form(&form)
            .send()
            .await?;
        let refreshed: RefreshResponse = decode(response).await?;
        Ok(Session {
            local_id: refreshed.user_id,
            email: session.email.clone(),
            display_name: session.display_name.clone(),
            id_token: refreshed.id_token,
            refresh_token: refreshed.refresh_token,
            expires_at: expiry_from_now(&refreshed.expires_in),
        })
    }
}

fn session_from_token(token: TokenResponse) -> Session {
    Session {
        local_id: token.local_id,
        email: token.email,
        display_name: token.display_name,
        id_token: token.id_token,
        refresh_token: token.refresh_token,
        expires_at: expiry_from_now(&token.expires_in),
    }
}

fn expiry_from_now(expires_in_secs: &str) -> DateTime<Utc> {
    let secs: i64 = expires_in_secs.parse().unwrap_or(3600);
    Utc::now() + Duration::seconds(secs)
}

async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, FirebaseError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => describe_auth_error(&body.error.message),
            Err(_) => format!("HTTP {}", status.as_u16()),
        };
        Err(FirebaseError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Translate Identity Toolkit error codes into readable form messages.
/// Unknown codes pass through verbatim, matching the old UI which showed the
/// backend's raw message.
pub fn describe_auth_error(code: &str) -> String {
    // Codes sometimes arrive as "EMAIL_NOT_FOUND : extra detail".
    let bare = code.split(':').next().unwrap_or(code).trim();
    match bare {
        "EMAIL_NOT_FOUND" => "No account found for that email.".to_string(),
        "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "Incorrect email or password.".to_string()
        }
        "EMAIL_EXISTS" => "An account with that email already exists.".to_string(),
        "USER_DISABLED" => "This account has been disabled.".to_string(),
        "TOO_MANY_ATTEMPTS_TRY_LATER" => {
            "Too many attempts. Please try again later.".to_string()
        }
        _ => code.to_string(),
    }
}

// ========================
// Google OAuth redirect flow
// ========================

/// Build the Google OAuth implicit-flow URL used for federated sign-in.
/// The ID token comes back in the redirect URL's fragment.
pub fn google_oauth_url(client_id: &str, redirect_uri: &str, nonce: &str) -> String {
    format!(
        "https://accounts.google.com/o/oauth2/v2/auth?client_id={}&redirect_uri={}&response_type=id_token&scope=openid%20email%20profile&nonce={}",
        utf8_percent_encode(client_id, NON_ALPHANUMERIC),
        utf8_percent_encode(redirect_uri, NON_ALPHANUMERIC),
        utf8_percent_encode(nonce, NON_ALPHANUMERIC),
    )
}

/// Pull one parameter out of a URL fragment like `#id_token=abc&state=x`.
pub fn fragment_param(fragment: &str, key: &str) -> Option<String> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    fragment.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key && !v.is_empty()).then(|| v.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_expiry_has_safety_margin() {
        let fresh = Session {
            local_id: "u1".into(),
            email: "a@b.co".into(),
            display_name: None,
            id_token: "t".into(),
            refresh_token: "r".into(),
            expires_at: Utc::now() + Duration::hours(1),
        };
        assert!(!fresh.is_expired());

        let nearly_out = Session {
            expires_at: Utc::now() + Duration::seconds(10),
            ..fresh.clone()
        };
        assert!(nearly_out.is_expired());
    }

    #[test]
    fn display_label_prefers_name_over_email() {
        let mut s = Session {
            local_id: "u1".into(),
            email: "a@b.co".into(),
            display_name: Some("Alice".into()),
            id_token: "t".into(),
            refresh_token: "r".into(),
            expires_at: Utc::now(),
        };
        assert_eq!(s.display_label(), "Alice");
        s.display_name = None;
        assert_eq!(s.display_label(), "a@b.co");
    }

    #[test]
    fn known_auth_codes_become_readable() {
        assert_eq!(
            describe_auth_error("EMAIL_NOT_FOUND"),
            "No account found for that email."
        );
        assert_eq!(
            describe_auth_error("INVALID_LOGIN_CREDENTIALS"),
            "Incorrect email or password."
        );
        // Unknown codes pass through untouched.
        assert_eq!(describe_auth_error("QUOTA_EXCEEDED"), "QUOTA_EXCEEDED");
    }

    #[test]
    fn fragment_param_extraction() {
        assert_eq!(
            fragment_param("#id_token=abc.def&state=xyz", "id_token"),
            Some("abc.def".to_string())
        );
        assert_eq!(fragment_param("id_token=abc", "id_token"), Some("abc".to_string()));
        assert_eq!(fragment_param("#state=xyz", "id_token"), None);
        assert_eq!(fragment_param("", "id_token"), None);
    }

    #[test]
    fn oauth_url_escapes_redirect_uri() {
        let url = google_oauth_url("client-1", "https://app.example/login", "n0nce");
        assert!(url.contains("client%2D1") || url.contains("client-1"));
        assert!(url.contains("redirect_uri=https%3A%2F%2Fapp%2Eexample%2Flogin"));
        assert!(url.contains("response_type=id_token"));
    }
}
