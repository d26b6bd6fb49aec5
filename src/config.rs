//! Firebase Project Configuration
//!
//! Endpoint builders for the Identity Toolkit, secure-token, and Firestore
//! REST APIs. Values are baked in at compile time from `STOCKPILOT_*`
//! environment variables, with placeholders for local development.

/// Static Firebase project settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirebaseConfig {
    pub api_key: &'static str,
    pub project_id: &'static str,
    pub google_client_id: &'static str,
}

impl FirebaseConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: option_env!("STOCKPILOT_FIREBASE_API_KEY").unwrap_or("demo-api-key"),
            project_id: option_env!("STOCKPILOT_FIREBASE_PROJECT_ID").unwrap_or("stockpilot-demo"),
            google_client_id: option_env!("STOCKPILOT_GOOGLE_CLIENT_ID").unwrap_or(""),
        }
    }

    /// Root of the project's default Firestore database in the REST API.
    pub fn firestore_root(&self) -> String {
        format!(
            "https://firestore.googleapis.com/v1/projects/{}/databases/(default)/documents",
            self.project_id
        )
    }

    /// Identity Toolkit account endpoint, e.g. `accounts:signInWithPassword`.
    pub fn identity_url(&self, action: &str) -> String {
        format!(
            "https://identitytoolkit.googleapis.com/v1/accounts:{}?key={}",
            action, self.api_key
        )
    }

    /// Secure-token endpoint used to exchange a refresh token.
    pub fn token_url(&self) -> String {
        format!(
            "https://securetoken.googleapis.com/v1/token?key={}",
            self.api_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FirebaseConfig {
        FirebaseConfig {
            api_key: "key-123",
            project_id: "proj-x",
            google_client_id: "",
        }
    }

    #[test]
    fn firestore_root_targets_default_database() {
        assert_eq!(
            config().firestore_root(),
            "https://firestore.googleapis.com/v1/projects/proj-x/databases/(default)/documents"
        );
    }

    #[test]
    fn identity_url_includes_action_and_key() {
        assert_eq!(
            config().identity_url("signUp"),
            "https://identitytoolkit.googleapis.com/v1/accounts:signUp?key=key-123"
        );
    }
}
