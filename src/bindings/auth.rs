use serde::{Deserialize, Serialize};

use super::core::{
    ensure_envelope_ok, from_client_value, get_session_raw, js_error_message,
    sign_in_with_oauth_raw, sign_in_with_password_raw, sign_out_raw, sign_up_raw, to_client_args,
    unwrap_envelope,
};

// ============================================================================
// Session Types
// ============================================================================

/// Profile metadata attached to a user at sign-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserMetadata {
    #[serde(default)]
    pub full_name: Option<String>,
}

/// An authenticated user as reported by the auth provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

impl AuthUser {
    /// Name to show in the UI, falling back to the email address
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.user_metadata.full_name {
            if !name.trim().is_empty() {
                return name.clone();
            }
        }
        self.email.clone().unwrap_or_else(|| "Account".to_string())
    }
}

/// An active session with the auth provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    /// Expiry as Unix seconds, when the provider reports one
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

/// Supported OAuth identity providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Google,
}

impl std::fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OAuthProvider::Google => write!(f, "Google"),
        }
    }
}

// ============================================================================
// Request / Response Payloads
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PasswordCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub options: SignUpOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignUpOptions {
    pub data: UserMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct OAuthRequest {
    pub provider: OAuthProvider,
    pub options: OAuthOptions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthOptions {
    pub redirect_to: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignInData {
    pub session: AuthSession,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignUpData {
    /// Absent when the provider requires email confirmation first
    #[serde(default)]
    pub session: Option<AuthSession>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionData {
    #[serde(default)]
    pub session: Option<AuthSession>,
}

/// Redirect target handed back when an OAuth flow starts
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthRedirect {
    pub provider: String,
    pub url: String,
}

// ============================================================================
// Operations
// ============================================================================

/// Sign in with email and password
pub async fn sign_in_with_password(email: String, password: String) -> Result<AuthSession, String> {
    let args = to_client_args(&PasswordCredentials { email, password })?;
    let value = sign_in_with_password_raw(args)
        .await
        .map_err(|e| js_error_message(&e))?;
    let data = unwrap_envelope(value)?;
    from_client_value::<SignInData>(data).map(|d| d.session)
}

/// Start an OAuth sign-in; the browser navigates to the returned URL
pub async fn sign_in_with_oauth(
    provider: OAuthProvider,
    redirect_to: String,
) -> Result<OAuthRedirect, String> {
    let args = to_client_args(&OAuthRequest {
        provider,
        options: OAuthOptions { redirect_to },
    })?;
    let value = sign_in_with_oauth_raw(args)
        .await
        .map_err(|e| js_error_message(&e))?;
    let data = unwrap_envelope(value)?;
    from_client_value(data)
}

/// Register a new account; returns the session unless the provider defers
/// it behind email confirmation
pub async fn sign_up(
    full_name: String,
    email: String,
    password: String,
) -> Result<Option<AuthSession>, String> {
    let args = to_client_args(&SignUpRequest {
        email,
        password,
        options: SignUpOptions {
            data: UserMetadata {
                full_name: Some(full_name),
            },
        },
    })?;
    let value = sign_up_raw(args).await.map_err(|e| js_error_message(&e))?;
    let data = unwrap_envelope(value)?;
    from_client_value::<SignUpData>(data).map(|d| d.session)
}

/// End the current session
pub async fn sign_out() -> Result<(), String> {
    let value = sign_out_raw().await.map_err(|e| js_error_message(&e))?;
    ensure_envelope_ok(value)
}

/// Fetch the session persisted by the provider, if any
pub async fn current_session() -> Result<Option<AuthSession>, String> {
    let value = get_session_raw().await.map_err(|e| js_error_message(&e))?;
    let data = unwrap_envelope(value)?;
    from_client_value::<SessionData>(data).map(|d| d.session)
}
