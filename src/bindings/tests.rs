#[cfg(test)]
mod tests {
    use crate::bindings::auth::{
        AuthSession, AuthUser, OAuthOptions, OAuthProvider, OAuthRequest, SessionData, SignInData,
        SignUpData, SignUpOptions, SignUpRequest, UserMetadata,
    };
    use serde_json::json;

    // --- Session Payload Tests ---

    #[test]
    fn test_sign_in_data_deserialization() {
        let payload = json!({
            "session": {
                "access_token": "jwt-token",
                "token_type": "bearer",
                "expires_at": 1700000000,
                "user": {
                    "id": "user-1",
                    "email": "ada@example.com",
                    "user_metadata": { "full_name": "Ada Lovelace" }
                }
            }
        });
        let data: SignInData = serde_json::from_value(payload).unwrap();
        assert_eq!(data.session.access_token, "jwt-token");
        assert_eq!(data.session.expires_at, Some(1700000000));
        assert_eq!(data.session.user.email.as_deref(), Some("ada@example.com"));
        assert_eq!(
            data.session.user.user_metadata.full_name.as_deref(),
            Some("Ada Lovelace")
        );
    }

    #[test]
    fn test_session_data_null_session() {
        let payload = json!({ "session": null });
        let data: SessionData = serde_json::from_value(payload).unwrap();
        assert!(data.session.is_none());
    }

    #[test]
    fn test_sign_up_data_missing_session() {
        // Providers with email confirmation enabled return a user but no session
        let payload = json!({ "user": { "id": "user-2" } });
        let data: SignUpData = serde_json::from_value(payload).unwrap();
        assert!(data.session.is_none());
    }

    #[test]
    fn test_auth_session_ignores_unknown_fields() {
        let payload = json!({
            "access_token": "jwt",
            "refresh_token": "refresh",
            "expires_in": 3600,
            "user": { "id": "user-3", "role": "authenticated" }
        });
        let session: AuthSession = serde_json::from_value(payload).unwrap();
        assert_eq!(session.access_token, "jwt");
        assert!(session.expires_at.is_none());
        assert_eq!(session.user.id, "user-3");
    }

    // --- Request Payload Tests ---

    #[test]
    fn test_oauth_request_serialization() {
        let request = OAuthRequest {
            provider: OAuthProvider::Google,
            options: OAuthOptions {
                redirect_to: "https://app.example.com/dashboard".to_string(),
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["provider"], "google");
        assert_eq!(
            value["options"]["redirectTo"],
            "https://app.example.com/dashboard"
        );
    }

    #[test]
    fn test_sign_up_request_serialization() {
        let request = SignUpRequest {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
            options: SignUpOptions {
                data: UserMetadata {
                    full_name: Some("Ada Lovelace".to_string()),
                },
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["options"]["data"]["full_name"], "Ada Lovelace");
    }

    // --- Display Helpers ---

    #[test]
    fn test_oauth_provider_display() {
        assert_eq!(OAuthProvider::Google.to_string(), "Google");
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        let user = AuthUser {
            id: "user-1".to_string(),
            email: Some("ada@example.com".to_string()),
            user_metadata: UserMetadata {
                full_name: Some("Ada Lovelace".to_string()),
            },
        };
        assert_eq!(user.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = AuthUser {
            id: "user-1".to_string(),
            email: Some("ada@example.com".to_string()),
            user_metadata: UserMetadata { full_name: None },
        };
        assert_eq!(user.display_name(), "ada@example.com");
    }

    #[test]
    fn test_display_name_blank_metadata() {
        let user = AuthUser {
            id: "user-1".to_string(),
            email: None,
            user_metadata: UserMetadata {
                full_name: Some("   ".to_string()),
            },
        };
        assert_eq!(user.display_name(), "Account");
    }
}
