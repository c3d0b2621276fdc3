//! Integration tests for the auth crate
//!
//! Drives the real router and middleware over an in-memory repository;
//! no database required.

#[cfg(test)]
mod support {
    use std::sync::{Arc, Mutex};

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::Response;
    use chrono::{DateTime, Utc};
    use serde_json::Value;

    use crate::domain::entity::user::User;
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::{
        email::Email,
        user_password::{RawPassword, UserPassword},
    };
    use crate::error::AuthResult;
    use kernel::id::UserId;

    /// In-memory stand-in for the postgres repository
    #[derive(Clone, Default)]
    pub struct MemoryUserRepository {
        users: Arc<Mutex<Vec<User>>>,
    }

    impl MemoryUserRepository {
        pub fn with_user(user: User) -> Self {
            let repo = Self::default();
            repo.users.lock().unwrap().push(user);
            repo
        }
    }

    impl UserRepository for MemoryUserRepository {
        async fn create(&self, user: &User) -> AuthResult<()> {
            self.users.lock().unwrap().push(user.clone());
            Ok(())
        }

        async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| &u.email == email)
                .cloned())
        }

        async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .any(|u| &u.email == email))
        }

        async fn record_login(&self, user_id: &UserId, at: DateTime<Utc>) -> AuthResult<()> {
            if let Some(user) = self
                .users
                .lock()
                .unwrap()
                .iter_mut()
                .find(|u| &u.user_id == user_id)
            {
                user.last_login_at = Some(at);
            }
            Ok(())
        }
    }

    /// Build a user with a hashed password, as signup would store it
    pub fn user_with_password(email: &str, password: &str) -> User {
        let raw = RawPassword::new(password.to_string()).unwrap();
        let hash = UserPassword::from_raw(&raw, None).unwrap();
        User::new(
            Email::new(email).unwrap(),
            hash,
            "First".to_string(),
            "Last".to_string(),
            None,
        )
    }

    /// Send a request through the router and return (status, json body)
    pub async fn call(
        app: Router,
        request: axum::http::Request<Body>,
    ) -> (axum::http::StatusCode, Value) {
        use tower::ServiceExt;

        let response: Response<Body> = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    pub fn json_request(
        method: &str,
        uri: &str,
        body: Value,
    ) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .method(method)
            .uri(uri)
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }
}

#[cfg(test)]
mod login_tests {
    use super::support::*;
    use crate::application::config::AuthConfig;
    use crate::presentation::router::auth_router_generic;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_returns_token_when_credentials_are_valid() {
        let config = AuthConfig::with_random_secret();
        let tokens = config.token_service();
        let user = user_with_password("test@test.com", "12345678");
        let user_id = user.user_id;
        let app = auth_router_generic(MemoryUserRepository::with_user(user), config);

        let (status, body) = call(
            app,
            json_request(
                "POST",
                "/tokens",
                json!({ "email": "test@test.com", "password": "12345678" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "OK");

        let token = body["token"].as_str().expect("token missing");
        let verified = tokens.verify(token).unwrap();
        assert_eq!(verified.subject, user_id);
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let config = AuthConfig::with_random_secret();
        let user = user_with_password("test@test.com", "12345678");
        let app = auth_router_generic(MemoryUserRepository::with_user(user), config);

        let (status, body) = call(
            app,
            json_request(
                "POST",
                "/tokens",
                json!({ "email": "test@test.com", "password": "1234" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "auth error");
        assert!(body.get("token").is_none());
    }

    #[tokio::test]
    async fn test_login_rejects_unknown_email_identically() {
        let config = AuthConfig::with_random_secret();
        let user = user_with_password("test@test.com", "12345678");
        let app = auth_router_generic(MemoryUserRepository::with_user(user), config);

        let (wrong_password_status, wrong_password_body) = call(
            app.clone(),
            json_request(
                "POST",
                "/tokens",
                json!({ "email": "test@test.com", "password": "wrong password" }),
            ),
        )
        .await;

        let (unknown_email_status, unknown_email_body) = call(
            app,
            json_request(
                "POST",
                "/tokens",
                json!({ "email": "nobody@test.com", "password": "12345678" }),
            ),
        )
        .await;

        // Neither the status nor the body reveals which check failed
        assert_eq!(wrong_password_status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_email_status, wrong_password_status);
        assert_eq!(unknown_email_body, wrong_password_body);
    }
}

#[cfg(test)]
mod sign_up_tests {
    use super::support::*;
    use crate::application::config::AuthConfig;
    use crate::presentation::router::auth_router_generic;
    use axum::http::StatusCode;
    use serde_json::json;

    fn signup_body(email: &str) -> serde_json::Value {
        json!({
            "email": email,
            "password": "12345678",
            "firstName": "First",
            "lastName": "Last",
            "userDob": "2002-10-10",
        })
    }

    #[tokio::test]
    async fn test_signup_then_login() {
        let config = AuthConfig::with_random_secret();
        let repo = MemoryUserRepository::default();
        let app = auth_router_generic(repo, config);

        let (status, body) =
            call(app.clone(), json_request("POST", "/users", signup_body("new@test.com"))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "OK");

        let (status, body) = call(
            app,
            json_request(
                "POST",
                "/tokens",
                json!({ "email": "new@test.com", "password": "12345678" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(body["token"].is_string());
    }

    #[tokio::test]
    async fn test_signup_rejects_duplicate_email() {
        let config = AuthConfig::with_random_secret();
        let user = user_with_password("taken@test.com", "12345678");
        let app = auth_router_generic(MemoryUserRepository::with_user(user), config);

        let (status, _) =
            call(app, json_request("POST", "/users", signup_body("taken@test.com"))).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_signup_rejects_short_password() {
        let config = AuthConfig::with_random_secret();
        let app = auth_router_generic(MemoryUserRepository::default(), config);

        let (status, _) = call(
            app,
            json_request(
                "POST",
                "/users",
                json!({
                    "email": "new@test.com",
                    "password": "1234",
                    "firstName": "First",
                    "lastName": "Last",
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[cfg(test)]
mod gate_tests {
    use super::support::*;
    use crate::application::config::AuthConfig;
    use crate::domain::token::TokenService;
    use crate::presentation::middleware::{AuthContext, require_bearer};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use axum::{Extension, Json, Router};
    use chrono::{TimeDelta, Utc};
    use kernel::id::UserId;
    use serde_json::json;

    /// Minimal protected route echoing what the gate attached
    async fn whoami(Extension(ctx): Extension<AuthContext>) -> Json<serde_json::Value> {
        Json(json!({ "userId": ctx.user_id.to_string(), "token": ctx.token }))
    }

    fn protected_app(tokens: TokenService) -> Router {
        Router::new()
            .route("/whoami", get(whoami).post(whoami))
            .layer(axum::middleware::from_fn_with_state(tokens, require_bearer))
    }

    #[tokio::test]
    async fn test_rejects_missing_token() {
        let tokens = AuthConfig::with_random_secret().token_service();
        let app = protected_app(tokens);

        let request = Request::builder()
            .method("GET")
            .uri("/whoami")
            .body(Body::empty())
            .unwrap();

        let (status, body) = call(app, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.is_null());
    }

    #[tokio::test]
    async fn test_rejects_malformed_token() {
        let tokens = AuthConfig::with_random_secret().token_service();
        let app = protected_app(tokens);

        let request = Request::builder()
            .method("GET")
            .uri("/whoami")
            .header(header::AUTHORIZATION, "Bearer not.a.token")
            .body(Body::empty())
            .unwrap();

        let (status, body) = call(app, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.is_null());
    }

    #[tokio::test]
    async fn test_rejects_expired_token() {
        let tokens = AuthConfig::with_random_secret().token_service();
        let subject = UserId::new();
        // Lifetime is 10 minutes; stamp the token an hour in the past
        let stale = tokens
            .issue_at(&subject, Utc::now() - TimeDelta::hours(1))
            .unwrap();
        let app = protected_app(tokens);

        let request = Request::builder()
            .method("GET")
            .uri("/whoami")
            .header(header::AUTHORIZATION, format!("Bearer {stale}"))
            .body(Body::empty())
            .unwrap();

        let (status, _) = call(app, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_header_token_is_verified_and_rotated() {
        let tokens = AuthConfig::with_random_secret().token_service();
        let subject = UserId::new();
        let token = tokens.issue(&subject).unwrap();
        let app = protected_app(tokens.clone());

        let request = Request::builder()
            .method("GET")
            .uri("/whoami")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();

        let (status, body) = call(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["userId"], subject.to_string());

        let original = tokens.verify(&token).unwrap();
        let rotated = tokens.verify(body["token"].as_str().unwrap()).unwrap();
        assert_eq!(rotated.subject, subject);
        assert!(rotated.issued_at >= original.issued_at);
    }

    #[tokio::test]
    async fn test_token_is_accepted_from_body_field() {
        let tokens = AuthConfig::with_random_secret().token_service();
        let subject = UserId::new();
        let token = tokens.issue(&subject).unwrap();
        let app = protected_app(tokens);

        let request = json_request("POST", "/whoami", json!({ "token": token }));

        let (status, body) = call(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["userId"], subject.to_string());
    }

    #[tokio::test]
    async fn test_replacement_chain_has_non_decreasing_iat() {
        let tokens = AuthConfig::with_random_secret().token_service();
        let subject = UserId::new();
        let mut token = tokens.issue(&subject).unwrap();
        let mut last_iat = tokens.verify(&token).unwrap().issued_at;
        let app = protected_app(tokens.clone());

        // Client discipline: replace the stored token with each response
        for _ in 0..3 {
            let request = Request::builder()
                .method("GET")
                .uri("/whoami")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap();

            let (status, body) = call(app.clone(), request).await;
            assert_eq!(status, StatusCode::OK);

            token = body["token"].as_str().unwrap().to_string();
            let iat = tokens.verify(&token).unwrap().issued_at;
            assert!(iat >= last_iat);
            last_iat = iat;
        }
    }
}
