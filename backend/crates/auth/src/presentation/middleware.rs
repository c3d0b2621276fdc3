//! Auth Gate Middleware
//!
//! Middleware placed in front of every protected route. It verifies the
//! presented token, mints the successor token, and hands both the
//! identity and the successor to the handler through request extensions.
//! Handlers include the successor in their success payload; the client
//! replaces its stored token with it.
//!
//! The token is taken from the `Authorization: Bearer` header when
//! present, otherwise from a top-level `token` field in a JSON body
//! (form posts from the original clients carry it there). Rejections are
//! a bare 401 regardless of cause.

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use serde::Deserialize;

use crate::domain::token::TokenService;
use crate::error::AuthError;
use kernel::id::UserId;

/// Bodies are only buffered to look for the token field; anything larger
/// than this is not a form/JSON request this API serves.
const MAX_BUFFERED_BODY_BYTES: usize = 64 * 1024;

/// Verified identity plus the rotated token, stored in request extensions
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Identity the presented token was minted for
    pub user_id: UserId,
    /// Successor token; handlers must include this in success responses
    pub token: String,
}

/// JSON body shape used only to find the token field
#[derive(Debug, Deserialize)]
struct TokenBody {
    token: Option<String>,
}

/// Middleware that requires a valid session token and rotates it
///
/// Exactly one rotation per request: the successor is minted here and
/// nowhere else.
pub async fn require_bearer(
    State(tokens): State<TokenService>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let (mut parts, body) = req.into_parts();

    let (token, body) = match platform::bearer::extract_bearer(&parts.headers) {
        Some(token) => (token, body),
        None => {
            // Fall back to the body field; the buffered bytes are put
            // back so extractors downstream still see the body
            let bytes = to_bytes(body, MAX_BUFFERED_BODY_BYTES)
                .await
                .map_err(|_| AuthError::MissingToken)?;

            let token = serde_json::from_slice::<TokenBody>(&bytes)
                .ok()
                .and_then(|b| b.token)
                .ok_or(AuthError::MissingToken)?;

            (token, Body::from(bytes))
        }
    };

    let verified = tokens.verify(&token)?;
    let rotated = tokens.rotate(&verified.subject)?;

    parts.extensions.insert(AuthContext {
        user_id: verified.subject,
        token: rotated,
    });

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}
