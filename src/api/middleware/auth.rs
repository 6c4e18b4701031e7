//! HTTP basic authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::error::AppError;
use crate::state::{AppState, BasicCredentials};

/// Authenticates requests using the configured basic-auth credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(user:password)
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` with a `WWW-Authenticate: Basic` challenge if
/// the header is missing, malformed, or carries the wrong credentials.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::post, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/url", post(shorten_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((user, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized("unauthorized"))?;

    if !credentials_match(&st.auth, &user, password.as_deref().unwrap_or_default()) {
        debug!(user = %user, "rejected basic auth credentials");
        return Err(AppError::unauthorized("unauthorized"));
    }

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}

/// Compares credentials in constant time.
fn credentials_match(expected: &BasicCredentials, user: &str, password: &str) -> bool {
    let user_ok = expected.user.as_bytes().ct_eq(user.as_bytes());
    let password_ok = expected.password.as_bytes().ct_eq(password.as_bytes());
    (user_ok & password_ok).into()
}
