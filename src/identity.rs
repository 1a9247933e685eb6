use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpRequest};

use crate::error::AppError;

/// Header carrying the caller's user id, set by the upstream identity
/// provider after it has verified the session.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Verified id of the calling user. Trusted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub i32);

impl AuthenticatedUser {
    pub fn id(&self) -> i32 {
        self.0
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let user = req
            .headers()
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<i32>().ok())
            .map(AuthenticatedUser)
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()));
        ready(user)
    }
}
