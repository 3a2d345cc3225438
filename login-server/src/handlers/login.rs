use crate::error::Error;
use axum::{body::Bytes, extract::State, Json};
use login_core::{login::Resp, Credentials, LoginRequest};

/// Check the body against the reference credentials. Bodies we can't decode
/// are treated as if nothing was sent, so this never fails with a 500.
#[tracing::instrument(skip_all)]
pub async fn handler(
    State(credentials): State<Credentials>,
    body: Bytes,
) -> Result<Json<Resp>, Error> {
    let req = LoginRequest::decode(&body)
        .inspect_err(|err| tracing::debug!(%err, "could not decode login body"))
        .ok();

    let outcome = credentials.validate(req.as_ref());
    tracing::debug!(?outcome, "checked login");

    if !outcome.is_success() {
        return Err(outcome.into());
    }

    Ok(Json(Resp {
        message: outcome.message().to_string(),
    }))
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::http::StatusCode;

    async fn login(body: &'static str) -> Result<Json<Resp>, Error> {
        handler(State(Credentials::default()), Bytes::from_static(body.as_bytes())).await
    }

    #[test_log::test(tokio::test)]
    async fn test_success() {
        let Json(resp) = login(r#"{"email": "sam.albershtein@gmail.com", "password": "1234"}"#)
            .await
            .unwrap();

        assert_eq!(resp.message, "Login successful");
    }

    #[test_log::test(tokio::test)]
    async fn test_invalid_credentials() {
        let err = login(r#"{"email": "notsam@gmail.com", "password": "123"}"#)
            .await
            .unwrap_err();

        assert_eq!(
            err.unwrap_custom(),
            (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_missing_password() {
        let err = login(r#"{"email": "notsam@gmail.com"}"#).await.unwrap_err();

        assert_eq!(
            err.unwrap_custom(),
            (StatusCode::BAD_REQUEST, "Missing fields".to_string())
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_empty_email() {
        let err = login(r#"{"email": "", "password": "1234"}"#)
            .await
            .unwrap_err();

        assert_eq!(
            err.unwrap_custom(),
            (StatusCode::BAD_REQUEST, "Missing fields".to_string())
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_empty_object() {
        let err = login("{}").await.unwrap_err();

        assert_eq!(
            err.unwrap_custom(),
            (StatusCode::BAD_REQUEST, "No data provided".to_string())
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_no_body() {
        let err = login("").await.unwrap_err();

        assert_eq!(
            err.unwrap_custom(),
            (StatusCode::BAD_REQUEST, "No data provided".to_string())
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_malformed_body() {
        let err = login("{\"email\": oops").await.unwrap_err();

        assert_eq!(
            err.unwrap_custom(),
            (StatusCode::BAD_REQUEST, "No data provided".to_string())
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_substituted_credentials() {
        let credentials = Credentials::new("test@example.com", "letmein");

        let Json(resp) = handler(
            State(credentials),
            Bytes::from_static(br#"{"email": "test@example.com", "password": "letmein"}"#),
        )
        .await
        .unwrap();

        assert_eq!(resp.message, "Login successful");
    }
}
