//! Authenticated HTTP session establishment
//!
//! A [`Session`] owns one `reqwest` client with a cookie store; the login
//! flow fills that store and the same client is then reused concurrently by
//! every download job. The client's connection pool and cookie jar are
//! thread-safe, so the session needs no locking once authenticated.

use crate::config::Config;
use crate::error::{AuthError, Result};
use scraper::{Html, Selector};

/// An authenticated HTTP session
///
/// Created by [`Session::authenticate`]; cheap to share via `Arc`. The
/// session is never mutated after login - cookies are applied by the
/// underlying client on every request.
#[derive(Debug)]
pub struct Session {
    client: reqwest::Client,
}

impl Session {
    /// Log in and return an authenticated session
    ///
    /// Fetches the login page, extracts the CSRF token from its
    /// `<meta name="csrf-token">` tag, and submits the credential form.
    /// A final status of 200 or 302 counts as success. No step is retried:
    /// without a valid session there is nothing to download, so the first
    /// failure aborts the whole batch.
    pub async fn authenticate(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder().cookie_store(true);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        // Fetch the login page
        let response = client
            .get(&config.login_url)
            .send()
            .await
            .map_err(|e| AuthError::LoginPageFetch(describe_transport_error(&e)))?;
        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::LoginPageStatus(status.as_u16()).into());
        }
        let html = response
            .text()
            .await
            .map_err(|e| AuthError::LoginPageFetch(describe_transport_error(&e)))?;

        // Missing token is a hard precondition failure, never retried
        let token = extract_csrf_token(&html).ok_or(AuthError::TokenNotFound)?;
        tracing::debug!(login_url = %config.login_url, "csrf token extracted");

        // Submit credentials, following redirects
        let response = client
            .post(&config.login_url)
            .form(&[
                ("user[email]", config.credentials.email.as_str()),
                ("user[password]", config.credentials.password.as_str()),
                ("authenticity_token", token.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AuthError::SubmitFailed(describe_transport_error(&e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::OK || status == reqwest::StatusCode::FOUND {
            tracing::info!(email = %config.credentials.email, "login successful");
            Ok(Self { client })
        } else {
            Err(AuthError::Rejected(status.as_u16()).into())
        }
    }

    /// The underlying HTTP client (cookies applied on every request)
    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

/// Locate the CSRF token in login page markup
///
/// Looks for `<meta name="csrf-token" content="...">` and returns the
/// content attribute. Returns `None` if the tag or its attribute is absent.
fn extract_csrf_token(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(r#"meta[name="csrf-token"]"#).ok()?;
    document
        .select(&selector)
        .next()?
        .value()
        .attr("content")
        .map(str::to_string)
}

/// Produce a diagnostic message for a transport fault, by fault class
fn describe_transport_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {e}")
    } else if e.is_connect() {
        format!("connection failed: {e}")
    } else {
        e.to_string()
    }
}
