//! Remote profile fetch against the signature service.
//!
//! On a full cache miss the resolver calls `GET <base>/signature?email=...`
//! and maps the directory-profile response into a [`UserProfile`]. Any
//! transport error or non-200 status is reported as a [`FetchError`]; the
//! resolver degrades to the static fallback profile rather than surfacing it.

use serde::Deserialize;
use thiserror::Error;

use lilly_signature_core::UserProfile;

use crate::resolver::MailboxIdentity;

/// Errors from a remote profile fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, TLS, connect, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-200 status.
    #[error("profile service returned status {0}")]
    Status(u16),

    /// The response body was not a directory-profile object.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Async source of directory profiles, keyed by email address.
pub trait ProfileSource {
    /// Fetch the directory profile for `email`.
    fn fetch(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<DirectoryUser, FetchError>> + Send;
}

/// Directory-profile object as returned by the signature service.
///
/// Field names follow the Microsoft Graph user resource; everything is
/// optional because Graph omits attributes the directory does not populate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectoryUser {
    pub display_name: Option<String>,
    pub mail: Option<String>,
    pub user_principal_name: Option<String>,
    pub mobile_phone: Option<String>,
    pub business_phones: Vec<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub office_location: Option<String>,
    pub country: Option<String>,
    pub company_name: Option<String>,
}

/// Map a directory-profile response into a [`UserProfile`].
///
/// Missing fields default to the empty string. A missing display name falls
/// back to the host-supplied display name, a missing mail attribute to the
/// principal name and then the host address. An absent or empty company
/// attribute maps to `None`, which classifies the user as an employee.
#[must_use]
pub fn map_directory_user(user: DirectoryUser, identity: &MailboxIdentity) -> UserProfile {
    let company_name = user
        .company_name
        .filter(|c| !c.trim().is_empty());

    UserProfile {
        name: user
            .display_name
            .unwrap_or_else(|| identity.display_name.clone()),
        email: user
            .mail
            .or(user.user_principal_name)
            .unwrap_or_else(|| identity.email.clone()),
        mobile_phone: user.mobile_phone.unwrap_or_default(),
        office_phone: user.business_phones.into_iter().next().unwrap_or_default(),
        job_title: user.job_title.unwrap_or_default(),
        department: user.department.unwrap_or_default(),
        office_location: user.office_location.unwrap_or_default(),
        country: user.country.unwrap_or_default(),
        company_name,
        ..UserProfile::default()
    }
}

/// Production [`ProfileSource`] over HTTP.
///
/// Requests carry the ambient session cookies so the signature service can
/// authenticate the caller the same way the add-in frontend does.
#[derive(Debug, Clone)]
pub struct HttpProfileSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProfileSource {
    /// Create a source for the service at `base_url` (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }
}

impl ProfileSource for HttpProfileSource {
    async fn fetch(&self, email: &str) -> Result<DirectoryUser, FetchError> {
        let url = format!(
            "{}/signature?email={}",
            self.base_url,
            urlencoding::encode(email)
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<DirectoryUser>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }
}
