//! Upstream admin validation client.
//!
//! # Design
//! - One remote check per guarded request; the result is never cached.
//! - Classification is a pure function over (status, parsed body) so every
//!   branch is unit-testable without a network.
//! - The trait seam lets integration tests substitute scripted validators.

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use mercato_api_models::{AdminValidation, GuardReason, VALIDATE_ADMIN_PATH};

use crate::error::{EdgeError, EdgeResult};

/// Outcome of validating a presented credential against the upstream API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The credential belongs to an admin; forward the request unmodified.
    Allow,
    /// Deny with the given redirect reason.
    Deny(GuardReason),
}

/// Validation backend consulted by the admin guard.
#[async_trait]
pub trait AdminValidator: Send + Sync {
    /// Validate a bearer credential, classifying every failure into a verdict.
    async fn validate(&self, token: &str) -> Verdict;
}

/// Production validator calling the remote validation endpoint.
#[derive(Clone, Debug)]
pub struct HttpAdminValidator {
    client: reqwest::Client,
    validate_url: String,
}

impl HttpAdminValidator {
    /// Build a validator against the given upstream origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_base: &str, timeout: Duration) -> EdgeResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| EdgeError::UpstreamClient { source })?;
        Ok(Self {
            client,
            validate_url: format!("{api_base}{VALIDATE_ADMIN_PATH}"),
        })
    }
}

#[async_trait]
impl AdminValidator for HttpAdminValidator {
    async fn validate(&self, token: &str) -> Verdict {
        let response = match self
            .client
            .get(&self.validate_url)
            .bearer_auth(token)
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, url = %self.validate_url, "admin validation transport failure");
                return Verdict::Deny(GuardReason::ServerError);
            }
        };

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return classify(status, None);
        }

        match response.json::<AdminValidation>().await {
            Ok(body) => classify(status, Some(body)),
            Err(error) => {
                warn!(%error, "admin validation body was not parseable");
                Verdict::Deny(GuardReason::ServerError)
            }
        }
    }
}

/// Map a validation response onto a verdict.
///
/// A success status alone never grants access: the parsed body must also
/// carry a true admin flag.
#[must_use]
pub fn classify(status: u16, body: Option<AdminValidation>) -> Verdict {
    if !(200..300).contains(&status) {
        return match status {
            401 => Verdict::Deny(GuardReason::Unauthorized),
            403 => Verdict::Deny(GuardReason::Forbidden),
            _ => Verdict::Deny(GuardReason::ValidationFailed),
        };
    }
    match body {
        Some(AdminValidation { is_admin: true }) => Verdict::Allow,
        Some(AdminValidation { is_admin: false }) => Verdict::Deny(GuardReason::Forbidden),
        None => Verdict::Deny(GuardReason::ServerError),
    }
}

#[cfg(test)]
mod tests {
    use super::{Verdict, classify};
    use mercato_api_models::{AdminValidation, GuardReason};

    #[test]
    fn unauthorized_status_maps_to_unauthorized() {
        assert_eq!(classify(401, None), Verdict::Deny(GuardReason::Unauthorized));
    }

    #[test]
    fn forbidden_status_maps_to_forbidden() {
        assert_eq!(classify(403, None), Verdict::Deny(GuardReason::Forbidden));
    }

    #[test]
    fn other_failure_statuses_map_to_validation_failed() {
        for status in [400, 404, 500, 503] {
            assert_eq!(
                classify(status, None),
                Verdict::Deny(GuardReason::ValidationFailed)
            );
        }
    }

    #[test]
    fn success_without_admin_flag_is_forbidden() {
        assert_eq!(
            classify(200, Some(AdminValidation { is_admin: false })),
            Verdict::Deny(GuardReason::Forbidden)
        );
    }

    #[test]
    fn success_with_unparseable_body_is_server_error() {
        assert_eq!(classify(200, None), Verdict::Deny(GuardReason::ServerError));
    }

    #[test]
    fn success_with_admin_flag_allows() {
        assert_eq!(classify(200, Some(AdminValidation { is_admin: true })), Verdict::Allow);
    }
}
