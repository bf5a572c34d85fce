// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for page loads and the dataroom gate.
//!
//! A missing data field is never an error; the placeholder policy in
//! [`crate::render`] absorbs it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    /// The site data document could not be read or parsed.
    #[error("site data unavailable from {location}: {reason}")]
    DataUnavailable { location: String, reason: String },

    /// Gate form input does not look like `local@domain.tld`.
    #[error("Invalid email: {0:?}")]
    InvalidEmail(String),

    /// The outbound capture POST failed. The gate swallows this.
    #[error("email capture submission failed: {0}")]
    SubmissionFailure(String),

    #[error("state store failure: {0}")]
    Store(#[from] anyhow::Error),
}

impl SiteError {
    pub fn data_unavailable(location: impl Into<String>, reason: impl ToString) -> Self {
        SiteError::DataUnavailable {
            location: location.into(),
            reason: reason.to_string(),
        }
    }
}

pub type SiteResult<T> = std::result::Result<T, SiteError>;
