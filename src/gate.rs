// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dataroom email gate.
//!
//! Two states. The gate starts `Unlocked` only when the store holds `"1"`
//! under [`GATE_KEY`]; a valid form submission writes that value and there
//! is no way back to `Locked`. The capture endpoint is best-effort: its
//! failures are logged at debug level and never block the unlock.

use crate::error::{SiteError, SiteResult};
use crate::storage::KeyValueStore;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

pub const GATE_KEY: &str = "np_dataroom_ok";
pub const UNLOCKED_VALUE: &str = "1";

/// `local@domain.tld`, shared with the browser-side gate script.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

const CAPTURE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GateState {
    Locked,
    Unlocked,
}

impl GateState {
    pub fn read(store: &dyn KeyValueStore) -> Self {
        match store.get(GATE_KEY).as_deref() {
            Some(UNLOCKED_VALUE) => GateState::Unlocked,
            _ => GateState::Locked,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self, GateState::Unlocked)
    }
}

impl std::fmt::Display for GateState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateState::Locked => write!(f, "locked"),
            GateState::Unlocked => write!(f, "unlocked"),
        }
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Trim and check the `local@domain.tld` shape. Returns the trimmed address.
pub fn validate_email(raw: &str) -> SiteResult<&str> {
    let email = raw.trim();
    if email_pattern().is_match(email) {
        Ok(email)
    } else {
        Err(SiteError::InvalidEmail(email.to_string()))
    }
}

/// Outbound destination for addresses collected by the gate.
pub trait EmailCapture {
    fn submit(&self, email: &str) -> SiteResult<()>;
}

/// Used when no endpoint is configured: nothing is sent.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCapture;

impl EmailCapture for NoCapture {
    fn submit(&self, _email: &str) -> SiteResult<()> {
        Ok(())
    }
}

#[derive(Serialize)]
struct CapturePayload<'a> {
    email: &'a str,
}

/// POSTs `{"email": ...}` as JSON to a form endpoint.
#[derive(Debug, Clone)]
pub struct HttpCapture {
    endpoint: Url,
    client: reqwest::blocking::Client,
}

impl HttpCapture {
    pub fn new(endpoint: Url) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(CAPTURE_TIMEOUT)
            .build()?;
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl EmailCapture for HttpCapture {
    fn submit(&self, email: &str) -> SiteResult<()> {
        self.client
            .post(self.endpoint.clone())
            .json(&CapturePayload { email })
            .send()
            .and_then(|response| response.error_for_status())
            .map(|_| ())
            .map_err(|err| SiteError::SubmissionFailure(err.to_string()))
    }
}

/// Handle a gate form submission.
///
/// Invalid input returns [`SiteError::InvalidEmail`] and leaves the store
/// untouched. Otherwise the address goes to `capture`, whose outcome is
/// ignored, and the unlock flag is persisted.
pub fn submit(
    store: &mut dyn KeyValueStore,
    raw_email: &str,
    capture: &dyn EmailCapture,
) -> SiteResult<GateState> {
    let email = validate_email(raw_email)?;

    if let Err(err) = capture.submit(email) {
        debug!(error = %err, "email capture failed; unlocking anyway");
    }

    store.set(GATE_KEY, UNLOCKED_VALUE)?;
    info!("dataroom unlocked");
    Ok(GateState::Unlocked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::cell::RefCell;

    struct FailingCapture {
        calls: RefCell<Vec<String>>,
    }

    impl EmailCapture for FailingCapture {
        fn submit(&self, email: &str) -> SiteResult<()> {
            self.calls.borrow_mut().push(email.to_string());
            Err(SiteError::SubmissionFailure("connection refused".into()))
        }
    }

    #[test]
    fn email_shapes() {
        assert!(validate_email("a@b.co").is_ok());
        assert_eq!(validate_email("  a@b.co \n").unwrap(), "a@b.co");
        for bad in ["a@b", "a b@c.com", "", "@b.co", "a@@b.co", "a@b."] {
            assert!(
                matches!(validate_email(bad), Err(SiteError::InvalidEmail(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn default_state_is_locked() {
        let store = MemoryStore::new();
        assert_eq!(GateState::read(&store), GateState::Locked);
    }

    #[test]
    fn only_literal_one_unlocks() {
        let mut store = MemoryStore::new();
        store.set(GATE_KEY, "true").unwrap();
        assert_eq!(GateState::read(&store), GateState::Locked);
        store.set(GATE_KEY, "1").unwrap();
        assert_eq!(GateState::read(&store), GateState::Unlocked);
    }

    #[test]
    fn invalid_email_keeps_gate_locked() {
        let mut store = MemoryStore::new();
        let err = submit(&mut store, "not-an-email", &NoCapture).unwrap_err();
        assert!(matches!(err, SiteError::InvalidEmail(_)));
        assert_eq!(store.get(GATE_KEY), None);
    }

    #[test]
    fn capture_failure_does_not_block_unlock() {
        let mut store = MemoryStore::new();
        let capture = FailingCapture {
            calls: RefCell::new(Vec::new()),
        };
        let state = submit(&mut store, " investor@fund.vc ", &capture).unwrap();
        assert_eq!(state, GateState::Unlocked);
        assert_eq!(capture.calls.borrow().as_slice(), ["investor@fund.vc"]);
        assert_eq!(GateState::read(&store), GateState::Unlocked);
    }
}
