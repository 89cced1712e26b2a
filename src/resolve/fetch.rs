//! Remote setup-name lookup
//!
//! One synchronous GET against the setup service; the trait seam lets tests
//! substitute a stub and count calls.

use serde::Deserialize;

use crate::consts::SETUP_LABEL_PREFIX;
use crate::error::ResolveError;

/// Lookup seam for the setup-name service
pub(crate) trait SetupLookup {
    /// Fetch the raw setup name for an identifier/digest pair
    fn setup_name(&self, setup_id: &str, digest: &str) -> Result<String, ResolveError>;
}

#[derive(Debug, Deserialize)]
struct SetupResponse {
    general: Option<General>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct General {
    setup_name: Option<String>,
}

pub(crate) struct HttpLookup {
    endpoint: String,
}

impl HttpLookup {
    pub(crate) fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl SetupLookup for HttpLookup {
    fn setup_name(&self, setup_id: &str, digest: &str) -> Result<String, ResolveError> {
        let url = format!(
            "{}/api/setup/{}/{}",
            self.endpoint.trim_end_matches('/'),
            setup_id,
            digest
        );
        let response = ureq::get(&url)
            .header("content-type", "application/json")
            .call()?;
        let mut body = response.into_body();
        let parsed: SetupResponse = serde_json::from_reader(body.as_reader())?;
        parsed
            .general
            .and_then(|g| g.setup_name)
            .ok_or(ResolveError::MissingName)
    }
}

/// Format a raw setup name into the printed label.
///
/// Tokens that start or end with `:` are internal metadata markers and are
/// dropped; the survivors are joined with single spaces under the label
/// prefix.
pub(crate) fn format_label(name: &str) -> String {
    let kept: Vec<&str> = name
        .split_whitespace()
        .filter(|token| !token.starts_with(':') && !token.ends_with(':'))
        .collect();
    format!("{}{}", SETUP_LABEL_PREFIX, kept.join(" "))
}
