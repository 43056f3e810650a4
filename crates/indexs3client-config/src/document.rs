use crate::ConfigResult;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Access parameters for one service.
///
/// Missing fields decode as empty strings; whether the credential is usable is
/// decided by [`ServiceCredential::is_present`].
#[derive(Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ServiceCredential {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl ServiceCredential {
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// True only when url, username and password are all non-empty.
    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.url.is_empty() && !self.username.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for ServiceCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCredential")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The credential document as handed to the job.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ConfigDocument {
    /// Indexd credentials, stored at the root of the document.
    #[serde(flatten)]
    primary: ServiceCredential,
    #[serde(rename = "metadataService", default)]
    metadata: Option<ServiceCredential>,
    /// Everything else. Kept so unknown service blocks still decode.
    #[serde(flatten)]
    additional: BTreeMap<String, serde_json::Value>,
}

impl ConfigDocument {
    #[must_use]
    pub fn primary(&self) -> &ServiceCredential {
        &self.primary
    }

    #[must_use]
    pub fn metadata(&self) -> Option<&ServiceCredential> {
        self.metadata.as_ref()
    }

    #[must_use]
    pub fn additional(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.additional
    }
}

/// Decode a raw JSON credential document.
///
/// No presence checks happen here, `{}` decodes fine.
pub fn parse_config(raw: &str) -> ConfigResult<ConfigDocument> {
    Ok(serde_json::from_str(raw)?)
}
