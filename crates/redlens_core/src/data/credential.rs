use base64::engine::general_purpose;
use base64::Engine;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Structured editing state for an authentication-scheme header. The
/// effective header value is always derived from the sub-fields of the
/// selected scheme, never typed directly.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Credential {
    pub scheme: CredentialScheme,
    pub basic_username: String,
    pub basic_password: String,
    pub bearer_token: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, EnumIter, EnumString, Display)]
pub enum CredentialScheme {
    BasicAuth,
    BearerToken,
}

impl Default for CredentialScheme {
    fn default() -> Self {
        CredentialScheme::BasicAuth
    }
}

impl CredentialScheme {
    pub fn label(&self) -> &'static str {
        match self {
            CredentialScheme::BasicAuth => "Basic",
            CredentialScheme::BearerToken => "Bearer",
        }
    }
}

impl Credential {
    pub fn header_value(&self) -> String {
        match self.scheme {
            CredentialScheme::BasicAuth => {
                let encoded = general_purpose::STANDARD.encode(format!(
                    "{}:{}",
                    self.basic_username, self.basic_password
                ));
                format!("{} {}", self.scheme.label(), encoded)
            }
            CredentialScheme::BearerToken => {
                format!("{} {}", self.scheme.label(), self.bearer_token)
            }
        }
    }
}
