use std::fmt;

use serde::Serialize;

/// One of the seven Firebase web-config parameters the injector knows.
///
/// The set is closed; [`PlaceholderKey::ALL`] fixes the order in which
/// substitution passes run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlaceholderKey {
    #[serde(rename = "FIREBASE_API_KEY")]
    ApiKey,
    #[serde(rename = "FIREBASE_AUTH_DOMAIN")]
    AuthDomain,
    #[serde(rename = "FIREBASE_PROJECT_ID")]
    ProjectId,
    #[serde(rename = "FIREBASE_STORAGE_BUCKET")]
    StorageBucket,
    #[serde(rename = "FIREBASE_MESSAGING_SENDER_ID")]
    MessagingSenderId,
    #[serde(rename = "FIREBASE_APP_ID")]
    AppId,
    #[serde(rename = "FIREBASE_MEASUREMENT_ID")]
    MeasurementId,
}

/// Marks a placeholder token in a document.
pub const SIGIL: char = '$';

impl PlaceholderKey {
    pub const ALL: [PlaceholderKey; 7] = [
        Self::ApiKey,
        Self::AuthDomain,
        Self::ProjectId,
        Self::StorageBucket,
        Self::MessagingSenderId,
        Self::AppId,
        Self::MeasurementId,
    ];

    /// Environment variable name, also the token body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ApiKey => "FIREBASE_API_KEY",
            Self::AuthDomain => "FIREBASE_AUTH_DOMAIN",
            Self::ProjectId => "FIREBASE_PROJECT_ID",
            Self::StorageBucket => "FIREBASE_STORAGE_BUCKET",
            Self::MessagingSenderId => "FIREBASE_MESSAGING_SENDER_ID",
            Self::AppId => "FIREBASE_APP_ID",
            Self::MeasurementId => "FIREBASE_MEASUREMENT_ID",
        }
    }

    /// The literal text searched for in the document, e.g. `$FIREBASE_APP_ID`.
    pub fn token(self) -> String {
        format!("{SIGIL}{}", self.name())
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

}

impl fmt::Display for PlaceholderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
