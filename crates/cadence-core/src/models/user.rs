use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::CadenceResult;

/// A user as delivered by the login API: raw ISO-8601 login strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logins: Vec<String>,
}

impl UserRecord {
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            login_count: self.logins.len(),
        }
    }
}

/// Entry of the user listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub login_count: usize,
}

/// Envelope returned by the login API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginApiResponse {
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub message: String,
    pub data: LoginApiData,
    /// When the payload was fetched, stamped by the caching collaborator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginApiData {
    pub rows: Vec<UserRecord>,
}

impl LoginApiResponse {
    /// Parse an API payload. A payload without `data.rows` is rejected.
    pub fn from_json(json: &str) -> CadenceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.data.rows
    }

    pub fn into_users(self) -> Vec<UserRecord> {
        self.data.rows
    }
}
