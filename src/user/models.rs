//! User record types.

use serde::{Deserialize, Serialize};

/// A user record as submitted by the client.
///
/// Every field is optional at the boundary: validation decides which ones
/// must carry a value. Absent fields and JSON `null` both deserialize to
/// `None`. Accepted records are stored and echoed back exactly as
/// submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// ISO-8601 calendar date, e.g. "1990-04-21".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
}
