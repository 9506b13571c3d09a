//! Partial updates and external auth payloads

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Partial update of a [`super::User`]; absent fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPatch {
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub locale: Option<String>,
    pub timezone: Option<BTreeMap<String, String>>,
    pub remote_id: Option<String>,
}

impl UserPatch {
    /// Set a field by its display name. Unknown names are ignored.
    pub fn set_field(&mut self, field_name: &str, value: impl Into<String>) {
        match field_name {
            "FirstName" => self.first_name = Some(value.into()),
            "LastName" => self.last_name = Some(value.into()),
            "Email" => self.email = Some(value.into()),
            _ => {}
        }
    }

    /// Decode a patch from a JSON body, `None` if the body is malformed
    pub fn from_json(data: &[u8]) -> Option<Self> {
        serde_json::from_slice(data).ok()
    }
}

/// External authentication reference for a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAuth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_data: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_service: String,
}

impl UserAuth {
    /// Decode from a JSON body, `None` if the body is malformed
    pub fn from_json(data: &[u8]) -> Option<Self> {
        serde_json::from_slice(data).ok()
    }
}
