//! User entity and lifecycle transitions

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize};

use super::locale::{default_user_timezone, DEFAULT_LOCALE};
use super::password::hash_password;
use super::patch::UserPatch;
use crate::domain::common::{etag, get_millis, new_id, sanitize_unicode};

/// Per-field flags controlling what [`User::sanitize`] keeps
pub type SanitizeOptions = HashMap<String, bool>;

pub const SANITIZE_EMAIL: &str = "email";
pub const SANITIZE_FULL_NAME: &str = "fullname";
pub const SANITIZE_AUTH_SERVICE: &str = "authservice";

/// A registered account.
///
/// Timestamps are milliseconds since the Unix epoch. The password is
/// accepted on input but never written out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub created_at: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub updated_at: i64,
    pub deleted_at: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_data: Option<String>,
    pub auth_service: String,
    pub email: String,
    #[serde(skip_serializing_if = "is_false")]
    pub email_verified: bool,
    pub first_name: String,
    pub last_name: String,
    pub contact_number: String,
    pub facebook_user_id: String,
    pub google_user_id: String,
    pub locale: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timezone: BTreeMap<String, String>,
    /// Owned by the terms-of-service store, carried for responses only
    #[serde(skip_serializing_if = "String::is_empty")]
    pub terms_of_service_id: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub terms_of_service_created_at: i64,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn normalize_username(username: &str) -> String {
    username.to_lowercase()
}

pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

impl User {
    /// Decode a user from a JSON body, `None` if the body is malformed
    pub fn from_json(data: &[u8]) -> Option<Self> {
        serde_json::from_slice(data).ok()
    }

    /// Whether external auth data is present and non-empty
    pub fn has_auth_data(&self) -> bool {
        self.auth_data.as_deref().is_some_and(|d| !d.is_empty())
    }

    /// Prepare a new user for its first save.
    ///
    /// Assigns the id, falls back to a generated username when none was
    /// given, normalizes text fields, stamps both timestamps, applies the
    /// default locale and timezone and hashes the password.
    ///
    /// A user registered without a username gets its own id as username.
    pub fn pre_save(&mut self) {
        if self.id.is_empty() {
            self.id = new_id();
        }

        if self.username.is_empty() {
            self.username = self.id.clone();
        }

        self.clear_empty_auth_data();
        self.normalize_text();

        self.created_at = get_millis();
        self.updated_at = self.created_at;

        if self.locale.is_empty() {
            self.locale = DEFAULT_LOCALE.to_string();
        }

        if self.timezone.is_empty() {
            self.timezone = default_user_timezone();
        }

        if !self.password.is_empty() {
            self.password = hash_password(&self.password);
        }
    }

    /// Prepare an existing user for an update.
    ///
    /// The password is left untouched: callers set it only when it changes,
    /// and hash it themselves.
    pub fn pre_update(&mut self) {
        self.normalize_text();
        self.updated_at = get_millis();
        self.clear_empty_auth_data();
    }

    fn normalize_text(&mut self) {
        self.username = normalize_username(&sanitize_unicode(&self.username));
        self.first_name = sanitize_unicode(&self.first_name);
        self.last_name = sanitize_unicode(&self.last_name);
        self.email = normalize_email(&self.email);
    }

    fn clear_empty_auth_data(&mut self) {
        if self.auth_data.as_deref() == Some("") {
            self.auth_data = None;
        }
    }

    /// Overwrite the fields present in `patch`
    pub fn patch(&mut self, patch: &UserPatch) {
        if let Some(username) = &patch.username {
            self.username = username.clone();
        }

        if let Some(first_name) = &patch.first_name {
            self.first_name = first_name.clone();
        }

        if let Some(last_name) = &patch.last_name {
            self.last_name = last_name.clone();
        }

        if let Some(email) = &patch.email {
            self.email = email.clone();
        }

        if let Some(locale) = &patch.locale {
            self.locale = locale.clone();
        }

        if let Some(timezone) = &patch.timezone {
            self.timezone = timezone.clone();
        }
    }

    /// Patch carrying every patchable field of this user
    pub fn to_patch(&self) -> UserPatch {
        UserPatch {
            username: Some(self.username.clone()),
            password: Some(self.password.clone()),
            first_name: Some(self.first_name.clone()),
            last_name: Some(self.last_name.clone()),
            email: Some(self.email.clone()),
            locale: Some(self.locale.clone()),
            timezone: Some(self.timezone.clone()),
            remote_id: None,
        }
    }

    /// Remove private data before the user leaves the service.
    ///
    /// Password and auth data are always cleared. With non-empty `options`,
    /// a field group is kept only when its flag is present and true; empty
    /// options clear nothing else.
    pub fn sanitize(&mut self, options: &SanitizeOptions) {
        self.password.clear();
        self.auth_data = Some(String::new());

        if options.is_empty() {
            return;
        }

        let keep = |key: &str| options.get(key).copied().unwrap_or(false);

        if !keep(SANITIZE_EMAIL) {
            self.email.clear();
        }

        if !keep(SANITIZE_FULL_NAME) {
            self.first_name.clear();
            self.last_name.clear();
        }

        if !keep(SANITIZE_AUTH_SERVICE) {
            self.auth_service.clear();
        }
    }

    /// Same as [`User::sanitize`], used when rendering a profile
    pub fn sanitize_profile(&mut self, options: &SanitizeOptions) {
        self.sanitize(options);
    }

    /// Drop fields a non-admin caller must not set
    pub fn sanitize_input(&mut self, is_admin: bool) {
        if !is_admin {
            self.auth_data = Some(String::new());
            self.auth_service.clear();
            self.email_verified = false;
        }
    }

    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }

    /// Full name when known, username otherwise
    pub fn display_name(&self) -> String {
        let full_name = self.full_name();

        if full_name.is_empty() {
            self.username.clone()
        } else {
            full_name
        }
    }

    /// Strong etag for caching responses about this user
    pub fn etag(&self, show_full_name: bool, show_email: bool) -> String {
        etag(&[
            &self.id,
            &self.updated_at,
            &self.terms_of_service_id,
            &self.terms_of_service_created_at,
            &show_full_name,
            &show_email,
        ])
    }
}
