//! Domain type representing an authenticated account holder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Displayable, Identifiable};

/// A farm owner tracked by the identity holder.
///
/// Contact fields are all optional: email logins carry an email, phone
/// logins carry a phone number, and a profile photo may arrive later from
/// the identity backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: None,
            email: None,
            phone_number: None,
            photo_url: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}

impl Identifiable for User {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for User {
    fn display_label(&self) -> String {
        self.display_name
            .clone()
            .or_else(|| self.email.clone())
            .or_else(|| self.phone_number.clone())
            .unwrap_or_else(|| self.id.to_string())
    }
}
