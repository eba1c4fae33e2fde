//! User domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::{Error, Result};

/// A caller known to the system. The id is issued by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl User {
    /// Name used when addressing the user, falling back to the email's local part.
    pub fn display_name(&self) -> Option<String> {
        self.first_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .or_else(|| {
                self.email
                    .as_deref()
                    .and_then(|email| email.split('@').next())
                    .filter(|local| !local.is_empty())
                    .map(str::to_string)
            })
    }
}

/// Input model for inserting or refreshing a user.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUser {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
}

impl UpsertUser {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first_name: Option<&str>, email: Option<&str>) -> User {
        let now = chrono::Utc::now().naive_utc();
        User {
            id: "user-1".to_string(),
            email: email.map(str::to_string),
            first_name: first_name.map(str::to_string),
            last_name: None,
            profile_image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_display_name_prefers_first_name() {
        let u = user(Some("Ada"), Some("ada@example.com"));
        assert_eq!(u.display_name().as_deref(), Some("Ada"));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let u = user(Some("  "), Some("grace@example.com"));
        assert_eq!(u.display_name().as_deref(), Some("grace"));
        assert_eq!(user(None, None).display_name(), None);
    }

    #[test]
    fn test_upsert_requires_id() {
        assert!(UpsertUser::default().validate().is_err());
        let ok = UpsertUser {
            id: "abc".to_string(),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());
    }
}
