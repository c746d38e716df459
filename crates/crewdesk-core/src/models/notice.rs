use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// A company-wide announcement shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(rename = "companyId")]
    pub company_id: i64,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "expiresAt")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Notice {
    /// Notices without an expiry never expire.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now() > expires_at,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn notice(expires_at: Option<DateTime<Utc>>) -> Notice {
        Notice {
            id: 1,
            title: "Office closed".to_string(),
            description: "Closed for the holiday.".to_string(),
            company_id: 3,
            created_at: None,
            expires_at,
        }
    }

    #[test]
    fn test_is_expired() {
        assert!(!notice(None).is_expired());
        assert!(!notice(Some(Utc::now() + Duration::hours(1))).is_expired());
        assert!(notice(Some(Utc::now() - Duration::hours(1))).is_expired());
    }
}
