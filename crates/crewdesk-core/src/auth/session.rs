use chrono::{DateTime, Utc};

use crate::models::User;

/// In-memory state for the authenticated session.
///
/// The session credential itself is an HttpOnly cookie owned by the HTTP
/// client's jar and is never readable here; this tracks who is logged in
/// and since when.
#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
    established_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful login.
    pub fn establish(&mut self, user: User) {
        self.user = Some(user);
        self.established_at = Some(Utc::now());
    }

    /// Forget the session, e.g. after logout or a failed refresh.
    pub fn clear(&mut self) {
        self.user = None;
        self.established_at = None;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Minutes since login, for display.
    pub fn age_minutes(&self) -> Option<i64> {
        self.established_at
            .map(|established_at| (Utc::now() - established_at).num_minutes().max(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn test_user() -> User {
        User {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Admin,
            company_id: Some(3),
            employee_id: None,
            created_at: None,
        }
    }

    #[test]
    fn test_establish_and_clear() {
        let mut session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.age_minutes(), None);

        session.establish(test_user());
        assert!(session.is_authenticated());
        assert_eq!(session.user().map(|u| u.id), Some(1));
        assert_eq!(session.age_minutes(), Some(0));

        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }
}
