//! Factory functions for in-memory user profile models.

use chrono::Utc;

use crate::model::UserProfileModel;

/// Create a user profile model without touching the database.
///
/// The email is derived from the Google ID so profiles stay distinguishable in assertions.
pub fn mock_user_profile_model(google_id: &str, role: &str) -> UserProfileModel {
    let now = Utc::now().naive_utc();
    UserProfileModel {
        id: 1,
        google_id: google_id.to_string(),
        email: format!("{}@example.com", google_id),
        full_name: "Test User".to_string(),
        avatar_url: None,
        role: role.to_string(),
        created_at: now,
        updated_at: now,
    }
}
