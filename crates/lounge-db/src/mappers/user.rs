//! User entity <-> model mapper

use lounge_core::entities::User;
use lounge_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity (password hash stays behind)
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            email: model.email,
            display_name: model.display_name,
            is_staff: model.is_staff,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
