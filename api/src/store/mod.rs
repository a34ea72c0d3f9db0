//! In-memory user directory backed by the fixture compiled into the binary.
//!
//! The fixture mirrors the shape of the public JSONPlaceholder `/users`
//! resource, so the UI behaves the same against either backend.

use payloads::{UserId, responses};

const USERS_FIXTURE: &str = include_str!("fixtures/users.json");

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("user {0} does not exist")]
    UserNotFound(UserId),
    #[error("fixture data is malformed")]
    MalformedFixture(#[from] serde_json::Error),
    #[error("fixture contains user {0} more than once")]
    DuplicateUser(UserId),
}

/// Users ordered by id.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<responses::User>,
}

impl UserDirectory {
    pub fn from_fixture() -> Result<Self, StoreError> {
        Self::from_json(USERS_FIXTURE)
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let mut users: Vec<responses::User> = serde_json::from_str(json)?;
        users.sort_by_key(|user| user.id);
        if let Some(pair) = users.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(StoreError::DuplicateUser(pair[0].id));
        }
        Ok(Self { users })
    }

    pub fn list_users(&self) -> &[responses::User] {
        &self.users
    }

    pub fn get_user(
        &self,
        user_id: &UserId,
    ) -> Result<&responses::User, StoreError> {
        self.users
            .binary_search_by_key(user_id, |user| user.id)
            .map(|idx| &self.users[idx])
            .map_err(|_| StoreError::UserNotFound(*user_id))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
