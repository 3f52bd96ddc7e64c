use super::NameResolver;
use crate::db::{db::blocking, users::Users};
use crate::libs::messages::Message;
use crate::libs::user::{NameResponse, FALLBACK_NAME};
use async_trait::async_trait;
use tracing::warn;

/// Resolves names straight from the users store of the same process.
#[derive(Clone)]
pub struct LocalNameResolver {
    users: Users,
}

impl LocalNameResolver {
    pub fn new(users: &Users) -> Self {
        Self { users: users.clone() }
    }
}

#[async_trait]
impl NameResolver for LocalNameResolver {
    async fn resolve(&self, user_id: i64) -> String {
        let users = self.users.clone();
        match blocking(move || users.get_by_id(user_id)).await {
            Ok(user) => NameResponse::from(user).name,
            Err(e) => {
                warn!(user_id, "{}", Message::NameResolveStoreFailed(user_id, e.to_string()));
                FALLBACK_NAME.to_string()
            }
        }
    }
}
