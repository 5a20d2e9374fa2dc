use serde::{Deserialize, Serialize};

use picnic_core::{SessionId, UserId};

/// The lookup discriminator for a cart: exactly one of an authenticated
/// user id or an anonymous session id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OwnerKey {
    User(UserId),
    Session(SessionId),
}

impl OwnerKey {
    /// Resolve an owner key from optional identifiers, preferring the
    /// authenticated user over the anonymous session.
    pub fn resolve(user_id: Option<UserId>, session_id: Option<SessionId>) -> Option<Self> {
        if let Some(user_id) = user_id {
            Some(Self::User(user_id))
        } else {
            session_id.map(Self::Session)
        }
    }

    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            Self::User(id) => Some(id),
            Self::Session(_) => None,
        }
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        match self {
            Self::User(_) => None,
            Self::Session(id) => Some(id),
        }
    }
}
