//! Author resolution for article edits.

use crate::zendesk::{User, CONTENT_BLOCK_EDITOR_ID};

/// Who is credited with an article's last edit.
///
/// The two placeholder variants both file tickets under the configured
/// API user, but they are distinct identities: from each other, and from
/// a genuine author who happens to share a placeholder's display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AuthorIdentity {
    /// Editor found in the page's embedded user list.
    Resolved { id: i64, name: String },
    /// Last edit came from a content-block propagation, not a person.
    ContentBlockEdit,
    /// Editor id was absent from the embedded user list.
    LookupFailed,
}

impl AuthorIdentity {
    pub fn display_name(&self) -> &str {
        match self {
            Self::Resolved { name, .. } => name,
            Self::ContentBlockEdit => "Content Block Edit",
            Self::LookupFailed => "Error getting author name",
        }
    }

    /// Requester for tickets filed on this identity's articles.
    /// Placeholders fall back to the API user.
    pub fn requester_id(&self, api_user_id: i64) -> i64 {
        match self {
            Self::Resolved { id, .. } => *id,
            Self::ContentBlockEdit | Self::LookupFailed => api_user_id,
        }
    }
}

/// Resolve an article's last editor against the page's embedded users.
///
/// Resolution is total: the only expected failure is an editor id missing
/// from the embedded list, and that maps to the error placeholder rather
/// than surfacing.
pub fn resolve_author(editor_id: i64, users: &[User]) -> AuthorIdentity {
    if editor_id == CONTENT_BLOCK_EDITOR_ID {
        return AuthorIdentity::ContentBlockEdit;
    }
    match users.iter().find(|u| u.id == editor_id) {
        Some(user) => AuthorIdentity::Resolved {
            id: user.id,
            name: user.name.clone(),
        },
        None => AuthorIdentity::LookupFailed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<User> {
        vec![
            User {
                id: 9,
                name: "Alice".to_string(),
            },
            User {
                id: 10,
                name: "Bob".to_string(),
            },
        ]
    }

    #[test]
    fn test_resolves_known_editor() {
        let author = resolve_author(9, &users());
        assert_eq!(
            author,
            AuthorIdentity::Resolved {
                id: 9,
                name: "Alice".to_string()
            }
        );
        assert_eq!(author.display_name(), "Alice");
        assert_eq!(author.requester_id(42), 9);
    }

    #[test]
    fn test_content_block_sentinel() {
        let author = resolve_author(CONTENT_BLOCK_EDITOR_ID, &users());
        assert_eq!(author, AuthorIdentity::ContentBlockEdit);
        assert_eq!(author.display_name(), "Content Block Edit");
        assert_eq!(author.requester_id(42), 42);
    }

    #[test]
    fn test_missing_editor_is_lookup_failure() {
        let author = resolve_author(999, &users());
        assert_eq!(author, AuthorIdentity::LookupFailed);
        assert_eq!(author.display_name(), "Error getting author name");
        assert_eq!(author.requester_id(42), 42);
    }

    #[test]
    fn test_placeholders_stay_distinguishable() {
        assert_ne!(AuthorIdentity::ContentBlockEdit, AuthorIdentity::LookupFailed);

        // A real person named like a placeholder is still a separate identity.
        let impostor = AuthorIdentity::Resolved {
            id: 42,
            name: "Content Block Edit".to_string(),
        };
        assert_ne!(impostor, AuthorIdentity::ContentBlockEdit);
        assert_eq!(impostor.display_name(), AuthorIdentity::ContentBlockEdit.display_name());
    }
}
