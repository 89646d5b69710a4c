//! Identifier types for the board domain.
//!
//! The hosted store keys every row with opaque text (numeric strings or UUID
//! strings), so identifiers wrap a trimmed, non-empty `String`.

use super::BoardDomainError;

/// Declares a validated text identifier newtype.
///
/// `$error` must have an `EmptyIdentifier(&'static str)` variant.
macro_rules! text_identifier {
    ($(#[$meta:meta])* $name:ident, $kind:literal, $error:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a validated identifier.
            ///
            /// # Errors
            ///
            /// Returns an `EmptyIdentifier` error when the value is blank
            /// after trimming.
            pub fn new(value: impl Into<String>) -> Result<Self, $error> {
                let raw = value.into();
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err($error::EmptyIdentifier($kind));
                }
                Ok(Self(trimmed.to_owned()))
            }

            /// Returns the identifier as `str`.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = $error;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

pub(crate) use text_identifier;

text_identifier!(
    /// Workspace owning tasks, statuses and the roster.
    WorkspaceId,
    "workspace",
    BoardDomainError
);
text_identifier!(
    /// Task identifier.
    TaskId,
    "task",
    BoardDomainError
);
text_identifier!(
    /// Workflow status (board column) identifier.
    StatusId,
    "status",
    BoardDomainError
);
text_identifier!(
    /// Project identifier.
    ProjectId,
    "project",
    BoardDomainError
);
text_identifier!(
    /// Space identifier.
    SpaceId,
    "space",
    BoardDomainError
);
text_identifier!(
    /// Sprint identifier.
    SprintId,
    "sprint",
    BoardDomainError
);
text_identifier!(
    /// Authenticated user (profile) identifier.
    UserId,
    "user",
    BoardDomainError
);
text_identifier!(
    /// Team roster member identifier.
    MemberId,
    "member",
    BoardDomainError
);
