//! Platform accounts modelled as a closed set of role variants.
//!
//! Purpose: replace the flat "user record with nullable role-specific
//! fields" shape with one variant per role, each declaring only the fields
//! it owns. The system-admin override code exists solely on
//! [`SystemAdmin`], so code handling any other variant cannot read, set, or
//! even name it; the compiler enforces what a runtime role check would only
//! ever assert.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroizing;

/// Privilege required before a system admin may release the override code.
pub const SPECIAL_PRIVILEGE: &str = "Special";

/// Validation errors returned by [`OverrideCode::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OverrideCodeValidationError {
    /// The code was empty once trimmed of whitespace.
    #[error("override code must not be empty")]
    Empty,
}

/// The privileged secret held only by system admins.
///
/// The inner value is zeroised on drop and redacted from `Debug` output so
/// it never leaks into logs; [`OverrideCode::reveal`] is the only read path.
#[derive(Clone)]
pub struct OverrideCode(Zeroizing<String>);

impl PartialEq for OverrideCode {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_str() == other.0.as_str()
    }
}

impl Eq for OverrideCode {}

impl OverrideCode {
    /// Validate and construct an [`OverrideCode`] from owned input.
    pub fn new(code: impl Into<String>) -> Result<Self, OverrideCodeValidationError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(OverrideCodeValidationError::Empty);
        }
        Ok(Self(Zeroizing::new(code)))
    }

    /// Expose the secret to a caller that already holds a [`SystemAdmin`].
    pub fn reveal(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for OverrideCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OverrideCode(<redacted>)")
    }
}

/// An ordinary platform user scoped to one customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicUser {
    /// Stable account identifier.
    pub id: Uuid,
    /// Contact email address.
    pub email: String,
    /// Display name shown to other users.
    pub username: String,
    /// The customer this account belongs to.
    pub customer_id: Uuid,
}

/// An administrator for a single customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerAdmin {
    /// Stable account identifier.
    pub id: Uuid,
    /// Contact email address.
    pub email: String,
    /// Display name shown to other users.
    pub username: String,
    /// Administrative privileges granted to this account.
    pub privileges: Vec<String>,
    /// The customer this account administers.
    pub customer_id: Uuid,
}

/// A platform-wide administrator holding the override code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemAdmin {
    /// Stable account identifier.
    pub id: Uuid,
    /// Contact email address.
    pub email: String,
    /// Display name shown to other users.
    pub username: String,
    /// Administrative privileges granted to this account.
    pub privileges: Vec<String>,
    /// The privileged secret; no other variant carries this field.
    pub override_code: OverrideCode,
}

impl SystemAdmin {
    /// Whether this admin holds the given privilege.
    pub fn has_privilege(&self, privilege: &str) -> bool {
        self.privileges.iter().any(|held| held == privilege)
    }

    /// Release the override code.
    ///
    /// Callable only with a [`SystemAdmin`] in hand, so the "this shouldn't
    /// happen" guard a flat record would need is structurally impossible.
    pub fn release_override(&self) -> &OverrideCode {
        &self.override_code
    }
}

/// A platform account: exactly one of the closed set of role shapes.
///
/// Dispatch sites match exhaustively with no wildcard arm, so adding a
/// variant fails to compile until every site handles it.
///
/// # Examples
/// ```
/// use backend::domain::{Account, BasicUser};
/// use uuid::Uuid;
///
/// let account = Account::Basic(BasicUser {
///     id: Uuid::new_v4(),
///     email: "ada@example.com".into(),
///     username: "ada".into(),
///     customer_id: Uuid::new_v4(),
/// });
/// assert_eq!(account.username(), "ada");
/// assert!(account.authorise_override().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Account {
    /// An ordinary user.
    Basic(BasicUser),
    /// A customer-scoped administrator.
    CustomerAdmin(CustomerAdmin),
    /// A platform-wide administrator.
    SystemAdmin(SystemAdmin),
}

impl Account {
    /// Stable account identifier, shared by every role shape.
    pub fn id(&self) -> Uuid {
        match self {
            Self::Basic(user) => user.id,
            Self::CustomerAdmin(admin) => admin.id,
            Self::SystemAdmin(admin) => admin.id,
        }
    }

    /// Contact email address, shared by every role shape.
    pub fn email(&self) -> &str {
        match self {
            Self::Basic(user) => user.email.as_str(),
            Self::CustomerAdmin(admin) => admin.email.as_str(),
            Self::SystemAdmin(admin) => admin.email.as_str(),
        }
    }

    /// Display name, shared by every role shape.
    pub fn username(&self) -> &str {
        match self {
            Self::Basic(user) => user.username.as_str(),
            Self::CustomerAdmin(admin) => admin.username.as_str(),
            Self::SystemAdmin(admin) => admin.username.as_str(),
        }
    }

    /// Release the override code if this account is entitled to it.
    ///
    /// Only a system admin holding [`SPECIAL_PRIVILEGE`] gets the code; the
    /// privilege check is a precondition gate, so its absence yields no
    /// action rather than an error. Other variants have no code to release,
    /// which the match arms state rather than assert.
    pub fn authorise_override(&self) -> Option<&OverrideCode> {
        match self {
            Self::SystemAdmin(admin) => admin
                .has_privilege(SPECIAL_PRIVILEGE)
                .then(|| admin.release_override()),
            Self::CustomerAdmin(_) | Self::Basic(_) => None,
        }
    }
}
