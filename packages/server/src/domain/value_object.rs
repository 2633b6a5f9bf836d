//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use super::error::ValueObjectError;

/// Maximum length of a chatroom name (characters)
pub const CHATROOM_NAME_MAX_LENGTH: usize = 100;

/// Maximum length of an email address (characters)
pub const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum length of a post body (characters)
pub const POST_CONTENT_MAX_LENGTH: usize = 10000;

fn parse_uuid(kind: &'static str, value: &str) -> Result<Uuid, ValueObjectError> {
    Uuid::parse_str(value).map_err(|_| ValueObjectError::InvalidId {
        kind,
        value: value.to_string(),
    })
}

/// Account identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Build an AccountId from an already generated UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse an AccountId from its string form.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::InvalidId` if `value` is not a UUID
    pub fn parse(value: &str) -> Result<Self, ValueObjectError> {
        parse_uuid("AccountId", value).map(Self)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chatroom identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatroomId(Uuid);

impl ChatroomId {
    /// Build a ChatroomId from an already generated UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a ChatroomId from its string form.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::InvalidId` if `value` is not a UUID
    pub fn parse(value: &str) -> Result<Self, ValueObjectError> {
        parse_uuid("ChatroomId", value).map(Self)
    }
}

impl fmt::Display for ChatroomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Post identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(Uuid);

impl PostId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of chatrooms an account may own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MaxAllowedRooms(u32);

impl MaxAllowedRooms {
    /// Create a new MaxAllowedRooms.
    ///
    /// # Arguments
    ///
    /// * `value` - Requested quota, as received from the caller
    ///
    /// # Returns
    ///
    /// A Result containing the quota or an error if it is negative or too large
    pub fn new(value: i64) -> Result<Self, ValueObjectError> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| ValueObjectError::MaxAllowedRoomsOutOfRange {
                max: u32::MAX,
                actual: value,
            })
    }

    /// Get the inner value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MaxAllowedRooms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chatroom display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatroomName(String);

impl ChatroomName {
    /// Create a new ChatroomName.
    ///
    /// # Returns
    ///
    /// A Result containing the ChatroomName or an error if validation fails
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        if name.trim().is_empty() {
            return Err(ValueObjectError::ChatroomNameEmpty);
        }
        let len = name.chars().count();
        if len > CHATROOM_NAME_MAX_LENGTH {
            return Err(ValueObjectError::ChatroomNameTooLong {
                max: CHATROOM_NAME_MAX_LENGTH,
                actual: len,
            });
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatroomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Email address identifying a chat user.
///
/// Only a light structural check is applied: users are identified by the
/// address string, not by a verified mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new Email.
    ///
    /// # Returns
    ///
    /// A Result containing the Email or an error if validation fails
    pub fn new(email: String) -> Result<Self, ValueObjectError> {
        if email.is_empty() {
            return Err(ValueObjectError::EmailEmpty);
        }
        let len = email.chars().count();
        if len > EMAIL_MAX_LENGTH {
            return Err(ValueObjectError::EmailTooLong {
                max: EMAIL_MAX_LENGTH,
                actual: len,
            });
        }
        if !email.contains('@') {
            return Err(ValueObjectError::EmailInvalidFormat(email));
        }
        Ok(Self(email))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Post content value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostContent(String);

impl PostContent {
    /// Create a new PostContent.
    ///
    /// # Returns
    ///
    /// A Result containing the PostContent or an error if validation fails
    pub fn new(content: String) -> Result<Self, ValueObjectError> {
        if content.is_empty() {
            return Err(ValueObjectError::PostContentEmpty);
        }
        let len = content.chars().count();
        if len > POST_CONTENT_MAX_LENGTH {
            return Err(ValueObjectError::PostContentTooLong {
                max: POST_CONTENT_MAX_LENGTH,
                actual: len,
            });
        }
        Ok(Self(content))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle type of a chatroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatroomType {
    Trial,
    #[default]
    Standard,
}

impl ChatroomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trial => "trial",
            Self::Standard => "standard",
        }
    }
}

impl FromStr for ChatroomType {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trial" => Ok(Self::Trial),
            "standard" => Ok(Self::Standard),
            other => Err(ValueObjectError::InvalidChatroomType(other.to_string())),
        }
    }
}

impl fmt::Display for ChatroomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operational status of a chatroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatroomStatus {
    #[default]
    Active,
    Suspended,
}

impl ChatroomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
        }
    }
}

impl FromStr for ChatroomStatus {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "suspended" => Ok(Self::Suspended),
            other => Err(ValueObjectError::InvalidChatroomStatus(other.to_string())),
        }
    }
}

impl fmt::Display for ChatroomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    ///
    /// # Arguments
    ///
    /// * `value` - Unix timestamp in milliseconds
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        Self(chatrooms_shared::time::now_timestamp_millis())
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
