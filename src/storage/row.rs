//! Row - the fixed-width record format.
//!
//! A [`Row`] is the one record shape this store knows about. The codec
//! here defines its binary layout; every slot in every page holds exactly
//! one serialized row in this format.

use std::fmt;

use crate::common::config::{
    EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ID_SIZE, ROW_SIZE, USERNAME_OFFSET, USERNAME_SIZE,
};
use crate::common::{Error, Result};

/// One logical row: identifier, username, email.
///
/// # Binary Layout (291 bytes)
/// ```text
/// Offset  Size  Field
/// ------  ----  -----
/// 0       4     id (u32, little-endian)
/// 4       32    username (UTF-8, zero-padded)
/// 36      255   email (UTF-8, zero-padded)
/// ```
///
/// Text fields shorter than their capacity are zero-padded so unused
/// trailing bytes are deterministic; values longer than capacity are
/// rejected at serialization time, never truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Row identifier.
    pub id: u32,
    /// Username, at most `USERNAME_SIZE` bytes.
    pub username: String,
    /// Email address, at most `EMAIL_SIZE` bytes.
    pub email: String,
}

impl Row {
    /// Create a new row.
    pub fn new(id: u32, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Serialize this row into a fixed-size buffer.
    ///
    /// Pure transformation; the buffer is zeroed before fields are copied
    /// in, so two rows with equal fields always serialize identically.
    ///
    /// # Errors
    /// `Error::FieldTooLong` if the username or email exceeds its capacity.
    pub fn serialize(&self) -> Result<[u8; ROW_SIZE]> {
        check_capacity("username", &self.username, USERNAME_SIZE)?;
        check_capacity("email", &self.email, EMAIL_SIZE)?;

        let mut buf = [0u8; ROW_SIZE];

        buf[ID_OFFSET..ID_OFFSET + ID_SIZE].copy_from_slice(&self.id.to_le_bytes());

        let username = self.username.as_bytes();
        buf[USERNAME_OFFSET..USERNAME_OFFSET + username.len()].copy_from_slice(username);

        let email = self.email.as_bytes();
        buf[EMAIL_OFFSET..EMAIL_OFFSET + email.len()].copy_from_slice(email);

        Ok(buf)
    }

    /// Deserialize a row from its binary form.
    ///
    /// All fields are copied by fixed byte ranges; trailing zero padding
    /// is stripped from the text fields.
    ///
    /// # Errors
    /// `Error::MalformedRow` if `data` is not exactly `ROW_SIZE` bytes.
    pub fn deserialize(data: &[u8]) -> Result<Row> {
        if data.len() != ROW_SIZE {
            return Err(Error::MalformedRow {
                len: data.len(),
                expected: ROW_SIZE,
            });
        }

        let id = u32::from_le_bytes([
            data[ID_OFFSET],
            data[ID_OFFSET + 1],
            data[ID_OFFSET + 2],
            data[ID_OFFSET + 3],
        ]);

        let username = text_field(&data[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_SIZE]);
        let email = text_field(&data[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE]);

        Ok(Row {
            id,
            username,
            email,
        })
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username, self.email)
    }
}

fn check_capacity(field: &'static str, value: &str, max: usize) -> Result<()> {
    let len = value.len();
    if len > max {
        return Err(Error::FieldTooLong { field, len, max });
    }
    Ok(())
}

/// Recover a text field from its zero-padded byte region.
///
/// Only this codec writes rows, and it only writes UTF-8, so the lossy
/// conversion is a no-op in normal operation.
fn text_field(region: &[u8]) -> String {
    let end = region.iter().rposition(|&b| b != 0).map_or(0, |p| p + 1);
    String::from_utf8_lossy(&region[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_round_trip() {
        let row = Row::new(1, "alice", "a@example.com");

        let bytes = row.serialize().unwrap();
        let recovered = Row::deserialize(&bytes).unwrap();

        assert_eq!(row, recovered);
    }

    #[test]
    fn test_byte_layout() {
        let row = Row::new(0x04030201, "ab", "c@d");
        let bytes = row.serialize().unwrap();

        // id, little-endian
        assert_eq!(bytes[0], 0x01);
        assert_eq!(bytes[1], 0x02);
        assert_eq!(bytes[2], 0x03);
        assert_eq!(bytes[3], 0x04);

        // username at its fixed offset, zero-padded
        assert_eq!(&bytes[USERNAME_OFFSET..USERNAME_OFFSET + 2], b"ab");
        assert_eq!(bytes[USERNAME_OFFSET + 2], 0);
        assert_eq!(bytes[USERNAME_OFFSET + USERNAME_SIZE - 1], 0);

        // email at its fixed offset, zero-padded
        assert_eq!(&bytes[EMAIL_OFFSET..EMAIL_OFFSET + 3], b"c@d");
        assert_eq!(bytes[EMAIL_OFFSET + 3], 0);
        assert_eq!(bytes[ROW_SIZE - 1], 0);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let a = Row::new(9, "user", "u@example.com").serialize().unwrap();
        let b = Row::new(9, "user", "u@example.com").serialize().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fields_at_exact_capacity() {
        let row = Row::new(1, "a".repeat(USERNAME_SIZE), "b".repeat(EMAIL_SIZE));

        let bytes = row.serialize().unwrap();
        let recovered = Row::deserialize(&bytes).unwrap();

        assert_eq!(row, recovered);
    }

    #[test]
    fn test_username_over_capacity_is_rejected() {
        let row = Row::new(1, "a".repeat(USERNAME_SIZE + 1), "a@example.com");

        let err = row.serialize().unwrap_err();
        assert_eq!(
            err,
            Error::FieldTooLong {
                field: "username",
                len: USERNAME_SIZE + 1,
                max: USERNAME_SIZE,
            }
        );
    }

    #[test]
    fn test_email_over_capacity_is_rejected() {
        let row = Row::new(1, "alice", "b".repeat(EMAIL_SIZE + 1));

        let err = row.serialize().unwrap_err();
        assert_eq!(
            err,
            Error::FieldTooLong {
                field: "email",
                len: EMAIL_SIZE + 1,
                max: EMAIL_SIZE,
            }
        );
    }

    #[test]
    fn test_deserialize_wrong_length() {
        let err = Row::deserialize(&[0u8; 10]).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedRow {
                len: 10,
                expected: ROW_SIZE,
            }
        );

        let err = Row::deserialize(&[0u8; ROW_SIZE + 1]).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedRow {
                len: ROW_SIZE + 1,
                expected: ROW_SIZE,
            }
        );
    }

    #[test]
    fn test_empty_text_fields() {
        let row = Row::new(0, "", "");

        let bytes = row.serialize().unwrap();
        let recovered = Row::deserialize(&bytes).unwrap();

        assert_eq!(recovered.username, "");
        assert_eq!(recovered.email, "");
    }

    #[test]
    fn test_display() {
        let row = Row::new(1, "alice", "a@example.com");
        assert_eq!(format!("{}", row), "(1, alice, a@example.com)");
    }

    proptest! {
        #[test]
        fn prop_round_trip(
            id in any::<u32>(),
            username in "[a-zA-Z0-9._-]{0,32}",
            email in "[a-zA-Z0-9._@-]{0,255}",
        ) {
            let row = Row::new(id, username, email);
            let bytes = row.serialize().unwrap();
            prop_assert_eq!(Row::deserialize(&bytes).unwrap(), row);
        }
    }
}
