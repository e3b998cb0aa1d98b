//! Maps key characters onto child slots.
//!
//! Every node has one slot per letter of the alphabet. This module is the only
//! place that knows how a character turns into a slot index and back again.
use crate::{Error, Result};

/// Number of child slots per node (`'a'..='z'`).
pub const ALPHABET_SIZE: usize = 26;

/// Returns the child slot for `c`, or `InvalidCharacter` if `c` is not in the alphabet.
///
/// `position` is only used to fill in the error.
pub fn char_index(c: char, position: usize) -> Result<usize> {
    if c.is_ascii_lowercase() {
        return Ok((c as u8 - b'a') as usize);
    }

    Err(Error::InvalidCharacter {
        character: c,
        position,
    })
}

/// Inverse of [`char_index`].
pub fn index_char(index: usize) -> char {
    debug_assert!(index < ALPHABET_SIZE);
    (b'a' + index as u8) as char
}

/// Converts a whole key into slot indices.
///
/// The key is validated up front so callers can reject it before touching the tree.
pub fn key_indices(key: &str) -> Result<Vec<u8>> {
    key.chars()
        .enumerate()
        .map(|(position, c)| char_index(c, position).map(|slot| slot as u8))
        .collect()
}

/// Like [`key_indices`], but for read-only paths where an invalid key is just absent.
pub(crate) fn lookup_indices(key: &str) -> Option<Vec<u8>> {
    key_indices(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_index_bounds() {
        assert_eq!(char_index('a', 0), Ok(0));
        assert_eq!(char_index('z', 0), Ok(25));
        assert_eq!(char_index('m', 0), Ok(12));
    }

    #[test]
    fn test_char_index_rejects_outside_alphabet() {
        for c in ['A', 'Z', '0', ' ', '{', '`', 'é', '字'].iter() {
            assert_eq!(
                char_index(*c, 3),
                Err(Error::InvalidCharacter {
                    character: *c,
                    position: 3
                })
            );
        }
    }

    #[test]
    fn test_only_lowercase_ascii_has_slots() {
        let accepted: String = (0u8..=255)
            .map(char::from)
            .filter(|c| char_index(*c, 0).is_ok())
            .collect();

        assert_eq!(accepted, "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn test_index_char_inverts_char_index() {
        for index in 0..ALPHABET_SIZE {
            let c = index_char(index);
            assert_eq!(char_index(c, 0), Ok(index));
        }
    }

    #[test]
    fn test_key_indices() {
        assert_eq!(key_indices("bad"), Ok(vec![1, 0, 3]));
        assert_eq!(key_indices(""), Ok(vec![]));
    }

    #[test]
    fn test_key_indices_reports_first_bad_position() {
        assert_eq!(
            key_indices("geEks"),
            Err(Error::InvalidCharacter {
                character: 'E',
                position: 2
            })
        );
        // position counts characters, not bytes
        assert_eq!(
            key_indices("ñab?"),
            Err(Error::InvalidCharacter {
                character: 'ñ',
                position: 0
            })
        );
    }

    #[test]
    fn test_lookup_indices() {
        assert_eq!(lookup_indices("zoo"), Some(vec![25, 14, 14]));
        assert_eq!(lookup_indices("Zoo"), None);
    }
}
