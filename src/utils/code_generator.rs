//! Random short code generation.

use rand::Rng;

/// Default length of a generated short code.
pub const CODE_LENGTH: usize = 6;

/// 62-character code alphabet: uppercase, lowercase, digits.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random short code of `length` characters.
///
/// Each position is drawn independently and uniformly from the 62-character
/// alphabet. Uniqueness against stored records is the caller's concern; see
/// [`crate::application::services::ShortenerService`].
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
