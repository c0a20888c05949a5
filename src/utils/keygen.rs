//! Random key generation for short URL ids and account passwords.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of every generated key.
pub const KEY_LENGTH: usize = 8;

/// Generates a random 8-character alphanumeric key.
///
/// Keys are drawn uniformly from the 62-character alphabet `0-9A-Za-z`.
/// No uniqueness guarantee is made: short URL ids are probed against the
/// URL store before use, account passwords take no uniqueness check.
pub fn generate_key() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(KEY_LENGTH)
        .map(char::from)
        .collect()
}
