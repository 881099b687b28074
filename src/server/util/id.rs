use rand::Rng;

pub const ATTENDANCE_ID_PREFIX: &str = "ATD-";
pub const ACTIVITY_ID_PREFIX: &str = "ACT-";

/// Length of the random part of generated identifiers.
const ID_SUFFIX_LENGTH: usize = 16;

/// Generates an identifier made of `prefix` and a random alphanumeric suffix.
///
/// Uniqueness is enforced by the primary key of the target table; repositories
/// regenerate the id when an insert hits a collision.
pub fn generate_id(prefix: &str) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    let suffix: String = (0..ID_SUFFIX_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();

    format!("{}{}", prefix, suffix)
}
