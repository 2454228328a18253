//! Certificate number generation.
//!
//! A certificate number is a 16 character uppercase tag derived from the
//! student's name, registration number and course code, salted with the
//! current time and a random number. It is a display identifier only: two
//! calls with the same inputs almost always differ, and nothing guarantees
//! global uniqueness.

use rand::Rng;

/// Exact length of every certificate number.
pub const CERTIFICATE_NUMBER_LEN: usize = 16;

/// Cycled onto the end of short hex values until the length is reached.
pub const FILLER: &str = "A2QTU";

/// Upper bound (exclusive) of the random salt.
const RANDOM_SALT_BOUND: u32 = 100_000;

/// Generates a fresh certificate number using the wall clock and thread RNG.
pub fn generate_certificate_number(name: &str, reg_no: &str, course_code: &str) -> String {
    let timestamp_ms = chrono::Utc::now().timestamp_millis();
    let random = rand::thread_rng().gen_range(0..RANDOM_SALT_BOUND);
    certificate_number_from(name, reg_no, course_code, timestamp_ms, random)
}

/// Deterministic core of [`generate_certificate_number`].
///
/// Hashes `"{name}-{reg_no}-{course_code}"` over its UTF-16 code units with
/// the classic `h * 31 + c` fold (wrapping at 32 bits), adds the timestamp and
/// salt, and renders the magnitude as hex padded with [`FILLER`].
pub fn certificate_number_from(
    name: &str,
    reg_no: &str,
    course_code: &str,
    timestamp_ms: i64,
    random: u32,
) -> String {
    let input = format!("{name}-{reg_no}-{course_code}");
    let hash = string_hash(&input);
    let combined = (hash as i64)
        .wrapping_add(timestamp_ms)
        .wrapping_add(random as i64)
        .unsigned_abs();

    let mut out = format!("{combined:x}");
    out.extend(FILLER.chars().cycle().take(CERTIFICATE_NUMBER_LEN.saturating_sub(out.len())));
    out.truncate(CERTIFICATE_NUMBER_LEN);
    out.to_uppercase()
}

fn string_hash(input: &str) -> i32 {
    input
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
}

/// True when `candidate` has the shape of a certificate number.
pub fn is_certificate_number(candidate: &str) -> bool {
    candidate.len() == CERTIFICATE_NUMBER_LEN
        && candidate
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c) || FILLER.contains(c))
}
