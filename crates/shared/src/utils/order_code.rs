use anyhow::Result;
use chrono::Utc;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng, TryRngCore};

const SUFFIX_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SUFFIX_LEN: usize = 4;
const CLOCK_DIGITS: usize = 6;

/// Pickup code shown to the eater: the last six digits of the current Unix
/// millisecond clock followed by four random base-36 characters.
///
/// Uniqueness is not guaranteed here; the backend rejects duplicates.
pub fn generate_order_code() -> Result<String> {
    generate_order_code_at(Utc::now().timestamp_millis())
}

pub fn generate_order_code_at(unix_millis: i64) -> Result<String> {
    let mut seed = [0u8; 32];
    OsRng.try_fill_bytes(&mut seed)?;
    let mut rng = StdRng::from_seed(seed);

    let clock = unix_millis.unsigned_abs().to_string();
    let clock = &clock[clock.len().saturating_sub(CLOCK_DIGITS)..];

    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| {
            let idx = rng.random_range(0..SUFFIX_ALPHABET.len());
            SUFFIX_ALPHABET[idx] as char
        })
        .collect();

    Ok(format!("{clock}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_ends_with_clock_digits_and_suffix() {
        let code = generate_order_code_at(1_740_819_482_913).unwrap();
        assert_eq!(code.len(), 10);
        assert!(code.starts_with("482913"));
        assert!(
            code[6..]
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }

    #[test]
    fn short_clock_is_kept_whole() {
        let code = generate_order_code_at(42).unwrap();
        assert!(code.starts_with("42"));
        assert_eq!(code.len(), 6);
    }

    #[test]
    fn live_code_fits_backend_limit() {
        let code = generate_order_code().unwrap();
        assert!(!code.is_empty() && code.len() <= 32);
    }
}
