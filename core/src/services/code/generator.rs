//! Unbiased code generator.
//!
//! Draws 63 random bits at a time and slices off the lowest `b` bits per
//! candidate index, where `b` is the smallest width that can address the whole
//! alphabet. Candidates outside the alphabet are discarded rather than folded
//! with a modulo, so every symbol is equally likely whatever the alphabet size.

use rand::RngCore;

use crate::domain::entities::CodeType;
use crate::errors::{AuthError, DomainError};

/// Random bits used from each 64-bit draw
const USABLE_BITS: u32 = 63;

/// Generate a code of `length` symbols drawn uniformly from `alphabet`.
pub fn generate(alphabet: &str, length: usize) -> Result<String, DomainError> {
    generate_with(&mut rand::thread_rng(), alphabet, length)
}

/// Generate a code for one of the well-known code types.
pub fn generate_code(code_type: CodeType, length: usize) -> Result<String, DomainError> {
    generate(code_type.alphabet(), length)
}

/// Same as [`generate`] with an explicit random source.
pub fn generate_with<R>(rng: &mut R, alphabet: &str, length: usize) -> Result<String, DomainError>
where
    R: RngCore + ?Sized,
{
    let symbols: Vec<char> = alphabet.chars().collect();
    if symbols.is_empty() {
        return Err(invalid_request("alphabet must not be empty"));
    }
    if length == 0 {
        return Err(invalid_request("length must be positive"));
    }

    let bits = index_bits(symbols.len());
    let mask = (1u64 << bits) - 1;
    let per_draw = USABLE_BITS / bits;

    let mut code = String::with_capacity(length);
    let mut produced = 0;
    let mut cache = 0u64;
    let mut remain = 0u32;

    while produced < length {
        if remain == 0 {
            cache = rng.next_u64() >> (64 - USABLE_BITS);
            remain = per_draw;
        }
        let index = (cache & mask) as usize;
        if index < symbols.len() {
            code.push(symbols[index]);
            produced += 1;
        }
        cache >>= bits;
        remain -= 1;
    }

    Ok(code)
}

/// Smallest `b >= 1` with `2^b >= n`
fn index_bits(n: usize) -> u32 {
    let mut bits = 1;
    while (1usize << bits) < n {
        bits += 1;
    }
    bits
}

fn invalid_request(message: &str) -> DomainError {
    AuthError::InvalidCodeRequest {
        message: message.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::verification_code::{ALPHANUMERIC, DIGITS, LOWERCASE_LETTERS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    /// Pearson statistic of symbol frequencies against a uniform distribution
    fn chi_square(code: &str, alphabet: &str) -> f64 {
        let mut counts: HashMap<char, usize> = alphabet.chars().map(|c| (c, 0)).collect();
        for c in code.chars() {
            *counts.get_mut(&c).expect("symbol outside alphabet") += 1;
        }
        let expected = code.chars().count() as f64 / alphabet.chars().count() as f64;
        counts
            .values()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum()
    }

    #[test]
    fn test_index_bits() {
        assert_eq!(index_bits(1), 1);
        assert_eq!(index_bits(2), 1);
        assert_eq!(index_bits(3), 2);
        assert_eq!(index_bits(10), 4);
        assert_eq!(index_bits(16), 4);
        assert_eq!(index_bits(26), 5);
        assert_eq!(index_bits(36), 6);
    }

    #[test]
    fn test_exact_length_and_alphabet() {
        for (alphabet, length) in [(DIGITS, 6), (LOWERCASE_LETTERS, 1), (ALPHANUMERIC, 64), ("x", 5)] {
            let code = generate(alphabet, length).unwrap();
            assert_eq!(code.chars().count(), length);
            assert!(code.chars().all(|c| alphabet.contains(c)));
        }
    }

    #[test]
    fn test_multibyte_alphabet() {
        let code = generate("甲乙丙", 12).unwrap();
        assert_eq!(code.chars().count(), 12);
        assert!(code.chars().all(|c| "甲乙丙".contains(c)));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            generate("", 6),
            Err(DomainError::Auth(AuthError::InvalidCodeRequest { .. }))
        ));
        assert!(matches!(
            generate(DIGITS, 0),
            Err(DomainError::Auth(AuthError::InvalidCodeRequest { .. }))
        ));
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = generate_with(&mut StdRng::seed_from_u64(11), ALPHANUMERIC, 32).unwrap();
        let b = generate_with(&mut StdRng::seed_from_u64(11), ALPHANUMERIC, 32).unwrap();
        assert_eq!(a, b);
    }

    // Critical values at p = 0.001 for (alphabet size - 1) degrees of freedom
    #[test]
    fn test_uniform_digits() {
        let code = generate_with(&mut StdRng::seed_from_u64(1), DIGITS, 100_000).unwrap();
        assert!(chi_square(&code, DIGITS) < 27.88);
    }

    #[test]
    fn test_uniform_letters() {
        let code = generate_with(&mut StdRng::seed_from_u64(2), LOWERCASE_LETTERS, 130_000).unwrap();
        assert!(chi_square(&code, LOWERCASE_LETTERS) < 52.62);
    }

    #[test]
    fn test_uniform_alphanumeric() {
        let code = generate_with(&mut StdRng::seed_from_u64(3), ALPHANUMERIC, 180_000).unwrap();
        assert!(chi_square(&code, ALPHANUMERIC) < 66.62);
    }

    #[test]
    fn test_uniform_non_power_of_two() {
        let code = generate_with(&mut StdRng::seed_from_u64(4), "abc", 30_000).unwrap();
        assert!(chi_square(&code, "abc") < 13.82);
    }
}
