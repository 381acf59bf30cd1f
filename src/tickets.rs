// Booking ticket codes

use rand::Rng;

const TICKET_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const TICKET_CODE_LEN: usize = 8;

/// Fresh 8-character uppercase alphanumeric code, generated once per booking.
/// Uniqueness is not checked; a collision is treated as astronomically
/// unlikely.
pub fn ticket_code() -> String {
    let mut rng = rand::rng();
    (0..TICKET_CODE_LEN)
        .map(|_| TICKET_ALPHABET[rng.random_range(0..TICKET_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_eight_uppercase_alphanumerics() {
        for _ in 0..100 {
            let code = ticket_code();
            assert_eq!(code.len(), TICKET_CODE_LEN);
            assert!(code
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
        }
    }

    #[test]
    fn codes_vary() {
        let codes: std::collections::HashSet<String> = (0..50).map(|_| ticket_code()).collect();
        assert!(codes.len() > 1);
    }
}
