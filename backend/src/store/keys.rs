//! Time-ordered record keys.
//!
//! A key is 12 hex digits of milliseconds since the epoch, 6 hex digits of a
//! process-wide sequence and 8 hex digits of randomness. Keys generated by one
//! thread sort in creation order.

use chrono::Utc;
use std::sync::atomic::{AtomicU32, Ordering};
use uuid::Uuid;

static SEQUENCE: AtomicU32 = AtomicU32::new(0);

pub fn next_key() -> String {
    let millis = Utc::now().timestamp_millis().max(0);
    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed) & 0x00FF_FFFF;
    let random = Uuid::new_v4().simple().to_string();
    format!("{millis:012x}{sequence:06x}{}", &random[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_have_fixed_width() {
        let key = next_key();
        assert_eq!(key.len(), 26);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn keys_sort_in_creation_order() {
        let keys: Vec<String> = (0..200).map(|_| next_key()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        sorted.dedup();
        assert_eq!(sorted.len(), keys.len());
    }
}
