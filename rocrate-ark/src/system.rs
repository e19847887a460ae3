//! Time-ordered naming authority for production use

use crate::NamingAuthority;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Naming authority issuing time-ordered suffixes.
///
/// Each suffix is the current UTC millisecond timestamp in base 36 followed
/// by a per-run sequence number. The sequence number alone guarantees
/// uniqueness within a run; the timestamp makes suffixes from later runs sort
/// after earlier ones.
#[derive(Debug)]
pub struct SystemAuthority {
    prefix: String,
    counter: AtomicU64,
}

impl SystemAuthority {
    /// Create an authority for the given NAAN (e.g. `"59852"`).
    pub fn new(naan: &str) -> Self {
        SystemAuthority {
            prefix: format!("ark:{naan}"),
            counter: AtomicU64::new(0),
        }
    }
}

fn base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}

impl NamingAuthority for SystemAuthority {
    fn prefix(&self) -> &str {
        &self.prefix
    }

    fn next_suffix(&self) -> String {
        let millis = Utc::now().timestamp_millis().max(0) as u64;
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}{n:04}", base36(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixes_are_unique_and_ordered() {
        let authority = SystemAuthority::new("59852");
        let a = authority.next_suffix();
        let b = authority.next_suffix();
        let c = authority.next_suffix();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_base36_round_digits() {
        assert_eq!(base36(0), "0");
        assert_eq!(base36(35), "z");
        assert_eq!(base36(36), "10");
    }
}
