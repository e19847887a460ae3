//! Deterministic in-memory naming authority for testing
//!
//! Issues zero-padded sequence numbers so minted identifiers are stable
//! across runs, which keeps test fixtures and recorded outputs reproducible.

use crate::NamingAuthority;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory naming authority issuing a deterministic sequence.
///
/// Suffixes are `000001`, `000002`, ... in call order.
#[derive(Debug)]
pub struct MemoryAuthority {
    prefix: String,
    counter: AtomicU64,
}

impl MemoryAuthority {
    /// Create an authority for the given NAAN (e.g. `"59852"`).
    pub fn new(naan: &str) -> Self {
        MemoryAuthority {
            prefix: format!("ark:{naan}"),
            counter: AtomicU64::new(0),
        }
    }

    /// Number of suffixes issued so far.
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

impl NamingAuthority for MemoryAuthority {
    fn prefix(&self) -> &str {
        &self.prefix
    }

    fn next_suffix(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{n:06}")
    }
}
