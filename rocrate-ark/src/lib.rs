//! ARK persistent identifiers and naming-authority minting
//!
//! This crate provides the identifier layer for rocrate-promote:
//!
//! - [`Ark`]: parsed ARK identifier (`ark:<naan>/<name>`)
//! - [`NamingAuthority`]: the collaborator that issues fresh identifier
//!   suffixes under a configured authority prefix
//! - [`MemoryAuthority`]: deterministic sequence implementation for tests
//!   and reproducible fixtures
//! - [`SystemAuthority`]: time-ordered implementation for production use
//! - [`slug`]: normalization of human-readable attributes into identifier
//!   segments
//!
//! # Example
//!
//! ```
//! use rocrate_ark::{Ark, MemoryAuthority, NamingAuthority};
//!
//! let ark = Ark::parse("ark:59852/dataset-4a7f").unwrap();
//! assert_eq!(ark.naan, "59852");
//! assert_eq!(ark.name, "dataset-4a7f");
//!
//! let authority = MemoryAuthority::new("59852");
//! assert_eq!(authority.prefix(), "ark:59852");
//! assert_eq!(authority.next_suffix(), "000001");
//! assert_eq!(authority.next_suffix(), "000002");
//! ```

mod error;
pub mod memory;
pub mod system;

pub use error::{ArkError, Result};
pub use memory::MemoryAuthority;
pub use system::SystemAuthority;

use std::fmt;

/// A parsed ARK identifier.
///
/// The canonical serialized form is `ark:<naan>/<name>` where `<naan>` is the
/// all-digit Name Assigning Authority Number and `<name>` is the
/// authority-local name. The older `ark:/<naan>/<name>` form is accepted on
/// parse and normalized away.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ark {
    /// Name Assigning Authority Number (digits only)
    pub naan: String,
    /// Authority-local name
    pub name: String,
}

impl Ark {
    /// Parse an ARK identifier string.
    ///
    /// Fails if the `ark:` scheme is missing, the NAAN is empty or
    /// non-numeric, or the name is empty or contains characters outside
    /// `[A-Za-z0-9._/-]`.
    pub fn parse(id: &str) -> Result<Ark> {
        let rest = id
            .strip_prefix("ark:")
            .ok_or_else(|| ArkError::invalid(id, "missing 'ark:' scheme"))?;
        // Tolerate the legacy "ark:/naan/name" form.
        let rest = rest.strip_prefix('/').unwrap_or(rest);

        let (naan, name) = rest
            .split_once('/')
            .ok_or_else(|| ArkError::invalid(id, "missing '/' between NAAN and name"))?;

        if naan.is_empty() || !naan.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ArkError::invalid(id, "NAAN must be one or more digits"));
        }
        if name.is_empty() {
            return Err(ArkError::invalid(id, "empty name"));
        }
        if !name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-' | b'/'))
        {
            return Err(ArkError::invalid(id, "name contains invalid characters"));
        }

        Ok(Ark {
            naan: naan.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for Ark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ark:{}/{}", self.naan, self.name)
    }
}

/// Check whether a string is a valid ARK identifier.
pub fn is_valid(id: &str) -> bool {
    Ark::parse(id).is_ok()
}

/// The identifier-minting collaborator.
///
/// Implementations issue suffixes that are monotonically unique per call
/// within a run: two calls always return distinct suffixes, and later calls
/// sort after earlier ones.
pub trait NamingAuthority {
    /// Authority prefix new identifiers are minted under (e.g. `ark:59852`).
    fn prefix(&self) -> &str;

    /// Issue a fresh suffix. Never returns the same value twice.
    fn next_suffix(&self) -> String;
}

/// Normalize a human-readable attribute into an identifier segment.
///
/// Lower-cases the input, collapses whitespace runs into single hyphens, and
/// drops every character outside `[a-z0-9._-]`.
///
/// # Example
///
/// ```
/// assert_eq!(rocrate_ark::slug("SRA Experiment X"), "sra-experiment-x");
/// ```
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_hyphen = !out.is_empty();
            continue;
        }
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-') {
            if pending_hyphen {
                out.push('-');
                pending_hyphen = false;
            }
            out.push(ch);
        }
    }
    out
}
