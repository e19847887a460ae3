//! Identifier derivation for transformed records

use crate::error::{Result, TransformError};
use rocrate_ark::{slug, NamingAuthority};

/// How a transform rule derives identifiers for the records it creates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierStrategy {
    /// Deterministic, reversible rename of the source identifier: the first
    /// occurrence of `from_segment` becomes `to_segment`. Used by 1:1
    /// transforms where the new record replaces its source.
    Rename {
        from_segment: String,
        to_segment: String,
    },
    /// Fresh identifier under the naming authority. Used by N:1 aggregation
    /// and for synthesized auxiliary records.
    Mint { kind_label: String },
}

impl IdentifierStrategy {
    pub fn rename(from_segment: impl Into<String>, to_segment: impl Into<String>) -> Self {
        IdentifierStrategy::Rename {
            from_segment: from_segment.into(),
            to_segment: to_segment.into(),
        }
    }

    pub fn mint(kind_label: impl Into<String>) -> Self {
        IdentifierStrategy::Mint {
            kind_label: kind_label.into(),
        }
    }

    /// Derive the identifier for a record replacing `old_id`, described by
    /// `display_name` (used only when minting).
    pub fn derive(
        &self,
        authority: &dyn NamingAuthority,
        old_id: &str,
        display_name: &str,
    ) -> Result<String> {
        match self {
            IdentifierStrategy::Rename {
                from_segment,
                to_segment,
            } => rename_id(old_id, from_segment, to_segment),
            IdentifierStrategy::Mint { kind_label } => {
                Ok(mint_id(authority, kind_label, display_name))
            }
        }
    }
}

/// Replace the first occurrence of `from_segment` in `id` with `to_segment`.
///
/// Errors when the segment is absent from the identifier.
pub fn rename_id(id: &str, from_segment: &str, to_segment: &str) -> Result<String> {
    if !id.contains(from_segment) {
        return Err(TransformError::MissingSegment {
            id: id.to_string(),
            segment: from_segment.to_string(),
        });
    }
    Ok(id.replacen(from_segment, to_segment, 1))
}

/// Mint `<prefix>/<kind>-<slug>-<suffix>` under the naming authority.
///
/// The slug comes from `display_name`; the suffix is fresh per call, so two
/// records with identical names still receive distinct identifiers.
pub fn mint_id(authority: &dyn NamingAuthority, kind_label: &str, display_name: &str) -> String {
    let slug = slug(display_name);
    let suffix = authority.next_suffix();
    if slug.is_empty() {
        format!("{}/{}-{}", authority.prefix(), kind_label, suffix)
    } else {
        format!("{}/{}-{}-{}", authority.prefix(), kind_label, slug, suffix)
    }
}

/// Last path segment of an identifier, used as a display fallback when the
/// referenced record has no name.
pub fn id_tail(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}
