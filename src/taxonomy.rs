//! Parsing for the `"<sash>-<part>"` image assignment grammar.
//!
//! Catalog images are tagged with strings such as `"two-sash-frame"` or
//! `"one-half-sash-door"`. Both parsers are pure and total: a string outside
//! the grammar yields `None`, never an error, and the image is simply excluded
//! from slot resolution.

use crate::config::{PartSlot, SashPrefix};

/// Extract the sash-size compatibility key from an assignment string.
///
/// Matches the fixed prefix grammar `^(one|one-half|two|three|four)-sash`.
/// `one-half` is tried before `one` so the longer prefix wins.
pub fn parse_sash_prefix(assignment: &str) -> Option<SashPrefix> {
    // Longest literal first: "one-half-sash" must not parse as One.
    const PREFIXES: [(&str, SashPrefix); 5] = [
        ("one-half-sash", SashPrefix::OneHalf),
        ("one-sash", SashPrefix::One),
        ("two-sash", SashPrefix::Two),
        ("three-sash", SashPrefix::Three),
        ("four-sash", SashPrefix::Four),
    ];

    PREFIXES
        .iter()
        .find(|(lit, _)| assignment.starts_with(lit))
        .map(|&(_, prefix)| prefix)
}

/// Map an assignment string's suffix to a part slot.
///
/// Suffixes are matched specific-before-general: `-up-frame` and
/// `-under-frame` are claimed before the bare `-frame` pattern gets a look.
pub fn parse_part_slot(assignment: &str) -> Option<PartSlot> {
    if assignment.ends_with("-up-frame") {
        return Some(PartSlot::UpFrame);
    }
    if assignment.ends_with("-under-frame") {
        return Some(PartSlot::UnderFrame);
    }
    if assignment.ends_with("-frame") {
        return Some(PartSlot::Frame);
    }
    if assignment.ends_with("-door") {
        return Some(PartSlot::Door);
    }
    if assignment.ends_with("-crown") {
        return Some(PartSlot::Crown);
    }
    if assignment.ends_with("-transom") {
        return Some(PartSlot::Transom);
    }
    if assignment.ends_with("-trim") {
        return Some(PartSlot::Trim);
    }
    None
}

#[cfg(test)]
#[path = "../tests/unit/taxonomy.rs"]
mod tests;
