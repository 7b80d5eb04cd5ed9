//! Location-implied flag rules
//!
//! Some locations imply a flag state: an item at school must be remembered,
//! an item in transit is being taken today. The rules only ever force a flag
//! on; leaving School or InTransit does not clear anything, and a manual
//! toggle made earlier is re-asserted by the next qualifying move.

use super::item::Flags;
use super::location::Location;

/// Apply the location rules to `flags` for an item now at `location`
///
/// Pure and idempotent: `derive_flags(derive_flags(f, l), l) == derive_flags(f, l)`.
pub fn derive_flags(flags: Flags, location: Location) -> Flags {
    let mut derived = flags;
    if location == Location::School {
        derived.reminder = true;
    }
    if location == Location::InTransit {
        derived.for_today = true;
    }
    derived
}
