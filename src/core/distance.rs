//! Path distances with an explicit "unreached" marker.
//!
//! Finite distances are signed integers because edge weights may be negative.
//! `Unreached` orders after every finite value, so `candidate < current`
//! comparisons work without a floating-point infinity.

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// Rendering of an unreached distance in traces and CLI output.
pub const UNREACHED: &str = "∞";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distance {
    Finite(i64),
    Unreached,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn value(&self) -> Option<i64> {
        match self {
            Distance::Finite(value) => Some(*value),
            Distance::Unreached => None,
        }
    }

    /// Extends a finite distance by an edge weight.
    ///
    /// Returns `Some(Unreached)` for an unreached base and `None` on i64 overflow.
    pub fn checked_add(self, weight: i64) -> Option<Distance> {
        match self {
            Distance::Finite(value) => value.checked_add(weight).map(Distance::Finite),
            Distance::Unreached => Some(Distance::Unreached),
        }
    }
}

impl From<i64> for Distance {
    fn from(value: i64) -> Self {
        Distance::Finite(value)
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.cmp(b),
            (Distance::Finite(_), Distance::Unreached) => Ordering::Less,
            (Distance::Unreached, Distance::Finite(_)) => Ordering::Greater,
            (Distance::Unreached, Distance::Unreached) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{value}"),
            Distance::Unreached => f.write_str(UNREACHED),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(value) => serializer.serialize_i64(*value),
            Distance::Unreached => serializer.serialize_str(UNREACHED),
        }
    }
}
