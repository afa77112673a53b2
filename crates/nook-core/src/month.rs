//! Month arithmetic and month sets.
//!
//! Months are [`chrono::Month`] values. All shifting wraps around the year
//! boundary, so December plus one is January and January minus one is
//! December.

use std::fmt;

use chrono::Month;
use serde::{Deserialize, Serialize};

/// The twelve months in calendar order.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Zero-based position of a month in [`MONTHS`].
pub fn index_of(month: Month) -> usize {
    month.number_from_month() as usize - 1
}

/// Resolve any integer index onto the calendar, wrapping in both directions.
pub fn from_index(index: i64) -> Month {
    MONTHS[index.rem_euclid(12) as usize]
}

/// Move a month forwards (positive offset) or backwards (negative offset).
pub fn shift(month: Month, offset: i32) -> Month {
    from_index(index_of(month) as i64 + i64::from(offset))
}

/// Three-letter abbreviation, e.g. `"Mar"`.
pub fn abbrev(month: Month) -> &'static str {
    &month.name()[..3]
}

/// Parse a month from its abbreviation or full name (case-insensitive).
pub fn parse(s: &str) -> Option<Month> {
    let s = s.trim();
    MONTHS
        .iter()
        .copied()
        .find(|m| abbrev(*m).eq_ignore_ascii_case(s) || m.name().eq_ignore_ascii_case(s))
}

/// A set of months, stored as a twelve-bit mask.
///
/// Serialized as a list of abbreviations in calendar order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MonthSet(u16);

impl MonthSet {
    const ALL_BITS: u16 = (1 << 12) - 1;

    /// An empty set.
    pub fn new() -> Self {
        Self(0)
    }

    /// The set containing all twelve months.
    pub fn all_year() -> Self {
        Self(Self::ALL_BITS)
    }

    /// Add a month to the set.
    pub fn insert(&mut self, month: Month) {
        self.0 |= 1 << index_of(month);
    }

    /// Whether the month is in the set.
    pub fn contains(&self, month: Month) -> bool {
        self.0 & (1 << index_of(month)) != 0
    }

    /// Number of months in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// True if no month is in the set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// True if every month is in the set.
    pub fn is_all_year(&self) -> bool {
        self.0 == Self::ALL_BITS
    }

    /// Months in the set, in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = Month> + '_ {
        MONTHS.iter().copied().filter(|m| self.contains(*m))
    }
}

impl FromIterator<Month> for MonthSet {
    fn from_iter<I: IntoIterator<Item = Month>>(iter: I) -> Self {
        let mut set = Self::new();
        for month in iter {
            set.insert(month);
        }
        set
    }
}

impl TryFrom<Vec<String>> for MonthSet {
    type Error = String;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        names
            .iter()
            .map(|name| parse(name).ok_or_else(|| format!("unknown month \"{name}\"")))
            .collect()
    }
}

impl From<MonthSet> for Vec<String> {
    fn from(set: MonthSet) -> Self {
        set.iter().map(|m| abbrev(m).to_string()).collect()
    }
}

impl fmt::Display for MonthSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all_year() {
            return write!(f, "All year");
        }
        let names: Vec<&str> = self.iter().map(abbrev).collect();
        write!(f, "{}", names.join(", "))
    }
}
