//! The seasonal window: which creatures arrive, stay, and leave around a month.
//!
//! A window is anchored on a "current" month and looks one month either side.
//! Every creature available in the current month is either *new* (it was not
//! available the month before) or *recurring* (it was). Independently, it is
//! *leaving* if it will not be available the month after.

use std::fmt;

use chrono::Month;

use crate::category::Category;
use crate::creature::Creature;
use crate::dataset::Dataset;
use crate::hemisphere::Hemisphere;
use crate::month;

/// Which month a window is anchored on, relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowView {
    /// Anchored on last month.
    Previous,
    /// Anchored on this month.
    This,
    /// Anchored on next month.
    Next,
}

impl WindowView {
    /// Offset in months from the current month.
    pub fn offset(&self) -> i32 {
        match self {
            Self::Previous => -1,
            Self::This => 0,
            Self::Next => 1,
        }
    }
}

impl fmt::Display for WindowView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Previous => write!(f, "previous month"),
            Self::This => write!(f, "this month"),
            Self::Next => write!(f, "next month"),
        }
    }
}

/// Creatures of one category classified around an anchor month.
#[derive(Debug, Clone)]
pub struct SeasonalWindow<'d> {
    /// The category of the dataset.
    pub category: Category,
    /// The hemisphere whose month lists were used.
    pub hemisphere: Hemisphere,
    /// The month before the anchor.
    pub previous: Month,
    /// The anchor month.
    pub current: Month,
    /// The month after the anchor.
    pub next: Month,
    /// Available now and already available in the previous month.
    pub recurring: Vec<&'d Creature>,
    /// Available now but not in the previous month.
    pub new: Vec<&'d Creature>,
    /// Available now but not in the next month.
    pub leaving: Vec<&'d Creature>,
}

impl<'d> SeasonalWindow<'d> {
    /// Classify every creature in `dataset` around the `current` month.
    pub fn compute(dataset: &'d Dataset, hemisphere: Hemisphere, current: Month) -> Self {
        let previous = month::shift(current, -1);
        let next = month::shift(current, 1);

        let mut recurring = Vec::new();
        let mut new = Vec::new();
        let mut leaving = Vec::new();

        for creature in dataset.available_in(hemisphere, current) {
            let months = creature.months(hemisphere);
            if months.contains(previous) {
                recurring.push(creature);
            } else {
                new.push(creature);
            }
            if !months.contains(next) {
                leaving.push(creature);
            }
        }

        Self {
            category: dataset.category(),
            hemisphere,
            previous,
            current,
            next,
            recurring,
            new,
            leaving,
        }
    }

    /// Every creature available in the current month, ordered by key.
    pub fn available(&self) -> Vec<&'d Creature> {
        let mut all: Vec<&'d Creature> = self.recurring.iter().chain(&self.new).copied().collect();
        all.sort_by_key(|c| c.key());
        all
    }
}
