//! The window of pickup dates offered to the user.

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::format::DateLabeler;

/// Number of pickup dates offered, today included.
pub const PICKUP_WINDOW_DAYS: usize = 7;

/// One offered pickup date with its preformatted display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupOption {
    pub date: NaiveDate,
    pub label: String,
}

/// The ordered list of pickup dates: the start date plus the six following
/// calendar days. Computed once; immutable afterwards, so index 0 keeps
/// meaning "same-day pickup" for the lifetime of the order screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupSchedule {
    options: Vec<PickupOption>,
}

impl PickupSchedule {
    /// Builds the schedule from today's date in the local time zone.
    pub fn from_today(labeler: &dyn DateLabeler) -> Self {
        Self::starting_on(Local::now().date_naive(), labeler)
    }

    /// Builds the schedule from an explicit start date.
    pub fn starting_on(
        start: NaiveDate,
        labeler: &dyn DateLabeler,
    ) -> Self {
        let options = (0..PICKUP_WINDOW_DAYS)
            .map(|offset| {
                let date = start + Days::new(offset as u64);
                PickupOption {
                    date,
                    label: labeler.label(date),
                }
            })
            .collect();
        Self { options }
    }

    pub fn options(&self) -> &[PickupOption] {
        &self.options
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|option| option.label.as_str())
    }

    pub fn label(
        &self,
        index: usize,
    ) -> Option<&str> {
        self.options.get(index).map(|option| option.label.as_str())
    }

    /// Label of the first option, i.e. same-day pickup. Both constructors
    /// always produce a full window, so this cannot be out of bounds.
    pub fn first_label(&self) -> &str {
        &self.options[0].label
    }

    pub fn contains_label(
        &self,
        label: &str,
    ) -> bool {
        self.options.iter().any(|option| option.label == label)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
