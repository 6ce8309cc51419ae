use crate::catalog::{prayer_icon, prayer_label};
use crate::models::{PrayerName, PrayerTimes};

/// One entry of the prayer card.
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerRow {
    pub prayer: PrayerName,
    pub icon: &'static str,
    pub label: &'static str,
    pub time: String,
    pub is_current: bool,
    pub is_next: bool,
}

/// Everything the prayer card shows. Which prayer is current or next, the
/// date and the countdown all come from the caller; nothing is computed here.
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerDisplay {
    pub rows: Vec<PrayerRow>,
    pub date: Option<String>,
    pub countdown: Option<String>,
}

impl PrayerDisplay {
    pub fn next_row(&self) -> Option<&PrayerRow> {
        self.rows.iter().find(|row| row.is_next)
    }

    pub fn current_row(&self) -> Option<&PrayerRow> {
        self.rows.iter().find(|row| row.is_current)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DisplayInput {
    pub current: Option<PrayerName>,
    pub next: Option<PrayerName>,
    pub date: Option<String>,
    pub countdown: Option<String>,
}

pub fn build_display(times: &PrayerTimes, input: &DisplayInput, language: &str) -> PrayerDisplay {
    let rows = PrayerName::ALL
        .iter()
        .map(|&prayer| PrayerRow {
            prayer,
            icon: prayer_icon(prayer),
            label: prayer_label(prayer, language),
            time: times.get(prayer).to_string(),
            is_current: input.current == Some(prayer),
            is_next: input.next == Some(prayer),
        })
        .collect();

    PrayerDisplay {
        rows,
        date: input.date.clone(),
        countdown: input.countdown.clone(),
    }
}
