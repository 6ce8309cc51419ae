use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PrayerError;

/// The six daily entries, in the order they are always displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrayerName {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    pub const ALL: [PrayerName; 6] = [
        PrayerName::Fajr,
        PrayerName::Sunrise,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Sunrise => "Sunrise",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }
}

impl fmt::Display for PrayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrayerName {
    type Err = PrayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PrayerName::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                PrayerError::InvalidInput(format!(
                    "unknown prayer '{}' (expected one of fajr, sunrise, dhuhr, asr, maghrib, isha)",
                    wanted
                ))
            })
    }
}

/// Formatted times for one day, as handed over by whatever computes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrayerTimes {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

impl PrayerTimes {
    pub fn get(&self, prayer: PrayerName) -> &str {
        match prayer {
            PrayerName::Fajr => &self.fajr,
            PrayerName::Sunrise => &self.sunrise,
            PrayerName::Dhuhr => &self.dhuhr,
            PrayerName::Asr => &self.asr,
            PrayerName::Maghrib => &self.maghrib,
            PrayerName::Isha => &self.isha,
        }
    }

    /// Placeholder used when no schedule was supplied.
    pub fn unknown() -> Self {
        let blank = || "--:--".to_string();
        Self {
            fajr: blank(),
            sunrise: blank(),
            dhuhr: blank(),
            asr: blank(),
            maghrib: blank(),
            isha: blank(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prayer_name_case_insensitive() {
        assert_eq!("isha".parse::<PrayerName>().unwrap(), PrayerName::Isha);
        assert_eq!(" MAGHRIB ".parse::<PrayerName>().unwrap(), PrayerName::Maghrib);
        assert!("witr".parse::<PrayerName>().is_err());
    }

    #[test]
    fn test_prayer_times_from_json() {
        let json = r#"{"Fajr":"05:12","Sunrise":"06:40","Dhuhr":"12:58","Asr":"16:15","Maghrib":"19:08","Isha":"20:31"}"#;
        let times: PrayerTimes = serde_json::from_str(json).unwrap();
        assert_eq!(times.get(PrayerName::Fajr), "05:12");
        assert_eq!(times.get(PrayerName::Isha), "20:31");
    }
}
