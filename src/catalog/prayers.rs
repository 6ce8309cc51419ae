use crate::models::PrayerName;

/// Languages with their own prayer labels. Anything else falls back to English.
pub const LANGUAGES: [(&str, &str); 3] = [("en", "English"), ("tr", "Türkçe"), ("ar", "العربية")];

pub fn prayer_icon(prayer: PrayerName) -> &'static str {
    match prayer {
        PrayerName::Fajr => "◐",
        PrayerName::Sunrise => "☀",
        PrayerName::Dhuhr => "◉",
        PrayerName::Asr => "◑",
        PrayerName::Maghrib => "◒",
        PrayerName::Isha => "☾",
    }
}

pub fn prayer_label(prayer: PrayerName, language: &str) -> &'static str {
    match language {
        "tr" => match prayer {
            PrayerName::Fajr => "İmsak",
            PrayerName::Sunrise => "Güneş",
            PrayerName::Dhuhr => "Öğle",
            PrayerName::Asr => "İkindi",
            PrayerName::Maghrib => "Akşam",
            PrayerName::Isha => "Yatsı",
        },
        "ar" => match prayer {
            PrayerName::Fajr => "الفجر",
            PrayerName::Sunrise => "الشروق",
            PrayerName::Dhuhr => "الظهر",
            PrayerName::Asr => "العصر",
            PrayerName::Maghrib => "المغرب",
            PrayerName::Isha => "العشاء",
        },
        _ => prayer.as_str(),
    }
}

pub fn language_label(code: &str) -> &str {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_fall_back_to_english() {
        assert_eq!(prayer_label(PrayerName::Dhuhr, "tr"), "Öğle");
        assert_eq!(prayer_label(PrayerName::Dhuhr, "xx"), "Dhuhr");
        assert_eq!(language_label("tr"), "Türkçe");
        assert_eq!(language_label("fr"), "fr");
    }
}
