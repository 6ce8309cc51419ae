use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use crate::error::{PrayerError, PrayerResult};
use crate::logging::log_info;

/// The four canned test notifications the settings screen can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestTrigger {
    PrayerAlert,
    PreReminder,
    EzanSound,
    DailyVerse,
}

impl TestTrigger {
    pub const ALL: [TestTrigger; 4] = [
        TestTrigger::PrayerAlert,
        TestTrigger::PreReminder,
        TestTrigger::EzanSound,
        TestTrigger::DailyVerse,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TestTrigger::PrayerAlert => "Test prayer alert",
            TestTrigger::PreReminder => "Test pre-prayer reminder",
            TestTrigger::EzanSound => "Test ezan sound",
            TestTrigger::DailyVerse => "Test daily verse",
        }
    }
}

impl fmt::Display for TestTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TestTrigger {
    type Err = PrayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prayer" | "alert" => Ok(TestTrigger::PrayerAlert),
            "reminder" => Ok(TestTrigger::PreReminder),
            "ezan" | "adhan" => Ok(TestTrigger::EzanSound),
            "verse" => Ok(TestTrigger::DailyVerse),
            other => Err(PrayerError::InvalidInput(format!(
                "unknown test notification '{}' (expected prayer, reminder, ezan or verse)",
                other
            ))),
        }
    }
}

/// Delivers notifications. Scheduling and delivery live elsewhere; the app
/// only ever asks for test notifications.
pub trait Notifier: Send + Sync {
    fn send_test_notification(&self, title: &str, body: &str) -> PrayerResult<()>;
    fn trigger_test(&self, trigger: TestTrigger) -> PrayerResult<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentNotification {
    pub title: String,
    pub body: String,
}

/// Writes notifications to the log and remembers them.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier {
    sent: Arc<Mutex<Vec<SentNotification>>>,
}

impl LogNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }

    fn record(&self, title: &str, body: &str) -> PrayerResult<()> {
        log_info(&format!("Notification: {} - {}", title, body));
        self.sent
            .lock()
            .map_err(|_| PrayerError::Notification("notification log lock poisoned".to_string()))?
            .push(SentNotification {
                title: title.to_string(),
                body: body.to_string(),
            });
        Ok(())
    }
}

impl Notifier for LogNotifier {
    fn send_test_notification(&self, title: &str, body: &str) -> PrayerResult<()> {
        self.record(title, body)
    }

    fn trigger_test(&self, trigger: TestTrigger) -> PrayerResult<()> {
        let (title, body) = test_message(trigger);
        self.record(title, body)
    }
}

pub fn test_message(trigger: TestTrigger) -> (&'static str, &'static str) {
    match trigger {
        TestTrigger::PrayerAlert => ("Time for prayer", "This is how prayer-time alerts will look."),
        TestTrigger::PreReminder => ("Prayer in 15 minutes", "This is how early reminders will look."),
        TestTrigger::EzanSound => ("Ezan", "The ezan sound plays with prayer-time alerts."),
        TestTrigger::DailyVerse => ("Verse of the day", "A daily verse from your selected translation."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_notifier_records_every_trigger() {
        let notifier = LogNotifier::new();
        notifier.send_test_notification("Hello", "World").unwrap();
        for trigger in TestTrigger::ALL {
            notifier.trigger_test(trigger).unwrap();
        }

        let sent = notifier.sent();
        assert_eq!(sent.len(), 5);
        assert_eq!(sent[0].title, "Hello");
        assert_eq!(sent[4].title, "Verse of the day");
    }

    #[test]
    fn test_trigger_parsing() {
        assert_eq!("ezan".parse::<TestTrigger>().unwrap(), TestTrigger::EzanSound);
        assert_eq!("Reminder".parse::<TestTrigger>().unwrap(), TestTrigger::PreReminder);
        assert!("sms".parse::<TestTrigger>().is_err());
    }
}
