use clap::ArgMatches;
use colored::*;

use super::CommandResult;
use crate::cli_context::AppContext;
use crate::error::PrayerResult;
use crate::logging::log_error;
use crate::notifications::{test_message, Notifier, TestTrigger};

pub async fn handle_notify(matches: &ArgMatches, ctx: &mut AppContext) -> CommandResult {
    let kind = matches.get_one::<String>("kind").map(|s| s.as_str()).unwrap_or("send");
    let notifier = ctx.notifier();

    if !ctx.store().notifications() {
        println!(
            "{}",
            "Notifications are turned off; sending the test anyway.".yellow()
        );
    }

    let title = send_test(notifier.as_ref(), kind)?;
    println!("{} Sent \"{}\"", "✅".green(), title.bold());
    Ok(())
}

/// Fire one test notification and return the title to acknowledge.
///
/// Only an unknown `kind` is an error. A notifier failure is logged and the
/// test is acknowledged anyway.
pub fn send_test(notifier: &dyn Notifier, kind: &str) -> PrayerResult<&'static str> {
    let (title, result) = match kind {
        "send" => (
            "Test notification",
            notifier.send_test_notification("Test notification", "Notifications are working."),
        ),
        other => {
            let trigger: TestTrigger = other.parse()?;
            (test_message(trigger).0, notifier.trigger_test(trigger))
        }
    };

    if let Err(e) = result {
        log_error(&format!("Test notification '{}' failed: {}", title, e));
    }
    Ok(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrayerError;
    use crate::notifications::LogNotifier;

    struct UnavailableNotifier;

    impl Notifier for UnavailableNotifier {
        fn send_test_notification(&self, _title: &str, _body: &str) -> PrayerResult<()> {
            Err(PrayerError::Notification("no notification daemon".to_string()))
        }

        fn trigger_test(&self, _trigger: TestTrigger) -> PrayerResult<()> {
            Err(PrayerError::Notification("no notification daemon".to_string()))
        }
    }

    #[test]
    fn test_send_test_acknowledges_when_notifier_fails() {
        assert_eq!(send_test(&UnavailableNotifier, "send").unwrap(), "Test notification");
        assert_eq!(
            send_test(&UnavailableNotifier, "ezan").unwrap(),
            test_message(TestTrigger::EzanSound).0
        );
    }

    #[test]
    fn test_send_test_delivers_and_rejects_unknown_kind() {
        let notifier = LogNotifier::new();
        send_test(&notifier, "verse").unwrap();
        assert_eq!(notifier.sent().len(), 1);
        assert_eq!(notifier.sent()[0].title, test_message(TestTrigger::DailyVerse).0);

        assert!(send_test(&notifier, "sms").is_err());
        assert_eq!(notifier.sent().len(), 1);
    }
}
