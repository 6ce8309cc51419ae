use std::sync::Arc;

use ratatui::{backend::TestBackend, Terminal};

use crate::display::{build_display, DisplayInput};
use crate::interactive::app::{InteractiveApp, Popup, Screen};
use crate::interactive::ui;
use crate::models::{PrayerName, PrayerTimes};
use crate::notifications::LogNotifier;
use crate::store::SettingsStore;

fn sample_times() -> PrayerTimes {
    serde_json::from_str(
        r#"{"Fajr":"05:12","Sunrise":"06:40","Dhuhr":"12:58","Asr":"16:21","Maghrib":"19:05","Isha":"20:28"}"#,
    )
    .unwrap()
}

fn render(app: &InteractiveApp) -> String {
    let backend = TestBackend::new(100, 32);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_exactly_one_next_row() {
    let input = DisplayInput {
        current: Some(PrayerName::Asr),
        next: Some(PrayerName::Maghrib),
        ..Default::default()
    };
    let display = build_display(&sample_times(), &input, "en");

    let next: Vec<_> = display.rows.iter().filter(|r| r.is_next).collect();
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].prayer, PrayerName::Maghrib);
    assert_eq!(display.current_row().map(|r| r.prayer), Some(PrayerName::Asr));
}

#[test]
fn test_no_next_row_without_input() {
    let display = build_display(&sample_times(), &DisplayInput::default(), "en");
    assert!(display.rows.iter().all(|r| !r.is_next && !r.is_current));
    assert!(display.next_row().is_none());
}

#[test]
fn test_rows_in_fixed_order() {
    let display = build_display(&sample_times(), &DisplayInput::default(), "en");
    let order: Vec<PrayerName> = display.rows.iter().map(|r| r.prayer).collect();
    assert_eq!(order, PrayerName::ALL.to_vec());
    assert_eq!(display.rows[2].time, "12:58");
    assert_eq!(display.rows[4].label, "Maghrib");
}

#[test]
fn test_labels_follow_language() {
    let display = build_display(&sample_times(), &DisplayInput::default(), "tr");
    assert_eq!(display.rows[0].label, "İmsak");
    // Unknown language falls back to English
    let display = build_display(&sample_times(), &DisplayInput::default(), "xx");
    assert_eq!(display.rows[0].label, "Fajr");
}

#[test]
fn test_home_screen_renders_times() {
    let input = DisplayInput {
        next: Some(PrayerName::Isha),
        countdown: Some("01:23:45".to_string()),
        ..Default::default()
    };
    let app = InteractiveApp::new(
        SettingsStore::new(),
        Arc::new(LogNotifier::new()),
        Some(sample_times()),
        input,
    );

    let screen = render(&app);
    assert!(screen.contains("Fajr"));
    assert!(screen.contains("20:28"));
    assert!(screen.contains("01:23:45"));
}

#[test]
fn test_settings_screen_and_popups_render() {
    let mut app = InteractiveApp::new(
        SettingsStore::new(),
        Arc::new(LogNotifier::new()),
        None,
        DisplayInput::default(),
    );
    app.screen = Screen::Settings;
    let screen = render(&app);
    assert!(screen.contains(" Settings "));
    assert!(screen.contains("LOCATION"));

    app.open_background_picker();
    let screen = render(&app);
    assert!(screen.contains("Images"));
    assert!(screen.contains("Colors"));

    app.popup = Some(Popup::PrivacyPolicy);
    let screen = render(&app);
    assert!(screen.contains("Privacy Policy"));

    app.popup = Some(Popup::Help);
    assert!(render(&app).contains("Keyboard Shortcuts"));
}
