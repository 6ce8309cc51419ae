use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::app::{InteractiveApp, Popup, Screen, SettingsRow};
use super::layout::app_layout;
use super::palette::{color, Palette};
use super::{notifications, panels, popups};

pub fn draw(frame: &mut Frame, app: &InteractiveApp) {
    let area = frame.size();
    let palette = Palette::for_settings(app.store.settings());

    // Backdrop behind everything
    frame.render_widget(
        Block::default().style(Style::default().bg(color(palette.background))),
        area,
    );

    let layout = app_layout(area, app.visible_notifications());

    panels::header::draw_header(frame, layout.header, app, &palette);

    match app.screen {
        Screen::Home => panels::prayer_card::draw(frame, layout.main, &app.display(), &palette),
        Screen::Settings => panels::settings::draw(frame, layout.main, app, &palette),
    }

    notifications::draw(frame, layout.notifications, app);
    draw_footer(frame, layout.footer, app, &palette);

    // Draw overlays on top of everything
    popups::draw_popup(frame, area, app, &palette);
}

fn footer_hints(app: &InteractiveApp) -> &'static str {
    match &app.popup {
        Some(Popup::BackgroundPicker) => "[←↑↓→] Move  [Tab] Images/Colors  [Enter] Apply  [Esc] Close",
        Some(Popup::Confirmation(_)) => "[y] Yes  [n] No",
        Some(Popup::Acknowledge(_)) => "[Enter] OK",
        Some(Popup::PrivacyPolicy) => "[j/k] Scroll  [Esc] Close",
        Some(Popup::Help) => "[Esc] Close",
        Some(_) => "[j/k] Move  [Enter] Select  [Esc] Cancel",
        None => match app.screen {
            Screen::Home => "[Tab] Settings  [b] Background  [?] Help  [q] Quit",
            Screen::Settings => match app.selected_row() {
                SettingsRow::BackgroundOpacity | SettingsRow::CardOpacity => {
                    "[j/k] Move  [←/→] Adjust  [Esc] Home  [q] Quit"
                }
                SettingsRow::Theme => "[j/k] Move  [←/→] Choose  [Esc] Home  [q] Quit",
                _ => "[j/k] Move  [Enter] Select  [b] Background  [Esc] Home  [q] Quit",
            },
        },
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &InteractiveApp, palette: &Palette) {
    let footer = Paragraph::new(Line::from(Span::styled(
        format!(" {}", footer_hints(app)),
        Style::default().fg(color(palette.muted)).add_modifier(Modifier::DIM),
    )))
    .style(Style::default().bg(color(palette.background)));
    frame.render_widget(footer, area);
}
