use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::catalog::{CALCULATION_METHODS, LANGUAGES, TRANSLATIONS};
use crate::formatting::truncate;
use crate::interactive::app::{InteractiveApp, Popup};
use crate::interactive::layout::centered_popup;

/// Draw the list picker for calculation method, language or translation.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let Some(popup) = &app.popup else { return };
    let settings = app.store.settings();

    // (label, is the stored value)
    let (title, options): (&str, Vec<(String, bool)>) = match popup {
        Popup::MethodPicker => (
            "Calculation Method",
            CALCULATION_METHODS
                .iter()
                .map(|m| (format!("{:>2}  {}", m.id, m.name), m.id == settings.calculation_method))
                .collect(),
        ),
        Popup::LanguagePicker => (
            "Language",
            LANGUAGES
                .iter()
                .map(|(code, name)| (format!("{}  {}", code, name), *code == settings.language))
                .collect(),
        ),
        Popup::TranslationPicker => (
            "Translation",
            TRANSLATIONS
                .iter()
                .map(|t| (format!("{} ({})", t.name, t.language), t.id == settings.selected_translation))
                .collect(),
        ),
        _ => return,
    };
    let hints = "\u{2191}/\u{2193} Navigate  Enter: Select  Esc: Cancel";

    let width: u16 = 56;
    let height: u16 = (options.len() as u16 + 4).min(20);
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    // Reserve 1 line for hints
    let max_visible = inner.height.saturating_sub(1) as usize;

    // Keep picker_index visible
    let scroll_offset = if app.picker_index >= max_visible {
        app.picker_index - max_visible + 1
    } else {
        0
    };

    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(max_visible)
        .map(|(i, (name, current))| {
            let mark = if *current { "\u{2713}" } else { " " };
            let display = truncate(name, (width - 7) as usize);
            let style = if i == app.picker_index {
                Style::default()
                    .fg(Color::Rgb(0, 0, 0))
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if *current {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(format!(" {} {} ", mark, display), style)))
        })
        .collect();

    let list_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    frame.render_widget(List::new(items), list_area);

    // Hints at the bottom
    let hints_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let hints_widget = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hints_widget, hints_area);
}
