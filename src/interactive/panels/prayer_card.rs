use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::catalog::Rgb;
use crate::display::{PrayerDisplay, PrayerRow};
use crate::interactive::layout::card_area;
use crate::interactive::palette::{color, Palette};

/// Draw the horizontal prayer card: six columns, the next prayer highlighted.
pub fn draw(frame: &mut Frame, area: Rect, display: &PrayerDisplay, palette: &Palette) {
    let card = card_area(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color(palette.border)))
        .style(Style::default().bg(color(palette.card)));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // date
            Constraint::Length(1),
            Constraint::Length(4), // prayers
            Constraint::Min(1),    // countdown
        ])
        .split(inner);

    if let Some(date) = &display.date {
        let date_line = Paragraph::new(Line::from(Span::styled(
            date.clone(),
            Style::default().fg(color(palette.text)).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(date_line, rows[0]);
    }

    let count = display.rows.len().max(1) as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            display
                .rows
                .iter()
                .map(|_| Constraint::Ratio(1, count))
                .collect::<Vec<_>>(),
        )
        .split(rows[2]);

    for (row, column) in display.rows.iter().zip(columns.iter()) {
        frame.render_widget(prayer_column(row, palette), *column);
    }

    if let Some(countdown) = &display.countdown {
        let text = match display.next_row() {
            Some(next) => format!("{} {} in {}", next.icon, next.label, countdown),
            None => countdown.clone(),
        };
        let countdown_line = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(color(palette.accent)),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(countdown_line, rows[3]);
    }
}

fn prayer_column<'a>(row: &'a PrayerRow, palette: &Palette) -> Paragraph<'a> {
    let (fg, bg, marker) = if row.is_next {
        (Rgb(20, 20, 24), Some(palette.accent), "next")
    } else if row.is_current {
        (palette.accent, None, "now")
    } else {
        (palette.text, None, "")
    };

    let mut style = Style::default().fg(color(fg));
    if let Some(bg) = bg {
        style = style.bg(color(bg)).add_modifier(Modifier::BOLD);
    }
    let muted = if row.is_next { style } else { Style::default().fg(color(palette.muted)) };

    Paragraph::new(vec![
        Line::from(Span::styled(row.icon, style)),
        Line::from(Span::styled(row.label, style)),
        Line::from(Span::styled(row.time.as_str(), style.add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(marker, muted)),
    ])
    .style(style)
    .alignment(Alignment::Center)
}
