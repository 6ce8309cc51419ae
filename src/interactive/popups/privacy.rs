use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::PRIVACY_POLICY;
use crate::interactive::app::InteractiveApp;
use crate::interactive::layout::centered_popup;
use crate::interactive::palette::{color, Palette};

/// Scrollable modal with the bundled privacy policy.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp, palette: &Palette) {
    let width = area.width.saturating_sub(8).min(76);
    let height = area.height.saturating_sub(4).min(26);
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Privacy Policy ")
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(color(palette.card)));

    let lines: Vec<Line> = PRIVACY_POLICY.lines().map(Line::from).collect();
    let max_scroll = (lines.len() as u16).saturating_sub(height.saturating_sub(2));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(color(palette.text)))
        .wrap(Wrap { trim: false })
        .scroll((app.privacy_scroll.min(max_scroll), 0));
    frame.render_widget(paragraph, popup_area);
}
