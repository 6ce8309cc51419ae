use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::app::{ConfirmAction, InteractiveApp, Popup};
use crate::interactive::layout::centered_popup;

/// Draw a small confirmation or acknowledgement dialog.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let (title, message, border, acknowledge) = match &app.popup {
        Some(Popup::Confirmation(ConfirmAction::ResetSettings)) => {
            (" Confirm ", "Reset all settings to defaults?".to_string(), Color::Red, false)
        }
        Some(Popup::Acknowledge(message)) => (" Notification ", message.clone(), Color::Green, true),
        _ => return,
    };

    let width: u16 = (message.chars().count() as u16 + 6).clamp(40, 70);
    let height: u16 = 5;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    // Message line
    let message_area = Rect::new(inner.x, inner.y, inner.width, 1);
    let message_widget = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(message_widget, message_area);

    let options_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let options_line = if acknowledge {
        Line::from(vec![
            Span::styled("[", Style::default().fg(Color::DarkGray)),
            Span::styled("Enter", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::styled("] OK", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        // [Y]es  [N]o
        Line::from(vec![
            Span::styled("[", Style::default().fg(Color::DarkGray)),
            Span::styled("Y", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::styled("]es  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[", Style::default().fg(Color::DarkGray)),
            Span::styled("N", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled("]o", Style::default().fg(Color::DarkGray)),
        ])
    };
    frame.render_widget(Paragraph::new(options_line), options_area);
}
