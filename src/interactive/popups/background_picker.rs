use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::catalog::{Rgb, BACKGROUND_IMAGES, SOLID_COLORS};
use crate::formatting::truncate;
use crate::interactive::app::{InteractiveApp, PickerTab};
use crate::interactive::keys::PICKER_COLUMNS;
use crate::interactive::layout::centered_popup;
use crate::interactive::palette::color;

const CELL_HEIGHT: u16 = 3;

struct Cell {
    id: &'static str,
    name: &'static str,
    rgb: Rgb,
}

fn cells(tab: PickerTab) -> Vec<Cell> {
    match tab {
        PickerTab::Images => BACKGROUND_IMAGES
            .iter()
            .map(|image| Cell { id: image.id, name: image.name, rgb: image.accent_rgb() })
            .collect(),
        PickerTab::Colors => SOLID_COLORS
            .iter()
            .map(|c| Cell { id: c.id, name: c.name, rgb: c.rgb() })
            .collect(),
    }
}

/// Draw the background picker: two tabs over the image and color catalogs,
/// laid out as a grid of swatches.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let cells = cells(app.picker_tab);
    let grid_rows = cells.len().div_ceil(PICKER_COLUMNS) as u16;

    let width: u16 = 72;
    let height: u16 = grid_rows * CELL_HEIGHT + 5;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Background ")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    // Tabs
    let tab_style = |tab: PickerTab| {
        if tab == app.picker_tab {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };
    let tabs = Paragraph::new(Line::from(vec![
        Span::styled(" Images ", tab_style(PickerTab::Images)),
        Span::raw("  "),
        Span::styled(" Colors ", tab_style(PickerTab::Colors)),
    ]));
    frame.render_widget(tabs, Rect::new(inner.x, inner.y, inner.width, 1));

    let background = app.store.background();
    let active_id = match app.picker_tab {
        PickerTab::Images => background.image_id(),
        PickerTab::Colors => background.color_id(),
    };

    let cell_width = inner.width / PICKER_COLUMNS as u16;
    let grid_top = inner.y + 2;
    let grid_bottom = inner.y + inner.height.saturating_sub(1);

    for (i, cell) in cells.iter().enumerate() {
        let col = (i % PICKER_COLUMNS) as u16;
        let row = (i / PICKER_COLUMNS) as u16;
        let y = grid_top + row * CELL_HEIGHT;
        if y + CELL_HEIGHT > grid_bottom {
            break;
        }
        let cell_area = Rect::new(inner.x + col * cell_width, y, cell_width, CELL_HEIGHT);

        let highlighted = i == app.picker_index;
        let active = active_id == Some(cell.id);

        let swatch_width = cell_width.saturating_sub(2) as usize;
        let label = format!("{}{}", if active { "\u{2713} " } else { "" }, cell.name);
        let label_style = if highlighted {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else if active {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };

        let swatch = Style::default().bg(color(cell.rgb));
        let widget = Paragraph::new(vec![
            Line::from(Span::styled(" ".repeat(swatch_width), swatch)),
            Line::from(Span::styled(" ".repeat(swatch_width), swatch)),
            Line::from(Span::styled(truncate(&label, swatch_width), label_style)),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(widget, cell_area);
    }

    let hints = Paragraph::new(Line::from(Span::styled(
        "\u{2190}\u{2191}\u{2193}\u{2192} Move  Tab: Images/Colors  Enter: Apply  Esc: Close",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hints, Rect::new(inner.x, grid_bottom, inner.width, 1));
}
