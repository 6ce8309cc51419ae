use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout regions
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub notifications: Rect,
    pub footer: Rect,
}

/// Calculate the top-level layout
pub fn app_layout(area: Rect, notification_count: usize) -> AppLayout {
    let notif_height = if notification_count > 0 {
        (notification_count as u16).min(3) + 2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(notif_height),
            Constraint::Length(1),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        notifications: chunks[2],
        footer: chunks[3],
    }
}

/// Height of the prayer card: borders, date line, icon/label/time/marker
/// rows and the countdown line.
pub const CARD_HEIGHT: u16 = 9;

/// Place the prayer card in the middle of the home screen, at most 90
/// columns wide.
pub fn card_area(area: Rect) -> Rect {
    let width = area.width.min(90);
    let height = CARD_HEIGHT.min(area.height);
    centered_popup(width, height, area)
}

/// Center a popup of given width/height in the area
pub fn centered_popup(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(40, 10, area);
        assert_eq!(popup, Rect::new(30, 15, 40, 10));

        let tiny = Rect::new(0, 0, 20, 5);
        let popup = centered_popup(40, 10, tiny);
        assert_eq!(popup, Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_card_area_is_capped() {
        let area = Rect::new(0, 0, 200, 50);
        let card = card_area(area);
        assert_eq!(card.width, 90);
        assert_eq!(card.height, CARD_HEIGHT);
    }
}
