pub mod background_picker;
pub mod confirm;
pub mod help;
pub mod picker;
pub mod privacy;

use ratatui::{Frame, layout::Rect};
use crate::interactive::app::{InteractiveApp, Popup};
use crate::interactive::palette::Palette;

/// Draw the active popup, if any. Draws on top of everything.
pub fn draw_popup(frame: &mut Frame, area: Rect, app: &InteractiveApp, palette: &Palette) {
    let Some(popup) = &app.popup else { return };

    match popup {
        Popup::BackgroundPicker => background_picker::draw(frame, area, app),
        Popup::MethodPicker | Popup::LanguagePicker | Popup::TranslationPicker => {
            picker::draw(frame, area, app)
        }
        Popup::Confirmation(_) | Popup::Acknowledge(_) => confirm::draw(frame, area, app),
        Popup::PrivacyPolicy => privacy::draw(frame, area, app, palette),
        Popup::Help => help::draw(frame, area, app),
    }
}
