use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::interactive::app::{Popup, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    SwitchScreen,

    // Settings rows
    Activate,
    Decrease,
    Increase,
    OpenBackgroundPicker,

    // Popups
    Confirm,
    Cancel,
    PickerUp,
    PickerDown,
    PickerLeft,
    PickerRight,
    PickerConfirm,
    PickerCancel,
    PickerSwitchTab,
    ScrollUp,
    ScrollDown,

    // General
    Help,
    Quit,
    DismissNotification,

    None,
}

/// Background picker grid width, in cells.
pub const PICKER_COLUMNS: usize = 4;

pub fn map_key(key: KeyEvent, screen: Screen, popup: &Option<Popup>) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if let Some(popup) = popup {
        return map_popup_key(key, popup);
    }
    match screen {
        Screen::Home => map_home_key(key),
        Screen::Settings => map_settings_key(key),
    }
}

fn map_home_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Tab | KeyCode::Char('s') => Action::SwitchScreen,
        KeyCode::Char('b') => Action::OpenBackgroundPicker,
        KeyCode::Char('x') => Action::DismissNotification,
        KeyCode::Char('?') => Action::Help,
        _ => Action::None,
    }
}

fn map_settings_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc | KeyCode::Tab => Action::SwitchScreen,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('-') => Action::Decrease,
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('+') => Action::Increase,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Activate,
        KeyCode::Char('b') => Action::OpenBackgroundPicker,
        KeyCode::Char('x') => Action::DismissNotification,
        KeyCode::Char('?') => Action::Help,
        _ => Action::None,
    }
}

fn map_popup_key(key: KeyEvent, popup: &Popup) -> Action {
    match popup {
        Popup::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::Cancel,
            _ => Action::None,
        },
        Popup::Confirmation(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Action::Confirm,
            KeyCode::Char('n') | KeyCode::Esc => Action::Cancel,
            _ => Action::None,
        },
        Popup::Acknowledge(_) => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q') => Action::Confirm,
            _ => Action::None,
        },
        Popup::PrivacyPolicy => match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Action::Cancel,
            _ => Action::None,
        },
        Popup::BackgroundPicker => match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::PickerDown,
            KeyCode::Char('k') | KeyCode::Up => Action::PickerUp,
            KeyCode::Char('h') | KeyCode::Left => Action::PickerLeft,
            KeyCode::Char('l') | KeyCode::Right => Action::PickerRight,
            KeyCode::Tab | KeyCode::BackTab => Action::PickerSwitchTab,
            KeyCode::Enter | KeyCode::Char(' ') => Action::PickerConfirm,
            KeyCode::Esc | KeyCode::Char('q') => Action::PickerCancel,
            _ => Action::None,
        },
        // Method, language and translation pickers
        _ => match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::PickerDown,
            KeyCode::Char('k') | KeyCode::Up => Action::PickerUp,
            KeyCode::Enter | KeyCode::Char(' ') => Action::PickerConfirm,
            KeyCode::Esc | KeyCode::Char('q') => Action::PickerCancel,
            _ => Action::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::app::ConfirmAction;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_popup_keys_take_precedence() {
        let popup = Some(Popup::Confirmation(ConfirmAction::ResetSettings));
        assert_eq!(map_key(press(KeyCode::Char('y')), Screen::Settings, &popup), Action::Confirm);
        assert_eq!(map_key(press(KeyCode::Char('q')), Screen::Settings, &popup), Action::None);
        assert_eq!(map_key(press(KeyCode::Char('q')), Screen::Settings, &None), Action::Quit);
    }

    #[test]
    fn test_background_picker_grid_keys() {
        let popup = Some(Popup::BackgroundPicker);
        assert_eq!(map_key(press(KeyCode::Right), Screen::Home, &popup), Action::PickerRight);
        assert_eq!(map_key(press(KeyCode::Tab), Screen::Home, &popup), Action::PickerSwitchTab);
        assert_eq!(map_key(press(KeyCode::Esc), Screen::Home, &popup), Action::PickerCancel);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key, Screen::Home, &Some(Popup::Help)), Action::Quit);
    }
}
