use super::app::{InteractiveApp, Popup};
use super::event::{Event, EventHandler};
use super::keys::{map_key, Action, PICKER_COLUMNS};
use crate::constants::EVENT_TICK_MS;
use crate::logging::{log_debug, log_error, log_info};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

pub fn run_interactive_mode(mut app: InteractiveApp) -> Result<InteractiveApp, Box<dyn std::error::Error>> {
    log_info("Starting interactive mode");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    log_debug("Terminal initialized");

    let events = EventHandler::new(EVENT_TICK_MS);
    let result = event_loop(&mut terminal, &mut app, &events);

    log_info("Exiting interactive mode");

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map(|_| app)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut InteractiveApp,
    events: &EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        if let Err(e) = terminal.draw(|f| super::ui::draw(f, &*app)) {
            log_error(&format!("Error drawing UI: {}", e));
            return Err(Box::new(e));
        }

        match events.recv()? {
            Event::Key(key_event) => {
                let action = map_key(key_event, app.screen, &app.popup);
                log_debug(&format!("Key pressed: {:?} -> {:?}", key_event.code, action));
                handle_action(app, action);
            }
            Event::Tick => app.tick(),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

pub fn handle_action(app: &mut InteractiveApp, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::SwitchScreen => app.toggle_screen(),
        Action::MoveUp => app.move_selection(-1),
        Action::MoveDown => app.move_selection(1),
        Action::Activate => app.activate_selected(),
        Action::Decrease => app.adjust_selected(-1),
        Action::Increase => app.adjust_selected(1),
        Action::OpenBackgroundPicker => app.open_background_picker(),

        Action::PickerUp | Action::PickerDown => {
            let step = if app.popup == Some(Popup::BackgroundPicker) {
                PICKER_COLUMNS as i32
            } else {
                1
            };
            let delta = if action == Action::PickerUp { -step } else { step };
            move_picker_clamped(app, delta);
        }
        Action::PickerLeft => app.move_picker(-1),
        Action::PickerRight => app.move_picker(1),
        Action::PickerSwitchTab => app.switch_picker_tab(),
        Action::PickerConfirm => app.confirm_picker(),
        Action::PickerCancel => app.close_popup(),

        Action::Confirm => app.confirm_popup(),
        Action::Cancel => app.close_popup(),
        Action::ScrollUp => app.privacy_scroll = app.privacy_scroll.saturating_sub(1),
        Action::ScrollDown => app.privacy_scroll = app.privacy_scroll.saturating_add(1),

        Action::Help => app.popup = Some(Popup::Help),
        Action::DismissNotification => app.dismiss_notification(),
        Action::None => {}
    }
}

/// Vertical moves in the background grid stop at the edges instead of
/// wrapping into another column; list pickers wrap.
fn move_picker_clamped(app: &mut InteractiveApp, delta: i32) {
    if app.popup != Some(Popup::BackgroundPicker) {
        app.move_picker(delta);
        return;
    }
    let len = app.picker_len() as i32;
    let target = app.picker_index as i32 + delta;
    if target >= 0 && target < len {
        app.picker_index = target as usize;
    }
}
