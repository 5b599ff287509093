//! Some code around handling events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::{App, Focus};

/// Events sent to the main thread.
#[derive(Debug, PartialEq, Eq)]
pub enum ListEvent {
    Resize,
    KeyInput(KeyEvent),
    MouseInput(MouseEvent),
    PasteEvent(String),
    Terminate,
}

/// Handle a [`MouseEvent`].
pub fn handle_mouse_event(event: MouseEvent, app: &mut App) {
    match event.kind {
        MouseEventKind::ScrollUp => app.handle_scroll_up(),
        MouseEventKind::ScrollDown => app.handle_scroll_down(),
        MouseEventKind::Down(button) => {
            let (x, y) = (event.column, event.row);
            match button {
                crossterm::event::MouseButton::Left => {
                    app.on_left_mouse_up(x, y);
                }
                crossterm::event::MouseButton::Right => {}
                _ => {}
            }
        }
        _ => {}
    };
}

/// Handle a [`KeyEvent`]. Returns `true` if the program should quit.
pub fn handle_key_event_or_break(event: KeyEvent, app: &mut App) -> bool {
    // Some platforms also report releases; only act on presses.
    if event.kind == KeyEventKind::Release {
        return false;
    }

    if let KeyModifiers::CONTROL = event.modifiers {
        if event.code == KeyCode::Char('c') {
            return true;
        }
    }

    match event.code {
        KeyCode::Esc => return true,
        KeyCode::Tab | KeyCode::BackTab => {
            app.on_tab();
            return false;
        }
        KeyCode::Enter => {
            app.on_enter();
            return false;
        }
        _ => {}
    }

    match app.focus {
        Focus::Input => {
            if event.code == KeyCode::Down && event.modifiers.is_empty() {
                app.on_down_key();
            } else {
                app.on_input_key(event);
            }
        }
        Focus::List => {
            if event.modifiers.is_empty() || event.modifiers == KeyModifiers::SHIFT {
                // Required catch for typing - otherwise you couldn't type a 'q' into the input.
                if event.code == KeyCode::Char('q') {
                    return true;
                }

                match event.code {
                    KeyCode::Up | KeyCode::Char('k') => app.on_up_key(),
                    KeyCode::Down | KeyCode::Char('j') => app.on_down_key(),
                    KeyCode::Home | KeyCode::Char('g') => app.skip_to_first(),
                    KeyCode::End | KeyCode::Char('G') => app.skip_to_last(),
                    KeyCode::Delete | KeyCode::Char('d') | KeyCode::Char('x') => {
                        app.remove_selected();
                    }
                    KeyCode::Char('i') | KeyCode::Char('/') => app.focus_input(),
                    _ => {}
                }
            }
        }
    }

    false
}

#[cfg(test)]
mod test {
    use crossterm::event::{KeyEventState, MouseButton};

    use super::*;
    use crate::app::{snapshot::MemorySnapshotStore, AppConfigFields};

    fn new_app() -> App {
        App::new(
            AppConfigFields::default(),
            Box::<MemorySnapshotStore>::default(),
        )
        .unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            assert!(!handle_key_event_or_break(press(KeyCode::Char(c)), app));
        }
    }

    fn items(app: &App) -> Vec<&str> {
        app.screen().items().iter().map(String::as_str).collect()
    }

    #[test]
    fn quit_keys() {
        let mut app = new_app();

        assert!(handle_key_event_or_break(press(KeyCode::Esc), &mut app));
        assert!(handle_key_event_or_break(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app
        ));
    }

    #[test]
    fn q_is_typed_in_the_input() {
        let mut app = new_app();

        type_str(&mut app, "quark");
        assert_eq!(app.screen().draft(), "quark");
    }

    #[test]
    fn q_quits_from_the_list() {
        let mut app = new_app();
        type_str(&mut app, "Milk");
        handle_key_event_or_break(press(KeyCode::Enter), &mut app);
        handle_key_event_or_break(press(KeyCode::Tab), &mut app);

        assert_eq!(app.focus, Focus::List);
        assert!(handle_key_event_or_break(press(KeyCode::Char('q')), &mut app));
    }

    #[test]
    fn milk_scenario_through_keys() {
        let mut app = new_app();

        type_str(&mut app, "Milk");
        handle_key_event_or_break(press(KeyCode::Enter), &mut app);
        assert_eq!(items(&app), ["Milk"]);
        assert_eq!(app.screen().draft(), "");

        type_str(&mut app, "  ");
        handle_key_event_or_break(press(KeyCode::Enter), &mut app);
        assert_eq!(items(&app), ["Milk"]);
        assert_eq!(app.screen().draft(), "  ");

        handle_key_event_or_break(press(KeyCode::Down), &mut app);
        handle_key_event_or_break(press(KeyCode::Char('d')), &mut app);
        assert!(app.screen().is_empty());
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn list_navigation_keys() {
        let mut app = new_app();
        for item in ["Milk", "Eggs", "Tea"] {
            type_str(&mut app, item);
            handle_key_event_or_break(press(KeyCode::Enter), &mut app);
        }

        handle_key_event_or_break(press(KeyCode::Tab), &mut app);
        handle_key_event_or_break(press(KeyCode::Char('G')), &mut app);
        assert_eq!(app.list_state.selected(), Some(2));

        handle_key_event_or_break(press(KeyCode::Char('k')), &mut app);
        handle_key_event_or_break(press(KeyCode::Delete), &mut app);
        assert_eq!(items(&app), ["Milk", "Tea"]);

        handle_key_event_or_break(press(KeyCode::Char('i')), &mut app);
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn releases_are_ignored() {
        let mut app = new_app();
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );

        assert!(!handle_key_event_or_break(release, &mut app));
        assert_eq!(app.screen().draft(), "");
    }

    #[test]
    fn left_click_goes_to_app() {
        let mut app = new_app();
        type_str(&mut app, "Milk");
        handle_key_event_or_break(press(KeyCode::Enter), &mut app);
        app.hit_areas.list_rows = tui::layout::Rect::new(1, 5, 18, 8);

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 2,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(click, &mut app);

        assert!(app.screen().is_empty());
    }
}
