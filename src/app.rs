//! The app state, and how it reacts to input.

pub mod screen;
pub mod snapshot;
pub mod text_input;

use crossterm::event::KeyEvent;
use tui::{
    layout::{Position, Rect},
    widgets::ListState,
};

use self::{
    screen::ShoppingListScreen,
    snapshot::SnapshotStore,
    text_input::{TextInput, TextInputResult},
};

/// Which part of the screen takes keyboard input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Input,
    List,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AppConfigFields {
    pub disable_click: bool,
}

/// Where things were last drawn, used to figure out what a click hit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HitAreas {
    pub input: Rect,
    pub add_button: Rect,
    /// The area the list rows are drawn in, without borders.
    pub list_rows: Rect,
}

fn restore_screen(store: &dyn SnapshotStore) -> anyhow::Result<ShoppingListScreen> {
    Ok(store
        .restore()?
        .map(ShoppingListScreen::from_snapshot)
        .unwrap_or_default())
}

/// Owns the shopping list screen along with the UI state around it.
pub struct App {
    screen: ShoppingListScreen,
    snapshots: Box<dyn SnapshotStore>,
    pub text_input: TextInput,
    pub list_state: ListState,
    pub focus: Focus,
    pub hit_areas: HitAreas,
    pub app_config_fields: AppConfigFields,
}

impl App {
    /// Creates the app, restoring the screen from `snapshots` if it holds
    /// anything.
    pub fn new(
        app_config_fields: AppConfigFields, snapshots: Box<dyn SnapshotStore>,
    ) -> anyhow::Result<Self> {
        let screen = restore_screen(snapshots.as_ref())?;
        let mut text_input = TextInput::default();
        text_input.move_to_end(screen.draft());

        Ok(Self {
            screen,
            snapshots,
            text_input,
            list_state: ListState::default(),
            focus: Focus::default(),
            hit_areas: HitAreas::default(),
            app_config_fields,
        })
    }

    pub fn screen(&self) -> &ShoppingListScreen {
        &self.screen
    }

    /// The items along with the list state, for drawing.
    pub(crate) fn list_parts(&mut self) -> (&[String], &mut ListState) {
        (self.screen.items(), &mut self.list_state)
    }

    /// The visible part of the draft for an input `width` columns wide; see
    /// [`TextInput::visible_parts`].
    pub(crate) fn visible_draft(&mut self, width: usize) -> (&str, &str, &str) {
        self.text_input.visible_parts(self.screen.draft(), width)
    }

    /// Saves the screen state, e.g. before exiting.
    pub fn save_state(&mut self) -> anyhow::Result<()> {
        self.snapshots.save(&self.screen.snapshot())
    }

    /// Tears the screen down and recreates it from a snapshot, like after a
    /// resize.
    pub fn recreate_screen(&mut self) -> anyhow::Result<()> {
        self.save_state()?;
        self.screen = restore_screen(self.snapshots.as_ref())?;
        crate::debug!(
            "Recreated screen with {} items and a {}-byte draft.",
            self.screen.items().len(),
            self.screen.draft().len()
        );

        self.text_input = TextInput::default();
        self.text_input.move_to_end(self.screen.draft());
        self.hit_areas = HitAreas::default();
        self.fix_selection();

        Ok(())
    }

    pub fn update_draft(&mut self, new_text: String) {
        self.screen.update_draft(new_text);
    }

    /// Adds the draft to the list, resetting the cursor if it was. Returns
    /// whether something was added.
    pub fn submit_draft(&mut self) -> bool {
        let added = self.screen.submit_draft();
        if added {
            self.text_input.reset();
        }

        added
    }

    /// Removes the first item equal to `value`, clamping the selection if it
    /// was. Returns whether something was removed.
    pub fn remove_item(&mut self, value: &str) -> bool {
        let removed = self.screen.remove_item(value);
        if removed {
            self.fix_selection();
        }

        removed
    }

    /// Removes the item under the selection, if any.
    pub fn remove_selected(&mut self) -> bool {
        let selected = self
            .list_state
            .selected()
            .and_then(|index| self.screen.items().get(index))
            .cloned();

        match selected {
            Some(value) => self.remove_item(&value),
            None => false,
        }
    }

    /// Keeps the selection within the list, and moves focus back to the input
    /// if there is nothing left to select.
    fn fix_selection(&mut self) {
        let num_items = self.screen.items().len();

        if num_items == 0 {
            self.list_state.select(None);
            self.focus = Focus::Input;
        } else if let Some(selected) = self.list_state.selected() {
            self.list_state.select(Some(selected.min(num_items - 1)));
        } else if self.focus == Focus::List {
            self.list_state.select(Some(0));
        }
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    /// Focuses the list, if there is anything in it.
    pub fn focus_list(&mut self) {
        if !self.screen.is_empty() {
            self.focus = Focus::List;
            self.fix_selection();
        }
    }

    pub fn on_tab(&mut self) {
        match self.focus {
            Focus::Input => self.focus_list(),
            Focus::List => self.focus_input(),
        }
    }

    pub fn on_enter(&mut self) {
        match self.focus {
            Focus::Input => {
                self.submit_draft();
            }
            Focus::List => {
                self.remove_selected();
            }
        }
    }

    /// Passes a key to the text input. Returns whether it was used.
    pub fn on_input_key(&mut self, event: KeyEvent) -> bool {
        match self.text_input.handle_key_event(self.screen.draft(), event) {
            TextInputResult::Update(new_text) => {
                self.update_draft(new_text);
                true
            }
            TextInputResult::Redraw | TextInputResult::NoRedraw => true,
            TextInputResult::Unhandled => false,
        }
    }

    /// Pastes text into the draft, wherever the focus is.
    pub fn on_paste(&mut self, paste: &str) {
        self.focus_input();
        if let TextInputResult::Update(new_text) =
            self.text_input.insert_str(self.screen.draft(), paste)
        {
            self.update_draft(new_text);
        }
    }

    pub fn on_up_key(&mut self) {
        if self.focus == Focus::List {
            self.list_state.select_previous();
        }
    }

    pub fn on_down_key(&mut self) {
        match self.focus {
            Focus::Input => self.focus_list(),
            Focus::List => {
                let last = self.screen.items().len().saturating_sub(1);
                let next = self.list_state.selected().map_or(0, |s| (s + 1).min(last));
                self.list_state.select(Some(next));
            }
        }
    }

    pub fn skip_to_first(&mut self) {
        if self.focus == Focus::List && !self.screen.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn skip_to_last(&mut self) {
        if self.focus == Focus::List && !self.screen.is_empty() {
            self.list_state.select(Some(self.screen.items().len() - 1));
        }
    }

    pub fn handle_scroll_up(&mut self) {
        self.focus_list();
        self.on_up_key();
    }

    pub fn handle_scroll_down(&mut self) {
        if self.focus == Focus::List {
            self.on_down_key();
        } else {
            self.focus_list();
        }
    }

    /// Handles a left click at the given position: the add button submits
    /// the draft, the input takes focus, and a row removes its item.
    pub fn on_left_mouse_up(&mut self, x: u16, y: u16) {
        if self.app_config_fields.disable_click {
            return;
        }

        let position = Position { x, y };

        // The button floats over the list, so check it first.
        if self.hit_areas.add_button.contains(position) {
            self.submit_draft();
        } else if self.hit_areas.input.contains(position) {
            self.focus_input();
        } else if self.hit_areas.list_rows.contains(position) {
            let row = (y - self.hit_areas.list_rows.y) as usize + self.list_state.offset();
            if let Some(value) = self.screen.items().get(row).cloned() {
                self.list_state.select(Some(row));
                self.remove_item(&value);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::{snapshot::MemorySnapshotStore, *};

    fn new_app() -> App {
        App::new(
            AppConfigFields::default(),
            Box::<MemorySnapshotStore>::default(),
        )
        .unwrap()
    }

    fn add(app: &mut App, text: &str) {
        app.on_paste(text);
        app.on_enter();
    }

    fn items(app: &App) -> Vec<&str> {
        app.screen().items().iter().map(String::as_str).collect()
    }

    #[test]
    fn fresh_app_is_empty() {
        let app = new_app();

        assert!(app.screen().is_empty());
        assert_eq!(app.screen().draft(), "");
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn app_restores_from_store() {
        let mut store = MemorySnapshotStore::default();
        store
            .save(&snapshot::Snapshot {
                items: vec!["Milk".into()],
                draft: "Te".into(),
            })
            .unwrap();

        let app = App::new(AppConfigFields::default(), Box::new(store)).unwrap();

        assert_eq!(items(&app), ["Milk"]);
        assert_eq!(app.screen().draft(), "Te");
        assert_eq!(app.text_input.cursor(), 2);
    }

    #[test]
    fn typing_and_enter_adds() {
        let mut app = new_app();

        for c in "Tea".chars() {
            assert!(app.on_input_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
        }
        app.on_enter();

        assert_eq!(items(&app), ["Tea"]);
        assert_eq!(app.screen().draft(), "");
        assert_eq!(app.text_input.cursor(), 0);
    }

    #[test]
    fn blank_enter_keeps_draft() {
        let mut app = new_app();
        app.on_paste("   ");

        assert!(!app.submit_draft());
        assert_eq!(app.screen().draft(), "   ");
        assert_eq!(app.text_input.cursor(), 3);
        assert!(app.screen().is_empty());
    }

    #[test]
    fn missing_removal_keeps_selection() {
        let mut app = new_app();
        add(&mut app, "Milk");
        add(&mut app, "Eggs");
        app.focus_list();
        app.list_state.select(Some(1));

        assert!(!app.remove_item("Bread"));
        assert_eq!(app.list_state.selected(), Some(1));
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn recreating_keeps_state() {
        let mut app = new_app();
        add(&mut app, "Milk");
        add(&mut app, "Eggs");
        app.on_paste("Bre");

        app.recreate_screen().unwrap();

        assert_eq!(items(&app), ["Milk", "Eggs"]);
        assert_eq!(app.screen().draft(), "Bre");
        assert_eq!(app.text_input.cursor(), 3);

        // And it keeps working afterwards.
        app.on_paste("ad");
        app.on_enter();
        assert_eq!(items(&app), ["Milk", "Eggs", "Bread"]);
    }

    #[test]
    fn list_focus_and_removal() {
        let mut app = new_app();

        // Nothing to focus yet.
        app.on_tab();
        assert_eq!(app.focus, Focus::Input);

        add(&mut app, "Milk");
        add(&mut app, "Eggs");
        add(&mut app, "Tea");

        app.on_down_key();
        assert_eq!(app.focus, Focus::List);
        assert_eq!(app.list_state.selected(), Some(0));

        app.on_down_key();
        app.on_down_key();
        app.on_down_key();
        assert_eq!(app.list_state.selected(), Some(2));

        app.on_enter();
        assert_eq!(items(&app), ["Milk", "Eggs"]);
        assert_eq!(app.list_state.selected(), Some(1));

        app.skip_to_first();
        app.on_enter();
        assert_eq!(items(&app), ["Eggs"]);

        app.on_enter();
        assert!(app.screen().is_empty());
        assert_eq!(app.focus, Focus::Input);
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn removing_selected_duplicate_removes_first() {
        let mut app = new_app();
        add(&mut app, "Eggs");
        add(&mut app, "Milk");
        add(&mut app, "Eggs");

        app.focus_list();
        app.skip_to_last();
        assert!(app.remove_selected());

        assert_eq!(items(&app), ["Milk", "Eggs"]);
    }

    #[test]
    fn clicks_hit_button_input_and_rows() {
        let mut app = new_app();
        add(&mut app, "Milk");
        add(&mut app, "Eggs");
        app.on_paste("Tea");

        app.hit_areas = HitAreas {
            input: Rect::new(0, 1, 20, 3),
            add_button: Rect::new(14, 10, 5, 3),
            list_rows: Rect::new(1, 5, 18, 8),
        };

        // Second row.
        app.on_left_mouse_up(3, 6);
        assert_eq!(items(&app), ["Milk"]);

        // Below the last row.
        app.on_left_mouse_up(3, 8);
        assert_eq!(items(&app), ["Milk"]);

        // The button wins over the list underneath it.
        app.on_left_mouse_up(15, 11);
        assert_eq!(items(&app), ["Milk", "Tea"]);
        assert_eq!(app.screen().draft(), "");

        app.focus_list();
        app.on_left_mouse_up(2, 2);
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn clicks_can_be_disabled() {
        let mut app = App::new(
            AppConfigFields {
                disable_click: true,
            },
            Box::<MemorySnapshotStore>::default(),
        )
        .unwrap();
        add(&mut app, "Milk");
        app.hit_areas.list_rows = Rect::new(1, 5, 18, 8);

        app.on_left_mouse_up(3, 5);
        assert_eq!(items(&app), ["Milk"]);
    }

    #[test]
    fn scrolling_moves_selection() {
        let mut app = new_app();
        add(&mut app, "Milk");
        add(&mut app, "Eggs");

        app.handle_scroll_down();
        assert_eq!(app.focus, Focus::List);
        assert_eq!(app.list_state.selected(), Some(0));

        app.handle_scroll_down();
        assert_eq!(app.list_state.selected(), Some(1));

        app.handle_scroll_up();
        assert_eq!(app.list_state.selected(), Some(0));
    }
}
