//! Drawing the screen.

mod widgets;

use tui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::{
    app::{App, Focus},
    constants::*,
    options::config::style::Styles,
};

/// Handles the canvas' state.
pub struct Painter {
    pub styles: Styles,
}

impl Painter {
    pub fn init(styles: Styles) -> Self {
        Self { styles }
    }

    /// Draws the whole screen from the current state of `app`, recording
    /// where the clickable parts ended up.
    pub fn draw_screen(&self, f: &mut Frame<'_>, app: &mut App) {
        let [app_bar_area, input_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(APP_BAR_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(f.area());

        self.draw_app_bar(f, app_bar_area);
        self.draw_input_field(f, app, input_area);

        if app.screen().is_empty() {
            self.draw_empty_message(f, app, body_area);
        } else {
            self.draw_item_list(f, app, body_area);
        }

        self.draw_add_button(f, app, body_area);
        self.draw_footer(f, app, footer_area);
    }

    fn draw_app_bar(&self, f: &mut Frame<'_>, draw_loc: Rect) {
        f.render_widget(
            Paragraph::new(Line::styled(format!(" {APP_TITLE}"), self.styles.title_style)),
            draw_loc,
        );
    }

    fn draw_footer(&self, f: &mut Frame<'_>, app: &App, draw_loc: Rect) {
        let hint = match app.focus {
            Focus::Input => INPUT_HINT,
            Focus::List => LIST_HINT,
        };

        f.render_widget(
            Paragraph::new(Line::styled(format!(" {hint}"), self.styles.empty_text_style)),
            draw_loc,
        );
    }
}
