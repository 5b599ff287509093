use tui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::{
    app::App,
    canvas::Painter,
    constants::{ADD_BUTTON_HEIGHT, ADD_BUTTON_ICON, ADD_BUTTON_WIDTH},
};

/// Where the add button floats: the bottom-right corner of `body`, just inside
/// its border. Returns `None` if it doesn't fit.
fn button_loc(body: Rect) -> Option<Rect> {
    if body.width < ADD_BUTTON_WIDTH + 2 || body.height < ADD_BUTTON_HEIGHT + 2 {
        return None;
    }

    Some(Rect::new(
        body.right() - ADD_BUTTON_WIDTH - 1,
        body.bottom() - ADD_BUTTON_HEIGHT - 1,
        ADD_BUTTON_WIDTH,
        ADD_BUTTON_HEIGHT,
    ))
}

impl Painter {
    /// Draws the floating add button over the bottom-right of `body_loc`.
    pub fn draw_add_button(&self, f: &mut Frame<'_>, app: &mut App, body_loc: Rect) {
        let Some(draw_loc) = button_loc(body_loc) else {
            app.hit_areas.add_button = Rect::default();
            return;
        };

        let button = Paragraph::new(ADD_BUTTON_ICON)
            .style(self.styles.button_style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(self.styles.border_type)
                    .border_style(self.styles.button_style),
            );

        f.render_widget(Clear, draw_loc);
        f.render_widget(button, draw_loc);
        app.hit_areas.add_button = draw_loc;
    }
}
