use tui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{
    app::{App, Focus},
    canvas::Painter,
    constants::INPUT_LABEL,
};

impl Painter {
    /// Draws the labelled input holding the draft, with the cursor shown if
    /// the input has focus.
    pub fn draw_input_field(&self, f: &mut Frame<'_>, app: &mut App, draw_loc: Rect) {
        let is_selected = app.focus == Focus::Input;
        app.hit_areas.input = draw_loc;

        let border_style = if is_selected {
            self.styles.highlighted_border_style
        } else {
            self.styles.border_style
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(self.styles.border_type)
            .border_style(border_style)
            .title(Line::styled(format!(" {INPUT_LABEL} "), border_style));
        let inner = block.inner(draw_loc);

        let cursor_style = if is_selected {
            self.styles.selected_text_style
        } else {
            self.styles.text_style
        };

        let (before, under, after) = app.visible_draft(inner.width as usize);
        let text = Line::from(vec![
            Span::styled(before.to_string(), self.styles.text_style),
            Span::styled(under.to_string(), cursor_style),
            Span::styled(after.to_string(), self.styles.text_style),
        ]);

        f.render_widget(Paragraph::new(text).block(block), draw_loc);
    }
}
