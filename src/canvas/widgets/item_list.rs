use tui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::{
    app::{App, Focus},
    canvas::Painter,
    constants::EMPTY_LIST_MESSAGE,
};

impl Painter {
    /// Draws the items as a scrollable list. Only the rows that fit are drawn;
    /// the list state keeps track of the scroll offset.
    pub fn draw_item_list(&self, f: &mut Frame<'_>, app: &mut App, draw_loc: Rect) {
        let is_selected = app.focus == Focus::List;

        let border_style = if is_selected {
            self.styles.highlighted_border_style
        } else {
            self.styles.border_style
        };
        let highlight_style = if is_selected {
            self.styles.selected_text_style
        } else {
            self.styles.text_style
        };

        let (items, list_state) = app.list_parts();
        let title = match items.len() {
            1 => " 1 article ".to_string(),
            n => format!(" {n} articles "),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(self.styles.border_type)
            .border_style(border_style)
            .title(Line::styled(title, border_style));
        let rows_loc = block.inner(draw_loc);

        let list = List::new(items.iter().map(|item| ListItem::new(item.as_str())))
            .block(block)
            .style(self.styles.text_style)
            .highlight_style(highlight_style);

        f.render_stateful_widget(list, draw_loc, list_state);
        app.hit_areas.list_rows = rows_loc;
    }

    /// Draws the message shown instead of the list when there is nothing in it.
    pub fn draw_empty_message(&self, f: &mut Frame<'_>, app: &mut App, draw_loc: Rect) {
        app.hit_areas.list_rows = Rect::default();

        let message = Paragraph::new(EMPTY_LIST_MESSAGE)
            .style(self.styles.empty_text_style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP).border_style(self.styles.border_style));

        f.render_widget(message, draw_loc);
    }
}
