//! Cursor handling and editing for the single-line draft input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// What happened after the text input handled something.
#[derive(Debug, PartialEq, Eq)]
pub enum TextInputResult {
    /// The event was not meant for the text input.
    Unhandled,
    /// Nothing changed.
    NoRedraw,
    /// Only the cursor moved.
    Redraw,
    /// The text changed to this.
    Update(String),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum CursorDirection {
    Left,
    #[default]
    Right,
}

/// The cursor and visible window of a single-line text input.
///
/// The text itself is owned elsewhere (the draft of the screen), so every
/// operation takes the current text and edits return the new text rather than
/// changing anything directly. All cursor positions are byte indices that sit
/// on grapheme boundaries.
#[derive(Debug, Default)]
pub struct TextInput {
    cursor: usize,
    cursor_direction: CursorDirection,
    window_start: usize,
}

impl TextInput {
    /// The current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor to the end of `text`.
    pub fn move_to_end(&mut self, text: &str) {
        self.cursor = text.len();
        self.cursor_direction = CursorDirection::Right;
    }

    /// Resets the cursor and window to the start.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Makes sure the cursor is still valid for `text`, in case it was changed
    /// from outside.
    fn clamp(&mut self, text: &str) {
        if self.cursor > text.len() || !text.is_char_boundary(self.cursor) {
            self.cursor = text.len();
        }
        if self.window_start > self.cursor || !text.is_char_boundary(self.window_start) {
            self.window_start = 0;
        }
    }

    fn prev_boundary(text: &str, index: usize) -> Option<usize> {
        text[..index]
            .grapheme_indices(true)
            .next_back()
            .map(|(position, _)| position)
    }

    fn next_boundary(text: &str, index: usize) -> Option<usize> {
        text[index..]
            .graphemes(true)
            .next()
            .map(|grapheme| index + grapheme.len())
    }

    fn move_left(&mut self, text: &str) -> TextInputResult {
        match Self::prev_boundary(text, self.cursor) {
            Some(position) => {
                self.cursor = position;
                self.cursor_direction = CursorDirection::Left;
                TextInputResult::Redraw
            }
            None => TextInputResult::NoRedraw,
        }
    }

    fn move_right(&mut self, text: &str) -> TextInputResult {
        match Self::next_boundary(text, self.cursor) {
            Some(position) => {
                self.cursor = position;
                self.cursor_direction = CursorDirection::Right;
                TextInputResult::Redraw
            }
            None => TextInputResult::NoRedraw,
        }
    }

    fn move_to(&mut self, position: usize) -> TextInputResult {
        if self.cursor == position {
            TextInputResult::NoRedraw
        } else {
            self.cursor_direction = if position < self.cursor {
                CursorDirection::Left
            } else {
                CursorDirection::Right
            };
            self.cursor = position;
            TextInputResult::Redraw
        }
    }

    fn move_word_forward(&mut self, text: &str) -> TextInputResult {
        let current_index = self.cursor;

        if current_index < text.len() {
            for (index, _word) in text[current_index..].unicode_word_indices() {
                if index > 0 {
                    return self.move_to(index + current_index);
                }
            }
            return self.move_to(text.len());
        }

        TextInputResult::NoRedraw
    }

    fn move_word_back(&mut self, text: &str) -> TextInputResult {
        let current_index = self.cursor;

        for (index, _word) in text[..current_index].unicode_word_indices().rev() {
            if index < current_index {
                return self.move_to(index);
            }
        }

        self.move_to(0)
    }

    fn clear_text(&mut self, text: &str) -> TextInputResult {
        if text.is_empty() {
            TextInputResult::NoRedraw
        } else {
            self.reset();
            TextInputResult::Update(String::default())
        }
    }

    fn clear_word_from_cursor(&mut self, text: &str) -> TextInputResult {
        // Skip trailing whitespace, then delete back to the start of the word
        // before it.
        let current_index = self.cursor;
        let mut start_delete_index = current_index;
        let mut saw_non_whitespace = false;
        for (index, word) in text[..current_index].split_word_bound_indices().rev() {
            if word.trim().is_empty() {
                if saw_non_whitespace {
                    break;
                }
            } else {
                saw_non_whitespace = true;
            }
            start_delete_index = index;
        }

        if start_delete_index == current_index {
            TextInputResult::NoRedraw
        } else {
            let mut new_text = text.to_string();
            new_text.drain(start_delete_index..current_index);
            self.cursor = start_delete_index;
            self.cursor_direction = CursorDirection::Left;
            TextInputResult::Update(new_text)
        }
    }

    fn clear_previous_grapheme(&mut self, text: &str) -> TextInputResult {
        match Self::prev_boundary(text, self.cursor) {
            Some(new_index) => {
                let mut new_text = text.to_string();
                new_text.drain(new_index..self.cursor);
                self.cursor = new_index;
                self.cursor_direction = CursorDirection::Left;
                TextInputResult::Update(new_text)
            }
            None => TextInputResult::NoRedraw,
        }
    }

    fn clear_current_grapheme(&mut self, text: &str) -> TextInputResult {
        match Self::next_boundary(text, self.cursor) {
            Some(bound) => {
                let mut new_text = text.to_string();
                new_text.drain(self.cursor..bound);
                self.cursor_direction = CursorDirection::Left;
                TextInputResult::Update(new_text)
            }
            None => TextInputResult::NoRedraw,
        }
    }

    /// Inserts a string at the cursor, moving the cursor past it. Line breaks
    /// are dropped since the input is a single line.
    pub fn insert_str(&mut self, text: &str, to_insert: &str) -> TextInputResult {
        self.clamp(text);

        let cleaned: String = to_insert.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
        if cleaned.is_empty() {
            return TextInputResult::NoRedraw;
        }

        let mut new_text = text.to_string();
        new_text.insert_str(self.cursor, &cleaned);
        self.cursor += cleaned.len();
        self.cursor_direction = CursorDirection::Right;

        TextInputResult::Update(new_text)
    }

    fn insert_character(&mut self, text: &str, c: char) -> TextInputResult {
        let mut buffer = [0; 4];
        self.insert_str(text, c.encode_utf8(&mut buffer))
    }

    /// Handles a [`KeyEvent`] against the current `text`.
    pub fn handle_key_event(&mut self, text: &str, event: KeyEvent) -> TextInputResult {
        self.clamp(text);

        if event.modifiers.is_empty() || event.modifiers == KeyModifiers::SHIFT {
            match event.code {
                KeyCode::Left => self.move_left(text),
                KeyCode::Right => self.move_right(text),
                KeyCode::Home => self.move_to(0),
                KeyCode::End => self.move_to(text.len()),
                KeyCode::Backspace => self.clear_previous_grapheme(text),
                KeyCode::Delete => self.clear_current_grapheme(text),
                KeyCode::Char(c) => self.insert_character(text, c),
                _ => TextInputResult::Unhandled,
            }
        } else if let KeyModifiers::CONTROL = event.modifiers {
            match event.code {
                KeyCode::Char('a') => self.move_to(0),
                KeyCode::Char('e') => self.move_to(text.len()),
                KeyCode::Char('u') => self.clear_text(text),
                KeyCode::Char('w') => self.clear_word_from_cursor(text),
                KeyCode::Char('h') => self.clear_previous_grapheme(text),
                _ => TextInputResult::Unhandled,
            }
        } else if let KeyModifiers::ALT = event.modifiers {
            match event.code {
                KeyCode::Char('b') => self.move_word_back(text),
                KeyCode::Char('f') => self.move_word_forward(text),
                _ => TextInputResult::Unhandled,
            }
        } else {
            TextInputResult::Unhandled
        }
    }

    /// Updates the visible window for a field `width` columns wide, and
    /// returns the visible text split into the part before the cursor, the
    /// grapheme under the cursor (a space at the end of the text), and the
    /// part after it.
    pub fn visible_parts<'a>(&mut self, text: &'a str, width: usize) -> (&'a str, &'a str, &'a str) {
        self.clamp(text);

        if self.cursor < self.window_start {
            self.window_start = self.cursor;
        }

        // Always leave a column free for the cursor itself.
        let width = width.max(1);
        while UnicodeWidthStr::width(&text[self.window_start..self.cursor]) >= width {
            match Self::next_boundary(text, self.window_start) {
                Some(next) if next <= self.cursor => self.window_start = next,
                _ => break,
            }
        }

        if self.cursor_direction == CursorDirection::Left {
            // Scroll back when there is room again, so deleting doesn't leave
            // the field half empty.
            while let Some(prev) = Self::prev_boundary(text, self.window_start) {
                if UnicodeWidthStr::width(&text[prev..]) < width {
                    self.window_start = prev;
                } else {
                    break;
                }
            }
        }

        let before = &text[self.window_start..self.cursor];
        let (under, after) = match Self::next_boundary(text, self.cursor) {
            Some(bound) => (&text[self.cursor..bound], &text[bound..]),
            None => (" ", ""),
        };

        (before, under, after)
    }
}
