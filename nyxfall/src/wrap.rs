use std::borrow::Cow;

use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

/// Turns on italics in terminals that support it.
pub const ITALIC: &str = "\x1b[3m";
/// Resets all terminal text attributes.
pub const RESET: &str = "\x1b[0m";

/// Blank columns between a vertical border and the text next to it.
pub const MARGIN: usize = 1;

/// Columns a tab is expanded to.
pub const TAB_WIDTH: usize = 4;

/// Replaces every tab in `text` with [`TAB_WIDTH`] spaces.
///
/// Everything that measures or draws card text goes through this, so a tab
/// always takes up the same room.
pub fn expand_tabs(text: &str) -> Cow<'_, str> {
    if text.contains('\t') {
        Cow::Owned(text.replace('\t', &" ".repeat(TAB_WIDTH)))
    } else {
        Cow::Borrowed(text)
    }
}

/// The width of `text` in terminal columns, not counting ANSI escape sequences.
/// Tabs count as [`TAB_WIDTH`] columns.
pub fn visible_width(text: &str) -> usize {
    textwrap::core::display_width(&expand_tabs(text))
}

/// Word-wraps every line of `text` on its own, so explicit line breaks are
/// kept as paragraph boundaries.
///
/// Words are only split when a single word is wider than `column_width`; the
/// split then happens at the column boundary. Empty text gives no lines.
pub fn wrap_lines(text: &str, column_width: usize) -> Vec<String> {
    let options = Options::new(column_width.max(1))
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .break_words(true);

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let paragraph = expand_tabs(paragraph);
        lines.extend(
            textwrap::wrap(&paragraph, &options)
                .into_iter()
                .map(|line| line.into_owned()),
        );
    }
    lines
}

/// Pads `content` to `column_width` and puts it between two borders.
pub fn pad_line(content: &str, column_width: usize, vertical: char, italic: bool) -> String {
    let content = expand_tabs(content);
    let padding = column_width.saturating_sub(visible_width(&content));
    let margin = " ".repeat(MARGIN);
    if italic {
        format!("{vertical}{margin}{ITALIC}{content}{RESET}{:padding$}{margin}{vertical}", "")
    } else {
        format!("{vertical}{margin}{content}{:padding$}{margin}{vertical}", "")
    }
}

/// Wraps `text` to fit a frame whose interior is `width` columns wide, and
/// returns the bordered lines.
pub fn wrap_and_pad(text: &str, width: usize, vertical: char) -> Vec<String> {
    let column_width = width.saturating_sub(2 * MARGIN);
    wrap_lines(text, column_width)
        .iter()
        .map(|line| pad_line(line, column_width, vertical, false))
        .collect()
}
