use crate::frame::Glyphs;
use crate::wrap::{expand_tabs, pad_line, visible_width, wrap_and_pad, wrap_lines, MARGIN};
use crate::{Card, FrameStyle};

/// The narrowest interior width a frame is drawn with.
pub const DEFAULT_WIDTH: usize = 32;

/// Columns reserved on the name line besides the name and the mana cost:
/// both margins plus at least two spaces between name and cost.
pub const NAME_MANA_GAP: usize = 2 * MARGIN + 2;

/// The interior width of the frame for `card`, i.e. the number of columns
/// between the left and right border.
///
/// A single-line type line always fits between the margins, so it is never
/// wrapped because of its own length.
pub fn frame_width(card: &Card) -> usize {
    let name_and_cost = visible_width(card.name()) + visible_width(card.mana_cost()) + NAME_MANA_GAP;
    DEFAULT_WIDTH
        .max(name_and_cost)
        .max(visible_width(card.type_line()) + 2 * MARGIN)
        .max(bottom_row_width(card))
}

/// Minimum width of the row holding the set code and the power/toughness box.
fn bottom_row_width(card: &Card) -> usize {
    let set_cell = visible_width(card.set()) + 2 * MARGIN;
    match stats_label(card) {
        Some(stats) => set_cell + 1 + visible_width(&stats) + 2 * MARGIN,
        None => set_cell,
    }
}

fn stats_label(card: &Card) -> Option<String> {
    card.power_toughness()
        .map(|(power, toughness)| format!("{}/{}", power, toughness))
}

/// Draws `card` as a bordered card frame.
///
/// Every line of the result has the same [visible width](crate::visible_width),
/// and there is no trailing newline.
pub fn render_card(card: &Card, style: FrameStyle) -> String {
    let glyphs = style.glyphs();
    let width = frame_width(card);
    let column_width = width - 2 * MARGIN;
    let separator = glyphs.rule(glyphs.left_tee, glyphs.right_tee, width, None);

    let mut rows = vec![glyphs.rule(glyphs.top_left, glyphs.top_right, width, None)];
    rows.push(name_line(card, width, glyphs.vertical));
    rows.push(separator.clone());

    // The art box is left blank
    for _ in 0..style.art_rows() {
        rows.push(pad_line("", column_width, glyphs.vertical, false));
    }

    let type_line = card.type_line();
    if visible_width(type_line) <= column_width && !type_line.contains('\n') {
        rows.push(pad_line(type_line, column_width, glyphs.vertical, false));
    } else {
        rows.extend(wrap_and_pad(type_line, width, glyphs.vertical));
    }
    rows.push(separator);

    rows.extend(wrap_and_pad(card.oracle_text(), width, glyphs.vertical));

    if let Some(flavor_text) = card.flavor_text() {
        let divider: String = std::iter::repeat(glyphs.divider).take(column_width).collect();
        rows.push(pad_line(&divider, column_width, glyphs.vertical, false));
        for line in wrap_lines(flavor_text, column_width) {
            rows.push(pad_line(&line, column_width, glyphs.vertical, true));
        }
    }

    rows.extend(bottom_section(card, width, glyphs));

    if style.has_outer_border() {
        rows = with_outer_border(rows, width + 2, glyphs);
    }
    rows.join("\n")
}

fn name_line(card: &Card, width: usize, vertical: char) -> String {
    let (name, mana_cost) = (expand_tabs(card.name()), expand_tabs(card.mana_cost()));
    let gap = width - 2 * MARGIN - visible_width(&name) - visible_width(&mana_cost);
    let margin = " ".repeat(MARGIN);
    format!("{vertical}{margin}{name}{:gap$}{mana_cost}{margin}{vertical}", "")
}

/// The separator, the row with the set code and the closing border.
///
/// With power and toughness, a box holding them is attached to the right end
/// of these three rows.
fn bottom_section(card: &Card, width: usize, glyphs: &Glyphs) -> [String; 3] {
    let vertical = glyphs.vertical;
    let margin = " ".repeat(MARGIN);
    match stats_label(card) {
        Some(stats) => {
            let (set, stats) = (expand_tabs(card.set()), expand_tabs(&stats));
            let box_width = visible_width(&stats) + 2 * MARGIN;
            let set_cell = width - box_width - 1;
            let padding = set_cell - 2 * MARGIN - visible_width(&set);
            [
                glyphs.rule(glyphs.left_tee, glyphs.right_tee, width, Some((set_cell, glyphs.top_tee))),
                format!("{vertical}{margin}{set}{:padding$}{margin}{vertical}{margin}{stats}{margin}{vertical}", ""),
                glyphs.rule(glyphs.bottom_left, glyphs.bottom_right, width, Some((set_cell, glyphs.bottom_tee))),
            ]
        }
        None => [
            glyphs.rule(glyphs.left_tee, glyphs.right_tee, width, None),
            pad_line(card.set(), width - 2 * MARGIN, vertical, false),
            glyphs.rule(glyphs.bottom_left, glyphs.bottom_right, width, None),
        ],
    }
}

/// Surrounds already drawn rows, each `inner_width` columns wide, with a
/// second border and a one column gap.
fn with_outer_border(rows: Vec<String>, inner_width: usize, glyphs: &Glyphs) -> Vec<String> {
    let width = inner_width + 2 * MARGIN;
    let mut outer = Vec::with_capacity(rows.len() + 2);
    outer.push(glyphs.rule(glyphs.top_left, glyphs.top_right, width, None));
    outer.extend(rows.iter().map(|row| pad_line(row, inner_width, glyphs.vertical, false)));
    outer.push(glyphs.rule(glyphs.bottom_left, glyphs.bottom_right, width, None));
    outer
}
