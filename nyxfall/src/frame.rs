/// The visual style of a rendered card frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameStyle {
    /// Light box-drawing characters, a tall art box and an outer border.
    #[default]
    Unicode,
    /// Only `+`, `-` and `|`, for terminals without box-drawing glyphs.
    Ascii,
}

/// The characters a frame is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub left_tee: char,
    pub right_tee: char,
    pub top_tee: char,
    pub bottom_tee: char,
    /// Used for the thin line between oracle and flavor text.
    pub divider: char,
}

pub const ASCII_GLYPHS: Glyphs = Glyphs {
    horizontal: '-',
    vertical: '|',
    top_left: '+',
    top_right: '+',
    bottom_left: '+',
    bottom_right: '+',
    left_tee: '+',
    right_tee: '+',
    top_tee: '+',
    bottom_tee: '+',
    divider: '-',
};

pub const BOX_GLYPHS: Glyphs = Glyphs {
    horizontal: '─',
    vertical: '│',
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    left_tee: '├',
    right_tee: '┤',
    top_tee: '┬',
    bottom_tee: '┴',
    divider: '┄',
};

impl FrameStyle {
    pub fn glyphs(self) -> &'static Glyphs {
        match self {
            FrameStyle::Unicode => &BOX_GLYPHS,
            FrameStyle::Ascii => &ASCII_GLYPHS,
        }
    }

    /// Height of the blank art box, in rows.
    pub fn art_rows(self) -> usize {
        match self {
            FrameStyle::Unicode => 7,
            FrameStyle::Ascii => 3,
        }
    }

    /// Whether the inner frame is wrapped in a second, outer border.
    pub fn has_outer_border(self) -> bool {
        matches!(self, FrameStyle::Unicode)
    }
}

impl Glyphs {
    /// A horizontal rule `width` columns wide between two end glyphs, with
    /// `join` placed at `join_at` columns from the left if given.
    pub(crate) fn rule(
        &self,
        left: char,
        right: char,
        width: usize,
        join: Option<(usize, char)>,
    ) -> String {
        let mut line = String::with_capacity(width + 2);
        line.push(left);
        for col in 0..width {
            match join {
                Some((join_at, glyph)) if join_at == col => line.push(glyph),
                _ => line.push(self.horizontal),
            }
        }
        line.push(right);
        line
    }
}
