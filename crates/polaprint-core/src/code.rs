use crate::consts::{BLANK_CELL_GLYPH, CODE_LENGTH};

/// Keep only ASCII digits from `raw`, truncated to [`CODE_LENGTH`].
///
/// Never fails: any input maps to a string matching `^[0-9]{0,6}$`.
pub fn sanitize_code(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(CODE_LENGTH)
        .collect()
}

/// One fixed-width cell of a rendered code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeCell {
    /// Position from the left, `0..CODE_LENGTH`.
    pub index: usize,
    /// The digit, or [`BLANK_CELL_GLYPH`] for an unfilled position.
    pub glyph: char,
    /// Whether a digit occupies this position.
    pub filled: bool,
}

impl CodeCell {
    /// Every cell is drawn on a baseline, filled or not.
    pub fn has_baseline(&self) -> bool {
        true
    }

    /// Last cell gets no trailing gap.
    pub fn is_last(&self) -> bool {
        self.index + 1 == CODE_LENGTH
    }
}

impl std::fmt::Display for CodeCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph)
    }
}

/// Lazily render `code` as exactly [`CODE_LENGTH`] cells, padding the
/// missing trailing positions with blank cells.
///
/// Characters past the sixth are ignored; the input is not sanitised here.
pub fn render_cells(code: &str) -> impl Iterator<Item = CodeCell> + '_ {
    let mut chars = code.chars();
    (0..CODE_LENGTH).map(move |index| match chars.next() {
        Some(glyph) => CodeCell {
            index,
            glyph,
            filled: true,
        },
        None => CodeCell {
            index,
            glyph: BLANK_CELL_GLYPH,
            filled: false,
        },
    })
}
