use eyre::{ensure, Result};

use crate::pairwise::Alignment;
use crate::{GAP, Score};

/// Columns per block used by `Display for Alignment`.
pub const DEFAULT_LINE_WIDTH: usize = 60;

/// Human-readable rendering of the alignment in blocks of `width` columns.
///
/// Each block has three lines: sequence 1, a symbol line (`|` match, `.` mismatch, space for a
/// gap) and sequence 2. Every line ends with `\n`, blocks are separated by a blank line. An empty
/// alignment renders to an empty string.
pub fn format<S: Score>(alignment: &Alignment<S>, width: usize) -> Result<String> {
    ensure!(width > 0, "Line width must be positive, got {width}");
    Ok(render(alignment, width))
}

pub(crate) fn render<S: Score>(alignment: &Alignment<S>, width: usize) -> String {
    debug_assert!(width > 0);
    let row1 = alignment.aligned1().as_bytes();
    let row2 = alignment.aligned2().as_bytes();

    let blocks = row1.len().div_ceil(width);
    let mut result = String::with_capacity(blocks * (3 * (width + 1) + 1));
    for (i, (chunk1, chunk2)) in row1.chunks(width).zip(row2.chunks(width)).enumerate() {
        if i > 0 {
            result.push('\n');
        }

        result.extend(chunk1.iter().map(|&x| x as char));
        result.push('\n');
        result.extend(chunk1.iter().zip(chunk2).map(|(&a, &b)| symbol(a, b)));
        result.push('\n');
        result.extend(chunk2.iter().map(|&x| x as char));
        result.push('\n');
    }
    result
}

#[inline(always)]
fn symbol(a: u8, b: u8) -> char {
    if a == GAP || b == GAP {
        ' '
    } else if a == b {
        '|'
    } else {
        '.'
    }
}
