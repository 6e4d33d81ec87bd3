use crate::GAP;

/// Column-wise majority of the aligned rows.
///
/// Gaps never vote. Ties go to the symbol encountered first in row order and columns made only of
/// gaps produce a gap. Rows are expected to have the same length, extra columns of longer rows
/// are ignored.
pub fn consensus<R: AsRef<[u8]>>(rows: &[R]) -> String {
    let rows: Vec<&[u8]> = rows.iter().map(|x| x.as_ref()).collect();
    let width = rows.iter().map(|x| x.len()).min().unwrap_or(0);

    // (symbol, votes) in the order of first appearance
    let mut votes: Vec<(u8, usize)> = Vec::new();
    let mut result = String::with_capacity(width);
    for col in 0..width {
        votes.clear();
        for row in &rows {
            let symbol = row[col];
            if symbol == GAP {
                continue;
            }
            match votes.iter_mut().find(|(x, _)| *x == symbol) {
                Some((_, count)) => *count += 1,
                None => votes.push((symbol, 1)),
            }
        }

        let mut winner = (GAP, 0);
        for &(symbol, count) in &votes {
            if count > winner.1 {
                winner = (symbol, count);
            }
        }
        result.push(winner.0 as char);
    }
    result
}
