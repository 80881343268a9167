use std::fmt::Write;

use demine_core::{Board, CellContent, CellState};

/// Renders the board as text: a header row of column indices, each row
/// prefixed by its index, then the elapsed time.
///
/// Glyphs: `#` hidden, `F` flagged, `*` revealed mine, `.` revealed empty,
/// `1`-`8` revealed numbered cell.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  ");
    for c in 0..board.cols() {
        write!(out, "{c} ").unwrap();
    }
    out.push('\n');

    for r in 0..board.rows() {
        write!(out, "{r} ").unwrap();
        for c in 0..board.cols() {
            let cell = board.cell_at((r, c));
            match (cell.state, cell.content) {
                (CellState::Hidden, _) => out.push('#'),
                (CellState::Flagged, _) => out.push('F'),
                (CellState::Revealed, CellContent::Mine) => out.push('*'),
                (CellState::Revealed, CellContent::Clear(0)) => out.push('.'),
                (CellState::Revealed, CellContent::Clear(n)) => {
                    write!(out, "{n}").unwrap();
                }
            }
            out.push(' ');
        }
        out.push('\n');
    }

    writeln!(out, "\nTime: {}s", board.elapsed_secs()).unwrap();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use demine_core::MineLayout;

    fn board(size: (u8, u8), mines: &[(u8, u8)]) -> Board {
        Board::from_layout(MineLayout::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn hidden_board_renders_as_hashes() {
        let board = board((2, 3), &[(0, 0)]);

        assert_eq!(
            render_board(&board),
            "  0 1 2 \n\
             0 # # # \n\
             1 # # # \n\
             \n\
             Time: 0s\n"
        );
    }

    #[test]
    fn glyphs_cover_all_cell_states() {
        let mut board = board((3, 3), &[(0, 0), (0, 2)]);
        board.toggle_flag((0, 1));
        board.reveal((2, 0)); // zero cell, floods the bottom two rows
        board.reveal((0, 0)); // the mine itself, as the loss path does

        assert_eq!(
            render_board(&board),
            "  0 1 2 \n\
             0 * F # \n\
             1 1 2 1 \n\
             2 . . . \n\
             \n\
             Time: 0s\n"
        );
    }
}
