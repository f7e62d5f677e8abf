use common::{ConnectKGame, Mark, Position};

/// Text board with column legend on top and row legend on the left.
/// Cells of the winning line are bracketed.
pub fn render_board(game: &ConnectKGame) -> String {
    let highlighted: Vec<Position> = game
        .winning_line()
        .map(|line| line.cells())
        .unwrap_or_default();

    let mut out = String::from("   ");
    for col in 0..game.size() {
        out.push_str(&format!("{:^3}", col));
    }
    out.push('\n');

    for (row, cells) in game.snapshot().iter().enumerate() {
        out.push_str(&format!("{:>3}", row));
        for (col, &cell) in cells.iter().enumerate() {
            let symbol = match cell {
                Mark::Empty => '.',
                mark => mark.as_char(),
            };
            if highlighted.contains(&Position::new(row, col)) {
                out.push_str(&format!("[{}]", symbol));
            } else {
                out.push_str(&format!(" {} ", symbol));
            }
        }
        out.push('\n');
    }
    out
}
