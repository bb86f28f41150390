use crate::game::{Board, Cell, SIZE};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Width of one rendered cell in terminal columns.
const CELL_WIDTH: usize = 3;

/// Board rows framed by a double-line border, with the cursor and the
/// picked-up piece highlighted.
pub fn board_lines(board: &Board, cursor: Option<usize>, selected: Option<usize>) -> Vec<Line<'static>> {
    let inner = "═".repeat(SIZE * CELL_WIDTH);
    let mut lines = Vec::with_capacity(SIZE + 2);
    lines.push(Line::from(format!("╔{}╗", inner)));

    for row in 0..SIZE {
        let mut spans = vec![Span::raw("║")];
        for col in 0..SIZE {
            let i = row * SIZE + col;
            spans.push(cell_span(board.get(i), cursor == Some(i), selected == Some(i)));
        }
        spans.push(Span::raw("║"));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(format!("╚{}╝", inner)));
    lines
}

fn cell_span(cell: Cell, under_cursor: bool, selected: bool) -> Span<'static> {
    let (symbol, mut style) = match cell {
        Cell::Empty => (" · ", Style::default().fg(Color::DarkGray)),
        Cell::Tiger => (
            " T ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::Goat => (" G ", Style::default().fg(Color::White)),
    };
    if selected {
        style = style.bg(Color::Cyan).fg(Color::Black);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(symbol, style)
}
