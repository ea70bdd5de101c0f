//! Board pane rendering
//!
//! Draws the status line and the 3x3 grid for the current snapshot. Each cell
//! is a small bordered box; the rectangles are returned so the app can map
//! mouse clicks back to cell indices.

use crate::game::{winning_line, Mark, Snapshot, BOARD_WIDTH, CELL_COUNT};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of one cell box, borders included
pub const CELL_WIDTH: u16 = 7;

/// Height of one cell box, borders included
pub const CELL_HEIGHT: u16 = 3;

/// What the board pane needs from the app
pub struct BoardRenderData<'a> {
    pub snapshot: &'a Snapshot,
    pub status: &'a str,
    /// Keyboard cursor, drawn only while the board has focus
    pub cursor: usize,
    pub is_focused: bool,
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => DEFAULT_THEME.x_mark,
        Mark::O => DEFAULT_THEME.o_mark,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Screen rectangles of the nine cells for a board drawn inside `inner`.
///
/// The grid sits two rows below the status line, centered horizontally and
/// clipped to `inner`.
pub fn cell_areas(inner: Rect) -> [Rect; CELL_COUNT] {
    let grid_width = CELL_WIDTH * BOARD_WIDTH as u16;
    let left = inner.x + inner.width.saturating_sub(grid_width) / 2;
    let top = inner.y + 2;

    std::array::from_fn(|cell| {
        let row = (cell / BOARD_WIDTH) as u16;
        let col = (cell % BOARD_WIDTH) as u16;
        Rect::new(
            left + col * CELL_WIDTH,
            top + row * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(inner)
    })
}

/// Render the board pane and return the on-screen area of each cell
pub fn render_board_pane(
    frame: &mut Frame,
    area: Rect,
    data: &BoardRenderData<'_>,
) -> [Rect; CELL_COUNT] {
    let border_style = if data.is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let winning = winning_line(data.snapshot);

    // Status line
    let status_style = if winning.is_some() {
        Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };
    let status_area = Rect::new(inner.x, inner.y, inner.width, inner.height.min(1));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(data.status, status_style)))
            .alignment(Alignment::Center),
        status_area,
    );

    let areas = cell_areas(inner);

    for (cell, cell_area) in areas.iter().enumerate() {
        if cell_area.width == 0 || cell_area.height == 0 {
            continue;
        }

        let is_winning = winning.is_some_and(|line| line.contains(&cell));
        let is_cursor = data.is_focused && data.cursor == cell;

        let mut box_style = Style::default();
        if is_winning {
            box_style = box_style.bg(DEFAULT_THEME.win_bg);
        } else if is_cursor {
            box_style = box_style.bg(DEFAULT_THEME.cursor_bg);
        }

        let cell_border = if is_cursor {
            Style::default().fg(DEFAULT_THEME.border_focused)
        } else if is_winning {
            Style::default().fg(DEFAULT_THEME.success)
        } else {
            Style::default().fg(DEFAULT_THEME.border_normal)
        };

        // Empty cells show their number key as a hint
        let content = match data.snapshot.get(cell) {
            Some(mark) => Span::styled(mark.as_str(), mark_style(mark)),
            None => Span::styled(
                (cell + 1).to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        };

        let cell_block = Block::default()
            .borders(Borders::ALL)
            .border_style(cell_border)
            .style(box_style);

        frame.render_widget(
            Paragraph::new(Line::from(content))
                .alignment(Alignment::Center)
                .block(cell_block),
            *cell_area,
        );
    }

    areas
}
