//! Move list pane rendering

use crate::game::cell_position;
use crate::snapshot::History;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Scroll state for the move list, kept by the app between frames
#[derive(Debug, Default, Clone, Copy)]
pub struct MovesScrollState {
    pub offset: usize,
}

/// Where the list rows landed on screen, for mouse hit-testing
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovesLayout {
    /// Area holding the rows (inside borders and padding)
    pub rows: Rect,
    /// History index shown on the first visible row
    pub first_index: usize,
}

impl MovesLayout {
    /// History index under screen row `y`, if a row is drawn there
    pub fn index_at(&self, y: u16, len: usize) -> Option<usize> {
        if y < self.rows.y || y >= self.rows.y + self.rows.height {
            return None;
        }
        let index = self.first_index + (y - self.rows.y) as usize;
        (index < len).then_some(index)
    }
}

/// Render the move list.
///
/// `selected` is the keyboard cursor; the list scrolls so it stays visible.
pub fn render_moves_pane(
    frame: &mut Frame,
    area: Rect,
    history: &History,
    selected: usize,
    is_focused: bool,
    scroll: &mut MovesScrollState,
) -> MovesLayout {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Moves ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));
    let rows = block.inner(area);

    let total_items = history.len();
    let visible_height = (rows.height as usize).max(1);

    // Keep the selected row in view
    if selected < scroll.offset {
        scroll.offset = selected;
    } else if selected >= scroll.offset + visible_height {
        scroll.offset = selected + 1 - visible_height;
    }
    scroll.offset = scroll.offset.min(total_items.saturating_sub(visible_height));

    let current = history.current_move();

    let items: Vec<ListItem> = history
        .move_labels()
        .into_iter()
        .enumerate()
        .skip(scroll.offset)
        .take(visible_height)
        .map(|(index, label)| {
            let is_current = index == current;

            let marker = if is_current { "▶ " } else { "  " };
            let mut label_style = Style::default().fg(DEFAULT_THEME.fg);
            if is_current {
                label_style = label_style
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD);
            }

            let mut spans = vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.primary)),
                Span::styled(
                    format!("{:>2}. ", index + 1),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(label, label_style),
            ];

            if let Some(cell) = history.cell_played_at(index) {
                let (row, col) = cell_position(cell);
                let mark = history
                    .get(index)
                    .and_then(|snapshot| snapshot.get(cell))
                    .map(|m| m.as_str())
                    .unwrap_or("?");
                spans.push(Span::styled(
                    format!("  {} ({}, {})", mark, row + 1, col + 1),
                    Style::default().fg(DEFAULT_THEME.comment),
                ));
            }

            let mut item_style = Style::default();
            if is_focused && index == selected {
                item_style = item_style.bg(DEFAULT_THEME.cursor_bg);
            } else if is_current {
                item_style = item_style.bg(DEFAULT_THEME.current_line_bg);
            }

            ListItem::new(Line::from(spans)).style(item_style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);

    MovesLayout {
        rows,
        first_index: scroll.offset,
    }
}
