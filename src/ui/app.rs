//! Main TUI application state and logic

use crate::game::{BOARD_WIDTH, CELL_COUNT};
use crate::snapshot::{History, MoveOutcome};
use crate::ui::panes::{
    render_board_pane, render_moves_pane, render_status_bar, BoardRenderData, MovesLayout,
    MovesScrollState, StatusRenderData,
};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use tracing::{debug, warn};

/// Which pane has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Board,
    Moves,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Board => FocusedPane::Moves,
            FocusedPane::Moves => FocusedPane::Board,
        }
    }
}

fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

/// The main application state
pub struct App {
    /// Game history and the move being shown
    pub history: History,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Keyboard cursor on the board (cell index)
    pub cursor: usize,

    /// Keyboard cursor in the move list (history index)
    pub selected_move: usize,

    /// Message shown in the status bar after the last accepted action
    pub status_message: String,

    /// Whether the app should quit
    pub should_quit: bool,

    moves_scroll: MovesScrollState,

    /// Screen areas from the last frame, for mouse hit-testing
    cell_areas: [Rect; CELL_COUNT],
    moves_layout: MovesLayout,
}

impl App {
    pub fn new(history: History) -> Self {
        let selected_move = history.current_move();
        App {
            history,
            focused_pane: FocusedPane::Board,
            cursor: 4,
            selected_move,
            status_message: String::from("Ready!"),
            should_quit: false,
            moves_scroll: MovesScrollState::default(),
            cell_areas: [Rect::default(); CELL_COUNT],
            moves_layout: MovesLayout::default(),
        }
    }

    /// Run the TUI application.
    ///
    /// Draws, blocks for one input event, applies it, and draws again.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let event = event::read()?;
            self.handle_event(event);
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Board on the left, move list on the right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(pane_area);

        let status = self.history.status();
        self.cell_areas = render_board_pane(
            frame,
            columns[0],
            &BoardRenderData {
                snapshot: self.history.current(),
                status: &status,
                cursor: self.cursor,
                is_focused: self.focused_pane == FocusedPane::Board,
            },
        );

        self.moves_layout = render_moves_pane(
            frame,
            columns[1],
            &self.history,
            self.selected_move,
            self.focused_pane == FocusedPane::Moves,
            &mut self.moves_scroll,
        );

        render_status_bar(
            frame,
            status_area,
            &StatusRenderData {
                message: &self.status_message,
                current_move: self.history.current_move(),
                total_moves: self.history.len(),
                winner: self.history.winner(),
                is_at_latest: self.history.is_at_latest(),
            },
        );
    }

    /// Apply one input event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Screen area of a board cell as of the last frame
    pub fn cell_area(&self, cell: usize) -> Rect {
        self.cell_areas.get(cell).copied().unwrap_or_default()
    }

    /// Move list rows as of the last frame
    pub fn moves_layout(&self) -> MovesLayout {
        self.moves_layout
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            // Number keys play a cell directly, row-major from the top left
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    let cell = digit as usize - 1;
                    self.cursor = cell;
                    self.click_cell(cell);
                }
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.next();
                if self.focused_pane == FocusedPane::Moves {
                    self.selected_move = self.history.current_move();
                }
            }
            KeyCode::Backspace => {
                self.jump_to(0);
            }
            KeyCode::End => {
                self.jump_to(self.history.len() - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focused_pane {
                FocusedPane::Board => self.click_cell(self.cursor),
                FocusedPane::Moves => self.jump_to(self.selected_move),
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                match self.focused_pane {
                    FocusedPane::Board => self.move_cursor(key.code),
                    FocusedPane::Moves => self.move_selection(key.code),
                }
            }
            _ => {}
        }
    }

    /// Arrow keys on the board, clamped to the grid edges
    fn move_cursor(&mut self, code: KeyCode) {
        let row = self.cursor / BOARD_WIDTH;
        let col = self.cursor % BOARD_WIDTH;
        self.cursor = match code {
            KeyCode::Up if row > 0 => self.cursor - BOARD_WIDTH,
            KeyCode::Down if row + 1 < BOARD_WIDTH => self.cursor + BOARD_WIDTH,
            KeyCode::Left if col > 0 => self.cursor - 1,
            KeyCode::Right if col + 1 < BOARD_WIDTH => self.cursor + 1,
            _ => self.cursor,
        };
    }

    /// Up/Down move the list cursor; Left/Right step through history directly
    fn move_selection(&mut self, code: KeyCode) {
        let last = self.history.len() - 1;
        match code {
            KeyCode::Up => self.selected_move = self.selected_move.saturating_sub(1),
            KeyCode::Down => self.selected_move = (self.selected_move + 1).min(last),
            KeyCode::Left => {
                if let Some(prev) = self.history.current_move().checked_sub(1) {
                    self.jump_to(prev);
                }
            }
            KeyCode::Right => {
                let next = self.history.current_move() + 1;
                if next <= last {
                    self.jump_to(next);
                }
            }
            _ => {}
        }
    }

    /// Handle mouse events. Shift-click is left to the terminal for text selection.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.modifiers.contains(KeyModifiers::SHIFT) {
            return;
        }

        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let (x, y) = (mouse.column, mouse.row);

        if let Some(cell) = self
            .cell_areas
            .iter()
            .position(|area| rect_contains(*area, x, y))
        {
            self.focused_pane = FocusedPane::Board;
            self.cursor = cell;
            self.click_cell(cell);
            return;
        }

        if rect_contains(self.moves_layout.rows, x, y) {
            if let Some(index) = self.moves_layout.index_at(y, self.history.len()) {
                self.focused_pane = FocusedPane::Moves;
                self.jump_to(index);
            }
        }
    }

    /// Play a cell on the current board. Illegal clicks change nothing.
    fn click_cell(&mut self, cell: usize) {
        match self.history.click(cell) {
            MoveOutcome::Played {
                mark,
                cell,
                move_number,
            } => {
                self.selected_move = move_number;
                self.status_message = format!("{} took cell {}", mark, cell + 1);
            }
            MoveOutcome::Ignored(reason) => {
                debug!(%reason, "Click had no effect");
            }
        }
    }

    /// Jump to a history entry from the move list
    fn jump_to(&mut self, index: usize) {
        match self.history.jump_to(index) {
            Ok(()) => {
                self.selected_move = index;
                self.status_message = if index == 0 {
                    "Showing game start".to_string()
                } else {
                    format!("Showing move #{}", index)
                };
            }
            Err(e) => {
                warn!(error = %e, "Jump rejected");
            }
        }
    }
}
