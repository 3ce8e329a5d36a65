use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use blocktris::config::{CELL_W, PALETTE, SIDEBAR_W, play_h, play_w};
use blocktris::{Board, Cell, GameState, PaletteIndex};

const WALL: Color = Color::Gray;

fn palette_color(color: PaletteIndex) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

fn background() -> Color {
    let (r, g, b) = PALETTE[0];
    Color::Rgb(r, g, b)
}

pub fn draw_game(frame: &mut Frame, board: &Board) {
    let area = frame.size();
    let well_w = u16::try_from(play_w(board.width())).unwrap_or(u16::MAX);
    let well_h = u16::try_from(play_h(board.height())).unwrap_or(u16::MAX);
    let min_w = well_w.saturating_add(SIDEBAR_W + 2);
    let min_h = well_h.saturating_add(2);

    if area.width < min_w || area.height < min_h {
        let msg = Paragraph::new(format!("RESIZE (min {}x{})", min_w, min_h))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("BLOCKTRIS"));
        frame.render_widget(msg, area);
        return;
    }

    let cabinet = Block::default()
        .title("BLOCKTRIS")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(well_w),
            Constraint::Length(SIDEBAR_W),
            Constraint::Min(0),
        ])
        .split(cabinet_inner);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(well_h),
            Constraint::Min(0),
        ])
        .split(cols[1]);
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(well_h),
            Constraint::Min(0),
        ])
        .split(cols[2]);

    draw_playfield(frame, board, rows[1]);
    draw_sidebar(frame, board, side[1]);
}

fn draw_playfield(frame: &mut Frame, board: &Board, play_rect: Rect) {
    let (w, h) = (play_w(board.width()), play_h(board.height()));
    let wall = Style::default().fg(WALL);
    let empty = Style::default().bg(background());
    let mut grid = vec![vec![(' ', empty); w]; h];

    // Border: ceiling, sides, heavy floor.
    grid[0][0] = ('┌', wall);
    grid[0][w - 1] = ('┐', wall);
    grid[h - 1][0] = ('└', wall);
    grid[h - 1][w - 1] = ('┘', wall);
    for x in 1..w - 1 {
        grid[0][x] = ('─', wall);
        grid[h - 1][x] = ('═', wall);
    }
    for row in grid.iter_mut().take(h - 1).skip(1) {
        row[0] = ('│', wall);
        row[w - 1] = ('│', wall);
    }

    let plot_block = |grid: &mut [Vec<(char, Style)>], bx: usize, by: usize, color: PaletteIndex| {
        let gx = 1 + bx * CELL_W;
        let gy = 1 + by;
        if gy < h - 1 && gx + 1 < w - 1 {
            let style = Style::default().fg(palette_color(color)).bg(background());
            grid[gy][gx] = ('█', style);
            grid[gy][gx + 1] = ('█', style);
        }
    };

    for (y, row) in board.grid().rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            if let Cell::Filled(color) = *cell {
                plot_block(&mut grid, x, y, color);
            }
        }
    }

    if let Some(piece) = board.current_piece() {
        for (x, y) in piece.cells() {
            if let (Ok(xu), Ok(yu)) = (usize::try_from(x), usize::try_from(y)) {
                if xu < board.width() && yu < board.height() {
                    plot_block(&mut grid, xu, yu, piece.color);
                }
            }
        }
    }

    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(ch, style)| Span::styled(ch.to_string(), style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), play_rect);

    if board.state() == GameState::GameOver {
        let overlay_w = play_rect.width.saturating_sub(4).max(12);
        let overlay_h = 4u16;
        let popup = Rect {
            x: play_rect.x + play_rect.width.saturating_sub(overlay_w) / 2,
            y: play_rect.y + play_rect.height.saturating_sub(overlay_h) / 2,
            width: overlay_w.min(play_rect.width),
            height: overlay_h,
        };
        let overlay = Paragraph::new(vec![
            Line::styled("GAME OVER", Style::default().fg(Color::Rgb(255, 125, 0)).bold()),
            Line::styled("Press ESC", Style::default().fg(Color::Rgb(255, 215, 0))),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(Clear, popup);
        frame.render_widget(overlay, popup);
    }
}

fn draw_sidebar(frame: &mut Frame, board: &Board, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0), Constraint::Length(8)])
        .split(area);

    let status = match board.state() {
        GameState::Playing => "PLAYING",
        GameState::GameOver => "OVER",
    };
    let info = Paragraph::new(vec![
        Line::raw(format!("{:<7} {}", "SCORE:", board.score())),
        Line::raw(format!("{:<7} {}", "LINES:", board.lines_cleared())),
        Line::raw(format!("{:<7} {}", "STATUS:", status)),
    ])
    .block(Block::default().title("INFO").borders(Borders::ALL));
    frame.render_widget(info, chunks[0]);

    let controls = Paragraph::new(vec![
        Line::raw("←/→ move"),
        Line::raw("↑ rotate"),
        Line::raw("↓ soft drop"),
        Line::raw("space lock"),
        Line::raw("esc reset"),
        Line::raw("q quit"),
    ])
    .block(Block::default().title("CONTROLS").borders(Borders::ALL));
    frame.render_widget(controls, chunks[2]);
}
