use std::io::{Stdout, stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::info;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use blocktris::Board;

use crate::cli::Args;
use crate::ui::draw_game;

mod clock;
mod input;

pub use clock::DropClock;
pub use input::{Command, command_for};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run(args: &Args) -> Result<()> {
    let mut board = match args.seed {
        Some(seed) => Board::seeded(args.width, args.height, seed)?,
        None => Board::new(args.width, args.height)?,
    };
    info!(
        "starting {}x{} board at {} fps (seed {:?})",
        args.width, args.height, args.fps, args.seed
    );
    let mut tui = TuiGuard::new().context("failed to set up terminal")?;
    run_loop(tui.terminal_mut(), &mut board, args.fps)
}

fn run_loop(terminal: &mut Term, board: &mut Board, fps: u32) -> Result<()> {
    let frame_time = Duration::from_millis(1000 / u64::from(fps.max(1)));
    let mut clock = DropClock::new(fps);
    let mut last_tick = Instant::now();

    loop {
        if board.current_piece().is_none() {
            board.spawn();
        }

        terminal.draw(|frame| draw_game(frame, board))?;

        let timeout = frame_time.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    if key.code == KeyCode::Down {
                        clock.release_soft_drop();
                    }
                } else {
                    match command_for(key.code) {
                        Some(Command::Quit) => break,
                        Some(cmd) => cmd.apply(board, &mut clock, Instant::now()),
                        None => {}
                    }
                }
            }
        }

        if last_tick.elapsed() >= frame_time {
            last_tick = Instant::now();
            if clock.tick(last_tick) && board.can_accept_commands() {
                board.soft_drop();
            }
        }
    }
    info!("quit with score {}", board.score());
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
