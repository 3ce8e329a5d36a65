use std::time::Instant;

use crossterm::event::KeyCode;

use blocktris::{Board, RandomSource};

use super::DropClock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
    Reset,
    Quit,
}

pub fn command_for(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Up => Some(Command::Rotate),
        KeyCode::Down => Some(Command::SoftDrop),
        KeyCode::Char(' ') => Some(Command::HardDrop),
        KeyCode::Esc => Some(Command::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}

impl Command {
    /// Applies the command. Reset is always honoured; everything else is
    /// dropped once the game is over.
    pub fn apply<R: RandomSource>(self, board: &mut Board<R>, clock: &mut DropClock, now: Instant) {
        match self {
            Command::Reset => {
                board.reset_game();
                clock.release_soft_drop();
            }
            _ if !board.can_accept_commands() => {}
            Command::MoveLeft => board.move_horizontal(-1),
            Command::MoveRight => board.move_horizontal(1),
            Command::Rotate => board.rotate(),
            Command::SoftDrop => clock.hold_soft_drop(now),
            Command::HardDrop => board.hard_drop(),
            Command::Quit => {}
        }
    }
}
