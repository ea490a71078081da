//! 終端機玩家
//!
//! 從輸入讀取座標與方向，無法執行的輸入會重新詢問。
//! 任何提示下輸入 `exit` 都會回傳 [`InputError::Exit`]。

use crate::notation::{is_exit, parse_direction, parse_position};
use neutron::error::{Error, InputError, Result};
use neutron::logic::board::NeutronBoard;
use neutron::logic::strategy::{Move, Side, Strategy};
use std::fmt;
use std::io::{BufRead, Write};
use tracing::warn;

const POSITION_PROMPT: &str = "Enter coordinates of soldier you want to move: ";
const DIRECTION_PROMPT: &str = "Enter direction you want to move: ";

pub struct InteractiveStrategy<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveStrategy<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 顯示提示並讀取一行，已去除前後空白
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}").map_err(io_error)?;
        self.output.flush().map_err(io_error)?;

        let mut line = String::new();
        if self.input.read_line(&mut line).map_err(io_error)? == 0 {
            return Err(InputError::Closed.into());
        }
        let line = line.trim();
        if is_exit(line) {
            return Err(InputError::Exit.into());
        }
        Ok(line.to_string())
    }

    fn say(&mut self, message: impl fmt::Display) -> Result<()> {
        writeln!(self.output, "{message}").map_err(io_error)
    }
}

impl<R: BufRead, W: Write> Strategy for InteractiveStrategy<R, W> {
    fn choose_soldier_move(&mut self, board: &NeutronBoard, side: Side) -> Result<Move> {
        self.say(format_args!("You're moving a {} soldier.", side.color))?;
        loop {
            let text = self.prompt(POSITION_PROMPT)?;
            let Some(pos) = parse_position(&text) else {
                warn!(input = %text, "unreadable position");
                self.say(format_args!("The string {text} cannot be interpreted as position."))?;
                continue;
            };
            let Some(soldier) = board
                .soldiers_of(side.color)
                .into_iter()
                .find(|soldier| soldier.pos == pos)
            else {
                warn!(%pos, "not an own soldier");
                self.say("This is not a position of your soldier.")?;
                continue;
            };

            let text = self.prompt(DIRECTION_PROMPT)?;
            match parse_direction(&text).and_then(|dir| board.furthest_empty_spot(pos, dir)) {
                Some(to) => return Ok(Move { piece: soldier, to }),
                None => {
                    warn!(%pos, input = %text, "rejected direction");
                    self.say("You can't move in this direction.")?;
                }
            }
        }
    }

    fn choose_neutron_move(&mut self, board: &NeutronBoard, _side: Side) -> Result<Move> {
        self.say("You're moving the neutron.")?;
        let neutron = board.neutron();
        loop {
            let text = self.prompt(DIRECTION_PROMPT)?;
            match parse_direction(&text).and_then(|dir| board.furthest_empty_spot(neutron.pos, dir)) {
                Some(to) => return Ok(Move { piece: neutron, to }),
                None => {
                    warn!(input = %text, "rejected neutron direction");
                    self.say("You can't move in this direction.")?;
                }
            }
        }
    }
}

fn io_error(e: std::io::Error) -> Error {
    InputError::Io(e.to_string()).into()
}
