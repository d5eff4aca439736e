use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use sweeper_core::{
    BoardLayout, CellView, Face, FrameInput, Frontend, GameStatus, Pixel, Snapshot,
};
use thiserror::Error;

use crate::command::{Command, CommandError, HELP};

#[derive(Error, Debug)]
pub(crate) enum TerminalError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("Could not encode snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Line-based frontend: every input line is one frame, every frame prints the board.
pub(crate) struct Terminal<R, W> {
    input: R,
    output: W,
    layout: BoardLayout,
    pointer: Pixel,
    json: bool,
    line: String,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub(crate) fn new(input: R, output: W, layout: BoardLayout, json: bool) -> Self {
        Self {
            input,
            output,
            layout,
            pointer: (-1, -1),
            json,
            line: String::new(),
        }
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Text for the player. The output stream carries only snapshots in JSON mode.
    fn notice(&mut self, text: &str) -> io::Result<()> {
        if self.json {
            log::warn!("{}", text);
            Ok(())
        } else {
            writeln!(self.output, "{text}")
        }
    }

    fn reject(&mut self, err: CommandError) -> io::Result<()> {
        log::debug!("Rejected input {:?}: {}", self.line.trim_end(), err);
        self.notice(&err.to_string())
    }
}

impl<R: BufRead, W: Write> Frontend for Terminal<R, W> {
    type Error = TerminalError;

    fn poll_input(&mut self) -> Result<Option<FrameInput>, Self::Error> {
        loop {
            if !self.json {
                write!(self.output, "> ")?;
                self.output.flush()?;
            }

            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }

            match Command::parse(&self.line) {
                Ok(Command::Help) => self.notice(HELP)?,
                Ok(command) => match command.to_frame(&self.layout, self.pointer) {
                    Ok(frame) => {
                        if let Some(frame) = frame {
                            self.pointer = frame.pointer;
                        }
                        return Ok(frame);
                    }
                    Err(err) => self.reject(err)?,
                },
                Err(err) => self.reject(err)?,
            }
        }
    }

    fn draw(&mut self, snapshot: &Snapshot) -> Result<(), Self::Error> {
        if self.json {
            serde_json::to_writer(&mut self.output, snapshot)?;
            writeln!(self.output)?;
        } else {
            write!(self.output, "{}", render(snapshot))?;
        }
        self.output.flush()?;
        Ok(())
    }
}

fn cell_glyph(view: CellView) -> char {
    match view {
        CellView::Hidden => '#',
        CellView::Flagged => 'F',
        CellView::Revealed(0) => '.',
        CellView::Revealed(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        CellView::Mine => 'B',
        CellView::Exploded => '*',
        CellView::Misflagged => 'X',
    }
}

fn face_text(face: Face) -> &'static str {
    match face {
        Face::Smile => ":)",
        Face::Surprised => ":O",
        Face::Dead => "x(",
    }
}

/// Text picture of the board, column numbers on top and row numbers on the left.
pub(crate) fn render(snapshot: &Snapshot) -> String {
    let (width, height) = snapshot.size;
    let mut out = String::new();

    out.push_str("    ");
    for x in 0..width {
        let _ = write!(out, "{:>3}", x);
    }
    out.push('\n');

    for y in 0..height {
        let _ = write!(out, "{:>3} ", y);
        for x in 0..width {
            let _ = write!(out, "{:>3}", cell_glyph(snapshot.cell_at((x, y))));
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "Flags: {}  [{}]",
        snapshot.flags_remaining,
        face_text(snapshot.face)
    );
    match snapshot.status {
        GameStatus::Playing => {}
        GameStatus::Won => out.push_str("You Won!\n"),
        GameStatus::Lost => out.push_str("Game Over!\n"),
    }
    out
}
