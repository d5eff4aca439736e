use sweeper_core::{BoardLayout, Coord2, FrameInput, Pixel, PointerButtons};
use thiserror::Error;

pub(crate) const HELP: &str = "\
commands:
  r X Y               reveal the cell at column X, row Y
  f X Y               toggle the flag at column X, row Y
  click PX PY [BTN]   click a pixel, BTN is left (default) or right
  h PX PY             move the pointer without clicking
  n                   press the restart button
  q                   quit
  (empty line)        wait one frame";

#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("Unknown command {0:?}, type ? for help")]
    Unknown(String),
    #[error("{command} expects {expected} arguments")]
    Arity {
        command: &'static str,
        expected: &'static str,
    },
    #[error("Invalid number {0:?}")]
    InvalidNumber(String),
    #[error("Unknown button {0:?}, expected left or right")]
    UnknownButton(String),
    #[error("Cell {0:?} is off the board")]
    OutOfBounds(Coord2),
}

/// One line of player input, turned into one frame of pointer input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Click {
        pixel: Pixel,
        button: PointerButtons,
    },
    Hover(Pixel),
    Restart,
    Idle,
    Help,
    Quit,
}

impl Command {
    pub(crate) fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(Self::Idle);
        };
        let args: Vec<&str> = words.collect();

        Ok(match name.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Self::Reveal(parse_pair("reveal", &args)?),
            "f" | "flag" => Self::Flag(parse_pair("flag", &args)?),
            "h" | "hover" => Self::Hover(parse_pair("hover", &args)?),
            "c" | "click" => {
                let (pixel, button) = match args.as_slice() {
                    [x, y] => ((*x, *y), "left"),
                    [x, y, button] => ((*x, *y), *button),
                    _ => {
                        return Err(CommandError::Arity {
                            command: "click",
                            expected: "2 or 3",
                        });
                    }
                };
                Self::Click {
                    pixel: (parse_number(pixel.0)?, parse_number(pixel.1)?),
                    button: parse_button(button)?,
                }
            }
            "n" | "new" | "restart" => Self::Restart,
            "?" | "help" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(name.to_string())),
        })
    }

    /// Pointer input for this command. `pointer` is where the previous frame left it.
    ///
    /// `Ok(None)` ends the game loop. Cell commands outside the board are rejected, since their
    /// pixel could land on the restart button.
    pub(crate) fn to_frame(
        self,
        layout: &BoardLayout,
        pointer: Pixel,
    ) -> Result<Option<FrameInput>, CommandError> {
        Ok(Some(match self {
            Self::Reveal(coords) => {
                let pixel = cell_pixel(layout, coords)?;
                FrameInput::release(pixel, PointerButtons::PRIMARY)
            }
            Self::Flag(coords) => {
                let pixel = cell_pixel(layout, coords)?;
                FrameInput::release(pixel, PointerButtons::SECONDARY)
            }
            Self::Click { pixel, button } => FrameInput::release(pixel, button),
            Self::Hover(pixel) => FrameInput::hover(pixel),
            Self::Restart => FrameInput::release(layout.restart_center(), PointerButtons::PRIMARY),
            Self::Idle | Self::Help => FrameInput::hover(pointer),
            Self::Quit => return Ok(None),
        }))
    }
}

fn cell_pixel(layout: &BoardLayout, coords: Coord2) -> Result<Pixel, CommandError> {
    let (width, height) = layout.size();
    if coords.0 >= width || coords.1 >= height {
        return Err(CommandError::OutOfBounds(coords));
    }
    Ok(layout.cell_center(coords))
}

fn parse_pair<T: core::str::FromStr>(
    command: &'static str,
    args: &[&str],
) -> Result<(T, T), CommandError> {
    match args {
        [x, y] => Ok((parse_number(x)?, parse_number(y)?)),
        _ => Err(CommandError::Arity {
            command,
            expected: "2",
        }),
    }
}

fn parse_number<T: core::str::FromStr>(word: &str) -> Result<T, CommandError> {
    word.parse()
        .map_err(|_| CommandError::InvalidNumber(word.to_string()))
}

fn parse_button(word: &str) -> Result<PointerButtons, CommandError> {
    match word.to_ascii_lowercase().as_str() {
        "left" | "l" | "primary" => Ok(PointerButtons::PRIMARY),
        "right" | "r" | "secondary" => Ok(PointerButtons::SECONDARY),
        _ => Err(CommandError::UnknownButton(word.to_string())),
    }
}
