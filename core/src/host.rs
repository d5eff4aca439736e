use crate::*;

/// Window, input and drawing side of the game, supplied by the embedding application.
pub trait Frontend {
    type Error;

    /// Samples input for the next frame. `None` closes the loop.
    fn poll_input(&mut self) -> core::result::Result<Option<FrameInput>, Self::Error>;

    fn draw(&mut self, snapshot: &Snapshot) -> core::result::Result<(), Self::Error>;
}

/// Drives `session` one tick per frame until the frontend stops producing input.
///
/// The board is drawn once before the first frame. Returns the number of frames processed.
pub fn run<G, F>(session: &mut Session<G>, frontend: &mut F) -> core::result::Result<u32, F::Error>
where
    G: MineGenerator,
    F: Frontend,
{
    frontend.draw(&session.snapshot())?;

    let mut frames = 0;
    while let Some(input) = frontend.poll_input()? {
        let outcome = session.tick(&input);
        if outcome.has_update() {
            log::debug!("Frame {}: {:?}", frames, outcome);
        }
        frontend.draw(&session.snapshot())?;
        frames += 1;
    }

    log::debug!("Frontend closed after {} frames", frames);
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::VecDeque;
    use alloc::vec::Vec;

    struct Scripted {
        inputs: VecDeque<FrameInput>,
        drawn: Vec<Snapshot>,
    }

    impl Frontend for Scripted {
        type Error = core::convert::Infallible;

        fn poll_input(&mut self) -> core::result::Result<Option<FrameInput>, Self::Error> {
            Ok(self.inputs.pop_front())
        }

        fn draw(&mut self, snapshot: &Snapshot) -> core::result::Result<(), Self::Error> {
            self.drawn.push(snapshot.clone());
            Ok(())
        }
    }

    struct Broken;

    impl Frontend for Broken {
        type Error = &'static str;

        fn poll_input(&mut self) -> core::result::Result<Option<FrameInput>, Self::Error> {
            Err("input device gone")
        }

        fn draw(&mut self, _snapshot: &Snapshot) -> core::result::Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn draws_once_per_frame_plus_initial() {
        let layout = FixedLayout::from_mine_coords((3, 3), &[(2, 2)]).unwrap();
        let mut session = Session::new(layout.game_config(), layout).unwrap().with_cell_size(10);
        let mut frontend = Scripted {
            inputs: VecDeque::from([
                FrameInput::hover((5, 5)),
                FrameInput::release((5, 5), PointerButtons::PRIMARY),
                FrameInput::release((25, 25), PointerButtons::SECONDARY),
            ]),
            drawn: Vec::new(),
        };

        let frames = run(&mut session, &mut frontend).unwrap();

        assert_eq!(frames, 3);
        assert_eq!(frontend.drawn.len(), 4);
        assert_eq!(frontend.drawn[0].cell_at((0, 0)), CellView::Hidden);
        assert_eq!(frontend.drawn[2].cell_at((0, 0)), CellView::Revealed(0));
        assert_eq!(frontend.drawn[3].status, GameStatus::Won);
    }

    #[test]
    fn frontend_errors_stop_the_loop() {
        let mut session = Session::seeded(GameConfig::CLASSIC, 1).unwrap();
        assert_eq!(run(&mut session, &mut Broken), Err("input device gone"));
    }
}
