use sweeper_core::*;

fn fixed(size: Coord2, mines: &[Coord2]) -> Session<FixedLayout> {
    let layout = FixedLayout::from_mine_coords(size, mines).unwrap();
    Session::new(layout.game_config(), layout).unwrap()
}

fn click(
    session: &mut Session<FixedLayout>,
    coords: Coord2,
    button: PointerButtons,
) -> TickOutcome {
    let pixel = session.layout().cell_center(coords);
    session.tick(&FrameInput::hold(pixel, button));
    session.tick(&FrameInput::release(pixel, button))
}

#[test]
fn flag_the_known_mine_to_win() {
    let mut session = fixed((3, 3), &[(2, 1)]);

    assert_eq!(
        click(&mut session, (2, 1), PointerButtons::SECONDARY),
        TickOutcome::Flag(FlagOutcome::Won)
    );
    assert_eq!(session.snapshot().status, GameStatus::Won);
}

#[test]
fn flag_a_safe_cell_keeps_playing() {
    let mut session = fixed((3, 3), &[(2, 1)]);

    click(&mut session, (0, 0), PointerButtons::SECONDARY);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.status, GameStatus::Playing);
    assert_eq!(snapshot.flags_remaining, 0);
}

#[test]
fn mine_before_flag_loses_for_good() {
    let mut session = fixed((3, 3), &[(2, 1)]);

    assert_eq!(
        click(&mut session, (2, 1), PointerButtons::PRIMARY),
        TickOutcome::Reveal(RevealOutcome::HitMine)
    );
    assert_eq!(
        click(&mut session, (2, 1), PointerButtons::SECONDARY),
        TickOutcome::Idle
    );
    assert_eq!(session.state().correct_flags(), 0);
    assert_eq!(session.snapshot().status, GameStatus::Lost);
    assert_eq!(session.snapshot().cell_at((2, 1)), CellView::Exploded);
}

#[test]
fn every_policy_keeps_the_board_consistent() {
    for policy in RevealPolicy::ALL {
        for seed in 0..20 {
            let config = GameConfig::new((16, 12), 3).unwrap();
            let mut session = Session::seeded(config, seed).unwrap().with_policy(policy);
            let (w, h) = session.grid().size();

            'board: for x in 0..w {
                for y in 0..h {
                    if session.grid()[(x, y)].is_mine() {
                        continue;
                    }
                    session.on_primary_release((x, y));
                    if session.status().is_finished() {
                        break 'board;
                    }
                }
            }

            for (coords, cell) in session.grid().iter() {
                assert!(!(cell.is_flagged() && cell.is_revealed()), "{policy:?} {coords:?}");
                if !cell.is_mine() {
                    assert!(cell.is_revealed(), "{policy:?} seed {seed} left {coords:?} closed");
                }
            }
            assert!(session.grid().iter().all(|(_, cell)| !(cell.is_mine() && cell.is_revealed())));
        }
    }
}

#[test]
fn seeded_sessions_replay_identically() {
    let config = GameConfig::CLASSIC;
    let mut first = Session::seeded(config, 1234).unwrap();
    let mut second = Session::seeded(config, 1234).unwrap();

    assert_eq!(first.grid(), second.grid());
    first.on_reset().unwrap();
    second.on_reset().unwrap();
    assert_eq!(first.grid(), second.grid());
}
