use std::sync::Arc;

use duel_content::ContentFactory;
use duel_core::{
    Bomb, BombId, DeathCause, Direction, GameConfig, GameState, MatchStatus, PlayerId, Position,
    RawCommand,
};
use duel_runtime::{
    Event, IdleProvider, MatchEvent, Runtime, RuntimeConfig, RuntimeError, ScriptedProvider, Topic,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// P2 stands next to a P1 bomb that goes off this turn.
fn doomed_p2() -> GameState {
    let mut state = GameState::open_floor(7, 5);
    state
        .bombs
        .push(Bomb::new(BombId(1), PlayerId::P1, Position::new(5, 4), 1, 1));
    state.next_bomb_id = 2;
    state
}

#[tokio::test]
async fn scripted_match_reports_and_ends() {
    init_tracing();
    let mut runtime = Runtime::builder()
        .initial_state(doomed_p2())
        .provider(
            PlayerId::P1,
            ScriptedProvider::new([RawCommand::from_moves(&[Direction::Right])]),
        )
        .provider(PlayerId::P2, IdleProvider)
        .build()
        .expect("runtime should build");

    let mut turns = runtime.subscribe(Topic::Turn);
    let mut lifecycle = runtime.subscribe(Topic::Match);
    let opening = runtime.current();

    let status = runtime.run(10).await.expect("match should run");
    assert_eq!(status, MatchStatus::P1Win);
    assert_eq!(runtime.command_log().len(), 1);

    match turns.recv().await.expect("turn event") {
        Event::TurnResolved(event) => {
            assert_eq!(event.turn, 1);
            assert_eq!(event.report.died(PlayerId::P2), Some(DeathCause::Blast));
            assert_eq!(event.state_root, runtime.current().state_root());
        }
        other => panic!("unexpected event {other:?}"),
    }
    match lifecycle.recv().await.expect("match event") {
        Event::Match(MatchEvent::Ended { status, turn, .. }) => {
            assert_eq!(status, MatchStatus::P1Win);
            assert_eq!(turn, 1);
        }
        other => panic!("unexpected event {other:?}"),
    }

    // Earlier snapshots are untouched by later turns.
    assert_eq!(opening.player(PlayerId::P1).position, Position::new(1, 1));
    assert!(Arc::ptr_eq(&opening, &runtime.snapshot(1).unwrap()));
    assert_eq!(
        runtime.snapshot(2).unwrap().player(PlayerId::P1).position,
        Position::new(2, 1)
    );
}

#[tokio::test]
async fn finished_match_rejects_more_turns() {
    let mut runtime = Runtime::builder()
        .initial_state(doomed_p2())
        .build()
        .unwrap();
    runtime
        .submit_turn(RawCommand::idle(), RawCommand::idle())
        .unwrap();

    let err = runtime
        .submit_turn(RawCommand::idle(), RawCommand::idle())
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::MatchFinished {
            status: MatchStatus::P1Win
        }
    ));
    assert_eq!(runtime.command_log().len(), 1);
    assert!(matches!(
        runtime.step().await,
        Err(RuntimeError::MatchFinished { .. })
    ));
}

#[tokio::test]
async fn missing_provider_is_reported() {
    let mut runtime = Runtime::builder()
        .provider(PlayerId::P1, IdleProvider)
        .build()
        .unwrap();
    assert!(matches!(
        runtime.step().await,
        Err(RuntimeError::ProviderNotSet {
            player: PlayerId::P2
        })
    ));
    assert!(runtime.command_log().is_empty());
}

#[tokio::test]
async fn idle_players_are_swallowed_by_the_shrinking_board() {
    init_tracing();
    let mut runtime = Runtime::builder()
        .config(RuntimeConfig {
            game_config: GameConfig::with_seed(1234),
            ..RuntimeConfig::default()
        })
        .provider(PlayerId::P1, IdleProvider)
        .provider(PlayerId::P2, IdleProvider)
        .build()
        .unwrap();

    let status = runtime.run(40).await.unwrap();

    // Spawns sit on ring 1, which turns to void when turn 18 resolves.
    assert_eq!(status, MatchStatus::Draw);
    assert_eq!(runtime.reports().len(), 18);
    let last = runtime.reports().last().unwrap();
    assert_eq!(last.shrink_layer, 2);
    assert_eq!(last.died(PlayerId::P1), Some(DeathCause::Void));
    assert_eq!(last.died(PlayerId::P2), Some(DeathCause::Void));
    runtime.verify().expect("own history replays");
}

#[tokio::test]
async fn replays_match_command_log() {
    let script = [
        RawCommand::from_moves(&[Direction::Down]).with_bomb_at(0),
        RawCommand::from_moves(&[Direction::Down, Direction::Down]),
        RawCommand::idle(),
    ];
    let build = || {
        Runtime::builder()
            .provider(PlayerId::P1, ScriptedProvider::new(script.clone()))
            .provider(PlayerId::P2, IdleProvider)
            .build()
            .unwrap()
    };

    let mut a = build();
    let mut b = build();
    a.run(3).await.unwrap();
    b.run(3).await.unwrap();

    assert_eq!(a.state_roots(), b.state_roots());
    assert_eq!(a.commands_root(), b.commands_root());
    a.verify().unwrap();

    let replayed = duel_runtime::replay(&a.initial(), a.command_log());
    assert_eq!(replayed.last(), Some(&*a.current()));
}

#[test]
fn unknown_turns_are_errors() {
    let runtime = Runtime::builder().build().unwrap();
    assert!(runtime.snapshot(1).is_ok());
    assert!(matches!(runtime.snapshot(2), Err(RuntimeError::UnknownTurn(2))));
    assert!(matches!(runtime.snapshot(0), Err(RuntimeError::UnknownTurn(0))));
}

#[test]
fn builds_from_content_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "seed = 99\nboard_size = 9\n").unwrap();
    std::fs::create_dir(dir.path().join("scenarios")).unwrap();
    std::fs::write(
        dir.path().join("scenarios").join("kick.ron"),
        "ScenarioSpec(size: 7, p1: (position: (1, 1), kick: true), p2: (position: (5, 5)), \
         bombs: [(owner: P2, position: (2, 1), timer: 2)])",
    )
    .unwrap();

    let factory = ContentFactory::new(dir.path());
    let config = RuntimeConfig::from_content(&factory).unwrap();
    assert_eq!(config.game_config.board_size, 9);

    let generated = Runtime::builder().config(config.clone()).build().unwrap();
    assert_eq!(generated.current().board.size(), 9);

    let mut staged = Runtime::builder()
        .config(config)
        .scenario(&factory, "kick")
        .unwrap()
        .build()
        .unwrap();
    let next = staged
        .submit_turn(
            RawCommand::from_moves(&[Direction::Right]),
            RawCommand::idle(),
        )
        .unwrap();
    assert_eq!(next.bombs[0].position, Position::new(3, 1));

    assert!(matches!(
        Runtime::builder().scenario(&factory, "missing"),
        Err(RuntimeError::Content(_))
    ));
}
