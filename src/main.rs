//! Coin Dash headless runner
//!
//! Plays a level without a renderer: intents come from a script of
//! `L`/`R`/`U`/`D` characters, each pressed once and held until the step
//! lands. Useful for checking levels and tuning.
//!
//! Usage: `coin-dash [level.json] [script] [config.json]`

use coin_dash::consts::SIM_DT;
use coin_dash::sim::{Direction, GameEvent, GameState, Level, TickInput, tick};
use coin_dash::{GameConfig, Result};

/// Ticks to let the world run after the script is exhausted
const SETTLE_TICKS: u32 = 60;

const DEMO_LEVEL: &str = include_str!("../levels/demo.json");

fn parse_script(script: &str) -> Vec<Direction> {
    script
        .chars()
        .filter_map(|c| match c.to_ascii_uppercase() {
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            _ => None,
        })
        .collect()
}

fn report_events(state: &mut GameState) {
    for event in state.drain_events() {
        match event {
            GameEvent::MoveStarted { .. } => {}
            GameEvent::GameOver => println!("GAME OVER"),
            other => println!("  {:?}", other),
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let level = match args.first() {
        Some(path) => Level::load_file(path)?,
        None => Level::from_json(DEMO_LEVEL)?,
    };
    let script = parse_script(args.get(1).map(String::as_str).unwrap_or("LRRLDUU"));
    let config = match args.get(2) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let mut state = GameState::new(&level, config);
    println!("{}", state.session.hud());

    for direction in script {
        if state.session.is_game_over() {
            break;
        }
        tick(&mut state, &TickInput::pressed(direction), SIM_DT);
        while state.player.is_moving() {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        report_events(&mut state);
        println!("{:?} -> {}  {}", direction, state.player.position(), state.session.hud());
    }

    for _ in 0..SETTLE_TICKS {
        tick(&mut state, &TickInput::default(), SIM_DT);
    }
    report_events(&mut state);
    println!("{}", state.session.hud());

    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Coin Dash (headless) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
