use bevy::prelude::*;
use clap::Parser;
use log::{error, info};

use fruitsnake::camera::{setup_camera, CameraState};
use fruitsnake::cell_renderer::{render_cells, spawn_board, BoardView, CellRenderConfig};
use fruitsnake::start_screen::{
    cleanup_start_screen, handle_start_screen_input, setup_start_screen, update_start_screen_ui, GameState,
    MenuState, PendingSelection,
};
use fruitsnake::ui::{cleanup_game_over_screen, hide_hud, setup_game_over_screen, setup_ui, show_hud, update_ui, UiState};
use fruitsnake::{Config, Direction, GameRules, HighScoreFile, Menu, Session, SpeedLevel};

#[derive(Parser)]
#[command(name = "fruitsnake", about = "Grid snake with a bonus fruit")]
struct Cli {
    /// TOML config file (defaults to ./fruitsnake.toml)
    #[arg(long)]
    config: Option<String>,
    /// Random seed; overrides the config file
    #[arg(long)]
    seed: Option<u64>,
    /// Where the high score is kept; overrides the config file
    #[arg(long)]
    high_score_file: Option<String>,
    /// Initial speed level on the start screen
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    speed: Option<u8>,
}

/// Loaded configuration plus the rules derived from it
#[derive(Resource)]
struct Settings {
    config: Config,
    rules: GameRules,
}

/// The running session; created on the first Enter at the start screen
#[derive(Resource, Default)]
struct ActiveSession(Option<Session<HighScoreFile>>);

/// Create the session on first start, restart it afterwards
fn on_enter_playing(
    settings: Res<Settings>,
    pending: Res<PendingSelection>,
    mut active: ResMut<ActiveSession>,
    mut board: ResMut<BoardView>,
) {
    let selection = pending.0;
    match active.0.as_mut() {
        Some(session) => session.restart(selection),
        None => {
            active.0 = Some(Session::with_seed(
                settings.rules,
                selection,
                HighScoreFile::new(&settings.config.high_score_path),
                settings.config.seed,
            ));
        }
    }
    let Some(session) = active.0.as_ref() else {
        return;
    };
    board.snake_color = selection.color;
    board.frame = Some(session.view());
}

fn handle_direction_input(keyboard_input: Res<ButtonInput<KeyCode>>, mut active: ResMut<ActiveSession>) {
    let Some(session) = active.0.as_mut() else {
        return;
    };
    let keys = [
        (KeyCode::ArrowUp, KeyCode::KeyW, Direction::Up),
        (KeyCode::ArrowDown, KeyCode::KeyS, Direction::Down),
        (KeyCode::ArrowLeft, KeyCode::KeyA, Direction::Left),
        (KeyCode::ArrowRight, KeyCode::KeyD, Direction::Right),
    ];
    for (arrow, letter, dir) in keys {
        if keyboard_input.just_pressed(arrow) || keyboard_input.just_pressed(letter) {
            session.steer(dir);
        }
    }
}

fn update_simulation(
    time: Res<Time>,
    mut active: ResMut<ActiveSession>,
    mut board: ResMut<BoardView>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(session) = active.0.as_mut() else {
        return;
    };
    match session.update(time.delta_secs()) {
        Ok(None) => return,
        Ok(Some(_)) => {}
        Err(_) => next_state.set(GameState::GameOver),
    }
    board.frame = Some(session.view());
}

fn handle_play_again(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut app_exit_events: EventWriter<AppExit>,
) {
    if keyboard_input.just_pressed(KeyCode::KeyY) {
        next_state.set(GameState::StartScreen);
    } else if keyboard_input.just_pressed(KeyCode::KeyN) || keyboard_input.just_pressed(KeyCode::Escape) {
        app_exit_events.send(AppExit::Success);
    }
}

fn quit_on_escape(keyboard_input: Res<ButtonInput<KeyCode>>, mut app_exit_events: EventWriter<AppExit>) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        app_exit_events.send(AppExit::Success);
    }
}

fn clear_board(mut board: ResMut<BoardView>) {
    board.frame = None;
}

/// Runs once on the way out, whichever way the app is closed
fn finish_session(
    mut exit_events: EventReader<AppExit>,
    settings: Res<Settings>,
    mut active: ResMut<ActiveSession>,
) {
    if exit_events.read().next().is_none() {
        return;
    }
    if let Some(mut session) = active.0.take() {
        if let Err(e) = session.shutdown(settings.config.reset_high_score_on_exit) {
            error!("{e}");
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref());
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(path) = cli.high_score_file {
        config.high_score_path = path;
    }
    if let Some(speed) = cli.speed {
        config.speed_level = speed;
    }

    let rules = match GameRules::from_config(&config) {
        Ok(rules) => rules,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(2);
        }
    };
    let camera_state = CameraState::new(config.tile_size, rules.grid);
    let window_size = camera_state.board_size();
    let menu = Menu::new(SpeedLevel::new(config.speed_level));
    info!("high score file: {}", config.high_score_path);

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Snake Game".into(),
                        resolution: (window_size.x, window_size.y).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .disable::<bevy::log::LogPlugin>(),
        )
        .init_state::<GameState>()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(camera_state)
        .insert_resource(MenuState { menu })
        .insert_resource(Settings { config, rules })
        .init_resource::<PendingSelection>()
        .init_resource::<ActiveSession>()
        .init_resource::<BoardView>()
        .init_resource::<CellRenderConfig>()
        .init_resource::<UiState>()
        .add_systems(Startup, (setup_camera, setup_ui, spawn_board))
        .add_systems(OnEnter(GameState::StartScreen), (setup_start_screen, hide_hud, clear_board))
        .add_systems(OnExit(GameState::StartScreen), cleanup_start_screen)
        .add_systems(
            Update,
            (
                handle_start_screen_input,
                update_start_screen_ui.after(handle_start_screen_input),
            )
                .run_if(in_state(GameState::StartScreen)),
        )
        .add_systems(OnEnter(GameState::Playing), (on_enter_playing, show_hud))
        .add_systems(
            Update,
            (
                handle_direction_input,
                update_simulation.after(handle_direction_input),
                quit_on_escape,
            )
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(OnEnter(GameState::GameOver), setup_game_over_screen)
        .add_systems(OnExit(GameState::GameOver), cleanup_game_over_screen)
        .add_systems(Update, handle_play_again.run_if(in_state(GameState::GameOver)))
        .add_systems(PostUpdate, (render_cells, update_ui))
        .add_systems(Last, finish_session)
        .run();
}
