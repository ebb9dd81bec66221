//! Session controller: drives games, owns score and high score.

use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_config::GameRules;
use crate::io::{HighScoreError, HighScoreStore};
use crate::settings::MenuSelection;
use crate::simulation::{FrameView, Game, GameOver, TickReport};
use crate::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Running,
    Over(GameOver),
}

pub struct Session<S: HighScoreStore> {
    rules: GameRules,
    selection: MenuSelection,
    game: Game,
    phase: SessionPhase,
    high_score: u32,
    games_played: u32,
    store: S,
    rng: StdRng,
}

impl<S: HighScoreStore> Session<S> {
    /// Start the first game. The high score is read from `store`; a read failure counts as 0.
    pub fn new(rules: GameRules, selection: MenuSelection, store: S, mut rng: StdRng) -> Self {
        let high_score = store.load().unwrap_or_else(|e| {
            error!("{e}; starting from 0");
            0
        });
        let game = Game::with_speed(rules, selection.speed, &mut rng);
        info!(
            "session start: {}x{} grid, speed {}, high score {}",
            rules.grid.width(),
            rules.grid.height(),
            selection.speed.get(),
            high_score
        );
        Self {
            rules,
            selection,
            game,
            phase: SessionPhase::Running,
            high_score,
            games_played: 0,
            store,
            rng,
        }
    }

    /// Seeded from `seed`, or from entropy when `None`.
    pub fn with_seed(rules: GameRules, selection: MenuSelection, store: S, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rules, selection, store, rng)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn selection(&self) -> MenuSelection {
        self.selection
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.game.score()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Forward a direction key to the running game. Ignored once the game is over.
    pub fn steer(&mut self, dir: Direction) -> bool {
        match self.phase {
            SessionPhase::Running => self.game.steer(dir),
            SessionPhase::Over(_) => false,
        }
    }

    /// Feed one frame's elapsed time. On game over the high score is settled before returning.
    pub fn update(&mut self, dt: f32) -> Result<Option<TickReport>, GameOver> {
        if let SessionPhase::Over(over) = self.phase {
            return Err(over);
        }
        match self.game.update(dt, &mut self.rng) {
            Ok(report) => Ok(report),
            Err(over) => {
                self.end_game(over);
                Err(over)
            }
        }
    }

    fn end_game(&mut self, over: GameOver) {
        self.phase = SessionPhase::Over(over);
        self.games_played += 1;
        info!("Game Over! {over} (score {})", self.game.score());
        self.settle_high_score();
    }

    /// Raise and persist the high score if the current game beat it.
    fn settle_high_score(&mut self) {
        let score = self.game.score();
        if score > self.high_score {
            self.high_score = score;
            info!("new high score {score}");
            if let Err(e) = self.store.save(score) {
                error!("{e}");
            }
        }
    }

    /// Fresh snake, fruit and score; the high score carries over.
    pub fn restart(&mut self, selection: MenuSelection) {
        self.selection = selection;
        self.game = Game::with_speed(self.rules, selection.speed, &mut self.rng);
        self.phase = SessionPhase::Running;
        info!("new game: color {}, speed {}", selection.color.name(), selection.speed.get());
    }

    /// Called once when the program is done with all games. A game still
    /// running at this point counts toward the high score.
    pub fn shutdown(&mut self, reset_high_score: bool) -> Result<(), HighScoreError> {
        if self.phase == SessionPhase::Running {
            info!("quit mid-game with score {}", self.game.score());
            self.settle_high_score();
        }
        info!("Thanks for playing! Final High Score: {}", self.high_score);
        if reset_high_score {
            self.store.save(0)?;
        }
        Ok(())
    }

    pub fn view(&self) -> FrameView {
        self.game.view(self.high_score)
    }
}
