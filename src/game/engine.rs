use log::{debug, error, info, trace, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{
    action::Direction,
    config::{GameConfig, TailPolicy},
    error::{ConfigError, StateError},
    state::{GameOverReason, GameState, Phase, Position, Snake},
};
use crate::storage::{HIGH_SCORE_KEY, ScoreStore};

/// Random draws tried before falling back to scanning the free cells
const MAX_SAMPLE_ATTEMPTS: usize = 64;

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was not running; nothing changed
    Skipped,
    /// The snake moved without eating
    Moved,
    /// The snake ate and grew; carries the new score
    Ate { score: u32 },
    /// The game ended on this tick
    Ended(GameOverReason),
}

/// Owns the game state and applies every rule to it.
///
/// The engine never schedules itself: a driver calls [`GameEngine::tick`]
/// at a fixed period while the game is running, and all operations are
/// expected to arrive serialized on one control path.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    /// Direction of the last executed move
    heading: Direction,
    rng: StdRng,
    store: Box<dyn ScoreStore>,
}

impl GameEngine {
    /// Create an idle engine, reading the high score once from `store`
    pub fn new(config: GameConfig, store: Box<dyn ScoreStore>) -> Result<Self, ConfigError> {
        config.validate()?;

        let high_score = match store.get(HIGH_SCORE_KEY) {
            Ok(saved) => saved.unwrap_or(0),
            Err(e) => {
                warn!("Could not read saved high score, starting from 0: {e}");
                0
            }
        };

        let mut rng = make_rng(&config);
        let mut state = initial_state(&config, &mut rng);
        state.high_score = high_score;
        debug!(
            "Engine ready: board {}x{}, high score {}",
            config.board_size, config.board_size, high_score
        );

        Ok(Self {
            heading: state.direction,
            config,
            state,
            rng,
            store,
        })
    }

    /// Create an engine around a prepared state.
    ///
    /// The state's high score is kept as is; the store is only written to.
    /// The snake and food must lie on the configured board, and the food must
    /// not sit on the snake unless the snake already fills the board.
    pub fn from_state(
        config: GameConfig,
        mut state: GameState,
        store: Box<dyn ScoreStore>,
    ) -> Result<Self, StateError> {
        config.validate()?;
        state.board_size = config.board_size;

        if let Some(&cell) = state.snake.cells().iter().find(|c| !state.is_in_bounds(**c)) {
            return Err(StateError::SnakeOffBoard(cell));
        }
        if state.snake.len() < config.cell_count() {
            if !state.is_in_bounds(state.food) {
                return Err(StateError::FoodOffBoard(state.food));
            }
            if state.snake.contains(state.food) {
                return Err(StateError::FoodOnSnake(state.food));
            }
        }

        Ok(Self {
            heading: state.direction,
            rng: make_rng(&config),
            config,
            state,
            store,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn store(&self) -> &dyn ScoreStore {
        self.store.as_ref()
    }

    /// Queue a direction for the next tick.
    ///
    /// Ignored unless the game is running. A reversal is rejected against the
    /// queued direction and against the heading of the last move, so two turns
    /// between ticks cannot fold the snake onto its neck.
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.state.is_playing {
            trace!("Ignoring {direction:?}: game not running");
            return;
        }

        if direction.is_opposite(self.state.direction) || direction.is_opposite(self.heading) {
            trace!("Ignoring reversal to {direction:?}");
            return;
        }

        self.state.direction = direction;
    }

    /// Advance the game by one step
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_playing || self.state.is_game_over {
            return TickOutcome::Skipped;
        }

        let direction = self.state.direction;
        let new_head = self.state.snake.head().moved_in_direction(direction);

        if !self.state.is_in_bounds(new_head) {
            return self.end_game(GameOverReason::Wall);
        }

        let eats = new_head == self.state.food;
        if self.hits_body(new_head, eats) {
            return self.end_game(GameOverReason::SelfCollision);
        }

        self.state.snake.advance(new_head, eats);
        self.heading = direction;

        if !eats {
            return TickOutcome::Moved;
        }

        self.state.score += self.config.food_points;
        if self.state.score > self.state.high_score {
            self.state.high_score = self.state.score;
            self.persist_high_score();
        }

        match place_food(&mut self.rng, &self.state.snake, self.config.board_size) {
            Some(food) => self.state.food = food,
            None => return self.end_game(GameOverReason::BoardFull),
        }

        TickOutcome::Ate {
            score: self.state.score,
        }
    }

    /// Start playing; a finished game is reset first
    pub fn start(&mut self) {
        if self.state.is_game_over {
            self.reset();
        }
        self.state.is_playing = true;
        debug!("Game running");
    }

    pub fn pause(&mut self) {
        self.state.is_playing = false;
        debug!("Game paused");
    }

    /// Pause while running, start otherwise
    pub fn toggle_pause(&mut self) {
        if self.state.is_playing {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Back to a fresh idle game. The high score survives.
    pub fn reset(&mut self) {
        let high_score = self.state.high_score;
        self.state = initial_state(&self.config, &mut self.rng);
        self.state.high_score = high_score;
        self.heading = self.state.direction;
        debug!("Game reset");
    }

    fn hits_body(&self, pos: Position, eats: bool) -> bool {
        let cells = self.state.snake.cells();
        match self.config.tail_policy {
            TailPolicy::Strict => cells.contains(&pos),
            // The tail only stays put when the snake grows
            TailPolicy::Vacating if eats => cells.contains(&pos),
            TailPolicy::Vacating => cells[..cells.len() - 1].contains(&pos),
        }
    }

    fn end_game(&mut self, reason: GameOverReason) -> TickOutcome {
        self.state.is_game_over = true;
        self.state.is_playing = false;
        self.state.game_over_reason = Some(reason);
        info!(
            "Game over ({reason:?}): score {}, high score {}",
            self.state.score, self.state.high_score
        );
        TickOutcome::Ended(reason)
    }

    fn persist_high_score(&mut self) {
        let score = self.state.high_score;
        info!("New high score: {score}");
        if let Err(e) = self.store.set(HIGH_SCORE_KEY, score) {
            error!("Failed to save high score {score}: {e}");
        }
    }
}

fn make_rng(config: &GameConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn initial_state(config: &GameConfig, rng: &mut StdRng) -> GameState {
    let center = (config.board_size / 2) as i32;
    let snake = Snake::new(Position::new(center, center));
    // A validated board has at least three cells besides the head
    let food = place_food(rng, &snake, config.board_size).unwrap_or(Position::new(0, 0));

    GameState::new(snake, food, Direction::Right, config.board_size)
}

/// Pick a uniformly random cell not covered by the snake.
///
/// Returns `None` once the snake fills the whole board.
fn place_food<R: Rng>(rng: &mut R, snake: &Snake, board_size: usize) -> Option<Position> {
    if snake.len() >= board_size * board_size {
        return None;
    }

    let size = board_size as i32;
    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let pos = Position::new(rng.gen_range(0..size), rng.gen_range(0..size));
        if !snake.contains(pos) {
            return Some(pos);
        }
    }

    let free: Vec<Position> = (0..size)
        .flat_map(|y| (0..size).map(move |x| Position::new(x, y)))
        .filter(|pos| !snake.contains(*pos))
        .collect();
    free.choose(rng).copied()
}
