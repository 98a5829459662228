//! Session module - one play-through from spawn to GameOver/Victory.
//!
//! Ties together the snake, the food set, pacing and the food color, and runs
//! the state machine:
//!
//! ```text
//! Playing --pause--> Paused --pause/confirm--> Playing
//! Playing --collision--> GameOver --confirm--> Playing (fresh session)
//! Playing --length reached--> Victory --confirm--> Playing (fresh session)
//! ```
//!
//! Each terminal transition reports the final score to the [`ScoreRecorder`]
//! exactly once.

use tracing::{debug, info};

use crate::color::{select_food_color, SnakeColors};
use crate::config::{ConfigError, GameConfig};
use crate::food::{target_food_count, FoodSet};
use crate::pacing::{HeldKeys, PaceController};
use crate::ports::{ColorProvider, ScoreRecorder};
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::snapshot::SessionSnapshot;
use crate::types::*;

/// What ended a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    Wall,
    SelfBody,
}

/// Result of one tick-advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickOutcome {
    /// Constant-length move.
    Moved,
    /// Food eaten; the snake grew by one.
    Ate,
    GameOver(Collision),
    Victory,
}

/// Requests a session makes of its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionCommand {
    ExitToMenu,
    ToggleFullscreen,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    colors: SnakeColors,
    rng: SimpleRng,
    snake: Snake,
    /// Applied on the next tick.
    direction: Direction,
    /// Set by input, committed into `direction` at the start of a tick.
    pending_direction: Direction,
    food: FoodSet,
    food_color: Rgb,
    status: GameStatus,
    score: u32,
    held: HeldKeys,
    pace: PaceController,
    /// Play time accumulated while Playing.
    elapsed_ms: u64,
    last_frame_ms: Option<u64>,
    /// Whether the recorder reported the final score as a new high score.
    new_record: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    ticks: u32,
}

impl Session {
    /// Start a session with the default spawn: one segment at the grid
    /// center heading right, and 3 to 5 food items.
    pub fn new(
        config: GameConfig,
        colors: &dyn ColorProvider,
        seed: u32,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let colors = colors.current_snake_colors();
        let mut rng = SimpleRng::new(seed);
        let food_color = select_food_color(colors, &mut rng);
        let snake = spawn_snake(&config);

        let mut session = Self::assemble(config, colors, rng, snake, Direction::Right, FoodSet::new(), food_color);
        session.place_initial_food();
        info!(
            grid_width = config.grid_width,
            grid_height = config.grid_height,
            foods = session.food.len(),
            "session started"
        );
        Ok(session)
    }

    /// Start a session from an explicit layout (head first).
    ///
    /// The food set is used as given; it is only replenished after the first
    /// consumption.
    pub fn with_layout(
        config: GameConfig,
        colors: &dyn ColorProvider,
        seed: u32,
        snake: &[Pos],
        direction: Direction,
        food: &[Pos],
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let body = Snake::from_segments(snake, config.grid_width, config.grid_height)
            .ok_or(ConfigError::InvalidLayout("snake must be non-empty, in bounds and self-disjoint"))?;
        if body.len() >= config.victory_length {
            return Err(ConfigError::InvalidLayout("snake already at victory length"));
        }
        if snake.windows(2).any(|w| manhattan(w[0], w[1]) != 1) {
            return Err(ConfigError::InvalidLayout("snake segments must be adjacent"));
        }
        let food = FoodSet::from_cells(food).ok_or(ConfigError::InvalidLayout("duplicate food"))?;
        if food
            .cells()
            .iter()
            .any(|&f| !f.in_bounds(config.grid_width, config.grid_height) || body.contains(f))
        {
            return Err(ConfigError::InvalidLayout("food must be in bounds and off the snake"));
        }

        let colors = colors.current_snake_colors();
        let mut rng = SimpleRng::new(seed);
        let food_color = select_food_color(colors, &mut rng);
        Ok(Self::assemble(config, colors, rng, body, direction, food, food_color))
    }

    fn assemble(
        config: GameConfig,
        colors: SnakeColors,
        rng: SimpleRng,
        snake: Snake,
        direction: Direction,
        food: FoodSet,
        food_color: Rgb,
    ) -> Self {
        Self {
            pace: PaceController::new(config.base_delay_ms, config.fast_delay_ms),
            config,
            colors,
            rng,
            snake,
            direction,
            pending_direction: direction,
            food,
            food_color,
            status: GameStatus::Playing,
            score: 0,
            held: HeldKeys::new(),
            elapsed_ms: 0,
            last_frame_ms: None,
            new_record: false,
            episode_id: 0,
            ticks: 0,
        }
    }

    fn place_initial_food(&mut self) {
        let count = self.rng.next_inclusive(INITIAL_FOODS_MIN, INITIAL_FOODS_MAX);
        self.food.fill_to(
            count,
            &self.snake,
            self.config.grid_width,
            self.config.grid_height,
            &mut self.rng,
        );
    }

    /// Replace this session with a fresh one.
    ///
    /// Configuration, snake colors and the random stream carry over; a new
    /// food color is drawn.
    pub fn restart(&mut self) {
        let next_episode = self.episode_id.wrapping_add(1);
        let mut rng = self.rng.clone();
        let food_color = select_food_color(self.colors, &mut rng);
        let snake = spawn_snake(&self.config);
        *self = Self::assemble(self.config, self.colors, rng, snake, Direction::Right, FoodSet::new(), food_color);
        self.episode_id = next_episode;
        self.place_initial_food();
        debug!(episode_id = self.episode_id, "session restarted");
    }

    /// Feed one decoded input event.
    ///
    /// Rejected or irrelevant input is ignored silently.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<SessionCommand> {
        let key = event.key();
        if key == LogicalKey::ToggleFullscreen {
            if let InputEvent::KeyDown(_) = event {
                return Some(SessionCommand::ToggleFullscreen);
            }
            return None;
        }

        if self.status.is_terminal() {
            return match event {
                InputEvent::KeyDown(LogicalKey::Confirm) => {
                    self.restart();
                    None
                }
                InputEvent::KeyDown(LogicalKey::ReturnToMenu) => Some(SessionCommand::ExitToMenu),
                _ => None,
            };
        }

        self.held.apply(event);
        let InputEvent::KeyDown(key) = event else {
            return None;
        };

        match (self.status, key) {
            (GameStatus::Playing, LogicalKey::Pause) => {
                self.set_status(GameStatus::Paused);
                None
            }
            (GameStatus::Paused, LogicalKey::Pause | LogicalKey::Confirm) => {
                self.set_status(GameStatus::Playing);
                None
            }
            (GameStatus::Paused, LogicalKey::ReturnToMenu) => Some(SessionCommand::ExitToMenu),
            (GameStatus::Playing, k) => {
                if let Some(dir) = k.direction() {
                    self.queue_direction(dir);
                }
                None
            }
            _ => None,
        }
    }

    /// Queue `dir` for the next tick.
    ///
    /// Ignored unless Playing, and ignored when it reverses the current
    /// direction. Returns whether the direction was accepted.
    pub fn queue_direction(&mut self, dir: Direction) -> bool {
        if self.status != GameStatus::Playing || dir.is_opposite(self.direction) {
            return false;
        }
        self.pending_direction = dir;
        true
    }

    /// Advance the frame clock and run at most one paced tick.
    pub fn update(&mut self, now_ms: u64, recorder: &mut dyn ScoreRecorder) -> Option<TickOutcome> {
        if self.status == GameStatus::Playing {
            if let Some(last) = self.last_frame_ms {
                self.elapsed_ms += now_ms.saturating_sub(last);
            }
        }
        self.last_frame_ms = Some(now_ms);

        if self.status != GameStatus::Playing {
            return None;
        }
        if !self.pace.poll(now_ms, &self.held) {
            return None;
        }
        self.step(recorder)
    }

    /// Tick-advance: move the snake one cell.
    ///
    /// No-op (returns `None`) unless Playing.
    pub fn step(&mut self, recorder: &mut dyn ScoreRecorder) -> Option<TickOutcome> {
        if self.status != GameStatus::Playing {
            return None;
        }
        self.ticks = self.ticks.wrapping_add(1);

        self.direction = self.pending_direction;
        let new_head = self.snake.head().step(self.direction);

        // Checked against the body before the tail moves, so stepping into the
        // cell the tail is about to leave is fatal.
        let collision = if !new_head.in_bounds(self.config.grid_width, self.config.grid_height) {
            Some(Collision::Wall)
        } else if self.snake.contains(new_head) {
            Some(Collision::SelfBody)
        } else {
            None
        };
        if let Some(collision) = collision {
            debug!(?collision, x = new_head.x, y = new_head.y, "fatal collision");
            self.finish(GameStatus::GameOver, recorder);
            return Some(TickOutcome::GameOver(collision));
        }

        self.snake.push_head(new_head);

        if self.food.take(new_head) {
            self.score += FOOD_SCORE;
            self.replenish_food();
            if self.snake.len() >= self.config.victory_length {
                self.finish(GameStatus::Victory, recorder);
                return Some(TickOutcome::Victory);
            }
            return Some(TickOutcome::Ate);
        }

        self.snake.pop_tail();
        Some(TickOutcome::Moved)
    }

    fn replenish_food(&mut self) {
        let target = self.target_food_count();
        self.food.fill_to(
            target,
            &self.snake,
            self.config.grid_width,
            self.config.grid_height,
            &mut self.rng,
        );
    }

    fn finish(&mut self, status: GameStatus, recorder: &mut dyn ScoreRecorder) {
        self.set_status(status);
        self.new_record = recorder.record_final_score(self.score);
        info!(
            status = status.as_str(),
            score = self.score,
            length = self.snake.len(),
            new_record = self.new_record,
            "session finished"
        );
    }

    fn set_status(&mut self, status: GameStatus) {
        debug!(from = self.status.as_str(), to = status.as_str(), "status change");
        self.status = status;
    }

    pub fn target_food_count(&self) -> usize {
        target_food_count(self.snake.len(), self.config.max_foods)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snake_cells(&self) -> Vec<Pos> {
        self.snake.segments().collect()
    }

    pub fn food(&self) -> &[Pos] {
        self.food.cells()
    }

    pub fn food_color(&self) -> Rgb {
        self.food_color
    }

    pub fn snake_colors(&self) -> SnakeColors {
        self.colors
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn grid_size(&self) -> (u16, u16) {
        (self.config.grid_width, self.config.grid_height)
    }

    pub fn held_keys(&self) -> &HeldKeys {
        &self.held
    }

    /// Whether the fast move interval is in effect.
    pub fn is_accelerating(&self) -> bool {
        self.held.any_direction()
    }

    pub fn new_record(&self) -> bool {
        self.new_record
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.snake.clear();
        out.snake.extend(self.snake.segments());
        out.food.clear();
        out.food.extend_from_slice(self.food.cells());
        out.food_color = self.food_color;
        out.snake_colors = self.colors;
        out.score = self.score;
        out.status = self.status;
        out.grid_width = self.config.grid_width;
        out.grid_height = self.config.grid_height;
        out.victory_length = self.config.victory_length;
        out.direction = self.direction;
        out.accelerating = self.is_accelerating();
        out.new_record = self.new_record;
        out.elapsed_ms = self.elapsed_ms;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

fn spawn_snake(config: &GameConfig) -> Snake {
    let head = Pos::new(
        (config.grid_width / 2) as i32,
        (config.grid_height / 2) as i32,
    );
    Snake::new(head, config.grid_width, config.grid_height)
}

fn manhattan(a: Pos, b: Pos) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
