use log::{debug, info};

use crate::util::PseudoRandom;
use crate::{Arena, Direction, Position, Snake};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    Over,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    Tick,
    Turn { direction: Direction },
    TogglePause,
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    SnakeTurned { direction: Direction },
    SnakeDied { score: u32 },
    FoodEaten { position: Position },
    FoodSpawned { position: Position },
    PauseToggled { paused: bool },
    GameRestarted,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub tick: u32,
    pub arena: Arena,
    pub status: GameStatus,
    rng: PseudoRandom,
}

impl GameState {
    pub fn new(width: u16, height: u16, seed: u64) -> Self {
        let mut state = GameState {
            tick: 0,
            arena: Arena {
                width,
                height,
                snake: Snake::new(width, height),
                food: Position { x: 0, y: 0 },
            },
            status: GameStatus::Running,
            rng: PseudoRandom::new(seed),
        };
        state.arena.food = state.random_free_cell();
        state
    }

    pub fn current_tick(&self) -> u32 {
        self.tick
    }

    /// Execute a command against the state machine and return the events
    /// it produced. Commands that are not legal in the current status are
    /// silently ignored.
    pub fn exec_command(&mut self, command: &GameCommand) -> Vec<GameEvent> {
        let mut out: Vec<GameEvent> = Vec::new();
        match command {
            GameCommand::Tick => {
                if self.status != GameStatus::Running {
                    return out;
                }

                self.arena.snake.apply_pending_direction();
                let new_head = self.arena.snake.head().stepped(
                    self.arena.snake.direction,
                    self.arena.width,
                    self.arena.height,
                );

                // Membership is checked against the pre-move body, tail
                // included: re-entering the cell the tail is about to
                // vacate is fatal.
                if self.arena.snake.contains(&new_head) {
                    let score = self.arena.snake.score;
                    self.apply_event(GameEvent::SnakeDied { score }, &mut out);
                } else {
                    self.arena.snake.step_forward(new_head);
                    if new_head == self.arena.food {
                        self.apply_event(GameEvent::FoodEaten { position: new_head }, &mut out);
                        let position = self.random_free_cell();
                        self.apply_event(GameEvent::FoodSpawned { position }, &mut out);
                    }
                }

                self.tick += 1;
            }

            GameCommand::Turn { direction } => {
                if self.status == GameStatus::Running
                    && *direction != self.arena.snake.direction.opposite()
                {
                    self.apply_event(
                        GameEvent::SnakeTurned {
                            direction: *direction,
                        },
                        &mut out,
                    );
                }
            }

            GameCommand::TogglePause => match self.status {
                GameStatus::Running => {
                    self.apply_event(GameEvent::PauseToggled { paused: true }, &mut out)
                }
                GameStatus::Paused => {
                    self.apply_event(GameEvent::PauseToggled { paused: false }, &mut out)
                }
                GameStatus::Over => {}
            },

            GameCommand::Restart => {
                if self.status == GameStatus::Over {
                    self.apply_event(GameEvent::GameRestarted, &mut out);
                }
            }
        }

        out
    }

    fn apply_event(&mut self, event: GameEvent, out: &mut Vec<GameEvent>) {
        out.push(event.clone());

        match event {
            GameEvent::SnakeTurned { direction } => {
                self.arena.snake.pending_direction = direction;
            }

            GameEvent::SnakeDied { score } => {
                // Body is left untouched so the final pose stays renderable.
                info!("snake died at tick {} with score {}", self.tick, score);
                self.status = GameStatus::Over;
            }

            GameEvent::FoodEaten { .. } => {
                self.arena.snake.grow();
            }

            GameEvent::FoodSpawned { position } => {
                debug!("food spawned at ({}, {})", position.x, position.y);
                self.arena.food = position;
            }

            GameEvent::PauseToggled { paused } => {
                self.status = if paused {
                    GameStatus::Paused
                } else {
                    GameStatus::Running
                };
            }

            GameEvent::GameRestarted => {
                self.arena.snake = Snake::new(self.arena.width, self.arena.height);
                self.arena.food = self.random_free_cell();
                self.status = GameStatus::Running;
                self.tick = 0;
            }
        }
    }

    /// Rejection-sample a uniformly random cell not occupied by the snake.
    /// Unbounded: relies on the snake covering a small fraction of the grid.
    pub fn random_free_cell(&mut self) -> Position {
        loop {
            let position = Position {
                x: self.rng.next_u16() % self.arena.width,
                y: self.rng.next_u16() % self.arena.height,
            };
            if !self.arena.snake.contains(&position) {
                return position;
            }
        }
    }
}
