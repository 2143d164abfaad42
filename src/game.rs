use crate::grid::Size;
use crate::input::Input;
use crate::render;
use crate::session::{Session, StepResult};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug)]
pub enum GameState {
    Playing(Session),
    GameOver { session: Session, result: StepResult },
    Exit,
}

pub struct Game {
    pub state: GameState,
    rng: StdRng,
    ticks: u64,
}

impl Game {
    pub fn new(size: Size, seed: u64) -> Self {
        info!("Seeding food placement with {}", seed);
        Game {
            state: GameState::Playing(Session::new(size)),
            rng: StdRng::seed_from_u64(seed),
            ticks: 0,
        }
    }

    pub fn is_exiting(&self) -> bool {
        matches!(self.state, GameState::Exit)
    }

    /// Advances one tick with the inputs drained since the previous tick.
    pub fn tick(&mut self, inputs: Vec<Input>) {
        match &mut self.state {
            GameState::Playing(session) => {
                self.ticks += 1;
                let result = session.step(inputs, &mut self.rng);
                if !result.is_terminal() {
                    return;
                }

                let length = session.body().len();
                match result {
                    StepResult::Quit => {
                        info!("Quit after {} ticks at length {}", self.ticks, length);
                        self.state = GameState::Exit;
                    }
                    StepResult::Collision(pos) => {
                        info!(
                            "Collided at {:?} after {} ticks, final length {}",
                            pos, self.ticks, length
                        );
                        self.finish(result);
                    }
                    StepResult::BoardFull => {
                        info!("Board full after {} ticks, length {}", self.ticks, length);
                        self.finish(result);
                    }
                    StepResult::NoBody => {
                        info!("No snake left to move after {} ticks", self.ticks);
                        self.finish(result);
                    }
                    StepResult::Ongoing | StepResult::Nommed => {}
                }
            }
            GameState::GameOver { .. } | GameState::Exit => {}
        }
    }

    /// Any key press on the game over screen exits.
    pub fn acknowledge(&mut self) {
        if matches!(self.state, GameState::GameOver { .. }) {
            self.state = GameState::Exit;
        }
    }

    fn finish(&mut self, result: StepResult) {
        if let GameState::Playing(session) = std::mem::replace(&mut self.state, GameState::Exit) {
            self.state = GameState::GameOver { session, result };
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let session = match &self.state {
            GameState::Playing(session) | GameState::GameOver { session, .. } => session,
            GameState::Exit => return,
        };

        let layout = Layout::vertical([
            Constraint::Length(3), // Title + length
            Constraint::Min(0),    // Arena
        ])
        .split(frame.area());

        frame.render_widget(
            Paragraph::new(format!("SNEK    Length: {}", session.body().len()))
                .alignment(Alignment::Left)
                .block(Block::default().borders(Borders::ALL)),
            layout[0],
        );

        let Some(arena) = render::arena_rect(session.size(), layout[1]) else {
            let (width, height) = render::arena_extent(session.size());
            frame.render_widget(
                Paragraph::new(format!(
                    "Terminal too small\nNeed {}x{} for the arena",
                    width, height
                ))
                .alignment(Alignment::Center),
                layout[1],
            );
            return;
        };

        frame.render_widget(session, arena);

        if let GameState::GameOver { result, .. } = &self.state {
            let headline = match result {
                StepResult::BoardFull => "YOU WIN",
                _ => "GAME OVER",
            };
            let popup = centered(layout[1], 24, 5);
            frame.render_widget(Clear, popup);
            frame.render_widget(
                Paragraph::new(format!(
                    "{}\nFinal length: {}\nPress any key to exit",
                    headline,
                    session.body().len()
                ))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
                popup,
            );
        }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
