use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameEngine, Phase, TickOutcome};
use crate::input::{InputHandler, KeyAction, SwipeTracker};
use crate::metrics::SessionStats;
use crate::modes::TickDriver;
use crate::render::Renderer;

/// Render at roughly 30 FPS
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Interactive terminal play: keyboard and mouse swipes in, board out
pub struct HumanMode {
    engine: GameEngine,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    swipe: SwipeTracker,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            swipe: SwipeTracker::new(),
            should_quit: false,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut ticker = TickDriver::new(self.engine.config().tick_interval());
        let mut render_timer = interval(FRAME_INTERVAL);

        info!(
            "Playing on a {}x{} board, one tick every {:?}",
            self.engine.config().board_size,
            self.engine.config().board_size,
            ticker.period()
        );

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = ticker.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.stats.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.engine.state(), &self.stats);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            // Never leave a timer running once the game stops
            ticker.sync(self.engine.phase());

            if self.should_quit {
                break;
            }
        }

        debug!("Leaving game loop");
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return;
                }
                let action = self.input_handler.handle_key_event(key);
                self.apply_action(action);
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.swipe.press_cell(mouse.column, mouse.row);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(direction) = self.swipe.release_cell(mouse.column, mouse.row) {
                    self.engine.set_direction(direction);
                }
            }
            _ => {}
        }
    }

    fn apply_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Turn(direction) => self.engine.set_direction(direction),
            KeyAction::StartPause => {
                if self.engine.phase() == Phase::GameOver {
                    self.stats.on_reset();
                }
                self.engine.toggle_pause();
                if self.engine.phase() == Phase::Running {
                    self.stats.on_resume();
                } else {
                    self.stats.on_pause();
                }
            }
            KeyAction::Reset => {
                self.engine.reset();
                self.stats.on_reset();
                self.swipe.cancel();
            }
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn update_game(&mut self) {
        if let TickOutcome::Ended(_) = self.engine.tick() {
            self.stats.on_game_over();
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
