use std::time::{Duration, Instant};

/// Per-session counters shown next to the board
pub struct SessionStats {
    /// Set while the current game is running
    resumed_at: Option<Instant>,
    /// Running time banked before the last pause
    banked: Duration,
    pub elapsed_time: Duration,
    pub games_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            resumed_at: None,
            banked: Duration::ZERO,
            elapsed_time: Duration::ZERO,
            games_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.banked + self.resumed_at.map_or(Duration::ZERO, |t| t.elapsed());
    }

    pub fn on_resume(&mut self) {
        if self.resumed_at.is_none() {
            self.resumed_at = Some(Instant::now());
        }
    }

    pub fn on_pause(&mut self) {
        if let Some(started) = self.resumed_at.take() {
            self.banked += started.elapsed();
        }
        self.update();
    }

    pub fn on_game_over(&mut self) {
        self.on_pause();
        self.games_played += 1;
    }

    /// Clear the clock for a fresh game
    pub fn on_reset(&mut self) {
        self.resumed_at = None;
        self.banked = Duration::ZERO;
        self.elapsed_time = Duration::ZERO;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
