use std::time::{Duration, Instant};

/// Session statistics kept for the lifetime of the process: the running
/// game's wall clock, the best score seen so far and how many games have
/// finished. Read through accessors like the rest of the crate; nothing
/// here touches disk.
pub struct GameMetrics {
    started_at: Instant,
    elapsed: Duration,
    high_score: u32,
    games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            elapsed: Duration::ZERO,
            high_score: 0,
            games_played: 0,
        }
    }

    /// Refresh the wall clock. The render loop calls this only while a
    /// game is in progress, so the displayed time freezes on game over.
    pub fn update(&mut self) {
        self.elapsed = self.started_at.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.started_at = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Elapsed time of the current game as mm:ss
    pub fn format_time(&self) -> String {
        let secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
