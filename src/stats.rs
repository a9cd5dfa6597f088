//! Session statistics shown in the header. Everything here lives in
//! memory only and is gone when the process exits.

use std::time::{Duration, Instant};

pub struct SessionStats {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    /// Longest body reached in any round this session.
    pub best_length: usize,
    pub rounds_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_length: 0,
            rounds_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_round_over(&mut self, final_length: usize) {
        self.rounds_played += 1;
        if final_length > self.best_length {
            self.best_length = final_length;
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut stats = SessionStats::new();
        stats.elapsed_time = Duration::from_secs(125);
        assert_eq!(stats.format_time(), "02:05");

        stats.elapsed_time = Duration::from_secs(0);
        assert_eq!(stats.format_time(), "00:00");

        stats.elapsed_time = Duration::from_secs(3661);
        assert_eq!(stats.format_time(), "61:01");
    }

    #[test]
    fn test_best_length_tracking() {
        let mut stats = SessionStats::new();

        stats.on_round_over(4);
        assert_eq!(stats.best_length, 4);
        assert_eq!(stats.rounds_played, 1);

        stats.on_round_over(2);
        assert_eq!(stats.best_length, 4); // Should not decrease
        assert_eq!(stats.rounds_played, 2);

        stats.on_round_over(7);
        assert_eq!(stats.best_length, 7); // Should update
        assert_eq!(stats.rounds_played, 3);
    }

    #[test]
    fn test_elapsed_time_spans_rounds() {
        let mut stats = SessionStats::new();
        std::thread::sleep(Duration::from_millis(50));
        stats.update();
        assert!(stats.elapsed_time.as_millis() >= 50);

        // A round ending does not reset the session clock.
        stats.on_round_over(3);
        stats.update();
        assert!(stats.elapsed_time.as_millis() >= 50);
    }
}
