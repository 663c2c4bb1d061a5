//! Community leaderboard and weekly challenge.
//!
//! There is no server; this is the bundled demo community the app ships
//! with, same as the rest of the social surface.

use serde::{Deserialize, Serialize};

/// A friend on the leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    /// Display name.
    pub name: String,
    /// Experience points.
    pub points: u32,
    /// Leaderboard position, 1-based.
    pub rank: u32,
    /// Whether they worked out recently.
    pub active: bool,
    /// Two-letter avatar tag.
    pub avatar: String,
}

/// The running weekly challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    /// Challenge title.
    pub title: String,
    /// Days until it ends.
    pub ends_in_days: u32,
    /// Progress toward the goal, 0.0 - 1.0.
    pub progress: f64,
    /// Who is currently leading.
    pub leader: String,
}

fn friend(name: &str, points: u32, rank: u32, active: bool, avatar: &str) -> Friend {
    Friend {
        name: name.to_string(),
        points,
        rank,
        active,
        avatar: avatar.to_string(),
    }
}

/// The leaderboard, best rank first.
#[must_use]
pub fn leaderboard() -> Vec<Friend> {
    vec![
        friend("Omkar", 2450, 1, true, "OM"),
        friend("Harsh", 2100, 2, true, "HA"),
        friend("Shrvan", 1850, 3, false, "SH"),
        friend("Sarthak", 1200, 4, false, "SA"),
    ]
}

/// The current weekly challenge.
#[must_use]
pub fn current_challenge() -> Challenge {
    Challenge {
        title: "Total Workout Volume".to_string(),
        ends_in_days: 2,
        progress: 0.75,
        leader: "Omkar".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaderboard_is_ranked() {
        let board = leaderboard();
        assert!(!board.is_empty());
        for (i, entry) in board.iter().enumerate() {
            assert_eq!(entry.rank as usize, i + 1);
        }
        // Points never increase down the board.
        assert!(board.windows(2).all(|w| w[0].points >= w[1].points));
    }

    #[test]
    fn test_challenge_progress_in_range() {
        let challenge = current_challenge();
        assert!((0.0..=1.0).contains(&challenge.progress));
    }
}
