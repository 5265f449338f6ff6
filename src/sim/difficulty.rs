//! Difficulty levels and the speeds they map to

use serde::{Deserialize, Serialize};

/// Difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Concrete speeds for a difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Computer paddle pixels per move
    pub ai_paddle_speed: f32,
    /// Ball per-axis speed after a reset
    pub ball_base_speed: f32,
}

impl Difficulty {
    /// All levels in menu order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Level at a menu index, if in range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Menu index of this level
    pub fn index(&self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                ai_paddle_speed: 3.0,
                ball_base_speed: 4.0,
            },
            Difficulty::Medium => DifficultyProfile {
                ai_paddle_speed: 5.0,
                ball_base_speed: 6.0,
            },
            Difficulty::Hard => DifficultyProfile {
                ai_paddle_speed: 7.0,
                ball_base_speed: 8.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles() {
        assert_eq!(Difficulty::Easy.profile().ai_paddle_speed, 3.0);
        assert_eq!(Difficulty::Easy.profile().ball_base_speed, 4.0);
        assert_eq!(Difficulty::Medium.profile().ai_paddle_speed, 5.0);
        assert_eq!(Difficulty::Medium.profile().ball_base_speed, 6.0);
        assert_eq!(Difficulty::Hard.profile().ai_paddle_speed, 7.0);
        assert_eq!(Difficulty::Hard.profile().ball_base_speed, 8.0);
    }

    #[test]
    fn test_profiles_get_faster() {
        let speeds: Vec<_> = Difficulty::ALL.iter().map(|d| d.profile()).collect();
        for pair in speeds.windows(2) {
            assert!(pair[1].ai_paddle_speed > pair[0].ai_paddle_speed);
            assert!(pair[1].ball_base_speed > pair[0].ball_base_speed);
        }
    }

    #[test]
    fn test_index_round_trip() {
        for (i, d) in Difficulty::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
            assert_eq!(Difficulty::from_index(i), Some(*d));
        }
        assert_eq!(Difficulty::from_index(3), None);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
