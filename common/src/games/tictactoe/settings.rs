use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::board::SUPPORTED_SIZES;
use super::types::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    #[default]
    X,
    O,
    Random,
}

impl FirstPlayerMode {
    pub fn resolve<R: Rng>(self, rng: &mut R) -> Player {
        match self {
            FirstPlayerMode::X => Player::X,
            FirstPlayerMode::O => Player::O,
            FirstPlayerMode::Random => {
                if rng.random_bool(0.5) {
                    Player::X
                } else {
                    Player::O
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSettings {
    pub board_size: usize,
    #[serde(default)]
    pub first_player: FirstPlayerMode,
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        if !SUPPORTED_SIZES.contains(&self.board_size) {
            return Err(format!(
                "board_size must be one of {:?}, got {}",
                SUPPORTED_SIZES, self.board_size
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            board_size: 3,
            first_player: FirstPlayerMode::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(TicTacToeSettings::default().validate().is_ok());
    }

    #[test]
    fn test_unsupported_board_size_is_invalid() {
        for board_size in [0, 4, 6, 9] {
            let settings = TicTacToeSettings {
                board_size,
                ..TicTacToeSettings::default()
            };
            assert!(settings.validate().is_err());
        }
    }

    #[test]
    fn test_fixed_first_player() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(FirstPlayerMode::X.resolve(&mut rng), Player::X);
        assert_eq!(FirstPlayerMode::O.resolve(&mut rng), Player::O);
    }

    #[test]
    fn test_random_first_player_picks_both() {
        let mut rng = StdRng::seed_from_u64(42);
        let picks: Vec<Player> = (0..64).map(|_| FirstPlayerMode::Random.resolve(&mut rng)).collect();
        assert!(picks.contains(&Player::X));
        assert!(picks.contains(&Player::O));
    }
}
