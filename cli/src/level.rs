use clap::ValueEnum;
use demine_core::BoardConfig;

/// Difficulty presets: the classic row/col/mine triples.
#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
pub enum Level {
    VeryBeginner,
    Beginner,
    Middle,
    Advanced,
}

impl Level {
    pub fn config(self) -> BoardConfig {
        match self {
            Level::VeryBeginner => BoardConfig::new(4, 5, 2),
            Level::Beginner => BoardConfig::new(8, 10, 10),
            Level::Middle => BoardConfig::new(14, 18, 40),
            Level::Advanced => BoardConfig::new(20, 24, 99),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_leaves_free_cells() {
        for level in [
            Level::VeryBeginner,
            Level::Beginner,
            Level::Middle,
            Level::Advanced,
        ] {
            let config = level.config();
            assert!(config.mines < config.total_cells());
        }
    }
}
