use std::fmt;
use std::io;
use std::str::FromStr;

use super::player::{EnginePlayer, HumanPlayer, Player, RandomPlayer};
use crate::board::{Color, SearchParams, StdoutLogger, DEFAULT_DEPTH};

pub const USAGE: &str = "usage: alphabeta_chess [--depth N] [--white human|engine|random] \
[--black human|engine|random] [--seed N] [--max-plies N] [--verbose]";

/// Who plays a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Engine,
    Random,
}

impl FromStr for PlayerKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "engine" | "ai" => Ok(PlayerKind::Engine),
            "random" => Ok(PlayerKind::Random),
            _ => Err(()),
        }
    }
}

/// Error type for command-line option parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// A flag that takes a value was last on the line
    MissingValue { flag: String },
    /// A flag's value could not be parsed
    InvalidValue { flag: String, value: String },
    /// Not a recognised flag
    UnknownFlag { flag: String },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::MissingValue { flag } => write!(f, "Missing value for {flag}"),
            OptionsError::InvalidValue { flag, value } => {
                write!(f, "Invalid value '{value}' for {flag}")
            }
            OptionsError::UnknownFlag { flag } => write!(f, "Unknown option '{flag}'"),
        }
    }
}

impl std::error::Error for OptionsError {}

/// Settings for one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOptions {
    pub depth: u32,
    pub white: PlayerKind,
    pub black: PlayerKind,
    /// Seed for random players; entropy when absent
    pub seed: Option<u64>,
    pub max_plies: Option<u32>,
    /// Print every root move the engine scores
    pub verbose: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            depth: DEFAULT_DEPTH,
            white: PlayerKind::Human,
            black: PlayerKind::Engine,
            seed: None,
            max_plies: None,
            verbose: false,
        }
    }
}

fn parse_value<T: FromStr>(flag: &str, value: Option<String>) -> Result<T, OptionsError> {
    let value = value.ok_or_else(|| OptionsError::MissingValue {
        flag: flag.to_string(),
    })?;
    value.parse().map_err(|_| OptionsError::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}

impl GameOptions {
    /// Parse command-line arguments (without the program name).
    pub fn from_args<I>(args: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = GameOptions::default();
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--depth" | "-d" => options.depth = parse_value(&flag, args.next())?,
                "--white" => options.white = parse_value(&flag, args.next())?,
                "--black" => options.black = parse_value(&flag, args.next())?,
                "--seed" => options.seed = Some(parse_value(&flag, args.next())?),
                "--max-plies" => options.max_plies = Some(parse_value(&flag, args.next())?),
                "--verbose" | "-v" => options.verbose = true,
                _ => return Err(OptionsError::UnknownFlag { flag }),
            }
        }
        Ok(options)
    }

    #[must_use]
    pub fn search_params(&self) -> SearchParams {
        SearchParams::with_depth(self.depth)
    }

    #[must_use]
    pub fn kind(&self, side: Color) -> PlayerKind {
        match side {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Build the player for `side`. Human players read stdin and prompt on
    /// stdout.
    #[must_use]
    pub fn player(&self, side: Color) -> Box<dyn Player> {
        match self.kind(side) {
            PlayerKind::Human => Box::new(HumanPlayer::new(io::stdin().lock(), io::stdout())),
            PlayerKind::Engine if self.verbose => Box::new(EnginePlayer::with_logger(
                self.search_params(),
                Box::new(StdoutLogger),
            )),
            PlayerKind::Engine => Box::new(EnginePlayer::new(self.search_params())),
            PlayerKind::Random => match self.seed {
                // Offset Black's seed so two random players do not mirror each other.
                Some(seed) => Box::new(RandomPlayer::new(
                    seed.wrapping_add(u64::from(side == Color::Black)),
                )),
                None => Box::new(RandomPlayer::from_entropy()),
            },
        }
    }
}
