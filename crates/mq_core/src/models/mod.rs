pub mod game;
pub mod song;
pub mod team;

pub use game::{Game, GameMetadata, TeamGameStats};
pub use song::{AnimeTitle, PlayerAnswer, RigEntry, SongCategory, SongEntry};
pub use team::Team;
