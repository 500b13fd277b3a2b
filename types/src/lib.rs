pub mod api;
pub mod card;
pub mod game;

pub use api::{DrawResponse, NewDeckResponse};
pub use card::{queen_position, Card, QUEEN};
pub use game::{evaluate, Outcome};
