//! Wire format of the deck service.
//!
//! Both sides of the system speak these shapes: the client decodes them from
//! remote responses and the simulator serves them.

use crate::card::Card;
use serde::{Deserialize, Serialize};

/// Response to a create-and-shuffle request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewDeckResponse {
    pub success: bool,
    pub deck_id: String,
    pub shuffled: bool,
    pub remaining: u32,
}

/// Response to a draw request.
///
/// `cards` may be shorter than the requested count once the deck runs low.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DrawResponse {
    pub success: bool,
    pub deck_id: String,
    pub cards: Vec<Card>,
    pub remaining: u32,
}
