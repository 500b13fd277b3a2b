use queenspot_types::Card;
use rand::seq::SliceRandom;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use uuid::Uuid;

/// Rank names with their code characters; "10" is coded "0" on the wire.
const RANKS: [(&str, char); 13] = [
    ("ACE", 'A'),
    ("2", '2'),
    ("3", '3'),
    ("4", '4'),
    ("5", '5'),
    ("6", '6'),
    ("7", '7'),
    ("8", '8'),
    ("9", '9'),
    ("10", '0'),
    ("JACK", 'J'),
    ("QUEEN", 'Q'),
    ("KING", 'K'),
];

const SUITS: [(&str, char); 4] = [
    ("SPADES", 'S'),
    ("HEARTS", 'H'),
    ("DIAMONDS", 'D'),
    ("CLUBS", 'C'),
];

struct DeckState {
    cards: VecDeque<Card>,
}

/// Deck registry behind the HTTP API.
///
/// Each created deck lives until the process exits; draws pop cards from
/// the front, so `remaining` only ever decreases.
#[derive(Default)]
pub struct Simulator {
    decks: Mutex<HashMap<String, DeckState>>,
    scripted: Mutex<VecDeque<Vec<Card>>>,
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an exact card order for the next created deck. Decks created
    /// beyond the queue fall back to freshly shuffled ones. Tests script
    /// rounds with this.
    pub fn script_next_deck(&self, cards: Vec<Card>) {
        self.scripted.lock().unwrap().push_back(cards);
    }

    /// Register a new deck and return its identifier and card count.
    pub fn create_deck(&self) -> (String, u32) {
        let cards = self
            .scripted
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(shuffled_standard_deck);
        let deck_id = Uuid::new_v4().simple().to_string();
        let remaining = cards.len() as u32;
        self.decks.lock().unwrap().insert(
            deck_id.clone(),
            DeckState {
                cards: cards.into(),
            },
        );
        (deck_id, remaining)
    }

    /// Draw up to `count` cards from the front of a deck.
    ///
    /// Returns fewer cards than requested once the deck runs low, and
    /// `None` when the deck id is unknown.
    pub fn draw(&self, deck_id: &str, count: u32) -> Option<(Vec<Card>, u32)> {
        let mut decks = self.decks.lock().unwrap();
        let deck = decks.get_mut(deck_id)?;
        let take = (count as usize).min(deck.cards.len());
        let cards: Vec<Card> = deck.cards.drain(..take).collect();
        Some((cards, deck.cards.len() as u32))
    }

    /// Number of decks registered so far.
    pub fn deck_count(&self) -> usize {
        self.decks.lock().unwrap().len()
    }
}

fn shuffled_standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for (suit, suit_code) in SUITS {
        for (rank, rank_code) in RANKS {
            cards.push(Card::new(format!("{rank_code}{suit_code}"), rank, suit));
        }
    }
    cards.shuffle(&mut rand::thread_rng());
    cards
}
