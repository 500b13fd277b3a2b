//! Round evaluation.
//!
//! Pure and deterministic: given the drawn sequence and the caller's guess,
//! the outcome is fixed. Transport concerns live in the client crate.

use crate::card::{queen_position, Card};
use std::io;

/// Result of a single round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub won: bool,
    /// The number of cards the caller asked to draw, doubling as their
    /// prediction of the queen's position.
    pub guess: u32,
    /// 1-based position of the first queen among the drawn cards, if any.
    /// `None` means no queen turned up; no position is fabricated.
    pub queen_position: Option<u32>,
    /// One rendered entry per drawn card, in draw order.
    pub transcript: Vec<String>,
}

impl Outcome {
    /// Write the human-readable round report: one line per drawn card
    /// followed by a verdict line.
    pub fn write_report<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.transcript {
            writeln!(out, "{line}")?;
        }
        match (self.won, self.queen_position) {
            (true, _) => {
                writeln!(out, "You guessed it! The queen was card number {}.", self.guess)
            }
            (false, Some(position)) => writeln!(
                out,
                "You lost! The queen was card number {position}, not {}.",
                self.guess
            ),
            (false, None) => writeln!(
                out,
                "You lost! No queen turned up in {} cards.",
                self.transcript.len()
            ),
        }
    }
}

/// Evaluate one drawn sequence against the caller's guess.
///
/// The round is won exactly when the first queen sits at position `guess`.
/// A sequence without a queen (a deck exhausted before one appeared) is a
/// loss with no position to report.
pub fn evaluate(cards: &[Card], guess: u32) -> Outcome {
    let queen_position = queen_position(cards);
    Outcome {
        won: queen_position == Some(guess),
        guess,
        queen_position,
        transcript: cards.iter().map(Card::describe).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(outcome: &Outcome) -> String {
        let mut buf = Vec::new();
        outcome.write_report(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_queen_at_guessed_position_wins() {
        let cards = vec![
            Card::new("7D", "7", "DIAMONDS"),
            Card::new("3C", "3", "CLUBS"),
            Card::new("KS", "KING", "SPADES"),
            Card::new("QH", "QUEEN", "HEARTS"),
        ];
        let outcome = evaluate(&cards, 4);
        assert!(outcome.won);
        assert_eq!(outcome.queen_position, Some(4));
        assert_eq!(outcome.transcript.len(), 4);
    }

    #[test]
    fn test_queen_elsewhere_loses_and_reports_true_position() {
        let cards = vec![
            Card::new("4C", "4", "CLUBS"),
            Card::new("9D", "9", "DIAMONDS"),
            Card::new("QC", "QUEEN", "CLUBS"),
        ];
        let outcome = evaluate(&cards, 10);
        assert!(!outcome.won);
        assert_eq!(outcome.queen_position, Some(3));

        let text = report(&outcome);
        assert!(text.contains("card number 3"), "unexpected report: {text}");
    }

    #[test]
    fn test_no_queen_loses_without_fabricated_position() {
        let cards = vec![
            Card::new("2H", "2", "HEARTS"),
            Card::new("JD", "JACK", "DIAMONDS"),
        ];
        let outcome = evaluate(&cards, 2);
        assert!(!outcome.won);
        assert_eq!(outcome.queen_position, None);

        let text = report(&outcome);
        assert!(text.contains("No queen"), "unexpected report: {text}");
        assert!(!text.contains("card number"), "unexpected report: {text}");
    }

    #[test]
    fn test_single_card_win() {
        let cards = vec![Card::new("QS", "QUEEN", "SPADES")];
        let outcome = evaluate(&cards, 1);
        assert!(outcome.won);
        assert_eq!(outcome.transcript, vec!["QUEEN of SPADES".to_string()]);

        let text = report(&outcome);
        assert!(text.contains("QUEEN of SPADES"));
        assert!(text.contains("You guessed it!"));
    }

    #[test]
    fn test_transcript_preserves_draw_order() {
        let cards = vec![
            Card::new("AC", "ACE", "CLUBS"),
            Card::new("2H", "2", "HEARTS"),
            Card::new("JD", "JACK", "DIAMONDS"),
            Card::new("QD", "QUEEN", "DIAMONDS"),
        ];
        let outcome = evaluate(&cards, 4);
        assert_eq!(
            outcome.transcript,
            vec![
                "ACE of CLUBS",
                "2 of HEARTS",
                "JACK of DIAMONDS",
                "QUEEN of DIAMONDS",
            ]
        );
        assert!(outcome.won);
    }

    #[test]
    fn test_full_deck_guess_with_queen_last() {
        let mut cards: Vec<Card> = (0..51)
            .map(|i| Card::new(format!("F{i}"), "2", "HEARTS"))
            .collect();
        cards.push(Card::new("QD", "QUEEN", "DIAMONDS"));

        let outcome = evaluate(&cards, 52);
        assert!(outcome.won);
        assert_eq!(outcome.queen_position, Some(52));
        assert_eq!(outcome.transcript.len(), 52);
    }

    #[test]
    fn test_empty_draw_is_a_loss() {
        let outcome = evaluate(&[], 5);
        assert!(!outcome.won);
        assert_eq!(outcome.queen_position, None);
        assert!(outcome.transcript.is_empty());
    }

    #[test]
    fn test_report_line_count_matches_cards_plus_verdict() {
        let cards = vec![
            Card::new("7D", "7", "DIAMONDS"),
            Card::new("QH", "QUEEN", "HEARTS"),
        ];
        let outcome = evaluate(&cards, 2);
        let text = report(&outcome);
        assert_eq!(text.lines().count(), 3);
    }
}
