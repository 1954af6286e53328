//! Hand evaluator tests.

use bjsim::{Card, CardValue, Hand, HandValue, Rank, Suit, possible_totals};
use proptest::prelude::*;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hand_of(cards: &[Card]) -> Hand {
    cards.iter().copied().collect()
}

fn four_aces() -> Vec<Card> {
    Suit::ALL.iter().map(|&suit| card(suit, Rank::Ace)).collect()
}

#[test]
fn card_attributes() {
    let ten = card(Suit::Hearts, Rank::Ten);
    assert_eq!(ten.suit, Suit::Hearts);
    assert_eq!(ten.rank, Rank::Ten);
    assert_eq!(ten.value(), CardValue::Fixed(10));
    assert_eq!(ten.to_string(), "ten of hearts");

    let ace = card(Suit::Clubs, Rank::Ace);
    assert_eq!(ace.value(), CardValue::Alternatives([1, 11]));
    assert_eq!(ace.value().max(), 11);
    assert!(ace.is_ace());

    for face in [Rank::Jack, Rank::Queen, Rank::King] {
        assert_eq!(face.value(), CardValue::Fixed(10));
    }
}

#[test]
fn empty_hand() {
    let hand = Hand::new();
    assert_eq!(hand.value(), 0);
    assert!(!hand.is_bust());
    assert!(!hand.is_blackjack());
    assert!(!hand.is_soft());
    assert!(hand.is_empty());
    assert_eq!(hand.evaluate(), HandValue::default());
}

#[test]
fn single_ten() {
    let hand = hand_of(&[card(Suit::Spades, Rank::Ten)]);
    assert_eq!(hand.value(), 10);
    assert!(!hand.is_blackjack());
    assert!(!hand.is_bust());
    assert!(!hand.is_soft());
}

#[test]
fn single_ace_counts_high() {
    let hand = hand_of(&[card(Suit::Spades, Rank::Ace)]);
    assert_eq!(hand.value(), 11);
    assert!(hand.is_soft());
    assert!(!hand.is_blackjack());
}

#[test]
fn ten_and_two() {
    let hand = hand_of(&[card(Suit::Spades, Rank::Ten), card(Suit::Diamonds, Rank::Two)]);
    assert_eq!(hand.value(), 12);
    assert!(!hand.is_blackjack());
    assert!(!hand.is_bust());
    assert!(!hand.is_soft());
}

#[test]
fn ten_two_and_ace_counts_ace_low() {
    let hand = hand_of(&[
        card(Suit::Spades, Rank::Ten),
        card(Suit::Diamonds, Rank::Two),
        card(Suit::Clubs, Rank::Ace),
    ]);
    assert_eq!(hand.value(), 13);
    assert!(!hand.is_blackjack());
    assert!(!hand.is_bust());
    assert!(hand.is_soft());
}

#[test]
fn ten_and_ace_is_blackjack_in_either_order() {
    for cards in [
        [card(Suit::Spades, Rank::Ten), card(Suit::Clubs, Rank::Ace)],
        [card(Suit::Clubs, Rank::Ace), card(Suit::Spades, Rank::Ten)],
    ] {
        let hand = hand_of(&cards);
        assert_eq!(hand.value(), 21);
        assert!(hand.is_blackjack());
        assert!(!hand.is_bust());
        assert!(hand.is_soft());
    }
}

#[test]
fn face_card_and_ace_is_blackjack() {
    let hand = hand_of(&[card(Suit::Hearts, Rank::King), card(Suit::Hearts, Rank::Ace)]);
    assert!(hand.is_blackjack());
    assert_eq!(hand.evaluate().to_string(), "blackjack");
}

#[test]
fn twenty_one_in_three_cards_is_not_blackjack() {
    let hand = hand_of(&[
        card(Suit::Spades, Rank::Ace),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Hearts, Rank::Nine),
    ]);
    assert_eq!(hand.value(), 21);
    assert!(!hand.is_blackjack());
    assert!(!hand.is_bust());
    assert!(hand.is_soft());
}

#[test]
fn ten_ace_nine() {
    let hand = hand_of(&[
        card(Suit::Spades, Rank::Ten),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Hearts, Rank::Nine),
    ]);
    assert_eq!(hand.value(), 20);
    assert!(!hand.is_blackjack());
    assert!(hand.is_soft());
    assert!(!hand.is_bust());
}

#[test]
fn two_aces() {
    let hand = hand_of(&[card(Suit::Clubs, Rank::Ace), card(Suit::Spades, Rank::Ace)]);
    assert_eq!(hand.value(), 12);
    assert!(!hand.is_blackjack());
    assert!(!hand.is_bust());
    assert!(hand.is_soft());
}

#[test]
fn four_aces_count_one_high() {
    let hand = hand_of(&four_aces());
    assert_eq!(hand.value(), 14);
    assert!(!hand.is_blackjack());
    assert!(!hand.is_bust());
    assert!(hand.is_soft());
}

/// Softness means "an ace is held", not "an ace is counted as 11". Four aces
/// and a ten only reach 14 with every ace low, yet the hand still reports soft.
/// Dealer soft-17 decisions rely on this reading.
#[test]
fn soft_quirk_ace_present_but_counted_low() {
    let mut cards = four_aces();
    cards.push(card(Suit::Spades, Rank::Ten));
    let hand = hand_of(&cards);

    assert_eq!(hand.value(), 14);
    assert!(hand.is_soft());
    assert!(!hand.is_bust());
    assert!(!hand.is_blackjack());
}

#[test]
fn ten_ten_two_busts() {
    let hand = hand_of(&[
        card(Suit::Spades, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Hearts, Rank::Two),
    ]);
    assert_eq!(hand.value(), 22);
    assert!(hand.is_bust());
    assert!(!hand.is_blackjack());
    assert!(!hand.is_soft());
    assert_eq!(hand.evaluate().to_string(), "bust 22");
}

#[test]
fn bust_with_ace_reports_smallest_total() {
    let hand = hand_of(&[
        card(Suit::Spades, Rank::Ten),
        card(Suit::Clubs, Rank::Eight),
        card(Suit::Hearts, Rank::Three),
        card(Suit::Clubs, Rank::Ace),
    ]);
    assert_eq!(hand.value(), 22);
    assert!(hand.is_bust());
    assert!(!hand.is_blackjack());
    assert!(hand.is_soft());
}

#[test]
fn possible_totals_branch_per_ace() {
    let totals: Vec<u16> = possible_totals(&four_aces()).into_iter().collect();
    assert_eq!(totals, [4, 14, 24, 34, 44]);

    let none: Vec<u16> = possible_totals(&[]).into_iter().collect();
    assert_eq!(none, [0]);
}

#[test]
fn hand_value_snapshot_matches_queries() {
    let hand = hand_of(&[card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::Six)]);
    let value = hand.evaluate();
    assert_eq!(value.total, hand.value());
    assert_eq!(value.soft, hand.is_soft());
    assert_eq!(value.bust, hand.is_bust());
    assert_eq!(value.blackjack, hand.is_blackjack());
    assert_eq!(value.to_string(), "soft 17");
}

#[test]
fn clear_empties_the_hand() {
    let mut hand = hand_of(&[card(Suit::Hearts, Rank::Ace)]);
    hand.extend([card(Suit::Hearts, Rank::Five)]);
    assert_eq!(hand.len(), 2);
    hand.clear();
    assert!(hand.is_empty());
    assert_eq!(hand.value(), 0);
}

fn any_card() -> impl Strategy<Value = Card> {
    (0..Suit::ALL.len(), 0..Rank::ALL.len())
        .prop_map(|(suit, rank)| Card::new(Suit::ALL[suit], Rank::ALL[rank]))
}

fn non_ace() -> impl Strategy<Value = Card> {
    (0..Suit::ALL.len(), 0..Rank::ALL.len() - 1)
        .prop_map(|(suit, rank)| Card::new(Suit::ALL[suit], Rank::ALL[rank]))
}

proptest! {
    #[test]
    fn non_ace_hands_sum_their_values(cards in prop::collection::vec(non_ace(), 0..12)) {
        let sum: u16 = cards.iter().map(|c| u16::from(c.value().max())).sum();
        let hand = hand_of(&cards);
        prop_assert_eq!(hand.value(), sum);
        prop_assert!(!hand.is_soft());
    }

    #[test]
    fn value_ignores_card_order(
        cards in prop::collection::vec(any_card(), 0..12),
        rotate in 0_usize..12,
    ) {
        let forward = hand_of(&cards).evaluate();

        let mut reversed = cards.clone();
        reversed.reverse();
        prop_assert_eq!(hand_of(&reversed).evaluate(), forward);

        let mut rotated = cards.clone();
        if !rotated.is_empty() {
            let by = rotate % rotated.len();
            rotated.rotate_left(by);
        }
        prop_assert_eq!(hand_of(&rotated).evaluate(), forward);

        let mut sorted = cards;
        sorted.sort_by_key(|c| (c.rank, c.suit));
        prop_assert_eq!(hand_of(&sorted).evaluate(), forward);
    }

    #[test]
    fn best_value_is_legal_when_possible(cards in prop::collection::vec(any_card(), 0..10)) {
        let hand = hand_of(&cards);
        let totals = possible_totals(&cards);
        let value = hand.value();

        prop_assert!(totals.contains(&value));
        prop_assert!(totals.len() <= 1 << cards.iter().filter(|c| c.is_ace()).count());
        if totals.iter().any(|&t| t <= 21) {
            prop_assert!(value <= 21);
            prop_assert!(totals.iter().all(|&t| t <= value || t > 21));
        } else {
            prop_assert_eq!(Some(&value), totals.first());
            prop_assert!(hand.is_bust());
        }
    }
}
