use poker_hand::cards::{Card, Rank, Suit};
use poker_hand::deck::Deck;
use poker_hand::evaluator::{compare, evaluate, Category, Outcome};
use poker_hand::hand::Hand;
use proptest::prelude::*;
use std::collections::HashSet;

fn any_rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Diamonds), Just(Suit::Spades), Just(Suit::Hearts), Just(Suit::Clubs),]
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_rank(), any_suit()).prop_map(|(r, s)| Card::new(r, s))
}

fn any_hand() -> impl Strategy<Value = Hand> {
    prop::array::uniform5(any_card()).prop_map(Hand::new)
}

/// Five distinct cards, dealt from a seeded deck.
fn dealt_hand() -> impl Strategy<Value = Hand> {
    any::<u64>().prop_map(|seed| {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        deck.deal_hand().expect("full deck")
    })
}

proptest! {
    #[test]
    fn encoding_round_trips(hand in any_hand()) {
        let encoded = hand.to_string();
        prop_assert_eq!(encoded.len(), 14);
        let parsed: Hand = encoded.parse().unwrap();
        prop_assert_eq!(parsed, hand);
    }

    #[test]
    fn evaluation_is_idempotent(hand in any_hand()) {
        let first = evaluate(&hand);
        for _ in 0..3 {
            prop_assert_eq!(evaluate(&hand), first);
        }
        prop_assert_eq!(hand.evaluate(), first);
    }

    #[test]
    fn comparison_is_antisymmetric(a in any_hand(), b in any_hand()) {
        let ab = compare(&a, &b);
        let ba = compare(&b, &a);
        if ab == ba {
            // Only full equality lets both sides win.
            prop_assert_eq!(ab, Outcome::Win);
            prop_assert_eq!(evaluate(&a), evaluate(&b));
            prop_assert_eq!(a.rank_sum(), b.rank_sum());
        } else {
            prop_assert_eq!(ab, ba.flip());
        }
    }

    #[test]
    fn higher_category_always_wins(a in any_hand(), b in any_hand()) {
        let ea = evaluate(&a);
        let eb = evaluate(&b);
        if ea.category > eb.category {
            prop_assert_eq!(compare(&a, &b), Outcome::Win);
            prop_assert_eq!(compare(&b, &a), Outcome::Loss);
        }
    }

    #[test]
    fn tiebreak_is_a_rank_in_the_hand(hand in any_hand()) {
        let eval = evaluate(&hand);
        prop_assert!(hand.cards().iter().any(|c| c.rank().value() == eval.tiebreak));
    }

    #[test]
    fn grouped_categories_match_distinct_rank_count(hand in dealt_hand()) {
        let distinct: HashSet<Rank> = hand.cards().iter().map(|c| c.rank()).collect();
        let eval = evaluate(&hand);
        match eval.category {
            Category::OnePair => prop_assert_eq!(distinct.len(), 4),
            Category::TwoPair | Category::ThreeOfKind => prop_assert_eq!(distinct.len(), 3),
            Category::FullHouse | Category::FourOfKind => prop_assert_eq!(distinct.len(), 2),
            _ => prop_assert_eq!(distinct.len(), 5),
        }
    }

    #[test]
    fn straight_categories_follow_rank_span(hand in any_hand()) {
        let eval = evaluate(&hand);
        let mut values: Vec<u8> = hand.cards().iter().map(|c| c.rank().value()).collect();
        values.sort_unstable();
        let spans_four = values[4] == values[0] + 4;
        let wheel = values == [1, 2, 3, 4, 13];
        let is_straight_category = matches!(
            eval.category,
            Category::Straight | Category::StraightFlush | Category::RoyalFlush
        );
        prop_assert_eq!(is_straight_category, spans_four || wheel);
    }

    #[test]
    fn paired_span_of_four_is_straight(
        low in 1u8..=9u8,
        extra in 0u8..=4u8,
        suits in prop::array::uniform5(any_suit()),
    ) {
        // Lowest and highest rank are four apart; the middle three repeat freely.
        let rank = |v: u8| Rank::ALL[usize::from(v - 1)];
        let values = [low, low + 4, low + extra, low + (extra + 1) % 5, low + (extra + 3) % 5];
        let cards: [Card; 5] = std::array::from_fn(|i| Card::new(rank(values[i]), suits[i]));
        let hand = Hand::new(cards);
        let flush = suits.iter().all(|s| *s == suits[0]);
        let expected = match (flush, low) {
            (true, 9) => Category::RoyalFlush,
            (true, _) => Category::StraightFlush,
            (false, _) => Category::Straight,
        };
        prop_assert_eq!(evaluate(&hand).category, expected);
    }
}
