//! Shoe, hand valuer, turn engine, dealer policy, and resolver tests.

#![allow(clippy::float_cmp)]

use bjtable::Rank::{Ace, Eight, Five, Four, Jack, King, Nine, Queen, Seven, Six, Ten, Three, Two};
use bjtable::hand::{self, BLACKJACK};
use bjtable::result::{all_bust, resolve, resolve_all};
use bjtable::{
    DECK_SIZE, DealError, DealerHand, DealerPolicy, Decision, DecisionError, FixedStand, Hand,
    HandStatus, OptionsError, Rank, RoundOutcome, SessionStats, Shoe, TableOptions, Verdict,
    play_turn,
};

fn hand(cards: &[Rank]) -> Hand {
    Hand::from_cards(cards)
}

#[test]
fn value_without_aces_is_plain_sum() {
    for a in Rank::ALL.iter().filter(|rank| !rank.is_ace()) {
        for b in Rank::ALL.iter().filter(|rank| !rank.is_ace()) {
            assert_eq!(hand::value(&[*a, *b]), a.value() + b.value());
        }
    }
    assert_eq!(hand::value(&[Jack, Queen, Two]), 22);
    assert_eq!(hand::value(&[]), 0);
}

#[test]
fn aces_are_demoted_one_at_a_time() {
    assert_eq!(hand::value(&[Ace, Ace, Nine]), 21);
    assert_eq!(hand::value(&[Ace, Ace, Ace, Eight]), 21);
    assert_eq!(hand::value(&[King, Queen]), 20);
    assert_eq!(hand::value(&[Ace, Ace]), 12);
    assert_eq!(hand::value(&[Ace, King, Five]), 16);
    assert_eq!(hand::value(&[Ace, Ace, King, Queen]), 22);
    assert_eq!(hand::value(&[Nine, Ace, Ace]), hand::value(&[Ace, Nine, Ace]));
}

#[test]
fn blackjack_and_bust_queries() {
    assert!(hand::is_blackjack(&[Ace, King]));
    assert_eq!(hand::value(&[Ace, King]), BLACKJACK);
    assert!(!hand::is_blackjack(&[Seven, Seven, Seven]));
    assert!(!hand::is_blackjack(&[Ace, Ace, Nine]));

    assert!(hand::is_bust(&[Ten, Ten, Five]));
    assert!(!hand::is_bust(&[Ten, Ace, Ace]));

    let natural = hand(&[Queen, Ace]);
    assert_eq!(natural.status(), HandStatus::Blackjack);
    assert!(natural.is_soft());
    assert_eq!(hand(&[Ten, Ten, Two]).status(), HandStatus::Bust);
    assert_eq!(hand(&[Ten, Two]).status(), HandStatus::Active);
}

#[test]
fn soft_17_detection() {
    assert!(hand::is_soft_17(&[Ace, Six]));
    assert!(!hand::is_soft_17(&[Ace, Six, King]));
    assert!(hand::is_soft_17(&[Ace, Ace, Five]));
    assert!(hand::is_soft_17(&[Ace, Two, Four]));
    assert!(!hand::is_soft_17(&[Ten, Seven]));
    assert!(!hand::is_soft_17(&[Three, Four]));
    assert_eq!(hand::hard_total(&[Ace, Ace, Five]), 7);
}

#[test]
fn dealer_hand_visibility_and_values() {
    let mut dealer = DealerHand::new();
    dealer.add_card(Ace);
    dealer.add_card(Six);

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.up_card(), Some(Ace));
    assert_eq!(dealer.visible_value(), 11);

    dealer.reveal_hole();
    assert_eq!(dealer.visible_value(), 17);
    assert!(dealer.hand().is_soft_17());

    dealer.clear();
    assert!(dealer.is_empty());
    assert!(!dealer.is_hole_revealed());
}

#[test]
fn rank_display() {
    let symbols: Vec<String> = Rank::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(
        symbols,
        ["2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A"]
    );
}

#[test]
fn shoe_holds_four_of_each_rank_per_deck() {
    let shoe = Shoe::new(1, 3);
    assert_eq!(shoe.remaining(), DECK_SIZE);
    assert_eq!(shoe.original_size(), DECK_SIZE);
    for rank in Rank::ALL {
        assert_eq!(shoe.cards().iter().filter(|&&c| c == rank).count(), 4);
    }

    let six = Shoe::new(6, 3);
    assert_eq!(six.remaining(), 312);
    for rank in Rank::ALL {
        assert_eq!(six.cards().iter().filter(|&&c| c == rank).count(), 24);
    }
}

#[test]
fn shoe_is_reproducible_from_seed() {
    assert_eq!(Shoe::new(2, 9).cards(), Shoe::new(2, 9).cards());
    assert_ne!(Shoe::new(2, 9).cards(), Shoe::new(2, 10).cards());
}

#[test]
fn dealing_past_the_end_fails() {
    let mut shoe = Shoe::new(1, 5);
    for _ in 0..DECK_SIZE {
        shoe.deal().unwrap();
    }
    assert_eq!(shoe.remaining(), 0);
    assert_eq!(shoe.deal().unwrap_err(), DealError::EmptyShoe);
    assert_eq!(shoe.deal().unwrap_err(), DealError::EmptyShoe);
}

#[test]
fn stacked_shoe_deals_in_order() {
    let mut shoe = Shoe::stacked(&[Two, King, Ace]);
    assert_eq!(shoe.original_size(), 3);
    assert_eq!(shoe.deal(), Ok(Two));
    assert_eq!(shoe.deal(), Ok(King));
    assert_eq!(shoe.deal(), Ok(Ace));
    assert_eq!(shoe.deal(), Err(DealError::EmptyShoe));
}

#[test]
fn reshuffle_threshold() {
    let mut shoe = Shoe::new(6, 1);
    assert!(!shoe.needs_reshuffle());

    for _ in 0..233 {
        shoe.deal().unwrap();
    }
    assert_eq!(shoe.remaining(), 79);
    assert!(!shoe.needs_reshuffle());

    shoe.deal().unwrap();
    assert_eq!(shoe.remaining(), 78);
    assert!(shoe.needs_reshuffle());

    shoe.deal().unwrap();
    assert_eq!(shoe.remaining(), 77);
    assert!(shoe.needs_reshuffle());

    assert!(shoe.check_and_reshuffle());
    assert_eq!(shoe.remaining(), 312);
    assert!(!shoe.needs_reshuffle());
    assert!(!shoe.check_and_reshuffle());
}

#[test]
fn zero_penetration_never_reshuffles() {
    let mut shoe = Shoe::new(1, 1).with_penetration(0.0);
    for _ in 0..DECK_SIZE {
        shoe.deal().unwrap();
    }
    assert_eq!(shoe.used_fraction(), 1.0);
    assert!(!shoe.needs_reshuffle());
}

#[test]
fn can_start_round_needs_two_cards_per_participant() {
    let shoe = Shoe::stacked(&[Two; 6]);
    assert!(shoe.can_start_round(3));
    assert!(!shoe.can_start_round(4));
}

#[test]
fn can_cover_round_reserves_cards_once_dealt_from() {
    let fresh = Shoe::stacked(&[Two; 3]);
    assert!(fresh.can_cover_round(13));

    let mut shoe = Shoe::new(1, 1);
    shoe.deal().unwrap();
    assert_eq!(shoe.remaining(), 51);
    assert!(shoe.can_cover_round(12));
    assert!(!shoe.can_cover_round(13));
}

#[test]
fn fixed_stand_draws_nothing() {
    let mut shoe = Shoe::stacked(&[Ten, Ten]);
    let mut player = hand(&[Two, Three]);

    let outcome = play_turn(&mut player, &mut shoe, &mut FixedStand, Some(Ten)).unwrap();
    assert_eq!(outcome.status, HandStatus::Stand);
    assert!(outcome.drawn.is_empty());
    assert_eq!(player.len(), 2);
    assert_eq!(shoe.remaining(), 2);
}

#[test]
fn natural_never_consults_the_source() {
    let mut shoe = Shoe::stacked(&[Ten]);
    let mut player = hand(&[Ace, Jack]);
    let mut source = |_: &Hand, _: Option<Rank>| -> Decision {
        panic!("a natural must not be asked for a decision")
    };

    let outcome = play_turn(&mut player, &mut shoe, &mut source, None).unwrap();
    assert_eq!(outcome.status, HandStatus::Blackjack);
    assert_eq!(shoe.remaining(), 1);
}

#[test]
fn hitting_until_bust_stops_the_turn() {
    let mut shoe = Shoe::stacked(&[Four, Nine, Two]);
    let mut player = hand(&[Ten, Two]);
    let mut queries = 0;
    let mut always_hit = |_: &Hand, _: Option<Rank>| {
        queries += 1;
        Decision::Hit
    };

    let outcome = play_turn(&mut player, &mut shoe, &mut always_hit, None).unwrap();
    assert_eq!(outcome.status, HandStatus::Bust);
    assert_eq!(outcome.drawn, vec![Four, Nine]);
    assert_eq!(player.value(), 25);
    assert_eq!(queries, 2);
    assert_eq!(shoe.remaining(), 1);
}

#[test]
fn hitting_on_an_empty_shoe_fails() {
    let mut shoe = Shoe::stacked(&[]);
    let mut player = hand(&[Two, Three]);
    let mut always_hit = |_: &Hand, _: Option<Rank>| Decision::Hit;

    assert_eq!(
        play_turn(&mut player, &mut shoe, &mut always_hit, None).unwrap_err(),
        DealError::EmptyShoe
    );
}

#[test]
fn dealer_hits_soft_17_when_configured() {
    let mut dealer = DealerHand::new();
    dealer.add_card(Ace);
    dealer.add_card(Six);
    let mut shoe = Shoe::stacked(&[Ten, Five]);

    let outcome = DealerPolicy::new(true).play(&mut dealer, &mut shoe).unwrap();
    assert!(!outcome.drawn.is_empty());
    assert_eq!(outcome.drawn, vec![Ten]);
    assert_eq!(dealer.value(), 17);
    assert_eq!(outcome.status, HandStatus::Stand);
    assert!(dealer.is_hole_revealed());
}

#[test]
fn dealer_stands_on_soft_17_when_configured() {
    let mut dealer = DealerHand::new();
    dealer.add_card(Ace);
    dealer.add_card(Six);
    let mut shoe = Shoe::stacked(&[Ten]);

    let outcome = DealerPolicy::new(false).play(&mut dealer, &mut shoe).unwrap();
    assert!(outcome.drawn.is_empty());
    assert_eq!(outcome.status, HandStatus::Stand);
    assert_eq!(shoe.remaining(), 1);
}

#[test]
fn dealer_draw_rule() {
    let policy = DealerPolicy::default();
    assert!(policy.hit_soft_17);
    assert!(policy.must_hit(&hand(&[Ten, Six])));
    assert!(policy.must_hit(&hand(&[Ace, Ace, Five])));
    assert!(!policy.must_hit(&hand(&[Ten, Seven])));
    assert!(!policy.must_hit(&hand(&[Ace, Seven])));

    let lenient = DealerPolicy::new(false);
    assert!(!lenient.must_hit(&hand(&[Ace, Ace, Five])));
    assert!(lenient.must_hit(&hand(&[Ace, Five])));
}

#[test]
fn dealer_draws_to_seventeen_and_can_bust() {
    let mut dealer = DealerHand::new();
    dealer.add_card(Ten);
    dealer.add_card(Two);
    let mut shoe = Shoe::stacked(&[Three, King, Four]);

    let outcome = DealerPolicy::default().play(&mut dealer, &mut shoe).unwrap();
    assert_eq!(outcome.drawn, vec![Three, King]);
    assert_eq!(outcome.status, HandStatus::Bust);
    assert_eq!(dealer.value(), 25);
}

#[test]
fn dealer_natural_draws_nothing() {
    let mut dealer = DealerHand::new();
    dealer.add_card(King);
    dealer.add_card(Ace);
    let mut shoe = Shoe::stacked(&[Two]);

    let outcome = DealerPolicy::default().play(&mut dealer, &mut shoe).unwrap();
    assert_eq!(outcome.status, HandStatus::Blackjack);
    assert!(outcome.drawn.is_empty());
}

#[test]
fn resolution_precedence() {
    let cases: [(&[Rank], &[Rank], RoundOutcome); 9] = [
        (&[Ace, King], &[Nine, Nine], RoundOutcome::PlayerBlackjack),
        (&[Ace, King], &[Ace, Queen], RoundOutcome::BlackjackPush),
        (&[Ten, Ten, Five], &[Ten, Nine], RoundOutcome::PlayerBust),
        (&[Ten, Ten, Five], &[Ten, Six, Nine], RoundOutcome::PlayerBust),
        (&[Ten, Nine], &[Ten, Ten, Five], RoundOutcome::DealerBust),
        (&[Ten, Five, Six], &[Ace, Jack], RoundOutcome::DealerBlackjack),
        (&[Ten, Eight], &[Ten, Seven], RoundOutcome::PlayerHigher),
        (&[Ten, Seven], &[Ten, Eight], RoundOutcome::PlayerLower),
        (&[Ten, Eight], &[Ten, Eight], RoundOutcome::ValuePush),
    ];

    for (player, dealer, expected) in cases {
        assert_eq!(
            resolve(&hand(player), &hand(dealer)),
            expected,
            "{player:?} vs {dealer:?}"
        );
    }
}

#[test]
fn outcomes_map_to_verdicts() {
    assert_eq!(RoundOutcome::PlayerBlackjack.verdict(), Verdict::Win);
    assert_eq!(RoundOutcome::DealerBust.verdict(), Verdict::Win);
    assert_eq!(RoundOutcome::PlayerHigher.verdict(), Verdict::Win);
    assert_eq!(RoundOutcome::BlackjackPush.verdict(), Verdict::Push);
    assert_eq!(RoundOutcome::ValuePush.verdict(), Verdict::Push);
    assert_eq!(RoundOutcome::PlayerBust.verdict(), Verdict::Lose);
    assert_eq!(RoundOutcome::DealerBlackjack.verdict(), Verdict::Lose);
    assert_eq!(RoundOutcome::PlayerLower.verdict(), Verdict::Lose);
}

#[test]
fn resolve_all_and_all_bust() {
    let busted = [hand(&[Ten, Ten, Five]), hand(&[King, Queen, Three])];
    assert!(all_bust(&busted));

    let mixed = [hand(&[Ten, Ten, Five]), hand(&[Nine, Nine])];
    assert!(!all_bust(&mixed));

    let outcomes = resolve_all(&mixed, &hand(&[Ten, Seven]));
    assert_eq!(
        outcomes,
        vec![RoundOutcome::PlayerBust, RoundOutcome::PlayerHigher]
    );
}

#[test]
fn session_stats_count_verdicts() {
    let mut stats = SessionStats::default();
    stats.record(RoundOutcome::PlayerBlackjack);
    stats.record(RoundOutcome::PlayerBust);
    stats.record(RoundOutcome::ValuePush);
    stats.record(RoundOutcome::BlackjackPush);

    assert_eq!(stats.rounds, 4);
    assert_eq!(stats.wins, 1);
    assert_eq!(stats.losses, 1);
    assert_eq!(stats.pushes, 2);
    assert_eq!(stats.blackjacks, 2);
}

#[test]
fn decision_parsing() {
    assert_eq!("h".parse::<Decision>(), Ok(Decision::Hit));
    assert_eq!(" H \n".parse::<Decision>(), Ok(Decision::Hit));
    assert_eq!("S".parse::<Decision>(), Ok(Decision::Stand));
    assert_eq!("s\r\n".parse::<Decision>(), Ok(Decision::Stand));
    assert_eq!("hit".parse::<Decision>(), Err(DecisionError::Invalid));
    assert_eq!("Stand".parse::<Decision>(), Err(DecisionError::Invalid));
    assert_eq!("hs".parse::<Decision>(), Err(DecisionError::Invalid));
    assert_eq!("x".parse::<Decision>(), Err(DecisionError::Invalid));
    assert_eq!("".parse::<Decision>(), Err(DecisionError::Invalid));
    assert_eq!("1".parse::<Decision>(), Err(DecisionError::Invalid));
}

#[test]
fn options_builder_and_validation() {
    let options = TableOptions::default();
    assert_eq!(options.decks, 6);
    assert_eq!(options.players, 5);
    assert_eq!(options.user_seat, 1);
    assert!(options.hit_soft_17);
    assert_eq!(options.penetration, 0.75);
    assert!(options.validate().is_ok());

    assert_eq!(
        TableOptions::default().with_decks(9).validate(),
        Err(OptionsError::InvalidDecks {
            got: 9,
            min: 1,
            max: 8
        })
    );
    assert_eq!(
        TableOptions::default().with_decks(0).validate(),
        Err(OptionsError::InvalidDecks {
            got: 0,
            min: 1,
            max: 8
        })
    );
    assert_eq!(
        TableOptions::default().with_players(13).validate(),
        Err(OptionsError::InvalidPlayers {
            got: 13,
            min: 1,
            max: 12
        })
    );
    assert_eq!(
        TableOptions::default()
            .with_players(3)
            .with_user_seat(4)
            .validate(),
        Err(OptionsError::InvalidSeat { got: 4, players: 3 })
    );
    assert!(
        TableOptions::default()
            .with_players(12)
            .with_user_seat(12)
            .with_decks(8)
            .validate()
            .is_ok()
    );
}

#[test]
fn penetration_must_be_a_fraction() {
    for penetration in [0.0, 0.5, 0.75, 1.0] {
        let options = TableOptions::default().with_penetration(penetration);
        assert!(options.validate().is_ok(), "{penetration} should be accepted");
    }
    for penetration in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
        let options = TableOptions::default().with_penetration(penetration);
        assert_eq!(
            options.validate(),
            Err(OptionsError::InvalidPenetration),
            "{penetration} should be rejected"
        );
    }
}
