//! Video poker integration tests.

use islandrs::{
    Card, DECK_SIZE, DrawError, PokerHand, PokerOptions, PrizeTable, VideoPoker, WagerError,
};

fn cards(notation: &str) -> Vec<Card> {
    notation
        .split_whitespace()
        .map(|s| s.parse().unwrap())
        .collect()
}

fn machine() -> VideoPoker {
    VideoPoker::new(PokerOptions::default(), 21)
}

#[test]
fn new_machine_is_ready_for_a_wager() {
    let machine = machine();
    assert_eq!(machine.deck.len(), DECK_SIZE);
    assert!(machine.hand.is_empty());
    assert_eq!(machine.balance, 100);
    assert_eq!(machine.round, 1);
    assert!(!machine.is_round_over());
    assert!(!machine.is_game_over());
}

#[test]
fn same_seed_same_deck() {
    let a = VideoPoker::new(PokerOptions::default(), 4);
    let b = VideoPoker::new(PokerOptions::default(), 4);
    let c = VideoPoker::new(PokerOptions::default(), 5);
    assert_eq!(a.deck, b.deck);
    assert_ne!(a.deck, c.deck);
}

#[test]
fn wager_errors() {
    let mut machine = machine();
    assert_eq!(machine.place_wager(0), Err(WagerError::ZeroWager));
    assert_eq!(machine.place_wager(101), Err(WagerError::InsufficientFunds));
    assert_eq!(machine.balance, 100);

    machine.place_wager(100).unwrap();
    assert_eq!(machine.balance, 0);
    assert_eq!(machine.wager, 100);
    assert_eq!(machine.place_wager(1), Err(WagerError::InvalidState));
}

#[test]
fn deal_needs_a_wager() {
    let mut machine = machine();
    assert_eq!(machine.deal(), Err(DrawError::InvalidState));

    machine.place_wager(5).unwrap();
    machine.deal().unwrap();
    assert_eq!(machine.hand.len(), 5);
    assert_eq!(machine.deck.len(), DECK_SIZE - 5);
    assert_eq!(machine.deal(), Err(DrawError::InvalidState));
}

#[test]
fn explicit_deal_is_checked_before_dealing() {
    let mut machine = machine();
    machine.place_wager(1).unwrap();

    assert_eq!(
        machine.deal_cards(&cards("As Ks Qs Js")),
        Err(DrawError::HandSize(4))
    );
    assert_eq!(
        machine.deal_cards(&cards("As Ks Qs Js As")),
        Err(DrawError::CardNotInDeck)
    );
    assert!(machine.hand.is_empty());
    assert_eq!(machine.deck.len(), DECK_SIZE);

    machine.deal_cards(&cards("As Ks Qs Js Ts")).unwrap();
    assert_eq!(machine.hand.cards(), cards("As Ks Qs Js Ts").as_slice());
    assert!(!machine.deck.contains(&"As".parse().unwrap()));
}

#[test]
fn draw_replaces_only_unheld_cards() {
    let mut machine = machine();
    let dealt = cards("2c 7d 9h Js 4c");
    machine.place_wager(2).unwrap();
    machine.deal_cards(&dealt).unwrap();

    assert_eq!(machine.draw(&[0, 5]), Err(DrawError::BadHoldIndex(5)));
    machine.draw(&[0, 3]).unwrap();

    let hand = machine.hand.cards();
    assert_eq!(hand.len(), 5);
    assert_eq!(hand[0], dealt[0]);
    assert_eq!(hand[3], dealt[3]);
    for i in [1, 2, 4] {
        assert!(!dealt.contains(&hand[i]));
    }
    assert_eq!(machine.deck.len(), DECK_SIZE - 8);
    assert_eq!(machine.draws, 1);
    assert!(machine.is_round_over());
    assert_eq!(machine.draw(&[]), Err(DrawError::InvalidState));
}

#[test]
fn settle_pays_the_prize_table() {
    let mut machine = machine();
    machine.place_wager(2).unwrap();
    machine.deal_cards(&cards("Kc Kd 4h 8s 2c")).unwrap();
    assert_eq!(machine.settle(), Err(DrawError::InvalidState));

    machine.draw(&[0, 1, 2, 3, 4]).unwrap();
    assert_eq!(machine.hand_rank(), PokerHand::JacksOrBetter);
    assert_eq!(machine.settle(), Ok(2));
    assert_eq!(machine.balance, 100);
    assert_eq!(machine.settle(), Err(DrawError::InvalidState));
}

#[test]
fn royal_flush_pays_the_jackpot() {
    let mut machine = machine();
    machine.place_wager(1).unwrap();
    machine.deal_cards(&cards("Th Jh Qh Kh Ah")).unwrap();
    machine.draw(&[0, 1, 2, 3, 4]).unwrap();

    assert_eq!(machine.hand_rank(), PokerHand::RoyalFlush);
    assert_eq!(machine.settle(), Ok(976));
    assert_eq!(machine.balance, 99 + 976);
}

#[test]
fn custom_prize_table() {
    let table = PrizeTable::new().with_payout(PokerHand::Nothing, 3);
    let options = PokerOptions::default().with_prize_table(table);
    let mut machine = VideoPoker::new(options, 1);
    machine.place_wager(10).unwrap();
    machine.deal_cards(&cards("2c 4d 6h 8s Tc")).unwrap();
    machine.draw(&[0, 1, 2, 3, 4]).unwrap();

    assert_eq!(machine.prize(), 30);
    assert_eq!(machine.settle(), Ok(30));
    assert_eq!(machine.balance, 120);
}

#[test]
fn more_draws_when_configured() {
    let options = PokerOptions::default().with_max_draws(2);
    let mut machine = VideoPoker::new(options, 8);
    machine.place_wager(1).unwrap();
    machine.deal().unwrap();

    machine.draw(&[]).unwrap();
    assert!(!machine.is_round_over());
    machine.draw(&[0]).unwrap();
    assert!(machine.is_round_over());
    assert_eq!(machine.deck.len(), DECK_SIZE - 5 - 5 - 4);
}

#[test]
fn new_round_resets_the_table() {
    let mut machine = machine();
    machine.place_wager(3).unwrap();
    machine.deal().unwrap();
    machine.draw(&[]).unwrap();
    machine.settle().unwrap();

    machine.new_round();
    assert_eq!(machine.round, 2);
    assert!(machine.hand.is_empty());
    assert_eq!(machine.deck.len(), DECK_SIZE);
    assert_eq!(machine.wager, 0);
    assert_eq!(machine.draws, 0);
    machine.place_wager(1).unwrap();
}

#[test]
fn broke_after_a_losing_round() {
    let options = PokerOptions::default().with_starting_balance(1);
    let mut machine = VideoPoker::new(options, 2);
    machine.place_wager(1).unwrap();
    machine.deal_cards(&cards("2c 4d 6h 8s Tc")).unwrap();
    machine.draw(&[0, 1, 2, 3, 4]).unwrap();
    assert!(!machine.is_game_over());

    assert_eq!(machine.settle(), Ok(0));
    assert_eq!(machine.balance, 0);
    assert!(machine.is_game_over());

    machine.new_round();
    assert_eq!(machine.place_wager(1), Err(WagerError::InsufficientFunds));
}
