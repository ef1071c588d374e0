//! Round engine integration tests.

use bjtable::card::{ACE, JACK, KING, QUEEN, TEN};
use bjtable::{
    Action, ActionError, BetError, Card, DEALER_NAME, DealError, Deck, HandOutcome, JoinError,
    RoundState, SettleError, Suit, Table, TableOptions,
};

const fn card(rank: u8) -> Card {
    Card::new(rank, Suit::Spades)
}

fn stacked_table(options: TableOptions, draws: &[u8]) -> Table {
    let draws: Vec<Card> = draws.iter().map(|&rank| card(rank)).collect();
    Table::with_shoe(options, Deck::stacked(&draws, 1))
}

/// Seats `players` with `bankroll`, bets `bet` for each and deals.
fn seat_and_deal(table: &Table, players: &[&str], bankroll: usize, bet: usize) {
    for name in players {
        table.join(name, bankroll).unwrap();
    }
    table.start_betting().unwrap();
    for name in players {
        table.bet(name, bet).unwrap();
    }
    table.deal().unwrap();
}

fn stay_all(table: &Table) {
    while let Some(name) = table.current_player() {
        table.stay(&name).unwrap();
    }
}

#[test]
fn deal_alternates_dealer_then_players() {
    // dealer, Ann, Bob, dealer, Ann, Bob
    let table = stacked_table(TableOptions::default(), &[2, 3, 4, 5, 6, 7]);
    seat_and_deal(&table, &["Ann", "Bob"], 100, 10);

    let dealer = table.dealer();
    assert_eq!(dealer.hand().cards(), &[card(2), card(5)]);
    assert_eq!(table.dealer_up_card(), Some(card(2)));
    assert_eq!(
        table.player("Ann").unwrap().hand().cards(),
        &[card(3), card(6)]
    );
    assert_eq!(
        table.player("Bob").unwrap().hand().cards(),
        &[card(4), card(7)]
    );
    assert_eq!(table.state(), RoundState::PlayerTurns);
    assert_eq!(table.current_player().as_deref(), Some("Ann"));
    assert_eq!(table.bankroll("Ann"), Some(90));
}

#[test]
fn dealer_bust_pays_blackjack_and_even_money() {
    // dealer T, Ann A, Bob 9, dealer 6, Ann K, Bob 9, dealer hits 7
    let table = stacked_table(
        TableOptions::default(),
        &[TEN, ACE, 9, 6, KING, 9, 7],
    );
    for name in ["Ann", "Bob"] {
        table.join(name, 100).unwrap();
    }
    table.start_betting().unwrap();
    table.bet("Ann", 5).unwrap();
    table.bet("Bob", 10).unwrap();
    table.deal().unwrap();
    stay_all(&table);

    let drawn = table.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(7)]);

    let result = table.settle().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.dealer_value, 23);

    let ann = result.player("Ann").unwrap();
    assert_eq!(ann.outcome, HandOutcome::Blackjack);
    assert_eq!(ann.payout, 12);
    assert_eq!(table.bankroll("Ann"), Some(107));

    let bob = result.player("Bob").unwrap();
    assert_eq!(bob.outcome, HandOutcome::Win);
    assert_eq!(bob.payout, 20);
    assert_eq!(table.bankroll("Bob"), Some(110));
}

#[test]
fn dealer_blackjack_pushes_only_player_blackjack() {
    // dealer A, Ann A, Bob 9, Cy K, dealer K, Ann Q, Bob 9, Cy Q
    let table = stacked_table(
        TableOptions::default(),
        &[ACE, ACE, 9, KING, KING, QUEEN, 9, QUEEN],
    );
    seat_and_deal(&table, &["Ann", "Bob", "Cy"], 100, 10);
    stay_all(&table);

    assert!(table.dealer_play().unwrap().is_empty());
    let result = table.settle().unwrap();
    assert!(result.dealer_blackjack);

    assert_eq!(result.player("Ann").unwrap().outcome, HandOutcome::Push);
    assert_eq!(table.bankroll("Ann"), Some(100));
    assert_eq!(result.player("Bob").unwrap().outcome, HandOutcome::Lose);
    assert_eq!(table.bankroll("Bob"), Some(90));
    // A two-card 20 is not a blackjack.
    assert_eq!(result.player("Cy").unwrap().outcome, HandOutcome::Lose);
    assert_eq!(table.bankroll("Cy"), Some(90));
}

#[test]
fn dealer_standing_compares_totals() {
    // dealer T, Ann K, Bob 9, Cy T, dealer 8, Ann Q, Bob 9, Cy 7
    let table = stacked_table(
        TableOptions::default(),
        &[TEN, KING, 9, TEN, 8, QUEEN, 9, 7],
    );
    seat_and_deal(&table, &["Ann", "Bob", "Cy"], 100, 10);
    stay_all(&table);
    table.dealer_play().unwrap();

    let result = table.settle().unwrap();
    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.player("Ann").unwrap().outcome, HandOutcome::Win);
    assert_eq!(result.player("Bob").unwrap().outcome, HandOutcome::Push);
    assert_eq!(result.player("Cy").unwrap().outcome, HandOutcome::Lose);
    assert_eq!(table.bankroll("Ann"), Some(110));
    assert_eq!(table.bankroll("Bob"), Some(100));
    assert_eq!(table.bankroll("Cy"), Some(90));
}

#[test]
fn player_blackjack_beats_dealer_three_card_21() {
    // dealer 6, Ann A, Bob T, dealer 5, Ann J, Bob Q, dealer hits T
    let table = stacked_table(
        TableOptions::default(),
        &[6, ACE, TEN, 5, JACK, QUEEN, TEN],
    );
    seat_and_deal(&table, &["Ann", "Bob"], 100, 10);
    stay_all(&table);
    table.dealer_play().unwrap();

    let result = table.settle().unwrap();
    assert_eq!(result.dealer_value, 21);
    assert!(!result.dealer_blackjack);
    assert_eq!(result.player("Ann").unwrap().outcome, HandOutcome::Blackjack);
    assert_eq!(table.bankroll("Ann"), Some(115));
    assert_eq!(result.player("Bob").unwrap().outcome, HandOutcome::Lose);
}

#[test]
fn busted_player_loses_even_when_dealer_busts() {
    // dealer T, Ann T, Bob 5, dealer 6, Ann 6, Bob 6; Ann hits K (bust),
    // Bob hits T (21), dealer hits 9 (bust)
    let table = stacked_table(
        TableOptions::default(),
        &[TEN, TEN, 5, 6, 6, 6, KING, TEN, 9],
    );
    seat_and_deal(&table, &["Ann", "Bob"], 100, 10);

    assert_eq!(table.hit("Ann").unwrap(), card(KING));
    // The bust ended Ann's turn.
    assert_eq!(table.current_player().as_deref(), Some("Bob"));
    assert_eq!(table.hit("Bob").unwrap(), card(TEN));
    assert_eq!(table.current_player().as_deref(), Some("Bob"));
    table.stay("Bob").unwrap();
    assert_eq!(table.state(), RoundState::DealerTurn);

    table.dealer_play().unwrap();
    let result = table.settle().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.player("Ann").unwrap().outcome, HandOutcome::Lose);
    assert_eq!(result.player("Ann").unwrap().payout, 0);
    // A multi-card 21 against a dealer bust is an even-money win.
    assert_eq!(result.player("Bob").unwrap().outcome, HandOutcome::Win);
    assert_eq!(table.bankroll("Ann"), Some(90));
    assert_eq!(table.bankroll("Bob"), Some(110));
}

#[test]
fn player_may_hit_repeatedly() {
    // dealer T, Ann 2, dealer 7, Ann 2, then Ann hits 2, 3, 4, A, 5
    let table = stacked_table(
        TableOptions::default(),
        &[TEN, 2, 7, 2, 2, 3, 4, ACE, 5],
    );
    seat_and_deal(&table, &["Ann"], 100, 10);

    for _ in 0..4 {
        table.act("Ann", Action::Hit).unwrap();
        assert_eq!(table.state(), RoundState::PlayerTurns);
    }
    // 2+2+2+3+4+A = 24 with the ace at 11, so 14.
    assert_eq!(table.player("Ann").unwrap().hand().value(), 14);

    let drawn = table.act("Ann", Action::Hit).unwrap();
    assert_eq!(drawn, Some(card(5)));
    assert_eq!(table.player("Ann").unwrap().hand().value(), 19);
    assert_eq!(table.state(), RoundState::PlayerTurns);
    assert_eq!(table.act("Ann", Action::Stay).unwrap(), None);
    assert_eq!(table.state(), RoundState::DealerTurn);
}

#[test]
fn dealer_stands_on_soft_17_by_default() {
    // dealer A, Ann T, dealer 6, Ann 8
    let table = stacked_table(TableOptions::default(), &[ACE, TEN, 6, 8]);
    seat_and_deal(&table, &["Ann"], 100, 10);
    stay_all(&table);

    assert!(table.dealer_play().unwrap().is_empty());
    let result = table.settle().unwrap();
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.player("Ann").unwrap().outcome, HandOutcome::Win);
}

#[test]
fn dealer_hits_soft_17_when_configured() {
    // dealer A, Ann T, dealer 6, Ann 8, dealer hits 5 (hard 12) then T (22)
    let options = TableOptions::default().with_stand_on_soft_17(false);
    let table = stacked_table(options, &[ACE, TEN, 6, 8, 5, TEN]);
    seat_and_deal(&table, &["Ann"], 100, 10);
    stay_all(&table);

    let drawn = table.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(5), card(TEN)]);
    let result = table.settle().unwrap();
    assert!(result.dealer_bust);
}

#[test]
fn dealer_draws_to_configured_total() {
    // dealer T, Ann T, dealer 7, Ann 8, dealer hits 2 (hard 17 is below 18)
    let options = TableOptions::default().with_dealer_stands_on(18);
    let table = stacked_table(options, &[TEN, TEN, 7, 8, 2]);
    seat_and_deal(&table, &["Ann"], 100, 10);
    stay_all(&table);

    assert_eq!(table.dealer_play().unwrap(), vec![card(2)]);
    let result = table.settle().unwrap();
    assert_eq!(result.dealer_value, 19);
    assert_eq!(result.player("Ann").unwrap().outcome, HandOutcome::Lose);
}

#[test]
fn dealer_stands_at_configured_total() {
    // dealer T, Ann T, dealer 8, Ann 7: the dealer's 18 stands
    let options = TableOptions::default().with_dealer_stands_on(18);
    let table = stacked_table(options, &[TEN, TEN, 8, 7]);
    seat_and_deal(&table, &["Ann"], 100, 10);
    stay_all(&table);

    assert!(table.dealer_play().unwrap().is_empty());
    assert_eq!(table.dealer().hand().value(), 18);
}

#[test]
fn dealer_seat_uses_configured_bankroll() {
    let table = Table::new(TableOptions::default().with_dealer_bankroll(500), 1);
    let dealer = table.dealer();
    assert_eq!(dealer.name(), DEALER_NAME);
    assert_eq!(dealer.bankroll(), 500);
}

#[test]
fn players_snapshot_keeps_seat_order() {
    let table = Table::new(TableOptions::default(), 1);
    table.join("Cy", 30).unwrap();
    table.join("Ann", 10).unwrap();
    table.join("Bob", 20).unwrap();

    let players = table.players();
    let seats: Vec<(&str, usize)> = players.iter().map(|p| (p.name(), p.bankroll())).collect();
    assert_eq!(seats, vec![("Cy", 30), ("Ann", 10), ("Bob", 20)]);
}

#[test]
fn winnings_saturate_at_the_bankroll_limit() {
    // dealer T, Ann T, dealer 6, Ann 9, dealer hits T and busts
    let table = stacked_table(TableOptions::default(), &[TEN, TEN, 6, 9, TEN]);
    seat_and_deal(&table, &["Ann"], usize::MAX, 1);
    stay_all(&table);
    table.dealer_play().unwrap();

    let result = table.settle().unwrap();
    assert_eq!(result.player("Ann").unwrap().outcome, HandOutcome::Win);
    assert_eq!(table.bankroll("Ann"), Some(usize::MAX));
}

#[test]
fn dealer_plays_out_even_when_everyone_busts() {
    // dealer 2, Ann T, dealer 3, Ann 9, Ann hits K; dealer hits T, 4
    let table = stacked_table(TableOptions::default(), &[2, TEN, 3, 9, KING, TEN, 4]);
    seat_and_deal(&table, &["Ann"], 100, 10);
    table.hit("Ann").unwrap();
    assert_eq!(table.state(), RoundState::DealerTurn);

    let drawn = table.dealer_play().unwrap();
    assert_eq!(drawn.len(), 2);
    assert_eq!(table.dealer().hand().value(), 19);
}

#[test]
fn bankrupt_players_leave_after_settlement() {
    // dealer T, Ann 5, Bob 5, dealer 9, Ann 6, Bob 6: both lose 11 v 19
    let table = stacked_table(TableOptions::default(), &[TEN, 5, 5, 9, 6, 6]);
    table.join("Ann", 10).unwrap();
    table.join("Bob", 50).unwrap();
    table.start_betting().unwrap();
    table.bet("Ann", 10).unwrap();
    table.bet("Bob", 10).unwrap();
    table.deal().unwrap();
    stay_all(&table);
    table.dealer_play().unwrap();

    let result = table.settle().unwrap();
    assert_eq!(result.eliminated, vec![String::from("Ann")]);
    assert!(result.is_eliminated("Ann"));
    assert_eq!(result.player("Ann").unwrap().bankroll, 0);
    assert_eq!(table.state(), RoundState::Init);

    table.start_betting().unwrap();
    assert_eq!(table.player_names(), vec![String::from("Bob")]);
    assert!(table.player("Ann").is_none());
    assert_eq!(table.bankroll("Bob"), Some(40));
    assert_eq!(table.bet("Ann", 1), Err(BetError::PlayerNotFound));
}

#[test]
fn table_ends_when_everyone_is_eliminated() {
    // dealer T, Ann 5, dealer 9, Ann 6
    let table = stacked_table(TableOptions::default(), &[TEN, 5, 9, 6]);
    seat_and_deal(&table, &["Ann"], 10, 10);
    stay_all(&table);
    table.dealer_play().unwrap();
    table.settle().unwrap();

    assert_eq!(table.state(), RoundState::Terminal);
    assert_eq!(table.player_count(), 0);
    assert_eq!(table.start_betting(), Err(BetError::InvalidState));
}

#[test]
fn settlement_messages_follow_round_order() {
    // dealer T, Ann A, Bob 5, dealer 6, Ann K, Bob 5, dealer hits 7
    let table = stacked_table(
        TableOptions::default(),
        &[TEN, ACE, 5, 6, KING, 5, 7],
    );
    seat_and_deal(&table, &["Ann", "Bob"], 10, 10);
    table.stay("Ann").unwrap();
    table.stay("Bob").unwrap();
    table.dealer_play().unwrap();
    let result = table.settle().unwrap();

    assert_eq!(
        result.messages(),
        vec![
            "Dealer busted",
            "Ann got blackjack and won 25 dollars!",
            "Bob won 20 dollars",
            "Current status:",
            "Ann has 25 dollars",
            "Bob has 20 dollars",
        ]
    );
    assert_eq!(result.player("Ann").unwrap().net(), 15);
}

#[test]
fn bet_errors() {
    let table = Table::new(TableOptions::default().with_minimum_bet(5), 1);
    table.join("Ann", 20).unwrap();

    assert_eq!(table.bet("Ann", 5), Err(BetError::InvalidState));

    table.start_betting().unwrap();
    assert_eq!(table.bet("Ann", 0), Err(BetError::BelowMinimum));
    assert_eq!(table.bet("Ann", 4), Err(BetError::BelowMinimum));
    assert_eq!(table.bet("Ann", 21), Err(BetError::InsufficientFunds));
    assert_eq!(table.bet("Zed", 5), Err(BetError::PlayerNotFound));
    assert_eq!(table.bet("Zed", 1), Err(BetError::PlayerNotFound));
    assert_eq!(table.bankroll("Ann"), Some(20));

    assert_eq!(table.bet("Ann", 20), Ok(20));
    assert_eq!(table.bet("Ann", 5), Err(BetError::AlreadyPlaced));
    assert_eq!(table.bet("Ann", 1), Err(BetError::AlreadyPlaced));
    assert_eq!(table.bankroll("Ann"), Some(0));
}

#[test]
fn join_errors() {
    let table = Table::new(TableOptions::default(), 1);
    table.join("Ann", 10).unwrap();

    assert_eq!(table.join("Ann", 10), Err(JoinError::DuplicateName));
    assert_eq!(table.join("Bob", 0), Err(JoinError::InsufficientBankroll));

    table.start_betting().unwrap();
    assert_eq!(table.join("Bob", 10), Err(JoinError::InvalidState));
}

#[test]
fn leave_between_rounds_only() {
    let table = Table::new(TableOptions::default(), 1);
    table.join("Ann", 10).unwrap();
    table.join("Bob", 10).unwrap();
    assert!(table.leave("Ann"));
    assert!(!table.leave("Ann"));
    assert_eq!(table.player_names(), vec![String::from("Bob")]);

    table.start_betting().unwrap();
    assert!(!table.leave("Bob"));
}

#[test]
fn deal_errors() {
    let table = Table::new(TableOptions::default(), 1);
    assert_eq!(table.deal(), Err(DealError::InvalidState));
    assert_eq!(table.start_betting(), Err(BetError::NoPlayers));

    table.join("Ann", 10).unwrap();
    table.join("Bob", 10).unwrap();
    table.start_betting().unwrap();
    table.bet("Ann", 5).unwrap();
    assert_eq!(table.deal(), Err(DealError::MissingBets));
}

#[test]
fn action_errors() {
    let table = stacked_table(TableOptions::default(), &[TEN, 5, 5, 9, 6, 6]);
    table.join("Ann", 10).unwrap();
    table.join("Bob", 10).unwrap();
    assert_eq!(table.hit("Ann"), Err(ActionError::InvalidState));

    table.start_betting().unwrap();
    table.bet("Ann", 5).unwrap();
    table.bet("Bob", 5).unwrap();
    table.deal().unwrap();

    assert_eq!(table.hit("Bob"), Err(ActionError::NotYourTurn));
    assert_eq!(table.stay("Zed"), Err(ActionError::PlayerNotFound));
    assert_eq!(table.dealer_play(), Err(SettleError::InvalidState));
    assert_eq!(table.settle().unwrap_err(), SettleError::InvalidState);
}

#[test]
fn action_parses_hit_and_stay() {
    assert_eq!("hit".parse::<Action>(), Ok(Action::Hit));
    assert_eq!(" HIT ".parse::<Action>(), Ok(Action::Hit));
    assert_eq!("s".parse::<Action>(), Ok(Action::Stay));
    assert_eq!("Stay".parse::<Action>(), Ok(Action::Stay));
    assert!("double".parse::<Action>().is_err());
    assert!("".parse::<Action>().is_err());
}

#[test]
fn deck_refills_mid_round_without_failing() {
    // Only three cards stacked; the fourth deal comes from a refilled deck.
    let table = stacked_table(TableOptions::default(), &[TEN, 5, 9]);
    seat_and_deal(&table, &["Ann"], 10, 5);

    assert_eq!(table.player("Ann").unwrap().hand().len(), 2);
    assert_eq!(table.cards_remaining(), 51);
    assert_eq!(table.into_shoe().reshuffles(), 1);
}
