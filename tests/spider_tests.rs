//! End-to-end Spider scenarios: full-pack deals, same-suit runs,
//! automatic sequence collection.

use solitaire_core::{registry, Card, GameSession, PileId, PileKind, Suit};

fn up(suit: Suit, rank: u8) -> Card {
    let mut c = Card::new(suit, rank);
    c.face_up = true;
    c
}

fn clear_pile(session: &mut GameSession, id: PileId) {
    session.state_mut().pile_mut(id).unwrap().take_from(0);
}

#[test]
fn fresh_deal_has_104_cards_in_shape() {
    for id in ["spider", "spider-2", "spider-4"] {
        let session = registry::create(id, 17).unwrap();
        let state = session.state();

        assert_eq!(state.total_cards(), 104);
        assert_eq!(state.pile_ids_of(PileKind::Tableau).len(), 10);
        assert_eq!(state.pile_ids_of(PileKind::Foundation).len(), 8);
        assert_eq!(state.pile(state.pile_ids_of(PileKind::Stock)[0]).unwrap().len(), 50);
    }
}

#[test]
fn completing_a_run_collects_it_to_a_foundation() {
    let mut session = registry::create("spider", 6).unwrap();
    let tableau = session.state().pile_ids_of(PileKind::Tableau);
    let foundations = session.state().pile_ids_of(PileKind::Foundation);

    // dst: a face-down card buried under K..2 of spades; src: the ace.
    clear_pile(&mut session, tableau[0]);
    clear_pile(&mut session, tableau[1]);
    {
        let state = session.state_mut();
        let dst = state.pile_mut(tableau[0]).unwrap();
        dst.push(Card::new(Suit::Spades, 7)); // face down
        for rank in (2..=13).rev() {
            dst.push(up(Suit::Spades, rank));
        }
    }
    session.state_mut().pile_mut(tableau[1]).unwrap().push(up(Suit::Spades, 1));

    let total_before = session.state().total_cards();
    assert!(session.try_move(tableau[1], 0, tableau[0]));

    // The run moved to the first foundation within the same action.
    let foundation = session.state().pile(foundations[0]).unwrap();
    assert_eq!(foundation.len(), 13);
    assert_eq!(foundation.cards()[0].rank, 13);
    assert_eq!(foundation.top().unwrap().rank, 1);

    // The buried card surfaced face up; nothing was lost or duplicated.
    let dst = session.state().pile(tableau[0]).unwrap();
    assert_eq!(dst.len(), 1);
    assert!(dst.top().unwrap().face_up);
    assert_eq!(session.state().total_cards(), total_before);
}

#[test]
fn undo_reverts_an_automatic_collection() {
    let mut session = registry::create("spider", 6).unwrap();
    let tableau = session.state().pile_ids_of(PileKind::Tableau);

    clear_pile(&mut session, tableau[0]);
    clear_pile(&mut session, tableau[1]);
    {
        let state = session.state_mut();
        let dst = state.pile_mut(tableau[0]).unwrap();
        for rank in (2..=13).rev() {
            dst.push(up(Suit::Spades, rank));
        }
    }
    session.state_mut().pile_mut(tableau[1]).unwrap().push(up(Suit::Spades, 1));

    let before = session.state().snapshot();
    assert!(session.try_move(tableau[1], 0, tableau[0]));
    assert!(session.undo());
    assert_eq!(session.state().snapshot(), before);
}

#[test]
fn stock_deal_adds_one_card_per_column() {
    let mut session = registry::create("spider", 17).unwrap();
    let stock = session.state().pile_ids_of(PileKind::Stock)[0];
    let tableau = session.state().pile_ids_of(PileKind::Tableau);

    let before: Vec<usize> = tableau
        .iter()
        .map(|&t| session.state().pile(t).unwrap().len())
        .collect();

    session.click_stock();

    assert_eq!(session.state().pile(stock).unwrap().len(), 40);
    for (i, &t) in tableau.iter().enumerate() {
        assert_eq!(session.state().pile(t).unwrap().len(), before[i] + 1);
        assert!(session.state().pile(t).unwrap().top().unwrap().face_up);
    }
}

#[test]
fn stock_deal_refused_while_a_column_is_empty() {
    let mut session = registry::create("spider", 17).unwrap();
    let stock = session.state().pile_ids_of(PileKind::Stock)[0];
    let tableau = session.state().pile_ids_of(PileKind::Tableau);

    clear_pile(&mut session, tableau[4]);

    session.click_stock();
    assert_eq!(session.state().pile(stock).unwrap().len(), 50);
    assert!(session.state().pile(tableau[4]).unwrap().is_empty());
}

#[test]
fn player_moves_never_target_foundations() {
    let mut session = registry::create("spider", 17).unwrap();
    let tableau = session.state().pile_ids_of(PileKind::Tableau);
    let foundations = session.state().pile_ids_of(PileKind::Foundation);

    clear_pile(&mut session, tableau[0]);
    session.state_mut().pile_mut(tableau[0]).unwrap().push(up(Suit::Spades, 1));

    assert!(!session.try_move(tableau[0], 0, foundations[0]));
    assert!(session.state().pile(foundations[0]).unwrap().is_empty());
}

#[test]
fn mixed_suit_runs_cannot_move_together() {
    let mut session = registry::create("spider-4", 17).unwrap();
    let tableau = session.state().pile_ids_of(PileKind::Tableau);

    clear_pile(&mut session, tableau[0]);
    clear_pile(&mut session, tableau[1]);
    clear_pile(&mut session, tableau[2]);
    {
        let state = session.state_mut();
        let src = state.pile_mut(tableau[0]).unwrap();
        src.push(up(Suit::Spades, 8));
        src.push(up(Suit::Hearts, 7)); // breaks the suit
    }
    session.state_mut().pile_mut(tableau[1]).unwrap().push(up(Suit::Clubs, 9));
    session.state_mut().pile_mut(tableau[2]).unwrap().push(up(Suit::Diamonds, 8));

    // The two-card run is rank-valid but suit-mixed.
    assert!(!session.try_move(tableau[0], 0, tableau[1]));
    // The top card alone is a valid single-card run.
    assert!(session.try_move(tableau[0], 1, tableau[2]));
}
