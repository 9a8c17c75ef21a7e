mod common;

use std::collections::HashSet;

use common::*;
use proptest::prelude::*;
use teamsim_engine::{
    Dex, Dice, EngineError, IdentityId, MoveCatalog, Roster, RosterEntry, Type, ROSTER_SIZE,
};

fn explicit_entries() -> Vec<RosterEntry> {
    vec![
        RosterEntry::new(143, [33, 34, 89, 58]),
        RosterEntry::new(1, [14, 22, 33, 34]),
        RosterEntry::new(4, [7, 10, 52, 53]),
        RosterEntry::new(7, [8, 55, 57, 58]),
        RosterEntry::new(25, [9, 34, 84, 85]),
        RosterEntry::new(95, [14, 33, 34, 89]),
    ]
}

#[test]
fn random_rosters_never_repeat_an_identity() {
    let dex = sample_dex();
    let mut dice = Dice::from_seed(0);
    for _ in 0..10_000 {
        let roster = Roster::random(&dex, &mut dice).unwrap();
        assert_eq!(roster.len(), ROSTER_SIZE);
        let ids: HashSet<IdentityId> = roster.members().iter().map(|c| c.identity()).collect();
        assert_eq!(ids.len(), ROSTER_SIZE);
    }
}

#[test]
fn random_roster_is_reproducible() {
    let dex = sample_dex();
    let a = Roster::random(&dex, &mut Dice::from_seed(17)).unwrap();
    let b = Roster::random(&dex, &mut Dice::from_seed(17)).unwrap();
    assert_eq!(a.entries(), b.entries());
}

#[test]
fn random_roster_needs_six_identities() {
    let catalog = MoveCatalog::new([tackle(), growl()]).unwrap();
    let pool = (1..=5).map(|i| species(i, "Filler", (Type::Normal, None), [50; 6], &[33, 45]));
    let dex = Dex::new(pool, catalog).unwrap();
    let err = Roster::random(&dex, &mut Dice::from_seed(1)).unwrap_err();
    assert_eq!(err, EngineError::InsufficientIdentities { available: 5, needed: 6 });
}

#[test]
fn random_roster_surfaces_short_learnsets() {
    let catalog = MoveCatalog::new([tackle(), growl()]).unwrap();
    let pool = (1..=6).map(|i| species(i, "Filler", (Type::Normal, None), [50; 6], &[33, 45]));
    let dex = Dex::new(pool, catalog).unwrap();
    let err = Roster::random(&dex, &mut Dice::from_seed(1)).unwrap_err();
    assert!(matches!(err, EngineError::InsufficientMoves { available: 2, .. }));
}

#[test]
fn explicit_roster_preserves_order_and_moves() {
    let dex = sample_dex();
    let roster = Roster::explicit(&dex, &explicit_entries()).unwrap();
    let names: Vec<&str> = roster.members().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["Snorlax", "Bulbasaur", "Charmander", "Squirtle", "Pikachu", "Onix"]);
    assert_eq!(roster.entries(), explicit_entries());
}

#[test]
fn explicit_roster_rejects_bad_entries() {
    let dex = sample_dex();

    let mut short = explicit_entries();
    short.pop();
    assert_eq!(
        Roster::explicit(&dex, &short).unwrap_err(),
        EngineError::RosterSize { expected: 6, actual: 5 }
    );

    let mut three_moves = explicit_entries();
    three_moves[2].moves.pop();
    assert!(matches!(
        Roster::explicit(&dex, &three_moves),
        Err(EngineError::MalformedRoster { slot: 2, .. })
    ));

    let mut unlearnable = explicit_entries();
    unlearnable[4] = RosterEntry::new(25, [9, 34, 84, 57]);
    assert!(matches!(
        Roster::explicit(&dex, &unlearnable),
        Err(EngineError::MalformedRoster { slot: 4, .. })
    ));

    let mut unknown_move = explicit_entries();
    unknown_move[0] = RosterEntry::new(143, [33, 34, 89, 9999]);
    assert!(matches!(
        Roster::explicit(&dex, &unknown_move),
        Err(EngineError::MalformedRoster { slot: 0, .. })
    ));

    let mut unknown_identity = explicit_entries();
    unknown_identity[1] = RosterEntry::new(151, [33, 34, 89, 58]);
    assert_eq!(
        Roster::explicit(&dex, &unknown_identity).unwrap_err(),
        EngineError::UnknownIdentity(151)
    );
}

#[test]
fn wrong_sized_creature_lists_are_rejected() {
    let five = vec![plain([50, 50, 50, 50, 50, 50]); 5];
    assert_eq!(
        Roster::from_creatures(five).unwrap_err(),
        EngineError::RosterSize { expected: 6, actual: 5 }
    );
    let seven = vec![plain([50, 50, 50, 50, 50, 50]); 7];
    assert_eq!(
        Roster::from_creatures(seven).unwrap_err(),
        EngineError::RosterSize { expected: 6, actual: 7 }
    );
}

#[test]
fn reset_heals_every_member() {
    let dex = sample_dex();
    let mut roster = Roster::explicit(&dex, &explicit_entries()).unwrap();
    let mut other = roster.clone();
    let mut dice = Dice::from_seed(4);
    teamsim_engine::Battle::new(&mut roster, &mut other, &mut dice).resolve(&mut dice);
    roster.reset();
    assert!(roster.members().iter().all(|c| c.current_hp() == c.max_hp()));
    assert_eq!(roster.alive_indices(), (0..ROSTER_SIZE).collect::<Vec<_>>());
}

proptest! {
    #[test]
    fn random_roster_movesets_are_distinct_and_learnable(seed in any::<u64>()) {
        let dex = sample_dex();
        let roster = Roster::random(&dex, &mut Dice::from_seed(seed)).unwrap();
        for c in roster.members() {
            let species = dex.species(c.identity()).unwrap();
            let ids: HashSet<_> = c.moveset().iter().map(|m| m.id).collect();
            prop_assert_eq!(ids.len(), 4);
            prop_assert!(ids.iter().all(|id| species.can_learn(*id)));
        }
    }
}
