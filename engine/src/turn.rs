use crate::creature::{Creature, Strike};
use crate::Dice;

/// Which of the two creatures passed to [`resolve_turn`] acted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Initiative {
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub first: Initiative,
    /// Moveset indices chosen before either creature acted.
    pub choice_a: usize,
    pub choice_b: usize,
    pub first_strike: Strike,
    /// `None` when the second creature fainted before it could act.
    pub second_strike: Option<Strike>,
}

/// Faster creature acts first; exact speed ties are broken with one coin draw.
pub fn initiative(a: &Creature, b: &Creature, dice: &mut Dice) -> Initiative {
    match a.speed().cmp(&b.speed()) {
        std::cmp::Ordering::Greater => Initiative::A,
        std::cmp::Ordering::Less => Initiative::B,
        std::cmp::Ordering::Equal => {
            if dice.coin() {
                Initiative::A
            } else {
                Initiative::B
            }
        }
    }
}

/// Resolve one turn between the two active creatures.
///
/// Both moves are chosen against pre-turn state before anyone acts. The first
/// actor strikes; the second strikes back only if it still has HP.
pub fn resolve_turn(a: &mut Creature, b: &mut Creature, dice: &mut Dice) -> TurnReport {
    let first = initiative(a, b, dice);
    let choice_a = a.choose_move_index(b);
    let choice_b = b.choose_move_index(a);

    let (lead, lead_choice, follow, follow_choice) = match first {
        Initiative::A => (a, choice_a, b, choice_b),
        Initiative::B => (b, choice_b, a, choice_a),
    };

    let first_strike = lead.attack_action(follow, &lead.moveset()[lead_choice], dice);

    let second_strike = if follow.is_fainted() {
        None
    } else {
        Some(follow.attack_action(lead, &follow.moveset()[follow_choice], dice))
    };

    TurnReport { first, choice_a, choice_b, first_strike, second_strike }
}
