use tracing::{debug, warn};

use crate::roster::{Roster, ROSTER_SIZE};
use crate::turn::resolve_turn;
use crate::Dice;

/// Hard ceiling on resolved turns; reaching it ends the battle in a stalemate.
pub const TURN_CAP: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    Running,
    SideAWon,
    SideBWon,
    Stalemate,
}

impl BattleState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, BattleState::Running)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

/// A single 6v6 match over two borrowed rosters.
///
/// Construction heals every creature and draws a random starting creature per
/// side (side A first). Only current HP of the rosters is mutated.
pub struct Battle<'a> {
    side_a: &'a mut Roster,
    side_b: &'a mut Roster,
    active: [usize; 2],
    fainted: [usize; 2],
    turn: u32,
    state: BattleState,
}

impl<'a> Battle<'a> {
    pub fn new(side_a: &'a mut Roster, side_b: &'a mut Roster, dice: &mut Dice) -> Self {
        side_a.reset();
        side_b.reset();
        let active = [dice.below(side_a.len()), dice.below(side_b.len())];
        debug!(
            "[START] {} vs {}",
            side_a[active[0]].name(),
            side_b[active[1]].name()
        );
        Self { side_a, side_b, active, fainted: [0, 0], turn: 0, state: BattleState::Running }
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn active_index(&self, side: Side) -> usize {
        self.active[side as usize]
    }

    pub fn fainted(&self, side: Side) -> usize {
        self.fainted[side as usize]
    }

    pub fn roster(&self, side: Side) -> &Roster {
        match side {
            Side::A => &*self.side_a,
            Side::B => &*self.side_b,
        }
    }

    /// Resolve one turn and apply faint bookkeeping. No-op once terminal.
    pub fn step(&mut self, dice: &mut Dice) -> BattleState {
        if self.state.is_terminal() {
            return self.state;
        }

        let (ia, ib) = (self.active[0], self.active[1]);
        resolve_turn(&mut self.side_a[ia], &mut self.side_b[ib], dice);

        self.check_faint(Side::A, dice);
        self.check_faint(Side::B, dice);
        self.turn += 1;

        self.state = if self.fainted[Side::B as usize] == ROSTER_SIZE {
            BattleState::SideAWon
        } else if self.fainted[Side::A as usize] == ROSTER_SIZE {
            BattleState::SideBWon
        } else if self.turn >= TURN_CAP {
            warn!("[END] turn cap {} reached; stalemate", TURN_CAP);
            BattleState::Stalemate
        } else {
            BattleState::Running
        };

        if self.state.is_terminal() {
            debug!("[END] {:?} after {} turns", self.state, self.turn);
        }
        self.state
    }

    fn check_faint(&mut self, side: Side, dice: &mut Dice) {
        let s = side as usize;
        let alive = {
            let roster = self.roster(side);
            let current = &roster[self.active[s]];
            if !current.is_fainted() {
                return;
            }
            debug!("[FAINT] side {:?}: {}", side, current.name());
            roster.alive_indices()
        };
        self.fainted[s] += 1;
        if self.fainted[s] == ROSTER_SIZE {
            return;
        }
        if let Some(&next) = dice.choose(&alive) {
            debug!("[SWITCH] side {:?} sends out {}", side, self.roster(side)[next].name());
            self.active[s] = next;
        }
    }

    /// Run to a terminal state.
    pub fn resolve(&mut self, dice: &mut Dice) -> BattleState {
        while !self.state.is_terminal() {
            self.step(dice);
        }
        self.state
    }

    /// True iff side A knocked out all six of side B's creatures.
    pub fn run(&mut self, dice: &mut Dice) -> bool {
        self.resolve(dice) == BattleState::SideAWon
    }
}
