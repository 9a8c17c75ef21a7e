#![allow(dead_code)]

use teamsim_engine::content::builtin_dex;
use teamsim_engine::{BaseStats, Creature, Dex, Move, MoveClass, MoveId, Species, Type};

pub fn sample_dex() -> Dex {
    builtin_dex().expect("bundled dex loads")
}

/// Base stats in hp, attack, sp_attack, defense, sp_defense, speed order.
pub fn base(stats: [u32; 6]) -> BaseStats {
    let [hp, attack, sp_attack, defense, sp_defense, speed] = stats;
    BaseStats { hp, attack, sp_attack, defense, sp_defense, speed }
}

pub fn species(id: u32, name: &str, types: (Type, Option<Type>), stats: [u32; 6], learnset: &[u32]) -> Species {
    Species::new(id, name, types, base(stats), learnset.iter().copied().map(MoveId))
}

pub fn mv(id: u32, name: &str, ty: Type, class: MoveClass, power: u32, accuracy: u32) -> Move {
    Move { id: MoveId(id), name: name.to_string(), move_type: ty, class, power, accuracy }
}

pub fn tackle() -> Move {
    mv(33, "Tackle", Type::Normal, MoveClass::Physical, 40, 100)
}

pub fn growl() -> Move {
    mv(45, "Growl", Type::Normal, MoveClass::Other, 0, 100)
}

/// Normal-type creature whose four moves are all Tackle-like.
pub fn plain(stats: [u32; 6]) -> Creature {
    let s = species(500, "Plain", (Type::Normal, None), stats, &[]);
    Creature::with_moves(&s, [tackle(), tackle(), tackle(), tackle()])
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
