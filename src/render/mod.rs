// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text forms of a decomposition.
//!
//! Two independent grammars over the same record:
//!
//! - **Expression**: `(((10*10*3)(trigger)(10)(trigger)(plus one))) * (count:1) (eye) + (count:1)`
//! - **Tokens**: `DIVIDE_10,DIVIDE_10,DIVIDE_3,ADD_TRIGGER,DIVIDE_10,ADD_TRIGGER,modifier,BLOOD_MAGIC,modifier`
//!
//! Both show exactly the fixed-cost terms the decomposition pays for, so the
//! token form always has one token per slot.

use std::fmt::Write;

use strum_macros::Display;

use crate::alphabet::{Group, Primitive};
use crate::search::{Decomposition, Solution};

/// Separator between groups in the expression form.
pub const SEPARATOR: &str = "(trigger)";

/// The +1 increment in the expression form.
pub const INCREMENT: &str = "(plus one)";

/// The terminal step in the expression form.
pub const TERMINAL_STEP: &str = "(eye)";

/// One wand slot in the token form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Spell {
    #[strum(serialize = "DIVIDE_10")]
    DivideTen,
    #[strum(serialize = "DIVIDE_4")]
    DivideFour,
    #[strum(serialize = "DIVIDE_3")]
    DivideThree,
    #[strum(serialize = "DIVIDE_2")]
    DivideTwo,
    #[strum(serialize = "ADD_TRIGGER")]
    AddTrigger,
    #[strum(serialize = "BLOOD_MAGIC")]
    BloodMagic,
    #[strum(serialize = "modifier")]
    Modifier,
}

impl From<Primitive> for Spell {
    fn from(primitive: Primitive) -> Self {
        match primitive {
            Primitive::Ten => Spell::DivideTen,
            Primitive::Four => Spell::DivideFour,
            Primitive::Three => Spell::DivideThree,
            Primitive::Two => Spell::DivideTwo,
        }
    }
}

fn group_expression(group: &Group) -> String {
    let values: Vec<String> = group.values().iter().map(ToString::to_string).collect();
    format!("({})", values.join("*"))
}

/// Bracketed arithmetic form.
pub fn expression(decomposition: &Decomposition) -> String {
    if decomposition.is_trivial() {
        return format!("(count:{})", decomposition.outer_addition);
    }

    let terms = decomposition.cost_terms();
    let groups: Vec<String> = decomposition.groups.iter().map(group_expression).collect();
    let mut inner = groups.join(SEPARATOR);
    if terms.uses_increment() {
        if !inner.is_empty() {
            inner.push_str(SEPARATOR);
        }
        inner.push_str(INCREMENT);
    }

    let mut out = format!("((({}))) * (count:{})", inner, decomposition.outer_multiplier);
    if terms.uses_terminal_step() {
        out.push(' ');
        out.push_str(TERMINAL_STEP);
    }
    if decomposition.outer_addition > 0 {
        // Writing to a String cannot fail.
        let _ = write!(out, " + (count:{})", decomposition.outer_addition);
    }
    out
}

/// Ordered wand slots.
pub fn tokens(decomposition: &Decomposition) -> Vec<Spell> {
    let terms = decomposition.cost_terms();
    let mut spells = Vec::with_capacity(terms.total() as usize);

    for (i, group) in decomposition.groups.iter().enumerate() {
        if i > 0 {
            spells.push(Spell::AddTrigger);
        }
        spells.extend(group.values().iter().copied().map(Spell::from));
    }
    if terms.uses_increment() {
        spells.push(Spell::AddTrigger);
    }
    spells.extend(std::iter::repeat(Spell::Modifier).take(decomposition.outer_multiplier as usize));
    if terms.uses_terminal_step() {
        spells.push(Spell::BloodMagic);
    }
    spells.extend(std::iter::repeat(Spell::Modifier).take(decomposition.outer_addition as usize));
    spells
}

/// Comma-separated token form.
pub fn token_list(decomposition: &Decomposition) -> String {
    tokens(decomposition)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Multi-line human summary of a solution.
pub fn breakdown(solution: &Solution) -> String {
    let decomposition = &solution.decomposition;
    if decomposition.is_trivial() {
        return format!(
            "Breakdown: simple case - just {} modifiers",
            decomposition.outer_addition
        );
    }

    let terms = decomposition.cost_terms();
    let groups: Vec<String> = decomposition
        .groups
        .iter()
        .map(|group| format!("{} ({})", group_expression(group), group.mode()))
        .collect();

    let mut out = String::from("Breakdown:\n");
    let _ = writeln!(out, "  - Divide-by groups: [{}]", groups.join(", "));
    let _ = writeln!(
        out,
        "  - Modifiers before terminal step: {}",
        decomposition.outer_multiplier
    );
    let _ = writeln!(out, "  - Increment used: {}", terms.uses_increment());
    let _ = writeln!(
        out,
        "  - Early termination used: {}",
        decomposition.uses_early_termination()
    );
    let _ = writeln!(out, "  - Terminal step used: {}", terms.uses_terminal_step());
    let _ = write!(
        out,
        "  - Additional modifiers after: {}",
        decomposition.outer_addition
    );
    out
}
