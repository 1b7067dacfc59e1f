//! Catalog of reactions offered by the simulation.
//!
//! This module provides the reaction blueprints organized as individual files:
//!
//! - **molecules**: balanced real-world reactions, one [`ReactionId`] each
//! - **sandwiches**: sandwich recipes, where bread, meat and cheese are the
//!   reactants and the sandwich is the product
//!
//! A blueprint is plain data. Building a [`Reaction`](crate::Reaction) from it
//! always yields fresh substances with zero quantities, so every caller owns
//! its reaction outright.
//!
//! ## Example
//!
//! ```
//! use leftovers::catalog::ReactionId;
//!
//! let methane = ReactionId::CombustMethane.reaction();
//! assert_eq!(methane.equation(), "CH4 + 2O2 -> CO2 + 2H2O");
//! assert_eq!(methane.name(), Some("Combust Methane"));
//! ```

mod molecules;
pub mod sandwiches;

pub use molecules::ReactionId;

use crate::{Fixed, Reaction, Substance};

/// One `(coefficient, symbol)` term of a blueprint.
pub type Term = (u32, &'static str);

/// Static description of a balanced reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blueprint {
    /// Display name
    pub name: &'static str,
    pub reactants: &'static [Term],
    pub products: &'static [Term],
}

impl Blueprint {
    /// Number of products (1 or 2 for every catalog reaction).
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Do all reactants have coefficient 1?
    pub fn reactant_coefficients_all_one(&self) -> bool {
        self.reactants.iter().all(|&(c, _)| c == 1)
    }

    /// Largest reactant coefficient.
    pub fn max_reactant_coefficient(&self) -> u32 {
        self.reactants.iter().map(|&(c, _)| c).max().unwrap_or(0)
    }

    /// Builds a reaction with all quantities at zero.
    pub fn build(&self) -> Reaction<Fixed> {
        let to_substances = |terms: &[Term]| -> Vec<Substance> {
            terms
                .iter()
                .map(|&(c, s)| Substance::new(c, s, 0))
                .collect()
        };
        Reaction::new(to_substances(self.reactants), to_substances(self.products))
            .expect("catalog blueprints have reactants and products")
            .with_name(self.name)
    }
}
