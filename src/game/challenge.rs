//! Challenges and the player's guess.
//!
//! A challenge is a reaction with specific Before and After quantities, the
//! player's guess, and which box the player fills in. The guess never shares
//! substances with the reaction.

use super::{ChallengeVisibility, GameError, GameResult};
use crate::{BoxType, Fixed, Reaction, Substance};

/// Which list of a reaction a term belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    Reactant,
    Product,
    Leftover,
}

impl TermKind {
    /// Box this kind of term is shown in.
    pub fn box_type(self) -> BoxType {
        match self {
            TermKind::Reactant => BoxType::Before,
            TermKind::Product | TermKind::Leftover => BoxType::After,
        }
    }
}

/// The player's answer to a challenge, which may or may not be correct.
///
/// Same number and order of reactants, products and leftovers as the
/// reaction. Terms in the interactive box start at zero; the rest are
/// copied from the reaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    reactants: Vec<Substance>,
    products: Vec<Substance>,
    leftovers: Vec<Substance>,
    interactive: BoxType,
}

impl Guess {
    /// Builds the initial guess for `reaction`.
    ///
    /// With `prefilled`, every term starts at the correct answer.
    pub fn new(reaction: &Reaction<Fixed>, interactive: BoxType, prefilled: bool) -> Self {
        let copy = |terms: &[Substance], kind: TermKind| -> Vec<Substance> {
            terms
                .iter()
                .map(|s| {
                    if prefilled || kind.box_type() != interactive {
                        s.clone()
                    } else {
                        s.with_quantity(0)
                    }
                })
                .collect()
        };
        Guess {
            reactants: copy(reaction.reactants(), TermKind::Reactant),
            products: copy(reaction.products(), TermKind::Product),
            leftovers: copy(reaction.leftovers(), TermKind::Leftover),
            interactive,
        }
    }

    pub fn reactants(&self) -> &[Substance] {
        &self.reactants
    }

    pub fn products(&self) -> &[Substance] {
        &self.products
    }

    pub fn leftovers(&self) -> &[Substance] {
        &self.leftovers
    }

    /// Box the player fills in.
    pub fn interactive_box(&self) -> BoxType {
        self.interactive
    }

    pub fn terms(&self, kind: TermKind) -> &[Substance] {
        match kind {
            TermKind::Reactant => &self.reactants,
            TermKind::Product => &self.products,
            TermKind::Leftover => &self.leftovers,
        }
    }

    fn terms_mut(&mut self, kind: TermKind) -> &mut [Substance] {
        match kind {
            TermKind::Reactant => &mut self.reactants,
            TermKind::Product => &mut self.products,
            TermKind::Leftover => &mut self.leftovers,
        }
    }

    /// Sets a quantity in the interactive box.
    ///
    /// # Errors
    ///
    /// [`GameError::NotInteractive`] if `kind` is outside the interactive box.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_quantity(&mut self, kind: TermKind, index: usize, quantity: u32) -> GameResult<()> {
        if kind.box_type() != self.interactive {
            return Err(GameError::NotInteractive {
                term: kind,
                interactive: self.interactive,
            });
        }
        self.terms_mut(kind)[index].quantity = quantity;
        Ok(())
    }
}

/// One round of the game.
#[derive(Debug)]
pub struct Challenge {
    reaction: Reaction<Fixed>,
    guess: Guess,
    visibility: ChallengeVisibility,
    prefilled: bool,
}

impl Challenge {
    /// Pairs a reaction with a fresh guess.
    pub fn new(
        reaction: Reaction<Fixed>,
        interactive: BoxType,
        visibility: ChallengeVisibility,
        prefilled: bool,
    ) -> Self {
        let guess = Guess::new(&reaction, interactive, prefilled);
        Challenge {
            reaction,
            guess,
            visibility,
            prefilled,
        }
    }

    /// The reaction with the correct quantities.
    pub fn reaction(&self) -> &Reaction<Fixed> {
        &self.reaction
    }

    pub fn guess(&self) -> &Guess {
        &self.guess
    }

    pub fn guess_mut(&mut self) -> &mut Guess {
        &mut self.guess
    }

    pub fn interactive_box(&self) -> BoxType {
        self.guess.interactive
    }

    pub fn visibility(&self) -> ChallengeVisibility {
        self.visibility
    }

    pub fn molecules_visible(&self) -> bool {
        self.visibility.molecules_visible()
    }

    pub fn numbers_visible(&self) -> bool {
        self.visibility.numbers_visible()
    }

    /// Returns the guess to its initial state.
    pub fn reset(&mut self) {
        self.guess = Guess::new(&self.reaction, self.guess.interactive, self.prefilled);
    }

    /// Does the guess match the reaction?
    ///
    /// Reactants, products and leftovers are compared element-wise
    /// (symbol, coefficient and quantity).
    pub fn is_correct(&self) -> bool {
        self.guess.reactants.as_slice() == self.reaction.reactants()
            && self.guess.products.as_slice() == self.reaction.products()
            && self.guess.leftovers.as_slice() == self.reaction.leftovers()
    }

    /// Reveals the answer by copying the reaction's quantities into the guess.
    pub fn show_answer(&mut self) {
        let copy = |guess: &mut [Substance], answer: &[Substance]| {
            for (g, a) in guess.iter_mut().zip(answer) {
                g.quantity = a.quantity;
            }
        };
        copy(&mut self.guess.reactants, self.reaction.reactants());
        copy(&mut self.guess.leftovers, self.reaction.leftovers());
        copy(&mut self.guess.products, self.reaction.products());
    }
}
