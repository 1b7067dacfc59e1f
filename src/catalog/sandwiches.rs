//! Sandwich recipes.
//!
//! For the purposes of the sandwich analogy:
//! - recipe == reaction
//! - ingredients (bread, meat, cheese) == reactants
//! - sandwich == product
//!
//! Every recipe lists all three ingredients, even those with coefficient 0,
//! so the Before/After boxes always show the same columns.
//!
//! # Example
//!
//! ```
//! use leftovers::catalog::sandwiches;
//!
//! let mut cheese = sandwiches::cheese();
//! cheese.set_reactant_quantity(0, 5); // bread
//! cheese.set_reactant_quantity(1, 3); // meat, not part of this recipe
//! cheese.set_reactant_quantity(2, 2); // cheese
//!
//! assert_eq!(cheese.products()[0].quantity, 2);
//! assert_eq!(cheese.leftovers()[1].quantity, 3);
//! ```

use crate::{CoefficientPolicy, CustomCoefficients, Fixed, Reaction, ReactionResult, Substance};

pub const BREAD: &str = "bread";
pub const MEAT: &str = "meat";
pub const CHEESE: &str = "cheese";
pub const SANDWICH: &str = "sandwich";

fn ingredients(bread: u32, meat: u32, cheese: u32) -> Vec<Substance> {
    vec![
        Substance::new(bread, BREAD, 0),
        Substance::new(meat, MEAT, 0),
        Substance::new(cheese, CHEESE, 0),
    ]
}

fn sandwich() -> Vec<Substance> {
    vec![Substance::new(1, SANDWICH, 0)]
}

/// A recipe with fixed ingredient counts.
pub fn recipe(name: &str, bread: u32, meat: u32, cheese: u32) -> ReactionResult<Reaction<Fixed>> {
    let reaction = Reaction::new(ingredients(bread, meat, cheese), sandwich())?;
    Ok(reaction.with_name(name))
}

/// 2 bread + 1 cheese -> 1 sandwich
pub fn cheese() -> Reaction<Fixed> {
    let reaction = Reaction::new(ingredients(2, 0, 1), sandwich());
    named(reaction, "Cheese")
}

/// 2 bread + 1 meat + 1 cheese -> 1 sandwich
pub fn meat_and_cheese() -> Reaction<Fixed> {
    let reaction = Reaction::new(ingredients(2, 1, 1), sandwich());
    named(reaction, "Meat & Cheese")
}

/// Starts with every coefficient at 0; the user picks the recipe.
pub fn custom() -> Reaction<CustomCoefficients> {
    let reaction = Reaction::new_custom(ingredients(0, 0, 0), sandwich());
    named(reaction, "Custom")
}

fn named<C: CoefficientPolicy>(reaction: ReactionResult<Reaction<C>>, name: &str) -> Reaction<C> {
    reaction
        .expect("sandwich recipes have ingredients and a sandwich")
        .with_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuantityRange;

    #[test]
    fn test_meat_and_cheese() {
        let mut r = meat_and_cheese();
        r.set_reactant_quantity(0, 8);
        r.set_reactant_quantity(1, 2);
        r.set_reactant_quantity(2, 3);
        assert_eq!(r.products()[0].quantity, 2);
        assert_eq!(r.leftovers()[0].quantity, 4);
        assert_eq!(r.leftovers()[1].quantity, 0);
        assert_eq!(r.leftovers()[2].quantity, 1);
    }

    #[test]
    fn test_custom_starts_empty() {
        let mut r = custom();
        r.set_reactant_quantity(0, 3);
        assert!(r.has_zero_products());
        assert_eq!(r.leftovers()[0].quantity, 3);

        let range = QuantityRange::COEFFICIENTS;
        r.set_reactant_coefficient(0, 1, range).unwrap();
        assert_eq!(r.products()[0].quantity, 3);
    }

    #[test]
    fn test_recipe_named() {
        let r = recipe("Double Cheese", 2, 0, 2).unwrap();
        assert_eq!(r.name(), Some("Double Cheese"));
        assert_eq!(r.equation(), "2bread + 0meat + 2cheese -> sandwich");
    }
}
