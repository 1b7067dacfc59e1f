//! Reactions offered on the Sandwiches and Molecules screens.
//!
//! A screen owns its reactions and remembers which one is selected. Each
//! reaction keeps its own quantities while another one is selected.

use crate::catalog::{sandwiches, ReactionId};
use crate::{AnyReaction, GameConfig, QuantityRange, ReactionError, ReactionResult};

/// The reactions of one screen and the current selection.
#[derive(Debug)]
pub struct ScreenModel {
    reactions: Vec<AnyReaction>,
    selected: usize,
    coefficient_range: QuantityRange,
}

impl ScreenModel {
    /// Creates a screen with the first reaction selected.
    ///
    /// # Panics
    ///
    /// Panics if `reactions` is empty.
    pub fn new(reactions: Vec<AnyReaction>) -> Self {
        assert!(!reactions.is_empty(), "a screen needs reactions");
        ScreenModel {
            reactions,
            selected: 0,
            coefficient_range: QuantityRange::COEFFICIENTS,
        }
    }

    /// Bounds custom coefficients by `config.coefficient_range`.
    pub fn with_config(mut self, config: &GameConfig) -> Self {
        self.coefficient_range = config.coefficient_range;
        self
    }

    pub fn coefficient_range(&self) -> QuantityRange {
        self.coefficient_range
    }

    /// Cheese, meat & cheese, and the custom sandwich.
    pub fn sandwiches() -> Self {
        Self::new(vec![
            sandwiches::cheese().into(),
            sandwiches::meat_and_cheese().into(),
            sandwiches::custom().into(),
        ])
    }

    /// Methane combustion and two steps of the ibuprofen synthesis.
    pub fn molecules() -> Self {
        let reactions = ReactionId::MOLECULES_SCREEN
            .iter()
            .map(|id| id.reaction().into())
            .collect();
        Self::new(reactions)
    }

    pub fn reactions(&self) -> &[AnyReaction] {
        &self.reactions
    }

    /// Selects the reaction at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn select(&mut self, index: usize) {
        assert!(
            index < self.reactions.len(),
            "reaction index {} out of bounds",
            index
        );
        self.selected = index;
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &AnyReaction {
        &self.reactions[self.selected]
    }

    pub fn selected_mut(&mut self) -> &mut AnyReaction {
        &mut self.reactions[self.selected]
    }

    /// Sets a reactant coefficient of the selected reaction.
    ///
    /// # Errors
    ///
    /// - [`ReactionError::FixedCoefficients`] if the selected reaction is not custom
    /// - [`ReactionError::CoefficientOutOfRange`] outside the screen's coefficient range
    pub fn set_selected_coefficient(
        &mut self,
        index: usize,
        coefficient: u32,
    ) -> ReactionResult<()> {
        let range = self.coefficient_range;
        match &mut self.reactions[self.selected] {
            AnyReaction::Custom(reaction) => {
                reaction.set_reactant_coefficient(index, coefficient, range)
            }
            AnyReaction::Fixed(reaction) => {
                Err(ReactionError::FixedCoefficients(reaction.equation()))
            }
        }
    }

    /// Resets every reaction and selects the first one.
    pub fn reset(&mut self) {
        for reaction in &mut self.reactions {
            reaction.reset();
        }
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandwiches_screen() {
        let screen = ScreenModel::sandwiches();
        let names: Vec<_> = screen
            .reactions()
            .iter()
            .filter_map(AnyReaction::name)
            .collect();
        assert_eq!(names, ["Cheese", "Meat & Cheese", "Custom"]);
        assert!(!screen.selected().coefficients_mutable());
        assert!(screen.reactions()[2].coefficients_mutable());
    }

    #[test]
    fn test_molecules_screen() {
        let screen = ScreenModel::molecules();
        assert_eq!(screen.reactions().len(), 3);
        assert_eq!(screen.selected().equation(), "CH4 + 2O2 -> CO2 + 2H2O");
        assert!(screen.reactions().iter().all(|r| !r.coefficients_mutable()));
    }

    #[test]
    fn test_selection_keeps_quantities() {
        let mut screen = ScreenModel::sandwiches();
        screen.selected_mut().set_reactant_quantity(0, 4);
        screen.select(1);
        assert_eq!(screen.selected().reactants()[0].quantity, 0);
        screen.select(0);
        assert_eq!(screen.selected().reactants()[0].quantity, 4);
    }

    #[test]
    fn test_custom_coefficients_through_screen() {
        let mut screen = ScreenModel::sandwiches();
        screen.select(2);
        let range = QuantityRange::COEFFICIENTS;
        let custom = screen.selected_mut().as_custom_mut().unwrap();
        custom.set_reactant_coefficient(0, 2, range).unwrap();
        custom.set_reactant_quantity(0, 6);
        assert_eq!(screen.selected().products()[0].quantity, 3);

        screen.select(0);
        assert!(screen.selected_mut().as_custom_mut().is_none());
    }

    #[test]
    fn test_coefficient_range_from_config() {
        let config = GameConfig {
            coefficient_range: QuantityRange::new(0, 2),
            ..GameConfig::default()
        };
        let mut screen = ScreenModel::sandwiches().with_config(&config);
        assert_eq!(screen.coefficient_range(), QuantityRange::new(0, 2));

        screen.select(2);
        let err = screen.set_selected_coefficient(0, 3).unwrap_err();
        assert!(matches!(
            err,
            ReactionError::CoefficientOutOfRange { coefficient: 3, .. }
        ));
        screen.set_selected_coefficient(0, 2).unwrap();
        screen.selected_mut().set_reactant_quantity(0, 4);
        assert_eq!(screen.selected().products()[0].quantity, 2);

        screen.select(1);
        assert_eq!(
            screen.set_selected_coefficient(0, 1),
            Err(ReactionError::FixedCoefficients(
                "2bread + meat + cheese -> sandwich".to_string()
            ))
        );
        let molecules = ScreenModel::molecules();
        assert_eq!(molecules.coefficient_range(), QuantityRange::COEFFICIENTS);
    }

    #[test]
    fn test_reset() {
        let mut screen = ScreenModel::sandwiches();
        screen.select(2);
        let range = QuantityRange::COEFFICIENTS;
        let custom = screen.selected_mut().as_custom_mut().unwrap();
        custom.set_reactant_coefficient(1, 1, range).unwrap();
        custom.set_reactant_quantity(1, 5);
        screen.reset();
        assert_eq!(screen.selected_index(), 0);
        let custom = &screen.reactions()[2];
        assert_eq!(custom.reactants()[1].quantity, 0);
        assert_eq!(custom.reactants()[1].coefficient, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_select_out_of_bounds() {
        ScreenModel::molecules().select(3);
    }
}
