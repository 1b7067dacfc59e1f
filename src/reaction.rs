//! Reactions and the stoichiometric recompute.
//!
//! A [`Reaction`] owns its reactants, products and leftovers. Whenever a
//! reactant quantity (or, for the custom sandwich, a coefficient) changes, the
//! product and leftover quantities are recomputed before the setter returns,
//! and then every subscribed listener is notified.
//!
//! # Recompute
//!
//! For reactant `i` with coefficient `c_i` and quantity `q_i`:
//!
//! - events supported: `floor(q_i / c_i)`; a coefficient of 0 never limits
//! - `n = min` over reactants with `c_i > 0` (0 if every coefficient is 0)
//! - `leftover_i = q_i - n * c_i`
//! - `product_j = n * p_j`
//!
//! # Example
//!
//! ```
//! use leftovers::catalog::ReactionId;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut water = ReactionId::MakeWater.reaction();
//! let seen = Rc::new(Cell::new(0));
//! let seen_by_listener = Rc::clone(&seen);
//! water.subscribe(move |_change, reaction| {
//!     seen_by_listener.set(reaction.products()[0].quantity);
//! });
//!
//! water.set_reactant_quantity(0, 6); // H2
//! water.set_reactant_quantity(1, 5); // O2
//! assert_eq!(seen.get(), 6);
//! assert_eq!(water.leftovers()[1].quantity, 2);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::{CoefficientPolicy, CustomCoefficients, Fixed, QuantityRange, Substance};

/// Result type for reaction operations.
pub type ReactionResult<T> = Result<T, ReactionError>;

/// Errors raised while building or editing a reaction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReactionError {
    /// A reaction needs at least one reactant
    #[error("a reaction requires at least one reactant")]
    NoReactants,
    /// A reaction needs at least one product
    #[error("a reaction requires at least one product")]
    NoProducts,
    /// Custom coefficient outside the allowed range
    #[error("coefficient {coefficient} for {symbol} is outside {range}")]
    CoefficientOutOfRange {
        symbol: String,
        coefficient: u32,
        range: QuantityRange,
    },
    /// Coefficient edit on a reaction whose coefficients are fixed
    #[error("coefficients of {0} are fixed")]
    FixedCoefficients(String),
}

/// What changed on a reaction. Delivered to listeners after the recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionChange {
    /// A reactant quantity was set
    ReactantQuantity { index: usize, old: u32, new: u32 },
    /// A reactant coefficient was set (custom reactions only)
    ReactantCoefficient { index: usize, old: u32, new: u32 },
    /// The reaction was restored to its initial state
    Reset,
}

/// Handle returned by [`Reaction::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<C> = Box<dyn FnMut(&ReactionChange, &Reaction<C>)>;

/// Number of whole reaction events the reactants support.
///
/// Reactants with coefficient 0 never limit the reaction. If every
/// coefficient is 0, no reaction occurs.
///
/// # Examples
///
/// ```
/// use leftovers::{reaction_events, Substance};
///
/// let reactants = [Substance::new(2, "H2", 4), Substance::new(1, "O2", 1)];
/// assert_eq!(reaction_events(&reactants), 1);
///
/// let sandwich = [Substance::new(2, "bread", 4), Substance::new(0, "meat", 0)];
/// assert_eq!(reaction_events(&sandwich), 2);
/// ```
pub fn reaction_events(reactants: &[Substance]) -> u32 {
    reactants
        .iter()
        .filter(|r| r.coefficient > 0)
        .map(|r| r.quantity / r.coefficient)
        .min()
        .unwrap_or(0)
}

/// A chemical reaction with reactants, products and derived leftovers.
///
/// Type parameters:
/// - `C`: coefficient policy ([`Fixed`] | [`CustomCoefficients`])
///
/// # Invariants
///
/// - At least one reactant and one product
/// - One leftover per reactant, same symbol and coefficient, same order
/// - Product and leftover quantities are always consistent with the
///   current reactant quantities
pub struct Reaction<C: CoefficientPolicy = Fixed> {
    name: Option<String>,
    reactants: Vec<Substance>,
    products: Vec<Substance>,
    leftovers: Vec<Substance>,

    // Restored by reset()
    initial_reactants: Vec<Substance>,

    listeners: Vec<(ListenerId, Listener<C>)>,
    next_listener_id: u64,

    _policy: PhantomData<C>,
}

// Fixed constructor
impl Reaction<Fixed> {
    /// Creates a reaction whose coefficients can never change.
    ///
    /// Product quantities passed in are ignored; they are derived from the
    /// reactant quantities.
    pub fn new(reactants: Vec<Substance>, products: Vec<Substance>) -> ReactionResult<Self> {
        Self::build(reactants, products)
    }
}

// Custom constructor and coefficient editing
impl Reaction<CustomCoefficients> {
    /// Creates a reaction whose reactant coefficients may be edited.
    pub fn new_custom(
        reactants: Vec<Substance>,
        products: Vec<Substance>,
    ) -> ReactionResult<Self> {
        Self::build(reactants, products)
    }

    /// Sets a reactant coefficient, recomputes, then notifies listeners.
    ///
    /// The matching leftover takes the same coefficient.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_reactant_coefficient(
        &mut self,
        index: usize,
        coefficient: u32,
        range: QuantityRange,
    ) -> ReactionResult<()> {
        let reactant = self.reactant_at(index);
        if !range.contains(coefficient) {
            return Err(ReactionError::CoefficientOutOfRange {
                symbol: reactant.symbol.clone(),
                coefficient,
                range,
            });
        }
        let old = reactant.coefficient;
        if old == coefficient {
            return Ok(());
        }
        self.reactants[index].coefficient = coefficient;
        self.leftovers[index].coefficient = coefficient;
        self.recompute();
        self.notify(ReactionChange::ReactantCoefficient {
            index,
            old,
            new: coefficient,
        });
        Ok(())
    }
}

impl<C: CoefficientPolicy> Reaction<C> {
    fn build(reactants: Vec<Substance>, products: Vec<Substance>) -> ReactionResult<Self> {
        if reactants.is_empty() {
            return Err(ReactionError::NoReactants);
        }
        if products.is_empty() {
            return Err(ReactionError::NoProducts);
        }
        let leftovers = reactants.iter().map(|r| r.with_quantity(0)).collect();
        let mut reaction = Reaction {
            name: None,
            initial_reactants: reactants.clone(),
            reactants,
            products,
            leftovers,
            listeners: Vec::new(),
            next_listener_id: 0,
            _policy: PhantomData,
        };
        reaction.recompute();
        Ok(reaction)
    }

    /// Attaches a display name (e.g. "Make Water").
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
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

    fn reactant_at(&self, index: usize) -> &Substance {
        assert!(
            index < self.reactants.len(),
            "reactant index {} out of bounds for {}",
            index,
            self.equation()
        );
        &self.reactants[index]
    }

    /// Sets a reactant quantity, recomputes, then notifies listeners.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_reactant_quantity(&mut self, index: usize, quantity: u32) {
        let old = self.reactant_at(index).quantity;
        if old == quantity {
            return;
        }
        self.reactants[index].quantity = quantity;
        self.recompute();
        self.notify(ReactionChange::ReactantQuantity {
            index,
            old,
            new: quantity,
        });
    }

    /// Derives product and leftover quantities from the reactants.
    ///
    /// Returns the number of reaction events. Idempotent. Product quantities
    /// saturate at `u32::MAX`.
    pub fn recompute(&mut self) -> u32 {
        let events = reaction_events(&self.reactants);
        for (leftover, reactant) in self.leftovers.iter_mut().zip(&self.reactants) {
            // events * coefficient <= quantity for every reactant
            leftover.quantity = reactant.quantity - events * reactant.coefficient;
        }
        for product in &mut self.products {
            product.quantity = events.saturating_mul(product.coefficient);
        }
        events
    }

    /// Number of reaction events for the current quantities.
    pub fn events(&self) -> u32 {
        reaction_events(&self.reactants)
    }

    /// Restores initial coefficients and quantities, then notifies listeners.
    pub fn reset(&mut self) {
        self.reactants.clone_from(&self.initial_reactants);
        for (leftover, reactant) in self.leftovers.iter_mut().zip(&self.reactants) {
            leftover.coefficient = reactant.coefficient;
        }
        self.recompute();
        self.notify(ReactionChange::Reset);
    }

    /// Registers a listener called after every change, once the recompute is done.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ReactionChange, &Reaction<C>) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, change: ReactionChange) {
        if self.listeners.is_empty() {
            return;
        }
        // Listeners get read access to the reaction, so detach them while they run.
        let mut listeners = std::mem::take(&mut self.listeners);
        for (_, listener) in listeners.iter_mut() {
            listener(&change, self);
        }
        self.listeners = listeners;
    }

    /// Is any reactant, leftover or product quantity outside `range`?
    pub fn has_range_violation(&self, range: QuantityRange) -> bool {
        self.reactants
            .iter()
            .chain(&self.leftovers)
            .chain(&self.products)
            .any(|s| !range.contains(s.quantity))
    }

    /// Are all product quantities zero?
    pub fn has_zero_products(&self) -> bool {
        self.products.iter().all(|p| p.quantity == 0)
    }

    /// Balanced equation, e.g. `2H2 + O2 -> 2H2O`.
    pub fn equation(&self) -> String {
        format!(
            "{} -> {}",
            join_terms(&self.reactants),
            join_terms(&self.products)
        )
    }

    /// Equation annotated with quantities, e.g. `2H2[4] + O2[1] -> 2H2O[2] : 2H2[2] + O2[0]`.
    pub fn quantities(&self) -> String {
        let show = |terms: &[Substance]| {
            terms
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(" + ")
        };
        format!(
            "{} -> {} : {}",
            show(&self.reactants),
            show(&self.products),
            show(&self.leftovers)
        )
    }
}

fn join_terms(terms: &[Substance]) -> String {
    terms
        .iter()
        .map(Substance::term)
        .collect::<Vec<_>>()
        .join(" + ")
}

impl<C: CoefficientPolicy> fmt::Debug for Reaction<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reaction")
            .field("policy", &C::NAME)
            .field("name", &self.name)
            .field("reactants", &self.reactants)
            .field("products", &self.products)
            .field("leftovers", &self.leftovers)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<C: CoefficientPolicy> fmt::Display for Reaction<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}: {}", name, self.quantities()),
            None => f.write_str(&self.quantities()),
        }
    }
}

/// Either kind of reaction, for collections that mix them.
#[derive(Debug)]
pub enum AnyReaction {
    Fixed(Reaction<Fixed>),
    Custom(Reaction<CustomCoefficients>),
}

impl AnyReaction {
    pub fn name(&self) -> Option<&str> {
        match self {
            AnyReaction::Fixed(r) => r.name(),
            AnyReaction::Custom(r) => r.name(),
        }
    }

    pub fn reactants(&self) -> &[Substance] {
        match self {
            AnyReaction::Fixed(r) => r.reactants(),
            AnyReaction::Custom(r) => r.reactants(),
        }
    }

    pub fn products(&self) -> &[Substance] {
        match self {
            AnyReaction::Fixed(r) => r.products(),
            AnyReaction::Custom(r) => r.products(),
        }
    }

    pub fn leftovers(&self) -> &[Substance] {
        match self {
            AnyReaction::Fixed(r) => r.leftovers(),
            AnyReaction::Custom(r) => r.leftovers(),
        }
    }

    /// See [`Reaction::set_reactant_quantity`].
    pub fn set_reactant_quantity(&mut self, index: usize, quantity: u32) {
        match self {
            AnyReaction::Fixed(r) => r.set_reactant_quantity(index, quantity),
            AnyReaction::Custom(r) => r.set_reactant_quantity(index, quantity),
        }
    }

    pub fn reset(&mut self) {
        match self {
            AnyReaction::Fixed(r) => r.reset(),
            AnyReaction::Custom(r) => r.reset(),
        }
    }

    pub fn equation(&self) -> String {
        match self {
            AnyReaction::Fixed(r) => r.equation(),
            AnyReaction::Custom(r) => r.equation(),
        }
    }

    /// Are the coefficients editable?
    pub fn coefficients_mutable(&self) -> bool {
        matches!(self, AnyReaction::Custom(_))
    }

    /// The custom reaction, if this is one.
    pub fn as_custom_mut(&mut self) -> Option<&mut Reaction<CustomCoefficients>> {
        match self {
            AnyReaction::Custom(r) => Some(r),
            AnyReaction::Fixed(_) => None,
        }
    }
}

impl From<Reaction<Fixed>> for AnyReaction {
    fn from(reaction: Reaction<Fixed>) -> Self {
        AnyReaction::Fixed(reaction)
    }
}

impl From<Reaction<CustomCoefficients>> for AnyReaction {
    fn from(reaction: Reaction<CustomCoefficients>) -> Self {
        AnyReaction::Custom(reaction)
    }
}
