//! The cart state container.

use core::fmt;

use crate::types::{Price, ProductId};

use super::{CartCandidate, CartLine};

/// Most units a single line can hold. Adds beyond it are ignored and
/// larger quantity updates are clamped to it.
pub const MAX_LINE_QUANTITY: u32 = 9_999;

// =============================================================================
// CartState
// =============================================================================

/// A snapshot of the cart: ordered lines plus their derived totals.
///
/// `total` and `item_count` are recomputed from `lines` whenever the lines
/// change and cannot be set independently.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartState {
    lines: Vec<CartLine>,
    total: Price,
    item_count: u64,
}

impl CartState {
    /// The empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            lines: Vec::new(),
            total: Price::ZERO,
            item_count: 0,
        }
    }

    /// Lines in first-add order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// `Σ unit_price × quantity`.
    #[must_use]
    pub const fn total(&self) -> Price {
        self.total
    }

    /// `Σ quantity`.
    #[must_use]
    pub const fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line for `product_id`, if present.
    #[must_use]
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id.as_str() == product_id)
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|l| l.product_id.as_str() == product_id)
    }

    /// Full linear recomputation of the derived fields.
    fn recompute(&mut self) {
        self.total = self.lines.iter().map(CartLine::line_total).sum();
        self.item_count = self.lines.iter().map(|l| u64::from(l.quantity)).sum();
    }
}

// =============================================================================
// Observer interface
// =============================================================================

/// What a mutation did. Delivered to listeners after the state has changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// One unit was added; `quantity` is the line's new quantity.
    ItemAdded { product_id: ProductId, quantity: u32 },
    /// The line was deleted, either directly or by a non-positive quantity.
    ItemRemoved { product_id: ProductId },
    /// The line's quantity was set to `quantity`.
    QuantityUpdated { product_id: ProductId, quantity: u32 },
    /// Every line was deleted.
    Cleared,
}

/// Receives cart changes synchronously, after each mutation that changed
/// the cart and before the mutating call returns.
pub trait CartListener: Send + Sync {
    fn on_cart_change(&self, event: &CartEvent, state: &CartState);
}

impl<F> CartListener for F
where
    F: Fn(&CartEvent, &CartState) + Send + Sync,
{
    fn on_cart_change(&self, event: &CartEvent, state: &CartState) {
        self(event, state);
    }
}

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

// =============================================================================
// CartStore
// =============================================================================

/// Owns one cart and guarantees its invariants after every operation:
///
/// - at most one line per product id
/// - every line has `1 <= quantity <= MAX_LINE_QUANTITY`
/// - `total` and `item_count` always match the lines
///
/// None of the operations can fail. Operations that find nothing to do
/// (removing an absent product, clearing an empty cart) leave the state
/// untouched and do not notify listeners; so does adding to a line that is
/// already at [`MAX_LINE_QUANTITY`].
pub struct CartStore {
    state: CartState,
    listeners: Vec<(SubscriptionId, Box<dyn CartListener>)>,
    next_subscription: u64,
}

impl CartStore {
    /// An empty cart with no listeners.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: CartState::empty(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// Lines in first-add order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        self.state.lines()
    }

    /// Current total.
    #[must_use]
    pub const fn total(&self) -> Price {
        self.state.total()
    }

    /// Current number of units.
    #[must_use]
    pub const fn item_count(&self) -> u64 {
        self.state.item_count()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// The line for `product_id`, if present.
    #[must_use]
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.state.line(product_id)
    }

    /// Register a listener. It is called after every state-changing
    /// operation until [`unsubscribe`](Self::unsubscribe)d.
    pub fn subscribe(&mut self, listener: impl CartListener + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// Add one unit of a product.
    ///
    /// An existing line gains one unit and keeps its original name, price,
    /// image and category; otherwise a new line with quantity 1 is appended.
    pub fn add_item(&mut self, candidate: CartCandidate) {
        let product_id = candidate.product_id.clone();
        let quantity = if let Some(line) = self
            .state
            .lines
            .iter_mut()
            .find(|l| l.product_id == candidate.product_id)
        {
            if line.quantity >= MAX_LINE_QUANTITY {
                return;
            }
            line.quantity += 1;
            line.quantity
        } else {
            self.state.lines.push(CartLine::from_candidate(candidate));
            1
        };

        self.commit(&CartEvent::ItemAdded {
            product_id,
            quantity,
        });
    }

    /// Add `units` units, one [`add_item`](Self::add_item) at a time.
    pub fn add_item_n(&mut self, candidate: &CartCandidate, units: u32) {
        for _ in 0..units {
            self.add_item(candidate.clone());
        }
    }

    /// Delete the line for `product_id`. Absent products are ignored.
    pub fn remove_item(&mut self, product_id: &str) {
        let Some(index) = self.state.position(product_id) else {
            return;
        };
        let line = self.state.lines.remove(index);
        self.commit(&CartEvent::ItemRemoved {
            product_id: line.product_id,
        });
    }

    /// Set a line's quantity to exactly `quantity`.
    ///
    /// A quantity of zero or less removes the line; one above
    /// [`MAX_LINE_QUANTITY`] is clamped to it. An absent product is ignored;
    /// this never creates a line.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        let quantity = u32::try_from(quantity.clamp(0, i64::from(MAX_LINE_QUANTITY)))
            .unwrap_or(MAX_LINE_QUANTITY);
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }

        let Some(line) = self
            .state
            .lines
            .iter_mut()
            .find(|l| l.product_id.as_str() == product_id)
        else {
            return;
        };
        if line.quantity == quantity {
            return;
        }
        line.quantity = quantity;
        let product_id = line.product_id.clone();

        self.commit(&CartEvent::QuantityUpdated {
            product_id,
            quantity,
        });
    }

    /// Empty the cart. Idempotent.
    pub fn clear_cart(&mut self) {
        if self.state.is_empty() {
            return;
        }
        self.state.lines.clear();
        self.commit(&CartEvent::Cleared);
    }

    /// Recompute derived fields, then notify listeners.
    fn commit(&mut self, event: &CartEvent) {
        self.state.recompute();
        for (_, listener) in &self.listeners {
            listener.on_cart_change(event, &self.state);
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
