//! The "DevStore" demo: catalog, cart, and a mock checkout.

use std::{fmt, time::Duration};

use tracing::debug;

use crate::{AppSignal, DelayTimer, MiniAppState};

pub const DEFAULT_CHECKOUT_DELAY: Duration = Duration::from_millis(2000);

/// A price in whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Cents(pub u32);

impl Cents {
    #[must_use]
    pub const fn dollars(dollars: u32) -> Self {
        Self(dollars * 100)
    }
}

impl std::iter::Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|c| c.0).sum())
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (whole, frac) = (self.0 / 100, self.0 % 100);
        if frac == 0 {
            write!(f, "${whole}")
        } else {
            write!(f, "${whole}.{frac:02}")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub price: Cents,
    pub category: &'static str,
}

const CATALOG: [Product; 4] = [
    Product {
        id: 1,
        name: "Dev Keyboard",
        price: Cents::dollars(150),
        category: "Peripherals",
    },
    Product {
        id: 2,
        name: "Monitor 4K",
        price: Cents::dollars(300),
        category: "Displays",
    },
    Product {
        id: 3,
        name: "Ergo Mouse",
        price: Cents::dollars(60),
        category: "Peripherals",
    },
    Product {
        id: 4,
        name: "Studio Headphones",
        price: Cents::dollars(200),
        category: "Audio",
    },
];

/// What "Add to cart" does after appending the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddToCartBehavior {
    /// Jump straight to the cart view.
    OpenCart,
    /// Stay on the catalog; only the cart count changes.
    #[default]
    StayOnCatalog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(&'static str),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == category,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreView {
    Browsing,
    Cart,
    /// Mock payment in progress; confirms when the timer fires.
    Checkout(DelayTimer),
    Confirmed,
}

impl StoreView {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Browsing => "browsing",
            Self::Cart => "cart",
            Self::Checkout(_) => "checkout",
            Self::Confirmed => "confirmed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    SelectNext,
    SelectPrev,
    /// Add the highlighted catalog product.
    AddSelected,
    Add(u32),
    /// Remove the highlighted cart entry.
    RemoveSelected,
    RemoveAt(usize),
    CycleFilter,
    OpenCart,
    BackToShop,
    Checkout,
    /// Abandon a pending payment and return to the cart.
    CancelCheckout,
    ContinueShopping,
    Close,
}

#[derive(Debug, Clone)]
pub struct Store {
    catalog: Vec<Product>,
    cart: Vec<u32>,
    view: StoreView,
    filter: CategoryFilter,
    selected: usize,
    add_behavior: AddToCartBehavior,
    checkout_delay: Duration,
}

impl Store {
    #[must_use]
    pub fn new(add_behavior: AddToCartBehavior, checkout_delay: Duration) -> Self {
        Self {
            catalog: CATALOG.to_vec(),
            cart: Vec::new(),
            view: StoreView::Browsing,
            filter: CategoryFilter::All,
            selected: 0,
            add_behavior,
            checkout_delay,
        }
    }

    #[must_use]
    pub fn view(&self) -> &StoreView {
        &self.view
    }

    #[must_use]
    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// Catalog entries passing the current category filter.
    pub fn visible_products(&self) -> impl Iterator<Item = &Product> {
        let filter = self.filter;
        self.catalog.iter().filter(move |p| filter.matches(p))
    }

    /// Distinct categories in catalog order.
    #[must_use]
    pub fn categories(&self) -> Vec<&'static str> {
        let mut categories: Vec<&'static str> = Vec::new();
        for product in &self.catalog {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }
        categories
    }

    #[must_use]
    pub fn product(&self, id: u32) -> Option<&Product> {
        self.catalog.iter().find(|p| p.id == id)
    }

    /// Cart entries in insertion order; duplicates are separate entries.
    pub fn cart(&self) -> impl Iterator<Item = &Product> {
        self.cart.iter().filter_map(|&id| self.product(id))
    }

    #[must_use]
    pub fn cart_len(&self) -> usize {
        self.cart.len()
    }

    #[must_use]
    pub fn total(&self) -> Cents {
        self.cart().map(|p| p.price).sum()
    }

    fn selection_len(&self) -> usize {
        match self.view {
            StoreView::Browsing => self.visible_products().count(),
            StoreView::Cart => self.cart.len(),
            StoreView::Checkout(_) | StoreView::Confirmed => 0,
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.selection_len().saturating_sub(1));
    }

    fn set_view(&mut self, view: StoreView) {
        debug!(from = self.view.name(), to = view.name(), "Store view change");
        self.view = view;
        self.selected = 0;
    }

    fn add(&mut self, id: u32) {
        if self.view != StoreView::Browsing || self.product(id).is_none() {
            return;
        }
        self.cart.push(id);
        if self.add_behavior == AddToCartBehavior::OpenCart {
            self.set_view(StoreView::Cart);
        }
    }

    fn remove_at(&mut self, index: usize) {
        if self.view != StoreView::Cart || index >= self.cart.len() {
            return;
        }
        self.cart.remove(index);
        self.clamp_selection();
    }

    fn cycle_filter(&mut self) {
        if self.view != StoreView::Browsing {
            return;
        }
        let categories = self.categories();
        self.filter = match self.filter {
            CategoryFilter::All => categories
                .first()
                .map_or(CategoryFilter::All, |&c| CategoryFilter::Only(c)),
            CategoryFilter::Only(current) => categories
                .iter()
                .position(|&c| c == current)
                .and_then(|i| categories.get(i + 1))
                .map_or(CategoryFilter::All, |&c| CategoryFilter::Only(c)),
        };
        self.selected = 0;
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AddToCartBehavior::default(), DEFAULT_CHECKOUT_DELAY)
    }
}

impl MiniAppState for Store {
    type Action = StoreAction;

    fn handle(&mut self, action: StoreAction) -> AppSignal {
        match action {
            StoreAction::SelectNext => {
                self.selected = self.selected.saturating_add(1);
                self.clamp_selection();
            }
            StoreAction::SelectPrev => self.selected = self.selected.saturating_sub(1),
            StoreAction::AddSelected => {
                let id = self.visible_products().nth(self.selected).map(|p| p.id);
                if let Some(id) = id {
                    self.add(id);
                }
            }
            StoreAction::Add(id) => self.add(id),
            StoreAction::RemoveSelected => self.remove_at(self.selected),
            StoreAction::RemoveAt(index) => self.remove_at(index),
            StoreAction::CycleFilter => self.cycle_filter(),
            StoreAction::OpenCart => {
                if self.view == StoreView::Browsing {
                    self.set_view(StoreView::Cart);
                }
            }
            StoreAction::BackToShop => {
                if self.view == StoreView::Cart {
                    self.set_view(StoreView::Browsing);
                }
            }
            StoreAction::Checkout => {
                if self.view == StoreView::Cart && !self.cart.is_empty() {
                    self.set_view(StoreView::Checkout(DelayTimer::new(self.checkout_delay)));
                }
            }
            StoreAction::CancelCheckout => {
                if matches!(self.view, StoreView::Checkout(_)) {
                    self.set_view(StoreView::Cart);
                }
            }
            StoreAction::ContinueShopping => {
                if self.view == StoreView::Confirmed {
                    self.cart.clear();
                    self.set_view(StoreView::Browsing);
                }
            }
            StoreAction::Close => return AppSignal::Close,
        }
        AppSignal::Continue
    }

    fn tick(&mut self, delta: Duration) {
        if let StoreView::Checkout(timer) = &mut self.view
            && timer.advance(delta)
        {
            self.set_view(StoreView::Confirmed);
        }
    }
}
