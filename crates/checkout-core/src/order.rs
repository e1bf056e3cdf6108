//! # Order Wire Model
//!
//! The vendor-facing order request shape: purchase units, items, shipping
//! options, and the top-level `OrderRequest` sent to the Orders API.
//! Field names serialize to the vendor's snake_case wire format.

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Order intent: collect funds immediately, or place a capturable hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderIntent {
    /// Funds are captured when the buyer approves
    Capture,
    /// Funds are reserved; a separate capture collects them later
    Authorize,
}

impl Default for OrderIntent {
    fn default() -> Self {
        OrderIntent::Capture
    }
}

impl OrderIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderIntent::Capture => "CAPTURE",
            OrderIntent::Authorize => "AUTHORIZE",
        }
    }
}

/// Item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemCategory {
    PhysicalGoods,
    DigitalGoods,
    Donation,
}

/// A line of sale inside a purchase unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Display name
    pub name: String,

    /// Unit price
    pub unit_amount: Money,

    /// Quantity as a positive-integer string, e.g. "1"
    pub quantity: String,

    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Stock keeping unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Item category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ItemCategory>,
}

impl Item {
    /// Create an item with the required fields
    pub fn new(name: impl Into<String>, unit_amount: Money, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit_amount,
            quantity: quantity.into(),
            description: None,
            sku: None,
            category: None,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Builder: set SKU
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    /// Builder: set category
    pub fn with_category(mut self, category: ItemCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Quantity parsed as a positive integer, if well formed
    pub fn parsed_quantity(&self) -> Option<u32> {
        self.quantity.parse::<u32>().ok().filter(|q| *q > 0)
    }
}

/// Shipping option type (the Orders API accepts exactly this variant here)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingType {
    Shipping,
}

impl Default for ShippingType {
    fn default() -> Self {
        ShippingType::Shipping
    }
}

/// A shipping choice offered to the buyer.
///
/// Exactly one option in a set should carry `selected = true`; the relay
/// does not enforce this, the template author is responsible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingOption {
    /// Option identifier, e.g. "001"
    pub id: String,

    /// Display label, e.g. "ground"
    pub label: String,

    #[serde(rename = "type", default)]
    pub kind: ShippingType,

    /// Cost of this option
    pub amount: Money,

    /// Whether this option is preselected
    pub selected: bool,
}

impl ShippingOption {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        amount: Money,
        selected: bool,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: ShippingType::Shipping,
            amount,
            selected,
        }
    }
}

/// Shipping block of a purchase unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipping {
    pub options: Vec<ShippingOption>,
}

/// The merchant receiving the funds (multiparty flows)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payee {
    pub merchant_id: String,
}

/// Optional amount breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountBreakdown {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_total: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_total: Option<Money>,
}

/// Purchase-unit amount, optionally broken down
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountWithBreakdown {
    pub currency_code: Currency,
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<AmountBreakdown>,
}

impl AmountWithBreakdown {
    /// Plain amount without a breakdown
    pub fn from_money(money: &Money) -> Self {
        Self {
            currency_code: money.currency_code,
            value: money.value.clone(),
            breakdown: None,
        }
    }

    /// Builder: set the item_total breakdown line
    pub fn with_item_total(mut self, item_total: Money) -> Self {
        self.breakdown = Some(AmountBreakdown {
            item_total: Some(item_total),
            shipping: None,
            tax_total: None,
        });
        self
    }
}

/// One logical line of sale within an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseUnit {
    pub amount: AmountWithBreakdown,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Shipping>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee: Option<Payee>,
}

impl PurchaseUnit {
    /// Create a purchase unit with just an amount
    pub fn new(amount: AmountWithBreakdown) -> Self {
        Self {
            amount,
            items: Vec::new(),
            shipping: None,
            payee: None,
        }
    }

    /// Builder: set items
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// Builder: set shipping options
    pub fn with_shipping_options(mut self, options: Vec<ShippingOption>) -> Self {
        self.shipping = Some(Shipping { options });
        self
    }

    /// Builder: set the payee merchant id
    pub fn with_payee(mut self, merchant_id: impl Into<String>) -> Self {
        self.payee = Some(Payee {
            merchant_id: merchant_id.into(),
        });
        self
    }
}

/// Top-level order creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub intent: OrderIntent,
    pub purchase_units: Vec<PurchaseUnit>,
}

impl OrderRequest {
    /// Create an order request; `purchase_units` must be non-empty for the
    /// vendor to accept it
    pub fn new(intent: OrderIntent, purchase_units: Vec<PurchaseUnit>) -> Self {
        Self {
            intent,
            purchase_units,
        }
    }

    /// Check if the request carries no purchase units
    pub fn is_empty(&self) -> bool {
        self.purchase_units.is_empty()
    }
}
