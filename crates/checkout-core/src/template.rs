//! # Order Templates
//!
//! Templates are the single source of purchase-unit data for order creation.
//! The catalog is loaded from `config/order_template.toml`; a built-in
//! template matching the sample storefront is used when no file is present.
//!
//! Amounts and items come from the template, never from the inbound cart
//! payload. The cart is accepted for API compatibility only.

use crate::error::{CheckoutError, CheckoutResult};
use crate::money::{Currency, Money};
use crate::order::{
    AmountWithBreakdown, Item, ItemCategory, OrderIntent, OrderRequest, PurchaseUnit,
    ShippingOption,
};
use serde::{Deserialize, Serialize};

/// A reusable order blueprint: intent, amount, items, and shipping choices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderTemplate {
    /// Template identifier (e.g., "standard")
    pub id: String,

    /// Order intent
    #[serde(default)]
    pub intent: OrderIntent,

    /// Purchase-unit amount
    pub amount: Money,

    /// Items sold under this template
    #[serde(default)]
    pub items: Vec<Item>,

    /// Shipping choices offered to the buyer
    #[serde(default)]
    pub shipping_options: Vec<ShippingOption>,
}

impl OrderTemplate {
    /// The built-in template mirroring the sample storefront: a USD 100.00
    /// T-Shirt with ground and expedited shipping choices.
    pub fn standard() -> Self {
        Self {
            id: "standard".to_string(),
            intent: OrderIntent::Capture,
            amount: Money::new(Currency::USD, "100.00"),
            items: vec![Item::new(
                "T-Shirt",
                Money::new(Currency::USD, "100.00"),
                "1",
            )
            .with_description("Super Fresh Shirt")
            .with_sku("sku01")
            .with_category(ItemCategory::PhysicalGoods)],
            shipping_options: vec![
                ShippingOption::new("001", "ground", Money::new(Currency::USD, "0.00"), true),
                ShippingOption::new(
                    "002",
                    "Expedite",
                    Money::new(Currency::USD, "100.00"),
                    false,
                ),
            ],
        }
    }

    /// Assemble the vendor order request from this template, with one
    /// purchase unit. When items are present the breakdown mirrors the
    /// template amount; totals are template data and are not recomputed.
    pub fn to_order_request(&self, payee_merchant_id: Option<&str>) -> OrderRequest {
        let mut amount = AmountWithBreakdown::from_money(&self.amount);
        if !self.items.is_empty() {
            amount = amount.with_item_total(self.amount.clone());
        }

        let mut unit = PurchaseUnit::new(amount);
        if !self.items.is_empty() {
            unit = unit.with_items(self.items.clone());
        }
        if !self.shipping_options.is_empty() {
            unit = unit.with_shipping_options(self.shipping_options.clone());
        }
        if let Some(merchant_id) = payee_merchant_id {
            unit = unit.with_payee(merchant_id);
        }

        OrderRequest::new(self.intent, vec![unit])
    }

    /// Validate the template's monetary invariants: well-formed amounts and
    /// positive-integer quantities.
    pub fn validate(&self) -> CheckoutResult<()> {
        self.amount.validate()?;

        for item in &self.items {
            item.unit_amount.validate()?;
            if item.parsed_quantity().is_none() {
                return Err(CheckoutError::InvalidAmount {
                    message: format!(
                        "item {:?} quantity must be a positive integer string, got {:?}",
                        item.name, item.quantity
                    ),
                });
            }
        }

        for option in &self.shipping_options {
            option.amount.validate()?;
        }

        Ok(())
    }
}

/// Template catalog (loaded from config)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateCatalog {
    pub templates: Vec<OrderTemplate>,
}

impl TemplateCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            templates: Vec::new(),
        }
    }

    /// The fallback catalog containing only the built-in standard template
    pub fn builtin() -> Self {
        Self {
            templates: vec![OrderTemplate::standard()],
        }
    }

    /// Add a template to the catalog
    pub fn add(&mut self, template: OrderTemplate) {
        self.templates.push(template);
    }

    /// Find a template by id
    pub fn get(&self, id: &str) -> Option<&OrderTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Load a catalog from TOML
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Validate every template in the catalog
    pub fn validate(&self) -> CheckoutResult<()> {
        for template in &self.templates {
            template.validate()?;
        }
        Ok(())
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_template_is_valid() {
        let template = OrderTemplate::standard();
        assert!(template.validate().is_ok());
        assert_eq!(template.intent, OrderIntent::Capture);
        assert_eq!(template.items.len(), 1);
        assert_eq!(template.shipping_options.len(), 2);
    }

    #[test]
    fn test_to_order_request_injects_payee() {
        let request = OrderTemplate::standard().to_order_request(Some("SELLER123"));

        assert!(!request.is_empty());
        let unit = &request.purchase_units[0];
        assert_eq!(unit.payee.as_ref().unwrap().merchant_id, "SELLER123");
        assert_eq!(unit.items.len(), 1);
        assert_eq!(unit.shipping.as_ref().unwrap().options.len(), 2);
        assert_eq!(
            unit.amount
                .breakdown
                .as_ref()
                .unwrap()
                .item_total
                .as_ref()
                .unwrap()
                .value,
            "100.00"
        );
    }

    #[test]
    fn test_to_order_request_without_payee() {
        let request = OrderTemplate::standard().to_order_request(None);
        assert!(request.purchase_units[0].payee.is_none());
    }

    #[test]
    fn test_breakdown_omitted_without_items() {
        let template = OrderTemplate {
            id: "bare".to_string(),
            intent: OrderIntent::Authorize,
            amount: Money::new(Currency::USD, "100.00"),
            items: Vec::new(),
            shipping_options: Vec::new(),
        };

        let request = template.to_order_request(None);
        let unit = &request.purchase_units[0];
        assert!(unit.amount.breakdown.is_none());
        assert!(unit.items.is_empty());
        assert!(unit.shipping.is_none());
        assert_eq!(request.intent, OrderIntent::Authorize);
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = TemplateCatalog::builtin();
        assert!(catalog.get("standard").is_some());
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_catalog_from_toml() {
        let toml_str = r#"
            [[templates]]
            id = "standard"
            intent = "CAPTURE"

            [templates.amount]
            currency_code = "USD"
            value = "100.00"

            [[templates.items]]
            name = "T-Shirt"
            quantity = "1"
            sku = "sku01"
            category = "PHYSICAL_GOODS"

            [templates.items.unit_amount]
            currency_code = "USD"
            value = "100.00"

            [[templates.shipping_options]]
            id = "001"
            label = "ground"
            type = "SHIPPING"
            selected = true

            [templates.shipping_options.amount]
            currency_code = "USD"
            value = "0.00"
        "#;

        let catalog = TemplateCatalog::from_toml(toml_str).unwrap();
        assert!(catalog.validate().is_ok());

        let template = catalog.get("standard").unwrap();
        assert_eq!(template.items[0].sku.as_deref(), Some("sku01"));
        assert!(template.shipping_options[0].selected);
    }

    #[test]
    fn test_validation_rejects_bad_quantity() {
        let mut template = OrderTemplate::standard();
        template.items[0].quantity = "0".to_string();
        assert!(template.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_amount() {
        let mut template = OrderTemplate::standard();
        template.amount = Money::new(Currency::USD, "100.123");
        assert!(template.validate().is_err());
    }
}
