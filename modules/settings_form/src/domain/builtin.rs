//! Built-in settings declarations
//!
//! The tabs, sections, and fields the plugin ships with. Host extensions
//! contribute additional entries through their own [`SchemaContributor`]s.

use super::schema::{SchemaBuilder, SchemaContributor};
use crate::contract::{Field, FieldKind, SelectOption, SettingValue};

/// Contributor declaring the plugin's own tabs and fields.
pub struct BuiltinSettings;

impl SchemaContributor for BuiltinSettings {
    fn contribute(&self, builder: &mut SchemaBuilder) {
        builder.declare_tab("general", "General");
        builder.declare_tab("gateways", "Payment Gateways");
        builder.declare_tab("extensions", "Extensions");

        builder.declare_section("general", "main", "General");
        builder.declare_section("gateways", "main", "General");
        builder.declare_section("extensions", "main", "General");

        builder.add_fields(
            "general",
            "main",
            vec![
                Field::new("page_settings", "Pages", FieldKind::Header),
                Field::new("payment_page", "Payment Page", FieldKind::PageSelect)
                    .with_placeholder("Select a page")
                    .with_desc("The page customers use to complete a payment."),
                Field::new(
                    "payment_success_page",
                    "Payment Success Page",
                    FieldKind::PageSelect,
                )
                .with_placeholder("Select a page")
                .with_desc(
                    "The page customers are sent to after completing a payment. \
                     This page should be excluded from any site caching.",
                ),
                Field::new(
                    "payment_failure_page",
                    "Payment Failure Page",
                    FieldKind::PageSelect,
                )
                .with_placeholder("Select a page")
                .with_desc("The page customers are sent to after a failed payment."),
                Field::new("currency_settings", "Currency Options", FieldKind::Header),
                Field::new("currency", "Currency", FieldKind::SelectCurrency)
                    .with_options(currency_options())
                    .with_desc(
                        "Choose your currency. Note that some payment gateways have \
                         currency restrictions.",
                    ),
                Field::new("currency_position", "Currency Position", FieldKind::Select)
                    .with_options(vec![
                        SelectOption::new("before", "Before - $10"),
                        SelectOption::new("after", "After - 10$"),
                    ])
                    .with_desc("Choose the location of the currency sign."),
            ],
        );

        builder.add_fields(
            "gateways",
            "main",
            vec![
                Field::new("test_mode", "Test Mode", FieldKind::Checkbox).with_desc(
                    "While in test mode no live transactions are processed. To fully \
                     use test mode, you must have a sandbox account for the payment \
                     gateway you are testing.",
                ),
                Field::new("gateways", "Payment Gateways", FieldKind::Gateways)
                    .with_options(gateway_options())
                    .with_desc("Choose the payment gateways you want to enable."),
                Field::new("default_gateway", "Default Gateway", FieldKind::GatewaySelect)
                    .with_options(gateway_options())
                    .with_default(SettingValue::text("paddle"))
                    .with_desc("This gateway is preselected on the checkout page."),
            ],
        );
    }
}

/// Supported currencies as preformatted "Name (Symbol)" select options.
pub fn currency_options() -> Vec<SelectOption> {
    [
        ("USD", "US Dollar", "$"),
        ("EUR", "Euro", "€"),
        ("GBP", "Pound Sterling", "£"),
        ("AUD", "Australian Dollar", "$"),
        ("BRL", "Brazilian Real", "R$"),
        ("CAD", "Canadian Dollar", "$"),
        ("CZK", "Czech Koruna", "Kč"),
        ("DKK", "Danish Krone", "kr"),
        ("HKD", "Hong Kong Dollar", "$"),
        ("HUF", "Hungarian Forint", "Ft"),
        ("INR", "Indian Rupee", "₹"),
        ("JPY", "Japanese Yen", "¥"),
        ("MXN", "Mexican Peso", "$"),
        ("NOK", "Norwegian Krone", "kr"),
        ("NZD", "New Zealand Dollar", "$"),
        ("PLN", "Polish Zloty", "zł"),
        ("SEK", "Swedish Krona", "kr"),
        ("SGD", "Singapore Dollar", "$"),
    ]
    .iter()
    .map(|(code, name, symbol)| SelectOption::new(*code, format!("{name} ({symbol})")))
    .collect()
}

/// Payment gateways available for enabling.
pub fn gateway_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("paddle", "Paddle"),
        SelectOption::new("paypal", "PayPal Standard"),
        SelectOption::new("stripe", "Stripe"),
    ]
}
