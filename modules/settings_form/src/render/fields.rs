//! Field renderers: explicit kind -> renderer lookup
//!
//! Each renderer turns `(Field, current value)` into form markup. Dispatch
//! is an explicit map plus a "missing renderer" fallback that names the
//! field id and never fails.

use super::html::{esc_attr, esc_html};
use crate::contract::{Field, FieldKind, SettingValue, UNCHECKED_SENTINEL};
use std::collections::HashMap;

/// Renders one field kind into form markup.
pub trait FieldRenderer: Send + Sync {
    fn render(&self, field: &Field, value: Option<&SettingValue>) -> String;
}

/// `name`/`id` attribute of a control: the record key wrapped in the
/// settings namespace.
fn field_name(id: &str) -> String {
    format!("settings[{}]", esc_attr(id))
}

fn label_for(name: &str, desc: &str) -> String {
    format!("<label for=\"{}\"> {}</label>", name, esc_html(desc))
}

/// Single-line text input.
pub struct TextRenderer;

impl FieldRenderer for TextRenderer {
    fn render(&self, field: &Field, value: Option<&SettingValue>) -> String {
        let stored = value.and_then(SettingValue::as_text);
        let shown = match stored {
            Some(text) if !text.is_empty() => text.to_string(),
            _ if field.allow_blank => String::new(),
            _ => field
                .default
                .as_ref()
                .and_then(SettingValue::as_text)
                .unwrap_or_default()
                .to_string(),
        };

        let name = field_name(&field.id);
        let readonly = if field.readonly {
            " readonly=\"readonly\""
        } else {
            ""
        };
        format!(
            "<input type=\"text\" class=\"{} regular-text\" id=\"{name}\" name=\"{name}\" \
             value=\"{}\"{readonly} placeholder=\"{}\"/>{}",
            esc_attr(&field.class),
            esc_attr(&shown),
            esc_attr(field.placeholder.as_deref().unwrap_or("")),
            label_for(&name, &field.desc),
        )
    }
}

/// Multi-line text input.
pub struct TextareaRenderer;

impl FieldRenderer for TextareaRenderer {
    fn render(&self, field: &Field, value: Option<&SettingValue>) -> String {
        let shown = value
            .and_then(SettingValue::as_text)
            .filter(|text| !text.is_empty())
            .or_else(|| field.default.as_ref().and_then(SettingValue::as_text))
            .unwrap_or_default();

        let name = field_name(&field.id);
        format!(
            "<textarea class=\"{} large-text\" cols=\"50\" rows=\"5\" id=\"{name}\" \
             name=\"{name}\">{}</textarea>{}",
            esc_attr(&field.class),
            esc_html(shown),
            label_for(&name, &field.desc),
        )
    }
}

/// Single checkbox with the hidden unchecked marker.
pub struct CheckboxRenderer;

impl FieldRenderer for CheckboxRenderer {
    fn render(&self, field: &Field, value: Option<&SettingValue>) -> String {
        let name = field_name(&field.id);
        let checked = if value.and_then(SettingValue::as_text) == Some("1") {
            " checked=\"checked\""
        } else {
            ""
        };
        format!(
            "<input type=\"hidden\" name=\"{name}\" value=\"{UNCHECKED_SENTINEL}\"/>\
             <input type=\"checkbox\" id=\"{name}\" name=\"{name}\" value=\"1\"{checked} \
             class=\"{}\"/>{}",
            esc_attr(&field.class),
            label_for(&name, &field.desc),
        )
    }
}

/// Checkbox group storing a map of enabled option keys (gateways,
/// multicheck, payment icons).
pub struct GroupedCheckboxRenderer;

impl FieldRenderer for GroupedCheckboxRenderer {
    fn render(&self, field: &Field, value: Option<&SettingValue>) -> String {
        let name = field_name(&field.id);
        let mut html = format!(
            "<input type=\"hidden\" name=\"{name}\" value=\"{UNCHECKED_SENTINEL}\"/>"
        );

        for option in &field.options {
            let enabled = matches!(
                value,
                Some(SettingValue::Map(entries)) if entries.contains_key(&option.key)
            );
            let checked = if enabled { " checked=\"checked\"" } else { "" };
            let option_name = format!("settings[{}][{}]", esc_attr(&field.id), esc_attr(&option.key));
            html.push_str(&format!(
                "<input type=\"checkbox\" id=\"{option_name}\" name=\"{option_name}\" \
                 value=\"1\"{checked} class=\"{}\"/>&nbsp;\
                 <label for=\"{option_name}\">{}</label><br/>",
                esc_attr(&field.class),
                esc_html(&option.label),
            ));
        }

        html
    }
}

/// Dropdown, optionally multi-valued.
pub struct SelectRenderer;

impl SelectRenderer {
    fn selected_text<'a>(field: &'a Field, value: Option<&'a SettingValue>) -> Option<&'a str> {
        value
            .and_then(SettingValue::as_text)
            .or_else(|| field.default.as_ref().and_then(SettingValue::as_text))
    }

    fn selected_list<'a>(field: &'a Field, value: Option<&'a SettingValue>) -> &'a [String] {
        match value {
            Some(SettingValue::List(items)) => items,
            _ => match &field.default {
                Some(SettingValue::List(items)) => items,
                _ => &[],
            },
        }
    }
}

impl FieldRenderer for SelectRenderer {
    fn render(&self, field: &Field, value: Option<&SettingValue>) -> String {
        let base = field_name(&field.id);
        let name = if field.multiple {
            format!("{base}[]")
        } else {
            base.clone()
        };
        let multiple = if field.multiple { " multiple=\"true\"" } else { "" };

        let mut html = format!(
            "<select id=\"{base}\" name=\"{name}\" class=\"{}\" data-placeholder=\"{}\"{multiple}>",
            esc_attr(&field.class),
            esc_attr(field.placeholder.as_deref().unwrap_or("")),
        );

        let chosen_text = Self::selected_text(field, value);
        let chosen_list = Self::selected_list(field, value);
        for option in &field.options {
            let selected = if field.multiple {
                chosen_list.iter().any(|key| key == &option.key)
            } else {
                chosen_text == Some(option.key.as_str())
            };
            let selected = if selected { " selected=\"selected\"" } else { "" };
            html.push_str(&format!(
                "<option value=\"{}\"{selected}>{}</option>",
                esc_attr(&option.key),
                esc_html(&option.label),
            ));
        }

        html.push_str("</select>");
        html.push_str(&label_for(&base, &field.desc));
        html
    }
}

/// Currency dropdown; options arrive preformatted as "Name (Symbol)".
pub struct SelectCurrencyRenderer;

impl FieldRenderer for SelectCurrencyRenderer {
    fn render(&self, field: &Field, value: Option<&SettingValue>) -> String {
        SelectRenderer.render(field, value)
    }
}

/// Page dropdown with a leading placeholder entry.
pub struct PageSelectRenderer;

impl FieldRenderer for PageSelectRenderer {
    fn render(&self, field: &Field, value: Option<&SettingValue>) -> String {
        let name = field_name(&field.id);
        let chosen = value.and_then(SettingValue::as_text);

        let mut html = format!(
            "<select id=\"{name}\" name=\"{name}\" class=\"{}\">",
            esc_attr(&field.class),
        );
        html.push_str(&format!(
            "<option value=\"\">{}</option>",
            esc_html(field.placeholder.as_deref().unwrap_or("")),
        ));
        for option in &field.options {
            let selected = if chosen == Some(option.key.as_str()) {
                " selected=\"selected\""
            } else {
                ""
            };
            html.push_str(&format!(
                "<option value=\"{}\"{selected}>{}</option>",
                esc_attr(&option.key),
                esc_html(&option.label),
            ));
        }
        html.push_str("</select>");
        html.push_str(&label_for(&name, &field.desc));
        html
    }
}

/// Gateway dropdown with a disabled placeholder when nothing is stored.
pub struct GatewaySelectRenderer;

impl FieldRenderer for GatewaySelectRenderer {
    fn render(&self, field: &Field, value: Option<&SettingValue>) -> String {
        let name = field_name(&field.id);
        let chosen = value
            .and_then(SettingValue::as_text)
            .or_else(|| field.default.as_ref().and_then(SettingValue::as_text));

        let placeholder_selected = if chosen.is_none() {
            " selected=\"selected\""
        } else {
            ""
        };
        let mut html = format!(
            "<select id=\"{name}\" name=\"{name}\" class=\"{}\">\
             <option value=\"\" disabled=\"disabled\"{placeholder_selected}>Select a gateway</option>",
            esc_attr(&field.class),
        );
        for option in &field.options {
            let selected = if chosen == Some(option.key.as_str()) {
                " selected=\"selected\""
            } else {
                ""
            };
            html.push_str(&format!(
                "<option value=\"{}\"{selected}>{}</option>",
                esc_attr(&option.key),
                esc_html(&option.label),
            ));
        }
        html.push_str("</select>");
        html.push_str(&label_for(&name, &field.desc));
        html
    }
}

/// Section header; the heading itself is rendered by the form table row.
pub struct HeaderRenderer;

impl FieldRenderer for HeaderRenderer {
    fn render(&self, _field: &Field, _value: Option<&SettingValue>) -> String {
        String::new()
    }
}

/// Free-standing descriptive text.
pub struct DescriptiveTextRenderer;

impl FieldRenderer for DescriptiveTextRenderer {
    fn render(&self, field: &Field, _value: Option<&SettingValue>) -> String {
        esc_html(&field.desc)
    }
}

/// Explicit kind -> renderer mapping with a missing-renderer fallback.
pub struct RendererRegistry {
    renderers: HashMap<FieldKind, Box<dyn FieldRenderer>>,
}

impl RendererRegistry {
    /// An empty registry; every kind falls back to the missing message.
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Registry covering every built-in kind.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(FieldKind::Text, Box::new(TextRenderer));
        registry.register(FieldKind::Textarea, Box::new(TextareaRenderer));
        registry.register(FieldKind::Checkbox, Box::new(CheckboxRenderer));
        registry.register(FieldKind::Select, Box::new(SelectRenderer));
        registry.register(FieldKind::SelectCurrency, Box::new(SelectCurrencyRenderer));
        registry.register(FieldKind::GatewaySelect, Box::new(GatewaySelectRenderer));
        registry.register(FieldKind::Gateways, Box::new(GroupedCheckboxRenderer));
        registry.register(FieldKind::Multicheck, Box::new(GroupedCheckboxRenderer));
        registry.register(FieldKind::PaymentIcons, Box::new(GroupedCheckboxRenderer));
        registry.register(FieldKind::PageSelect, Box::new(PageSelectRenderer));
        registry.register(FieldKind::Header, Box::new(HeaderRenderer));
        registry.register(FieldKind::DescriptiveText, Box::new(DescriptiveTextRenderer));
        registry
    }

    /// Register (or replace) the renderer for a kind.
    pub fn register(&mut self, kind: FieldKind, renderer: Box<dyn FieldRenderer>) {
        self.renderers.insert(kind, renderer);
    }

    /// Render a field, substituting the missing-renderer placeholder for
    /// kinds without a registered renderer. Never fails.
    pub fn render(&self, field: &Field, value: Option<&SettingValue>) -> String {
        match self.renderers.get(&field.kind) {
            Some(renderer) => renderer.render(field, value),
            None => format!(
                "The renderer used for the <strong>{}</strong> setting is missing.",
                esc_html(&field.id),
            ),
        }
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
