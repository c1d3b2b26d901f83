//! Contract models for the settings form service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Hidden-input marker posted by checkbox groups when nothing is checked.
///
/// Group controls render one hidden field carrying this value next to the
/// real inputs; if the admin checks nothing, only the marker arrives, which
/// distinguishes "explicitly cleared" from "field not submitted at all".
pub const UNCHECKED_SENTINEL: &str = "-1";

/// The kind of a settings control.
///
/// Determines both the renderer and the sanitize/merge rule for a field.
/// The enumeration is closed; host extensions use `Custom` together with a
/// renderer registration instead of reflective dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Textarea,
    Checkbox,
    Select,
    SelectCurrency,
    GatewaySelect,
    Gateways,
    Multicheck,
    PaymentIcons,
    PageSelect,
    Header,
    DescriptiveText,
    Hook,
    /// Extension kind registered by a collaborator.
    Custom(String),
}

impl FieldKind {
    /// Stable wire/display name of the kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Checkbox => "checkbox",
            Self::Select => "select",
            Self::SelectCurrency => "select_currency",
            Self::GatewaySelect => "gateway_select",
            Self::Gateways => "gateways",
            Self::Multicheck => "multicheck",
            Self::PaymentIcons => "payment_icons",
            Self::PageSelect => "page_select",
            Self::Header => "header",
            Self::DescriptiveText => "descriptive_text",
            Self::Hook => "hook",
            Self::Custom(name) => name,
        }
    }

    /// Parse a kind name, falling back to `Custom` for unknown names.
    pub fn parse(kind: &str) -> Self {
        match kind {
            "text" => Self::Text,
            "textarea" => Self::Textarea,
            "checkbox" => Self::Checkbox,
            "select" => Self::Select,
            "select_currency" => Self::SelectCurrency,
            "gateway_select" => Self::GatewaySelect,
            "gateways" => Self::Gateways,
            "multicheck" => Self::Multicheck,
            "payment_icons" => Self::PaymentIcons,
            "page_select" => Self::PageSelect,
            "header" => Self::Header,
            "descriptive_text" => Self::DescriptiveText,
            "hook" => Self::Hook,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Whether this kind renders as a checkbox group with a hidden
    /// [`UNCHECKED_SENTINEL`] input and merges with sentinel semantics.
    pub fn is_group(&self) -> bool {
        matches!(
            self,
            Self::Checkbox | Self::Gateways | Self::Multicheck | Self::PaymentIcons
        )
    }

    /// Whether this kind never persists a value (pure presentation).
    ///
    /// Collaborators can extend the non-persistable set through the
    /// sanitizer registry; this covers only the built-in kinds.
    pub fn is_builtin_non_setting(&self) -> bool {
        matches!(self, Self::Header | Self::DescriptiveText | Self::Hook)
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted setting value.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    /// Plain text (also carries numeric page ids and the group sentinel)
    Text(String),
    /// Numeric value
    Number(f64),
    /// Multi-select list of option keys
    List(Vec<String>),
    /// Grouped checkbox map of option key to flag value
    Map(IndexMap<String, String>),
}

impl SettingValue {
    /// Convenience constructor for text values.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Whether the value counts as empty for merge pruning.
    ///
    /// Numbers are never empty; see DESIGN.md for the rationale.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Number(_) => false,
            Self::List(items) => items.is_empty(),
            Self::Map(entries) => entries.is_empty(),
        }
    }

    /// Whether the value is the group sentinel meaning "nothing checked".
    pub fn is_unchecked_sentinel(&self) -> bool {
        matches!(self, Self::Text(text) if text == UNCHECKED_SENTINEL)
    }

    /// Borrow the inner text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One selectable option of a select-like control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Stored option key
    pub key: String,
    /// Human-readable label
    pub label: String,
}

impl SelectOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// A single settings field declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Unique id within the whole settings namespace; empty ids mark
    /// non-persistable declarations and are dropped at schema build
    pub id: String,
    /// Label shown next to the control
    pub name: String,
    /// Control kind
    pub kind: FieldKind,
    /// Description rendered next to the control
    pub desc: String,
    /// Options for select-like and group kinds
    pub options: Vec<SelectOption>,
    /// Default value used when nothing is persisted
    pub default: Option<SettingValue>,
    /// Whether an empty persisted value renders as blank instead of the default
    pub allow_blank: bool,
    /// Placeholder for text and select controls
    pub placeholder: Option<String>,
    /// Render the control read-only
    pub readonly: bool,
    /// Whether a select accepts multiple values
    pub multiple: bool,
    /// Extra CSS class for the control
    pub class: String,
}

impl Field {
    /// Create a field with the defaults applied to every declaration
    /// (`allow_blank` on, everything else off/empty).
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            desc: String::new(),
            options: Vec::new(),
            default: None,
            allow_blank: true,
            placeholder: None,
            readonly: false,
            multiple: false,
            class: String::new(),
        }
    }

    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_default(mut self, default: SettingValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    pub fn with_readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

/// An ordered group of fields rendered together within a tab.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    /// Navigation label of the section
    pub label: String,
    /// Fields in render order
    pub fields: Vec<Field>,
}

/// A top-level settings tab.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tab {
    /// Navigation label of the tab
    pub label: String,
    /// Sections in render order
    pub sections: IndexMap<String, Section>,
    /// Fields contributed directly at tab level (legacy contributions
    /// predating sections); still part of the persistable namespace
    pub loose_fields: Vec<Field>,
}

/// The frozen declarative schema: ordered tabs of ordered sections of fields.
///
/// Built once through the schema builder; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    tabs: IndexMap<String, Tab>,
}

impl Schema {
    pub(crate) fn from_tabs(tabs: IndexMap<String, Tab>) -> Self {
        Self { tabs }
    }

    /// All tabs in declaration order.
    pub fn tabs(&self) -> &IndexMap<String, Tab> {
        &self.tabs
    }

    /// Look up a tab by key.
    pub fn tab(&self, tab: &str) -> Option<&Tab> {
        self.tabs.get(tab)
    }

    /// Look up a section by tab and section key.
    pub fn section(&self, tab: &str, section: &str) -> Option<&Section> {
        self.tabs.get(tab)?.sections.get(section)
    }

    /// Flatten the schema into a field id -> kind index, optionally
    /// restricted to one tab and one section.
    ///
    /// Fields declared directly at tab level are included even under a
    /// section filter: legacy contributions never named a section, and the
    /// submission pruning must keep seeing them.
    pub fn field_types(
        &self,
        tab_filter: Option<&str>,
        section_filter: Option<&str>,
    ) -> IndexMap<String, FieldKind> {
        let mut types = IndexMap::new();

        for (tab_key, tab) in &self.tabs {
            if tab_filter.is_some_and(|filter| filter != tab_key) {
                continue;
            }

            for field in &tab.loose_fields {
                types.insert(field.id.clone(), field.kind.clone());
            }

            for (section_key, section) in &tab.sections {
                if section_filter.is_some_and(|filter| filter != section_key) {
                    continue;
                }

                for field in &section.fields {
                    types.insert(field.id.clone(), field.kind.clone());
                }
            }
        }

        types
    }

    /// Find a field declaration anywhere in the schema.
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.tabs.values().find_map(|tab| {
            tab.loose_fields
                .iter()
                .chain(tab.sections.values().flat_map(|s| s.fields.iter()))
                .find(|field| field.id == id)
        })
    }
}

/// The single persisted settings object: a flat field id -> value mapping,
/// loaded once and written back whole.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsRecord {
    values: IndexMap<String, SettingValue>,
}

impl SettingsRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&SettingValue> {
        self.values.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut SettingValue> {
        self.values.get_mut(id)
    }

    pub fn set(&mut self, id: impl Into<String>, value: SettingValue) {
        self.values.insert(id.into(), value);
    }

    pub fn remove(&mut self, id: &str) -> Option<SettingValue> {
        self.values.shift_remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SettingValue)> {
        self.values.iter()
    }
}

impl FromIterator<(String, SettingValue)> for SettingsRecord {
    fn from_iter<I: IntoIterator<Item = (String, SettingValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Raw values posted for one submission, keyed by field id.
pub type SubmittedValues = IndexMap<String, SettingValue>;

/// Where a submission came from: which tab/section was posted, or a
/// full-namespace save when unscoped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestContext {
    /// Tab detected from the request; defaults to the configured tab
    pub tab: Option<String>,
    /// Section detected from the request; defaults to the configured section
    pub section: Option<String>,
    /// Explicit override posted with the form; wins over `section`
    pub section_override: Option<String>,
    /// Whether this is a single-section submission
    pub scoped: bool,
}

impl RequestContext {
    /// A full-namespace save without tab/section context.
    pub fn full_save() -> Self {
        Self::default()
    }

    /// A submission scoped to one tab/section.
    pub fn section_scoped(tab: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            tab: Some(tab.into()),
            section: Some(section.into()),
            section_override: None,
            scoped: true,
        }
    }

    pub fn with_section_override(mut self, section: impl Into<String>) -> Self {
        self.section_override = Some(section.into());
        self
    }
}

/// Kind of an admin notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Settings were saved successfully
    Updated,
}

/// Non-fatal notice recorded for display after a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminNotice {
    pub kind: NoticeKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl AdminNotice {
    /// Create a new "settings updated" notice.
    pub fn updated(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Updated,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}
