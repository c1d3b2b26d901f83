//! Sanitizer registry: named transformation hooks applied during merge
//!
//! Hooks live in explicit ordered lists addressable by field kind, by tab,
//! and by tab/section. All hooks are registered before the service is
//! constructed; the registry is read-only afterwards.

use crate::contract::{FieldKind, SettingValue, SubmittedValues};
use std::collections::{HashMap, HashSet};

/// Rewrites one merged value; receives the value and its field id.
pub type ValueSanitizer = Box<dyn Fn(SettingValue, &str) -> SettingValue + Send + Sync>;

/// Rewrites a whole submitted map before merge (cross-field validation for
/// tabs with special data, e.g. taxes).
pub type SectionSanitizer = Box<dyn Fn(SubmittedValues) -> SubmittedValues + Send + Sync>;

/// Registry of sanitization hooks and non-persistable kind registrations.
#[derive(Default)]
pub struct SanitizerRegistry {
    by_kind: HashMap<FieldKind, Vec<ValueSanitizer>>,
    generic: Vec<ValueSanitizer>,
    by_tab: HashMap<String, Vec<SectionSanitizer>>,
    by_section: HashMap<(String, String), Vec<SectionSanitizer>>,
    non_setting_kinds: HashSet<FieldKind>,
}

impl SanitizerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sanitizer for one field kind.
    pub fn register_kind_sanitizer(
        &mut self,
        kind: FieldKind,
        sanitizer: impl Fn(SettingValue, &str) -> SettingValue + Send + Sync + 'static,
    ) {
        self.by_kind.entry(kind).or_default().push(Box::new(sanitizer));
    }

    /// Register a sanitizer applied to every persistable field after the
    /// kind-specific ones.
    pub fn register_generic_sanitizer(
        &mut self,
        sanitizer: impl Fn(SettingValue, &str) -> SettingValue + Send + Sync + 'static,
    ) {
        self.generic.push(Box::new(sanitizer));
    }

    /// Register a pre-merge hook for every section of a tab.
    pub fn register_tab_sanitizer(
        &mut self,
        tab: impl Into<String>,
        sanitizer: impl Fn(SubmittedValues) -> SubmittedValues + Send + Sync + 'static,
    ) {
        self.by_tab
            .entry(tab.into())
            .or_default()
            .push(Box::new(sanitizer));
    }

    /// Register a pre-merge hook for one tab/section.
    pub fn register_section_sanitizer(
        &mut self,
        tab: impl Into<String>,
        section: impl Into<String>,
        sanitizer: impl Fn(SubmittedValues) -> SubmittedValues + Send + Sync + 'static,
    ) {
        self.by_section
            .entry((tab.into(), section.into()))
            .or_default()
            .push(Box::new(sanitizer));
    }

    /// Mark an additional kind as non-persistable.
    pub fn register_non_setting_kind(&mut self, kind: FieldKind) {
        self.non_setting_kinds.insert(kind);
    }

    /// Whether values of this kind are skipped during merge.
    pub fn is_non_setting(&self, kind: &FieldKind) -> bool {
        kind.is_builtin_non_setting() || self.non_setting_kinds.contains(kind)
    }

    /// Run the kind-specific sanitizers, then the generic ones.
    pub fn apply_value(&self, kind: &FieldKind, value: SettingValue, id: &str) -> SettingValue {
        let mut value = value;
        if let Some(sanitizers) = self.by_kind.get(kind) {
            for sanitizer in sanitizers {
                value = sanitizer(value, id);
            }
        }
        for sanitizer in &self.generic {
            value = sanitizer(value, id);
        }
        value
    }

    /// Run the tab-level hooks, then the tab/section hooks, over the
    /// submitted map.
    pub fn apply_section_hooks(
        &self,
        tab: &str,
        section: &str,
        submitted: SubmittedValues,
    ) -> SubmittedValues {
        let mut submitted = submitted;
        if let Some(hooks) = self.by_tab.get(tab) {
            for hook in hooks {
                submitted = hook(submitted);
            }
        }
        if let Some(hooks) = self.by_section.get(&(tab.to_string(), section.to_string())) {
            for hook in hooks {
                submitted = hook(submitted);
            }
        }
        submitted
    }
}
