//! Schema construction: declared tabs/sections plus additive contributions
//!
//! The schema is assembled once from the built-in declarations and any
//! registered contributors, then frozen into [`Schema`]. Contributions are
//! additive - field lists concatenate, nothing is deduplicated.

use crate::contract::{Field, Schema, Section, Tab};
use indexmap::IndexMap;

/// Extension point: external code appends fields, sections, or whole tabs.
///
/// Contributors run once per schema build, in registration order.
pub trait SchemaContributor: Send + Sync {
    fn contribute(&self, builder: &mut SchemaBuilder);
}

enum Contribution {
    SectionFields {
        tab: String,
        section: String,
        fields: Vec<Field>,
    },
    /// Legacy shape: a field contributed directly at tab level.
    TabField { tab: String, field: Field },
}

/// Collects declarations and contributions, then freezes them into a
/// [`Schema`].
#[derive(Default)]
pub struct SchemaBuilder {
    tab_labels: IndexMap<String, String>,
    section_labels: IndexMap<String, IndexMap<String, String>>,
    contributions: Vec<Contribution>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a tab. The last declaration wins for the label.
    pub fn declare_tab(&mut self, tab: impl Into<String>, label: impl Into<String>) {
        self.tab_labels.insert(tab.into(), label.into());
    }

    /// Declare a section key for a tab. Contributions naming an undeclared
    /// section fall back to the implicit `main` section at build time.
    pub fn declare_section(
        &mut self,
        tab: impl Into<String>,
        section: impl Into<String>,
        label: impl Into<String>,
    ) {
        self.section_labels
            .entry(tab.into())
            .or_default()
            .insert(section.into(), label.into());
    }

    /// Append fields to a tab/section. Lists concatenate across calls.
    pub fn add_fields(
        &mut self,
        tab: impl Into<String>,
        section: impl Into<String>,
        fields: Vec<Field>,
    ) {
        self.contributions.push(Contribution::SectionFields {
            tab: tab.into(),
            section: section.into(),
            fields,
        });
    }

    /// Append a single field to a tab/section.
    pub fn add_field(&mut self, tab: impl Into<String>, section: impl Into<String>, field: Field) {
        self.add_fields(tab, section, vec![field]);
    }

    /// Append a field directly at tab level (legacy contributions that
    /// predate sections).
    pub fn add_tab_field(&mut self, tab: impl Into<String>, field: Field) {
        self.contributions.push(Contribution::TabField {
            tab: tab.into(),
            field,
        });
    }

    /// Run a contributor against this builder.
    pub fn apply(&mut self, contributor: &dyn SchemaContributor) {
        contributor.contribute(self);
    }

    /// Freeze the collected declarations into an immutable schema.
    ///
    /// Fields without an id are dropped (pure presentation entries that
    /// never persist). A contribution naming a section key not declared for
    /// its tab lands in the implicit `main` section.
    pub fn build(self) -> Schema {
        let mut tabs: IndexMap<String, Tab> = IndexMap::new();

        for (tab_key, label) in &self.tab_labels {
            let mut tab = Tab {
                label: label.clone(),
                ..Tab::default()
            };
            if let Some(sections) = self.section_labels.get(tab_key) {
                for (section_key, section_label) in sections {
                    tab.sections.insert(
                        section_key.clone(),
                        Section {
                            label: section_label.clone(),
                            fields: Vec::new(),
                        },
                    );
                }
            }
            tabs.insert(tab_key.clone(), tab);
        }

        for contribution in self.contributions {
            match contribution {
                Contribution::SectionFields {
                    tab,
                    section,
                    fields,
                } => {
                    let declared = self
                        .section_labels
                        .get(&tab)
                        .is_some_and(|sections| sections.contains_key(&section));
                    let tab_entry = tabs.entry(tab.clone()).or_insert_with(|| Tab {
                        label: tab.clone(),
                        ..Tab::default()
                    });
                    let section_key = if declared { section } else { "main".to_string() };
                    let bucket = tab_entry
                        .sections
                        .entry(section_key)
                        .or_insert_with(|| Section {
                            label: "General".to_string(),
                            fields: Vec::new(),
                        });
                    bucket
                        .fields
                        .extend(fields.into_iter().filter(|field| !field.id.is_empty()));
                }
                Contribution::TabField { tab, field } => {
                    if field.id.is_empty() {
                        continue;
                    }
                    let tab_entry = tabs.entry(tab.clone()).or_insert_with(|| Tab {
                        label: tab.clone(),
                        ..Tab::default()
                    });
                    tab_entry.loose_fields.push(field);
                }
            }
        }

        Schema::from_tabs(tabs)
    }
}
