//! Form rendering layer

pub mod fields;
pub mod html;

pub use fields::{FieldRenderer, RendererRegistry};

use crate::contract::{Schema, SettingsError, SettingsRecord};
use self::html::esc_html;

/// Renders one section of the settings form from the frozen schema and the
/// current record.
pub struct FormRenderer {
    registry: RendererRegistry,
}

impl FormRenderer {
    pub fn new(registry: RendererRegistry) -> Self {
        Self { registry }
    }

    /// Render a section as a form table. Unknown tab/section is an error;
    /// unknown field kinds degrade to the missing-renderer placeholder.
    pub fn section(
        &self,
        schema: &Schema,
        record: &SettingsRecord,
        tab: &str,
        section: &str,
    ) -> Result<String, SettingsError> {
        let tab_decl = schema.tab(tab).ok_or_else(|| SettingsError::NotFound {
            resource: "tab".to_string(),
            id: tab.to_string(),
        })?;
        let section_decl =
            tab_decl
                .sections
                .get(section)
                .ok_or_else(|| SettingsError::NotFound {
                    resource: "section".to_string(),
                    id: format!("{tab}/{section}"),
                })?;

        let mut html = String::from("<table class=\"form-table\">\n");
        for field in &section_decl.fields {
            let value = record.get(&field.id);
            let control = self.registry.render(field, value);
            html.push_str(&format!(
                "<tr><th scope=\"row\">{}</th><td>{}</td></tr>\n",
                esc_html(&field.name),
                control,
            ));
        }
        html.push_str("</table>\n");

        Ok(html)
    }
}

impl Default for FormRenderer {
    fn default() -> Self {
        Self::new(RendererRegistry::with_defaults())
    }
}
