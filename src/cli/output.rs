//! Output formatting utilities

use crate::application::PublicView;
use crate::domain::{PortfolioDraft, TemplateDescriptor, Theme};

/// Format the template gallery
pub fn format_template_list(templates: &[TemplateDescriptor]) -> String {
    if templates.is_empty() {
        return "No templates found".to_string();
    }

    let width = templates.iter().map(|t| t.key.len()).max().unwrap_or(0);
    let mut output = String::new();
    for template in templates {
        output.push_str(&format!(
            "{:<width$}  {}: {}\n",
            template.key,
            template.name,
            template.description,
            width = width
        ));
    }
    output
}

fn format_theme(theme: &Theme) -> String {
    let mut output = String::new();
    for (var, value) in theme {
        output.push_str(&format!("  {}: {}\n", var, value));
    }
    output
}

/// Format one template's form layout and default theme
pub fn format_template(template: &TemplateDescriptor) -> String {
    let mut output = format!(
        "{} ({})\n{}\n\nSections:\n",
        template.name, template.key, template.description
    );

    for section in &template.schema.sections {
        let marker = if section.repeatable { " [repeatable]" } else { "" };
        output.push_str(&format!("  {}: {}{}\n", section.key, section.label, marker));
        for field in &section.fields {
            output.push_str(&format!("    {} ({})\n", field.key, field.field_type.as_str()));
        }
    }

    output.push_str("\nDefault theme:\n");
    output.push_str(&format_theme(&template.default_theme));
    output
}

fn status(draft: &PortfolioDraft) -> String {
    match (&draft.slug, draft.is_published()) {
        (Some(slug), true) => format!("published /p/{}", slug),
        _ => "draft".to_string(),
    }
}

/// Format the draft listing
pub fn format_draft_list(drafts: &[PortfolioDraft]) -> String {
    if drafts.is_empty() {
        return "No drafts found".to_string();
    }

    let mut output = String::new();
    for draft in drafts {
        output.push_str(&format!(
            "{}  {}  {:<8}  {}  [{}]\n",
            draft.id,
            draft.updated_at.format("%d-%m-%Y %H:%M"),
            draft.template_key,
            draft.title,
            status(draft)
        ));
    }
    output
}

fn pretty_data(draft: &PortfolioDraft) -> String {
    serde_json::to_string_pretty(&draft.data).unwrap_or_else(|_| draft.data.to_string())
}

/// Format a single draft with its data
pub fn format_draft(draft: &PortfolioDraft) -> String {
    let mut output = String::new();
    output.push_str(&format!("id:        {}\n", draft.id));
    output.push_str(&format!("title:     {}\n", draft.title));
    output.push_str(&format!("template:  {}\n", draft.template_key));
    output.push_str(&format!("status:    {}\n", status(draft)));
    output.push_str(&format!("created:   {}\n", draft.created_at.to_rfc3339()));
    output.push_str(&format!("updated:   {}\n", draft.updated_at.to_rfc3339()));

    if !draft.theme_overrides.is_empty() {
        output.push_str("theme overrides:\n");
        output.push_str(&format_theme(&draft.theme_overrides));
    }

    output.push_str("data:\n");
    output.push_str(&pretty_data(draft));
    output.push('\n');
    output
}

/// Format a public page as plain text
pub fn format_public_view(view: &PublicView) -> String {
    let template_name = view
        .template
        .map(|t| t.name.as_str())
        .unwrap_or(view.draft.template_key.as_str());

    let mut output = format!("{}\n", view.draft.title);
    output.push_str(&format!("Template: {}\n", template_name));
    if !view.draft.is_published() {
        output.push_str("Preview: this draft is not published\n");
    }
    output.push_str("\nTheme:\n");
    output.push_str(&format_theme(&view.theme));
    output.push_str("\nContent:\n");
    output.push_str(&pretty_data(&view.draft));
    output.push('\n');
    output
}
