//! Domain layer - Portfolio models and pure transforms

pub mod draft;
pub mod prefill;
pub mod slug;
pub mod template;

pub use draft::{set_data_path, DraftPatch, NewDraft, PortfolioDraft};
pub use slug::{publish_slug, slugify};
pub use template::{
    get_template, list_templates, resolve_theme, FieldType, SchemaField, SchemaSection,
    TemplateDescriptor, TemplateSchema, Theme,
};
