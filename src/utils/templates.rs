use anyhow::{Context as _, Result};
use rust_embed::RustEmbed;
use tera::{Context, Tera};

#[derive(RustEmbed)]
#[folder = "src/assets/templates/"]
struct Templates;

/// Raw source of an embedded template.
pub fn get_template_source(template_name: &str) -> Result<String> {
    let file = Templates::get(template_name)
        .ok_or_else(|| anyhow::anyhow!("Failed to find template: {}", template_name))?;

    let source = std::str::from_utf8(file.data.as_ref())
        .context("Failed to parse template as UTF-8")?
        .to_string();
    Ok(source)
}

/// Renders an embedded plain-text template without HTML escaping.
pub fn render_template(template_name: &str, context: &Context) -> Result<String> {
    let source = get_template_source(template_name)?;
    Tera::one_off(&source, context, false)
        .context(format!("Failed to render template {}", template_name))
}
