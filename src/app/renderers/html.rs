use crate::domain::model::Entity;
use crate::domain::ports::Renderer;
use crate::utils::error::{GeneratorError, Result};

/// Marker a template must contain; replaced by the concatenated fragments.
pub const PLACEHOLDER: &str = "__REPLACE_ANIMALS_INFO__";

const CARD_CLASS: &str = "cards__item";

const DEFAULT_TEMPLATE: &str = r#"<html>
<head>
    <title>My Animal Repository</title>
    <style>
        html {
            background-color: #ffe9e9;
        }

        h1 {
            text-align: center;
            font-size: 40pt;
            font-weight: normal;
        }

        body {
            font-family: 'Roboto','Helvetica Neue', Helvetica, Arial, sans-serif;
            padding: 1rem;
            width: 900px;
            margin-left: auto;
            margin-right: auto;
        }

        .cards {
            list-style: none;
            margin: 0;
            padding: 0;
        }

        .cards__item {
            background-color: white;
            border-radius: 0.25rem;
            box-shadow: 0 20px 40px -14px rgba(0,0,0,0.25);
            font-size: 14pt;
            margin: 50px;
            padding: 1rem;
            line-height: 1.6;
        }
    </style>
</head>
<body>
    <h1>My Animal Repository</h1>
    <ul class="cards">
__REPLACE_ANIMALS_INFO__
    </ul>
</body>
</html>
"#;

#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    template: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a caller-supplied document; it must contain [`PLACEHOLDER`].
    pub fn with_template(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(PLACEHOLDER) {
            return Err(GeneratorError::TemplateError {
                message: format!("template does not contain the {} marker", PLACEHOLDER),
            });
        }
        Ok(Self { template })
    }

    pub fn render_fragment(&self, entity: &Entity) -> String {
        let mut fragment = format!("<li class=\"{}\">\n", CARD_CLASS);
        fragment.push_str(&labelled_line("Name", &entity.name));
        for (label, value) in entity.optional_fields() {
            fragment.push_str(&labelled_line(label, value));
        }
        fragment.push_str("</li>\n");
        fragment
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, entities: &[Entity]) -> String {
        let cards: String = entities.iter().map(|e| self.render_fragment(e)).collect();
        self.template.replace(PLACEHOLDER, &cards)
    }
}

fn labelled_line(label: &str, value: &str) -> String {
    format!("<strong>{}:</strong> {}<br/>\n", label, escape(value))
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders with the built-in template.
pub fn render_html(entities: &[Entity]) -> String {
    HtmlRenderer::new().render(entities)
}
