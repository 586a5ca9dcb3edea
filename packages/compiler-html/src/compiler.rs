use mailgrid_model::{Column, Component, ComponentKind, Document, Row, Section, Settings, GRID_COLUMNS};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Options for HTML compilation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Contents of the document `<title>`
    pub title: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            title: "Email Preview".to_string(),
        }
    }
}

const STYLESHEET: &[&str] = &[
    "body {",
    "  font-family: Arial, sans-serif;",
    "  margin: 0;",
    "  padding: 20px;",
    "  background-color: #f5f5f5;",
    "}",
    ".email-container {",
    "  max-width: 600px;",
    "  margin: 0 auto;",
    "  background-color: white;",
    "  box-shadow: 0 0 10px rgba(0,0,0,0.1);",
    "  border-radius: 4px;",
    "  overflow: hidden;",
    "}",
    ".section {",
    "  padding: 20px;",
    "  border-bottom: 1px solid #eee;",
    "}",
    ".row {",
    "  display: flex;",
    "  flex-wrap: wrap;",
    "  margin: 0 -10px;",
    "}",
    ".column {",
    "  padding: 0 10px;",
    "  box-sizing: border-box;",
    "}",
    ".component {",
    "  margin-bottom: 15px;",
    "}",
    "img {",
    "  max-width: 100%;",
    "  height: auto;",
    "}",
    "a {",
    "  color: #0066cc;",
    "  text-decoration: none;",
    "}",
    "a:hover {",
    "  text-decoration: underline;",
    "}",
    "button {",
    "  background-color: #0066cc;",
    "  color: white;",
    "  border: none;",
    "  padding: 10px 20px;",
    "  border-radius: 4px;",
    "  cursor: pointer;",
    "}",
    "button:hover {",
    "  background-color: #0052a3;",
    "}",
    "ol, ul {",
    "  margin: 0 0 15px 0;",
    "  padding-left: 20px;",
    "}",
    "h1, h2, h3, h4, h5, h6 {",
    "  margin: 0 0 15px 0;",
    "}",
    "p {",
    "  margin: 0 0 15px 0;",
    "}",
];

struct Context<'a> {
    options: &'a CompileOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a template into a self-contained HTML document
///
/// Never fails: every structurally valid document renders, and components
/// of unrecognized kinds fall back to a plain `<div>`. The output is a pure
/// function of `(document, options)`.
pub fn compile_to_html(document: &Document, options: &CompileOptions) -> String {
    info!(sections = document.sections.len(), "Compiling template to HTML");

    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    compile_head(&mut ctx);

    ctx.add_line("<body>");
    ctx.indent();
    ctx.add_line("<div class=\"email-container\">");
    ctx.indent();

    for section in &document.sections {
        compile_section(section, &mut ctx);
    }

    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

fn compile_head(ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    let title = format!("<title>{}</title>", escape_html(&ctx.options.title));
    ctx.add_line(&title);

    ctx.add_line("<style>");
    ctx.indent();
    for line in STYLESHEET {
        ctx.add_line(line);
    }
    ctx.dedent();
    ctx.add_line("</style>");

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_section(section: &Section, ctx: &mut Context) {
    ctx.add_line("<div class=\"section\">");
    ctx.indent();
    for row in &section.rows {
        compile_row(row, ctx);
    }
    ctx.dedent();
    ctx.add_line("</div>");
}

fn compile_row(row: &Row, ctx: &mut Context) {
    ctx.add_line("<div class=\"row\">");
    ctx.indent();
    for column in &row.columns {
        compile_column(column, ctx);
    }
    ctx.dedent();
    ctx.add_line("</div>");
}

fn compile_column(column: &Column, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<div class=\"column\" style='flex: {};'>",
        flex_factor(column.size)
    ));
    ctx.indent();
    for component in &column.components {
        let markup = compile_component(component);
        ctx.add_line(&markup);
    }
    ctx.dedent();
    ctx.add_line("</div>");
}

/// Column width as a CSS flex factor, printed in shortest round-trip form
/// (`6` → `0.5`, `12` → `1`).
pub fn flex_factor(size: u32) -> f64 {
    f64::from(size) / f64::from(GRID_COLUMNS)
}

/// Render one component as a single line of markup
pub fn compile_component(component: &Component) -> String {
    let style = component_style(&component.settings);
    let content = escape_html(&component.content);

    match &component.kind {
        ComponentKind::Heading | ComponentKind::Header1 => wrap("h1", &style, &content),
        ComponentKind::Header2 => wrap("h2", &style, &content),
        ComponentKind::Header3 => wrap("h3", &style, &content),
        ComponentKind::Paragraph => wrap("p", &style, &content),
        ComponentKind::OrderedList => wrap("ol", &style, &list_items(&component.content)),
        ComponentKind::UnorderedList => wrap("ul", &style, &list_items(&component.content)),
        ComponentKind::Image => {
            let src = escape_html(component.image_url.as_deref().unwrap_or_default());
            let img = format!(
                "<img src=\"{}\" alt=\"Image\" style=\"max-width: 100%; height: auto;\" />",
                src
            );
            wrap("div", &style, &img)
        }
        ComponentKind::Link => {
            let href = match component.link_url.as_deref() {
                Some(url) if !url.is_empty() => escape_html(url),
                _ => "#".to_string(),
            };
            let anchor = format!(
                "<a href=\"{}\" style=\"color: {};\">{}</a>",
                href,
                escape_html(&component.settings.link_color),
                content
            );
            wrap("div", &style, &anchor)
        }
        ComponentKind::Button => {
            let label = if content.is_empty() {
                "Click Me".to_string()
            } else {
                content
            };
            let button = format!(
                "<button style=\"background-color: {}; color: {}; border: none; padding: 10px 20px; border-radius: 4px;\">{}</button>",
                escape_html(&component.settings.button_color),
                escape_html(&component.settings.button_text_color),
                label
            );
            wrap("div", &style, &button)
        }
        ComponentKind::HorizontalRule => format!("<hr class=\"component\" style=\"{}\" />", style),
        ComponentKind::Text
        | ComponentKind::Video
        | ComponentKind::Table
        | ComponentKind::Space
        | ComponentKind::Icon
        | ComponentKind::HtmlBlock
        | ComponentKind::Menu
        | ComponentKind::SocialLink
        | ComponentKind::SocialIcons => wrap("div", &style, &content),
        ComponentKind::Other(name) => {
            debug!(kind = %name, id = %component.id, "Rendering unrecognized component kind as div");
            wrap("div", &style, &content)
        }
    }
}

fn wrap(tag: &str, style: &str, inner: &str) -> String {
    format!("<{tag} class=\"component\" style=\"{style}\">{inner}</{tag}>")
}

fn list_items(content: &str) -> String {
    content
        .split('\n')
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect()
}

/// Inline style attribute value for a component's settings
pub fn component_style(settings: &Settings) -> String {
    let p = &settings.padding;
    let m = &settings.margin;
    let border = if settings.has_border() {
        format!(
            "{}px {} {}",
            settings.border_width,
            escape_html(&settings.border),
            escape_html(&settings.border_color)
        )
    } else {
        "none".to_string()
    };

    format!(
        "padding: {}px {}px {}px {}px; margin: {}px {}px {}px {}px; background-color: {}; text-align: {}; color: {}; font-size: {}; font-weight: {}; border: {}; border-radius: {}px;",
        p.top,
        p.right,
        p.bottom,
        p.left,
        m.top,
        m.right,
        m.bottom,
        m.left,
        escape_html(&settings.background_color),
        escape_html(&settings.text_align),
        escape_html(&settings.text_color),
        escape_html(&settings.font_size),
        escape_html(&settings.font_weight),
        border,
        settings.border_radius,
    )
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
