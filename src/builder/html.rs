use std::fmt;

pub const DEFAULT_INDENT: usize = 2;

/// Can only be produced through [`HtmlBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlElement {
    name: String,
    text: String,
    children: Vec<HtmlElement>,
}

impl HtmlElement {
    fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        HtmlElement {
            name: name.into(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    pub fn builder(root_name: impl Into<String>) -> HtmlBuilder {
        HtmlBuilder::new(root_name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[HtmlElement] {
        &self.children
    }

    /// Renders the tree, indenting each nesting level by `indent_size`
    /// spaces. Text content is HTML-escaped.
    pub fn render(&self, indent_size: usize) -> String {
        let mut out = String::new();
        self.render_into(&mut out, indent_size, 0);
        out
    }

    fn render_into(&self, out: &mut String, indent_size: usize, depth: usize) {
        let pad = " ".repeat(indent_size * depth);
        out.push_str(&format!("{pad}<{}>\n", self.name));
        if !self.text.is_empty() {
            let inner = " ".repeat(indent_size * (depth + 1));
            out.push_str(&format!("{inner}{}\n", html_escape::encode_text(&self.text)));
        }
        for child in &self.children {
            child.render_into(out, indent_size, depth + 1);
        }
        out.push_str(&format!("{pad}</{}>\n", self.name));
    }
}

impl fmt::Display for HtmlElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_INDENT))
    }
}

#[derive(Debug, Clone)]
#[must_use = "builders do nothing unless built"]
pub struct HtmlBuilder {
    root: HtmlElement,
}

impl HtmlBuilder {
    fn new(root_name: impl Into<String>) -> Self {
        HtmlBuilder {
            root: HtmlElement::new(root_name, ""),
        }
    }

    pub fn child(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.root.children.push(HtmlElement::new(name, text));
        self
    }

    /// Attaches an already built element as a child.
    pub fn nest(mut self, element: HtmlElement) -> Self {
        self.root.children.push(element);
        self
    }

    pub fn build(self) -> HtmlElement {
        self.root
    }
}

impl From<HtmlBuilder> for HtmlElement {
    fn from(builder: HtmlBuilder) -> Self {
        builder.build()
    }
}
