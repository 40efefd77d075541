//! Groovy-style builder: nested constructor calls read like the markup they
//! produce.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub text: String,
    pub children: Vec<Tag>,
    pub attributes: Vec<(String, String)>,
}

impl Tag {
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Tag {
            name: name.into(),
            text: text.into(),
            children: Vec::new(),
            attributes: Vec::new(),
        }
    }

    pub fn with_children(name: impl Into<String>, children: impl IntoIterator<Item = Tag>) -> Self {
        Tag {
            name: name.into(),
            text: String::new(),
            children: children.into_iter().collect(),
            attributes: Vec::new(),
        }
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }
}

pub fn p(text: impl Into<String>) -> Tag {
    Tag::with_text("p", text)
}

pub fn p_with(children: impl IntoIterator<Item = Tag>) -> Tag {
    Tag::with_children("p", children)
}

pub fn img(url: impl Into<String>) -> Tag {
    Tag::with_text("img", "").attribute("src", url)
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (key, value) in &self.attributes {
            write!(f, " {key}=\"{}\"", html_escape::encode_double_quoted_attribute(value))?;
        }

        if self.children.is_empty() && self.text.is_empty() {
            return writeln!(f, "/>");
        }

        writeln!(f, ">")?;
        if !self.text.is_empty() {
            writeln!(f, "{}", html_escape::encode_text(&self.text))?;
        }
        for child in &self.children {
            write!(f, "{child}")?;
        }
        writeln!(f, "</{}>", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_paragraph() {
        assert_eq!(p("This is Pikachu!").to_string(), "<p>\nThis is Pikachu!\n</p>\n");
    }

    #[test]
    fn test_nested_image_is_self_closing() {
        let tag = p_with([img("http://pokemon.com/pikachu.png")]);
        assert_eq!(
            tag.to_string(),
            "<p>\n<img src=\"http://pokemon.com/pikachu.png\"/>\n</p>\n"
        );
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let tag = img("a\"b");
        assert!(tag.to_string().contains("src=\"a&quot;b\""));
    }
}
