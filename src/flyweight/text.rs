use std::fmt;

/// Naive formatting: one flag per character.
#[derive(Debug, Clone)]
pub struct FormattedText {
    plain_text: String,
    caps: Vec<bool>,
}

impl FormattedText {
    pub fn new(plain_text: impl Into<String>) -> Self {
        let plain_text = plain_text.into();
        let caps = vec![false; plain_text.chars().count()];
        FormattedText { plain_text, caps }
    }

    /// Capitalises characters `start..=end`, clamped to the text.
    pub fn capitalize(&mut self, start: usize, end: usize) {
        let last = end.min(self.caps.len().saturating_sub(1));
        if start > last {
            return;
        }
        self.caps[start..=last].fill(true);
    }
}

impl fmt::Display for FormattedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self
            .plain_text
            .chars()
            .zip(&self.caps)
            .map(|(c, &upper)| if upper { c.to_ascii_uppercase() } else { c })
            .collect();
        f.write_str(&rendered)
    }
}

/// The flyweight: a small range shared by every character it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
    pub capitalize: bool,
}

impl TextRange {
    pub fn covers(&self, position: usize) -> bool {
        (self.start..=self.end).contains(&position)
    }
}

#[derive(Debug, Clone)]
pub struct BetterFormattedText {
    plain_text: String,
    formatting: Vec<TextRange>,
}

impl BetterFormattedText {
    pub fn new(plain_text: impl Into<String>) -> Self {
        BetterFormattedText {
            plain_text: plain_text.into(),
            formatting: Vec::new(),
        }
    }

    /// Adds a range and hands it back for configuration.
    pub fn range(&mut self, start: usize, end: usize) -> &mut TextRange {
        let index = self.formatting.len();
        self.formatting.push(TextRange {
            start,
            end,
            capitalize: false,
        });
        &mut self.formatting[index]
    }

    pub fn ranges(&self) -> &[TextRange] {
        &self.formatting
    }
}

impl fmt::Display for BetterFormattedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self
            .plain_text
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let upper = self
                    .formatting
                    .iter()
                    .any(|range| range.capitalize && range.covers(i));
                if upper {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect();
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_character_flags() {
        let mut text = FormattedText::new("This is a brave new world.");
        text.capitalize(10, 15);
        assert_eq!(text.to_string(), "This is a BRAVE new world.");
    }

    #[test]
    fn test_capitalize_is_clamped() {
        let mut text = FormattedText::new("short");
        text.capitalize(3, 100);
        assert_eq!(text.to_string(), "shoRT");

        text.capitalize(50, 60);
        assert_eq!(text.to_string(), "shoRT");
    }

    #[test]
    fn test_ranges() {
        let mut text = BetterFormattedText::new("This is a really brave new world.");
        text.range(10, 21).capitalize = true;
        assert_eq!(text.to_string(), "This is a REALLY BRAVE new world.");
    }

    #[test]
    fn test_range_without_capitalize_is_inert() {
        let mut text = BetterFormattedText::new("abc");
        text.range(0, 2);
        assert_eq!(text.to_string(), "abc");
        assert_eq!(text.ranges().len(), 1);
    }
}
