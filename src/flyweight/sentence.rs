use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordToken {
    word: String,
    pub capitalize: bool,
}

impl WordToken {
    fn render(&self) -> String {
        if self.capitalize {
            self.word.to_uppercase()
        } else {
            self.word.clone()
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sentence {
    words: Vec<WordToken>,
}

impl Sentence {
    pub fn new(text: &str) -> Self {
        let words = text
            .split_whitespace()
            .map(|word| WordToken {
                word: word.to_string(),
                capitalize: false,
            })
            .collect();
        Sentence { words }
    }

    pub fn word_mut(&mut self, index: usize) -> Option<&mut WordToken> {
        self.words.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn render(&self) -> String {
        self.words.iter().map(WordToken::render).join(" ")
    }
}
