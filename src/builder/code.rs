use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    class_name: String,
    fields: Vec<(String, String)>,
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "class {}", self.class_name)?;
        writeln!(f, "{{")?;
        for (name, kind) in &self.fields {
            writeln!(f, "  {kind} {name};")?;
        }
        writeln!(f, "}};")
    }
}

#[must_use = "builders do nothing unless built"]
pub struct CodeBuilder {
    code: Code,
}

impl CodeBuilder {
    pub fn new(class_name: impl Into<String>) -> Self {
        CodeBuilder {
            code: Code {
                class_name: class_name.into(),
                fields: Vec::new(),
            },
        }
    }

    pub fn add_field(mut self, name: impl Into<String>, kind: impl Into<String>) -> Self {
        self.code.fields.push((name.into(), kind.into()));
        self
    }

    pub fn build(self) -> Code {
        self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_class() {
        let code = CodeBuilder::new("Person")
            .add_field("name", "string")
            .add_field("age", "int")
            .build();
        assert_eq!(
            code.to_string(),
            "class Person\n{\n  string name;\n  int age;\n};\n"
        );
    }

    #[test]
    fn test_empty_class() {
        let code = CodeBuilder::new("Foo").build();
        assert_eq!(code.to_string(), "class Foo\n{\n};\n");
    }
}
