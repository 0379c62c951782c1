use serde::{Deserialize, Serialize};

/// One parsed `outline:` block and everything nested under it.
///
/// `name` is never empty for a document produced by the parser; it is the key
/// used when documents from several comments are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    /// Value of the `path:` directive, empty when absent.
    pub path: String,
    pub description: String,
    pub functions: Vec<Function>,
    pub types: Vec<Type>,
}

impl Document {
    /// Create an empty document with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Find a top-level function by the name that starts its signature
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name() == name)
    }

    /// Find a type by name
    pub fn type_named(&self, name: &str) -> Option<&Type> {
        self.types.iter().find(|t| t.name == name)
    }
}

/// A function or method declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    /// The declaration line exactly as written, e.g. `sum(a,b int) int`.
    pub signature: String,
    pub description: String,
    pub params: Vec<Param>,
    pub examples: Vec<Example>,
}

impl Function {
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            ..Self::default()
        }
    }

    /// The part of the signature before the parameter list.
    ///
    /// Signatures are never validated, so this is a best-effort split on the
    /// first `(` or whitespace.
    pub fn name(&self) -> &str {
        let end = self
            .signature
            .find(|c: char| c == '(' || c.is_whitespace())
            .unwrap_or(self.signature.len());
        &self.signature[..end]
    }
}

/// A type declaration with its members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    pub name: String,
    pub description: String,
    pub fields: Vec<Field>,
    pub methods: Vec<Function>,
    pub operators: Vec<Operator>,
    pub examples: Vec<Example>,
}

impl Type {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A field of a type. Any type hint stays embedded in `name` (`hours float`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub description: String,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            description: String::new(),
        }
    }
}

/// An operator expression such as `duration + time = time`, captured verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    pub expression: String,
}

impl Operator {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }
}

/// A reference to an example file, optionally with a human label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub filename: String,
    /// Label following the filename; empty when the line has only a filename.
    pub name: String,
    pub description: String,
}

impl Example {
    pub fn new(filename: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            name: name.into(),
            description: String::new(),
        }
    }
}
