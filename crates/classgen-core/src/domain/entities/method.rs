//! Method descriptor and signature parameters.

use crate::domain::entities::doc_block::DocBlock;
use crate::domain::value::ValueSpec;
use crate::domain::value_objects::Visibility;

/// A single signature parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name: String,
    default: Option<ValueSpec>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, value: impl Into<ValueSpec>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_value(&self) -> Option<&ValueSpec> {
        self.default.as_ref()
    }
}

/// A method descriptor: signature, modifiers, and an opaque body.
///
/// The body is free text owned by the caller; the model performs no
/// analysis on it. Rendering (signature line, braces, body indentation)
/// is delegated to the [`MethodRenderer`](crate::application::ports::MethodRenderer)
/// port. An abstract method renders as a terminated signature with no body.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    name: String,
    visibility: Visibility,
    is_static: bool,
    is_abstract: bool,
    is_final: bool,
    parameters: Vec<Parameter>,
    body: String,
    doc_block: Option<DocBlock>,
}

impl MethodSpec {
    /// Create a public method with an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            is_abstract: false,
            is_final: false,
            parameters: Vec::new(),
            body: String::new(),
            doc_block: None,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn make_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark abstract. Abstract and final are mutually exclusive; marking
    /// abstract clears final.
    pub fn make_abstract(mut self) -> Self {
        self.is_abstract = true;
        self.is_final = false;
        self
    }

    /// Mark final, clearing abstract.
    pub fn make_final(mut self) -> Self {
        self.is_final = true;
        self.is_abstract = false;
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_doc_block(mut self, doc_block: DocBlock) -> Self {
        self.doc_block = Some(doc_block);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn doc_block(&self) -> Option<&DocBlock> {
        self.doc_block.as_ref()
    }
}

/// Bare names make empty public methods, mirroring the bare-name form of
/// the mutation API.
impl From<&str> for MethodSpec {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for MethodSpec {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
