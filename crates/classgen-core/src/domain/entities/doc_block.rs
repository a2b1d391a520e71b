//! Documentation block descriptor.

/// A single `@name content` annotation line.
#[derive(Debug, Clone, PartialEq)]
pub struct DocTag {
    name: String,
    content: Option<String>,
}

impl DocTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

/// A documentation comment block attached to a class or method.
///
/// The block is structured data only; turning it into comment text is the
/// [`DocBlockRenderer`](crate::application::ports::DocBlockRenderer) port's job.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocBlock {
    short_description: Option<String>,
    long_description: Option<String>,
    tags: Vec<DocTag>,
}

impl DocBlock {
    pub fn new(short_description: impl Into<String>) -> Self {
        Self {
            short_description: Some(short_description.into()),
            long_description: None,
            tags: Vec::new(),
        }
    }

    pub fn with_long_description(mut self, long_description: impl Into<String>) -> Self {
        self.long_description = Some(long_description.into());
        self
    }

    /// Append a tag (maintains insertion order).
    pub fn tag(mut self, tag: DocTag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn short_description(&self) -> Option<&str> {
        self.short_description.as_deref()
    }

    pub fn long_description(&self) -> Option<&str> {
        self.long_description.as_deref()
    }

    pub fn tags(&self) -> &[DocTag] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.short_description.is_none() && self.long_description.is_none() && self.tags.is_empty()
    }
}
