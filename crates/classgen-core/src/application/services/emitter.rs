//! Class Emitter - the emission engine.
//!
//! A pure, total function from a finished [`ClassModel`] to source text:
//! never mutates its input, never fails, and emits byte-identical output
//! for an unchanged model. Per-member fragments come from the renderer
//! ports; this service owns everything between them — ordering,
//! indentation, blank lines, and the trait-use block syntax.
//!
//! Output is assembled as a flat list of lines joined with `\n` plus a
//! trailing newline, so every blank-line rule lives in exactly one place
//! and golden tests can compare byte-for-byte.

use tracing::{debug, instrument};

use crate::{
    application::ports::{DocBlockRenderer, MemberRenderer, MethodRenderer},
    domain::{ClassModel, TraitComposition},
};

/// One indentation step.
pub const INDENT_UNIT: &str = "    ";

/// Indentation prefix for `level` steps.
pub fn indent(level: usize) -> String {
    INDENT_UNIT.repeat(level)
}

/// Line-assembly buffer: accumulate lines, join once.
#[derive(Debug, Default)]
pub struct SourceBuffer {
    lines: Vec<String>,
}

impl SourceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a single line (no newline characters expected inside).
    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Push a blank line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Push a possibly multi-line fragment, splitting it into lines.
    pub fn text(&mut self, text: &str) {
        self.lines.extend(text.split('\n').map(str::to_string));
    }

    /// Join into the final text: lines separated by `\n`, trailing newline.
    pub fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// The emission engine.
///
/// Holds the renderer ports and sequences their output around the parts it
/// formats itself (namespace, imports, class header, trait-use block,
/// braces).
pub struct ClassEmitter {
    members: Box<dyn MemberRenderer>,
    methods: Box<dyn MethodRenderer>,
    doc_blocks: Box<dyn DocBlockRenderer>,
}

impl ClassEmitter {
    /// Create an emitter with the given renderer adapters.
    pub fn new(
        members: Box<dyn MemberRenderer>,
        methods: Box<dyn MethodRenderer>,
        doc_blocks: Box<dyn DocBlockRenderer>,
    ) -> Self {
        Self {
            members,
            methods,
            doc_blocks,
        }
    }

    /// Emit the complete source text for `model`.
    #[instrument(skip_all, fields(class = %model.name()))]
    pub fn emit(&self, model: &ClassModel) -> String {
        let mut buf = SourceBuffer::new();

        // 1. Namespace declaration
        if let Some(namespace) = model.namespace() {
            buf.line(format!("namespace {namespace};"));
            buf.blank();
        }

        // 2. Imports, insertion order
        if !model.uses().is_empty() {
            for import in model.uses() {
                match import.alias() {
                    Some(alias) => buf.line(format!("use {} as {};", import.name(), alias)),
                    None => buf.line(format!("use {};", import.name())),
                }
            }
            buf.blank();
        }

        // 3. Class docblock, flush against the header
        if let Some(doc_block) = model.doc_block() {
            buf.text(&self.doc_blocks.render(doc_block));
        }

        // 4. Header and opening brace; the blank line after `{` is
        //    unconditional, even for an otherwise empty class.
        buf.line(self.header_line(model));
        buf.line("{");
        buf.blank();

        // 5. Trait-use block
        self.emit_trait_use(model.composition(), &mut buf);

        // 6. Constants, then properties, then methods, each followed by a
        //    blank line.
        for constant in model.constants() {
            buf.text(&self.members.render(constant, 1));
            buf.blank();
        }
        for property in model.properties() {
            buf.text(&self.members.render(property, 1));
            buf.blank();
        }
        for method in model.methods() {
            buf.text(&self.methods.render(method, 1));
            buf.blank();
        }

        // 7. One extra blank line, closing brace, trailing newline.
        buf.blank();
        buf.line("}");

        let output = buf.finish();
        debug!(bytes = output.len(), "class emitted");
        output
    }

    fn header_line(&self, model: &ClassModel) -> String {
        let mut header = format!("{}class {}", model.modifier().keyword(), model.name());
        if let Some(parent) = model.extended_class() {
            header.push_str(" extends ");
            header.push_str(parent);
        }
        if !model.implemented_interfaces().is_empty() {
            header.push_str(" implements ");
            header.push_str(&model.implemented_interfaces().join(", "));
        }
        header
    }

    /// Emit the `use t1, t2;` statement, or the braced conflict-resolution
    /// form when any alias or exclusion exists: insteadof lines first
    /// (grouped by reference, one line per excluded trait), alias lines
    /// after, all in insertion order.
    fn emit_trait_use(&self, composition: &TraitComposition, buf: &mut SourceBuffer) {
        if composition.is_empty() {
            return;
        }

        let step = indent(1);
        let list = composition.traits().join(", ");

        if !composition.has_resolutions() {
            buf.line(format!("{step}use {list};"));
            buf.blank();
            return;
        }

        let inner = indent(2);
        buf.line(format!("{step}use {list} {{"));
        for exclusion in composition.exclusions() {
            for excluded in exclusion.excluded() {
                buf.line(format!(
                    "{inner}{} insteadof {excluded};",
                    exclusion.reference()
                ));
            }
        }
        for alias in composition.aliases() {
            match alias.visibility() {
                Some(visibility) => buf.line(format!(
                    "{inner}{} as {visibility} {};",
                    alias.reference(),
                    alias.alias()
                )),
                None => buf.line(format!("{inner}{} as {};", alias.reference(), alias.alias())),
            }
        }
        buf.blank();
        buf.line(format!("{step}}}"));
        buf.blank();
    }
}
