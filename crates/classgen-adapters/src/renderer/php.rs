//! PHP renderers for members, methods, and docblocks.
//!
//! These adapters produce the per-member text fragments the emission engine
//! sequences. Fragments are returned without a trailing newline, every line
//! pre-indented at the requested level, per the port contract.

use classgen_core::{
    application::ports::{DocBlockRenderer, MemberRenderer, MethodRenderer},
    application::services::emitter::indent,
    domain::{DocBlock, Member, MethodSpec, ValueSpec},
};

/// Serializes a literal (or opaque) value to PHP source.
///
/// Strings are single-quoted, sequences render as `[a, b]`, mappings as
/// `['k' => v]`, null as the `null` keyword. Opaque payloads are emitted
/// verbatim — the model guarantees they never reach a constant.
pub fn render_value(value: &ValueSpec) -> String {
    match value {
        ValueSpec::Null => "null".to_string(),
        ValueSpec::Bool(true) => "true".to_string(),
        ValueSpec::Bool(false) => "false".to_string(),
        ValueSpec::Int(v) => v.to_string(),
        ValueSpec::Float(v) => render_float(*v),
        ValueSpec::Str(s) => quote(s),
        ValueSpec::Sequence(items) => {
            let rendered: Vec<String> = items.iter().map(render_value).collect();
            format!("[{}]", rendered.join(", "))
        }
        ValueSpec::Mapping(pairs) => {
            let rendered: Vec<String> = pairs
                .iter()
                .map(|(key, value)| format!("{} => {}", quote(key), render_value(value)))
                .collect();
            format!("[{}]", rendered.join(", "))
        }
        ValueSpec::Opaque(expression) => expression.clone(),
    }
}

fn render_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        // Keep the decimal point so the literal stays a float.
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn quote(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}

// ── Members ──────────────────────────────────────────────────────────────────

/// Renders constants and properties as PHP member declarations.
pub struct PhpMemberRenderer;

impl PhpMemberRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PhpMemberRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberRenderer for PhpMemberRenderer {
    fn render(&self, member: &Member, indent_level: usize) -> String {
        let step = indent(indent_level);
        let visibility = member.visibility();

        let mut line = if member.is_constant() {
            format!("{step}{visibility} const {}", member.name())
        } else {
            format!("{step}{visibility} ${}", member.name())
        };
        if let Some(value) = member.default_value() {
            line.push_str(" = ");
            line.push_str(&render_value(value));
        }
        line.push(';');
        line
    }
}

// ── Methods ──────────────────────────────────────────────────────────────────

/// Renders methods: optional docblock, signature, and body block.
pub struct PhpMethodRenderer {
    doc_blocks: PhpDocBlockRenderer,
}

impl PhpMethodRenderer {
    pub fn new() -> Self {
        Self {
            doc_blocks: PhpDocBlockRenderer::new(),
        }
    }

    fn signature(method: &MethodSpec) -> String {
        let mut signature = String::new();
        if method.is_abstract() {
            signature.push_str("abstract ");
        } else if method.is_final() {
            signature.push_str("final ");
        }
        signature.push_str(method.visibility().as_str());
        if method.is_static() {
            signature.push_str(" static");
        }
        signature.push_str(" function ");
        signature.push_str(method.name());
        signature.push('(');
        let parameters: Vec<String> = method
            .parameters()
            .iter()
            .map(|parameter| match parameter.default_value() {
                Some(value) => format!("${} = {}", parameter.name(), render_value(value)),
                None => format!("${}", parameter.name()),
            })
            .collect();
        signature.push_str(&parameters.join(", "));
        signature.push(')');
        signature
    }
}

impl Default for PhpMethodRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MethodRenderer for PhpMethodRenderer {
    fn render(&self, method: &MethodSpec, indent_level: usize) -> String {
        let step = indent(indent_level);
        let mut lines: Vec<String> = Vec::new();

        if let Some(doc_block) = method.doc_block() {
            lines.extend(
                self.doc_blocks
                    .render_at(doc_block, indent_level)
                    .split('\n')
                    .map(str::to_string),
            );
        }

        let signature = Self::signature(method);
        if method.is_abstract() {
            lines.push(format!("{step}{signature};"));
            return lines.join("\n");
        }

        lines.push(format!("{step}{signature}"));
        lines.push(format!("{step}{{"));
        let body_step = indent(indent_level + 1);
        for body_line in method.body().lines() {
            if body_line.is_empty() {
                lines.push(String::new());
            } else {
                lines.push(format!("{body_step}{body_line}"));
            }
        }
        lines.push(format!("{step}}}"));
        lines.join("\n")
    }
}

// ── DocBlocks ────────────────────────────────────────────────────────────────

/// Renders documentation comment blocks.
pub struct PhpDocBlockRenderer;

impl PhpDocBlockRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render at an explicit indent level (methods nest their docblocks).
    pub fn render_at(&self, doc_block: &DocBlock, indent_level: usize) -> String {
        let step = indent(indent_level);
        let mut lines: Vec<String> = vec![format!("{step}/**")];
        let mut separated = false;

        if let Some(short) = doc_block.short_description() {
            lines.push(format!("{step} * {short}"));
            separated = true;
        }
        if let Some(long) = doc_block.long_description() {
            if separated {
                lines.push(format!("{step} *"));
            }
            for long_line in long.lines() {
                lines.push(format!("{step} * {long_line}"));
            }
            separated = true;
        }
        if !doc_block.tags().is_empty() {
            if separated {
                lines.push(format!("{step} *"));
            }
            for tag in doc_block.tags() {
                match tag.content() {
                    Some(content) => lines.push(format!("{step} * @{} {content}", tag.name())),
                    None => lines.push(format!("{step} * @{}", tag.name())),
                }
            }
        }

        lines.push(format!("{step} */"));
        lines.join("\n")
    }
}

impl Default for PhpDocBlockRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocBlockRenderer for PhpDocBlockRenderer {
    fn render(&self, doc_block: &DocBlock) -> String {
        self.render_at(doc_block, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classgen_core::domain::{DocTag, Parameter, Visibility};

    #[test]
    fn value_rendering_covers_every_literal_kind() {
        assert_eq!(render_value(&ValueSpec::Null), "null");
        assert_eq!(render_value(&ValueSpec::Bool(true)), "true");
        assert_eq!(render_value(&ValueSpec::Int(123)), "123");
        assert_eq!(render_value(&ValueSpec::Float(123.456)), "123.456");
        assert_eq!(render_value(&ValueSpec::Float(1.0)), "1.0");
        assert_eq!(render_value(&ValueSpec::from("it's")), "'it\\'s'");
        assert_eq!(
            render_value(&ValueSpec::sequence(["v1", "v2"])),
            "['v1', 'v2']"
        );
        assert_eq!(
            render_value(&ValueSpec::mapping([(
                "v1",
                ValueSpec::mapping([("v2", "v3")])
            )])),
            "['v1' => ['v2' => 'v3']]"
        );
    }

    #[test]
    fn constant_renders_with_const_qualifier() {
        let member = Member::constant("fooProperty", "duplicate");
        let rendered = PhpMemberRenderer::new().render(&member, 1);
        assert_eq!(rendered, "    public const fooProperty = 'duplicate';");
    }

    #[test]
    fn property_without_default_omits_the_assignment() {
        let member = Member::property("bare");
        let rendered = PhpMemberRenderer::new().render(&member, 1);
        assert_eq!(rendered, "    public $bare;");
    }

    #[test]
    fn property_with_explicit_null_keeps_the_assignment() {
        let member = Member::property("foo").with_default(ValueSpec::Null);
        let rendered = PhpMemberRenderer::new().render(&member, 1);
        assert_eq!(rendered, "    public $foo = null;");
    }

    #[test]
    fn private_property_renders_its_visibility() {
        let member = Member::property("secret").with_visibility(Visibility::Private);
        let rendered = PhpMemberRenderer::new().render(&member, 1);
        assert_eq!(rendered, "    private $secret;");
    }

    #[test]
    fn empty_method_renders_signature_and_empty_braces() {
        let method = MethodSpec::new("baz");
        let rendered = PhpMethodRenderer::new().render(&method, 1);
        assert_eq!(rendered, "    public function baz()\n    {\n    }");
    }

    #[test]
    fn method_body_is_indented_one_extra_level() {
        let method = MethodSpec::new("run").with_body("return true;");
        let rendered = PhpMethodRenderer::new().render(&method, 1);
        assert_eq!(
            rendered,
            "    public function run()\n    {\n        return true;\n    }"
        );
    }

    #[test]
    fn abstract_method_renders_as_terminated_signature() {
        let method = MethodSpec::new("handle").make_abstract();
        let rendered = PhpMethodRenderer::new().render(&method, 1);
        assert_eq!(rendered, "    abstract public function handle();");
    }

    #[test]
    fn final_static_method_orders_its_qualifiers() {
        let method = MethodSpec::new("create").make_final().make_static();
        let rendered = PhpMethodRenderer::new().render(&method, 1);
        assert_eq!(
            rendered,
            "    final public static function create()\n    {\n    }"
        );
    }

    #[test]
    fn parameters_render_with_defaults() {
        let method = MethodSpec::new("send")
            .with_parameter(Parameter::new("message"))
            .with_parameter(Parameter::new("retries").with_default(3i64));
        let rendered = PhpMethodRenderer::new().render(&method, 1);
        assert!(rendered.contains("function send($message, $retries = 3)"));
    }

    #[test]
    fn doc_block_renders_sections_in_order() {
        let doc_block = DocBlock::new("Enter description here...")
            .tag(DocTag::new("return").with_content("bool"));
        let rendered = PhpDocBlockRenderer::new().render(&doc_block);
        assert_eq!(
            rendered,
            "/**\n * Enter description here...\n *\n * @return bool\n */"
        );
    }

    #[test]
    fn method_doc_block_is_indented_with_the_method() {
        let method = MethodSpec::new("someMethod")
            .with_doc_block(DocBlock::new("Does something."));
        let rendered = PhpMethodRenderer::new().render(&method, 1);
        assert!(rendered.starts_with("    /**\n     * Does something.\n     */\n    public function"));
    }
}
