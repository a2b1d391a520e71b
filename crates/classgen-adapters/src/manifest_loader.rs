//! Filesystem-based class manifest loader.
//!
//! Discovers and parses `*.class.toml` (and `*.class.json`) manifests from
//! a directory tree, converting them into [`ClassDeclaration`] snapshots
//! ready for the [`SnapshotImporter`](crate::importer::SnapshotImporter).
//!
//! # Directory layout expected
//!
//! ```text
//! declarations/
//! ├── mailer.class.toml        ← one class per manifest
//! ├── legacy/
//! │   └── router.class.toml
//! └── exported.class.json      ← a serialized ClassDeclaration
//! ```
//!
//! # `*.class.toml` format
//!
//! ```toml
//! [class]
//! name       = "App\\Service\\Mailer"   # fully qualified
//! modifier   = "final"                  # optional; abstract | final
//! interfaces = ["MailerInterface"]
//!
//! # Optional: the parent declaration, used for the extends clause and for
//! # filtering interfaces the parent already declares.
//! [parent]
//! name       = "App\\Service\\BaseService"
//! interfaces = ["Loggable"]
//!
//! [doc]
//! short = "Sends transactional mail."
//!
//! [[uses]]
//! name  = "Psr\\Log\\LoggerInterface"
//! alias = "Logger"                      # optional
//!
//! [[traits]]
//! name = "LoggerAwareTrait"
//! [[traits.aliases]]
//! method     = "LoggerAwareTrait::setLogger"   # trait::method
//! alias      = "attachLogger"
//! visibility = "protected"              # optional
//! [[traits.insteadof]]
//! method   = "LoggerAwareTrait::log"
//! excluded = ["NoisyTrait"]
//!
//! [[constants]]
//! name  = "VERSION"
//! value = "1.0.0"                       # any TOML value
//!
//! [[properties]]
//! name       = "transport"
//! visibility = "private"
//! declared_by = "App\\Service\\BaseService"   # optional; omitted = here
//!
//! [[methods]]
//! name = "send"
//! body = "return $this->transport->deliver($message);"
//! [[methods.parameters]]
//! name = "message"
//! ```
//!
//! TOML values map onto the literal model: tables become mappings, arrays
//! become sequences. TOML datetimes have no literal counterpart and map to
//! an opaque payload — a datetime constant therefore fails import with the
//! usual invalid-value error instead of slipping through.

use std::{fs, path::Path};

use serde::Deserialize;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use classgen_core::{
    application::{
        declaration::{
            AliasSnapshot, ClassDeclaration, DocBlockSnapshot, DocTagSnapshot, InsteadofSnapshot,
            MemberSnapshot, MethodSnapshot, ParameterSnapshot, TraitSnapshot, UseSnapshot,
        },
        ApplicationError,
    },
    domain::{ClassModifier, MethodReference, ValueSpec, Visibility},
    error::{ClassgenError, ClassgenResult, Context},
};

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of a `*.class.toml` file.
///
/// All fields map 1-to-1 to TOML sections; see the module-level docs for
/// the full format. Free-form strings (visibilities, `trait::method`
/// references, values) are parsed into their domain types during
/// conversion, so a bad keyword fails loading, not emission.
#[derive(Debug, Deserialize, Clone)]
pub struct ClassManifest {
    pub class: ClassSection,
    pub parent: Option<ParentSection>,
    pub doc: Option<DocSection>,
    #[serde(default)]
    pub uses: Vec<UseEntry>,
    #[serde(default)]
    pub traits: Vec<TraitEntry>,
    #[serde(default)]
    pub constants: Vec<MemberEntry>,
    #[serde(default)]
    pub properties: Vec<MemberEntry>,
    #[serde(default)]
    pub methods: Vec<MethodEntry>,
}

/// `[class]` section — identity of the declaration.
#[derive(Debug, Deserialize, Clone)]
pub struct ClassSection {
    /// Fully qualified name, e.g. `"App\\Service\\Mailer"`.
    pub name: String,
    pub modifier: Option<ClassModifier>,
    #[serde(default)]
    pub interfaces: Vec<String>,
}

/// `[parent]` section — the extended class, with the interfaces it already
/// declares.
#[derive(Debug, Deserialize, Clone)]
pub struct ParentSection {
    pub name: String,
    #[serde(default)]
    pub interfaces: Vec<String>,
}

/// `[doc]` section and nested method docs.
#[derive(Debug, Deserialize, Clone)]
pub struct DocSection {
    pub short: Option<String>,
    pub long: Option<String>,
    #[serde(default)]
    pub tags: Vec<TagEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TagEntry {
    pub name: String,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UseEntry {
    pub name: String,
    pub alias: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TraitEntry {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<AliasEntry>,
    #[serde(default)]
    pub insteadof: Vec<InsteadofEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AliasEntry {
    /// `trait::method` reference.
    pub method: String,
    pub alias: String,
    pub visibility: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InsteadofEntry {
    /// `trait::method` reference.
    pub method: String,
    pub excluded: Vec<String>,
}

/// A `[[constants]]` or `[[properties]]` entry.
#[derive(Debug, Deserialize, Clone)]
pub struct MemberEntry {
    pub name: String,
    pub visibility: Option<String>,
    /// `value` for constants, `default` for properties.
    #[serde(alias = "value")]
    pub default: Option<toml::Value>,
    pub declared_by: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MethodEntry {
    pub name: String,
    pub visibility: Option<String>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default, rename = "final")]
    pub is_final: bool,
    #[serde(default)]
    pub parameters: Vec<ParameterEntry>,
    #[serde(default)]
    pub body: String,
    pub doc: Option<DocSection>,
    pub declared_by: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ParameterEntry {
    pub name: String,
    pub default: Option<toml::Value>,
}

// ── Loading ──────────────────────────────────────────────────────────────────

/// Load a single manifest file into a declaration snapshot.
///
/// `.class.toml` files go through [`ClassManifest`]; `.class.json` files
/// deserialize a [`ClassDeclaration`] directly.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_manifest(path: &Path) -> ClassgenResult<ClassDeclaration> {
    let text = fs::read_to_string(path).context(format!(
        "failed to read manifest {}",
        path.display()
    ))?;

    let declaration = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str::<ClassDeclaration>(&text).map_err(|e| {
            ClassgenError::Application(ApplicationError::ManifestError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        })?
    } else {
        let manifest: ClassManifest = toml::from_str(&text).map_err(|e| {
            ClassgenError::Application(ApplicationError::ManifestError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        })?;
        convert_manifest(manifest)?
    };

    debug!(class = %declaration.name, "manifest loaded");
    Ok(declaration)
}

/// Discover and load every `*.class.toml` / `*.class.json` under `dir`.
///
/// Unreadable or invalid manifests are skipped with a warning so one broken
/// file cannot take down a whole declaration tree. Discovery order is
/// path-sorted for determinism.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn load_all(dir: &Path) -> Vec<ClassDeclaration> {
    let mut paths: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| {
                    name.ends_with(".class.toml") || name.ends_with(".class.json")
                })
        })
        .collect();
    paths.sort();

    let mut declarations = Vec::new();
    for path in paths {
        match load_manifest(&path) {
            Ok(declaration) => declarations.push(declaration),
            Err(error) => warn!(path = %path.display(), %error, "skipping manifest"),
        }
    }
    declarations
}

// ── Conversion ───────────────────────────────────────────────────────────────

fn convert_manifest(manifest: ClassManifest) -> ClassgenResult<ClassDeclaration> {
    let parent = manifest.parent.map(|section| {
        Box::new(ClassDeclaration {
            name: section.name,
            modifier: ClassModifier::None,
            parent: None,
            interfaces: section.interfaces,
            uses: Vec::new(),
            traits: Vec::new(),
            constants: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            doc: None,
        })
    });

    let mut traits = Vec::new();
    for entry in manifest.traits {
        traits.push(convert_trait(entry)?);
    }

    let mut constants = Vec::new();
    for entry in manifest.constants {
        constants.push(convert_member(entry)?);
    }

    let mut properties = Vec::new();
    for entry in manifest.properties {
        properties.push(convert_member(entry)?);
    }

    let mut methods = Vec::new();
    for entry in manifest.methods {
        methods.push(convert_method(entry)?);
    }

    Ok(ClassDeclaration {
        name: manifest.class.name,
        modifier: manifest.class.modifier.unwrap_or_default(),
        parent,
        interfaces: manifest.class.interfaces,
        uses: manifest
            .uses
            .into_iter()
            .map(|entry| UseSnapshot {
                name: entry.name,
                alias: entry.alias,
            })
            .collect(),
        traits,
        constants,
        properties,
        methods,
        doc: manifest.doc.map(convert_doc),
    })
}

fn convert_trait(entry: TraitEntry) -> ClassgenResult<TraitSnapshot> {
    let mut aliases = Vec::new();
    for alias in entry.aliases {
        aliases.push(AliasSnapshot {
            reference: parse_reference(&alias.method)?,
            alias: alias.alias,
            visibility: parse_visibility(alias.visibility.as_deref())?,
        });
    }
    let mut insteadof = Vec::new();
    for exclusion in entry.insteadof {
        insteadof.push(InsteadofSnapshot {
            reference: parse_reference(&exclusion.method)?,
            excluded: exclusion.excluded,
        });
    }
    Ok(TraitSnapshot {
        name: entry.name,
        aliases,
        insteadof,
    })
}

fn convert_member(entry: MemberEntry) -> ClassgenResult<MemberSnapshot> {
    Ok(MemberSnapshot {
        name: entry.name,
        visibility: parse_visibility(entry.visibility.as_deref())?.unwrap_or_default(),
        default: entry.default.map(value_from_toml),
        declared_by: entry.declared_by,
    })
}

fn convert_method(entry: MethodEntry) -> ClassgenResult<MethodSnapshot> {
    Ok(MethodSnapshot {
        name: entry.name,
        visibility: parse_visibility(entry.visibility.as_deref())?.unwrap_or_default(),
        is_static: entry.is_static,
        is_abstract: entry.is_abstract,
        is_final: entry.is_final,
        parameters: entry
            .parameters
            .into_iter()
            .map(|parameter| ParameterSnapshot {
                name: parameter.name,
                default: parameter.default.map(value_from_toml),
            })
            .collect(),
        body: entry.body,
        doc: entry.doc.map(convert_doc),
        declared_by: entry.declared_by,
    })
}

fn convert_doc(section: DocSection) -> DocBlockSnapshot {
    DocBlockSnapshot {
        short_description: section.short,
        long_description: section.long,
        tags: section
            .tags
            .into_iter()
            .map(|tag| DocTagSnapshot {
                name: tag.name,
                content: tag.content,
            })
            .collect(),
    }
}

fn parse_reference(reference: &str) -> ClassgenResult<MethodReference> {
    reference
        .parse::<MethodReference>()
        .map_err(ClassgenError::Domain)
}

fn parse_visibility(visibility: Option<&str>) -> ClassgenResult<Option<Visibility>> {
    visibility
        .map(|keyword| keyword.parse::<Visibility>())
        .transpose()
        .map_err(ClassgenError::Domain)
}

/// Map a raw TOML value onto the literal model. Datetimes have no literal
/// counterpart and become opaque payloads.
fn value_from_toml(value: toml::Value) -> ValueSpec {
    match value {
        toml::Value::String(s) => ValueSpec::Str(s),
        toml::Value::Integer(v) => ValueSpec::Int(v),
        toml::Value::Float(v) => ValueSpec::Float(v),
        toml::Value::Boolean(v) => ValueSpec::Bool(v),
        toml::Value::Datetime(dt) => ValueSpec::Opaque(dt.to_string()),
        toml::Value::Array(items) => {
            ValueSpec::Sequence(items.into_iter().map(value_from_toml).collect())
        }
        toml::Value::Table(table) => ValueSpec::Mapping(
            table
                .into_iter()
                .map(|(key, value)| (key, value_from_toml(value)))
                .collect(),
        ),
    }
}
