//! Declaration importer: turns reflection snapshots into class models.

use tracing::{debug, instrument};

use classgen_core::{
    application::{
        declaration::{ClassDeclaration, DocBlockSnapshot},
        ports::ClassImporter,
    },
    domain::{
        ClassModel, DocBlock, DocTag, DomainValidator, Member, MethodSpec, Parameter, TraitUsage,
        ValueSpec,
    },
    error::{ClassgenError, ClassgenResult},
};

/// Default implementation of the import collaborator.
///
/// Every field of the snapshot is funneled through the model's mutation
/// API, so an inconsistent snapshot (duplicate members, dangling trait
/// references, non-literal constant values) fails with the same domain
/// errors a caller would hit building the model by hand.
pub struct SnapshotImporter;

impl SnapshotImporter {
    pub fn new() -> Self {
        Self
    }

    fn populate(
        &self,
        declaration: &ClassDeclaration,
        include_inherited: bool,
    ) -> ClassgenResult<ClassModel> {
        let mut model = ClassModel::new(&declaration.name).map_err(ClassgenError::Domain)?;
        model.set_modifier(declaration.modifier);

        if let Some(parent) = &declaration.parent {
            model.set_extended_class(&parent.name);
        }

        // Interfaces inherited from the parent chain are dropped unless the
        // caller asked for them.
        let inherited = declaration.inherited_interfaces();
        for interface in &declaration.interfaces {
            if include_inherited || !inherited.contains(&interface.as_str()) {
                model.add_interface(interface);
            }
        }

        for import in &declaration.uses {
            match &import.alias {
                Some(alias) => model.add_use_with_alias(&import.name, alias)?,
                None => model.add_use(&import.name)?,
            };
        }

        for snapshot in &declaration.traits {
            let mut usage = TraitUsage::new(&snapshot.name);
            for alias in &snapshot.aliases {
                usage = usage.alias(alias.reference.clone(), &alias.alias, alias.visibility);
            }
            for insteadof in &snapshot.insteadof {
                usage = usage.exclude(insteadof.reference.clone(), insteadof.excluded.clone());
            }
            model.add_trait_usage(usage)?;
        }

        for constant in &declaration.constants {
            if !include_inherited && !declaration.declares(constant.declared_by.as_deref()) {
                continue;
            }
            let value = constant.default.clone().unwrap_or(ValueSpec::Null);
            model.add_property(
                Member::constant(&constant.name, value).with_visibility(constant.visibility),
            )?;
        }

        for property in &declaration.properties {
            if !include_inherited && !declaration.declares(property.declared_by.as_deref()) {
                continue;
            }
            let mut member = Member::property(&property.name).with_visibility(property.visibility);
            if let Some(default) = &property.default {
                member = member.with_default(default.clone());
            }
            model.add_property(member)?;
        }

        for method in &declaration.methods {
            if !include_inherited && !declaration.declares(method.declared_by.as_deref()) {
                continue;
            }
            let mut spec = MethodSpec::new(&method.name)
                .with_visibility(method.visibility)
                .with_body(&method.body);
            if method.is_static {
                spec = spec.make_static();
            }
            if method.is_abstract {
                spec = spec.make_abstract();
            }
            if method.is_final {
                spec = spec.make_final();
            }
            for parameter in &method.parameters {
                let mut param = Parameter::new(&parameter.name);
                if let Some(default) = &parameter.default {
                    param = param.with_default(default.clone());
                }
                spec = spec.with_parameter(param);
            }
            if let Some(doc) = &method.doc {
                spec = spec.with_doc_block(convert_doc_block(doc));
            }
            model.add_method(spec)?;
        }

        if let Some(doc) = &declaration.doc {
            model.set_doc_block(convert_doc_block(doc));
        }

        DomainValidator::validate_model(&model).map_err(ClassgenError::Domain)?;
        debug!(
            constants = model.constants().count(),
            properties = model.properties().count(),
            methods = model.methods().len(),
            "declaration imported"
        );
        Ok(model)
    }
}

impl Default for SnapshotImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassImporter for SnapshotImporter {
    #[instrument(skip_all, fields(declaration = %declaration.name))]
    fn populate_from_existing(
        &self,
        declaration: &ClassDeclaration,
    ) -> ClassgenResult<ClassModel> {
        self.populate(declaration, false)
    }

    #[instrument(skip_all, fields(declaration = %declaration.name))]
    fn populate_with_inherited(
        &self,
        declaration: &ClassDeclaration,
    ) -> ClassgenResult<ClassModel> {
        self.populate(declaration, true)
    }
}

fn convert_doc_block(snapshot: &DocBlockSnapshot) -> DocBlock {
    let mut doc_block = match &snapshot.short_description {
        Some(short) => DocBlock::new(short),
        None => DocBlock::default(),
    };
    if let Some(long) = &snapshot.long_description {
        doc_block = doc_block.with_long_description(long);
    }
    for tag in &snapshot.tags {
        let mut doc_tag = DocTag::new(&tag.name);
        if let Some(content) = &tag.content {
            doc_tag = doc_tag.with_content(content);
        }
        doc_block = doc_block.tag(doc_tag);
    }
    doc_block
}
