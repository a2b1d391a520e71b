//! End-to-end emission tests: model built through the mutation API, emitted
//! through the engine with the PHP renderers, compared byte-for-byte.

use classgen_adapters::php_emitter;
use classgen_core::domain::{
    ClassModel, ClassModifier, DocBlock, Member, MethodSpec, Visibility,
};

#[test]
fn empty_class_emits_braces_separated_by_two_blank_lines() {
    let mut model = ClassModel::new("MyClass").unwrap();
    model.set_extended_class("");

    let expected = "class MyClass\n{\n\n\n}\n";
    assert_eq!(php_emitter().emit(&model), expected);
}

#[test]
fn extends_clause_appears_for_non_empty_parent() {
    let mut model = ClassModel::new("MyClass").unwrap();
    model.set_extended_class("ParentClass");

    let expected = "class MyClass extends ParentClass\n{\n\n\n}\n";
    assert_eq!(php_emitter().emit(&model), expected);
}

#[test]
fn abstract_class_with_members_and_method() {
    let mut model = ClassModel::new("SampleClass").unwrap();
    model
        .set_modifier(ClassModifier::Abstract)
        .set_extended_class("ExtendedClassName")
        .set_implemented_interfaces(["Iterator", "Traversable"]);
    model
        .add_properties(["foo", "bar"])
        .unwrap()
        .add_method("baz")
        .unwrap();

    let expected = "abstract class SampleClass extends ExtendedClassName implements Iterator, Traversable\n\
{\n\
\n\
\x20   public $foo;\n\
\n\
\x20   public $bar;\n\
\n\
\x20   public function baz()\n\
\x20   {\n\
\x20   }\n\
\n\
\n\
}\n";
    assert_eq!(php_emitter().emit(&model), expected);
}

#[test]
fn final_class_emits_final_keyword() {
    let mut model = ClassModel::new("SomeClass").unwrap();
    model.set_modifier(ClassModifier::Final);

    assert_eq!(php_emitter().emit(&model), "final class SomeClass\n{\n\n\n}\n");
}

#[test]
fn namespaced_class_with_imports() {
    let mut model = ClassModel::new("My\\Namespaced\\FunClass").unwrap();
    model.add_use("My\\First\\Use\\Class").unwrap();
    model
        .add_use_with_alias("My\\Second\\Use\\Class", "MyAlias")
        .unwrap();

    let expected = "namespace My\\Namespaced;\n\
\n\
use My\\First\\Use\\Class;\n\
use My\\Second\\Use\\Class as MyAlias;\n\
\n\
class FunClass\n\
{\n\
\n\
\n\
}\n";
    assert_eq!(php_emitter().emit(&model), expected);
}

#[test]
fn docblock_constant_and_commented_method() {
    let mut model = ClassModel::new("Acme\\TestSampleSingleClass").unwrap();
    model.set_doc_block(DocBlock::new("class docblock"));
    model.add_constant("VERSION", "1.0.0").unwrap();
    model
        .add_property(Member::property("state").with_visibility(Visibility::Private))
        .unwrap();
    model
        .add_method(MethodSpec::new("someMethod").with_body("/* test test */"))
        .unwrap();

    let expected = "namespace Acme;\n\
\n\
/**\n\
 * class docblock\n\
 */\n\
class TestSampleSingleClass\n\
{\n\
\n\
\x20   public const VERSION = '1.0.0';\n\
\n\
\x20   private $state;\n\
\n\
\x20   public function someMethod()\n\
\x20   {\n\
\x20       /* test test */\n\
\x20   }\n\
\n\
\n\
}\n";
    assert_eq!(php_emitter().emit(&model), expected);
}

#[test]
fn plain_trait_use_statement() {
    let mut model = ClassModel::new("myClass").unwrap();
    model
        .add_traits(["myTrait", "hisTrait", "thatTrait"])
        .unwrap();

    let expected = "class myClass\n\
{\n\
\n\
\x20   use myTrait, hisTrait, thatTrait;\n\
\n\
\n\
}\n";
    assert_eq!(php_emitter().emit(&model), expected);
}

#[test]
fn trait_block_lists_override_lines_before_alias_lines() {
    let mut model = ClassModel::new("myClass").unwrap();
    model
        .add_traits(["myTrait", "hisTrait", "thatTrait"])
        .unwrap();
    model
        .add_trait_alias("hisTrait::foo", "test", Some(Visibility::Public))
        .unwrap();
    model
        .add_trait_override("myTrait::bar", vec!["hisTrait", "thatTrait"])
        .unwrap();

    let expected = "class myClass\n\
{\n\
\n\
\x20   use myTrait, hisTrait, thatTrait {\n\
\x20       myTrait::bar insteadof hisTrait;\n\
\x20       myTrait::bar insteadof thatTrait;\n\
\x20       hisTrait::foo as public test;\n\
\n\
\x20   }\n\
\n\
\n\
}\n";
    assert_eq!(php_emitter().emit(&model), expected);
}

#[test]
fn emission_is_idempotent_byte_for_byte() {
    let mut model = ClassModel::new("My\\Ns\\Heavy").unwrap();
    model
        .set_modifier(ClassModifier::Final)
        .set_extended_class("Base");
    model.add_use("Other\\Ns\\Thing").unwrap();
    model.add_traits(["aTrait", "bTrait"]).unwrap();
    model.add_trait_override("aTrait::go", "bTrait").unwrap();
    model
        .add_constant("LIMIT", 10i64)
        .unwrap()
        .add_property("cache")
        .unwrap()
        .add_method("go")
        .unwrap();

    let emitter = php_emitter();
    let first = emitter.emit(&model);
    let second = emitter.emit(&model);
    assert_eq!(first, second);
}

#[test]
fn duplicate_interfaces_are_printed_as_stored() {
    let mut model = ClassModel::new("MyClass").unwrap();
    model.set_implemented_interfaces(["Iterator", "Iterator"]);

    let output = php_emitter().emit(&model);
    assert!(output.contains("class MyClass implements Iterator, Iterator"));
}
