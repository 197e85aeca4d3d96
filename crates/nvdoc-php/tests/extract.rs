//! Declaration extraction against realistic PHP sources.

use nvdoc_facts_core::{TypeKind, Visibility};
use nvdoc_php::parse_php;

const USER_MODEL: &str = r#"<?php

declare(strict_types=1);

namespace App\Models;

use App\Contracts\HasName;
use App\Concerns\Timestamps;
use JsonSerializable;

/**
 * A registered user.
 */
#[Entity(table: 'users')]
final class User extends Model implements HasName, JsonSerializable
{
    use Timestamps;

    public const ROLE = 'user';
    private const SECRET = 42;

    /** @var string */
    protected string $email = '';

    public static int $count = 0;

    public function __construct(
        private readonly int $id,
        string $name = 'anon',
    ) {
    }

    /**
     * Display name.
     */
    public function name(): string
    {
        return 'x';
    }

    public static function find(int ...$ids): ?self
    {
        return null;
    }

    private function touch(array &$changes) {}
}
"#;

#[test]
fn test_class_header() {
    let types = parse_php(USER_MODEL, None).unwrap();
    assert_eq!(types.len(), 1);
    let user = &types[0];

    assert_eq!(user.name, "App\\Models\\User");
    assert_eq!(user.namespace, "App\\Models");
    assert_eq!(user.kind, TypeKind::Class);
    assert!(user.is_final);
    assert!(!user.is_abstract);
    assert_eq!(user.parent.as_deref(), Some("App\\Models\\Model"));
    assert_eq!(
        user.interfaces,
        vec![
            "App\\Contracts\\HasName".to_string(),
            "JsonSerializable".to_string()
        ]
    );
    assert_eq!(user.traits, vec!["App\\Concerns\\Timestamps".to_string()]);
    assert_eq!(
        user.doc_comment.as_deref(),
        Some("/**\n * A registered user.\n */")
    );
    assert_eq!(
        user.attributes,
        vec!["App\\Models\\Entity(table: 'users')".to_string()]
    );
}

#[test]
fn test_constants() {
    let types = parse_php(USER_MODEL, None).unwrap();
    let user = &types[0];

    let role = user.constant("ROLE").unwrap();
    assert_eq!(role.value.as_deref(), Some("'user'"));
    assert_eq!(role.visibility, Visibility::Public);
    assert!(!role.is_enum_case);

    let secret = user.constant("SECRET").unwrap();
    assert_eq!(secret.value.as_deref(), Some("42"));
    assert_eq!(secret.visibility, Visibility::Private);
}

#[test]
fn test_properties() {
    let types = parse_php(USER_MODEL, None).unwrap();
    let user = &types[0];

    let email = user.property("email").unwrap();
    assert_eq!(email.visibility, Visibility::Protected);
    assert_eq!(email.type_hint.as_deref(), Some("string"));
    assert_eq!(email.default_value.as_deref(), Some("''"));
    assert_eq!(email.doc_comment.as_deref(), Some("/** @var string */"));
    assert!(!email.is_static);

    let count = user.property("count").unwrap();
    assert!(count.is_static);
    assert_eq!(count.default_value.as_deref(), Some("0"));

    // constructor promotion
    let id = user.property("id").unwrap();
    assert_eq!(id.visibility, Visibility::Private);
    assert!(id.is_readonly);
    assert_eq!(id.type_hint.as_deref(), Some("int"));
    assert!(user.property("name").is_none());
}

#[test]
fn test_methods() {
    let types = parse_php(USER_MODEL, None).unwrap();
    let user = &types[0];

    let names: Vec<_> = user.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["__construct", "name", "find", "touch"]);

    let ctor = user.method("__construct").unwrap();
    assert_eq!(ctor.parameters.len(), 2);
    assert!(ctor.parameters[0].is_promoted);
    assert_eq!(ctor.parameters[1].name, "name");
    assert_eq!(ctor.parameters[1].default_value.as_deref(), Some("'anon'"));
    assert!(!ctor.parameters[1].is_required());

    let name = user.method("name").unwrap();
    assert_eq!(name.return_type.as_deref(), Some("string"));
    assert_eq!(
        name.doc_comment.as_deref(),
        Some("/**\n     * Display name.\n     */")
    );
    assert_eq!(name.declaring_type, "App\\Models\\User");

    let find = user.method("find").unwrap();
    assert!(find.is_static);
    assert_eq!(find.return_type.as_deref(), Some("?self"));
    assert!(find.parameters[0].is_variadic);
    assert_eq!(find.parameters[0].name, "ids");

    let touch = user.method("touch").unwrap();
    assert_eq!(touch.visibility, Visibility::Private);
    assert!(touch.parameters[0].is_reference);
    assert_eq!(touch.parameters[0].name, "changes");
    assert!(touch.return_type.is_none());
    assert!(touch.doc_comment.is_none());
}

#[test]
fn test_interface_trait_and_enum() {
    let source = r#"<?php
namespace App\Contracts;

interface HasLabel extends \Stringable, Countable
{
    public function label(): string;
}

trait Labelled
{
    public function label(): string { return ''; }
}

enum Suit: string implements HasLabel
{
    use Labelled;

    case Hearts = 'H';
    case Spades = 'S';

    const Wild = self::Spades;
}

enum Status
{
    case Active;
}
"#;
    let types = parse_php(source, None).unwrap();
    let kinds: Vec<_> = types.iter().map(|t| (t.name.as_str(), t.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            ("App\\Contracts\\HasLabel", TypeKind::Interface),
            ("App\\Contracts\\Labelled", TypeKind::Trait),
            ("App\\Contracts\\Suit", TypeKind::Enum),
            ("App\\Contracts\\Status", TypeKind::Enum),
        ]
    );

    let has_label = &types[0];
    assert_eq!(
        has_label.interfaces,
        vec!["Stringable".to_string(), "App\\Contracts\\Countable".to_string()]
    );
    assert!(has_label.method("label").unwrap().is_abstract);
    assert!(has_label.parent.is_none());

    let suit = &types[2];
    assert_eq!(
        suit.interfaces,
        vec![
            "App\\Contracts\\HasLabel".to_string(),
            "UnitEnum".to_string(),
            "BackedEnum".to_string()
        ]
    );
    assert_eq!(suit.traits, vec!["App\\Contracts\\Labelled".to_string()]);
    let hearts = suit.constant("Hearts").unwrap();
    assert!(hearts.is_enum_case);
    assert_eq!(hearts.value.as_deref(), Some("'H'"));
    assert_eq!(
        suit.constant("Wild").unwrap().value.as_deref(),
        Some("self::Spades")
    );

    let status = &types[3];
    assert_eq!(status.interfaces, vec!["UnitEnum".to_string()]);
    assert!(status.constant("Active").unwrap().value.is_none());
}

#[test]
fn test_bracketed_namespaces_scope_imports() {
    let source = r#"<?php
namespace First {
    class A {}
}

namespace Second {
    use First\A;
    use First\A as Alias;

    class B extends A {}
    class C extends Alias {}
}
"#;
    let types = parse_php(source, None).unwrap();
    let names: Vec<_> = types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["First\\A", "Second\\B", "Second\\C"]);
    assert_eq!(types[1].parent.as_deref(), Some("First\\A"));
    assert_eq!(types[2].parent.as_deref(), Some("First\\A"));
}

#[test]
fn test_imports_reset_between_unbracketed_namespaces() {
    let source = r#"<?php
namespace One;
use Vendor\Base;
class X extends Base {}

namespace Two;
class Y extends Base {}
"#;
    let types = parse_php(source, None).unwrap();
    assert_eq!(types[0].parent.as_deref(), Some("Vendor\\Base"));
    assert_eq!(types[1].name, "Two\\Y");
    assert_eq!(types[1].parent.as_deref(), Some("Two\\Base"));
}

#[test]
fn test_global_namespace_and_abstract() {
    let source = "<?php\nabstract class Shape\n{\n    abstract protected function area(): float;\n}\n";
    let types = parse_php(source, None).unwrap();
    let shape = &types[0];
    assert_eq!(shape.name, "Shape");
    assert_eq!(shape.namespace, "");
    assert!(shape.is_abstract);
    let area = shape.method("area").unwrap();
    assert!(area.is_abstract);
    assert_eq!(area.visibility, Visibility::Protected);
}

#[test]
fn test_file_without_declarations() {
    let types = parse_php("<?php\n\nfunction helper() {}\n\necho 'hi';\n", None).unwrap();
    assert!(types.is_empty());
    assert!(parse_php("plain text, no php tag", None).unwrap().is_empty());
}

#[test]
fn test_conditional_declarations() {
    let source = r#"<?php
namespace Foo;

use Foo\Contracts\Shim;

if (!\class_exists(Poly::class)) {
    /** Fallback for older runtimes. */
    class Poly implements Shim {}
} elseif (\PHP_VERSION_ID < 80000) {
    interface Legacy {}
} else {
    trait Modern {}
}

if (\PHP_VERSION_ID >= 80100):
    enum Level: int
    {
        case Low = 1;
    }
endif;

function factory()
{
    class Hidden {}
}
"#;
    let types = parse_php(source, None).unwrap();
    let names: Vec<_> = types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Foo\\Poly", "Foo\\Legacy", "Foo\\Modern", "Foo\\Level"]);

    let poly = &types[0];
    assert_eq!(poly.interfaces, vec!["Foo\\Contracts\\Shim"]);
    assert_eq!(poly.doc_comment.as_deref(), Some("/** Fallback for older runtimes. */"));
    assert_eq!(types[1].kind, TypeKind::Interface);
    assert_eq!(types[2].kind, TypeKind::Trait);
    assert_eq!(types[3].kind, TypeKind::Enum);
}
