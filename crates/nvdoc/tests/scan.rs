//! End-to-end scans over temporary PHP projects.

use nvdoc::{Error, Nvdoc, NvdocConfig, TypeKind};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A project mapping `Foo\` to `src/`.
fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "composer.json",
        r#"{
    "name": "acme/foo",
    "autoload": { "psr-4": { "Foo\\": "src/" } }
}"#,
    );
    dir
}

fn open(root: &Path) -> Nvdoc {
    Nvdoc::with_config(root, NvdocConfig::default())
}

#[test]
fn test_resolves_class_under_prefix() {
    let dir = project();
    write(
        dir.path(),
        "src/Bar.php",
        "<?php\nnamespace Foo;\n\nclass Bar\n{\n}\n",
    );

    let nvdoc = open(dir.path());
    let src = dir.path().join("src");
    assert_eq!(nvdoc.find_files(&src).unwrap(), vec!["Foo\\Bar"]);

    let info = nvdoc.files_information(&src).unwrap();
    assert_eq!(info.keys().collect::<Vec<_>>(), vec!["Foo\\Bar"]);
    let bar = &info["Foo\\Bar"];
    assert_eq!(bar.kind, TypeKind::Class);
    assert_eq!(bar.namespace, "Foo");
    assert!(bar.methods.is_empty());
    assert!(bar.properties.is_empty());
    assert!(bar.constants.is_empty());
    assert!(bar.traits.is_empty());
    assert!(bar.interfaces.is_empty());
    assert!(bar.attributes.is_empty());
    assert_eq!(bar.parent, None);
}

#[test]
fn test_nested_directories_and_inheritance() {
    let dir = project();
    write(
        dir.path(),
        "src/Base.php",
        r#"<?php
namespace Foo;

abstract class Base
{
    public function id(): int
    {
        return 1;
    }
}
"#,
    );
    write(
        dir.path(),
        "src/Models/User.php",
        r#"<?php
namespace Foo\Models;

use Foo\Base;

/** A user. */
final class User extends Base
{
    public string $email = '';
}
"#,
    );

    let nvdoc = open(dir.path());
    let src = dir.path().join("src");
    assert_eq!(
        nvdoc.find_files(&src).unwrap(),
        vec!["Foo\\Base", "Foo\\Models\\User"]
    );

    let info = nvdoc.files_information(&src).unwrap();
    let user = &info["Foo\\Models\\User"];
    assert!(user.is_final);
    assert_eq!(user.parent.as_deref(), Some("Foo\\Base"));
    assert_eq!(user.doc_comment.as_deref(), Some("/** A user. */"));
    assert!(user.property("email").is_some());
    let id = user.method("id").unwrap();
    assert_eq!(id.declaring_type, "Foo\\Base");
    assert_eq!(id.return_type.as_deref(), Some("int"));
    assert!(info["Foo\\Base"].is_abstract);
}

#[test]
fn test_unresolvable_files_are_excluded() {
    let dir = project();
    write(dir.path(), "src/helpers.php", "<?php\nfunction helper() {}\n");
    write(
        dir.path(),
        "src/Misnamed.php",
        "<?php\nnamespace Foo;\n\nclass Other {}\n",
    );
    write(dir.path(), "src/README.md", "# not php\n");

    let nvdoc = open(dir.path());
    let src = dir.path().join("src");
    assert!(nvdoc.find_files(&src).unwrap().is_empty());
    assert!(nvdoc.files_information(&src).unwrap().is_empty());
}

#[test]
fn test_metadata_keys_use_declared_casing() {
    let dir = project();
    write(dir.path(), "src/bar.php", "<?php\nnamespace Foo;\n\nclass Bar {}\n");

    let nvdoc = open(dir.path());
    let src = dir.path().join("src");
    assert_eq!(nvdoc.find_files(&src).unwrap(), vec!["Foo\\bar"]);
    let info = nvdoc.files_information(&src).unwrap();
    assert_eq!(info.keys().collect::<Vec<_>>(), vec!["Foo\\Bar"]);
}

#[test]
fn test_missing_manifest_resolves_nothing() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/Bar.php", "<?php\nnamespace Foo;\n\nclass Bar {}\n");

    let nvdoc = open(dir.path());
    assert!(nvdoc.namespaces().is_empty());
    assert!(nvdoc.find_files(&dir.path().join("src")).unwrap().is_empty());
}

#[test]
fn test_empty_directory() {
    let dir = project();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    let nvdoc = open(dir.path());
    assert!(nvdoc.find_files(&dir.path().join("src")).unwrap().is_empty());
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = project();
    let missing = dir.path().join("does-not-exist");
    match open(dir.path()).find_files(&missing) {
        Err(Error::DirectoryNotFound(path)) => assert_eq!(path, missing),
        other => panic!("expected DirectoryNotFound, got {:?}", other),
    }
}

#[test]
fn test_dev_namespaces_from_config() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "composer.json",
        r#"{
    "autoload": { "psr-4": { "Foo\\": "src/" } },
    "autoload-dev": { "psr-4": { "Foo\\Tests\\": "tests/" } }
}"#,
    );
    write(
        dir.path(),
        "tests/BarTest.php",
        "<?php\nnamespace Foo\\Tests;\n\nclass BarTest {}\n",
    );
    let tests = dir.path().join("tests");

    assert!(open(dir.path()).find_files(&tests).unwrap().is_empty());

    let mut config = NvdocConfig::default();
    config.manifest.include_dev = Some(true);
    let nvdoc = Nvdoc::with_config(dir.path(), config);
    assert_eq!(nvdoc.find_files(&tests).unwrap(), vec!["Foo\\Tests\\BarTest"]);
}

#[test]
fn test_version_placeholder_and_reported() {
    let dir = project();
    assert_eq!(open(dir.path()).version(), "0.0.1");

    write(
        dir.path(),
        "composer.json",
        r#"{ "name": "acme/foo", "version": "2.3.0" }"#,
    );
    assert_eq!(open(dir.path()).version(), "2.3.0");
}

#[test]
fn test_conditionally_declared_class_resolves() {
    let dir = project();
    write(dir.path(), "src/Bar.php", "<?php\nnamespace Foo;\n\nclass Bar {}\n");
    write(
        dir.path(),
        "src/Poly.php",
        "<?php\nnamespace Foo;\n\nif (!\\class_exists(Poly::class)) {\n    class Poly {}\n}\n",
    );

    let nvdoc = open(dir.path());
    let src = dir.path().join("src");
    assert_eq!(nvdoc.find_files(&src).unwrap(), vec!["Foo\\Bar", "Foo\\Poly"]);
    let info = nvdoc.files_information(&src).unwrap();
    assert_eq!(info["Foo\\Poly"].kind, TypeKind::Class);
}
