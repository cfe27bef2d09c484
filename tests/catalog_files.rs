//! Integration tests for loading catalogs from TOML files

use mailblocks::{render, Catalog, CatalogError, TemplateDocument};

#[test]
fn test_builtin_source_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, mailblocks::catalog::BUILTIN_CATALOG).unwrap();

    let catalog = Catalog::from_file(&path).expect("Should load");
    let ids: Vec<&str> = catalog.ids().collect();
    assert_eq!(ids, vec!["text", "button", "divider", "image"]);
}

#[test]
fn test_custom_catalog_renders() {
    let source = r##"
[[components]]
id = "heading"
name = "Heading"
template = '<h1 style="color: {{color}}">{{title}}</h1>'

[components.defaults]
color = "#0f172a"

[[components.settings]]
key = "title"
label = "Title"
type = "text"
default = "Hello & welcome"

[[components.settings]]
key = "color"
label = "Color"
type = "color"
"##;
    let catalog: Catalog = source.parse().expect("Should parse");
    let doc = TemplateDocument::new("d", "Custom")
        .with_instance(catalog.get("heading").unwrap(), "h")
        .unwrap();

    let output = render(&doc, &catalog);
    assert!(output
        .html
        .contains(r#"<h1 style="color: #0f172a">Hello &amp; welcome</h1>"#));
    assert!(output.warnings.is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Catalog::from_file(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(CatalogError::Io(_))));
}

#[test]
fn test_duplicate_ids_in_file_rejected() {
    let source = r#"
[[components]]
id = "a"
template = ""

[[components]]
id = "a"
template = ""
"#;
    let err = source.parse::<Catalog>().unwrap_err();
    assert_eq!(
        err.format(source, "dup.toml"),
        "dup.toml: duplicate component definition: a"
    );
}
