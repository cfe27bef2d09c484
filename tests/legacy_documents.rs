//! Legacy-shaped documents must render exactly like their canonical form

use mailblocks::{render, render_json, Catalog, TemplateDocument};
use pretty_assertions::assert_eq;

const CANONICAL: &str = r#"{
    "id": "newsletter",
    "name": "Newsletter",
    "instances": [
        { "id": "1", "componentId": "text", "overrides": { "text": "Hi <there>", "fontSize": 18 } },
        { "id": "2", "componentId": "divider", "overrides": {} },
        { "id": "3", "componentId": "button", "overrides": { "url": "https://shop.test/?a=1&b=2", "target": "_blank" } },
        { "id": "4", "componentId": "", "overrides": {} },
        { "id": "5", "componentId": "retired-block", "overrides": { "x": 1 } }
    ]
}"#;

const LEGACY: &str = r#"{
    "id": "newsletter",
    "name": "Newsletter",
    "root": [
        { "id": "1", "componentType": "text", "props": { "text": "Hi <there>", "fontSize": 18 } },
        { "id": "2", "componentType": "divider", "props": {}, "children": [] },
        { "id": "3", "componentType": "button", "props": { "url": "https://shop.test/?a=1&b=2", "target": "_blank" } },
        { "id": "4", "componentType": "", "props": {} },
        { "id": "5", "componentType": "retired-block", "props": { "x": 1 } }
    ]
}"#;

#[test]
fn test_legacy_normalizes_to_canonical() {
    let canonical = TemplateDocument::from_json(CANONICAL).expect("Should parse canonical");
    let legacy = TemplateDocument::from_json(LEGACY).expect("Should parse legacy");
    assert_eq!(legacy, canonical);
}

#[test]
fn test_legacy_renders_identically() {
    let catalog = Catalog::builtin();
    let canonical = render_json(CANONICAL, &catalog).unwrap();
    let legacy = render_json(LEGACY, &catalog).unwrap();

    assert_eq!(legacy.html, canonical.html);
    assert_eq!(legacy.warning_messages(), canonical.warning_messages());
}

#[test]
fn test_newsletter_output() {
    let output = render_json(CANONICAL, &Catalog::builtin()).unwrap();

    assert!(output.html.starts_with("<!doctype html><html><body><p style="));
    assert!(output.html.contains("font-size: 18px;"));
    assert!(output.html.contains(">Hi &lt;there&gt;</p>"));
    assert!(output.html.contains(r#"href="https://shop.test/?a=1&b=2""#));
    assert_eq!(
        output.warning_messages(),
        vec![
            "Instance for component \"button\" has override \"target\" with no matching setting key."
                .to_string(),
            "Instance at index 3 is missing componentId.".to_string(),
        ]
    );
}

#[test]
fn test_saving_legacy_writes_canonical() {
    let doc = TemplateDocument::from_json(LEGACY).unwrap();
    let json = doc.to_json().unwrap();
    assert!(json.contains("\"instances\""));
    assert!(json.contains("\"componentId\""));
    assert!(!json.contains("\"root\""));
    assert!(!json.contains("\"props\""));

    let reparsed = TemplateDocument::from_json(&json).unwrap();
    assert_eq!(
        render(&reparsed, &Catalog::builtin()),
        render(&doc, &Catalog::builtin())
    );
}

#[test]
fn test_array_entry_counts_toward_instance_index() {
    let source = r#"{ "id": "d", "name": "Arrays", "instances": [[], { "componentId": "" }] }"#;
    let output = render_json(source, &Catalog::builtin()).unwrap();
    assert_eq!(
        output.warning_messages(),
        vec![
            "Instance at index 0 is missing componentId.".to_string(),
            "Instance at index 1 is missing componentId.".to_string(),
        ]
    );
}
