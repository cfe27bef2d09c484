//! Integration tests for the directory-backed template store

use mailblocks::store::{template_key, DirectoryArea, KeyValueArea, TemplateStore};
use mailblocks::{render, Catalog, SettingValue, TemplateDocument};

#[test]
fn test_edit_save_reload_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::builtin();

    let mut store = TemplateStore::new(DirectoryArea::new(dir.path()));
    let doc = store.create(Some("Spring Sale")).expect("Should create");

    let edited = doc
        .with_instance(catalog.get("button").unwrap(), "cta")
        .unwrap()
        .with_setting(&catalog, "cta", "label", SettingValue::from("Shop now"))
        .unwrap();
    store.save(&edited).expect("Should save");

    // a fresh store over the same directory sees the saved document
    let reopened = TemplateStore::new(DirectoryArea::new(dir.path()));
    let loaded = reopened.require(&doc.id).expect("Should load");
    assert_eq!(loaded, edited);
    assert!(render(&loaded, &catalog).html.contains(">Shop now</a>"));

    let list = reopened.list().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "Spring Sale");
}

#[test]
fn test_legacy_file_on_disk_is_readable() {
    let dir = tempfile::tempdir().unwrap();
    let mut area = DirectoryArea::new(dir.path());
    area.set_item(
        &template_key("old"),
        r#"{"id":"old","name":"Old","root":[{"id":"a","componentType":"image","props":{"alt":"Logo"}}]}"#,
    )
    .unwrap();

    let store = TemplateStore::new(area);
    let doc = store.get("old").unwrap().expect("Should normalize legacy");
    assert_eq!(doc.instances[0].component_id, "image");
    assert!(render(&doc, &Catalog::builtin()).html.contains(r#"alt="Logo""#));
}

#[test]
fn test_unavailable_medium_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file in the way").unwrap();

    let mut store = TemplateStore::new(DirectoryArea::new(&blocker));
    assert!(store.create(Some("Nope")).is_err());
}

#[test]
fn test_remove_deletes_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = TemplateStore::new(DirectoryArea::new(dir.path()));
    let doc = store.create(None).unwrap();
    assert_eq!(doc.name, "Untitled Template");

    store.remove(&doc.id).unwrap();
    assert!(store.get(&doc.id).unwrap().is_none());
    assert!(store.area().get_item(&template_key(&doc.id)).unwrap().is_none());
}

#[test]
fn test_ids_differing_only_in_punctuation_stay_separate() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = TemplateStore::new(DirectoryArea::new(dir.path()));

    store
        .save(&TemplateDocument::new("a:b", "Colon"))
        .expect("Should save");
    store
        .save(&TemplateDocument::new("a_b", "Underscore"))
        .expect("Should save");

    let colon = store.require("a:b").unwrap();
    assert_eq!(colon.id, "a:b");
    assert_eq!(colon.name, "Colon");
    let underscore = store.require("a_b").unwrap();
    assert_eq!(underscore.id, "a_b");
    assert_eq!(underscore.name, "Underscore");

    let mut names: Vec<String> = store.list().unwrap().into_iter().map(|t| t.name).collect();
    names.sort();
    assert_eq!(names, vec!["Colon", "Underscore"]);

    store.remove("a_b").unwrap();
    assert_eq!(store.require("a:b").unwrap().name, "Colon");
}
