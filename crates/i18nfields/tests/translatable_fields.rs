use std::collections::BTreeMap;
use std::sync::Arc;

use i18nfields::prelude::*;
use serde_json::json;

fn languages() -> Arc<LanguageConfig> {
    Arc::new(LanguageConfig::new(["en", "fr"]).unwrap())
}

fn product_schema() -> Arc<ModelSchema> {
    Arc::new(
        ModelSchema::builder("product", languages())
            .field(FieldDef::new("id", SqlType::BigInt).primary_key())
            .translatable("name", FieldDef::varchar("name", 255).nullable())
            .translatable("description", FieldDef::text("description").nullable())
            .field(FieldDef::new("price", SqlType::Double))
            .build()
            .unwrap(),
    )
}

#[test]
fn laptop_end_to_end() {
    let schema = product_schema();
    assert_eq!(schema.languages().languages(), ["default", "en", "fr"]);

    let laptop = Record::create(
        Arc::clone(&schema),
        [
            ("id", json!(1)),
            ("name", json!({"en": "Laptop", "fr": "Ordinateur portable"})),
        ],
    )
    .unwrap();

    let name = laptop.translated("name").unwrap().unwrap();
    assert_eq!(name.current_value("en"), "Laptop");
    assert_eq!(name.current_value("fr"), "Ordinateur portable");
    // No "default" translation was supplied, so an untranslated language
    // falls back to empty text.
    assert_eq!(name.current_value("it"), "");
    assert_eq!(name.current_value(&None::<&str>), "");
    assert_eq!(name.to_string(), "");
}

#[test]
fn written_mapping_reads_back_exactly() {
    let mut record = Record::new(product_schema());
    let mapping: BTreeMap<String, String> = [
        ("default", "Mouse"),
        ("en", "Computer mouse"),
        ("fr", "Souris"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    record.set_translated("name", mapping.clone()).unwrap();
    let read = record.translated("name").unwrap().unwrap();
    for (lang, text) in &mapping {
        assert_eq!(read.current_value(lang.as_str()), *text);
    }
}

#[test]
fn regional_subtag_falls_back_to_base() {
    let mut record = Record::new(product_schema());
    record
        .set_translated("name", [("default", "Color"), ("en", "Colour")])
        .unwrap();
    let name = record.translated("name").unwrap().unwrap();
    assert_eq!(name.current_value("en-US"), "Colour");
    assert_eq!(name.current_value("fr-CA"), "Color");
}

#[test]
fn plain_text_sets_only_default() {
    let mut record = Record::new(product_schema());
    record
        .set_translated("name", [("en", "A"), ("fr", "B")])
        .unwrap();
    record.set_translated("name", "C").unwrap();

    let name = record.translated("name").unwrap().unwrap();
    assert_eq!(name.get("en"), Some("A"));
    assert_eq!(name.get("fr"), Some("B"));
    assert_eq!(name.get("default"), Some("C"));
    assert_eq!(name.current_value("de"), "C");
}

#[test]
fn null_clears_every_language() {
    let mut record = Record::new(product_schema());
    record
        .set_translated("name", [("default", "x"), ("en", "A"), ("fr", "B")])
        .unwrap();
    record.set_translated("name", TranslationInput::Null).unwrap();

    assert_eq!(record.translated("name").unwrap(), None);
    for column in ["name_default", "name_en", "name_fr"] {
        assert_eq!(record.get(column), Some(&Value::Null));
    }
}

#[test]
fn unsupported_language_leaves_columns_unmodified() {
    let mut record = Record::new(product_schema());
    record.set_translated("name", [("en", "A")]).unwrap();
    let before = record.to_json();

    let err = record
        .set_translated("name", [("fr", "B"), ("es", "C")])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.to_string(), "language 'es' is not supported (field 'name')");
    assert_eq!(record.to_json(), before);
}

#[test]
fn json_input_of_wrong_shape_is_type_error() {
    let err = Record::create(product_schema(), [("name", json!(42))]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);

    let err = Record::create(product_schema(), [("name", json!({"en": false}))]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[test]
fn container_write_round_trips() {
    let mut source = Record::new(product_schema());
    source
        .set_translated("description", [("en", "Fast"), ("fr", "Rapide")])
        .unwrap();
    let description = source.translated("description").unwrap().unwrap();

    let mut copy = Record::new(product_schema());
    copy.set_translated("description", &description).unwrap();
    assert_eq!(copy.translated("description").unwrap(), Some(description));
}

#[test]
fn empty_string_is_a_stored_value_in_the_container() {
    let mut value = TranslatedString::new();
    value.set("default", "Fallback");
    value.set("fr", "");
    assert_eq!(value.current_value("fr"), "");
    assert_eq!(value.current_value("it"), "Fallback");
}

#[test]
fn empty_columns_read_as_absent() {
    let mut record = Record::new(product_schema());
    record.set_translated("name", [("en", "")]).unwrap();
    assert_eq!(record.get("name_en"), Some(&Value::from("")));
    assert_eq!(record.translated("name").unwrap(), None);
}

#[test]
fn concatenating_disjoint_values_covers_union() {
    let greeting: TranslatedString = [("en", "Hello ")].into_iter().collect();
    let subject: TranslatedString = [("default", "World"), ("fr", "Monde")].into_iter().collect();

    let joined = &greeting + &subject;
    assert_eq!(joined.languages(), ["default", "en", "fr"]);
    assert_eq!(joined.get("en"), Some("Hello World"));
    assert_eq!(joined.get("fr"), Some("Monde"));
    assert_eq!(joined.get("default"), Some("World"));
}

#[test]
fn default_language_override_drives_fallback() {
    let config = Arc::new(
        LanguageConfig::new(["en", "fr"])
            .unwrap()
            .with_default_language("en")
            .unwrap(),
    );
    let schema = ModelSchema::builder("product", config)
        .translatable("name", FieldDef::varchar("name", 100))
        .build()
        .unwrap();

    let mut record = Record::new(schema);
    record.set_translated("name", [("en", "Laptop")]).unwrap();
    let name = record.translated("name").unwrap().unwrap();
    assert_eq!(name.current_value("it"), "Laptop");
}

#[test]
fn cached_value_survives_serialization() {
    let mut record = Record::new(product_schema());
    record
        .set_translated("name", [("en", "Laptop"), ("fr", "Portable")])
        .unwrap();
    let name = record.translated("name").unwrap().unwrap();

    let cached = serde_json::to_string(&name).unwrap();
    let restored: TranslatedString = serde_json::from_str(&cached).unwrap();
    assert_eq!(restored, name);
    assert_eq!(restored.current_value("fr"), "Portable");
}

#[test]
fn translate_each_renders_every_language() {
    let config = languages();
    let label = translate_each(&config, &|lang: &str| format!("label:{lang}"));
    assert_eq!(label.get("en"), Some("label:en"));
    assert_eq!(label.get("fr"), Some("label:fr"));
    assert_eq!(label.get("default"), None);

    let constant = translate_each(&config, &|_: &str| "same".to_string());
    assert_eq!(constant.languages(), ["default"]);
    assert_eq!(constant.current_value("fr"), "same");
}

#[test]
fn translated_fields_are_not_editable_columns() {
    let schema = product_schema();
    let name_en = schema.column("name_en").unwrap();
    assert!(!name_en.editable);
    assert_eq!(name_en.display_label(), "name (en)");
    assert!(schema.column("price").unwrap().editable);
}
