use pretty_assertions::assert_eq;
use tests::prelude::*;

#[test]
fn no_persistable_fields() {
    let marker = Marker {
        id: 1,
        note: "transient".into(),
    };
    let mapper = Mapper::default();

    let err = mapper.insert(&marker).unwrap_err();
    assert!(err.is_no_persistable_fields());
    assert_eq!(err.to_string(), "entity `Marker` has no persistable fields");

    let err = mapper.update(&marker).unwrap_err();
    assert!(err.is_no_persistable_fields());

    // Table names do not depend on fields.
    assert_eq!(mapper.table_name(&marker), "markers");
}

#[test]
fn override_collides_with_derived_column() {
    let clash = Clash {
        id: 1,
        label: "a".into(),
        name: "b".into(),
    };

    let err = Mapper::default().insert(&clash).unwrap_err();
    assert!(err.is_duplicate_column());
    assert_eq!(
        err.to_string(),
        "entity `Clash` maps more than one field to column `name`"
    );

    let err = Mapper::default().update(&clash).unwrap_err();
    assert!(err.is_duplicate_column());
}

#[test]
fn column_collides_with_identity_placeholder() {
    let entity = LegacyKey {
        id: 1,
        legacy_id: 2,
    };

    let sql = Mapper::default().insert(&entity).unwrap();
    assert_eq!(sql.text, "INSERT INTO legacy_keys (id) VALUES(@id);");
    assert_eq!(sql.params.get("id"), Some(&Value::I64(2)));

    for identity_param in [IdentityParam::Include, IdentityParam::Omit] {
        let mapper = Mapper::builder().identity_param(identity_param).build();
        let err = mapper.update(&entity).unwrap_err();

        assert!(err.is_duplicate_column());
        assert!(!err.is_no_persistable_fields());
    }
}

#[test]
fn errors_carry_context() {
    let marker = Marker {
        id: 1,
        note: String::new(),
    };

    let err = Mapper::default()
        .insert(&marker)
        .unwrap_err()
        .context("saving marker");

    assert_eq!(
        err.to_string(),
        "saving marker: entity `Marker` has no persistable fields"
    );
}
