mod support;

use support::*;
use tether_core::schema::boot;
use tether_core::schema::db::{ForeignKey, Schema};
use tether_core::stmt::Type;

#[test]
fn resolves_columns_in_key_order() {
    let db = db();

    let fk = db
        .resolve_foreign_key(&boot::ForeignKey::new(
            "fk_city_region",
            "city",
            "region",
            [("region_code", "code"), ("country_iso2", "iso2")],
        ))
        .unwrap();

    assert_eq!(fk.name, "fk_city_region");
    assert_eq!(fk.arity(), 2);
    let pairs: Vec<_> = fk
        .pairs()
        .map(|(from, to)| (from.name.as_str(), to.name.as_str()))
        .collect();

    assert_eq!(
        pairs,
        vec![("region_code", "code"), ("country_iso2", "iso2")]
    );
    assert_eq!(fk.referring_table(), db.table_by_name("city").unwrap().id);
    assert_eq!(fk.target_table(), db.table_by_name("region").unwrap().id);
}

#[test]
fn columns_are_shared_with_the_schema() {
    let db = db();

    let fk = db
        .resolve_foreign_key(&boot::ForeignKey::new(
            "fk_item_owner",
            "item",
            "owner",
            [("owner_id", "id")],
        ))
        .unwrap();

    assert!(std::sync::Arc::ptr_eq(
        &fk.referring_columns()[0],
        db.column("item", "owner_id").unwrap()
    ));
}

#[test]
fn unknown_table_is_rejected() {
    let err = db()
        .resolve_foreign_key(&boot::ForeignKey::new(
            "fk_nope",
            "nope",
            "owner",
            [("owner_id", "id")],
        ))
        .unwrap_err();

    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: foreign key `fk_nope` refers to unknown table `nope`"
    );
}

#[test]
fn unknown_column_is_rejected() {
    let err = db()
        .resolve_foreign_key(&boot::ForeignKey::new(
            "fk_item_owner",
            "item",
            "owner",
            [("owner", "id")],
        ))
        .unwrap_err();

    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: foreign key `fk_item_owner` refers to unknown column `item.owner`"
    );
}

#[test]
fn empty_key_is_rejected() {
    let err = db()
        .resolve_foreign_key(&boot::ForeignKey::new(
            "fk_empty",
            "item",
            "owner",
            Vec::<(&str, &str)>::new(),
        ))
        .unwrap_err();

    assert!(err.is_invalid_schema());
}

#[test]
fn unpaired_columns_are_rejected() {
    let db = db();

    let err = ForeignKey::new(
        "fk_city_region",
        vec![
            column(&db, "city", "country_iso2"),
            column(&db, "city", "region_code"),
        ],
        vec![column(&db, "region", "iso2")],
    )
    .unwrap_err();

    assert!(err.is_invalid_schema());
}

#[test]
fn duplicate_columns_are_rejected() {
    let err = Schema::builder()
        .table("owner", [("id", Type::I64), ("id", Type::String)])
        .build()
        .unwrap_err();

    assert!(err.is_invalid_schema());
}
