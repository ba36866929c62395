mod support;

use pretty_assertions::assert_eq;
use support::*;
use tether_core::schema::CollectionKey;
use tether_core::stmt::*;

fn dehydrate(key: &CollectionKey, value: &Value) -> Vec<BoundValue> {
    let mut values: Vec<BoundValue> = vec![];
    key.dehydrate(value, &mut values, Clause::Insert).unwrap();
    values
}

fn owner(id: i64, name: &str) -> Value {
    ValueEntity::new(OWNER, [Value::I64(id), Value::from(name)]).into()
}

fn region(iso2: &str, code: &str) -> Value {
    Value::record_from_vec(vec![iso2.into(), code.into()])
}

#[test]
fn single_column_key() {
    let model = model();
    let tags = owner_tags(&model);

    let values = dehydrate(tags.key(), &Value::I64(42));

    assert_eq!(bound(&values), vec![(Value::I64(42), "id")]);
    assert_eq!(values[0].ty, Type::I64);
    assert_eq!(
        values[0].column.id.table,
        model.db.table_by_name("owner_tags").unwrap().id
    );
}

#[test]
fn composite_key_binds_referring_columns_in_order() {
    let model = model();
    let cities = region_cities(&model);

    let values = dehydrate(cities.key(), &region("FR", "75"));

    assert_eq!(
        bound(&values),
        vec![
            (Value::from("FR"), "country_iso2"),
            (Value::from("75"), "region_code"),
        ]
    );
}

#[test]
fn owner_entity_is_unresolved_to_its_id() {
    let model = model();
    let items = owner_items(&model);

    let values = dehydrate(items.key(), &owner(7, "Alice"));

    assert_eq!(bound(&values), vec![(Value::I64(7), "owner_id")]);
}

#[test]
fn composite_owner_entity_is_unresolved_to_its_id() {
    let model = model();
    let cities = region_cities(&model);

    let entity = ValueEntity::new(
        REGION,
        [region("FR", "75"), Value::from("Ile-de-France")],
    );

    assert_eq!(
        cities.key().unresolve(&entity.clone().into()).unwrap(),
        region("FR", "75")
    );
    assert_eq!(
        bound(&dehydrate(cities.key(), &entity.into())),
        vec![
            (Value::from("FR"), "country_iso2"),
            (Value::from("75"), "region_code"),
        ]
    );
}

#[test]
fn unresolve_then_dehydrate_matches_direct_dehydrate() {
    let model = model();

    for items in [owner_items(&model), owner_items_mapped_by(&model, "owner")] {
        let key = items.key();
        let alice = owner(7, "Alice");

        let unresolved = key.unresolve(&alice).unwrap();
        assert_eq!(unresolved, Value::I64(7));

        assert_eq!(dehydrate(key, &unresolved), dehydrate(key, &alice));
    }
}

#[test]
fn back_reference_key_behaves_like_direct_property() {
    let model = model();
    let direct = owner_items_mapped_by(&model, "owner");
    let via_back_reference = owner_items_mapped_by(&model, "parent");

    let direct_target = direct.key().target_navigable().unwrap();
    let back_reference_target = via_back_reference.key().target_navigable().unwrap();

    assert_eq!(
        direct_target.columns().unwrap(),
        back_reference_target.columns().unwrap()
    );

    let alice = owner(7, "Alice");
    assert_eq!(
        dehydrate(direct.key(), &alice),
        dehydrate(via_back_reference.key(), &alice)
    );
    assert_eq!(
        direct.key().unresolve(&alice).unwrap(),
        via_back_reference.key().unresolve(&alice).unwrap()
    );
}

#[test]
fn null_key_binds_null_to_every_column() {
    let model = model();
    let cities = region_cities(&model);

    assert_eq!(
        bound(&dehydrate(cities.key(), &Value::Null)),
        vec![(Value::Null, "country_iso2"), (Value::Null, "region_code")]
    );

    let values = dehydrate(cities.key(), &region("FR", "75"));
    assert!(values.iter().all(|bound| !bound.value.is_null()));
}

#[test]
fn partially_null_key_keeps_positions() {
    let model = model();
    let cities = region_cities(&model);

    let values = dehydrate(
        cities.key(),
        &Value::record_from_vec(vec!["FR".into(), Value::Null]),
    );

    assert_eq!(
        bound(&values),
        vec![(Value::from("FR"), "country_iso2"), (Value::Null, "region_code")]
    );
}

#[test]
fn mis_shaped_value_is_rejected() {
    let model = model();
    let cities = region_cities(&model);
    let mut values: Vec<BoundValue> = vec![];

    let err = cities
        .key()
        .dehydrate(&Value::from("FR"), &mut values, Clause::Insert)
        .unwrap_err();
    assert!(err.is_type_conversion());

    let err = cities
        .key()
        .dehydrate(
            &Value::record_from_vec(vec!["FR".into()]),
            &mut values,
            Clause::Insert,
        )
        .unwrap_err();
    assert!(err.is_type_conversion());

    // Nothing reaches the collector on failure
    assert!(values.is_empty());
}

#[test]
fn entity_of_another_type_is_rejected() {
    let model = model();
    let items = owner_items(&model);

    let city: Value = ValueEntity::new(CITY, [Value::I64(1), Value::from("Paris")]).into();
    let err = items.key().unresolve(&city).unwrap_err();

    assert!(err.is_type_conversion());
}

#[test]
fn dehydrate_resolution_failure_leaves_collector_untouched() {
    let model = model();
    let items = owner_items_mapped_by(&model, "ownerX");
    let mut values: Vec<BoundValue> = vec![];

    let err = items
        .key()
        .dehydrate(&Value::I64(7), &mut values, Clause::Update)
        .unwrap_err();

    assert!(err.is_mapping_resolution());
    assert!(values.is_empty());
}

#[test]
fn visit_columns_walks_referring_side() {
    let model = model();
    let cities = region_cities(&model);

    let mut columns = vec![];
    cities
        .key()
        .visit_columns(Clause::Select, |ty, column| {
            columns.push((ty.clone(), column.name.clone()))
        });

    assert_eq!(
        columns,
        vec![
            (Type::String, "country_iso2".to_string()),
            (Type::String, "region_code".to_string()),
        ]
    );

    let mut types = vec![];
    cities
        .key()
        .visit_jdbc_types(Clause::Select, |ty| types.push(ty.clone()));
    assert_eq!(types, vec![Type::String, Type::String]);

    // Visiting does not need the target
    assert!(!cities.key().is_resolved());
}
