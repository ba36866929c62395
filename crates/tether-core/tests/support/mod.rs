#![allow(dead_code)]

use std::sync::Arc;
use tether_core::schema::boot;
use tether_core::schema::db;
use tether_core::schema::domain::*;
use tether_core::schema::PersistentCollection;
use tether_core::stmt::{BoundValue, Type};

pub const OWNER: EntityId = EntityId(0);
pub const ITEM: EntityId = EntityId(1);
pub const REGION: EntityId = EntityId(2);
pub const CITY: EntityId = EntityId(3);

/// Domain model:
///   Owner { id, name }                        table owner
///   Owner.tags: [String]                      table owner_tags (id -> owner.id)
///   Item { id, owner: Owner, parent -> owner, label }
///                                             table item (owner_id -> owner.id)
///   Region { id: { iso2, region }, name }     table region
///   City { id, name }                         table city
///                                             (country_iso2, region_code) -> region
pub struct Model {
    pub db: db::Schema,
    pub owner: Arc<EntityDescriptor>,
    pub item: Arc<EntityDescriptor>,
    pub region: Arc<EntityDescriptor>,
    pub city: Arc<EntityDescriptor>,
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn db() -> db::Schema {
    db::Schema::builder()
        .table("owner", [("id", Type::I64), ("name", Type::String)])
        .table("owner_tags", [("id", Type::I64), ("tag", Type::String)])
        .table(
            "item",
            [
                ("id", Type::I64),
                ("owner_id", Type::I64),
                ("label", Type::String),
            ],
        )
        .table(
            "region",
            [
                ("iso2", Type::String),
                ("code", Type::String),
                ("name", Type::String),
            ],
        )
        .table(
            "city",
            [
                ("id", Type::I64),
                ("country_iso2", Type::String),
                ("region_code", Type::String),
                ("name", Type::String),
            ],
        )
        .build()
        .unwrap()
}

pub fn column(db: &db::Schema, table: &str, name: &str) -> Arc<db::Column> {
    db.column(table, name)
        .unwrap_or_else(|| panic!("no column {table}.{name}"))
        .clone()
}

pub fn model() -> Model {
    init_logging();

    let db = db();

    let owner = EntityDescriptor::builder(OWNER, "Owner")
        .simple_identifier("id", column(&db, "owner", "id"))
        .basic("name", column(&db, "owner", "name"))
        .build()
        .unwrap();

    let item = EntityDescriptor::builder(ITEM, "Item")
        .simple_identifier("id", column(&db, "item", "id"))
        .to_one("owner", vec![column(&db, "item", "owner_id")], &owner)
        .unwrap()
        .back_reference("parent", "owner")
        .basic("label", column(&db, "item", "label"))
        .build()
        .unwrap();

    let region = EntityDescriptor::builder(REGION, "Region")
        .embedded_identifier(
            "id",
            [
                ("iso2", column(&db, "region", "iso2")),
                ("region", column(&db, "region", "code")),
            ],
        )
        .basic("name", column(&db, "region", "name"))
        .build()
        .unwrap();

    let city = EntityDescriptor::builder(CITY, "City")
        .simple_identifier("id", column(&db, "city", "id"))
        .basic("name", column(&db, "city", "name"))
        .build()
        .unwrap();

    Model {
        db,
        owner,
        item,
        region,
        city,
    }
}

pub fn item_owner_fk() -> boot::ForeignKey {
    boot::ForeignKey::new("fk_item_owner", "item", "owner", [("owner_id", "id")])
}

/// `Owner.tags`, a collection of strings keyed by the owner's id.
pub fn owner_tags(model: &Model) -> Arc<PersistentCollection> {
    let boot = boot::Collection::new(
        "tags",
        boot::ForeignKey::new("fk_owner_tags", "owner_tags", "owner", [("id", "id")]),
    );

    PersistentCollection::new(
        &boot,
        model.owner.clone(),
        ElementDescriptor::Basic(Type::String),
        &model.db,
    )
    .unwrap()
}

/// `Owner.items`, keyed by the owner's id.
pub fn owner_items(model: &Model) -> Arc<PersistentCollection> {
    let boot = boot::Collection::new("items", item_owner_fk());

    PersistentCollection::new(
        &boot,
        model.owner.clone(),
        ElementDescriptor::Entity(model.item.clone()),
        &model.db,
    )
    .unwrap()
}

/// `Owner.items`, the inverse side of the item property `mapped_by`.
pub fn owner_items_mapped_by(model: &Model, mapped_by: &str) -> Arc<PersistentCollection> {
    let boot = boot::Collection::new("items", item_owner_fk()).mapped_by(mapped_by);

    PersistentCollection::new(
        &boot,
        model.owner.clone(),
        ElementDescriptor::Entity(model.item.clone()),
        &model.db,
    )
    .unwrap()
}

/// `Region.cities`, keyed by the region's two-column identifier.
pub fn region_cities(model: &Model) -> Arc<PersistentCollection> {
    let boot = boot::Collection::new(
        "cities",
        boot::ForeignKey::new(
            "fk_city_region",
            "city",
            "region",
            [("country_iso2", "iso2"), ("region_code", "code")],
        ),
    );

    PersistentCollection::new(
        &boot,
        model.region.clone(),
        ElementDescriptor::Entity(model.city.clone()),
        &model.db,
    )
    .unwrap()
}

/// (value, column name) pairs, in collection order.
pub fn bound(values: &[BoundValue]) -> Vec<(tether_core::stmt::Value, &str)> {
    values
        .iter()
        .map(|bound| (bound.value.clone(), bound.column.name.as_str()))
        .collect()
}
