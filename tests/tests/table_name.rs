use pretty_assertions::assert_eq;
use tests::prelude::*;

#[test]
fn derived_from_type_name() {
    let mapper = Mapper::default();
    let user = UserProfile::ann();

    assert_eq!(mapper.table_name(&user), "user_profiles");
    assert_eq!(mapper.table_name(&Customer::grace()), "customers");
}

#[test]
fn every_casing() {
    let mapper = Mapper::default();
    let user = UserProfile::ann();

    for (casing, expect) in [
        (Casing::Snake, "user_profiles"),
        (Casing::Preserve, "UserProfiles"),
        (Casing::Kebab, "user-profiles"),
        (Casing::Camel, "userProfiles"),
        (Casing::Pascal, "UserProfiles"),
        (Casing::ScreamingSnake, "USER_PROFILES"),
    ] {
        assert_eq!(mapper.table_name_with(&user, casing), expect, "{casing:?}");
    }
}

#[test]
fn override_is_verbatim() {
    let order = order();
    let mapper = Mapper::builder()
        .table_name_prefix("app_")
        .pluralize(Pluralize::Inflect)
        .build();

    for casing in [
        Casing::Snake,
        Casing::Preserve,
        Casing::Kebab,
        Casing::Camel,
        Casing::Pascal,
        Casing::ScreamingSnake,
    ] {
        assert_eq!(mapper.table_name_with(&order, casing), "tbl_orders");
    }
}

#[test]
fn configured_table_casing() {
    let mapper = Mapper::builder().table_casing(Casing::Preserve).build();
    assert_eq!(mapper.table_name(&UserProfile::ann()), "UserProfiles");
}

#[test]
fn prefix_applies_to_derived_names() {
    let mapper = Mapper::builder().table_name_prefix("app_").build();

    assert_eq!(mapper.table_name(&UserProfile::ann()), "app_user_profiles");

    let sql = mapper.insert(&UserProfile::ann()).unwrap();
    assert!(sql.text.starts_with("INSERT INTO app_user_profiles "));
}

#[test]
fn naive_plural() {
    let mapper = Mapper::default();

    assert_eq!(mapper.table_name(&category()), "categorys");
    assert_eq!(mapper.table_name(&person()), "persons");
}

#[test]
fn inflected_plural() {
    let mapper = Mapper::builder().pluralize(Pluralize::Inflect).build();

    assert_eq!(mapper.table_name(&category()), "categories");
    assert_eq!(mapper.table_name(&person()), "people");
    assert_eq!(mapper.table_name(&UserProfile::ann()), "user_profiles");
}

#[test]
fn entity_ext_uses_default_rule() {
    let user = UserProfile::ann();

    assert_eq!(user.get_table_name(Casing::Snake), "user_profiles");
    assert_eq!(user.get_table_name(Casing::Preserve), "UserProfiles");
    assert_eq!(order().get_table_name(Casing::Preserve), "tbl_orders");
}

fn order() -> Order {
    Order::sample()
}

fn category() -> Category {
    Category {
        id: 1,
        name: "Books".into(),
    }
}

fn person() -> Person {
    Person {
        id: 1,
        name: "Ann".into(),
    }
}
