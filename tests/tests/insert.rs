use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use tests::prelude::*;
use uuid::Uuid;

#[test]
fn insert_eligible_fields() {
    init_logging();

    let sql = Mapper::default().insert(&UserProfile::ann()).unwrap();

    assert_eq!(
        sql.text,
        "INSERT INTO user_profiles (first_name, last_name) VALUES(@first_name, @last_name);"
    );
    assert_eq!(
        sql.params.iter().collect::<Vec<_>>(),
        [("first_name", &Value::from("Ann")), ("last_name", &Value::Null)]
    );
    assert!(!sql.params.contains_key("id"));
    assert!(!sql.params.contains_key("display_name"));
}

#[test]
fn declared_names_preserved_by_default() {
    let sql = Mapper::default().insert(&Customer::grace()).unwrap();

    assert_eq!(
        sql.text,
        "INSERT INTO customers (FirstName, LastName, Address2) VALUES(@FirstName, @LastName, @Address2);"
    );
    assert_eq!(sql.params.get("Address2"), Some(&Value::from("Suite 9")));
}

#[test]
fn snake_case_columns() {
    let mapper = Mapper::builder().column_casing(Casing::Snake).build();
    let sql = mapper.insert(&Customer::grace()).unwrap();

    assert_eq!(
        sql.text,
        "INSERT INTO customers (first_name, last_name, address2) VALUES(@first_name, @last_name, @address2);"
    );
    assert_eq!(
        sql.params.keys().collect::<Vec<_>>(),
        ["first_name", "last_name", "address2"]
    );
}

#[test]
fn column_overrides_win_over_casing() {
    for casing in [Casing::Preserve, Casing::Snake, Casing::ScreamingSnake] {
        let mapper = Mapper::builder().column_casing(casing).build();
        let sql = mapper.insert(&Order::sample()).unwrap();

        let placed_at = casing.apply("placed_at");
        assert_eq!(
            sql.text,
            format!(
                "INSERT INTO tbl_orders (cust_ref, {placed_at}, TotalCents) VALUES(@cust_ref, @{placed_at}, @TotalCents);"
            )
        );
    }
}

#[test]
fn field_values_bound_by_type() {
    let sql = Mapper::default().insert(&Order::sample()).unwrap();

    assert_eq!(
        sql.params.into_values(),
        [
            Value::Uuid(Uuid::nil()),
            Value::Timestamp(DateTime::<Utc>::UNIX_EPOCH),
            Value::I64(1999),
        ]
    );
}

#[test]
fn columns_match_bag_keys() {
    let mapper = Mapper::default();

    for (stmt, sql) in [
        (
            mapper.insert_statement(&Customer::grace()).unwrap(),
            mapper.insert(&Customer::grace()).unwrap(),
        ),
        (
            mapper.insert_statement(&Order::sample()).unwrap(),
            mapper.insert(&Order::sample()).unwrap(),
        ),
    ] {
        assert_eq!(
            stmt.column_names().collect::<Vec<_>>(),
            sql.params.keys().collect::<Vec<_>>()
        );
    }
}

#[test]
fn repeated_calls_are_identical() {
    let mapper = Mapper::default();
    let user = UserProfile::ann();

    assert_eq!(mapper.insert(&user).unwrap(), mapper.insert(&user).unwrap());
}

#[test]
fn values_reflect_current_state() {
    let mapper = Mapper::default();
    let mut user = UserProfile::ann();

    user.last_name = Some("Lee".into());
    let sql = mapper.insert(&user).unwrap();

    assert_eq!(sql.params.get("last_name"), Some(&Value::from("Lee")));
}

#[allow(non_snake_case)]
#[derive(rowbind::Entity)]
struct Legacy {
    id: i64,
    _internal_code: String,
    order__total: i64,
}

#[test]
fn snake_case_keeps_names_without_uppercase() {
    let legacy = Legacy {
        id: 1,
        _internal_code: "x".into(),
        order__total: 5,
    };

    let mapper = Mapper::builder().column_casing(Casing::Snake).build();
    let sql = mapper.insert(&legacy).unwrap();

    assert_eq!(
        sql.text,
        "INSERT INTO legacys (_internal_code, order__total) VALUES(@_internal_code, @order__total);"
    );
    assert_eq!(sql.params.get("order__total"), Some(&Value::I64(5)));
}
