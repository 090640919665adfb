use pretty_assertions::assert_eq;
use tests::prelude::*;
use uuid::Uuid;

#[test]
fn update_binds_identity() {
    init_logging();

    let sql = Mapper::default().update(&UserProfile::ann()).unwrap();

    assert_eq!(
        sql.text,
        "UPDATE user_profiles SET first_name = @first_name, last_name = @last_name WHERE id = @id;"
    );
    assert_eq!(
        sql.params.keys().collect::<Vec<_>>(),
        ["first_name", "last_name", "id"]
    );
    assert_eq!(sql.params.get("id"), Some(&Value::I64(7)));
}

#[test]
fn identity_placeholder_follows_column_casing() {
    let customer = Customer::grace();

    let sql = Mapper::default().update(&customer).unwrap();
    assert_eq!(
        sql.text,
        "UPDATE customers SET FirstName = @FirstName, LastName = @LastName, Address2 = @Address2 WHERE id = @Id;"
    );
    assert_eq!(sql.params.get("Id"), Some(&Value::Uuid(Uuid::nil())));

    let mapper = Mapper::builder().column_casing(Casing::Snake).build();
    let sql = mapper.update(&customer).unwrap();
    assert_eq!(
        sql.text,
        "UPDATE customers SET first_name = @first_name, last_name = @last_name, address2 = @address2 WHERE id = @id;"
    );
    assert_eq!(sql.params.get("id"), Some(&Value::Uuid(Uuid::nil())));
}

#[test]
fn keyed_identity_and_overrides() {
    let sql = Mapper::default().update(&Order::sample()).unwrap();

    assert_eq!(
        sql.text,
        "UPDATE tbl_orders SET cust_ref = @cust_ref, placed_at = @placed_at, TotalCents = @TotalCents WHERE order_id = @order_id;"
    );
    assert_eq!(sql.params.get("order_id"), Some(&Value::I64(42)));
    assert!(!sql.params.contains_key("lines"));
}

#[test]
fn identity_can_be_left_unbound() {
    let mapper = Mapper::builder()
        .identity_param(IdentityParam::Omit)
        .build();
    let sql = mapper.update(&UserProfile::ann()).unwrap();

    assert!(sql.text.ends_with(" WHERE id = @id;"));
    assert_eq!(
        sql.params.keys().collect::<Vec<_>>(),
        ["first_name", "last_name"]
    );
}

#[test]
fn assignments_match_bag_keys() {
    let mapper = Mapper::default();
    let stmt = mapper.update_statement(&Customer::grace()).unwrap();
    let sql = mapper.update(&Customer::grace()).unwrap();

    let mut expect: Vec<_> = stmt.column_names().collect();
    expect.push(&stmt.key.param);

    assert_eq!(sql.params.keys().collect::<Vec<_>>(), expect);
}

#[test]
fn repeated_calls_are_identical() {
    let mapper = Mapper::default();
    let order = Order::sample();

    assert_eq!(mapper.update(&order).unwrap(), mapper.update(&order).unwrap());
}
