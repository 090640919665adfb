#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;
use tests::prelude::*;

#[test]
fn param_bag_as_json() {
    let sql = Mapper::default().update(&UserProfile::ann()).unwrap();

    assert_eq!(
        serde_json::to_string(&sql.params).unwrap(),
        r#"{"first_name":"Ann","last_name":null,"id":7}"#
    );
}
