use pretty_assertions::assert_eq;
use tests::prelude::*;

#[test]
fn named_is_default() {
    assert_eq!(Mapper::default().serializer().flavor(), Flavor::Named);
}

#[test]
fn positional_flavors() {
    let user = UserProfile::ann();

    for (flavor, insert, update) in [
        (
            Flavor::Postgresql,
            "INSERT INTO user_profiles (first_name, last_name) VALUES($1, $2);",
            "UPDATE user_profiles SET first_name = $1, last_name = $2 WHERE id = $3;",
        ),
        (
            Flavor::Sqlite,
            "INSERT INTO user_profiles (first_name, last_name) VALUES(?1, ?2);",
            "UPDATE user_profiles SET first_name = ?1, last_name = ?2 WHERE id = ?3;",
        ),
        (
            Flavor::Mysql,
            "INSERT INTO user_profiles (first_name, last_name) VALUES(?, ?);",
            "UPDATE user_profiles SET first_name = ?, last_name = ? WHERE id = ?;",
        ),
    ] {
        let mapper = Mapper::builder().flavor(flavor).build();

        let sql = mapper.insert(&user).unwrap();
        assert_eq!(sql.text, insert);
        assert_eq!(
            sql.params.keys().collect::<Vec<_>>(),
            ["first_name", "last_name"]
        );

        let sql = mapper.update(&user).unwrap();
        assert_eq!(sql.text, update);
        assert_eq!(
            sql.params.into_values(),
            [Value::from("Ann"), Value::Null, Value::I64(7)]
        );
    }
}
