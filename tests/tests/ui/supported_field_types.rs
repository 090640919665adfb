use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rowbind::{Entity, Mapper, Type};
use uuid::Uuid;

#[derive(Entity)]
struct Everything {
    #[key]
    key: Uuid,
    flag: bool,
    tiny: i8,
    small: i16,
    medium: i32,
    large: i64,
    utiny: u8,
    usmall: u16,
    umedium: u32,
    ularge: u64,
    ratio: f32,
    precise: f64,
    text: String,
    blob: Vec<u8>,
    day: NaiveDate,
    clock: NaiveTime,
    local: NaiveDateTime,
    instant: DateTime<Utc>,
    maybe: Option<i32>,
}

fn main() {
    let schema = <Everything as rowbind::Entity>::SCHEMA;

    assert_eq!(schema.fields.len(), 19);
    assert_eq!(schema.identity, 0);
    assert_eq!(schema.fields[0].ty, Some(Type::Uuid));
    assert_eq!(schema.fields[17].ty, Some(Type::Timestamp));
    assert!(schema.fields[18].nullable);

    let _ = Mapper::default();
}
