#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::collections::HashMap;
use studykit::{Record, RecordStore, Value};

#[derive(Arbitrary, Debug)]
enum FieldValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Text(String),
}

impl From<&FieldValue> for Value {
    fn from(v: &FieldValue) -> Self {
        match v {
            FieldValue::Null => Value::Null,
            FieldValue::Boolean(b) => Value::Boolean(*b),
            FieldValue::Integer(i) => Value::Integer(*i),
            FieldValue::Text(s) => Value::String(s.clone()),
        }
    }
}

#[derive(Arbitrary, Debug)]
enum StoreOp {
    Create { key: String, fields: Vec<(String, FieldValue)> },
    Read { key: String },
    Update { key: String, fields: Vec<(String, FieldValue)> },
    Delete { key: String },
    Clear,
}

fn to_record(fields: &[(String, FieldValue)]) -> Record {
    fields.iter().map(|(k, v)| (k.clone(), Value::from(v))).collect()
}

fuzz_target!(|ops: Vec<StoreOp>| {
    let mut store = RecordStore::new();
    // Plain HashMap model checked against the store after every step
    let mut model: HashMap<String, Record> = HashMap::new();

    for op in ops.iter().take(100) {
        match op {
            StoreOp::Create { key, fields } => {
                let record = to_record(fields);
                store.create_item(key, &record);
                model.insert(key.clone(), record);
            }
            StoreOp::Read { key } => {
                assert_eq!(store.read_item(key).as_ref(), model.get(key));
            }
            StoreOp::Update { key, fields } => {
                let patch = to_record(fields);
                let updated = store.update_item(key, &patch);
                assert_eq!(updated, model.contains_key(key));
                if let Some(record) = model.get_mut(key) {
                    record.merge(&patch);
                }
            }
            StoreOp::Delete { key } => {
                assert_eq!(store.delete_item(key), model.remove(key).is_some());
            }
            StoreOp::Clear => {
                store.clear_db();
                model.clear();
            }
        }
        assert_eq!(store.len(), model.len());
    }
});
