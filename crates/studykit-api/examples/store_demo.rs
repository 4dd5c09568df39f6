use studykit::logging::LogConfig;
use studykit::{add, fib, Record, RecordStore, StoreConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Debug level shows every store mutation
    let _guard = LogConfig::debug().init()?;

    println!("=== Studykit Demo ===\n");

    println!("1. Arithmetic...");
    println!("add(2, 3) = {}", add(2, 3));
    println!("fib(10) = {}", fib(10)?);
    if let Err(e) = fib(-1) {
        println!("fib(-1) failed: {}", e);
    }

    println!("\n2. Creating records...");
    let mut store = RecordStore::with_config(StoreConfig::default().with_name("demo"));
    store.create_item("user:1", &Record::from([("name", "Alice")]));
    store.create_item("user:2", &Record::from([("name", "Bob")]));

    println!("\n3. Updating records...");
    store.update_item("user:1", &Record::from([("age", 30)]));
    let updated = store.update_item("user:3", &Record::from([("age", 40)]));
    println!("update of missing user:3 -> {}", updated);

    println!("\n4. Reading records...");
    for key in store.keys() {
        println!("{} => {:?}", key, store.read_item(&key));
    }

    println!("\n5. Deleting and clearing...");
    println!("delete user:2 -> {}", store.delete_item("user:2"));
    println!("delete user:2 again -> {}", store.delete_item("user:2"));
    store.clear_db();
    println!("records after clear: {}", store.len());

    println!("\n=== Demo Complete ===");
    Ok(())
}
