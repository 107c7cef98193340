use compacting_store::{CompactingStore, Config};

/// Exits with `message` if `condition` is false.
fn check(condition: bool, message: &str) {
    if !condition {
        eprintln!("check failed: {}", message);
        std::process::exit(1);
    }
}

fn main() {
    // Run with `RUST_LOG=trace` to see buffer reallocations.
    env_logger::init();

    let mut store = CompactingStore::new();
    store.add("test");
    store.add_all("val", vec!["123"]);

    println!("{}", store.len());
    check(store.len() == 3, "three values were added");

    println!("---");
    store.for_each(|v| println!("{}", v));

    println!("---");
    let removed = store.remove(1).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    println!("{}", removed.unwrap_or_default());
    check(removed == Some("val"), "index 1 holds \"val\"");

    println!("---");
    store.for_each(|v| println!("{}", v));
    check(store == ["test", "123"], "the gap is closed");

    println!("---");
    println!("{} (capacity {})", store, store.capacity());

    let mut small = CompactingStore::with_config(Config::new().with_default_capacity(1).with_growth_slack(0))
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1);
        });
    for c in "abc".chars() {
        small.add(c);
    }
    println!("{:?} (capacity {})", small, small.capacity());
    check(small.capacity() == 3, "growing without slack allocates exactly");
}
