use status_registry::StatusRegistry;

// Usage: cargo run --example lookup -- 200 306 abc
// Set RUST_LOG=debug to see why a code was rejected.
fn main() {
    env_logger::init();

    let registry = StatusRegistry::global();

    for arg in std::env::args().skip(1) {
        match registry.get_reason(&arg) {
            Ok(reason) => {
                let class = registry
                    .class(&arg)
                    .map(|class| class.to_string())
                    .unwrap_or_default();
                println!("{arg} {reason} ({class})");
            }
            Err(err) => eprintln!("{err}"),
        }
    }
}
