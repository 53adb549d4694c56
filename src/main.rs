use objstream::{decode, register_builtin_objects, ObjectRegistry};

const INPUT: &str = "\
type_name: Apple
color: Red
---
type_name: Banana
ripe: true
";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut registry = ObjectRegistry::new();
    register_builtin_objects(&mut registry);

    match decode(INPUT.as_bytes(), &registry) {
        Ok(objects) => {
            for object in &objects {
                println!("{object:?}");
            }
        }
        Err(err) => {
            eprintln!("unable to decode objects: {err}");
            std::process::exit(1);
        }
    }
}
