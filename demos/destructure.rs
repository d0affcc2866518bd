use std::{collections::HashMap, env};

use optional::{AbsentValue, Optional};

fn greeting(name: Optional<&str>) -> String {
    match name {
        Optional::Some(name) if name.is_empty() => {
            "Hello, whoever you are!".into()
        }
        Optional::Some(name) => format!("Hello, {name}!"),
        Optional::None => "Hello, world!".into(),
    }
}

fn main() -> Result<(), AbsentValue> {
    #[cfg(feature = "logger")]
    env_logger::init();

    let ports = HashMap::from([("http", 80u16), ("https", 443)]);

    // A lookup that might fail, folded into an `Optional`
    for scheme in ["http", "https", "gopher"] {
        match Optional::of_nullable(ports.get(scheme)) {
            Optional::Some(port) => println!("{scheme}: {port}"),
            Optional::None => println!("{scheme}: unknown"),
        }
    }

    // A holder that might be missing altogether
    let arg = env::args().nth(1);
    let configured = arg
        .as_deref()
        .map(|arg| if arg == "-" { None } else { Some(arg) });
    println!("{}", greeting(Optional::of_optional(configured)));

    let https = Optional::of_nullable(ports.get("https")).into_value()?;
    println!("https is on port {https}");

    Ok(())
}
