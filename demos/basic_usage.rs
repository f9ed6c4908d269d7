// ============================================================================
// Basic Usage Example
// ============================================================================

use observable_fixed::domain::DIAGNOSTICS_ENV_VAR;
use observable_fixed::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // FIXED_DIAGNOSTICS picks the sink; the exercise prints to the console
    let config = if std::env::var_os(DIAGNOSTICS_ENV_VAR).is_some() {
        DiagnosticsConfig::from_env().unwrap_or_else(|err| {
            eprintln!("{}", err);
            std::process::exit(2);
        })
    } else {
        DiagnosticsConfig::exercise()
    };
    let handler = config.build_handler();

    println!("=== Construction and Assignment ===\n");
    {
        let a = Fixed::new(Arc::clone(&handler));
        let b = a.clone();
        let mut c = Fixed::new(Arc::clone(a.handler()));

        c.assign(&b);

        println!("{}", a.raw_bits());
        println!("{}", b.raw_bits());
        println!("{}", c.raw_bits());
    }

    println!("\n=== Conversions ===\n");
    {
        let mut a = Fixed::new(Arc::clone(&handler));
        let b = Fixed::from_int(10, Arc::clone(&handler));
        let c = Fixed::from_float(42.42, Arc::clone(&handler));
        let d = b.clone();

        a.assign(&Fixed::from_float(1234.4321, Arc::clone(&handler)));

        println!("a is {}", a);
        println!("b is {}", b);
        println!("c is {}", c);
        println!("d is {}", d);

        println!("a is {} as integer", a.to_int());
        println!("b is {} as integer", b.to_int());
        println!("c is {} as integer", c.to_int());
        println!("d is {} as integer", d.to_int());
    }
}
