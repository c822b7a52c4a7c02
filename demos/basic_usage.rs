// ============================================================================
// Basic Usage Example
// ============================================================================

use core_primitives::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Core Primitives Example ===\n");

    // Locale resolved from LC_ALL / LC_NUMERIC / LANG
    let locale = LocaleContext::from_env();
    println!(
        "Active locale: decimal point {:?}, group separator {:?}\n",
        locale.decimal_point, locale.group_separator
    );

    // Permissive parsing
    println!("Parsing...");
    let g = locale.group_separator;
    let d = locale.decimal_point;
    for text in [
        format!("1{g}000{d}5"),
        format!("10{g}00"),
        "a".to_string(),
    ] {
        match permissive_to_double(&text, &locale) {
            Ok(value) => println!("  {:>12} -> {}", text, value),
            Err(err) => println!("  {:>12} -> error: {}", text, err),
        }
    }

    // Precision formatting
    println!("\nFormatting...");
    for (value, precision) in [(5.6783212, 5), (12.2, 10), (12000.0, 1), (12345.0, -1)] {
        println!(
            "  {:<10} @ {:>2} -> {}",
            value,
            precision,
            double_to_string(value, precision)
        );
    }

    // Signal blocking
    println!("\nSignals...");
    let checked = Property::new("toggled", false);
    let spy = Arc::new(SignalSpy::<bool>::new());
    checked.changed().connect(spy.clone());
    checked.changed().connect(Arc::new(LoggingSlot));

    checked.set(true);
    {
        let blocker = SignalBlocker::new(&checked);
        blocker.set(false);
        blocker.set(true);
    }
    while_blocking(&checked).set(false);
    println!(
        "  3 silent changes, {} notification(s), final value {}",
        spy.count(),
        checked.get()
    );

    // Variant ordering
    println!("\nOrdering...");
    let mut values = vec![
        Variant::from("b"),
        Variant::from(vec![Variant::from(5), Variant::from(6)]),
        Variant::from(2.5),
        Variant::Null(VariantKind::String),
        Variant::from(vec![Variant::from(5)]),
        Variant::Invalid,
        Variant::from(2),
    ];
    core_primitives::ordering::sort_variants(&mut values);
    for value in &values {
        println!("  {:<10} {}", value.type_name(), value);
    }
}
