#![forbid(unsafe_code)]

//! Trellis demo showcase.
//!
//! Builds the starter kit's concrete tables and prints what the resolvers
//! make of them: button class lists, localized route paths, formatted
//! messages, and slugs.
//!
//! # Running
//!
//! ```sh
//! cargo run -p trellis-demo
//! ```
//!
//! Set `RUST_LOG=debug` to watch the resolvers log fallback decisions.

mod data;

use std::error::Error;

use trellis_style::VariantRequest;
use trellis_text::slugify;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let registry = data::registry()?;
    let table = data::locale_table()?;
    let catalog = data::message_catalog();
    tracing::info!(
        components = registry.len(),
        locales = table.locales().len(),
        "starter tables built"
    );

    println!("== Button class lists ==");
    for (label, request) in [
        ("default", VariantRequest::new()),
        ("outline", VariantRequest::new().with("variant", "outline")),
        (
            "destructive lg",
            VariantRequest::new()
                .with("variant", "destructive")
                .with("size", "lg"),
        ),
        ("icon ghost", VariantRequest::new().with("variant", "ghost").with("size", "icon")),
    ] {
        println!("{label:>14}: {}", registry.resolve("button", &request)?);
    }

    println!();
    println!("== Localized routes ==");
    let segments = [("collectionId", "42"), ("slug", "summer-2025")];
    for route in ["pricing", "onboarding", "memories-detail", "sign-up"] {
        for (locale, path) in table.resolve_all(route, &segments)? {
            println!("{route:>16} [{locale}]: {path}");
        }
    }

    println!();
    println!("== Messages ==");
    for locale in ["en", "nl"] {
        let welcome = catalog
            .format(locale, "account.profile.welcome_to", &[("appName", "Trellis")])
            .unwrap_or_default();
        println!("{locale}: {welcome}");
        for count in [0, 1, 3] {
            let memories = catalog
                .format_count(locale, "account.memories", count, &[])
                .unwrap_or_default();
            println!("{locale}: {memories}");
        }
    }

    println!();
    println!("== Translation coverage ==");
    let report = catalog.coverage();
    for coverage in &report.locales {
        println!(
            "{}: {}/{} keys ({:.0}%)",
            coverage.locale, coverage.present, report.total_keys, coverage.coverage_percent
        );
    }

    println!();
    println!("== Slugs ==");
    for title in ["  Hello, World!  ", "Zomer in Amsterdam, 2025", "A--B"] {
        println!("{title:?} -> {:?}", slugify(title));
    }

    Ok(())
}
