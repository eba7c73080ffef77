//! Validates a hex metadata payload and prints what it contains.
//!
//! ```text
//! cargo run --example inspect_metadata -- 7B226163223A2264656669222C...
//! ```

use mpt_metadata::{AdditionalInfo, MPTokenMetadata, decode_metadata, validate_metadata};

fn print_metadata(md: &MPTokenMetadata) {
    println!("Ticker:      {}", md.ticker);
    println!("Name:        {}", md.name);
    if let Some(desc) = &md.desc {
        let preview: String = desc.chars().take(80).collect();
        if desc.chars().count() > 80 {
            println!("Description: {}...", preview);
        } else {
            println!("Description: {}", preview);
        }
    }
    println!("Icon:        {}", md.icon);
    match md.asset_subclass {
        Some(sub) => println!("Asset class: {} / {}", md.asset_class.as_str(), sub.as_str()),
        None => println!("Asset class: {}", md.asset_class.as_str()),
    }
    println!("Issuer:      {}", md.issuer_name);

    if let Some(uris) = &md.uris {
        println!("\n=== URIs ({}) ===", uris.len());
        for uri in uris {
            println!("  [{}] {} -> {}", uri.category.as_str(), uri.title, uri.uri);
        }
    }

    match &md.additional_info {
        Some(AdditionalInfo::Text(s)) => println!("\nAdditional info: {}", s),
        Some(AdditionalInfo::Map(m)) => {
            println!("\n=== Additional info ({} keys) ===", m.len());
            for (k, v) in m {
                println!("  {}: {}", k, v);
            }
        }
        None => {}
    }
}

fn main() {
    let input = std::env::args()
        .nth(1)
        .expect("usage: inspect_metadata <hex>");

    println!("Input: {} hex chars", input.len());

    let errors = validate_metadata(&input);
    if errors.is_empty() {
        println!("Valid XLS-89 metadata\n");
    } else {
        println!("\n=== Validation errors ({}) ===", errors.len());
        for err in &errors {
            println!("  [{}] {}", err.kind().code(), err);
        }
        println!();
    }

    match decode_metadata(&input) {
        Ok(md) => print_metadata(&md),
        Err(e) => println!("Decode failed: {}", e),
    }
}
