//! Wombat background inspector CLI
//!
//! Decomposes a `background` shorthand declaration value into its longhands
//! for testing and debugging.

use anyhow::{Context, Result};
use std::env;
use wombat_css::BackgroundProperty;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: wombat '<background value>'");
        eprintln!("       wombat 'url(a.png) top / cover no-repeat, bottom right / contain red'");
        std::process::exit(1);
    }

    let input = args[1..].join(" ");

    let mut background = BackgroundProperty::new();
    background
        .try_set_text(&input)
        .with_context(|| format!("invalid background value: {input}"))?;

    println!("=== Background ({} layers) ===", background.layer_count());
    for layer in 0..background.layer_count() {
        println!("layer {layer}:");
        println!("  image:      {:?}", background.images()[layer]);
        println!("  position:   {:?}", background.positions()[layer]);
        println!("  size:       {:?}", background.sizes()[layer]);
        println!(
            "  repeat:     {} {}",
            background.horizontal_repeats()[layer],
            background.vertical_repeats()[layer]
        );
        println!("  attachment: {}", background.attachments()[layer]);
        println!("  origin:     {}", background.origins()[layer]);
        println!("  clip:       {}", background.clips()[layer]);
    }
    println!("color: {}", background.color().to_hex_string());

    Ok(())
}
