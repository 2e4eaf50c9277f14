//! # Seed Data Generator
//!
//! Populates a database file with a demo catalog for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p kardex-db --bin seed
//!
//! # Specify database path
//! cargo run -p kardex-db --bin seed -- --db ./data/kardex.db
//! ```
//!
//! Creates a handful of categories and brands and one product per
//! (category, brand) pair with generated ids, deterministic prices and
//! stock levels.

use std::env;

use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use kardex_core::{Brand, Category, Product};
use kardex_db::{Database, DbConfig};

/// Demo categories.
const CATEGORIES: &[&str] = &["Peripherals", "Storage", "Networking", "Audio", "Displays"];

/// Demo brands.
const BRANDS: &[&str] = &["Marsgaming", "Corsair", "Logitech", "Kingston", "TP-Link"];

/// Product name stems, one list per category.
const PRODUCT_NAMES: &[&[&str]] = &[
    &["Keyboard", "Mouse", "Gamepad", "Webcam"],
    &["SSD 512GB", "HDD 2TB", "USB Stick 64GB", "MicroSD 128GB"],
    &["Router AX1800", "Switch 8-Port", "USB WiFi Adapter", "Mesh Node"],
    &["Headset", "Speakers 2.1", "Microphone", "Sound Card"],
    &["Monitor 24\"", "Monitor 27\"", "Portable Screen", "VESA Arm"],
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./kardex_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Kardex Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./kardex_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Kardex Seed Data Generator");
    println!("==========================");
    println!("Database: {db_path}");
    println!();

    // Connect to database (runs migrations)
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("Connected, migrations applied");

    // Skip when the catalog is already populated
    let existing = db.products().count().await?;
    if existing > 0 {
        println!("Database already has {existing} products, skipping seed.");
        println!("Delete the database file to regenerate.");
        return Ok(());
    }

    println!("Seeding catalog...");

    let mut categories = Vec::new();
    for name in CATEGORIES {
        let category = Category::new(Uuid::new_v4().to_string(), *name);
        db.categories().insert(&category).await?;
        categories.push(category);
    }

    let mut brands = Vec::new();
    for name in BRANDS {
        let brand = Brand::new(Uuid::new_v4().to_string(), *name);
        db.brands().insert(&brand).await?;
        brands.push(brand);
    }

    let mut generated = 0;
    for (category_idx, category) in categories.iter().enumerate() {
        for (name_idx, stem) in PRODUCT_NAMES[category_idx].iter().enumerate() {
            let brand = &brands[(category_idx + name_idx) % brands.len()];
            let seed = category_idx * 10 + name_idx;

            let product = Product::new(
                Uuid::new_v4().to_string(),
                format!("{} {}", brand.name, stem),
                category.clone(),
                (seed % 40) as i64 + 1,
                format!("{} by {}", stem, brand.name),
                4.99 + seed as f64 * 3.5,
                brand.clone(),
            );

            db.products().insert(&product).await?;
            generated += 1;
        }
    }

    println!();
    println!(
        "Seeded {} categories, {} brands, {} products",
        categories.len(),
        brands.len(),
        generated
    );

    Ok(())
}
