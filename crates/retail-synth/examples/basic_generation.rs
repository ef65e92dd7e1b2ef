//! Basic Generation Example
//!
//! Generates the reference dataset, prints a few rows and the
//! sales/spend correlation.
//!
//! Run with: `cargo run -p retail-synth --example basic_generation`

use retail_synth::prelude::*;

fn main() -> Result<()> {
    let dataset = generate_default()?;

    println!("=== Reference dataset ({} rows) ===", dataset.len());
    for record in dataset.head(5) {
        println!(
            "{}  sales={:>8.2}  spend={:>8.2}  visitors={:>5}  temp={:>5.1}  inventory={:>5}",
            record.date,
            record.daily_sales_revenue,
            record.marketing_spend,
            record.website_visitors,
            record.avg_temperature_c,
            record.inventory_units,
        );
    }
    println!();

    let r = pearson(&dataset.daily_sales_revenue(), &dataset.marketing_spend())?;
    println!("corr(sales, marketing_spend) = {r:.4}");

    // A different seed gives a different walk.
    let other = generate(DEFAULT_ROW_COUNT, REFERENCE_SEED + 1)?;
    println!(
        "last spend: seed {} -> {:.2}, seed {} -> {:.2}",
        REFERENCE_SEED,
        dataset.marketing_spend()[dataset.len() - 1],
        REFERENCE_SEED + 1,
        other.marketing_spend()[other.len() - 1],
    );

    Ok(())
}
