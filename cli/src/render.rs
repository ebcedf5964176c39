//! Plain-text rendering of catalog state.

use catalog_core::Product;

pub fn product_row(product: &Product) -> String {
    let mut row = format!(
        "#{:<4} {} | {} | {}",
        product.id,
        product.title,
        product.brand,
        product.formatted_price()
    );
    let badges = product.badges();
    if !badges.is_empty() {
        let labels: Vec<String> = badges.iter().map(ToString::to_string).collect();
        row.push_str(&format!(" [{}]", labels.join(", ")));
    }
    row
}

pub fn product_detail(product: &Product) -> String {
    let mut out = format!("{}\n{}", product.title, product.formatted_price());
    for badge in product.badges() {
        out.push_str(&format!("  {badge}"));
    }
    out.push('\n');

    let color = capitalize(&product.color);
    let category = capitalize(&product.category);
    for (label, value) in [
        ("Brand", product.brand.as_str()),
        ("Model", product.model.as_str()),
        ("Color", color.as_str()),
        ("Category", category.as_str()),
        ("Image", product.image.as_str()),
    ] {
        out.push_str(&format!("{label:<9}{value}\n"));
    }
    out.push_str(&format!("\n{}\n", product.description));
    out
}

/// Uppercase the first letter of each word.
fn capitalize(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
