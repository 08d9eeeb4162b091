//! Static product catalog.
//!
//! The prototype ships a fixed in-memory data set; there is no inventory
//! backend. Filtering covers what the home screen needs: category tabs plus
//! case-insensitive name search.

/// Category tab index that shows the whole catalog.
pub const CATEGORY_ALL: usize = 0;

/// A category tab on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: &'static str,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    /// Unit price in whole rupiah.
    pub price: u64,
    pub rating: f32,
    /// Estimated delivery time in minutes.
    pub delivery_minutes: u32,
    pub sold: u32,
    pub calories: Option<u32>,
    pub description: Option<&'static str>,
}

/// Category strip shown on the home screen. Index 0 shows everything.
pub fn categories() -> &'static [Category] {
    &[
        Category { id: 0, name: "Semua" },
        Category { id: 1, name: "Makanan" },
        Category { id: 2, name: "Minuman" },
        Category { id: 3, name: "Kerajinan" },
        Category { id: 4, name: "Fashion" },
        Category { id: 5, name: "Elektronik" },
        Category { id: 6, name: "Lainnya" },
    ]
}

pub fn products() -> &'static [Product] {
    &[
        Product {
            id: 1,
            name: "Nasi Goreng Spesial",
            price: 15_000,
            rating: 4.5,
            delivery_minutes: 20,
            sold: 120,
            calories: Some(520),
            description: Some(
                "Nasi goreng dengan telur, ayam suwir, dan kerupuk. Dimasak \
                 setelah dipesan.",
            ),
        },
        Product {
            id: 2,
            name: "Es Teh Manis",
            price: 5_000,
            rating: 4.3,
            delivery_minutes: 15,
            sold: 200,
            calories: Some(90),
            description: None,
        },
        Product {
            id: 3,
            name: "Gantungan Kunci Kampus",
            price: 10_000,
            rating: 4.7,
            delivery_minutes: 30,
            sold: 50,
            calories: None,
            description: Some("Gantungan kunci akrilik dengan logo kampus."),
        },
        Product {
            id: 4,
            name: "Kaos Kampus",
            price: 75_000,
            rating: 4.9,
            delivery_minutes: 45,
            sold: 80,
            calories: None,
            description: Some("Kaos katun combed 30s, sablon plastisol."),
        },
        Product {
            id: 5,
            name: "Mie Ayam Bakso",
            price: 20_000,
            rating: 4.6,
            delivery_minutes: 25,
            sold: 150,
            calories: Some(610),
            description: None,
        },
        Product {
            id: 6,
            name: "Jus Alpukat",
            price: 12_000,
            rating: 4.4,
            delivery_minutes: 10,
            sold: 90,
            calories: Some(230),
            description: None,
        },
        Product {
            id: 7,
            name: "Topi Kampus",
            price: 35_000,
            rating: 4.2,
            delivery_minutes: 35,
            sold: 40,
            calories: None,
            description: None,
        },
        Product {
            id: 8,
            name: "Stiker Kampus",
            price: 3_000,
            rating: 4.8,
            delivery_minutes: 5,
            sold: 300,
            calories: None,
            description: Some("Stiker vinyl tahan air, satu set isi lima."),
        },
    ]
}

pub fn find_product(id: u32) -> Option<&'static Product> {
    products().iter().find(|p| p.id == id)
}

/// Returns true if `product` belongs to the category at `index`.
///
/// Membership is by name keyword; the data set never grew real category
/// assignments.
fn matches_category(product: &Product, index: usize) -> bool {
    let name = product.name.to_lowercase();
    match index {
        CATEGORY_ALL => true,
        1 => name.contains("nasi") || name.contains("mie"),
        2 => name.contains("teh") || name.contains("jus"),
        3 => name.contains("gantungan") || name.contains("stiker"),
        4 => name.contains("kaos") || name.contains("topi"),
        _ => false,
    }
}

/// Filters the catalog by search query and category tab.
///
/// The query matches case-insensitively anywhere in the product name; a
/// blank query matches everything. Both filters compose.
pub fn filter_products(query: &str, category_index: usize) -> Vec<&'static Product> {
    let query = query.trim().to_lowercase();
    products()
        .iter()
        .filter(|product| {
            let matches_search =
                query.is_empty() || product.name.to_lowercase().contains(&query);
            matches_search && matches_category(product, category_index)
        })
        .collect()
}

/// Formats a rupiah amount with thousands separators, e.g. `Rp 15.000`.
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {grouped}")
}
