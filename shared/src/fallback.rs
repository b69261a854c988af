//! Built-in data used when the JSON data files cannot be fetched, for
//! example when the site is opened straight from disk.

use crate::calendar::AvailabilitySet;
use crate::catalog::{Product, ProductCatalog};

/// Mirrors `data/availability.json` as shipped
pub const FALLBACK_AVAILABLE_DATES: [&str; 8] = [
    "2025-09-01",
    "2025-09-02",
    "2025-09-03",
    "2025-09-05",
    "2025-09-07",
    "2025-09-10",
    "2025-09-15",
    "2025-09-20",
];

pub fn fallback_availability() -> AvailabilitySet {
    AvailabilitySet::new(FALLBACK_AVAILABLE_DATES)
}

fn product(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
    price: f64,
    image: &str,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        price,
        image: image.to_string(),
    }
}

pub fn fallback_products() -> Vec<Product> {
    vec![
        product(
            "kabel-01",
            "USB‑C Kabel 1 m",
            "Zubehör",
            "Hochwertiges USB‑C Kabel mit 1 m Länge für schnelle Datenübertragung und zuverlässiges Laden.",
            9.99,
            "images/tools.svg",
        ),
        product(
            "maus-01",
            "Kabellose Maus",
            "Zubehör",
            "Ergonomische kabellose Maus mit hoher Präzision und langer Batterielaufzeit.",
            24.99,
            "images/laptop-code.svg",
        ),
        product(
            "ssd-01",
            "256 GB SSD",
            "Ersatzteile",
            "Schnelle Solid‑State‑Disk für einen deutlichen Leistungsschub Ihres Computers.",
            49.99,
            "images/database.svg",
        ),
        product(
            "ram-01",
            "8 GB DDR4 RAM",
            "Ersatzteile",
            "Arbeitsspeicher für flüssige Performance bei alltäglichen Aufgaben und Multitasking.",
            34.99,
            "images/tools.svg",
        ),
        product(
            "office-01",
            "Office Suite Lizenz",
            "Software & Lizenzen",
            "Umfangreiche Office‑Suite für effizientes Arbeiten in Beruf und Freizeit.",
            119.99,
            "images/laptop-code.svg",
        ),
        product(
            "security-01",
            "Sicherheitssoftware Jahreslizenz",
            "Software & Lizenzen",
            "Schützen Sie Ihre Geräte vor Viren, Malware und Phishing mit einer bewährten Sicherheitslösung.",
            59.99,
            "images/database.svg",
        ),
        product(
            "gutschein-01",
            "Service‑Gutschein 1 h",
            "Service‑Gutscheine",
            "Verschenken Sie professionelle IT‑Hilfe: Gutschein für eine Stunde Support Ihrer Wahl.",
            39.9,
            "images/tools.svg",
        ),
        product(
            "gutschein-02",
            "Service‑Gutschein 3 h",
            "Service‑Gutscheine",
            "Drei Stunden geballtes IT‑Know‑how – ideal für größere Projekte oder umfassende Beratung.",
            99.9,
            "images/laptop-code.svg",
        ),
    ]
}

/// Catalog built from [`fallback_products`] with derived categories
pub fn fallback_catalog() -> ProductCatalog {
    ProductCatalog::new(fallback_products(), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_availability() {
        let set = fallback_availability();
        assert_eq!(set.len(), FALLBACK_AVAILABLE_DATES.len());
        assert!(set.contains("2025-09-01"));
        assert!(!set.contains("2025-09-04"));
    }

    #[test]
    fn test_fallback_catalog_categories_in_first_seen_order() {
        let catalog = fallback_catalog();
        assert_eq!(catalog.products().len(), 8);
        assert_eq!(
            catalog.categories(),
            &["Zubehör", "Ersatzteile", "Software & Lizenzen", "Service‑Gutscheine"]
        );
    }

    #[test]
    fn test_voucher_descriptions() {
        let products = fallback_products();
        let description = |id: &str| {
            products
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.description.as_str())
        };

        let one_hour =
            "Verschenken Sie professionelle IT‑Hilfe: Gutschein für eine Stunde Support Ihrer Wahl.";
        let three_hours =
            "Drei Stunden geballtes IT‑Know‑how – ideal für größere Projekte oder umfassende Beratung.";
        assert_eq!(description("gutschein-01"), Some(one_hour));
        assert_eq!(description("gutschein-02"), Some(three_hours));
    }
}
