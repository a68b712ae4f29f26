//! Formatting helpers for the product table.

use crate::models::Price;

pub const CURRENCY_PREFIX: &str = "S/";
pub const MISSING_LABEL: &str = "—";

/// `S/ 3.50`
pub fn format_price(price: &Price) -> String {
    format!("{} {:.2}", CURRENCY_PREFIX, price.value())
}

pub fn reference_label(name: &str) -> &str {
    if name.trim().is_empty() {
        MISSING_LABEL
    } else {
        name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    BestSeller,
    Pending,
    Active,
}

impl StatusBadge {
    pub fn classify(status_name: &str) -> Self {
        match fold_accents(status_name.trim()).as_str() {
            "mas vendido" => StatusBadge::BestSeller,
            "pendiente" => StatusBadge::Pending,
            _ => StatusBadge::Active,
        }
    }
}

// Lower-cases and drops the acute/diaeresis marks used in Spanish.
fn fold_accents(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}
