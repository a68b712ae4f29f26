use crate::lookup::LookupKind;
use crate::models::{Product, ProductPayload, RecordId};

/// A form field that may not have been filled in yet.
///
/// `Empty` is distinct from a zero quantity or price.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Entry<T> {
    #[default]
    Empty,
    Value(T),
}

impl<T: Copy> Entry<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Entry::Empty)
    }

    pub fn value(&self) -> Option<T> {
        match self {
            Entry::Empty => None,
            Entry::Value(value) => Some(*value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Sku,
    Name,
    CategoryCode,
    UnitCode,
    StatusCode,
    Quantity,
    Price,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Sku,
        FormField::Name,
        FormField::CategoryCode,
        FormField::UnitCode,
        FormField::StatusCode,
        FormField::Quantity,
        FormField::Price,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Sku => "SKU",
            FormField::Name => "Nombre",
            FormField::CategoryCode => "Categoría",
            FormField::UnitCode => "Unidad",
            FormField::StatusCode => "Estado",
            FormField::Quantity => "Cantidad",
            FormField::Price => "Precio",
        }
    }

    /// Name of the field in the request body.
    pub fn wire_name(&self) -> &'static str {
        match self {
            FormField::Sku => "sku",
            FormField::Name => "nombre",
            FormField::CategoryCode => "cod_categoria",
            FormField::UnitCode => "cod_unidad",
            FormField::StatusCode => "cod_estado",
            FormField::Quantity => "cantidad",
            FormField::Price => "precio",
        }
    }

    pub fn lookup_kind(&self) -> Option<LookupKind> {
        match self {
            FormField::CategoryCode => Some(LookupKind::Category),
            FormField::UnitCode => Some(LookupKind::Unit),
            FormField::StatusCode => Some(LookupKind::Status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormValues {
    pub id: Option<RecordId>,
    pub sku: String,
    pub name: String,
    pub category_code: Entry<RecordId>,
    pub unit_code: Entry<RecordId>,
    pub status_code: Entry<RecordId>,
    pub quantity: Entry<i64>,
    pub price: Entry<f64>,
}

impl FormValues {
    /// Translates a listed product into form shape. The codes come from the
    /// joined reference objects, never from the product's own id or SKU.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            sku: product.sku.clone(),
            name: product.name.clone(),
            category_code: Entry::Value(product.category.id),
            unit_code: Entry::Value(product.unit.id),
            status_code: Entry::Value(product.status.id),
            quantity: Entry::Value(i64::from(product.quantity)),
            // A price the server sent as garbage must be re-entered.
            price: if product.price.is_malformed() {
                Entry::Empty
            } else {
                Entry::Value(product.price.value())
            },
        }
    }

    /// Stores raw input for `field` after applying that field's normalization.
    pub fn apply(&mut self, field: FormField, raw: &str) {
        match field {
            FormField::Sku => self.sku = raw.to_string(),
            FormField::Name => self.name = raw.to_string(),
            FormField::CategoryCode => self.category_code = normalize_code(raw),
            FormField::UnitCode => self.unit_code = normalize_code(raw),
            FormField::StatusCode => self.status_code = normalize_code(raw),
            FormField::Quantity => self.quantity = normalize_quantity(raw),
            FormField::Price => self.price = normalize_price(raw),
        }
    }

    pub fn code(&self, kind: LookupKind) -> Entry<RecordId> {
        match kind {
            LookupKind::Category => self.category_code,
            LookupKind::Unit => self.unit_code,
            LookupKind::Status => self.status_code,
        }
    }

    /// Current value of `field` rendered back as input text.
    pub fn display_text(&self, field: FormField) -> String {
        fn text<T: ToString + Copy>(entry: Entry<T>) -> String {
            entry.value().map(|v| v.to_string()).unwrap_or_default()
        }

        match field {
            FormField::Sku => self.sku.clone(),
            FormField::Name => self.name.clone(),
            FormField::CategoryCode => text(self.category_code),
            FormField::UnitCode => text(self.unit_code),
            FormField::StatusCode => text(self.status_code),
            FormField::Quantity => text(self.quantity),
            FormField::Price => text(self.price),
        }
    }

    /// Text a free-text input should switch to after `raw` was applied to
    /// `field`, or `None` when `raw` already reads as the stored value.
    ///
    /// Clamped and truncated numbers are shown as stored ("-5" becomes "0",
    /// "12abc" becomes "12"), while a number still being typed ("4.", "-",
    /// "1e") is left alone.
    pub fn corrected_input(&self, field: FormField, raw: &str) -> Option<String> {
        let shown_as_stored = match field {
            FormField::Quantity => reads_as(raw, &['+', '-'], self.quantity.value()),
            FormField::Price => reads_as(raw, &['+', '-', '.', 'e', 'E'], self.price.value()),
            _ => true,
        };
        if shown_as_stored {
            None
        } else {
            Some(self.display_text(field))
        }
    }

    /// Builds the request body. `None` while any coded or numeric field is
    /// still empty.
    pub fn to_payload(&self) -> Option<ProductPayload> {
        Some(ProductPayload {
            id: self.id,
            sku: self.sku.clone(),
            name: self.name.clone(),
            category_code: self.category_code.value()?,
            unit_code: self.unit_code.value()?,
            status_code: self.status_code.value()?,
            quantity: self.quantity.value()?,
            price: self.price.value()?,
        })
    }
}

// Whether `raw`, ignoring a trailing run of `unfinished` characters, parses to
// exactly `stored`.
fn reads_as<T>(raw: &str, unfinished: &[char], stored: Option<T>) -> bool
where
    T: std::str::FromStr + PartialEq,
{
    let settled = raw.trim().trim_end_matches(unfinished);
    match settled.parse::<T>() {
        Ok(value) => stored == Some(value),
        Err(_) => settled.is_empty() && stored.is_none(),
    }
}

pub fn normalize_code(raw: &str) -> Entry<RecordId> {
    if raw.is_empty() {
        return Entry::Empty;
    }
    parse_leading_integer(raw).map_or(Entry::Empty, Entry::Value)
}

/// Negative quantities are clamped to zero rather than rejected.
pub fn normalize_quantity(raw: &str) -> Entry<i64> {
    if raw.is_empty() {
        return Entry::Empty;
    }
    parse_leading_integer(raw).map_or(Entry::Empty, |value| Entry::Value(value.max(0)))
}

/// Negative prices are clamped to zero rather than rejected.
pub fn normalize_price(raw: &str) -> Entry<f64> {
    if raw.is_empty() {
        return Entry::Empty;
    }
    parse_leading_float(raw).map_or(Entry::Empty, |value| {
        Entry::Value(if value <= 0.0 { 0.0 } else { value })
    })
}

// Reads an optional sign and the digits that follow it, ignoring any trailing
// text: "12abc" is 12, "abc" is nothing.
fn parse_leading_integer(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let sign_len = usize::from(text.starts_with(['-', '+']));
    let digits = text[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len() - sign_len);
    if digits == 0 {
        return None;
    }
    text[..sign_len + digits].parse().ok()
}

// Same prefix rule for decimals, with an optional exponent: "1e3" is 1000,
// "2e" is 2.
fn parse_leading_float(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = usize::from(text.starts_with(['-', '+']));
    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&byte) = bytes.get(end) {
        match byte {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'-' | b'+')) {
            exponent_end += 1;
        }
        let digits_start = exponent_end;
        while matches!(bytes.get(exponent_end), Some(b'0'..=b'9')) {
            exponent_end += 1;
        }
        if exponent_end > digits_start {
            end = exponent_end;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Price, Status, Unit};

    fn sample_product() -> Product {
        Product {
            id: 41,
            sku: "ABA-001".to_string(),
            name: "Arroz 1kg".to_string(),
            quantity: 12,
            price: Price::new(4.2),
            category: Category { id: 7, name: "Abarrotes".to_string(), detail: None },
            unit: Unit { id: 3, name: "Bolsa".to_string(), detail: None },
            status: Status { id: 2, name: "Activo".to_string(), detail: None },
        }
    }

    #[test]
    fn test_codes_parse_or_stay_empty() {
        assert_eq!(normalize_code(""), Entry::Empty);
        assert_eq!(normalize_code("4"), Entry::Value(4));
        assert_eq!(normalize_code("12abc"), Entry::Value(12));
        assert_eq!(normalize_code("abc"), Entry::Empty);
    }

    #[test]
    fn test_negative_numbers_clamp_to_zero() {
        assert_eq!(normalize_quantity("-5"), Entry::Value(0));
        assert_eq!(normalize_quantity("7"), Entry::Value(7));
        assert_eq!(normalize_quantity("7.9"), Entry::Value(7));
        assert_eq!(normalize_price("-2.5"), Entry::Value(0.0));
        assert_eq!(normalize_price("2.75"), Entry::Value(2.75));
        assert_eq!(normalize_price("3."), Entry::Value(3.0));
        assert_eq!(normalize_price("."), Entry::Empty);
    }

    #[test]
    fn test_zero_is_not_empty() {
        assert_eq!(normalize_quantity("0"), Entry::Value(0));
        assert_eq!(normalize_price("0"), Entry::Value(0.0));
        assert!(normalize_price("").is_empty());
    }

    #[test]
    fn test_edit_values_take_codes_from_references() {
        let values = FormValues::from_product(&sample_product());
        assert_eq!(values.id, Some(41));
        assert_eq!(values.category_code, Entry::Value(7));
        assert_eq!(values.unit_code, Entry::Value(3));
        assert_eq!(values.status_code, Entry::Value(2));
        assert_eq!(values.quantity, Entry::Value(12));
        assert_eq!(values.price, Entry::Value(4.2));
    }

    #[test]
    fn test_malformed_price_is_left_empty_for_edit() {
        let mut product = sample_product();
        product.price = Price::coerce("gratis");
        assert!(FormValues::from_product(&product).price.is_empty());
    }

    #[test]
    fn test_text_fields_are_not_normalized() {
        let mut values = FormValues::default();
        values.apply(FormField::Sku, "  ab-01 ");
        values.apply(FormField::Name, "Leche");
        assert_eq!(values.sku, "  ab-01 ");
        assert_eq!(values.display_text(FormField::Name), "Leche");
    }

    #[test]
    fn test_exponent_is_part_of_the_price() {
        assert_eq!(normalize_price("1e3"), Entry::Value(1000.0));
        assert_eq!(normalize_price("1.5E-1"), Entry::Value(0.15));
        assert_eq!(normalize_price("2e"), Entry::Value(2.0));
        assert_eq!(normalize_price("2e+x"), Entry::Value(2.0));
        assert_eq!(normalize_price("1e999"), Entry::Empty);
    }

    #[test]
    fn test_clamped_and_truncated_input_is_corrected() {
        let mut values = FormValues::default();

        values.apply(FormField::Quantity, "-5");
        assert_eq!(values.corrected_input(FormField::Quantity, "-5"), Some("0".to_string()));

        values.apply(FormField::Quantity, "12abc");
        assert_eq!(values.corrected_input(FormField::Quantity, "12abc"), Some("12".to_string()));

        values.apply(FormField::Price, "-2.5");
        assert_eq!(values.corrected_input(FormField::Price, "-2.5"), Some("0".to_string()));

        values.apply(FormField::Price, "abc");
        assert_eq!(values.corrected_input(FormField::Price, "abc"), Some(String::new()));
    }

    #[test]
    fn test_numbers_being_typed_are_left_alone() {
        let mut values = FormValues::default();

        for partial in ["", "-", ".", "4.", "4.50", "1e", "1e-", "1e3"] {
            values.apply(FormField::Price, partial);
            assert_eq!(values.corrected_input(FormField::Price, partial), None, "{partial:?}");
        }

        values.apply(FormField::Quantity, "7");
        assert_eq!(values.corrected_input(FormField::Quantity, "7"), None);
        values.apply(FormField::Name, "  Leche ");
        assert_eq!(values.corrected_input(FormField::Name, "  Leche "), None);
    }

    #[test]
    fn test_payload_requires_every_number() {
        let mut values = FormValues::from_product(&sample_product());
        assert!(values.to_payload().is_some());
        values.apply(FormField::UnitCode, "");
        assert!(values.to_payload().is_none());
    }
}
