//! Wire records for the product and reference endpoints.
//!
//! The list endpoint returns products with their category, unit and status
//! joined in as objects, while create/update take bare reference ids. Both
//! shapes live here so the asymmetry is visible in one place.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub type RecordId = i64;

/// Anything that can be projected into a dropdown option.
pub trait ReferenceRecord {
    fn id(&self) -> RecordId;
    fn display_name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    #[serde(rename = "nombre_categoria")]
    pub name: String,
    #[serde(rename = "detalle_categoria", default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: RecordId,
    #[serde(rename = "unidad")]
    pub name: String,
    #[serde(rename = "detalle", default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub id: RecordId,
    #[serde(rename = "estado")]
    pub name: String,
    #[serde(rename = "detalle_estado", default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ReferenceRecord for Category {
    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl ReferenceRecord for Unit {
    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl ReferenceRecord for Status {
    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Unit price as sent by the server.
///
/// The API serializes decimals either as JSON numbers or as strings such as
/// `"3.50"`. Strings are coerced to a number on decode; anything that does not
/// coerce to a finite value becomes `0.0` with `malformed` set so the UI never
/// has to format a NaN.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Price {
    value: f64,
    malformed: bool,
}

impl Price {
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self { value, malformed: false }
        } else {
            Self { value: 0.0, malformed: true }
        }
    }

    /// Coerces a textual price the way a lenient numeric cast would: blank is
    /// zero, surrounding whitespace is ignored.
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::new(0.0);
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Self::new(value),
            Err(_) => {
                log::warn!("⚠️ [MODEL] Malformed price {:?} coerced to 0", raw);
                Self { value: 0.0, malformed: true }
            }
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_malformed(&self) -> bool {
        self.malformed
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawPrice::deserialize(deserializer)? {
            RawPrice::Number(value) => Price::new(value),
            RawPrice::Text(text) => Price::coerce(&text),
        })
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.value)
    }
}

/// A product as returned by `GET /api/productos/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub sku: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "precio")]
    pub price: Price,
    #[serde(rename = "categoria")]
    pub category: Category,
    #[serde(rename = "unidad")]
    pub unit: Unit,
    #[serde(rename = "estado")]
    pub status: Status,
}

/// Body for `POST /api/productos/` and `PUT /api/productos/{id}/`.
///
/// References travel as bare ids here, never as the joined objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub sku: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "cod_categoria")]
    pub category_code: RecordId,
    #[serde(rename = "cod_unidad")]
    pub unit_code: RecordId,
    #[serde(rename = "cod_estado")]
    pub status_code: RecordId,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "precio")]
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_decodes_string_price() {
        let product: Product = serde_json::from_value(json!({
            "id": 1,
            "sku": "A1",
            "nombre": "Agua",
            "cantidad": 10,
            "precio": "3.50",
            "categoria": {"id": 2, "nombre_categoria": "Bebidas"},
            "unidad": {"id": 1, "unidad": "Botella", "detalle": "600ml"},
            "estado": {"id": 3, "estado": "Activo", "detalle_estado": null}
        }))
        .unwrap();

        assert_eq!(product.price.value(), 3.5);
        assert!(!product.price.is_malformed());
        assert_eq!(product.category.id, 2);
        assert_eq!(product.unit.detail.as_deref(), Some("600ml"));
        assert!(product.status.detail.is_none());
    }

    #[test]
    fn test_malformed_price_falls_back_to_zero() {
        let price: Price = serde_json::from_value(json!("abc")).unwrap();
        assert_eq!(price.value(), 0.0);
        assert!(price.is_malformed());

        let blank: Price = serde_json::from_value(json!("  ")).unwrap();
        assert_eq!(blank.value(), 0.0);
        assert!(!blank.is_malformed());

        let numeric: Price = serde_json::from_value(json!(12.25)).unwrap();
        assert_eq!(numeric.value(), 12.25);
    }

    #[test]
    fn test_product_without_joined_reference_is_rejected() {
        let result = serde_json::from_value::<Product>(json!({
            "id": 1,
            "sku": "A1",
            "nombre": "Agua",
            "cantidad": 10,
            "precio": 3.5,
            "categoria": 2,
            "unidad": {"id": 1, "unidad": "Botella"},
            "estado": {"id": 3, "estado": "Activo"}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_payload_uses_bare_codes() {
        let payload = ProductPayload {
            id: None,
            sku: "A1".to_string(),
            name: "Agua".to_string(),
            category_code: 2,
            unit_code: 1,
            status_code: 3,
            quantity: 10,
            price: 3.5,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "sku": "A1",
                "nombre": "Agua",
                "cod_categoria": 2,
                "cod_unidad": 1,
                "cod_estado": 3,
                "cantidad": 10,
                "precio": 3.5
            })
        );
    }
}
