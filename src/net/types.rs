//! Wire types for the cart endpoints.
//!
//! DESIGN
//! ======
//! Requests go out as form fields (`product_id`, `cantidad`) because the
//! server reads them from its form parser; responses come back as JSON.
//! Response decoding is lenient about missing `message` and extra fields so
//! a slightly different server build does not turn into a transport error.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::error::CartError;

/// Quantity used when the caller does not supply one.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Body of the cart-count endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCountResponse {
    pub count: u32,
}

/// Add/update/remove payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationRequest {
    pub product_id: String,
    /// Absent for remove. Not validated before sending; the server owns
    /// quantity rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cantidad: Option<u32>,
}

impl MutationRequest {
    pub fn with_quantity(product_id: impl Into<String>, cantidad: u32) -> Self {
        Self { product_id: product_id.into(), cantidad: Some(cantidad) }
    }

    pub fn product_only(product_id: impl Into<String>) -> Self {
        Self { product_id: product_id.into(), cantidad: None }
    }

    /// Form fields in submission order.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("product_id", self.product_id.clone())];
        if let Some(cantidad) = self.cantidad {
            fields.push(("cantidad", cantidad.to_string()));
        }
        fields
    }
}

/// Response to add/update/remove.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    /// Only sent by remove.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_count: Option<u32>,
}

/// Decode a JSON response body the way `fetch().json()` would: any body that
/// does not parse as `T` is a transport-tier failure.
///
/// # Errors
///
/// Returns [`CartError::Decode`] naming `path` when the body is not valid JSON
/// for `T`.
pub fn decode_body<T>(path: &str, body: &str) -> Result<T, CartError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_str(body).map_err(|e| CartError::decode(path, e))
}

/// Parse a quantity the way `parseInt` does: optional surrounding whitespace,
/// an optional `+`, then leading decimal digits. Anything after the digits is
/// ignored. Returns `None` when there are no digits or the value overflows.
pub fn parse_quantity(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    unsigned.get(..digits_len)?.parse::<u32>().ok()
}

/// Convert a quantity handed over as a JavaScript number. Fractions are
/// truncated like `parseInt`; `NaN`, infinities, negatives, and values past
/// `u32::MAX` give `None`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn quantity_from_number(value: f64) -> Option<u32> {
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value.trunc() as u32)
}
