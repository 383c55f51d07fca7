//! Quantity stepper buttons.
//!
//! Both operations read the input's integer value with `parseInt` rules and
//! write the new value back. Decrement clamps at 1 silently. An input that is
//! missing or holds no leading integer is left untouched and `None` is
//! returned.

#[cfg(test)]
#[path = "stepper_test.rs"]
mod stepper_test;

use crate::net::types::parse_quantity;
use crate::page::Page;

/// Lowest quantity decrement will produce.
pub const MIN_QUANTITY: u32 = 1;

fn current_quantity<P: Page + ?Sized>(page: &P, input_id: &str) -> Option<u32> {
    let raw = page.input_value(input_id)?;
    let parsed = parse_quantity(&raw);
    if parsed.is_none() {
        log::warn!("quantity input {input_id} holds no integer: {raw:?}");
    }
    parsed
}

fn write_quantity<P: Page + ?Sized>(page: &P, input_id: &str, value: u32) -> Option<u32> {
    match page.set_input_value(input_id, &value.to_string()) {
        Ok(()) => Some(value),
        Err(e) => {
            log::warn!("quantity input not updated: {e}");
            None
        }
    }
}

/// Add one to the quantity in `input_id`.
pub fn increment_quantity<P: Page + ?Sized>(page: &P, input_id: &str) -> Option<u32> {
    let current = current_quantity(page, input_id)?;
    write_quantity(page, input_id, current.saturating_add(1))
}

/// Subtract one from the quantity in `input_id`, never going below
/// [`MIN_QUANTITY`]. At or below the floor the input is not written.
pub fn decrement_quantity<P: Page + ?Sized>(page: &P, input_id: &str) -> Option<u32> {
    let current = current_quantity(page, input_id)?;
    if current <= MIN_QUANTITY {
        return Some(current);
    }
    write_quantity(page, input_id, current - 1)
}
