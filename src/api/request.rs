//! Request types for the Price Point Engine API.
//!
//! This module defines the JSON request structure for the
//! `/api/price-points` endpoint and the presence/type validation that
//! guards the calculation core.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Serialize;
use serde_json::Value;

use crate::error::{EngineError, EngineResult};

/// Request body for the `/api/price-points` endpoint.
///
/// All fields are required. The departure and arrival times are accepted as
/// opaque strings: the server does not re-check the domain rules the form
/// client enforces before submission (departure before arrival, distinct
/// airports, 3-letter codes). `Currency` is a label only and plays no part
/// in the calculation.
///
/// Requests are built through [`PricePointRequest::from_value`] rather than
/// serde deserialization, so validation failures report the first missing
/// field by name; the `Serialize` impl exists for clients and tests that
/// construct request bodies.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PricePointRequest {
    /// Departure airport code.
    pub departure_airport_code: String,
    /// Arrival airport code.
    pub arrival_airport_code: String,
    /// Departure time, opaque date/time string.
    pub departure_time: String,
    /// Arrival time, opaque date/time string.
    pub arrival_time: String,
    /// Full cash price of the booking.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Currency label for the price. Not used by the calculation.
    pub currency: String,
}

impl PricePointRequest {
    /// Validates a JSON body and builds a request from it.
    ///
    /// Fields are checked in declaration order (`DepartureAirportCode`,
    /// `ArrivalAirportCode`, `DepartureTime`, `ArrivalTime`, `Price`,
    /// `Currency`) so the first missing or mistyped field is the one
    /// reported. A missing field yields `"<FieldName>" is required`; a
    /// wrong primitive type yields `"<FieldName>" must be a string` or
    /// `"Price" must be a number`.
    pub fn from_value(body: &Value) -> EngineResult<Self> {
        let object = body.as_object().ok_or_else(|| EngineError::Validation {
            field: "body".to_string(),
            message: "request body must be a JSON object".to_string(),
        })?;

        let departure_airport_code = required_string(object, "DepartureAirportCode")?;
        let arrival_airport_code = required_string(object, "ArrivalAirportCode")?;
        let departure_time = required_string(object, "DepartureTime")?;
        let arrival_time = required_string(object, "ArrivalTime")?;
        let price = required_number(object, "Price")?;
        let currency = required_string(object, "Currency")?;

        Ok(Self {
            departure_airport_code,
            arrival_airport_code,
            departure_time,
            arrival_time,
            price,
            currency,
        })
    }
}

/// Looks up a required field, treating an absent or `null` value as missing.
fn required<'a>(
    object: &'a serde_json::Map<String, Value>,
    field: &str,
) -> EngineResult<&'a Value> {
    match object.get(field) {
        None | Some(Value::Null) => Err(EngineError::missing_field(field)),
        Some(value) => Ok(value),
    }
}

fn required_string(object: &serde_json::Map<String, Value>, field: &str) -> EngineResult<String> {
    required(object, field)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| EngineError::wrong_type(field, "string"))
}

fn required_number(object: &serde_json::Map<String, Value>, field: &str) -> EngineResult<Decimal> {
    required(object, field)?
        .as_f64()
        .and_then(Decimal::from_f64)
        .ok_or_else(|| EngineError::wrong_type(field, "number"))
}
