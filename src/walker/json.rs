// ============================================================================
// JSON Values
// Walks already-parsed serde_json trees (feature "serde")
// ============================================================================
//
// Objects are maps, arrays are sequences and floating point numbers are
// leaves. Integer numbers, strings, booleans and null are left alone.

use super::context::Context;
use super::errors::RoundError;
use super::map::walk_entries;
use super::walk::Walk;
use serde_json::{Map, Number, Value};

impl Walk for Value {
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        match self {
            Value::Number(number) => number.walk(ctx),
            Value::Array(items) => items.walk(ctx),
            Value::Object(entries) => entries.walk(ctx),
            Value::Null | Value::Bool(_) | Value::String(_) => Ok(()),
        }
    }
}

impl Walk for Map<String, Value> {
    #[inline]
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        walk_entries(self.iter_mut(), ctx)
    }
}

impl Walk for Number {
    fn walk(&mut self, ctx: Context) -> Result<(), RoundError> {
        if !self.is_f64() {
            return Ok(());
        }

        let Some(mut float) = self.as_f64() else {
            return Ok(());
        };
        float.walk(ctx)?;
        *self = Number::from_f64(float).ok_or_else(RoundError::overflow)?;
        Ok(())
    }
}
