// ============================================================================
// Basic Usage Example
// ============================================================================
//
// cargo run --example basic_usage --features serde,logging

use round_tree::prelude::*;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Float map key printed in its shortest form.
#[derive(Debug, Clone, Copy)]
struct FloatKey(f64);

impl PartialEq for FloatKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for FloatKey {}

impl PartialOrd for FloatKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for FloatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for FloatKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Walk, Serialize, Default)]
#[serde(rename_all = "PascalCase")]
struct Embedded {
    #[round(precision = "2,percent")]
    pub some_rate: f64,
}

#[derive(Walk, Serialize, Default)]
#[serde(rename_all = "PascalCase")]
struct Data {
    pub number: f64,
    #[round(precision = "3")]
    pub map: BTreeMap<FloatKey, f64>,
    pub embedded: Embedded,
    pub list: Vec<f64>,
}

fn render<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| format!("<unprintable: {}>", err))
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Round Tree Example ===\n");

    let mut data = Data {
        number: 1.1111,
        map: BTreeMap::from([
            (FloatKey(4.5555555), 4.5555555),
            (FloatKey(4.4444444), 4.4444444),
        ]),
        embedded: Embedded {
            some_rate: 0.998765,
        },
        list: vec![7.0, 6.656],
    };

    println!("before: {}", render(&data));
    if let Err(err) = recursive(&mut data, 2) {
        eprintln!("rounding failed: {}", err);
        return;
    }
    println!("after:  {}\n", render(&data));

    // Already-parsed JSON is walked the same way.
    let mut value = serde_json::json!({"prices": [101.23456, 99.87654], "count": 3});
    match recursive(&mut value, 1) {
        Ok(()) => println!("json:   {}\n", value),
        Err(err) => eprintln!("rounding failed: {}", err),
    }

    // Errors name the path to the offending value.
    let mut broken = vec![vec![0.5], vec![1.5, f64::NAN]];
    if let Err(err) = recursive(&mut broken, 0) {
        println!("error:  {}", err);
    }

    println!("\n=== Example Complete ===");
}
