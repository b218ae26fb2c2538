//! Checkout Host Example
//!
//! A small host application that marks its transactions so an APM agent can
//! name them. Logging and error handling live here in the host. The marker
//! itself does neither.
//!
//! Run with: RUST_LOG=info cargo run --example checkout

use anyhow::{Context, Result};
use std::collections::HashMap;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use transaction_marker::run;

#[derive(Debug, Error, PartialEq, Eq)]
enum CheckoutError {
    #[error("unknown item: {0}")]
    UnknownItem(String),

    #[error("insufficient stock for {item}: requested {requested}, available {available}")]
    OutOfStock {
        item: String,
        requested: u32,
        available: u32,
    },
}

struct Store {
    stock: HashMap<String, u32>,
    prices: HashMap<String, u64>,
}

impl Store {
    fn new() -> Self {
        let mut stock = HashMap::new();
        let mut prices = HashMap::new();
        for (item, count, cents) in [("widget", 5, 1_250), ("gadget", 1, 9_900)] {
            stock.insert(item.to_string(), count);
            prices.insert(item.to_string(), cents);
        }
        Store { stock, prices }
    }

    fn checkout(&mut self, item: &str, quantity: u32) -> Result<u64, CheckoutError> {
        let available = *self
            .stock
            .get(item)
            .ok_or_else(|| CheckoutError::UnknownItem(item.to_string()))?;

        if quantity > available {
            return Err(CheckoutError::OutOfStock {
                item: item.to_string(),
                requested: quantity,
                available,
            });
        }

        self.stock.insert(item.to_string(), available - quantity);
        let price = self.prices.get(item).copied().unwrap_or_default();
        Ok(price * u64::from(quantity))
    }
}

/// Initialize tracing subscriber for host output
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let mut store = Store::new();
    let orders = [("widget", 2), ("gadget", 3), ("gizmo", 1), ("widget", 3)];

    for (item, quantity) in orders {
        let name = format!("checkout/{}", item);
        match run(name.as_str(), || store.checkout(item, quantity)) {
            Ok(cents) => tracing::info!(transaction = %name, item, quantity, cents, "order placed"),
            Err(e) => tracing::warn!(transaction = %name, error = %e, "order rejected"),
        }
    }

    let remaining = run("inventory/report", || store.stock.get("widget").copied())
        .context("widget missing from inventory")?;
    tracing::info!(remaining, "widget stock after checkout");

    Ok(())
}
