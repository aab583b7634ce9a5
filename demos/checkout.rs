//! Checkout Example
//!
//! Walks the full back-office flow against a fixture shop: place an order,
//! pay by card, deliver it, try to cancel it, then restock from a supplier.
//!
//! Use `-f` to load a fixture by name from `./fixtures`.

use anyhow::Result;
use clap::Parser;
use rusty_money::Money;
use tabled::{Table, Tabled};

use shopfloor::prelude::*;

/// Arguments for the checkout example
#[derive(Debug, Parser)]
struct CheckoutArgs {
    /// Fixture to load the shop from
    #[clap(short, long, default_value = "demo")]
    fixture: String,
}

/// One row of the inventory table.
#[derive(Tabled)]
struct InventoryRow {
    /// Product name
    name: String,

    /// Live price
    price: String,

    /// Units in stock
    stock: u32,
}

fn inventory_table(store: &Store<'_>) -> Table {
    let rows: Vec<InventoryRow> = store
        .products()
        .map(|(_, product)| InventoryRow {
            name: product.name().to_string(),
            price: product.price().to_string(),
            stock: product.stock(),
        })
        .collect();

    Table::new(rows)
}

/// Checkout Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = CheckoutArgs::parse();

    let mut fixture = ShopFixture::load(&args.fixture)?;
    let cola = fixture.product_key("cola")?;
    let ahmet = fixture.customer_key("ahmet")?;
    let currency = fixture.store().currency();

    let mut beverages = Category::new("Beverages");
    beverages.add_product(cola);

    let mut order = Order::new(ahmet);
    order.add_product(fixture.store_mut(), cola, 5)?;
    order.assign_payment(Payment::CreditCard {
        amount: Money::from_minor(10_000, currency),
        card_number: "1234-5678-9101-1121".into(),
    });

    println!("{}", order.process(fixture.store_mut()));

    if let Some(employee) = fixture.employees().first() {
        println!("{employee}");
    }

    println!("{}", order.cancel(fixture.store_mut()));

    if let Some(supplier) = fixture.suppliers().first().cloned() {
        println!("{}", supplier.supply(fixture.store_mut(), cola, 50)?);
    }

    println!("{}", inventory_table(fixture.store()));

    Ok(())
}
