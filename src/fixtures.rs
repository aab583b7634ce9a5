//! Fixtures
//!
//! YAML shop fixtures: a currency, products, customers, suppliers and
//! employees loaded from `./fixtures/<name>.yml` into a ready [`Store`] plus
//! string-key lookup maps. Used by the demo driver and tests.

use std::{fs, path::PathBuf, str::FromStr};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{Money, iso, iso::Currency};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    customers::{Customer, CustomerKey},
    products::{Product, ProductKey},
    staff::Employee,
    store::Store,
    suppliers::Supplier,
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Customer not found
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),
}

/// Top-level fixture file shape.
#[derive(Debug, Deserialize)]
struct ShopFixtureFile {
    /// ISO alpha code of the store currency
    currency: String,

    /// Map of product key -> product fixture
    products: FxHashMap<String, ProductFixture>,

    /// Map of customer key -> customer fixture
    #[serde(default)]
    customers: FxHashMap<String, CustomerFixture>,

    /// Suppliers, in file order
    #[serde(default)]
    suppliers: Vec<SupplierFixture>,

    /// Employees, in file order
    #[serde(default)]
    employees: Vec<EmployeeFixture>,
}

/// Product fixture from YAML
#[derive(Debug, Deserialize)]
struct ProductFixture {
    /// Display name
    name: String,

    /// Decimal price in major units, e.g. `"10.00"`
    price: String,

    /// Opening stock
    stock: u32,
}

/// Customer fixture from YAML
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum CustomerFixture {
    /// A private individual
    Individual {
        /// Customer name
        name: String,

        /// Contact details
        contact: String,
    },

    /// A company account
    Corporate {
        /// Customer name
        name: String,

        /// Contact details
        contact: String,

        /// Registered company name
        company: String,
    },
}

/// Supplier fixture from YAML
#[derive(Debug, Deserialize)]
struct SupplierFixture {
    /// Supplier name
    name: String,

    /// Contact details
    contact: String,
}

/// Employee fixture from YAML
#[derive(Debug, Deserialize)]
struct EmployeeFixture {
    /// Employee name
    name: String,

    /// Job position
    position: String,

    /// Authority level
    authority: String,
}

/// A loaded shop fixture: the store plus string-key lookups.
#[derive(Debug)]
pub struct ShopFixture<'a> {
    store: Store<'a>,
    product_keys: FxHashMap<String, ProductKey>,
    customer_keys: FxHashMap<String, CustomerKey>,
    suppliers: Vec<Supplier>,
    employees: Vec<Employee>,
}

impl<'a> ShopFixture<'a> {
    /// Load a named fixture from the default `./fixtures` base path.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed.
    pub fn load(name: &str) -> Result<Self, FixtureError> {
        Self::load_from(PathBuf::from("./fixtures"), name)
    }

    /// Load a named fixture from a custom base path.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed.
    pub fn load_from(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let file_path = base_path.into().join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        Self::from_yaml(&contents)
    }

    /// Build a fixture from YAML contents.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the YAML cannot be parsed, a price is not
    /// a valid decimal, or the currency code is unknown.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        let file: ShopFixtureFile = serde_norway::from_str(contents)?;

        let currency = iso::find(&file.currency)
            .ok_or_else(|| FixtureError::UnknownCurrency(file.currency.clone()))?;

        let mut store = Store::new(currency);
        let mut product_keys = FxHashMap::default();
        let mut customer_keys = FxHashMap::default();

        for (key, fixture) in file.products {
            let minor_units = parse_price(&fixture.price, currency)?;

            let price = Money::from_minor(minor_units, currency);
            let product_key = store.add_product(Product::new(fixture.name, price, fixture.stock));

            product_keys.insert(key, product_key);
        }

        for (key, fixture) in file.customers {
            let customer = match fixture {
                CustomerFixture::Individual { name, contact } => {
                    Customer::individual(name, contact)
                }
                CustomerFixture::Corporate {
                    name,
                    contact,
                    company,
                } => Customer::corporate(name, contact, company),
            };

            customer_keys.insert(key, store.add_customer(customer));
        }

        let suppliers = file
            .suppliers
            .into_iter()
            .map(|fixture| Supplier::new(fixture.name, fixture.contact))
            .collect();

        let employees = file
            .employees
            .into_iter()
            .map(|fixture| Employee::new(fixture.name, fixture.position, fixture.authority))
            .collect();

        Ok(Self {
            store,
            product_keys,
            customer_keys,
            suppliers,
            employees,
        })
    }

    /// Returns the loaded store.
    pub fn store(&self) -> &Store<'a> {
        &self.store
    }

    /// Returns the loaded store for mutation.
    pub fn store_mut(&mut self) -> &mut Store<'a> {
        &mut self.store
    }

    /// Resolve a product by its fixture key.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::ProductNotFound`] if the key is not in the
    /// fixture.
    pub fn product_key(&self, key: &str) -> Result<ProductKey, FixtureError> {
        self.product_keys
            .get(key)
            .copied()
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))
    }

    /// Resolve a customer by their fixture key.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::CustomerNotFound`] if the key is not in the
    /// fixture.
    pub fn customer_key(&self, key: &str) -> Result<CustomerKey, FixtureError> {
        self.customer_keys
            .get(key)
            .copied()
            .ok_or_else(|| FixtureError::CustomerNotFound(key.to_string()))
    }

    /// Returns the suppliers in file order.
    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Returns the employees in file order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}

/// Parse a decimal price string (e.g. `"10.00"`) into minor units of the
/// given currency.
fn parse_price(price: &str, currency: &'static Currency) -> Result<i64, FixtureError> {
    let Ok(amount) = Decimal::from_str(price) else {
        return Err(FixtureError::InvalidPrice(price.to_string()));
    };

    let scale = Decimal::from(10_i64.pow(currency.exponent));

    amount
        .checked_mul(scale)
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(price.to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use rusty_money::iso;
    use testresult::TestResult;

    use crate::products::Product;

    use super::*;

    const DEMO_YAML: &str = r"
currency: TRY
products:
  cola:
    name: Cola
    price: '10.00'
    stock: 100
customers:
  ahmet:
    type: individual
    name: Ahmet Yilmaz
    contact: ahmet@mail.com
  acme:
    type: corporate
    name: Ayse Kaya
    contact: info@acme.example
    company: Acme A.S.
suppliers:
  - name: Tedarikci A.S.
    contact: tedarikci@mail.com
employees:
  - name: Ayse Kaya
    position: Cashier
    authority: High
";

    #[test]
    fn from_yaml_builds_store_and_lookups() -> TestResult {
        let fixture = ShopFixture::from_yaml(DEMO_YAML)?;

        let cola = fixture.product_key("cola")?;
        let product = fixture.store().product(cola);

        assert_eq!(fixture.store().currency(), iso::TRY);
        assert_eq!(product.map(Product::name), Some("Cola"));
        assert_eq!(product.map(Product::stock), Some(100));
        assert_eq!(
            product.map(Product::price),
            Some(Money::from_minor(1000, iso::TRY))
        );
        assert!(fixture.customer_key("ahmet").is_ok(), "customer must load");
        assert!(fixture.customer_key("acme").is_ok(), "customer must load");
        assert_eq!(fixture.suppliers().len(), 1);
        assert_eq!(fixture.employees().len(), 1);

        Ok(())
    }

    #[test]
    fn load_from_reads_a_file_on_disk() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut file = std::fs::File::create(dir.path().join("shop.yml"))?;
        file.write_all(DEMO_YAML.as_bytes())?;

        let fixture = ShopFixture::load_from(dir.path(), "shop")?;

        assert!(fixture.product_key("cola").is_ok(), "product must load");

        Ok(())
    }

    #[test]
    fn unknown_currency_code_errors() {
        let result = ShopFixture::from_yaml("currency: XXXX\nproducts: {}\n");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(_))));
    }

    #[test]
    fn invalid_price_errors() {
        let yaml = "
currency: TRY
products:
  cola:
    name: Cola
    price: 'ten lira'
    stock: 1
";

        let result = ShopFixture::from_yaml(yaml);

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn missing_fixture_key_errors() -> TestResult {
        let fixture = ShopFixture::from_yaml(DEMO_YAML)?;

        assert!(matches!(
            fixture.product_key("soda"),
            Err(FixtureError::ProductNotFound(_))
        ));
        assert!(matches!(
            fixture.customer_key("unknown"),
            Err(FixtureError::CustomerNotFound(_))
        ));

        Ok(())
    }

    #[test]
    fn shipped_demo_fixture_loads() -> TestResult {
        let fixture = ShopFixture::load("demo")?;

        assert!(fixture.product_key("cola").is_ok(), "demo must have cola");
        assert!(
            fixture.customer_key("ahmet").is_ok(),
            "demo must have the demo customer"
        );

        Ok(())
    }
}
