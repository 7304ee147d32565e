use serde::{Deserialize, Serialize};

/// Read-only product record used for catalog statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

impl Product {
    fn new(id: u32, name: &str, price: f64, stock: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            stock,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// The fixed product list served by the catalog endpoints
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "Laptop", 1299.99, 5),
        Product::new(2, "Mouse", 29.99, 0),
        Product::new(3, "Keyboard", 89.99, 12),
        Product::new(4, "Monitor", 349.50, 3),
        Product::new(5, "Webcam", 59.00, 0),
    ]
}

/// Aggregate statistics over a product list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProductStats {
    pub total_products: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
    pub total_stock: u64,
    /// Sum of price x stock
    pub total_value: f64,
    /// Absent when there are no products
    pub average_price: Option<f64>,
}

impl ProductStats {
    pub fn from_products(products: &[Product]) -> Self {
        let total_products = products.len();
        let in_stock = products.iter().filter(|p| p.in_stock()).count();
        let total_stock = products.iter().map(|p| u64::from(p.stock)).sum();
        let total_value = products
            .iter()
            .fold(0.0, |acc, p| acc + p.price * f64::from(p.stock));
        let price_sum = products.iter().fold(0.0, |acc, p| acc + p.price);

        let average_price = if total_products == 0 {
            None
        } else {
            Some(price_sum / total_products as f64)
        };

        Self {
            total_products,
            in_stock,
            out_of_stock: total_products - in_stock,
            total_stock,
            total_value,
            average_price,
        }
    }
}
