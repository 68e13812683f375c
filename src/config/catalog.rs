use crate::domain::model::{Price, Product};
use crate::utils::error::{NegotiationError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Read-only product catalog, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let catalog = Self { products };
        catalog.validate()?;
        Ok(catalog)
    }

    /// 內建商品目錄
    pub fn builtin() -> Self {
        Self {
            products: vec![
                Product::new("Laptop", 1000, 700, 850),
                Product::new("Smartphone", 800, 500, 650),
                Product::new("Headphones", 300, 150, 200),
            ],
        }
    }

    /// 從 TOML 檔案載入商品目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NegotiationError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析並驗證
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: Catalog =
            toml::from_str(content).map_err(|e| NegotiationError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Result<&Product> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .ok_or_else(|| NegotiationError::UnknownProduct {
                product: id.to_string(),
            })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.products.iter().any(|product| product.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(|product| product.id.as_str())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        if self.products.is_empty() {
            return Err(NegotiationError::ConfigValidationError {
                field: "products".to_string(),
                message: "Catalog must contain at least one product".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for product in &self.products {
            validate_non_empty_string("products.id", &product.id)?;
            if !seen.insert(product.id.as_str()) {
                return Err(NegotiationError::InvalidConfigValueError {
                    field: "products.id".to_string(),
                    value: product.id.clone(),
                    reason: "Duplicate product id".to_string(),
                });
            }

            // min_price <= start_price <= max_price
            validate_range(
                &format!("{}.min_price", product.id),
                product.min_price,
                0 as Price,
                product.start_price,
            )?;
            validate_range(
                &format!("{}.start_price", product.id),
                product.start_price,
                product.min_price,
                product.max_price,
            )?;
        }

        Ok(())
    }
}
