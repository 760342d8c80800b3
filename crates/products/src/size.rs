use serde::Serialize;

use feedkit_core::{DomainResult, ValueObject};
use feedkit_xml::{Document, NodeReport, XmlTransformer};

use crate::catalog::SizeCatalog;

/// Element wrapping one size in the product feed.
pub const SIZE_ELEMENT: &str = "size";

const SIZE_NAME: &str = "size_name";
const SIZE_QUANTITY: &str = "size_quantity";
const SIZE_REFERENCE: &str = "size_reference";
const EAN: &str = "ean";
const PRODUCT_PRICE: &str = "product_price";

/// One sellable size of a product: name, stock, reference, barcode and an
/// optional price overriding the product price.
///
/// A non-empty `size_name` is checked against the catalog when it is assigned
/// and never re-checked afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeVariant {
    size_name: Option<String>,
    size_quantity: i64,
    size_reference: String,
    ean: Option<String>,
    product_price: Option<f64>,
}

impl ValueObject for SizeVariant {}

impl SizeVariant {
    /// Fails with `DomainError::InvalidInput` when `size_name` is non-empty and
    /// unknown to `catalog`.
    pub fn new(
        catalog: &SizeCatalog,
        size_name: Option<&str>,
        size_quantity: i64,
        size_reference: impl Into<String>,
        ean: Option<&str>,
        product_price: Option<f64>,
    ) -> DomainResult<Self> {
        catalog.validate_size_name(size_name)?;

        Ok(Self {
            size_name: size_name.map(str::to_owned),
            size_quantity,
            size_reference: size_reference.into(),
            ean: ean.map(str::to_owned),
            product_price,
        })
    }

    pub fn size_name(&self) -> Option<&str> {
        self.size_name.as_deref()
    }

    /// Same validation as [`SizeVariant::new`]; on failure the variant is left unchanged.
    pub fn set_size_name(
        &mut self,
        catalog: &SizeCatalog,
        size_name: Option<&str>,
    ) -> DomainResult<&mut Self> {
        catalog.validate_size_name(size_name)?;
        self.size_name = size_name.map(str::to_owned);
        Ok(self)
    }

    pub fn size_quantity(&self) -> i64 {
        self.size_quantity
    }

    pub fn set_size_quantity(&mut self, size_quantity: i64) -> &mut Self {
        self.size_quantity = size_quantity;
        self
    }

    pub fn size_reference(&self) -> &str {
        &self.size_reference
    }

    pub fn set_size_reference(&mut self, size_reference: impl Into<String>) -> &mut Self {
        self.size_reference = size_reference.into();
        self
    }

    pub fn ean(&self) -> Option<&str> {
        self.ean.as_deref()
    }

    pub fn set_ean(&mut self, ean: Option<&str>) -> &mut Self {
        self.ean = ean.map(str::to_owned);
        self
    }

    pub fn product_price(&self) -> Option<f64> {
        self.product_price
    }

    pub fn set_product_price(&mut self, product_price: Option<f64>) -> &mut Self {
        self.product_price = product_price;
        self
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl XmlTransformer for SizeVariant {
    /// Builds `<size>` with one child per set field. Empty strings, zero and
    /// `None` are left out.
    fn to_node_reported(&self, document: &Document) -> NodeReport {
        let mut report = NodeReport::new(document.create_static_element(SIZE_ELEMENT));

        if let Some(name) = non_empty(self.size_name()) {
            report.push_field(SIZE_NAME, document.create_text_element(SIZE_NAME, name));
        }
        if self.size_quantity != 0 {
            report.push_field(
                SIZE_QUANTITY,
                document.create_text_element(SIZE_QUANTITY, &self.size_quantity.to_string()),
            );
        }
        if !self.size_reference.is_empty() {
            report.push_field(
                SIZE_REFERENCE,
                document.create_text_element(SIZE_REFERENCE, &self.size_reference),
            );
        }
        if let Some(ean) = non_empty(self.ean()) {
            report.push_field(EAN, document.create_text_element(EAN, ean));
        }
        if let Some(price) = self.product_price.filter(|p| *p != 0.0) {
            report.push_field(
                PRODUCT_PRICE,
                document.create_float_element(PRODUCT_PRICE, price),
            );
        }

        report
    }
}
