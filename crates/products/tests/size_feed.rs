use std::path::PathBuf;

use feedkit_core::DomainError;
use feedkit_products::{CatalogConfig, CatalogError, SizeVariant};
use feedkit_products::config::CATALOG_PATH_ENV;
use feedkit_xml::{Document, XmlTransformer};

struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    fn write(file_name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "feedkit-{}-{}",
            std::process::id(),
            file_name
        ));
        std::fs::write(&path, contents).expect("failed to write catalog fixture");
        Self { path }
    }

    fn config(&self) -> CatalogConfig {
        let path = self.path.to_string_lossy().into_owned();
        CatalogConfig::from_lookup(move |key| (key == CATALOG_PATH_ENV).then(|| path.clone()))
    }
}

impl Drop for CatalogFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

const XML_CATALOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<sizes>
  <size><size_name>S</size_name><size_id>1</size_id></size>
  <size><size_name>M</size_name><size_id>2</size_id></size>
  <size><size_name>L</size_name><size_id>3</size_id></size>
</sizes>
"#;

#[test]
fn feed_document_from_xml_catalog() {
    feedkit_observability::init();

    let file = CatalogFile::write("sizes.xml", XML_CATALOG);
    let catalog = file.config().load_catalog().expect("catalog should load");
    assert_eq!(catalog.size_names().collect::<Vec<_>>(), vec!["S", "M", "L"]);

    let document = Document::new();
    let medium = SizeVariant::new(
        &catalog,
        Some("M"),
        5,
        "REF1",
        Some("1234567890123"),
        Some(19.99),
    )
    .unwrap();
    let large = SizeVariant::new(&catalog, Some("L"), 0, "A&B<C>", None, None).unwrap();

    let mut sizes = document.create_element("sizes").unwrap();
    sizes
        .append_child(medium.to_node(&document))
        .append_child(large.to_node(&document));

    let xml = document.render(&sizes).unwrap();
    assert_eq!(
        xml,
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            "<sizes>",
            "<size><size_name>M</size_name><size_quantity>5</size_quantity>",
            "<size_reference>REF1</size_reference><ean>1234567890123</ean>",
            "<product_price>19.99</product_price></size>",
            "<size><size_name>L</size_name><size_reference>A&amp;B&lt;C&gt;</size_reference></size>",
            "</sizes>"
        )
    );
}

#[test]
fn json_catalog_rejects_unknown_sizes() {
    feedkit_observability::init();

    let file = CatalogFile::write(
        "sizes.json",
        r#"{"sizes": [{"size_name": "38"}, {"size_name": "39"}]}"#,
    );
    let catalog = file.config().load_catalog().expect("catalog should load");

    let mut size = SizeVariant::new(&catalog, Some("38"), 1, "SHOE-38", None, None).unwrap();
    let err = size.set_size_name(&catalog, Some("M")).unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
    assert!(err.to_string().contains("`M`"));
    assert_eq!(size.size_name(), Some("38"));
}

#[test]
fn unreadable_catalog_is_an_io_error() {
    let config = CatalogConfig {
        path: PathBuf::from("/nonexistent/feedkit/sizes.xml"),
    };
    assert!(matches!(config.load_catalog(), Err(CatalogError::Io { .. })));
}
