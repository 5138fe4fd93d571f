//! Static bucket catalog backing the mock provider.

use serde::Deserialize;

use super::error::StorageError;
use crate::models::ObjectCategory::{Css, Html, Image, Js};
use crate::models::{BucketId, ObjectCategory, ObjectDescriptor};

/// Ordered mapping from bucket to its object listing.
///
/// Bucket order is the preset order shown in the picker; object order is
/// the listing order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    buckets: Vec<(BucketId, Vec<ObjectDescriptor>)>,
}

#[derive(Deserialize)]
struct CatalogFile {
    buckets: Vec<BucketEntry>,
}

#[derive(Deserialize)]
struct BucketEntry {
    name: BucketId,
    #[serde(default)]
    objects: Vec<ObjectDescriptor>,
}

type Row = (&'static str, ObjectCategory, &'static str, &'static str);

const BUILTIN: &[(&str, &[Row])] = &[
    (
        "my-static-website",
        &[
            ("index.html", Html, "12.5 KB", "2024-01-15"),
            ("styles.css", Css, "8.2 KB", "2024-01-15"),
            ("script.js", Js, "15.7 KB", "2024-01-14"),
            ("logo.png", Image, "45.3 KB", "2024-01-10"),
            ("about.html", Html, "9.1 KB", "2024-01-12"),
        ],
    ),
    (
        "company-assets",
        &[
            ("main.css", Css, "25.4 KB", "2024-01-20"),
            ("app.js", Js, "89.2 KB", "2024-01-19"),
            ("banner.jpg", Image, "156.8 KB", "2024-01-18"),
        ],
    ),
    (
        "public-files",
        &[
            ("home.html", Html, "18.9 KB", "2024-01-22"),
            ("common.css", Css, "12.1 KB", "2024-01-21"),
        ],
    ),
    (
        "demo-content",
        &[
            ("demo.html", Html, "7.3 KB", "2024-01-25"),
            ("demo.css", Css, "4.8 KB", "2024-01-25"),
        ],
    ),
];

impl Catalog {
    /// The demo catalog compiled into the app.
    pub fn builtin() -> Self {
        let buckets = BUILTIN
            .iter()
            .filter_map(|(name, rows)| {
                let objects = rows
                    .iter()
                    .map(|&(name, category, size, modified)| {
                        ObjectDescriptor::new(name, category, size, modified)
                    })
                    .collect();
                BucketId::parse(name).map(|id| (id, objects))
            })
            .collect();
        Self { buckets }
    }

    /// Load a catalog from JSON.
    ///
    /// ```json
    /// { "buckets": [ { "name": "site", "objects": [
    ///     { "name": "index.html", "category": "html", "size": "1 KB", "modified": "2024-01-01" }
    /// ] } ] }
    /// ```
    ///
    /// Bucket names are trimmed; a blank name or a repeated bucket is rejected.
    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| StorageError::Invalid(e.to_string()))?;

        let mut buckets: Vec<(BucketId, Vec<ObjectDescriptor>)> =
            Vec::with_capacity(file.buckets.len());
        for entry in file.buckets {
            if buckets.iter().any(|(id, _)| *id == entry.name) {
                return Err(StorageError::Invalid(format!(
                    "duplicate bucket: {}",
                    entry.name
                )));
            }
            buckets.push((entry.name, entry.objects));
        }
        Ok(Self { buckets })
    }

    /// Bucket names in catalog order.
    pub fn bucket_ids(&self) -> Vec<BucketId> {
        self.buckets.iter().map(|(id, _)| id.clone()).collect()
    }

    /// Objects in `bucket`; empty for unknown buckets.
    pub fn objects(&self, bucket: &BucketId) -> &[ObjectDescriptor] {
        self.buckets
            .iter()
            .find(|(id, _)| id == bucket)
            .map(|(_, objects)| objects.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> BucketId {
        BucketId::parse(name).unwrap()
    }

    #[test]
    fn test_builtin_bucket_order() {
        let names: Vec<String> = Catalog::builtin()
            .bucket_ids()
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(
            names,
            ["my-static-website", "company-assets", "public-files", "demo-content"]
        );
    }

    #[test]
    fn test_builtin_static_website() {
        let catalog = Catalog::builtin();
        let objects = catalog.objects(&id("my-static-website"));
        assert_eq!(objects.len(), 5);
        assert_eq!(
            objects[0],
            ObjectDescriptor::new("index.html", ObjectCategory::Html, "12.5 KB", "2024-01-15")
        );
        let names: Vec<&str> = objects.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(
            names,
            ["index.html", "styles.css", "script.js", "logo.png", "about.html"]
        );
        assert_eq!(objects[3].category, ObjectCategory::Image);
    }

    #[test]
    fn test_unknown_bucket_is_empty() {
        let catalog = Catalog::builtin();
        assert!(catalog.objects(&id("no-such-bucket")).is_empty());
        // lookups are exact, not case-folded
        assert!(catalog.objects(&id("Demo-Content")).is_empty());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "buckets": [
                { "name": " site ", "objects": [
                    { "name": "a.html", "category": "html", "size": "1 KB", "modified": "2024-03-01" },
                    { "name": "b.bin", "size": "2 KB", "modified": "2024-03-02" }
                ] },
                { "name": "empty" }
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.bucket_ids(), vec![id("site"), id("empty")]);
        let objects = catalog.objects(&id("site"));
        assert_eq!(objects.len(), 2);
        assert_eq!(objects[1].category, ObjectCategory::Other);
        assert!(catalog.objects(&id("empty")).is_empty());
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(StorageError::Invalid(_))
        ));
        assert!(matches!(
            Catalog::from_json(r#"{"buckets":[{"name":"  "}]}"#),
            Err(StorageError::Invalid(_))
        ));
        assert!(matches!(
            Catalog::from_json(r#"{"buckets":[{"name":"a"},{"name":" a"}]}"#),
            Err(StorageError::Invalid(_))
        ));
    }
}
