//! Storage provider seam.
//!
//! The explorer only talks to an `Arc<dyn StorageProvider>`. The
//! [`MockProvider`] answers from a [`Catalog`] and synthesizes preview
//! content; a provider for a live object store would implement the same
//! three calls.

use async_trait::async_trait;

use super::catalog::Catalog;
use super::classify::synthesize;
use super::error::StorageError;
use crate::config::latency;
use crate::models::{BucketId, ContentArtifact, ObjectDescriptor};
use crate::utils::time::sleep_ms;

/// Read-only access to buckets, listings and object content.
///
/// Futures are not `Send`: everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait StorageProvider: Send + Sync {
    /// Buckets offered as presets in the picker.
    async fn list_buckets(&self) -> Result<Vec<BucketId>, StorageError>;

    /// Objects in `bucket`, in stable order. Unknown buckets list empty.
    async fn list_objects(&self, bucket: &BucketId) -> Result<Vec<ObjectDescriptor>, StorageError>;

    /// Content of `object` in `bucket`.
    async fn fetch_object_content(
        &self,
        bucket: &BucketId,
        object: &str,
    ) -> Result<ContentArtifact, StorageError>;
}

/// Artificial delays applied by [`MockProvider`], in milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Latency {
    pub buckets_ms: u32,
    pub listing_ms: u32,
    pub content_ms: u32,
}

impl Latency {
    /// No delay at all.
    pub const NONE: Self = Self {
        buckets_ms: 0,
        listing_ms: 0,
        content_ms: 0,
    };

    /// Delays that make loading states visible in the demo.
    pub fn simulated() -> Self {
        Self {
            buckets_ms: latency::BUCKETS_MS,
            listing_ms: latency::LISTING_MS,
            content_ms: latency::CONTENT_MS,
        }
    }
}

/// In-memory provider backed by a static catalog.
#[derive(Clone, Debug)]
pub struct MockProvider {
    catalog: Catalog,
    latency: Latency,
}

impl MockProvider {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            latency: Latency::NONE,
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

#[async_trait(?Send)]
impl StorageProvider for MockProvider {
    async fn list_buckets(&self) -> Result<Vec<BucketId>, StorageError> {
        sleep_ms(self.latency.buckets_ms).await;
        Ok(self.catalog.bucket_ids())
    }

    async fn list_objects(&self, bucket: &BucketId) -> Result<Vec<ObjectDescriptor>, StorageError> {
        sleep_ms(self.latency.listing_ms).await;
        Ok(self.catalog.objects(bucket).to_vec())
    }

    async fn fetch_object_content(
        &self,
        bucket: &BucketId,
        object: &str,
    ) -> Result<ContentArtifact, StorageError> {
        sleep_ms(self.latency.content_ms).await;
        Ok(synthesize(bucket.as_str(), object))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::ObjectCategory;

    fn id(name: &str) -> BucketId {
        BucketId::parse(name).unwrap()
    }

    #[tokio::test]
    async fn test_list_buckets_in_catalog_order() {
        let provider = MockProvider::default();
        let buckets = provider.list_buckets().await.unwrap();
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[0].as_str(), "my-static-website");
        assert_eq!(buckets[3].as_str(), "demo-content");
    }

    #[tokio::test]
    async fn test_list_objects_deterministic() {
        let provider = MockProvider::default();
        let bucket = id("company-assets");
        let first = provider.list_objects(&bucket).await.unwrap();
        let second = provider.list_objects(&bucket).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert_eq!(first[2].name, "banner.jpg");
        assert_eq!(first[2].category, ObjectCategory::Image);
    }

    #[tokio::test]
    async fn test_unknown_bucket_lists_empty() {
        let provider = MockProvider::default();
        for name in ["my-bucket", "MY-STATIC-WEBSITE", "a b c"] {
            let objects = provider.list_objects(&id(name)).await.unwrap();
            assert!(objects.is_empty(), "{name} should list nothing");
        }
    }

    #[tokio::test]
    async fn test_fetch_content_matches_classifier() {
        let provider = MockProvider::default();
        let bucket = id("my-static-website");

        let html = provider
            .fetch_object_content(&bucket, "index.html")
            .await
            .unwrap();
        assert_eq!(html.mime_type, "text/html");

        let png = provider
            .fetch_object_content(&bucket, "logo.png")
            .await
            .unwrap();
        assert_eq!(png.mime_type, "text/plain");
    }

    #[tokio::test]
    async fn test_fetch_content_for_unlisted_object() {
        let provider = MockProvider::default();
        let art = provider
            .fetch_object_content(&id("custom"), "missing.css")
            .await
            .unwrap();
        assert_eq!(art.mime_type, "text/css");
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let provider: Arc<dyn StorageProvider> = Arc::new(MockProvider::default());
        let objects = provider.list_objects(&id("public-files")).await.unwrap();
        assert_eq!(objects[0].name, "home.html");
    }

    #[test]
    fn test_simulated_latency() {
        let latency = Latency::simulated();
        assert_eq!(latency.buckets_ms, 500);
        assert_eq!(latency.listing_ms, 800);
        assert_eq!(latency.content_ms, 1000);
    }
}
