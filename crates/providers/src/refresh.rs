use crate::ProviderError;

/// A provider-owned refresh hook, driven by the background refresh loop.
///
/// `refresh` is a blocking fetch-and-stage and is only ever called off the
/// render path; implementations gate themselves on their own interval, so
/// the loop may poll as often as it likes.
pub trait RefreshSource: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Fetch new content and stage it for atomic adoption. Failures must
    /// leave the previously staged or published snapshot untouched.
    fn refresh(&self) -> Result<(), ProviderError>;
}
