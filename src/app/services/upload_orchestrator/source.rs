//! The capability an upload input must provide
//!
//! The surrounding application hands the orchestrator "a file the user
//! picked". All the orchestrator needs from it is a name, a size, and a
//! way to read the content asynchronously; this trait is that narrow
//! surface. Concrete sources live in
//! [`app::adapters::upload_sources`](crate::app::adapters::upload_sources).

/// A selected file that can be read asynchronously
///
/// `name` and `size_bytes` must be available synchronously at selection
/// time; the orchestrator captures them before the read starts so they
/// survive a failed read. `read` yields raw bytes: deciding whether the
/// content is text is the orchestrator's job, not the source's.
pub trait UploadSource {
    /// File name as shown to the user
    fn name(&self) -> &str;

    /// File size in bytes
    fn size_bytes(&self) -> u64;

    /// Read the complete content
    fn read(&self) -> impl Future<Output = std::io::Result<Vec<u8>>> + Send;
}
