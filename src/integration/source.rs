//! Trait for external inference backends.

/// Trait for the external inference engine that produces the raw output
/// tensor.
///
/// The core never loads a model or touches a device; implement this trait to
/// connect any backend (ONNX Runtime, WinML, a test stub) to the decode and
/// suppress pipeline.
///
/// # Example
///
/// ```ignore
/// use yologrid_rs::TensorSource;
///
/// struct MyEngine {
///     // Your model session here
/// }
///
/// impl TensorSource for MyEngine {
///     type Error = std::io::Error;
///
///     fn infer(&mut self, frame: &[u8], width: u32, height: u32) -> Result<Vec<f32>, Self::Error> {
///         // Run the network and return its flat output tensor
///         Ok(vec![])
///     }
/// }
/// ```
pub trait TensorSource {
    /// Error type for inference failures.
    type Error;

    /// Run the detector network on one frame and return its flat output
    /// tensor in channel-major order.
    ///
    /// # Arguments
    /// * `frame` - Raw image bytes (format depends on implementation)
    /// * `width` - Frame width in pixels
    /// * `height` - Frame height in pixels
    fn infer(&mut self, frame: &[u8], width: u32, height: u32)
    -> Result<Vec<f32>, Self::Error>;
}
