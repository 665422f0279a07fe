/// Logo conversion module
///
/// This module turns one decodable image file into a web-ready PNG:
/// - Decoding PNG, JPEG and WebP sources
/// - Flattening transparency onto a white background
/// - Downscaling logos that are wider than the configured limit
/// - Writing an optimized PNG atomically

pub mod error;
pub mod png;

pub use error::ConvertError;
pub use png::{convert_to_png, ConvertedImage};
