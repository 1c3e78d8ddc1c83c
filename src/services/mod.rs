pub mod image_encoder;
pub mod image_locator;
pub mod result_classifier;

pub use image_encoder::encode_image;
pub use image_locator::{is_supported_image, locate_images, IMAGE_EXTENSIONS};
pub use result_classifier::{classify, Classification, QuestionKind};
