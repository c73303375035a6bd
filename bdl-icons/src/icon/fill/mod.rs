mod file_vector_16;

pub use file_vector_16::{FileVector16, FILE_VECTOR_16_PATH};
