pub mod stream;
pub mod template;
pub mod write;

pub use stream::StreamSeq;
pub use template::{Document, Template, FEATURES_KEY};
pub use write::{to_writer, write_document};
