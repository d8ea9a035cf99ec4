pub mod init;
pub mod logger;
pub mod serde;
pub mod similarity;
pub mod templates;

pub use similarity::cosine_similarity;
pub use templates::{get_template_source, render_template};
