pub mod error;
pub mod pass;
pub mod paths;
pub mod settings;

pub use error::{PassError, Result};
pub use pass::{PassSummary, rewrite_file, rewrite_stream};
pub use paths::{OUTPUT_SUFFIX, default_output_path, same_file};
pub use settings::load_settings;
