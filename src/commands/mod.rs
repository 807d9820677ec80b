pub mod annotate;

pub use annotate::{AnnotateSummary, Sources, annotate_file, load_config, run_annotate};
