pub mod archive_reader;
pub use archive_reader::read_table;
pub mod claims_source;
pub use claims_source::read_in_all_files;
pub mod error;
pub mod file_collector;
pub use file_collector::{CollectedFile, FileCollector};
