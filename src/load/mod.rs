pub mod csv_file_loader;
pub mod error;
pub mod loader_factory;
pub mod traits;

pub use csv_file_loader::CsvFileLoader;
pub use loader_factory::LoaderFactory;
