use crate::config::loader_config::LoaderConfig;
use crate::load::csv_file_loader::CsvFileLoader;
use crate::load::traits::Loadable;

pub struct LoaderFactory;

impl LoaderFactory {
    pub fn from_config(config: LoaderConfig) -> Box<dyn Loadable> {
        match config {
            LoaderConfig::Csv {
                output_dir,
                create_dir,
                file_name,
            } => Box::new(CsvFileLoader::new(output_dir, create_dir, file_name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::path::PathBuf;

    #[rstest]
    fn test_from_config_builds_csv_loader() {
        let loader = LoaderFactory::from_config(LoaderConfig::Csv {
            output_dir: PathBuf::from("out"),
            create_dir: true,
            file_name: None,
        });

        assert_eq!(
            format!("{loader:?}"),
            format!(
                "{:?}",
                CsvFileLoader::new(PathBuf::from("out"), true, None)
            )
        );
    }
}
