use crate::config::{ConfigLoader, PipelineConfig};
use crate::error::{ConstructionError, PipelineError};
use crate::extract::read_in_all_files;
use crate::load::LoaderFactory;
use crate::load::traits::Loadable;
use crate::transform::{CoreClaimsBuilder, SummaryLinker};
use log::info;
use polars::prelude::DataFrame;
use std::path::PathBuf;
use validator::Validate;

/// Extracts the inpatient claims, builds the core claims table, links the
/// beneficiary summaries onto it and optionally stores the result.
#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    claims_builder: CoreClaimsBuilder,
    summary_linker: SummaryLinker,
    loader: Option<Box<dyn Loadable>>,
}

impl Pipeline {
    pub fn new(config: PipelineConfig, loader: Option<Box<dyn Loadable>>) -> Pipeline {
        Pipeline {
            claims_builder: CoreClaimsBuilder::new(config.frequency_threshold),
            summary_linker: SummaryLinker::new(
                config.summary_pattern.clone(),
                config.death_date_years.clone(),
                config.death_comparison,
            ),
            config,
            loader,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs all stages and returns the merged claims table.
    pub fn run(&self) -> Result<DataFrame, PipelineError> {
        self.config.validate()?;
        let claims = self.extract()?;
        let mut merged = self.transform(claims)?;
        self.load(&mut merged)?;
        Ok(merged)
    }

    pub fn extract(&self) -> Result<DataFrame, PipelineError> {
        info!("Starting extract");
        let claims = read_in_all_files(&self.config.data_dir, &self.config.claims_pattern)?;
        info!("Concluded extraction. Read {} claims", claims.height());
        Ok(claims)
    }

    pub fn transform(&self, claims: DataFrame) -> Result<DataFrame, PipelineError> {
        info!("Starting Transformation");
        let core_claims = self.claims_builder.build(claims)?;
        info!("Built core claims table with shape {:?}", core_claims.shape());

        let merged = self
            .summary_linker
            .add_summary_info(core_claims, &self.config.data_dir)?;
        info!("Concluded Transformation. Merged shape {:?}", merged.shape());
        Ok(merged)
    }

    pub fn load(&self, merged: &mut DataFrame) -> Result<(), PipelineError> {
        match &self.loader {
            Some(loader) => {
                loader.load(merged)?;
                info!("Concluded Loading");
            }
            None => info!("No loader configured. Skipping load"),
        }
        Ok(())
    }
}

impl TryFrom<PipelineConfig> for Pipeline {
    type Error = ConstructionError;

    fn try_from(config: PipelineConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        let loader = config.loader.clone().map(LoaderFactory::from_config);
        Ok(Pipeline::new(config, loader))
    }
}

impl TryFrom<PathBuf> for Pipeline {
    type Error = ConstructionError;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        if !path.exists() {
            return Err(ConstructionError::NoConfigFileFound(path));
        }
        let config: PipelineConfig = ConfigLoader::load(&path)?;
        Pipeline::try_from(config)
    }
}
