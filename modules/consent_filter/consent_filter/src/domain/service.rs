//! Policy orchestrator.
//!
//! ## Decision sequence
//!
//! Evaluated top to bottom, stopping at the first tier that releases:
//!
//! | tier | condition                          | released data        |
//! |------|------------------------------------|----------------------|
//! | 1    | query purpose listed in catalog    | full dataset         |
//! | 2    | any contract with status `true`    | full dataset         |
//! | 3    | otherwise                          | consent-filtered     |
//!
//! The output header is captured from the first dataset record before any
//! tier runs, and every released row is projected onto it.

use std::sync::Arc;

use consent_filter_sdk::{
    ContractCheck, DecisionReporter, PolicyInputs, PurposeCheck, RecordStore, ReleaseBasis,
    ReleaseOutcome,
};
use tracing::info;

use super::{DomainError, LoggingReporter, access, consent, contract, purpose};
use crate::config::ConsentFilterConfig;

/// Consent filter service.
pub struct Service {
    config: ConsentFilterConfig,
    reporter: Arc<dyn DecisionReporter>,
}

impl Service {
    #[must_use]
    pub fn new(config: ConsentFilterConfig, reporter: Arc<dyn DecisionReporter>) -> Self {
        Self { config, reporter }
    }

    /// Validate `config` and build a service that logs through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfig`] if the configuration is unusable.
    pub fn from_config(config: ConsentFilterConfig) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self::new(config, Arc::new(LoggingReporter)))
    }

    /// Run the three-tier decision over fully loaded inputs.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingField`] if a contract lacks its status,
    /// a consent row lacks one of its fields, or (on the consent tier) a
    /// dataset record lacks its identification field.
    pub fn decide(&self, inputs: &PolicyInputs) -> Result<ReleaseOutcome, DomainError> {
        let cfg = &self.config;
        let dataset = &inputs.dataset;
        let header = dataset.header();

        let purpose_check =
            purpose::matches(&cfg.query_purpose, &inputs.purpose_catalog, &cfg.purpose_field);
        self.reporter.purpose_checked(&purpose_check);
        if purpose_check.is_match() {
            return Ok(self.release(ReleaseOutcome {
                basis: ReleaseBasis::PurposeMatch,
                table: dataset.project(&header),
                header,
                purpose: purpose_check,
                contract: None,
                grants: None,
            }));
        }

        let contract_check = contract::has_active_contract(&inputs.contracts, &cfg.status_field)?;
        self.reporter.contract_checked(&contract_check);
        if contract_check.is_active() {
            return Ok(self.release(ReleaseOutcome {
                basis: ReleaseBasis::ActiveContract,
                table: dataset.project(&header),
                header,
                purpose: purpose_check,
                contract: Some(contract_check),
                grants: None,
            }));
        }

        self.release_by_consent(inputs, header, purpose_check, contract_check)
    }

    /// Load the four input tables, decide, and write the released table.
    ///
    /// All inputs are read before any decision is taken; nothing is written
    /// if reading or deciding fails.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Store`] for read/write failures and any error
    /// from [`Service::decide`].
    pub fn run(&self, store: &dyn RecordStore) -> Result<ReleaseOutcome, DomainError> {
        let cfg = &self.config;
        let inputs = PolicyInputs {
            purpose_catalog: store.read_table(&cfg.purpose_catalog_path)?,
            dataset: store.read_table(&cfg.dataset_path)?,
            contracts: store.read_table(&cfg.contracts_path)?,
            consents: store.read_table(&cfg.consents_path)?,
        };
        info!(
            purpose_rows = inputs.purpose_catalog.len(),
            dataset_rows = inputs.dataset.len(),
            contract_rows = inputs.contracts.len(),
            consent_rows = inputs.consents.len(),
            "Loaded policy inputs"
        );

        let outcome = self.decide(&inputs)?;
        store.write_table(&cfg.output_path, &outcome.header, &outcome.table)?;
        info!(
            output = %cfg.output_path.display(),
            basis = outcome.basis.as_str(),
            "Released dataset written"
        );
        Ok(outcome)
    }

    fn release_by_consent(
        &self,
        inputs: &PolicyInputs,
        header: Vec<String>,
        purpose_check: PurposeCheck,
        contract_check: ContractCheck,
    ) -> Result<ReleaseOutcome, DomainError> {
        let cfg = &self.config;
        let grants = consent::resolve_consent(
            &inputs.consents,
            &cfg.consent_subject_field,
            &cfg.consent_level_field,
            &cfg.consent_info_field,
        )?;
        self.reporter.consent_resolved(&grants);

        let filtered = access::apply_filter(&inputs.dataset, &cfg.identification_field, &grants)?;
        Ok(self.release(ReleaseOutcome {
            basis: ReleaseBasis::Consent,
            table: filtered.project(&header),
            header,
            purpose: purpose_check,
            contract: Some(contract_check),
            grants: Some(grants),
        }))
    }

    fn release(&self, outcome: ReleaseOutcome) -> ReleaseOutcome {
        self.reporter.released(&outcome);
        outcome
    }
}
