//! Configuration for the consent filter module.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Module configuration.
///
/// Every key also accepts its Portuguese name from legacy `parametros.json`
/// files, so existing parameter files load unchanged. Serialization always
/// uses the English names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsentFilterConfig {
    /// Table of approved query purposes.
    #[serde(alias = "caminho_arquivo_finalidade")]
    pub purpose_catalog_path: PathBuf,

    /// The dataset being released.
    #[serde(alias = "caminho_arquivo_dados")]
    pub dataset_path: PathBuf,

    /// Contract registry.
    #[serde(alias = "caminho_arquivo_contrato")]
    pub contracts_path: PathBuf,

    /// Consent registry.
    #[serde(alias = "caminho_arquivo_consentimento")]
    pub consents_path: PathBuf,

    /// Destination of the released table.
    #[serde(alias = "caminho_arquivo_dados_novo")]
    pub output_path: PathBuf,

    /// Purpose the data is being requested for.
    #[serde(alias = "finalidade_consulta")]
    pub query_purpose: String,

    /// Purpose column of the purpose catalog.
    #[serde(alias = "campo_finalidade")]
    pub purpose_field: String,

    /// Status column of the contract registry.
    #[serde(alias = "campo_status")]
    pub status_field: String,

    /// Subject identifier column of the dataset.
    #[serde(alias = "campo_identificacao")]
    pub identification_field: String,

    /// Subject identifier column of the consent registry.
    #[serde(alias = "campo_cpf")]
    pub consent_subject_field: String,

    /// Consent level column of the consent registry.
    #[serde(alias = "campo_consent_level")]
    pub consent_level_field: String,

    /// Authorized-fields column of the consent registry.
    #[serde(alias = "campo_consent_info")]
    pub consent_info_field: String,
}

impl ConsentFilterConfig {
    /// Reject field selectors that can never match a column.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfig`] naming the first blank selector.
    pub fn validate(&self) -> Result<(), DomainError> {
        let selectors = [
            ("purpose_field", &self.purpose_field),
            ("status_field", &self.status_field),
            ("identification_field", &self.identification_field),
            ("consent_subject_field", &self.consent_subject_field),
            ("consent_level_field", &self.consent_level_field),
            ("consent_info_field", &self.consent_info_field),
        ];

        for (key, value) in selectors {
            if value.trim().is_empty() {
                return Err(DomainError::InvalidConfig {
                    reason: format!("`{key}` must name a column"),
                });
            }
        }
        Ok(())
    }
}
