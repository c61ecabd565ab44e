use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::complaint::{Category, Complaint, ComplaintStatus, EvidenceFile};
use crate::error::AppError;

/// Everything the archived-complaint sidebar reads, bundled the way the
/// demo shell's sample JSON files are laid out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SidebarFixture {
    #[serde(default)]
    pub complaint: Option<Complaint>,
    #[serde(default)]
    pub categorias: Option<Vec<Category>>,
    #[serde(default)]
    pub files: Option<Vec<EvidenceFile>>,
    #[serde(default)]
    pub estado: Option<ComplaintStatus>,
}

impl SidebarFixture {
    /// Decode a fixture from JSON text.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Remove categories without a name and evidence files without a link
    /// target, keeping everything else.
    ///
    /// Returns a validation error keyed by the original field path of each
    /// dropped entry, so the caller can log what went missing.
    pub fn drop_invalid_entries(&mut self) -> Result<(), AppError> {
        let mut field_errors = HashMap::new();

        if let Some(categorias) = self.categorias.as_mut() {
            let mut idx = 0;
            categorias.retain(|category| {
                let keep = !category.name.trim().is_empty();
                if !keep {
                    field_errors.insert(format!("categorias[{idx}].nombre"), "empty name".to_string());
                }
                idx += 1;
                keep
            });
        }
        if let Some(files) = self.files.as_mut() {
            let mut idx = 0;
            files.retain(|file| {
                let keep = !file.url.trim().is_empty();
                if !keep {
                    field_errors.insert(format!("files[{idx}].url"), "missing link target".to_string());
                }
                idx += 1;
                keep
            });
        }

        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Dropped invalid sidebar entries", field_errors))
        }
    }
}
