//! Upload progress reporting.
//!
//! Purely advisory: drives the progress bar on the dish upload form and has no
//! effect on what gets compressed or saved.

use serde::{Deserialize, Serialize};

/// Phase of the add-dish workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UploadStage {
    /// Compressing the picture into a data URI.
    Encoding,
    /// Writing the record to the document store.
    #[serde(rename = "firestore", alias = "saving")]
    Saving,
}

impl UploadStage {
    /// Where this stage starts on the overall 0-100 bar.
    fn offset(self) -> f32 {
        match self {
            UploadStage::Encoding => 0.0,
            UploadStage::Saving => 50.0,
        }
    }

    /// Share of the overall bar this stage covers.
    fn weight(self) -> f32 {
        0.5
    }
}

/// One progress update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadProgress {
    pub stage: UploadStage,
    /// Progress within the stage, 0-100.
    pub progress: u8,
    pub message: String,
}

impl UploadProgress {
    pub fn new(stage: UploadStage, progress: u8, message: impl Into<String>) -> Self {
        Self {
            stage,
            progress: progress.min(100),
            message: message.into(),
        }
    }

    /// Position on the combined bar where encoding and saving each take half.
    pub fn overall_percent(&self) -> f32 {
        self.stage.offset() + f32::from(self.progress) * self.stage.weight()
    }
}
