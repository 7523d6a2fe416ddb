//! Contract ABI loading.
//!
//! Each token contract has one ABI file name, looked up in an ordered list of
//! directories. The first candidate that exists, parses, and declares the
//! required mint function wins; later candidates are not read.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::json_abi::{Event, Function, JsonAbi};
use log::{debug, info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::constants::{
    FUNGIBLE_ABI_FILE, FUNGIBLE_MINT_SIGNATURE, NON_FUNGIBLE_ABI_FILE,
    NON_FUNGIBLE_MINT_SIGNATURE,
};

#[derive(Debug, Error)]
pub enum AbiError {
    #[error("Failed to read {path}: {message}")]
    Io { path: PathBuf, message: String },
    #[error("Invalid ABI JSON in {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("ABI in {path} does not declare {signature}")]
    MissingFunction { path: PathBuf, signature: String },
    #[error("{file_name} not found in any of {searched:?}")]
    NotFound {
        file_name: String,
        searched: Vec<PathBuf>,
    },
}

/// Accepts both a bare ABI array and a compiler artifact carrying an `abi` field.
#[derive(Deserialize)]
#[serde(untagged)]
enum AbiDocument {
    Bare(JsonAbi),
    Artifact { abi: JsonAbi },
}

impl From<AbiDocument> for JsonAbi {
    fn from(doc: AbiDocument) -> Self {
        match doc {
            AbiDocument::Bare(abi) | AbiDocument::Artifact { abi } => abi,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedAbi {
    pub abi: JsonAbi,
    /// File the ABI was read from.
    pub source: PathBuf,
}

impl LoadedAbi {
    /// Finds a function by its canonical signature, e.g. `mint(address,uint256)`.
    pub fn function(&self, signature: &str) -> Option<&Function> {
        self.abi.functions().find(|f| f.signature() == signature)
    }

    pub fn event(&self, name: &str) -> Option<&Event> {
        self.abi.event(name).and_then(|events| events.first())
    }
}

/// Reads and parses one ABI file, requiring `signature` to be declared.
pub fn parse_abi_file(path: &Path, signature: &str) -> Result<LoadedAbi, AbiError> {
    let content = fs::read_to_string(path).map_err(|e| AbiError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let document: AbiDocument =
        serde_json::from_str(&content).map_err(|e| AbiError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let loaded = LoadedAbi {
        abi: document.into(),
        source: path.to_path_buf(),
    };

    if loaded.function(signature).is_none() {
        return Err(AbiError::MissingFunction {
            path: path.to_path_buf(),
            signature: signature.to_string(),
        });
    }

    Ok(loaded)
}

/// Returns the first usable `file_name` found under `dirs`, in order.
pub fn load_first(
    dirs: &[PathBuf],
    file_name: &str,
    signature: &str,
) -> Result<LoadedAbi, AbiError> {
    let mut searched = Vec::with_capacity(dirs.len());

    for dir in dirs {
        let candidate = dir.join(file_name);
        if !candidate.is_file() {
            debug!("ABI candidate {} does not exist", candidate.display());
            searched.push(candidate);
            continue;
        }

        match parse_abi_file(&candidate, signature) {
            Ok(loaded) => return Ok(loaded),
            Err(e) => {
                warn!("Skipping ABI candidate: {e}");
                searched.push(candidate);
            }
        }
    }

    Err(AbiError::NotFound {
        file_name: file_name.to_string(),
        searched,
    })
}

/// ABIs of both token contracts, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct AbiStore {
    pub fungible: Option<LoadedAbi>,
    pub non_fungible: Option<LoadedAbi>,
}

impl AbiStore {
    /// Loads both ABIs. A missing ABI is logged and left empty; only the
    /// mint path that needs it will fail.
    pub fn load(dirs: &[PathBuf]) -> Self {
        Self {
            fungible: load_logged(dirs, FUNGIBLE_ABI_FILE, FUNGIBLE_MINT_SIGNATURE),
            non_fungible: load_logged(dirs, NON_FUNGIBLE_ABI_FILE, NON_FUNGIBLE_MINT_SIGNATURE),
        }
    }
}

fn load_logged(dirs: &[PathBuf], file_name: &str, signature: &str) -> Option<LoadedAbi> {
    match load_first(dirs, file_name, signature) {
        Ok(loaded) => {
            info!("Loaded {} from {}", file_name, loaded.source.display());
            Some(loaded)
        }
        Err(e) => {
            warn!("ABI unavailable: {e}");
            None
        }
    }
}
