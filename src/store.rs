//! CSV persistence for lead records
//!
//! Storage layout: one shared file, header row first, one lead per row.
//!
//! ```text
//! Nome,Telefone,Email,Faturamento,Tipo_Empresa,Data_Cadastro,Status_Contato
//! Ana,111,a@x.com,10000,clinica,05/08/2026 14:02:11,pendente
//! ```
//!
//! Rows are append-only from the simulation endpoint; the only mutation is
//! `update_status_by_email`, which rewrites the whole table. All file
//! operations are serialized behind an internal mutex (single-writer within
//! the process; nothing guards against a second process).

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timestamp format used in the `Data_Cadastro` column, server-local time.
pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Initial contact status assigned to every new lead.
pub const STATUS_PENDENTE: &str = "pendente";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("email not provided")]
    MissingEmail,
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// A persisted lead record. Field names map to the CSV header columns and
/// to the display-facing keys of the admin API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    #[serde(rename = "Nome", default)]
    pub nome: String,
    #[serde(rename = "Telefone", default)]
    pub telefone: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Faturamento", default = "default_faturamento")]
    pub faturamento: String,
    #[serde(rename = "Tipo_Empresa", default)]
    pub tipo_empresa: String,
    #[serde(rename = "Data_Cadastro", default)]
    pub data_cadastro: String,
    #[serde(rename = "Status_Contato", default = "default_status")]
    pub status_contato: String,
}

fn default_faturamento() -> String {
    "0".to_string()
}

fn default_status() -> String {
    STATUS_PENDENTE.to_string()
}

/// Caller-supplied fields of a new lead. The store fills in the
/// registration timestamp and the initial contact status.
#[derive(Debug, Clone)]
pub struct NewLead {
    pub nome: String,
    pub telefone: String,
    pub email: String,
    pub faturamento: f64,
    pub tipo_empresa: String,
}

/// CSV-backed store for lead records.
pub struct LeadStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LeadStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one lead row, creating the file and header on first write.
    /// The registration timestamp is taken here, not from the caller.
    pub fn append(&self, new: &NewLead) -> Result<()> {
        let _guard = self.lock.lock().unwrap();

        let write_header = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);

        writer.serialize(Lead {
            nome: new.nome.clone(),
            telefone: new.telefone.clone(),
            email: new.email.clone(),
            faturamento: new.faturamento.to_string(),
            tipo_empresa: new.tipo_empresa.clone(),
            data_cadastro: Local::now().format(DATE_FORMAT).to_string(),
            status_contato: STATUS_PENDENTE.to_string(),
        })?;
        writer.flush()?;
        Ok(())
    }

    /// All records, oldest first. An absent file is an empty table.
    pub fn read_all(&self) -> Result<Vec<Lead>> {
        let _guard = self.lock.lock().unwrap();
        self.read_all_inner()
    }

    /// Set `Status_Contato` on the first record whose email matches, then
    /// rewrite the whole table. An empty table skips the rewrite. A search
    /// miss still rewrites and still succeeds; duplicate emails keep every
    /// row after the first unchanged.
    pub fn update_status_by_email(&self, email: &str, status: &str) -> Result<()> {
        if email.is_empty() {
            return Err(StoreError::MissingEmail);
        }

        let _guard = self.lock.lock().unwrap();
        let mut leads = self.read_all_inner()?;
        if leads.is_empty() {
            return Ok(());
        }

        for lead in &mut leads {
            if lead.email == email {
                lead.status_contato = status.to_string();
                break;
            }
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        for lead in &leads {
            writer.serialize(lead)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn read_all_inner(&self) -> Result<Vec<Lead>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut leads = Vec::new();
        for row in reader.deserialize() {
            leads.push(row?);
        }
        Ok(leads)
    }
}
