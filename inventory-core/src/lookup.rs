//! Dropdown options for the three reference tables.

use serde::{Deserialize, Serialize};

use crate::models::{RecordId, ReferenceRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    Category,
    Unit,
    Status,
}

impl LookupKind {
    pub const ALL: [LookupKind; 3] = [LookupKind::Category, LookupKind::Unit, LookupKind::Status];

    pub fn endpoint(&self) -> &'static str {
        match self {
            LookupKind::Category => "/api/categorias/",
            LookupKind::Unit => "/api/unidades/",
            LookupKind::Status => "/api/estados/",
        }
    }

    /// Placeholder shown while nothing is selected.
    pub fn placeholder(&self) -> &'static str {
        match self {
            LookupKind::Category => "Selecciona categoría",
            LookupKind::Unit => "Selecciona unidad",
            LookupKind::Status => "Selecciona estado",
        }
    }
}

/// `{id, displayName}` projection of a reference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupOption {
    pub id: RecordId,
    pub name: String,
}

impl LookupOption {
    pub fn from_record<R: ReferenceRecord>(record: &R) -> Self {
        Self {
            id: record.id(),
            name: record.display_name().to_string(),
        }
    }
}

pub fn project<R: ReferenceRecord>(records: &[R]) -> Vec<LookupOption> {
    records.iter().map(LookupOption::from_record).collect()
}

/// Options loaded at mount. Replaced wholesale on every load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupCache {
    pub categories: Vec<LookupOption>,
    pub units: Vec<LookupOption>,
    pub statuses: Vec<LookupOption>,
}

impl LookupCache {
    pub fn new(
        categories: Vec<LookupOption>,
        units: Vec<LookupOption>,
        statuses: Vec<LookupOption>,
    ) -> Self {
        Self {
            categories,
            units,
            statuses,
        }
    }

    pub fn options(&self, kind: LookupKind) -> &[LookupOption] {
        match kind {
            LookupKind::Category => &self.categories,
            LookupKind::Unit => &self.units,
            LookupKind::Status => &self.statuses,
        }
    }

    pub fn label(&self, kind: LookupKind, id: RecordId) -> Option<&str> {
        self.options(kind)
            .iter()
            .find(|option| option.id == id)
            .map(|option| option.name.as_str())
    }
}
