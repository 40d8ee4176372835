use phf::{Map, phf_map};
use serde::Serialize;
use std::fmt;

/// The fields a docking score table must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnRole {
    Ligand,
    Mode,
    Affinity,
}

impl ColumnRole {
    pub const ALL: [ColumnRole; 3] = [ColumnRole::Ligand, ColumnRole::Mode, ColumnRole::Affinity];

    /// Header name written by the docking pipeline's summary export.
    pub fn canonical_name(self) -> &'static str {
        match self {
            ColumnRole::Ligand => "Ligand",
            ColumnRole::Mode => "Mode",
            ColumnRole::Affinity => "Affinity_(kcal/mol)",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnRole::Ligand => "ligand",
            ColumnRole::Mode => "mode",
            ColumnRole::Affinity => "affinity",
        };
        f.write_str(name)
    }
}

/// Lower-cased header spellings recognized without an explicit column name.
#[rustfmt::skip]
pub static COLUMN_ALIASES: Map<&'static str, ColumnRole> = phf_map! {
    // --- Ligand identifier ---
    "ligand" => ColumnRole::Ligand, "ligand_id" => ColumnRole::Ligand,
    "ligandid" => ColumnRole::Ligand, "ligand_name" => ColumnRole::Ligand,
    "compound" => ColumnRole::Ligand, "compound_id" => ColumnRole::Ligand,
    "molecule" => ColumnRole::Ligand,

    // --- Pose rank ---
    "mode" => ColumnRole::Mode, "pose" => ColumnRole::Mode,
    "pose_rank" => ColumnRole::Mode, "rank" => ColumnRole::Mode,

    // --- Binding affinity ---
    "affinity_(kcal/mol)" => ColumnRole::Affinity, "affinity (kcal/mol)" => ColumnRole::Affinity,
    "affinity_kcal_mol" => ColumnRole::Affinity, "affinity_kcal/mol" => ColumnRole::Affinity,
    "affinity" => ColumnRole::Affinity, "binding_affinity" => ColumnRole::Affinity,
    "docking_score" => ColumnRole::Affinity, "score" => ColumnRole::Affinity,
};

/// How to locate the required fields in a delimited table.
///
/// A `None` column name means "detect from the header using [`COLUMN_ALIASES`]".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub ligand_column: Option<String>,
    pub mode_column: Option<String>,
    pub affinity_column: Option<String>,
    pub delimiter: u8,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            ligand_column: None,
            mode_column: None,
            affinity_column: None,
            delimiter: b',',
        }
    }
}

impl TableLayout {
    pub fn column(&self, role: ColumnRole) -> Option<&str> {
        match role {
            ColumnRole::Ligand => self.ligand_column.as_deref(),
            ColumnRole::Mode => self.mode_column.as_deref(),
            ColumnRole::Affinity => self.affinity_column.as_deref(),
        }
    }
}

/// A header column located for one [`ColumnRole`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedColumn {
    pub index: usize,
    pub name: String,
}

/// Header positions of all required fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedColumns {
    pub ligand: ResolvedColumn,
    pub mode: ResolvedColumn,
    pub affinity: ResolvedColumn,
}

/// Finds the header column for `role`, or `None` if the header lacks it.
pub fn resolve_column<'h>(
    headers: impl IntoIterator<Item = &'h str>,
    role: ColumnRole,
    layout: &TableLayout,
) -> Option<ResolvedColumn> {
    let explicit = layout.column(role);
    headers
        .into_iter()
        .enumerate()
        .find(|(_, header)| {
            let header = header.trim();
            match explicit {
                Some(name) => header == name.trim(),
                None => COLUMN_ALIASES.get(header.to_lowercase().as_str()) == Some(&role),
            }
        })
        .map(|(index, header)| ResolvedColumn {
            index,
            name: header.trim().to_string(),
        })
}
