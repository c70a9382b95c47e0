//! Fixed folder layout of an HDTP install
//!
//! The base directory holds one folder per texture pack. Folder order is the
//! copy order, so a later pack overwrites an earlier one on name collisions.

mod conflicts;

pub use conflicts::{ConflictSet, CONFLICT_SETS, FALCON_OIL_CONFLICTS, LANGLEY_CONFLICTS};

pub const FALCON_OIL: &str = "01_FalconOil";
pub const LANGLEY: &str = "02_Langley";

/// One texture pack folder under the base directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFolder {
    /// Directory name relative to the base path
    pub name: &'static str,
    /// Pack name shown to the user
    pub description: &'static str,
}

/// Every required pack folder, in copy order
pub static SOURCE_FOLDERS: [SourceFolder; 7] = [
    SourceFolder {
        name: FALCON_OIL,
        description: "FalconOil's Complete Retexture Project",
    },
    SourceFolder {
        name: LANGLEY,
        description: "Langley's HD Textures Workshop",
    },
    SourceFolder {
        name: "03_Valius",
        description: "High Resolution Texture Pack 2K and 4K - Valius",
    },
    SourceFolder {
        name: "04_NMC",
        description: "NMC's Texture Bundle",
    },
    SourceFolder {
        name: "05_Lucid",
        description: "Lucid's Texture Upgrades",
    },
    SourceFolder {
        name: "06_TilesRubble01",
        description: "SavrenX TilesRubble01",
    },
    SourceFolder {
        name: "07_Other",
        description: "Other",
    },
];

/// Names of the folders that must exist under the base path
pub fn required_folder_names() -> impl Iterator<Item = &'static str> {
    SOURCE_FOLDERS.iter().map(|folder| folder.name)
}
