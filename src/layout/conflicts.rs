//! Conflicting files between the FalconOil and Langley packs
//!
//! Paths are relative to the pack folder and use `/` separators.

use super::{FALCON_OIL, LANGLEY};
use std::path::PathBuf;

/// Files shipped by one pack that clash with another pack's versions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictSet {
    /// Short pack name used in console messages
    pub label: &'static str,
    /// Pack folder the paths live under
    pub folder: &'static str,
    /// Paths relative to `folder`
    pub paths: &'static [&'static str],
}

impl ConflictSet {
    /// Paths relative to the base directory, e.g. `01_FalconOil/textures/...`
    ///
    /// Built component by component so the native separator is used.
    pub fn relative_paths(&self) -> Vec<PathBuf> {
        self.paths
            .iter()
            .map(|path| {
                let mut full = PathBuf::from(self.folder);
                full.extend(path.split('/'));
                full
            })
            .collect()
    }
}

/// FalconOil files removed so the Langley and later packs win
pub static FALCON_OIL_CONFLICTS: ConflictSet = ConflictSet {
    label: "FalconOil",
    folder: FALCON_OIL,
    paths: &[
        "textures/setdressing/office/OfficeBoxPapers01_Clean_d.dds",
        "textures/setdressing/office/OfficeBoxPapers01_Clean_n.dds",
        "textures/setdressing/office/OfficeBoxPapers01_d.dds",
        "textures/setdressing/office/OfficeBoxPapers01_n.dds",
        "textures/setdressing/Tires/Tires01_d.DDS",
        "textures/setdressing/Tires/Tires01_n.DDS",
        "textures/setdressing/Tires/Tires01_s.DDS",
        "textures/architecture/buildings/ResWindowSheet_d.DDS",
        "textures/architecture/buildings/ResWindowSheet_n.DDS",
        "textures/architecture/buildings/ResWindowSheet_s.DDS",
        "textures/architecture/DiamondCity/corrugatedmetal05_n.dds",
        "materials/architecture/DiamondCity/corrugatedmetal05.bgsm",
        "materials/architecture/DiamondCity/corrugatedmetal05alpha.bgsm",
    ],
};

/// Langley files removed so the later packs win
pub static LANGLEY_CONFLICTS: ConflictSet = ConflictSet {
    label: "Langley",
    folder: LANGLEY,
    paths: &[
        "textures/architecture/buildings/Bricks01_d.DDS",
        "textures/architecture/buildings/Bricks01_n.DDS",
        "textures/architecture/buildings/Bricks01_s.DDS",
        "textures/architecture/buildings/Bricks01Painted01_d.DDS",
        "textures/architecture/buildings/Bricks01Painted01_s.DDS",
        "textures/architecture/buildings/Bricks01R_d.DDS",
        "textures/architecture/buildings/Bricks01R_n.DDS",
        "textures/architecture/buildings/Bricks01R_s.DDS",
        "textures/architecture/buildings/Bricks01Trim_d.DDS",
        "textures/architecture/buildings/Bricks01Trim_n.DDS",
        "textures/architecture/buildings/Bricks01Trim_s.DDS",
        "textures/architecture/buildings/Bricks02_d.DDS",
        "textures/architecture/buildings/Bricks02R_d.DDS",
        "textures/architecture/buildings/Bricks02Trim_d.DDS",
        "textures/architecture/buildings/BricksDarkRed01_d.DDS",
        "textures/architecture/buildings/BricksFactory01_d.DDS",
        "textures/architecture/buildings/BricksFactory01R_d.DDS",
        "textures/architecture/buildings/BricksGreen01_d.DDS",
        "textures/architecture/buildings/BricksGreen01_n.DDS",
        "textures/architecture/buildings/BricksGS01_d.DDS",
        "textures/architecture/buildings/BricksGS01_s.DDS",
        "textures/architecture/buildings/BricksRed01_d.DDS",
        "textures/architecture/buildings/BricksWhite01_d.DDS",
        "textures/architecture/buildings/BricksWhite01_n.DDS",
        "textures/architecture/buildings/BricksWhite01R_d.DDS",
        "textures/architecture/buildings/BrickTrim01_d.DDS",
        "textures/architecture/buildings/BrickTrim01_n.DDS",
        "textures/architecture/buildings/BrickTrim01_s.DDS",
        "textures/architecture/buildings/BrickWhite02Win01_d.DDS",
        "textures/architecture/buildings/BrickWhite02Win01_n.DDS",
        "textures/architecture/buildings/Debris01_d.DDS",
        "textures/architecture/buildings/Debris01_n.DDS",
        "textures/architecture/buildings/Debris01_s.DDS",
        "textures/architecture/buildings/Debris02_d.DDS",
        "textures/architecture/buildings/Plaster01_d.DDS",
        "textures/architecture/buildings/Plaster01_n.DDS",
        "textures/architecture/buildings/Plaster01_s.DDS",
        "textures/architecture/buildings/Plaster02_d.DDS",
        "textures/architecture/buildings/Plaster02_n.DDS",
        "textures/architecture/buildings/Plaster02_s.DDS",
        "textures/architecture/buildings/ResAwningFabric01_d.DDS",
        "textures/architecture/buildings/ResAwningFabric01_n.DDS",
        "textures/architecture/buildings/ResAwningFabric01_s.DDS",
        "textures/architecture/buildings/ResAwningFabric02_d.DDS",
        "textures/architecture/buildings/resawningfabric03_d.DDS",
        "textures/architecture/buildings/resawningfabric03_s.DDS",
        "textures/architecture/buildings/ResAwningFabric04_d.DDS",
        "textures/architecture/buildings/WoodFloor01_d.DDS",
        "textures/architecture/buildings/WoodFloor01_n.DDS",
        "textures/architecture/buildings/WoodFloor01_s.DDS",
        "textures/interiors/building/bldwoodfloor01_d.dds",
        "textures/interiors/building/bldwoodfloor01_n.dds",
        "textures/interiors/building/bldwoodfloor01_s.dds",
        "textures/SetDressing/WoodFederalistFurniture01_d.DDS",
        "textures/SetDressing/WoodFederalistFurniture01_n.DDS",
        "textures/SetDressing/WoodFederalistFurniture01_s.DDS",
        "materials/architecture/buildings/BrickBrownstone01.bgsm",
        "materials/architecture/buildings/BrickBrownstonePainted01.bgsm",
        "materials/architecture/buildings/BrickBrownstonePainted02.bgsm",
        "materials/architecture/buildings/BrickGreenLt01.bgsm",
        "materials/architecture/buildings/BrickRed01.BGSM",
        "materials/architecture/buildings/BrickRedDamageDecal01.BGSM",
        "materials/architecture/buildings/BricksFactory01.BGSM",
        "materials/architecture/buildings/BrickSolidWhitePaint01.bgsm",
        "materials/architecture/buildings/BrickTan01.BGSM",
        "materials/architecture/buildings/BrickTanLt01.bgsm",
    ],
};

/// Conflict sets in the order they are removed
pub static CONFLICT_SETS: [&ConflictSet; 2] = [&FALCON_OIL_CONFLICTS, &LANGLEY_CONFLICTS];
