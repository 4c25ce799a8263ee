use std::{fs, path::Path};

use color_eyre::eyre::WrapErr;
use facelets::Cubie;
use serde::{Deserialize, Serialize};

/// A cube on disk: 27 orientation lists, one per cubie position.
///
/// ```toml
/// cubies = [[1, 2, 3, 4, 5, 6], [1, 2, 3, 4, 5, 6], ...]
/// ```
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CubieFile {
    pub cubies: Vec<Vec<u8>>,
}

impl CubieFile {
    pub fn read(path: &Path) -> color_eyre::Result<Self> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read cube file {path:?}"))?;

        toml::from_str(&text).wrap_err_with(|| format!("Failed to parse cube file {path:?}"))
    }

    pub fn to_toml(&self) -> color_eyre::Result<String> {
        Ok(toml::to_string(self)?)
    }
}

impl<'a> FromIterator<&'a Cubie> for CubieFile {
    fn from_iter<T: IntoIterator<Item = &'a Cubie>>(iter: T) -> Self {
        CubieFile {
            cubies: iter.into_iter().map(|cubie| cubie.sides().to_vec()).collect(),
        }
    }
}
