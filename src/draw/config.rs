use serde::{Deserialize, Serialize};
use std::fs;

use crate::draw::DrawError;

/// Canvas settings for rendered drawings, in pixels.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct DrawConfig {
    pub width: usize,
    pub height: usize,
    pub padding: usize,
    pub node_radius: usize,
}

impl DrawConfig {
    /// Loads a config from a YAML file.
    pub fn from_yaml_file(filename: &str) -> Result<Self, DrawError> {
        let contents = fs::read_to_string(filename)?;

        Ok(serde_yaml::from_str(&contents)?)
    }
}

impl Default for DrawConfig {
    fn default() -> Self {
        DrawConfig {
            width: 1000,
            height: 1000,
            padding: 50,
            node_radius: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn yaml_file_loads() {
        let path = std::env::temp_dir().join("graph_repr_draw_config.yaml");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            "width: 640\nheight: 480\npadding: 20\nnode_radius: 5\n"
        )
        .unwrap();

        let config = DrawConfig::from_yaml_file(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(
            config,
            DrawConfig {
                width: 640,
                height: 480,
                padding: 20,
                node_radius: 5,
            }
        );
    }

    #[test]
    fn invalid_yaml_errors() {
        let path = std::env::temp_dir().join("graph_repr_bad_config.yaml");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "width: many\n").unwrap();

        let err = DrawConfig::from_yaml_file(path.to_str().unwrap()).err();
        fs::remove_file(&path).ok();

        assert!(
            matches!(err, Some(DrawError::InvalidConfig(_))),
            "Unparsable YAML should report an invalid config."
        );
    }
}
