//! Point-list loader: one control point per line, `x,y[,z]`.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result, anyhow};
use extrude_core::{Vec3, vec3};

/// Fixed transforms applied while loading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoaderConfig {
    /// Uniform scale applied to `x` and `y` only.
    pub xy_scale: f32,
    /// Height used when a line omits `z`. Not scaled.
    pub default_z: f32,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            xy_scale: 50.0,
            default_z: 100.0,
        }
    }
}

/// Load control points from a file path.
pub fn load_points_from_path(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<Vec<Vec3>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open point file: {}", path.display()))?;
    let points = load_points_from_reader(BufReader::new(file), config)
        .with_context(|| format!("Failed to load point file: {}", path.display()))?;
    log::info!("Loaded {} control points from {:?}", points.len(), path);
    Ok(points)
}

/// Load control points from a [`BufRead`] implementation.
pub fn load_points_from_reader<R: BufRead>(reader: R, config: &LoaderConfig) -> Result<Vec<Vec3>> {
    parse_points(reader, config)
}

/// Convenience helper to parse points from a string.
pub fn load_points_from_str(contents: &str, config: &LoaderConfig) -> Result<Vec<Vec3>> {
    parse_points(io::Cursor::new(contents), config)
}

fn parse_points<R: BufRead>(reader: R, config: &LoaderConfig) -> Result<Vec<Vec3>> {
    let mut points = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", line_no + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let coords = trimmed
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .enumerate()
            .map(|(i, token)| parse_f32(token, line_no, i))
            .collect::<Result<Vec<f32>>>()?;

        let (x, y, z) = match coords.as_slice() {
            [x, y] => (*x, *y, config.default_z),
            [x, y, z, ..] => (*x, *y, *z),
            _ => {
                return Err(anyhow!(
                    "Expected at least 2 coordinates on line {}, found {}: '{}'",
                    line_no + 1,
                    coords.len(),
                    trimmed
                ));
            }
        };

        points.push(vec3(x * config.xy_scale, y * config.xy_scale, z));
    }

    if points.is_empty() {
        anyhow::bail!("Point list contained no control points");
    }

    Ok(points)
}

fn parse_f32(token: &str, line_no: usize, axis: usize) -> Result<f32> {
    const AXES: [&str; 3] = ["x", "y", "z"];
    let what = AXES.get(axis).copied().unwrap_or("extra");
    token
        .parse::<f32>()
        .with_context(|| format!("Failed to parse {} coordinate '{}' on line {}", what, token, line_no + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_and_three_component_lines() {
        let src = "1,2\n0.5, -1, 30\n";
        let points = load_points_from_str(src, &LoaderConfig::default()).expect("parse points");
        assert_eq!(points, vec![vec3(50.0, 100.0, 100.0), vec3(25.0, -50.0, 30.0)]);
    }

    #[test]
    fn skips_blank_comment_and_crlf_lines() {
        let src = "# track\r\n\r\n0,0\r\n\n1,1,5\r\n";
        let config = LoaderConfig {
            xy_scale: 1.0,
            default_z: 0.0,
        };
        let points = load_points_from_str(src, &config).expect("parse points");
        assert_eq!(points, vec![vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 5.0)]);
    }

    #[test]
    fn empty_tokens_are_dropped() {
        let config = LoaderConfig {
            xy_scale: 2.0,
            default_z: 7.0,
        };
        let points = load_points_from_str("3,,4,", &config).expect("parse points");
        assert_eq!(points, vec![vec3(6.0, 8.0, 7.0)]);
    }

    #[test]
    fn malformed_lines_report_line_number() {
        let config = LoaderConfig::default();

        let err = load_points_from_str("1,2\n3\n", &config).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");

        let err = load_points_from_str("1,2\n1,abc\n", &config).unwrap_err();
        assert!(err.to_string().contains("y coordinate"), "{err}");
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(load_points_from_str("", &LoaderConfig::default()).is_err());
        assert!(load_points_from_str("# nothing\n\n", &LoaderConfig::default()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_points_from_path("does/not/exist.txt", &LoaderConfig::default()).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.txt"), "{err}");
    }
}
