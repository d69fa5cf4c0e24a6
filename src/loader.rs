//! Scene description loading.
//!
//! Line-oriented plain-text format, one record per line, `#` starts a
//! comment:
//!
//! ```text
//! sphere <cx> <cy> <cz> <radius> <r> <g> <b> <shininess>
//! ambient <intensity>
//! directional <intensity> <dx> <dy> <dz>
//! point <intensity> <px> <py> <pz>
//! ```
//!
//! Directional vectors point from the surface toward the light source.
//! Malformed records and invalid geometry are reported with line numbers;
//! the engine only ever receives a fully validated scene.

use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};

use glam::Vec3A;

use spherecast::light::Light;
use spherecast::scene::Scene;
use spherecast::sphere::Sphere;

/// Load and validate a scene description file.
pub fn load_scene(path: &str) -> Result<Scene, Box<dyn Error>> {
    let file = File::open(path).map_err(|e| format!("cannot open scene file {path}: {e}"))?;
    parse_scene(BufReader::new(file))
}

/// Parse a scene description from any line source.
fn parse_scene(reader: impl BufRead) -> Result<Scene, Box<dyn Error>> {
    let mut spheres = Vec::new();
    let mut lights = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let lineno = index + 1;
        let line = line?;
        let record = line.split('#').next().unwrap_or("").trim();
        if record.is_empty() {
            continue;
        }

        let mut fields = record.split_whitespace();
        let keyword = fields.next().unwrap();
        let values = numbers(fields, lineno)?;

        match keyword {
            "sphere" => {
                let v = expect_fields(&values, 8, keyword, lineno)?;
                let color = [
                    channel(v[4], lineno)?,
                    channel(v[5], lineno)?,
                    channel(v[6], lineno)?,
                ];
                let sphere = Sphere::new(Vec3A::new(v[0], v[1], v[2]), v[3], color, v[7])
                    .map_err(|e| format!("line {lineno}: {e}"))?;
                spheres.push(sphere);
            }
            "ambient" => {
                let v = expect_fields(&values, 1, keyword, lineno)?;
                lights.push(Light::ambient(v[0]).map_err(|e| format!("line {lineno}: {e}"))?);
            }
            "directional" => {
                let v = expect_fields(&values, 4, keyword, lineno)?;
                let light = Light::directional(v[0], Vec3A::new(v[1], v[2], v[3]))
                    .map_err(|e| format!("line {lineno}: {e}"))?;
                lights.push(light);
            }
            "point" => {
                let v = expect_fields(&values, 4, keyword, lineno)?;
                let light = Light::point(v[0], Vec3A::new(v[1], v[2], v[3]))
                    .map_err(|e| format!("line {lineno}: {e}"))?;
                lights.push(light);
            }
            other => return Err(format!("line {lineno}: unknown record '{other}'").into()),
        }
    }

    Ok(Scene::new(spheres, lights))
}

fn numbers<'a>(
    fields: impl Iterator<Item = &'a str>,
    lineno: usize,
) -> Result<Vec<f32>, Box<dyn Error>> {
    fields
        .map(|field| {
            field
                .parse::<f32>()
                .map_err(|e| format!("line {lineno}: bad number '{field}': {e}").into())
        })
        .collect()
}

fn expect_fields<'a>(
    values: &'a [f32],
    expected: usize,
    keyword: &str,
    lineno: usize,
) -> Result<&'a [f32], Box<dyn Error>> {
    if values.len() != expected {
        return Err(format!(
            "line {lineno}: '{keyword}' takes {expected} numeric fields, got {}",
            values.len()
        )
        .into());
    }
    Ok(values)
}

fn channel(value: f32, lineno: usize) -> Result<u8, Box<dyn Error>> {
    if !(0.0..=255.0).contains(&value) {
        return Err(format!("line {lineno}: color channel {value} outside [0, 255]").into());
    }
    Ok(value.round() as u8)
}
