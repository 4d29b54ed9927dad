//! Animation task description.
//!
//! A `Scene` bundles everything one animation run needs: the equation (both
//! the raw string and the parsed tree), the x-range, the sample count and the
//! frame delay. It is built either from the interactive prompts of the binary
//! or from a TOML task file like
//!
//! ```toml
//! [scene]
//! equation = "sin(x) + x^2"
//! x_min = -5.0
//! x_max = 5.0
//! speed_ms = 20      # optional
//! n_samples = 500    # optional
//!
//! [export]
//! gif = "sine.gif"
//! png = "sine.png"   # optional
//! csv = "sine.csv"   # optional
//! ```

use crate::animation::sampler::{DEFAULT_SAMPLES, SampledCurve, sample_curve};
use crate::symbolic::symbolic_engine::Expr;
use log::warn;
use std::path::{Path, PathBuf};

/// default frame delay, milliseconds per frame
pub const DEFAULT_FRAME_DELAY_MS: u32 = 20;

#[derive(Debug, Clone)]
pub struct Scene {
    pub equation: String,
    pub expr: Expr,
    pub x_min: f64,
    pub x_max: f64,
    pub n_samples: usize,
    pub frame_delay_ms: u32,
}

/// Export targets requested by a task file.
#[derive(Debug, Clone, Default)]
pub struct ExportPlan {
    pub gif: Option<PathBuf>,
    pub png: Option<PathBuf>,
    pub csv: Option<PathBuf>,
}

impl ExportPlan {
    pub fn is_empty(&self) -> bool {
        self.gif.is_none() && self.png.is_none() && self.csv.is_none()
    }
}

impl Scene {
    /// Parses the equation and validates the range.
    pub fn new(equation: &str, x_min: f64, x_max: f64) -> Result<Scene, String> {
        if !x_min.is_finite() || !x_max.is_finite() {
            return Err("x-range must be finite".to_string());
        }
        if x_max <= x_min {
            return Err("x max must be greater than x min".to_string());
        }
        let expr = Expr::parse_expression(equation)
            .map_err(|e| format!("Error parsing equation: {}", e))?;
        let vars = expr.variables();
        if vars.len() > 1 {
            return Err(format!(
                "expected a function of one variable, found {:?}",
                vars
            ));
        }
        Ok(Scene {
            equation: equation.trim().to_string(),
            expr,
            x_min,
            x_max,
            n_samples: DEFAULT_SAMPLES,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
        })
    }

    /// Sets the frame delay; a non-positive value falls back to the default
    /// with a warning, mirroring the prompt behaviour.
    pub fn with_speed_ms(mut self, speed: i64) -> Scene {
        if speed <= 0 {
            warn!(
                "Speed must be positive. Using default {}.",
                DEFAULT_FRAME_DELAY_MS
            );
            self.frame_delay_ms = DEFAULT_FRAME_DELAY_MS;
        } else {
            self.frame_delay_ms = speed as u32;
        }
        self
    }

    pub fn with_samples(mut self, n_samples: usize) -> Result<Scene, String> {
        if n_samples < 2 {
            return Err("at least two sample points are required".to_string());
        }
        self.n_samples = n_samples;
        Ok(self)
    }

    /// Samples the equation over the configured range.
    pub fn sample(&self) -> Result<SampledCurve, String> {
        sample_curve(&self.expr, self.x_min, self.x_max, self.n_samples)
    }

    /// Loads a scene and its export targets from a TOML task file.
    pub fn from_task_file(path: &Path) -> Result<(Scene, ExportPlan), String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read task file {}: {}", path.display(), e))?;
        let doc: toml::Value = content
            .parse()
            .map_err(|e| format!("task file {}: {}", path.display(), e))?;

        let scene_table = doc
            .get("scene")
            .ok_or_else(|| "task file: missing [scene] table".to_string())?;
        let equation = scene_table
            .get("equation")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "task file: [scene] needs a string 'equation'".to_string())?;
        let x_min = value_as_f64(scene_table, "x_min")
            .ok_or_else(|| "task file: [scene] needs a numeric 'x_min'".to_string())?;
        let x_max = value_as_f64(scene_table, "x_max")
            .ok_or_else(|| "task file: [scene] needs a numeric 'x_max'".to_string())?;

        let mut scene = Scene::new(equation, x_min, x_max)?;
        if let Some(speed) = scene_table.get("speed_ms").and_then(|v| v.as_integer()) {
            scene = scene.with_speed_ms(speed);
        }
        if let Some(n) = scene_table.get("n_samples").and_then(|v| v.as_integer()) {
            scene = scene.with_samples(n.max(0) as usize)?;
        }

        let mut export = ExportPlan::default();
        if let Some(export_table) = doc.get("export") {
            export.gif = value_as_path(export_table, "gif");
            export.png = value_as_path(export_table, "png");
            export.csv = value_as_path(export_table, "csv");
        }
        Ok((scene, export))
    }
}

fn value_as_f64(table: &toml::Value, key: &str) -> Option<f64> {
    table.get(key).and_then(|v| {
        v.as_float()
            .or_else(|| v.as_integer().map(|i| i as f64))
    })
}

fn value_as_path(table: &toml::Value, key: &str) -> Option<PathBuf> {
    table.get(key).and_then(|v| v.as_str()).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_validates_range() {
        assert!(Scene::new("x", 0.0, 1.0).is_ok());
        assert!(Scene::new("x", 1.0, 0.0).is_err());
        assert!(Scene::new("x", 1.0, 1.0).is_err());
        assert!(Scene::new("x", f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_scene_rejects_multivariable_equation() {
        let err = Scene::new("x + y", 0.0, 1.0).unwrap_err();
        assert!(err.contains("one variable"), "unexpected error: {}", err);
    }

    #[test]
    fn test_scene_rejects_unparsable_equation() {
        let err = Scene::new("sin(x", 0.0, 1.0).unwrap_err();
        assert!(err.contains("Error parsing equation"));
    }

    #[test]
    fn test_speed_fallback_to_default() {
        let scene = Scene::new("x", 0.0, 1.0).unwrap().with_speed_ms(-5);
        assert_eq!(scene.frame_delay_ms, DEFAULT_FRAME_DELAY_MS);
        let scene = Scene::new("x", 0.0, 1.0).unwrap().with_speed_ms(50);
        assert_eq!(scene.frame_delay_ms, 50);
    }

    #[test]
    fn test_scene_samples_with_defaults() {
        let scene = Scene::new("sin(x)", -1.0, 1.0).unwrap();
        let curve = scene.sample().unwrap();
        assert_eq!(curve.len(), DEFAULT_SAMPLES);
    }

    #[test]
    fn test_from_task_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("task.toml");
        std::fs::write(
            &path,
            r#"
[scene]
equation = "sin(x) + x^2"
x_min = -5
x_max = 5.0
speed_ms = 40
n_samples = 100

[export]
gif = "out.gif"
csv = "out.csv"
"#,
        )
        .unwrap();
        let (scene, export) = Scene::from_task_file(&path).unwrap();
        assert_eq!(scene.equation, "sin(x) + x^2");
        assert_eq!(scene.x_min, -5.0);
        assert_eq!(scene.x_max, 5.0);
        assert_eq!(scene.frame_delay_ms, 40);
        assert_eq!(scene.n_samples, 100);
        assert_eq!(export.gif, Some(PathBuf::from("out.gif")));
        assert_eq!(export.png, None);
        assert_eq!(export.csv, Some(PathBuf::from("out.csv")));
        assert!(!export.is_empty());
    }

    #[test]
    fn test_task_file_without_scene_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("task.toml");
        std::fs::write(&path, "[export]\ngif = \"x.gif\"\n").unwrap();
        assert!(Scene::from_task_file(&path).is_err());
    }
}
