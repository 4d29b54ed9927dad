use crate::animation::sampler::SampledCurve;
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Saves the sampled curve as a two-column csv with an `x,y` header.
/// Non-finite samples are written as empty cells.
pub fn save_samples_to_csv(curve: &SampledCurve, path: &Path) -> Result<(), String> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| format!("cannot create {}: {}", path.display(), e))?;
    wtr.write_record(["x", "y"])
        .map_err(|e| format!("csv write failed: {}", e))?;
    for (x, y) in curve.x.iter().zip(curve.y.iter()) {
        let y_cell = if y.is_finite() {
            y.to_string()
        } else {
            String::new()
        };
        wtr.write_record([x.to_string(), y_cell])
            .map_err(|e| format!("csv write failed: {}", e))?;
    }
    wtr.flush()
        .map_err(|e| format!("csv flush failed: {}", e))?;
    info!("saved {} samples to {}", curve.len(), path.display());
    Ok(())
}

/// Saves the sampled curve tab-separated, one `x\ty` pair per line.
pub fn save_samples_to_file(curve: &SampledCurve, path: &Path) -> Result<(), String> {
    let mut file =
        File::create(path).map_err(|e| format!("cannot create {}: {}", path.display(), e))?;
    writeln!(file, "x\ty").map_err(|e| format!("write failed: {}", e))?;
    for (x, y) in curve.x.iter().zip(curve.y.iter()) {
        writeln!(file, "{}\t{}", x, y).map_err(|e| format!("write failed: {}", e))?;
    }
    info!("saved {} samples to {}", curve.len(), path.display());
    Ok(())
}
