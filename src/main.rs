//MIT License
use graphmotion::Utils::io::save_samples_to_csv;
use graphmotion::Utils::logger::init_logging;
use graphmotion::animation::renderer::{RenderStyle, render_gif, render_png};
use graphmotion::animation::scene::{DEFAULT_FRAME_DELAY_MS, Scene};
use graphmotion::animation::viewport::ViewportPlanner;
use log::error;
use simplelog::LevelFilter;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

fn main() {
    init_logging(LevelFilter::Info, None, true);

    let mut args = std::env::args().skip(1);
    let result = match args.next() {
        Some(task_path) => run_task_file(Path::new(&task_path)),
        None => run_interactive(),
    };
    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Batch mode: everything comes from a TOML task file.
fn run_task_file(path: &Path) -> Result<(), String> {
    let (scene, export) = Scene::from_task_file(path)?;
    println!("Parsed equation: y = {}", scene.expr);
    let curve = scene.sample()?;
    let planner = ViewportPlanner::new(&curve);
    let style = RenderStyle::default();

    if export.is_empty() {
        return Err("task file requests no export, add an [export] table".to_string());
    }
    if let Some(gif) = &export.gif {
        render_gif(gif, &curve, &planner, scene.frame_delay_ms, &style)
            .map_err(|e| format!("gif export failed: {}", e))?;
        println!("Animation saved as {}", gif.display());
    }
    if let Some(png) = &export.png {
        render_png(png, &curve, &planner, &style)
            .map_err(|e| format!("png export failed: {}", e))?;
        println!("Snapshot saved as {}", png.display());
    }
    if let Some(csv) = &export.csv {
        save_samples_to_csv(&curve, csv)?;
        println!("Samples saved as {}", csv.display());
    }
    Ok(())
}

/// Interactive mode: the same flow as batch mode, but every field is prompted.
fn run_interactive() -> Result<(), String> {
    let speed = prompt_speed()?;

    println!("Enter the equation for y in terms of x (e.g., sin(x) + x**2):");
    let equation = prompt("y = ")?;
    let x_min = prompt_f64("Enter the minimum value of x: ")?;
    let x_max = prompt_f64("Enter the maximum value of x: ")?;

    let scene = Scene::new(&equation, x_min, x_max)?.with_speed_ms(speed);
    println!("Parsed equation: y = {}", scene.expr);
    println!("x range: [{}, {}]", scene.x_min, scene.x_max);

    let curve = scene.sample()?;
    let planner = ViewportPlanner::new(&curve);
    let style = RenderStyle::default();

    let filename = prompt("Enter a filename for the animation (without extension): ")?;
    let format = prompt("Choose a format (gif/png): ")?.to_lowercase();
    match format.as_str() {
        "gif" => {
            let path = PathBuf::from(format!("{}.gif", filename));
            render_gif(&path, &curve, &planner, scene.frame_delay_ms, &style)
                .map_err(|e| format!("gif export failed: {}", e))?;
            println!("Animation saved as {}", path.display());
        }
        "png" => {
            let path = PathBuf::from(format!("{}.png", filename));
            render_png(&path, &curve, &planner, &style)
                .map_err(|e| format!("png export failed: {}", e))?;
            println!("Snapshot saved as {}", path.display());
        }
        "mp4" => {
            return Err("mp4 export is not supported, choose gif or png".to_string());
        }
        other => {
            return Err(format!("unknown format '{}', choose gif or png", other));
        }
    }

    let save_csv = prompt("Save the sampled points as csv? (y/n): ")?;
    if save_csv.eq_ignore_ascii_case("y") {
        let path = PathBuf::from(format!("{}.csv", filename));
        save_samples_to_csv(&curve, &path)?;
        println!("Samples saved as {}", path.display());
    }
    Ok(())
}

fn prompt(message: &str) -> Result<String, String> {
    print!("{}", message);
    io::stdout()
        .flush()
        .map_err(|e| format!("stdout error: {}", e))?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|e| format!("stdin error: {}", e))?;
    Ok(line.trim().to_string())
}

fn prompt_f64(message: &str) -> Result<f64, String> {
    let raw = prompt(message)?;
    raw.parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", raw))
}

/// Frame delay prompt; anything unparsable falls back to the default.
fn prompt_speed() -> Result<i64, String> {
    let raw = prompt("Enter the animation speed in ms per frame (default 20): ")?;
    if raw.is_empty() {
        return Ok(DEFAULT_FRAME_DELAY_MS as i64);
    }
    match raw.parse::<i64>() {
        Ok(speed) => Ok(speed),
        Err(_) => {
            println!(
                "Invalid input. Using default speed {}.",
                DEFAULT_FRAME_DELAY_MS
            );
            Ok(DEFAULT_FRAME_DELAY_MS as i64)
        }
    }
}
