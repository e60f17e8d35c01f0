//! Sky Bunny headless runner
//!
//! Plays a scripted tap session natively, logging altitude as it climbs.
//!
//! ```text
//! sky-bunny [settings.json] [--ppm out.ppm] [--json]
//! ```
//!
//! `--ppm` writes the last frame through the software rasterizer; `--json`
//! prints the last frame's draw list.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    if let Err(e) = headless::run(std::env::args().skip(1).collect()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `FrameDriver` from their own animation callback
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::error::Error;
    use std::fs;

    use sky_bunny::renderer::{PixelSurface, RecordingSurface};
    use sky_bunny::{FrameDriver, Settings};

    const WIDTH: u32 = 480;
    const HEIGHT: u32 = 800;
    const FPS: f64 = 60.0;
    const SECONDS: u32 = 12;
    /// Tap every this many frames while climbing
    const TAP_EVERY: u32 = 18;
    /// Stop tapping after this many seconds and let the bunny fall back
    const TAP_UNTIL: u32 = 7;

    struct Args {
        settings: Option<String>,
        ppm: Option<String>,
        json: bool,
    }

    fn parse(args: Vec<String>) -> Result<Args, String> {
        let mut out = Args {
            settings: None,
            ppm: None,
            json: false,
        };
        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--ppm" => out.ppm = Some(iter.next().ok_or("--ppm needs a path")?),
                "--json" => out.json = true,
                s if s.starts_with("--") => return Err(format!("unknown flag {}", s)),
                _ => out.settings = Some(arg),
            }
        }
        Ok(out)
    }

    pub fn run(args: Vec<String>) -> Result<(), Box<dyn Error>> {
        let args = parse(args)?;
        let settings = match &args.settings {
            Some(path) => {
                log::info!("Loading settings from {}", path);
                Settings::from_json(&fs::read_to_string(path)?)?
            }
            None => Settings::default(),
        };

        log::info!("Sky Bunny (headless) starting...");
        let seed = 0x5eed_b0b;
        let mut driver = FrameDriver::silent(settings, WIDTH as f32, HEIGHT as f32, seed);
        let mut surface = RecordingSurface::new();

        let total = SECONDS * FPS as u32;
        let mut peak = 0.0f32;
        for frame in 0..total {
            let now = frame as f64 / FPS;
            if frame < TAP_UNTIL * FPS as u32 && frame % TAP_EVERY == 0 {
                let rect = driver.state.body.screen_rect(driver.state.camera.y);
                driver.pointer_down(rect.center());
            }

            surface.clear();
            let sample = driver.frame(now, &mut surface);
            peak = peak.max(sample.altitude);

            if frame % FPS as u32 == 0 {
                let stats = driver.last_stats();
                log::info!(
                    "t={:>4.1}s altitude={:>7.1} heightT={:.2} camera={:>8.1} stars={} clouds={}",
                    now,
                    sample.altitude,
                    sample.height_t,
                    driver.state.camera.y,
                    stats.stars,
                    stats.clouds
                );
            }
        }
        println!(
            "Peak altitude {:.0} after {} impulses; final altitude {:.0}",
            peak,
            driver.state.impulse_count,
            driver.altitude()
        );

        if args.json {
            println!("{}", serde_json::to_string_pretty(&surface.commands)?);
        }

        if let Some(path) = args.ppm {
            let mut pixels = PixelSurface::new(WIDTH, HEIGHT);
            driver.step(0.0, total as f64 / FPS, &mut pixels);
            fs::write(&path, pixels.to_ppm())?;
            log::info!("Wrote last frame to {}", path);
        }

        Ok(())
    }
}
