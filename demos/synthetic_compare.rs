//! Headless demo: compare two synthetic gradient frames, script a few
//! input events, and write the presented frame to a PNG.
//!
//! ```sh
//! cargo run --example synthetic_compare
//! ```

use std::fs;
use std::path::Path;

use twinscope::{
    Display, DisplayOptions, InputEvent, Key, PresentBackend, SoftBackend, SourceFrame,
    SurfaceSize, VideoDims,
};

fn gradient_frame(video: VideoDims, boxed: bool) -> Vec<u8> {
    let mut data = vec![0u8; video.rgb_len()];
    for y in 0..video.height {
        for x in 0..video.width {
            let i = y as usize * video.rgb_stride() + x as usize * 3;
            data[i] = (x * 255 / video.width) as u8;
            data[i + 1] = (y * 255 / video.height) as u8;
            data[i + 2] = 64;
        }
    }
    if boxed {
        // A small bright box only the second source carries, so the
        // subtraction view has something to light up.
        for y in 60..90 {
            for x in 200..260 {
                let i = y as usize * video.rgb_stride() + x as usize * 3;
                data[i..i + 3].copy_from_slice(&[240, 240, 240]);
            }
        }
    }
    data
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let video = VideoDims::new(320, 180)?;
    let backend = SoftBackend::new(SurfaceSize::new(640, 360)?);
    let mut display = Display::new(
        backend,
        video,
        "reference.mp4",
        "candidate.mp4",
        DisplayOptions::default(),
    )?;

    let left = gradient_frame(video, false);
    let right = gradient_frame(video, true);
    let left = SourceFrame::from_rgb(video, &left)?;
    let right = SourceFrame::from_rgb(video, &right)?;

    // Scripted interaction: switch to subtraction mode, zoom in one step,
    // and drag the split toward the right edge.
    let backend = display.backend_mut();
    backend.push_event(InputEvent::KeyDown { key: Key::Num0 });
    backend.push_event(InputEvent::Wheel { delta_y: 1 });
    backend.push_event(InputEvent::MouseButtonDown {
        button: twinscope::MouseButton::Left,
        x: 480.0,
        y: 180.0,
        ctrl: false,
    });

    for frame in 0..3 {
        let commands = display.poll_input();
        if commands.quit {
            break;
        }
        let position = frame as f32 / 30.0;
        display.render(&left, &right, position, position, "1/30", "")?;
    }

    let out_dir = Path::new("target/demos");
    fs::create_dir_all(out_dir)?;
    let out_path = out_dir.join("synthetic_compare.png");

    let size = display.backend().drawable_size();
    let img = image::RgbaImage::from_raw(
        size.width as u32,
        size.height as u32,
        display.backend().presented().to_vec(),
    )
    .ok_or_else(|| anyhow::anyhow!("invalid rgba buffer size"))?;
    img.save(&out_path)?;

    eprintln!("wrote {}", out_path.display());
    Ok(())
}
