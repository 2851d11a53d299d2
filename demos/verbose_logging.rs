//! Demonstrates enabling verbose logging for stdct.
//! Run with `cargo run --example verbose_logging --features verbose-logging`.
use stdct::{isdct, sdct, IsdctOptions, Signal, WindowKind};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let signal = Signal::mono(vec![0.25f32; 64]);
    let coeffs = sdct(&signal, 16, 24, Some(WindowKind::Hamming)).unwrap();
    // frame_step > frame_length logs a warning about uncovered samples
    let _ = isdct(&coeffs, &IsdctOptions::new(24)).unwrap();
}
