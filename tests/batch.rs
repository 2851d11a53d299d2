//! Batched transforms must match per-row transforms bit for bit.

#[cfg(feature = "rustfft")]
use stdct::FftBackend;
use stdct::{IsdctOptions, SdctOptions, Signal, Stdct, TableBackend};

/// Rows in the batched signal.
const ROWS: usize = 5;
/// Samples per row.
const ROW_LEN: usize = 4096;

fn rows() -> Vec<Vec<f32>> {
    (0..ROWS)
        .map(|r| {
            (0..ROW_LEN)
                .map(|i| {
                    let phase = i as f32 * (0.013 + 0.004 * r as f32);
                    0.6 * phase.sin() + 0.2 * (3.1 * phase).cos()
                })
                .collect()
        })
        .collect()
}

#[test]
fn table_backend_batch_equals_individual() {
    let rows = rows();
    let batch = Signal::from_channels(&rows).unwrap();
    let mut engine = Stdct::<TableBackend<f32>>::new();
    let opts = SdctOptions::new(1024, 512);

    let batched = engine.sdct(&batch, &opts).unwrap();
    assert_eq!(batched.shape(), vec![ROWS, 7, 1024]);
    for (k, row) in rows.iter().enumerate() {
        let single = engine.sdct(&Signal::mono(row.clone()), &opts).unwrap();
        assert_eq!(batched.select(k), single, "sdct row {}", k);
    }

    let inverse = IsdctOptions::new(512);
    let batched_out = engine.isdct(&batched, &inverse).unwrap();
    assert_eq!(batched_out.shape(), vec![ROWS, 4096]);
    for k in 0..ROWS {
        let single = engine.isdct(&batched.select(k), &inverse).unwrap();
        assert_eq!(batched_out.channel(k), single.as_slice(), "isdct row {}", k);
    }
}

#[cfg(feature = "rustfft")]
#[test]
fn fft_backend_batch_equals_individual() {
    let rows = rows();
    let batch = Signal::from_channels(&rows).unwrap();
    let mut engine = Stdct::with_backend(FftBackend::<f32>::new());
    let opts = SdctOptions::new(256, 100);

    let batched = engine.sdct(&batch, &opts).unwrap();
    for (k, row) in rows.iter().enumerate() {
        let single = engine.sdct(&Signal::mono(row.clone()), &opts).unwrap();
        assert_eq!(batched.select(k), single);
    }
    let inverse = IsdctOptions::new(100).frame_length(256);
    let batched_out = engine.isdct(&batched, &inverse).unwrap();
    for k in 0..ROWS {
        let single = engine.isdct(&batched.select(k), &inverse).unwrap();
        assert_eq!(batched_out.channel(k), single.as_slice());
    }
}

#[test]
fn multi_axis_batch_keeps_shape() {
    let data: Vec<f64> = (0..2 * 3 * 300).map(|i| ((i % 300) as f64 * 0.1).sin()).collect();
    let signal = Signal::from_shape(&[2, 3, 300], data).unwrap();
    let coeffs = stdct::sdct(&signal, 64, 16, None).unwrap();
    assert_eq!(coeffs.shape(), vec![2, 3, (300 - 64) / 16 + 1, 64]);
    // every row holds the same samples
    for b in 1..coeffs.batch_len() {
        assert_eq!(coeffs.batch(b), coeffs.batch(0));
    }
    let out = stdct::isdct(&coeffs, &IsdctOptions::new(16).window(None)).unwrap();
    assert_eq!(out.shape(), vec![2, 3, 14 * 16 + 64]);
}
