use wavescope::export::{EXPORT_DURATIONS_SECS, export_csv, parse_csv};
use wavescope::{DashboardConfig, TickDriver, Waveform};

#[test]
fn test_export_then_parse_round_trips() {
    let mut driver = TickDriver::new(DashboardConfig::default()).unwrap();
    for _ in 0..123 {
        driver.tick();
    }
    let samples = driver.window(Waveform::Square).to_vec();

    let mut out = Vec::new();
    let rows = export_csv(&mut out, &samples, 1, 100).unwrap();
    assert_eq!(rows, 100);

    let parsed = parse_csv(out.as_slice()).unwrap();
    let expected: Vec<(usize, f64)> = samples[100..].iter().copied().enumerate().collect();
    assert_eq!(parsed, expected);
}

#[test]
fn test_longer_spans_than_window_export_everything() {
    let samples: Vec<f64> = (0..200).map(|i| i as f64 / 200.0).collect();
    for seconds in EXPORT_DURATIONS_SECS {
        let mut out = Vec::new();
        assert_eq!(export_csv(&mut out, &samples, seconds, 100).unwrap(), 200);
        let parsed = parse_csv(out.as_slice()).unwrap();
        assert_eq!(parsed.len(), 200);
        assert_eq!(parsed[199], (199, 199.0 / 200.0));
    }
}
