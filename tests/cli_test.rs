// tests/cli_test.rs
//
// Decoding and command-line behaviour against generated WAV files.

mod test_utils;

use plpkit::core::{decode_audio, extract_mono};
use plpkit::{PlpConfig, PlpExtractor};
use test_utils::{run_json_extraction, run_plpkit, scratch_dir, sine, write_wav};

#[test]
fn test_decoded_wav_matches_direct_extraction() {
    let dir = scratch_dir();
    let path = dir.join("tone.wav");
    let tone = sine(200.0, 0.5, 16000, 16000);
    write_wav(&path, &tone, 16000, 1);

    let audio = decode_audio(&path).unwrap();
    assert_eq!(audio.sample_rate, 16000);
    assert_eq!(audio.channels, 1);
    assert_eq!(audio.samples.len(), 16000);
    assert!((audio.duration_secs - 1.0).abs() < 1e-9);

    let extractor = PlpExtractor::new(PlpConfig::default()).unwrap();
    let features = extractor.extract(&extract_mono(&audio), Some(audio.sample_rate)).unwrap();
    let direct = extractor.extract(&tone, Some(16000)).unwrap();
    assert_eq!(features.num_frames(), direct.num_frames());

    // 16-bit quantisation only perturbs the features slightly
    for (a, b) in features.rows().zip(direct.rows()) {
        assert!((a[0] - b[0]).abs() < 0.05);
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_stereo_downmix() {
    let dir = scratch_dir();
    let path = dir.join("stereo.wav");
    let interleaved: Vec<f32> = sine(300.0, 0.5, 16000, 800)
        .into_iter()
        .flat_map(|s| [s, -s])
        .collect();
    write_wav(&path, &interleaved, 16000, 2);

    let audio = decode_audio(&path).unwrap();
    assert_eq!(audio.channels, 2);
    let mono = extract_mono(&audio);
    assert_eq!(mono.len(), 800);
    assert!(mono.iter().all(|s| s.abs() < 1e-3));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_cli_json_report() {
    let dir = scratch_dir();
    let path = dir.join("tone.wav");
    write_wav(&path, &sine(200.0, 0.5, 16000, 16000), 16000, 1);

    let output = run_json_extraction(&path);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["num_frames"], 98);
    assert_eq!(report["num_coeffs"], 13);
    assert_eq!(report["source_sample_rate"], 16000);
    assert_eq!(report["features"].as_array().map(|a| a.len()), Some(98));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_cli_rejects_rate_mismatch_without_resample() {
    let dir = scratch_dir();
    let path = dir.join("narrow.wav");
    write_wav(&path, &sine(200.0, 0.5, 8000, 8000), 8000, 1);

    let output = run_plpkit(&path).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("mismatch"), "stderr: {}", stderr);

    let output = run_plpkit(&path)
        .args(["--resample", "--format", "csv"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 98);
    assert!(stdout.lines().all(|l| l.split(',').count() == 13));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_cli_directory_to_output_dir() {
    let dir = scratch_dir();
    let input = dir.join("in");
    let out = dir.join("out");
    std::fs::create_dir_all(input.join("nested")).unwrap();
    write_wav(&input.join("a.wav"), &sine(200.0, 0.5, 8000, 4000), 8000, 1);
    write_wav(&input.join("nested").join("b.wav"), &sine(400.0, 0.5, 8000, 4000), 8000, 1);
    std::fs::write(input.join("readme.txt"), "not audio").unwrap();

    let output = run_plpkit(&input)
        .args(["--sample-rate", "8000", "--plp-order", "8", "-f", "csv", "-o"])
        .arg(&out)
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    for name in ["a.csv", "b.csv"] {
        let csv = std::fs::read_to_string(out.join(name)).unwrap();
        assert_eq!(csv.lines().count(), (4000 - 200) / 80 + 1);
        assert!(csv.lines().all(|l| l.split(',').count() == 9));
    }
    assert!(!out.join("readme.csv").exists());

    let _ = std::fs::remove_dir_all(&dir);
}
