use std::path::PathBuf;
use std::process::Command;

fn exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_trajplot")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "trajplot.exe"
            } else {
                "trajplot"
            });
            p
        })
}

#[test]
fn cli_writes_png_and_prints_length() {
    let dir = PathBuf::from("target").join("cli_smoke");
    let _ = std::fs::remove_dir_all(&dir);
    let images = dir.join("images");

    let out = Command::new(exe())
        .args(["--results-dir", "tests/data/results", "--images-dir"])
        .arg(&images)
        .args([
            "--no-video",
            "--create-dirs",
            "--only",
            "simplegeo",
            "--print-lengths",
        ])
        .output()
        .unwrap();

    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.lines().any(|l| l == "simplegeo,10"), "{stdout}");

    let img = image::open(images.join("simplegeo.png")).unwrap();
    assert_eq!((img.width(), img.height()), (640, 480));
}

#[test]
fn cli_rejects_unknown_scenario() {
    let dir = PathBuf::from("target").join("cli_smoke_unknown");
    let out = Command::new(exe())
        .args(["--results-dir", "tests/data/results", "--images-dir"])
        .arg(dir.join("images"))
        .args(["--no-video", "--create-dirs", "--only", "nosuchscenario"])
        .output()
        .unwrap();

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("nosuchscenario"));
}

#[test]
fn cli_reads_json_config() {
    let dir = PathBuf::from("target").join("cli_smoke_config");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let cfg_path = dir.join("scene.json");
    let cfg = serde_json::json!({
        "results_dir": "tests/data/results",
        "images_dir": dir.join("images"),
        "canvas": { "width": 200, "height": 150 },
        "scenarios": ["forestgeo"],
        "create_output_dirs": true
    });
    std::fs::write(&cfg_path, serde_json::to_vec_pretty(&cfg).unwrap()).unwrap();

    let status = Command::new(exe())
        .arg("--config")
        .arg(&cfg_path)
        .arg("--no-video")
        .status()
        .unwrap();
    assert!(status.success());

    let img = image::open(dir.join("images").join("forestgeo.png")).unwrap();
    assert_eq!((img.width(), img.height()), (200, 150));
}
