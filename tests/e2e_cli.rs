mod support_feed;

use std::fs;

use tempfile::tempdir;

use support_feed::{run_airscope, spawn_feed_server_or_skip, unused_local_endpoint};

#[test]
fn e2e_playback_summary_classifies_history() -> Result<(), String> {
    let Some((url, _server)) = spawn_feed_server_or_skip()? else {
        return Ok(());
    };

    let output = run_airscope(["--playback", "--no-ui", "--no-color", "--url", url.as_str()])?;
    if !output.status.success() {
        return Err(format!(
            "stdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    for expected in [
        "Frames: 2",
        "Stable: 0  Alert: 1  Unstable: 1",
        "Bounds: TCI [0.0, 100.0]  SRI [0.0, 100.0]",
    ] {
        if !stdout.contains(expected) {
            return Err(format!("Missing '{}' in stdout:\n{}", expected, stdout));
        }
    }
    Ok(())
}

#[test]
fn e2e_playback_bounds_filter_applies() -> Result<(), String> {
    let Some((url, _server)) = spawn_feed_server_or_skip()? else {
        return Ok(());
    };

    let output = run_airscope([
        "--playback",
        "--no-ui",
        "--no-color",
        "--url",
        url.as_str(),
        "--tci-max",
        "40",
        "--sri-max",
        "40",
    ])?;
    if !output.status.success() {
        return Err(format!(
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.contains("Last frame: 0 of 1 points in bounds") {
        return Err(format!("Filter was not applied:\n{}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_transport_failure_degrades_to_no_data() -> Result<(), String> {
    let url = unused_local_endpoint()?;

    let output = run_airscope([
        "--playback",
        "--no-ui",
        "--no-color",
        "--timeout",
        "1s",
        "--url",
        url.as_str(),
    ])?;
    if !output.status.success() {
        return Err(format!(
            "Degraded run should exit 0; stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if stdout.contains("Frames:") {
        return Err(format!("No summary expected without data:\n{}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_watch_one_shot_prints_latest_reading() -> Result<(), String> {
    let Some((url, _server)) = spawn_feed_server_or_skip()? else {
        return Ok(());
    };

    let output = run_airscope(["--no-ui", "--no-color", "--url", url.as_str()])?;
    if !output.status.success() {
        return Err(format!(
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    for expected in ["Latest reading", "GAQI 22.0", "Score"] {
        if !stdout.contains(expected) {
            return Err(format!("Missing '{}' in stdout:\n{}", expected, stdout));
        }
    }
    Ok(())
}

#[test]
fn e2e_export_writes_chart_files() -> Result<(), String> {
    let Some((url, _server)) = spawn_feed_server_or_skip()? else {
        return Ok(());
    };
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let charts_path = dir.path().join("charts");
    let charts_arg = charts_path.to_string_lossy().into_owned();

    let output = run_airscope([
        "--export-charts",
        "--no-color",
        "--url",
        url.as_str(),
        "--charts-path",
        charts_arg.as_str(),
    ])?;
    if !output.status.success() {
        return Err(format!(
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    for name in [
        "stability_scatter.png",
        "index_history.png",
        "score_timeline.png",
        "correlation_matrix.png",
    ] {
        let path = charts_path.join(name);
        let metadata =
            fs::metadata(&path).map_err(|err| format!("missing chart {}: {}", name, err))?;
        if metadata.len() == 0 {
            return Err(format!("chart {} is empty", name));
        }
    }
    Ok(())
}

#[test]
fn e2e_missing_url_fails_fast() -> Result<(), String> {
    let output = run_airscope(["--playback", "--no-ui"])?;
    if output.status.success() {
        return Err("Run without a URL should fail".to_owned());
    }
    Ok(())
}
