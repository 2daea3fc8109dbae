use std::fs;
use std::path::PathBuf;

use jetkit::config::AnalysisConfig;
use jetkit::{find_files, NameRegistry};
use tempfile::TempDir;

const CONFIG: &str = r#"
figure_approval_status: "Work in progress"
jet_matching_distance: 0.6
use_prev_prelim: false
constituent_subtractor:
  max_distance: [0.25, 0.7]
ang:
  common_settings:
    plot_overlay_list:
      - ["config_R0.2_B1", "config_R0.2_B2"]
  config_R0.2_B1:
    beta: 1
  config_R0.2_B2:
    beta: 2
"#;

fn setup() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();

    // A data tree the way a train output lands on disk: per-run
    // subdirectories with one results file each, plus stray non-ROOT files.
    for run in ["000296191", "000296194"] {
        let run_dir = dir.path().join("LHC18q").join(run);
        fs::create_dir_all(&run_dir).unwrap();
        fs::write(run_dir.join("AnalysisResults.root"), "").unwrap();
        fs::write(run_dir.join("stdout.log"), "").unwrap();
    }

    let config_path = dir.path().join("ang_PbPb.yaml");
    fs::write(&config_path, CONFIG).unwrap();
    (dir, config_path)
}

#[test]
fn discovery_finds_exactly_the_results_files() {
    let (dir, _config) = setup();

    let mut found = find_files(dir.path(), "AnalysisResults*.root").unwrap();
    found.sort();
    assert_eq!(found.len(), 2);
    assert!(found
        .iter()
        .all(|p| p.file_name().unwrap() == "AnalysisResults.root"));

    let logs = find_files(dir.path(), "*.log").unwrap();
    assert_eq!(logs.len(), 2);
}

#[test]
fn config_drives_output_layout_and_naming() {
    let (dir, config_path) = setup();
    let config = AnalysisConfig::load(&config_path).unwrap();

    assert!(!config.is_pp());
    let out_dirs = config.r_max_dirs(dir.path().join("output"));
    assert_eq!(out_dirs.len(), 2);
    assert!(out_dirs[0].ends_with("Rmax0.25"));
    assert!(out_dirs[1].ends_with("Rmax0.7"));

    // One histogram name per overlaid subconfiguration, all distinct even
    // though every group member uses the same base.
    let registry = NameRegistry::new();
    let mut names = Vec::new();
    for group in config.overlay_groups("ang") {
        for _subconfig in group {
            names.push(registry.claim(Some("hUnfolded")));
        }
    }
    assert_eq!(names.len(), 2);
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 2);
}

#[test]
fn observable_blocks_convert_per_subconfiguration() {
    let (_dir, config_path) = setup();
    let config = AnalysisConfig::load(&config_path).unwrap();

    let bag = config.observable("ang").unwrap().unwrap();
    for key in ["config_R0.2_B1", "config_R0.2_B2"] {
        let block = bag.get(key).unwrap();
        let map = block.as_map().unwrap();
        assert!(map["beta"].is_int());
    }
}
