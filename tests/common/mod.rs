use std::fs;
use std::path::PathBuf;
use std::sync::Once;

use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

static LOGGING: Once = Once::new();

pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A temp directory holding `neos.csv` and `cad.json`.
pub struct Fixture {
    pub dir: TempDir,
    pub neo_path: PathBuf,
    pub cad_path: PathBuf,
}

pub fn fixture(neos_csv: &str, cad_json: &str) -> anyhow::Result<Fixture> {
    init_test_logging();

    let dir = tempfile::tempdir()?;
    let neo_path = dir.path().join("neos.csv");
    let cad_path = dir.path().join("cad.json");
    fs::write(&neo_path, neos_csv)?;
    fs::write(&cad_path, cad_json)?;

    Ok(Fixture {
        dir,
        neo_path,
        cad_path,
    })
}

pub const NEOS_CSV: &str = "\
id,spkid,full_name,pdes,name,prefix,neo,pha,H,G,M1,M2,K1,K2,PC,diameter,extent,albedo
a0000433,2000433,\"   433 Eros (A898 PA)\",433,Eros,,Y,N,10.4,0.46,,,,,,16.84,34.4x11.2x11.2,0.25
a0099942,2099942,\"99942 Apophis (2004 MN4)\",99942,Apophis,,Y,Y,19.09,,,,,,,0.34,,0.35
bK20A00B,3994730,\"       (2020 AB)\",2020 AB,,,Y,N,24.5,,,,,,,,,
";

pub const CAD_JSON: &str = r#"{
  "signature": {"source": "NASA/JPL SBDB Close Approach Data API", "version": "1.1"},
  "count": "5",
  "fields": ["des", "orbit_id", "jd", "cd", "dist", "dist_min", "dist_max", "v_rel", "v_inf", "t_sigma_f", "h"],
  "data": [
    ["433", "659", "2415020.5", "1900-Dec-27 01:30", "0.314929", "0.314928", "0.314930", "5.57579", "5.56994", "< 00:01", "10.4"],
    ["99942", "220", "2462240.4", "2029-Apr-13 21:46", "0.000254", "0.000254", "0.000254", "7.42249", "5.84135", "< 00:01", "19.09"],
    ["433", "659", "2426375.5", "1931-Jan-30 04:07", "0.174488", "0.174487", "0.174489", "5.92485", "5.91927", "< 00:01", "10.4"],
    ["2019 XY", "3", "2458900.5", "2020-Feb-20 12:00", "0.0421", "0.0420", "0.0422", "11.2", "11.1", "00:10", "26.1"],
    ["99942", "220", "2465141.8", "2036-Mar-27 07:48", "0.020729", "0.020700", "0.020800", "5.73", "5.70", "< 00:01", "19.09"]
  ]
}"#;
