use std::env;
use std::fs;
use std::path::Path;

/// Fixture files copied to OUT_DIR for include_str. Each entry falls back
/// to an empty placeholder so the crate still builds without the data.
const FIXTURES: [(&str, &str); 4] = [
    (
        "whales_2011_2012.geojson",
        r#"{"type":"FeatureCollection","features":[]}"#,
    ),
    (
        "whales_2010_2013.geojson",
        r#"{"type":"FeatureCollection","features":[]}"#,
    ),
    ("whales_monthly_counts.csv", "year,month,count\n"),
    ("vertical_flow_w_surface.json", r#"{"labels":[],"steps":[]}"#),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for (name, placeholder) in FIXTURES {
        let src = Path::new("../fixtures").join(name);
        let dest = Path::new(&out_dir).join(name);
        if src.exists() {
            fs::copy(&src, &dest).unwrap();
        } else {
            fs::write(&dest, placeholder).unwrap();
        }
        println!("cargo:rerun-if-changed=../fixtures/{}", name);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
