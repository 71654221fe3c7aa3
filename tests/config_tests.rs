// Host-side tests for viewer configuration.

use amphora_web::core::*;
use std::collections::HashMap;

fn from(pairs: &[(&str, &str)]) -> ViewerConfig {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ViewerConfig::from_attributes(|name| map.get(name).cloned())
}

#[test]
fn defaults_without_attributes() {
    let cfg = from(&[]);
    assert_eq!(cfg, ViewerConfig::default());
    assert_eq!(cfg.tick_interval_ms, TICK_INTERVAL_MS);
    assert_eq!(cfg.simulation_url(), "http://localhost:8080/api/simulation");
}

#[test]
fn attributes_override_defaults() {
    let cfg = from(&[
        ("data-api-base", "https://sim.example.org/"),
        ("data-tick-ms", "1000"),
        ("data-sample-vertices", "5000"),
    ]);
    assert_eq!(cfg.api_base, "https://sim.example.org");
    assert_eq!(cfg.tick_interval_ms, 1000);
    assert_eq!(cfg.sample_vertex_count, 5000);
    assert_eq!(cfg.phones_url(), "https://sim.example.org/api/phones");
    assert_eq!(cfg.phone_url(), "https://sim.example.org/api/phone");
    assert_eq!(cfg.vertices_url(), "https://sim.example.org/api/vertices");
}

#[test]
fn invalid_values_fall_back_to_defaults() {
    let cfg = from(&[
        ("data-api-base", "   "),
        ("data-tick-ms", "0"),
        ("data-sample-vertices", "many"),
    ]);
    assert_eq!(cfg, ViewerConfig::default());

    let cfg = from(&[("data-tick-ms", "-5")]);
    assert_eq!(cfg.tick_interval_ms, TICK_INTERVAL_MS);
}

#[test]
fn fallback_selector_skips_reserved_buttons() {
    assert_eq!(fallback_button_selector(&[]), "button");
    assert_eq!(
        fallback_button_selector(&["sampleButton", "resetView"]),
        "button:not(#sampleButton):not(#resetView)"
    );
}

#[test]
fn canvas_id_is_fixed() {
    assert_eq!(DEFAULT_CANVAS_ID, "glViewport");
}
