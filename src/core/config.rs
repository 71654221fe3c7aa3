use crate::core::constants::{
    DEFAULT_API_BASE, DEFAULT_SAMPLE_VERTICES, PHONES_PATH, PHONE_PATH,
    SIMULATION_PATH, TICK_INTERVAL_MS, VERTICES_PATH,
};

/// Runtime settings for one viewer page.
///
/// Defaults come from `constants.rs`; the page may override them through
/// `data-*` attributes on the canvas element.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub api_base: String,
    pub tick_interval_ms: u32,
    pub sample_vertex_count: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            tick_interval_ms: TICK_INTERVAL_MS,
            sample_vertex_count: DEFAULT_SAMPLE_VERTICES,
        }
    }
}

impl ViewerConfig {
    /// Build from defaults, overriding with any attribute `lookup` returns.
    ///
    /// Recognised: `data-api-base`, `data-tick-ms`, `data-sample-vertices`.
    /// Unparsable or zero tick intervals keep the default.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(base) = lookup("data-api-base") {
            let base = base.trim().trim_end_matches('/');
            if !base.is_empty() {
                cfg.api_base = base.to_string();
            }
        }
        if let Some(raw) = lookup("data-tick-ms") {
            match raw.trim().parse::<u32>() {
                Ok(ms) if ms > 0 => cfg.tick_interval_ms = ms,
                _ => log::warn!("[config] ignoring data-tick-ms={:?}", raw),
            }
        }
        if let Some(raw) = lookup("data-sample-vertices") {
            match raw.trim().parse::<u32>() {
                Ok(n) => cfg.sample_vertex_count = n,
                Err(_) => log::warn!("[config] ignoring data-sample-vertices={:?}", raw),
            }
        }
        cfg
    }

    #[inline]
    pub fn simulation_url(&self) -> String {
        format!("{}{}", self.api_base, SIMULATION_PATH)
    }

    #[inline]
    pub fn vertices_url(&self) -> String {
        format!("{}{}", self.api_base, VERTICES_PATH)
    }

    #[inline]
    pub fn phones_url(&self) -> String {
        format!("{}{}", self.api_base, PHONES_PATH)
    }

    #[inline]
    pub fn phone_url(&self) -> String {
        format!("{}{}", self.api_base, PHONE_PATH)
    }
}

/// CSS selector for the first `<button>` that is none of `reserved_ids`.
/// Pages without a labelled simulate button get that button wired instead.
pub fn fallback_button_selector(reserved_ids: &[&str]) -> String {
    reserved_ids
        .iter()
        .fold(String::from("button"), |mut sel, id| {
            sel.push_str(&format!(":not(#{})", id));
            sel
        })
}
