//! Request/response shapes of the simulation service and the client that
//! turns responses into queued store updates.

use crate::core::config::ViewerConfig;
use crate::core::error::ViewerError;
use crate::core::points::{PointSet, PointSetKey, StoreUpdate, UpdateQueue};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneInput {
    pub filename: String,
    pub angle: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParaboloidInput {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub angle: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SlicingPlaneInput {
    pub height: f64,
    pub angle: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRadiusInput {
    pub radius: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolutionInput {
    pub linear: f64,
    pub angular: f64,
}

/// Body of `POST /api/simulation`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParams {
    pub phone: PhoneInput,
    pub paraboloid: ParaboloidInput,
    pub slicing_plane: SlicingPlaneInput,
    pub user_radius: UserRadiusInput,
    pub resolution: ResolutionInput,
}

/// Synchronous read access to the page's form fields by element id.
pub trait FormSource {
    fn value(&self, id: &str) -> Option<String>;
}

/// DOM `Number()` coercion of a form value: blank is 0, garbage is NaN.
///
/// Accepts decimal and exponent forms, unsigned `0x`/`0o`/`0b` literals and a
/// signed `Infinity`. Spellings Rust alone accepts (`inf`, `nan`) are NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }
    if let Some(n) = parse_radix_literal(s) {
        return n;
    }
    let (sign, body) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s.strip_prefix('+').unwrap_or(s)),
    };
    if body == "Infinity" {
        return sign * f64::INFINITY;
    }
    if body.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let prefix = s.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    });
    Some(value.unwrap_or(f64::NAN))
}

impl SimulationParams {
    pub fn from_form(form: &impl FormSource) -> Self {
        let num = |id: &str| form.value(id).map_or(0.0, |v| coerce_number(&v));
        Self {
            phone: PhoneInput {
                filename: form.value("phoneSelector").unwrap_or_default(),
                angle: num("phoneAngle"),
            },
            paraboloid: ParaboloidInput {
                x: num("paraboloidX"),
                y: num("paraboloidY"),
                z: num("paraboloidZ"),
                angle: num("paraboloidAngle"),
            },
            slicing_plane: SlicingPlaneInput {
                height: num("slicingPlaneHeight"),
                angle: num("slicingPlaneAngle"),
            },
            user_radius: UserRadiusInput {
                radius: num("userRadius"),
            },
            resolution: ResolutionInput {
                linear: num("linearResolution"),
                angular: num("angularResolution"),
            },
        }
    }
}

/// Body returned by `POST /api/simulation`. Missing or null fields are empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutput {
    #[serde(rename = "Phone", default)]
    pub phone: Option<Vec<f32>>,
    #[serde(rename = "Paraboloid", default)]
    pub paraboloid: Option<Vec<f32>>,
    #[serde(rename = "User", default)]
    pub user: Option<Vec<f32>>,
}

impl SimulationOutput {
    /// Convert to `[phone, paraboloid, user]`. Fails as a whole if any field
    /// is not a whole number of points, so the store is never half-updated.
    pub fn into_point_sets(self) -> Result<[PointSet; 3], ViewerError> {
        Ok([
            PointSet::from_flat(self.phone.unwrap_or_default())?,
            PointSet::from_flat(self.paraboloid.unwrap_or_default())?,
            PointSet::from_flat(self.user.unwrap_or_default())?,
        ])
    }
}

/// Body returned by `GET /api/vertices`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerticesResponse {
    #[serde(default)]
    pub num_verticies: u32,
    #[serde(default)]
    pub verticies: Vec<f32>,
}

impl VerticesResponse {
    /// Pairs when the buffer holds exactly two floats per vertex, triples otherwise.
    pub fn into_point_set(self) -> Result<PointSet, ViewerError> {
        let n = self.num_verticies as usize;
        if n > 0 && self.verticies.len() == 2 * n {
            PointSet::from_pairs(&self.verticies)
        } else {
            PointSet::from_flat(self.verticies)
        }
    }
}

/// Entry of `GET /api/phones`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PhoneOption {
    pub name: String,
    pub filename: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpeakerDimensions {
    pub width: f64,
    pub height: f64,
    pub center: f64,
}

/// Body returned by `GET /api/phone?model=...`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PhoneDimensions {
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub speaker: SpeakerDimensions,
}

/// HTTP seam. The page uses gloo-net; tests use canned responses.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// POST a JSON body and return the response text of a 2xx answer.
    async fn post_json(&self, url: &str, body: String) -> Result<String, ViewerError>;
    /// GET with query parameters and return the response text of a 2xx answer.
    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<String, ViewerError>;
}

pub struct SimulationClient<T> {
    transport: T,
    config: ViewerConfig,
}

impl<T: Transport> SimulationClient<T> {
    pub fn new(transport: T, config: ViewerConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Run one simulation and queue its point sets for the next tick.
    ///
    /// Returns the total number of points received. There is no retry,
    /// timeout or cancellation: overlapping calls resolve in any order and
    /// the last one to finish wins.
    pub async fn request_simulation(
        &self,
        params: &SimulationParams,
        queue: &UpdateQueue,
    ) -> Result<usize, ViewerError> {
        let body = serde_json::to_string(params).map_err(ViewerError::Encode)?;
        let text = self
            .transport
            .post_json(&self.config.simulation_url(), body)
            .await?;
        let out: SimulationOutput = serde_json::from_str(&text).map_err(ViewerError::Decode)?;
        let total: usize = [&out.phone, &out.paraboloid, &out.user]
            .into_iter()
            .map(|f| f.as_ref().map_or(0, |v| v.len() / 3))
            .sum();
        log::info!("[sim] received {} points", total);
        queue.push(StoreUpdate::Simulation(out));
        Ok(total)
    }

    /// Fetch the vertices preview into the `sample` set.
    pub async fn request_vertices(&self, count: u32, queue: &UpdateQueue) -> Result<usize, ViewerError> {
        let text = self
            .transport
            .get_json(
                &self.config.vertices_url(),
                &[("numVerticies", count.to_string())],
            )
            .await?;
        let resp: VerticesResponse = serde_json::from_str(&text).map_err(ViewerError::Decode)?;
        let set = resp.into_point_set()?;
        let n = set.point_count();
        queue.push(StoreUpdate::Replace(PointSetKey::Sample, set));
        Ok(n)
    }

    pub async fn fetch_phones(&self) -> Result<Vec<PhoneOption>, ViewerError> {
        let text = self.transport.get_json(&self.config.phones_url(), &[]).await?;
        // The service answers `null` when its phone directory is empty.
        let phones: Option<Vec<PhoneOption>> =
            serde_json::from_str(&text).map_err(ViewerError::Decode)?;
        Ok(phones.unwrap_or_default())
    }

    /// `model` may be given with or without its `.xml` suffix.
    pub async fn fetch_phone(&self, model: &str) -> Result<PhoneDimensions, ViewerError> {
        let model = model.strip_suffix(".xml").unwrap_or(model);
        let text = self
            .transport
            .get_json(&self.config.phone_url(), &[("model", model.to_string())])
            .await?;
        serde_json::from_str(&text).map_err(ViewerError::Decode)
    }
}
