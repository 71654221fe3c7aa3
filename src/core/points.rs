//! Named point clouds and the queue that hands fetched data to the render tick.

use crate::core::constants::{PARABOLOID_COLOR, PHONE_COLOR, SAMPLE_COLOR, USER_COLOR};
use crate::core::error::ViewerError;
use crate::core::simulation::SimulationOutput;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointSetKey {
    Phone,
    Paraboloid,
    User,
    Sample,
}

impl PointSetKey {
    /// Every key, in draw order.
    pub const ALL: [PointSetKey; 4] = [Self::Phone, Self::Paraboloid, Self::User, Self::Sample];

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Paraboloid => "paraboloid",
            Self::User => "user",
            Self::Sample => "sample",
        }
    }

    /// Stable slot index, matching the position in [`PointSetKey::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PointSetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PointSetKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|k| k.as_str() == s).ok_or(())
    }
}

/// Fixed RGBA color for each point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    colors: [[f32; 4]; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [PHONE_COLOR, PARABOLOID_COLOR, USER_COLOR, SAMPLE_COLOR],
        }
    }
}

impl Palette {
    #[inline]
    pub fn color(&self, key: PointSetKey) -> [f32; 4] {
        self.colors[key.index()]
    }
}

/// Flat `x, y, z, x, y, z, ...` buffer. Length is always a multiple of 3.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    values: Vec<f32>,
}

impl PointSet {
    pub fn from_flat(values: Vec<f32>) -> Result<Self, ViewerError> {
        if values.len() % 3 != 0 {
            return Err(ViewerError::RaggedPointSet {
                len: values.len(),
                stride: 3,
            });
        }
        Ok(Self { values })
    }

    /// Lift `x, y` pairs onto the z = 0 plane.
    pub fn from_pairs(pairs: &[f32]) -> Result<Self, ViewerError> {
        if pairs.len() % 2 != 0 {
            return Err(ViewerError::RaggedPointSet {
                len: pairs.len(),
                stride: 2,
            });
        }
        let values = pairs
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[1], 0.0])
            .collect();
        Ok(Self { values })
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.values.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One replacement queued by an async task for the next render tick.
#[derive(Clone, Debug, PartialEq)]
pub enum StoreUpdate {
    Replace(PointSetKey, PointSet),
    Simulation(SimulationOutput),
}

#[derive(Clone, Debug, Default)]
pub struct PointCloudStore {
    sets: [PointSet; 4],
}

impl PointCloudStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, key: PointSetKey, set: PointSet) {
        log::debug!("[store] {} <- {} points", key, set.point_count());
        self.sets[key.index()] = set;
    }

    #[inline]
    pub fn get(&self, key: PointSetKey) -> &[f32] {
        self.sets[key.index()].as_slice()
    }

    pub fn get_named(&self, name: &str) -> Option<&[f32]> {
        name.parse::<PointSetKey>().ok().map(|k| self.get(k))
    }

    pub fn iter(&self) -> impl Iterator<Item = (PointSetKey, &PointSet)> {
        PointSetKey::ALL
            .into_iter()
            .map(move |k| (k, &self.sets[k.index()]))
    }

    /// Apply a queued update. Simulation results replace the three simulated
    /// sets together; fields that came back empty or missing clear their set.
    pub fn apply(&mut self, update: StoreUpdate) -> Result<(), ViewerError> {
        match update {
            StoreUpdate::Replace(key, set) => self.replace(key, set),
            StoreUpdate::Simulation(out) => {
                let [phone, paraboloid, user] = out.into_point_sets()?;
                self.replace(PointSetKey::Phone, phone);
                self.replace(PointSetKey::Paraboloid, paraboloid);
                self.replace(PointSetKey::User, user);
            }
        }
        Ok(())
    }
}

/// Single-threaded hand-off between fetch tasks and the render tick.
#[derive(Clone, Default)]
pub struct UpdateQueue {
    inner: Rc<RefCell<VecDeque<StoreUpdate>>>,
}

impl UpdateQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, update: StoreUpdate) {
        self.inner.borrow_mut().push_back(update);
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Apply every pending update in arrival order. A malformed update is
    /// logged and skipped; later ones still apply. Returns how many applied.
    pub fn drain_into(&self, store: &mut PointCloudStore) -> usize {
        let pending: Vec<StoreUpdate> = self.inner.borrow_mut().drain(..).collect();
        let mut applied = 0;
        for update in pending {
            match store.apply(update) {
                Ok(()) => applied += 1,
                Err(e) => log::warn!("[store] dropped update: {}", e),
            }
        }
        applied
    }
}
