use slotmap::SlotMap;

use crate::error::{Result, TopologyError};
use crate::polyhedron::{BasePolyhedron, LatticeSubdivision, Subdivide};

use super::{BuildDome, DomeModel, DomeParams};

slotmap::new_key_type! {
    /// Unique identifier for a dome in the store.
    pub struct DomeId;
}

/// A single parameter edit coming from the UI layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamChange {
    Level(u32),
    SliceHeight(f64),
    /// Slider value in `[0, 1]`, mapped onto `[-radius, radius]`.
    SliceFraction(f64),
    ProjectToSphere(bool),
    OffsetForPrint(bool),
    /// Cosmetic; recorded and picked up by the next structural rebuild. The
    /// cut height scales with it so the cut stays at the same fraction.
    Radius(f64),
}

impl ParamChange {
    /// Returns `true` if the change invalidates the built model.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        !matches!(self, Self::Radius(_))
    }

    /// Returns `params` with the change applied.
    ///
    /// # Errors
    ///
    /// Returns an error if a slice fraction lies outside `[0, 1]` or the
    /// resulting parameters fail [`DomeParams::validate`].
    pub fn apply_to(&self, params: DomeParams) -> Result<DomeParams> {
        let changed = match *self {
            Self::Level(level) => params.with_level(level),
            Self::SliceHeight(height) => params.with_slice_height(height),
            Self::SliceFraction(fraction) => params.with_slice_fraction(fraction)?,
            Self::ProjectToSphere(on) => params.with_projection(on),
            Self::OffsetForPrint(on) => params.with_offset_for_print(on),
            Self::Radius(radius) => DomeParams {
                radius,
                slice_height: params.slice_height * radius / params.radius,
                ..params
            },
        };
        changed.validate()?;
        Ok(changed)
    }
}

#[derive(Debug)]
struct DomeEntry {
    base: BasePolyhedron,
    params: DomeParams,
    model: DomeModel,
}

/// Central arena that owns every live dome model.
///
/// Models are never patched: a structural parameter change rebuilds the
/// whole model from the provider outward and hands the previous one back to
/// the caller, who releases any scene resources tied to it before dropping
/// it.
#[derive(Debug, Default)]
pub struct DomeStore<S = LatticeSubdivision> {
    domes: SlotMap<DomeId, DomeEntry>,
    provider: S,
}

impl DomeStore {
    /// Creates a new, empty store using [`LatticeSubdivision`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Subdivide + Clone> DomeStore<S> {
    /// Creates a new, empty store with a custom subdivision provider.
    #[must_use]
    pub fn with_provider(provider: S) -> Self {
        Self {
            domes: SlotMap::with_key(),
            provider,
        }
    }

    /// Builds a dome and inserts it, returning its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the build fails; nothing is inserted.
    pub fn add_dome(&mut self, base: BasePolyhedron, params: DomeParams) -> Result<DomeId> {
        let model = self.build(&base, params)?;
        Ok(self.domes.insert(DomeEntry {
            base,
            params,
            model,
        }))
    }

    /// Returns the current model, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the dome is not in the store.
    pub fn model(&self, id: DomeId) -> Result<&DomeModel> {
        Ok(&self.entry(id)?.model)
    }

    /// Returns the requested parameters, including cosmetic edits not yet
    /// reflected in the model.
    ///
    /// # Errors
    ///
    /// Returns an error if the dome is not in the store.
    pub fn params(&self, id: DomeId) -> Result<&DomeParams> {
        Ok(&self.entry(id)?.params)
    }

    /// Applies a parameter change.
    ///
    /// Returns the replaced model when the change triggered a rebuild, and
    /// `None` when it was cosmetic or left the parameters as they were. If
    /// the rebuild fails, the previous model and parameters stay in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the dome is not in the store, the change is out of
    /// range, or the rebuild fails.
    pub fn apply(&mut self, id: DomeId, change: ParamChange) -> Result<Option<DomeModel>> {
        let entry = self.entry(id)?;
        let params = change.apply_to(entry.params)?;
        if params == entry.params {
            return Ok(None);
        }
        if !change.is_structural() {
            tracing::debug!(?change, "recorded cosmetic change");
            self.entry_mut(id)?.params = params;
            return Ok(None);
        }

        let model = self.build(&entry.base, params)?;
        let entry = self.entry_mut(id)?;
        entry.params = params;
        Ok(Some(std::mem::replace(&mut entry.model, model)))
    }

    /// Removes a dome, returning its model.
    ///
    /// # Errors
    ///
    /// Returns an error if the dome is not in the store.
    pub fn remove(&mut self, id: DomeId) -> Result<DomeModel> {
        self.domes
            .remove(id)
            .map(|entry| entry.model)
            .ok_or_else(|| TopologyError::EntityNotFound("dome".into()).into())
    }

    /// Number of live domes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.domes.len()
    }

    /// Returns `true` if the store holds no domes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domes.is_empty()
    }

    fn build(&self, base: &BasePolyhedron, params: DomeParams) -> Result<DomeModel> {
        BuildDome::new(base, params)
            .with_provider(self.provider.clone())
            .execute()
    }

    fn entry(&self, id: DomeId) -> Result<&DomeEntry> {
        self.domes
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("dome".into()).into())
    }

    fn entry_mut(&mut self, id: DomeId) -> Result<&mut DomeEntry> {
        self.domes
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("dome".into()).into())
    }
}
