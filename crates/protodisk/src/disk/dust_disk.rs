use serde::{Deserialize, Serialize};
use units::{Length, Mass};

/// One contiguous annulus of the disk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DustBand {
    pub inner_edge: Length,
    pub outer_edge: Length,
    pub dust_present: bool,
    pub gas_present: bool,
}

impl DustBand {
    pub fn new(inner_edge: Length, outer_edge: Length, dust_present: bool, gas_present: bool) -> Self {
        Self {
            inner_edge,
            outer_edge,
            dust_present,
            gas_present,
        }
    }

    pub fn width(&self) -> Length {
        self.outer_edge - self.inner_edge
    }

    fn same_composition(&self, other: &DustBand) -> bool {
        self.dust_present == other.dust_present && self.gas_present == other.gas_present
    }

    /// Copy of this band spanning `[inner, outer]` with its dust swept away.
    fn swept(&self, inner: Length, outer: Length, retain_gas: bool) -> DustBand {
        DustBand::new(inner, outer, false, self.gas_present && retain_gas)
    }

    fn with_edges(&self, inner: Length, outer: Length) -> DustBand {
        DustBand::new(inner, outer, self.dust_present, self.gas_present)
    }

    /// Replacement bands after sweeping `[min, max]` out of this one.
    fn carve(&self, min: Length, max: Length, retain_gas: bool) -> Vec<DustBand> {
        let (inner, outer) = (self.inner_edge, self.outer_edge);

        if inner < min && outer > max {
            vec![
                self.with_edges(inner, min),
                self.swept(min, max, retain_gas),
                self.with_edges(max, outer),
            ]
        } else if inner < max && outer > max {
            vec![self.swept(inner, max, retain_gas), self.with_edges(max, outer)]
        } else if inner < min && outer > min {
            vec![self.with_edges(inner, min), self.swept(min, outer, retain_gas)]
        } else if inner >= min && outer <= max {
            vec![self.swept(inner, outer, retain_gas)]
        } else {
            vec![*self]
        }
    }
}

/// Orbital range in which protoplanets may be injected.
///
/// The disk counts as exhausted once no band with dust overlaps this range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormationZone {
    pub inner: Length,
    pub outer: Length,
}

impl FormationZone {
    pub fn new(inner: Length, outer: Length) -> Self {
        Self { inner, outer }
    }
}

/// Ordered, gap-free partition of the disk into dust bands.
#[derive(Debug, Clone, PartialEq)]
pub struct DustDisk {
    bands: Vec<DustBand>,
    dust_left: bool,
}

impl DustDisk {
    /// A fresh disk holding dust and gas everywhere between the limits.
    ///
    /// A disk with no radial extent starts out exhausted.
    pub fn new(inner_limit: Length, outer_limit: Length) -> Self {
        Self {
            bands: vec![DustBand::new(inner_limit, outer_limit, true, true)],
            dust_left: outer_limit > inner_limit,
        }
    }

    /// A fresh disk whose dust only counts while it overlaps `zone`.
    ///
    /// A disk that misses the formation zone starts out exhausted, since no
    /// injected protoplanet could ever reach its dust.
    pub fn for_zone(inner_limit: Length, outer_limit: Length, zone: FormationZone) -> Self {
        let mut disk = Self::new(inner_limit, outer_limit);
        disk.dust_left = disk.dust_left && disk.dust_in_zone(zone);
        disk
    }

    pub fn bands(&self) -> &[DustBand] {
        &self.bands
    }

    /// Whether any dust remained inside the formation zone after the last
    /// depletion.
    pub fn dust_left(&self) -> bool {
        self.dust_left
    }

    /// True if any band overlapping `[inner, outer]` still holds dust.
    pub fn available(&self, inner: Length, outer: Length) -> bool {
        self.bands
            .iter()
            .skip_while(|band| band.outer_edge < inner)
            .take_while(|band| band.inner_edge < outer)
            .any(|band| band.dust_present)
    }

    /// Sweeps the dust out of `[min, max]`.
    ///
    /// Gas in the swept range survives only where it was present and the
    /// sweeping body is still below its critical mass.
    pub fn deplete(&mut self, min: Length, max: Length, mass: Mass, crit_mass: Mass, zone: FormationZone) {
        let retain_gas = mass <= crit_mass;

        let mut index = 0;
        while index < self.bands.len() {
            let pieces = self.bands[index].carve(min, max, retain_gas);
            let count = pieces.len();
            self.bands.splice(index..=index, pieces);
            index += count;
        }

        self.bands.dedup_by(|next, kept| {
            if kept.same_composition(next) {
                kept.outer_edge = next.outer_edge;
                true
            } else {
                false
            }
        });

        self.dust_left = self.dust_in_zone(zone);
    }

    fn dust_in_zone(&self, zone: FormationZone) -> bool {
        self.bands
            .iter()
            .any(|band| band.dust_present && band.outer_edge >= zone.inner && band.inner_edge <= zone.outer)
    }
}
