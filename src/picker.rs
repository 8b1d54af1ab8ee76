//! Location picker state, kept apart from the geocoding collaborator.
//!
//! A reverse-geocode resolution is keyed by a token minted when the
//! marker is placed. Moving the marker supersedes every earlier token,
//! so a slow response for an old position is dropped instead of
//! overwriting the address of the current one.

use crate::domain::Coordinates;

/// Axis-aligned service-area restriction in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl RegionBounds {
    #[must_use]
    pub fn contains(&self, point: Coordinates) -> bool {
        point.lat <= self.north
            && point.lat >= self.south
            && point.lng <= self.east
            && point.lng >= self.west
    }
}

/// Geographic configuration handed to the map collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRegion {
    pub bounds: RegionBounds,
    pub center: Coordinates,
    /// ISO country code used to restrict forward geocoding.
    pub country_code: &'static str,
}

/// Service area carried over from the original deployment.
pub const HONG_KONG: MapRegion = MapRegion {
    bounds: RegionBounds {
        north: 22.559,
        south: 22.153,
        west: 113.825,
        east: 114.434,
    },
    center: Coordinates {
        lat: 22.3193,
        lng: 114.1694,
    },
    country_code: "hk",
};

/// Lifecycle of the picker's external collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerPhase {
    /// The availability probe has not completed yet.
    #[default]
    Uninitialized,
    /// Collaborator reachable; interactive picking enabled.
    Ready,
    /// Collaborator unreachable; manual address entry only.
    Unavailable,
}

/// Identifies one in-flight reverse-geocode resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveToken(u64);

#[derive(Debug, Default)]
pub struct LocationPicker {
    phase: PickerPhase,
    marker: Option<Coordinates>,
    generation: u64,
}

impl LocationPicker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> PickerPhase {
        self.phase
    }

    /// The single current marker, if one has been placed.
    #[must_use]
    pub fn marker(&self) -> Option<Coordinates> {
        self.marker
    }

    pub fn mark_ready(&mut self) {
        self.phase = PickerPhase::Ready;
    }

    pub fn mark_unavailable(&mut self) {
        self.phase = PickerPhase::Unavailable;
    }

    /// Place (or move) the marker and open a new resolution window.
    pub fn place_marker(&mut self, point: Coordinates) -> ResolveToken {
        self.marker = Some(point);
        self.generation += 1;
        ResolveToken(self.generation)
    }

    /// Whether a reverse-geocode response for `token` is still current.
    #[must_use]
    pub fn accept_address(&self, token: ResolveToken) -> bool {
        token.0 == self.generation
    }

    /// Apply a place chosen from search results. Its address arrived with
    /// the selection, so any in-flight resolution is superseded as well.
    pub fn apply_place(&mut self, point: Coordinates) {
        self.marker = Some(point);
        self.generation += 1;
    }

    /// Drop the marker and invalidate outstanding resolutions.
    pub fn clear(&mut self) {
        self.marker = None;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTRAL: Coordinates = Coordinates {
        lat: 22.2816,
        lng: 114.1585,
    };
    const MONG_KOK: Coordinates = Coordinates {
        lat: 22.3193,
        lng: 114.1694,
    };

    #[test]
    fn bounds_contain_the_center_but_not_macau() {
        assert!(HONG_KONG.bounds.contains(HONG_KONG.center));
        assert!(!HONG_KONG.bounds.contains(Coordinates {
            lat: 22.1987,
            lng: 113.5439,
        }));
    }

    #[test]
    fn picker_starts_uninitialized_with_no_marker() {
        let picker = LocationPicker::new();
        assert_eq!(picker.phase(), PickerPhase::Uninitialized);
        assert_eq!(picker.marker(), None);
    }

    #[test]
    fn late_response_for_a_moved_marker_is_dropped() {
        let mut picker = LocationPicker::new();
        let first = picker.place_marker(CENTRAL);
        let second = picker.place_marker(MONG_KOK);

        assert!(!picker.accept_address(first));
        assert!(picker.accept_address(second));
        assert_eq!(picker.marker(), Some(MONG_KOK));
    }

    #[test]
    fn search_selection_supersedes_pending_resolutions() {
        let mut picker = LocationPicker::new();
        let pending = picker.place_marker(CENTRAL);
        picker.apply_place(MONG_KOK);
        assert!(!picker.accept_address(pending));
    }

    #[test]
    fn clear_removes_marker_and_invalidates_tokens() {
        let mut picker = LocationPicker::new();
        let pending = picker.place_marker(CENTRAL);
        picker.clear();
        assert_eq!(picker.marker(), None);
        assert!(!picker.accept_address(pending));
    }
}
