use crate::trip::{DatasetError, Trip, TripId};

/// Both trips, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    bali: Trip,
    suzuka: Trip,
}

impl Catalog {
    pub fn load() -> Result<Self, DatasetError> {
        Ok(Self {
            bali: Trip::load(TripId::Bali)?,
            suzuka: Trip::load(TripId::Suzuka)?,
        })
    }

    pub fn new(bali: Trip, suzuka: Trip) -> Self {
        Self { bali, suzuka }
    }

    pub fn trip(&self, id: TripId) -> &Trip {
        match id {
            TripId::Bali => &self.bali,
            TripId::Suzuka => &self.suzuka,
        }
    }

    pub fn trips(&self) -> impl Iterator<Item = &Trip> {
        TripId::ALL.into_iter().map(|id| self.trip(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trips_in_hub_order() {
        let catalog = Catalog::load().unwrap();
        let ids: Vec<TripId> = catalog.trips().map(|trip| trip.id).collect();
        assert_eq!(ids, vec![TripId::Bali, TripId::Suzuka]);
        assert_eq!(catalog.trip(TripId::Suzuka).profile.title, "SUZUKA");
    }
}
