use serde::{Deserialize, Serialize};

/// Which part of the venue management screen is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    List,
    VenueDetails {
        venue_id: String,
    },
    GroundDetails {
        venue_id: String,
        ground_id: String,
    },
}

impl ViewState {
    /// Opening a venue is possible from anywhere and drops any ground selection.
    pub fn open_venue(&self, venue_id: impl Into<String>) -> Self {
        ViewState::VenueDetails {
            venue_id: venue_id.into(),
        }
    }

    /// Opens a ground of the venue currently shown. From the list there is no
    /// venue to attach the ground to, so the state is left unchanged.
    pub fn open_ground(&self, ground_id: impl Into<String>) -> Self {
        match self {
            ViewState::List => ViewState::List,
            ViewState::VenueDetails { venue_id } | ViewState::GroundDetails { venue_id, .. } => {
                ViewState::GroundDetails {
                    venue_id: venue_id.clone(),
                    ground_id: ground_id.into(),
                }
            }
        }
    }

    pub fn back(&self) -> Self {
        match self {
            ViewState::List | ViewState::VenueDetails { .. } => ViewState::List,
            ViewState::GroundDetails { venue_id, .. } => ViewState::VenueDetails {
                venue_id: venue_id.clone(),
            },
        }
    }

    pub fn venue_id(&self) -> Option<&str> {
        match self {
            ViewState::List => None,
            ViewState::VenueDetails { venue_id } | ViewState::GroundDetails { venue_id, .. } => {
                Some(venue_id)
            }
        }
    }

    pub fn ground_id(&self) -> Option<&str> {
        match self {
            ViewState::List | ViewState::VenueDetails { .. } => None,
            ViewState::GroundDetails { ground_id, .. } => Some(ground_id),
        }
    }
}
