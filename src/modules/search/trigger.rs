use crate::{
    modules::location::{Coordinate, LocationHint},
    shared::{errors::AppResult, utils::Validator},
};

/// What started a search
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    /// Search button next to the ZIP input
    ZipButton(String),
    /// Enter pressed inside the ZIP input
    EnterKey(String),
    Coordinates(Coordinate),
    /// "Use my location" button
    DeviceLocation,
    /// Automatic lookup when the page opens
    PageLoad,
}

/// Where a cycle gets its location from
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum HintSource {
    Hint(LocationHint),
    Device,
}

impl Trigger {
    pub fn label(&self) -> &'static str {
        match self {
            Trigger::ZipButton(_) => "zip button",
            Trigger::EnterKey(_) => "enter key",
            Trigger::Coordinates(_) => "coordinates",
            Trigger::DeviceLocation => "device location",
            Trigger::PageLoad => "page load",
        }
    }

    /// Entry guard: runs before any cycle starts
    pub(crate) fn into_source(self) -> AppResult<HintSource> {
        match self {
            Trigger::ZipButton(input) | Trigger::EnterKey(input) => {
                Ok(HintSource::Hint(LocationHint::postal_code(&input)?))
            }
            Trigger::Coordinates(coordinate) => {
                Validator::validate_coordinate(coordinate.latitude, coordinate.longitude)?;
                Ok(HintSource::Hint(LocationHint::Coordinates(coordinate)))
            }
            Trigger::DeviceLocation | Trigger::PageLoad => Ok(HintSource::Device),
        }
    }
}
