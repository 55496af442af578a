//! Height as feet and inches, the unit the account service stores.

use crate::CoreError;

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

pub const MIN_FEET: u8 = 1;
pub const MAX_FEET: u8 = 8;
pub const MAX_INCHES: u8 = 11;

/// Validated height. Canonical form is `5'9"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Height {
    feet: u8,
    inches: u8,
}

impl Height {
    #[track_caller]
    pub fn new(feet: u8, inches: u8) -> crate::Result<Self> {
        if !(MIN_FEET..=MAX_FEET).contains(&feet) || inches > MAX_INCHES {
            return Err(CoreError::InvalidHeight {
                value: format!("{feet}'{inches}\""),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Height { feet, inches })
    }

    pub fn feet(&self) -> u8 {
        self.feet
    }

    pub fn inches(&self) -> u8 {
        self.inches
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{}\"", self.feet, self.inches)
    }
}

impl FromStr for Height {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidHeight {
            value: s.to_string(),
            location: ErrorLocation::from(Location::caller()),
        };

        let trimmed = s.trim();
        let rest = trimmed.strip_suffix('"').ok_or_else(&invalid)?;
        let (feet_part, inch_part) = rest.split_once('\'').ok_or_else(&invalid)?;

        let feet: u8 = feet_part.parse().map_err(|_| invalid())?;
        let inches: u8 = inch_part.parse().map_err(|_| invalid())?;

        Height::new(feet, inches).map_err(|_| invalid())
    }
}
