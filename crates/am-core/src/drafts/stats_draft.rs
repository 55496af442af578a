use crate::drafts::{MAX_AGE, MAX_WEIGHT, MIN_AGE, MIN_WEIGHT};
use crate::{CoreError, Height, UserEntity};

/// Draft for the physical-stats group (age, height, weight).
///
/// Height is edited as separate feet/inches fields and submitted in the
/// canonical `5'9"` form.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsDraft {
    pub age: Option<i32>,
    pub feet: Option<u8>,
    pub inches: Option<u8>,
    pub weight: Option<f64>,
}

impl StatsDraft {
    pub fn from_entity(entity: &UserEntity) -> Self {
        let height = entity
            .height
            .as_deref()
            .and_then(|raw| raw.parse::<Height>().ok());

        StatsDraft {
            age: entity.age,
            feet: height.map(|h| h.feet()),
            inches: height.map(|h| h.inches()),
            weight: entity.weight,
        }
    }

    /// Validated height, if both parts are present
    pub fn height(&self) -> crate::Result<Option<Height>> {
        match (self.feet, self.inches) {
            (None, None) => Ok(None),
            (Some(feet), Some(inches)) => Height::new(feet, inches).map(Some),
            _ => Err(CoreError::validation(
                "Please enter both feet and inches for height.",
            )),
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        if let Some(age) = self.age
            && !(MIN_AGE..=MAX_AGE).contains(&age)
        {
            return Err(CoreError::validation(format!(
                "Age must be between {MIN_AGE} and {MAX_AGE}."
            )));
        }

        self.height()?;

        if let Some(weight) = self.weight
            && !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight)
        {
            return Err(CoreError::validation(format!(
                "Weight must be between {MIN_WEIGHT} and {MAX_WEIGHT} lbs."
            )));
        }

        Ok(())
    }
}
