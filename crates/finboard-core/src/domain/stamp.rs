use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::ValidationError;

/// Last-updated stamp attached to a company record.
///
/// The feed delivers these as strings, either full RFC3339 timestamps or
/// bare `YYYY-MM-DD` dates. Both the raw string and the parsed calendar
/// date are kept: exports reproduce the raw value verbatim, while date
/// range filtering works on the parsed date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStamp {
    raw: String,
    date: Date,
}

impl UpdateStamp {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();

        if let Ok(stamp) = OffsetDateTime::parse(trimmed, &Rfc3339) {
            return Ok(Self {
                raw: trimmed.to_owned(),
                date: stamp.date(),
            });
        }

        let date_only = format_description!("[year]-[month]-[day]");
        if let Ok(date) = Date::parse(trimmed, &date_only) {
            return Ok(Self {
                raw: trimmed.to_owned(),
                date,
            });
        }

        Err(ValidationError::UnparsableStamp {
            value: input.to_owned(),
        })
    }

    /// Raw feed value, reproduced untouched in export rows.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub const fn date(&self) -> Date {
        self.date
    }

    /// Inclusive calendar range check used by the export wizard.
    pub fn within(&self, start: Date, end: Date) -> bool {
        self.date >= start && self.date <= end
    }
}

impl Display for UpdateStamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for UpdateStamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for UpdateStamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
