use std::fmt;
use std::fmt::Formatter;
use serde::Serialize;

/// Forecast categories reported as the published state
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Forecast {
    Sunny,
    #[serde(rename = "partlycloudy")]
    PartlyCloudy,
    Cloudy,
    Rainy,
    Snowy,
    SnowyRainy,
}

/// Implementation of the Display Trait using the published labels
impl fmt::Display for Forecast {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Forecast::Sunny        => write!(f, "sunny"),
            Forecast::PartlyCloudy => write!(f, "partlycloudy"),
            Forecast::Cloudy       => write!(f, "cloudy"),
            Forecast::Rainy        => write!(f, "rainy"),
            Forecast::Snowy        => write!(f, "snowy"),
            Forecast::SnowyRainy   => write!(f, "snowy-rainy"),
        }
    }
}

/// Translates a console forecast icon code to a forecast category.
/// Codes not known to the table give None, which is published as a null state.
///
/// # Arguments
///
/// * 'icon' - forecast icon byte from the LOOP packet
pub fn forecast_for(icon: u8) -> Option<Forecast> {
    match icon {
        8 => Some(Forecast::Sunny),
        6 => Some(Forecast::PartlyCloudy),
        2 => Some(Forecast::Cloudy),
        3 | 7 => Some(Forecast::Rainy),
        18 | 22 => Some(Forecast::Snowy),
        19 | 23 => Some(Forecast::SnowyRainy),
        _ => None,
    }
}
