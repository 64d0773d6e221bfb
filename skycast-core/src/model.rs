use serde::{Deserialize, Serialize};

use crate::weather_code::WeatherCode;

/// A named coordinate pair used as a fetch parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self { name: name.into(), latitude, longitude }
    }
}

/// Current atmospheric readings for one location at fetch time.
///
/// Decoded from the `current_weather` object of an Open-Meteo response;
/// the upstream keys use lowercase-concatenated names, hence the renames.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CurrentForecast {
    #[serde(rename = "windspeed")]
    pub wind_speed: f64,
    #[serde(rename = "winddirection")]
    pub wind_direction: f64,
    pub temperature: f64,
    #[serde(rename = "weathercode")]
    pub weather_code: i32,
}

impl CurrentForecast {
    /// The classified weather condition for this forecast.
    pub fn condition(&self) -> WeatherCode {
        WeatherCode::from_code(self.weather_code)
    }
}

/// The fixed location list plus the currently-selected index.
///
/// Selection clamps at both ends: no wraparound, never out of bounds.
#[derive(Debug, Clone)]
pub struct LocationList {
    locations: Vec<Location>,
    selected: usize,
}

impl LocationList {
    /// Build a list starting at the first location.
    ///
    /// # Panics
    /// Panics if `locations` is empty; the list is read-only configuration
    /// and callers construct it from a non-empty default.
    pub fn new(locations: Vec<Location>) -> Self {
        assert!(!locations.is_empty(), "location list must not be empty");
        Self { locations, selected: 0 }
    }

    pub fn selected(&self) -> &Location {
        &self.locations[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Step back one location, staying at the first one if already there.
    pub fn select_previous(&mut self) -> &Location {
        self.selected = self.selected.saturating_sub(1);
        self.selected()
    }

    /// Step forward one location, staying at the last one if already there.
    pub fn select_next(&mut self) -> &Location {
        self.selected = (self.selected + 1).min(self.locations.len() - 1);
        self.selected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_locations() -> Vec<Location> {
        vec![
            Location::new("A", 0.0, 0.0),
            Location::new("B", 1.0, 1.0),
            Location::new("C", 2.0, 2.0),
        ]
    }

    #[test]
    fn starts_at_first_location() {
        let list = LocationList::new(three_locations());
        assert_eq!(list.selected_index(), 0);
        assert_eq!(list.selected().name, "A");
    }

    #[test]
    fn previous_clamps_at_first() {
        let mut list = LocationList::new(three_locations());
        list.select_previous();
        assert_eq!(list.selected_index(), 0);
    }

    #[test]
    fn next_clamps_at_last() {
        let mut list = LocationList::new(three_locations());
        list.select_next();
        list.select_next();
        assert_eq!(list.selected_index(), 2);

        list.select_next();
        assert_eq!(list.selected_index(), 2);
        assert_eq!(list.selected().name, "C");
    }

    #[test]
    fn next_then_previous_returns() {
        let mut list = LocationList::new(three_locations());
        list.select_next();
        assert_eq!(list.selected().name, "B");
        list.select_previous();
        assert_eq!(list.selected().name, "A");
    }

    #[test]
    fn forecast_condition_uses_weather_code() {
        let forecast = CurrentForecast {
            wind_speed: 5.0,
            wind_direction: 90.0,
            temperature: 18.0,
            weather_code: 95,
        };
        assert_eq!(forecast.condition(), WeatherCode::ThunderstormSlight);
    }
}
