use chrono::Local;
use skycast_core::{CurrentForecast, Location};

pub fn print_forecast(location: &Location, forecast: &CurrentForecast) {
    println!();
    println!("{}", render_forecast(location, forecast));
}

/// Render the forecast the way the screen shows it: location and date on
/// top, then condition, temperature, and wind.
fn render_forecast(location: &Location, forecast: &CurrentForecast) -> String {
    let condition = forecast.condition();
    let date = Local::now().format("%B %-d, %Y");

    format!(
        "{name}\n\
         {date}\n\
         {description} [{icon}]\n\
         Temperature: {temperature:.1} \u{b0}C\n\
         Wind: {wind_speed:.1} km/h from {wind_direction:.0}\u{b0}",
        name = location.name,
        description = condition.description(),
        icon = condition.icon(),
        temperature = forecast.temperature,
        wind_speed = forecast.wind_speed,
        wind_direction = forecast.wind_direction,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_condition_and_readings() {
        let location = Location::new("San Jose", 37.335480, -121.893028);
        let forecast = CurrentForecast {
            wind_speed: 10.5,
            wind_direction: 180.0,
            temperature: 22.3,
            weather_code: 3,
        };

        let rendered = render_forecast(&location, &forecast);

        assert!(rendered.starts_with("San Jose\n"));
        assert!(rendered.contains("Cloudy or overcast [cloud-sun]"));
        assert!(rendered.contains("Temperature: 22.3 \u{b0}C"));
        assert!(rendered.contains("Wind: 10.5 km/h from 180\u{b0}"));
    }

    #[test]
    fn unknown_code_renders_as_clear_skies() {
        let location = Location::new("Nowhere", 0.0, 0.0);
        let forecast = CurrentForecast {
            wind_speed: 0.0,
            wind_direction: 0.0,
            temperature: 0.0,
            weather_code: 42,
        };

        let rendered = render_forecast(&location, &forecast);
        assert!(rendered.contains("Clear skies [sun]"));
    }
}
