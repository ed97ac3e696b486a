//! HTML rendering of the view model

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{ForecastRecord, ViewSnapshot};
use crate::weather::open_meteo::weather_code_to_description;

/// WHO UV index category
#[must_use]
pub fn uv_risk(uv_index: f64) -> &'static str {
    match uv_index {
        x if x < 3.0 => "Low",
        x if x < 6.0 => "Moderate",
        x if x < 8.0 => "High",
        x if x < 11.0 => "Very high",
        _ => "Extreme",
    }
}

/// Escape text for use in HTML content and attribute values
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn hour_label(timestamp: &str) -> String {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M")
        .map_or_else(|_| timestamp.to_string(), |dt| dt.format("%H:%M").to_string())
}

fn day_label(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_or_else(|_| date.to_string(), |d| d.format("%a %d %b %Y").to_string())
}

fn format_optional(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| "&ndash;".to_string(), |v| format!("{v:.1}{unit}"))
}

/// Render the full page for a snapshot, with an optional notice on top
#[must_use]
pub fn render(view: &ViewSnapshot, notice: Option<&str>) -> String {
    let city = escape_html(&view.city_name);
    let mut html = String::new();

    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"de\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>UV index &ndash; {city}</title>\n</head>\n<body>\n\
         <form method=\"get\" action=\"/\">\n\
         <input type=\"text\" name=\"cityName\" placeholder=\"City\" value=\"{city}\">\n\
         <button type=\"submit\">Show</button>\n</form>\n\
         <h1>{city}</h1>\n"
    ));

    if let Some(notice) = notice {
        html.push_str(&format!(
            "<p class=\"notice\">{}</p>\n",
            escape_html(notice)
        ));
    }

    if view.history.is_empty() {
        html.push_str("<p class=\"empty\">No forecast yet.</p>\n");
    }

    for record in view.history.iter().rev() {
        render_record(&mut html, record);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_record(html: &mut String, record: &ForecastRecord) {
    let lat = record.location.latitude;
    let lon = record.location.longitude;
    let day = record
        .series
        .timestamps
        .first()
        .map(|d| escape_html(&day_label(d)))
        .unwrap_or_default();

    html.push_str(&format!(
        "<section class=\"forecast\">\n<h2>{day}</h2>\n\
         <p><a href=\"https://www.openstreetmap.org/?mlat={lat}&amp;mlon={lon}#map=11/{lat}/{lon}\">\
         {lat:.4}, {lon:.4}</a>, {elevation:.0} m</p>\n",
        elevation = record.elevation
    ));

    match record.uv_index_max_today {
        Some(uv) => {
            html.push_str(&format!(
                "<p class=\"uv\">UV index max: <strong>{uv:.1}</strong> ({}), clear sky: {}</p>\n",
                uv_risk(uv),
                format_optional(record.uv_index_clear_sky_max_today(), "")
            ));
        }
        None => html.push_str("<p class=\"uv\">No UV data available.</p>\n"),
    }

    let points = record.series.hourly_points();
    if !points.is_empty() {
        html.push_str(
            "<table>\n<tr><th>Time</th><th>Temperature</th><th>Weather</th><th>CAPE</th></tr>\n",
        );
        for point in points {
            let weather = point
                .weather_code
                .map_or("&ndash;", weather_code_to_description);
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&hour_label(point.timestamp)),
                format_optional(point.temperature, " °C"),
                weather,
                format_optional(point.cape, " J/kg")
            ));
        }
        html.push_str("</table>\n");
    }

    html.push_str("</section>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, ForecastSeries, ViewModel};
    use rstest::rstest;

    fn stuttgart_record(uv: Vec<Option<f64>>) -> ForecastRecord {
        let days = uv.len();
        let series = ForecastSeries {
            timestamps: (0..days).map(|_| "2024-06-01".to_string()).collect(),
            uv_index_clear_sky_max: uv.iter().map(|v| v.map(|v| v + 0.9)).collect(),
            uv_index_max: uv,
            hourly_timestamps: vec!["2024-06-01T13:00".into(), "2024-06-01T14:00".into()],
            hourly_temperature: Some(vec![Some(24.5), None]),
            hourly_weather_code: Some(vec![Some(95), None]),
            hourly_cape: None,
        };
        ForecastRecord::new(Coordinate::new(48.78, 9.18).unwrap(), 245.0, series).unwrap()
    }

    #[rstest]
    #[case(0.0, "Low")]
    #[case(5.2, "Moderate")]
    #[case(7.9, "High")]
    #[case(10.0, "Very high")]
    #[case(11.5, "Extreme")]
    fn test_uv_risk(#[case] uv: f64, #[case] expected: &str) {
        assert_eq!(uv_risk(uv), expected);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>\"x\" & 'y'</script>"),
            "&lt;script&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_render_initial_view() {
        let html = render(&ViewModel::new(), None);
        assert!(html.contains("<h1>Unknown</h1>"));
        assert!(html.contains("No forecast yet."));
    }

    #[test]
    fn test_render_record() {
        let mut view = ViewModel::new();
        view.city_name = "Stuttgart".into();
        view.history.push(stuttgart_record(vec![Some(5.2)]));

        let html = render(&view, None);
        assert!(html.contains("<h1>Stuttgart</h1>"));
        assert!(html.contains("<strong>5.2</strong> (Moderate)"));
        assert!(html.contains("clear sky: 6.1"));
        assert!(html.contains("<td>13:00</td><td>24.5 °C</td><td>Thunderstorm</td><td>&ndash;</td>"));
        assert!(html.contains("<td>14:00</td><td>&ndash;</td><td>&ndash;</td><td>&ndash;</td>"));
        assert!(html.contains("Sat 01 Jun 2024"));
    }

    #[test]
    fn test_render_without_uv_data() {
        let mut view = ViewModel::new();
        view.history.push(stuttgart_record(Vec::new()));
        let html = render(&view, None);
        assert!(html.contains("No UV data available."));
    }

    #[test]
    fn test_render_with_null_uv_today() {
        let mut view = ViewModel::new();
        view.history.push(stuttgart_record(vec![None]));
        let html = render(&view, None);
        assert!(html.contains("No UV data available."));
        assert!(html.contains("<td>13:00</td><td>24.5 °C</td>"));
    }

    #[test]
    fn test_render_escapes_city_and_notice() {
        let mut view = ViewModel::new();
        view.city_name = "<b>Ulm</b>".into();
        let html = render(&view, Some("No location found for '<x>'."));
        assert!(html.contains("<h1>&lt;b&gt;Ulm&lt;/b&gt;</h1>"));
        assert!(html.contains("No location found for &#39;&lt;x&gt;&#39;."));
        assert!(!html.contains("<b>Ulm</b>"));
    }
}
