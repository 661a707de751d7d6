//! Plain-text rendering of one board frame.

use timespot_core::types::TimeFormat;
use timespot_service::board::{CityBoard, CityTile, TileState};
use timespot_service::sun::SunState;
use timespot_tz::format::{
    format_clock_string, format_day_length, format_long_date, format_short_clock_string,
    format_time_string, format_utc_offset_label, is_daytime,
};

/// Clock digits of the primary clock, without the period marker.
///
/// This is the string the adaptive sizer measures.
#[must_use]
pub fn primary_clock_text(board: &CityBoard, format: TimeFormat) -> Option<String> {
    board
        .primary()
        .snapshot()
        .map(|snapshot| format_clock_string(&snapshot.local, format).time)
}

fn primary_lines(board: &CityBoard, format: TimeFormat, font_size: f64) -> Vec<String> {
    match board.primary() {
        TileState::Ready(snapshot) => {
            let phase = if is_daytime(&snapshot.local) { "day" } else { "night" };
            vec![
                format!("{}, {}  [{phase}]", snapshot.city, snapshot.country),
                format!(
                    "{}  ({font_size:.0}px)",
                    format_time_string(&snapshot.local, format)
                ),
                format!(
                    "{}  {} {}",
                    format_long_date(Some(&snapshot.local)),
                    format_utc_offset_label(&snapshot.utc_offset),
                    snapshot.abbreviation
                ),
            ]
        }
        TileState::Pending => vec![
            board.primary_timezone().to_string(),
            format_long_date(None),
        ],
        TileState::Failed(reason) => vec![format!("{}: {reason}", board.primary_timezone())],
    }
}

fn sun_line(sun: &SunState) -> Option<String> {
    match sun {
        SunState::Idle => None,
        SunState::Ready(sun) => Some(format!(
            "sunrise {}  sunset {}  daylight {}",
            sun.sunrise,
            sun.sunset,
            format_day_length(Some(sun.day_length.as_str())),
        )),
        SunState::Failed(reason) => Some(format!("sun data unavailable: {reason}")),
    }
}

fn tile_line(tile: &CityTile, format: TimeFormat) -> String {
    let (time, abbreviation) = match &tile.state {
        TileState::Ready(snapshot) => (
            format_short_clock_string(&snapshot.local, format).to_string(),
            snapshot.abbreviation.clone(),
        ),
        TileState::Pending => ("--:--".to_string(), String::new()),
        TileState::Failed(reason) => (reason.clone(), String::new()),
    };
    format!("{:<18}{:<18}{time:>10} {abbreviation}", tile.city, tile.country)
        .trim_end()
        .to_string()
}

/// ## Summary
/// Renders the primary clock, the sun line and every tile as text.
#[must_use]
pub fn render_frame(board: &CityBoard, sun: &SunState, format: TimeFormat, font_size: f64) -> String {
    let mut lines = primary_lines(board, format, font_size);
    lines.extend(sun_line(sun));
    lines.push(String::new());
    lines.extend(board.tiles().iter().map(|tile| tile_line(tile, format)));
    lines.join("\n")
}
