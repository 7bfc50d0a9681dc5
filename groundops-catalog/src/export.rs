use chrono::NaiveDate;

use groundops_core::models::{FlightRecord, ScheduleEntry};

pub const FLIGHT_EXPORT_FILE: &str = "flight-data.csv";

/// A record that can be written as one CSV line in a fixed column order.
pub trait CsvRow {
    const HEADERS: &'static [&'static str];

    fn fields(&self) -> Vec<String>;
}

impl CsvRow for FlightRecord {
    const HEADERS: &'static [&'static str] = &[
        "Flight No.",
        "Route",
        "Aircraft",
        "Arrival",
        "Departure",
        "Scheduled",
        "Non-Scheduled",
        "Status",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.flight_no.clone(),
            self.route.clone(),
            self.aircraft.clone(),
            self.arrival.clone(),
            self.departure.clone(),
            yes_no(self.scheduled),
            yes_no(self.non_scheduled),
            self.status.to_string(),
        ]
    }
}

impl CsvRow for ScheduleEntry {
    const HEADERS: &'static [&'static str] = &[
        "Flight No.",
        "Airline",
        "Route",
        "Date",
        "Time",
        "Status",
        "Arrival",
        "Remarks",
        "Signature",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.flight_no.clone(),
            self.airline.clone(),
            self.route.clone(),
            self.date.clone(),
            self.time.clone(),
            self.status.to_string(),
            self.arrival.to_string(),
            self.remarks.clone(),
            self.signature.clone(),
        ]
    }
}

/// Header line plus one line per row. Every field is double-quoted and
/// lines are joined with `\n` without a trailing newline.
///
/// Line breaks inside a field are kept verbatim within its quotes, so such a
/// row spans several physical lines. Split the output with a CSV reader, not
/// by line.
pub fn to_csv<T: CsvRow>(rows: &[T]) -> String {
    let header = join_quoted(T::HEADERS.iter().copied());
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header);
    lines.extend(rows.iter().map(|row| {
        let fields = row.fields();
        join_quoted(fields.iter().map(String::as_str))
    }));
    lines.join("\n")
}

/// Download name for the schedule export, stamped with the export day.
pub fn schedule_export_file_name(day: NaiveDate) -> String {
    format!("flight-schedule-{}.csv", day.format("%Y-%m-%d"))
}

fn join_quoted<'a>(fields: impl Iterator<Item = &'a str>) -> String {
    fields.map(quote).collect::<Vec<_>>().join(",")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use groundops_core::models::{ArrivalStatus, FlightStatus};

    fn flight(flight_no: &str, route: &str, non_scheduled: bool) -> FlightRecord {
        FlightRecord {
            flight_no: flight_no.to_string(),
            route: route.to_string(),
            aircraft: "A320".to_string(),
            arrival: "10:30".to_string(),
            departure: "08:45".to_string(),
            date: "2024-01-15".to_string(),
            scheduled: !non_scheduled,
            non_scheduled,
            status: FlightStatus::Active,
        }
    }

    #[test]
    fn test_flight_export_two_rows() {
        let rows = vec![flight("AF101", "DEL-BOM", false), flight("AF303", "BLR-HYD", true)];

        let csv = to_csv(&rows);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "\"Flight No.\",\"Route\",\"Aircraft\",\"Arrival\",\"Departure\",\"Scheduled\",\"Non-Scheduled\",\"Status\""
        );
        assert_eq!(
            lines[1],
            "\"AF101\",\"DEL-BOM\",\"A320\",\"10:30\",\"08:45\",\"Yes\",\"No\",\"Active\""
        );
        assert_eq!(
            lines[2],
            "\"AF303\",\"BLR-HYD\",\"A320\",\"10:30\",\"08:45\",\"No\",\"Yes\",\"Active\""
        );
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let csv = to_csv::<FlightRecord>(&[]);
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_schedule_export_escapes_quotes() {
        let entry = ScheduleEntry {
            id: 3,
            flight_no: "SG 567".to_string(),
            airline: "SpiceJet".to_string(),
            route: "MAA–HYD-MAA".to_string(),
            date: "Nov 11, 2025".to_string(),
            time: "09:15".to_string(),
            status: FlightStatus::Cancelled,
            arrival: ArrivalStatus::Cancelled,
            remarks: "Crew said \"hold\", then cancelled".to_string(),
            signature: "John Doe".to_string(),
            media: Vec::new(),
        };

        let csv = to_csv(&[entry]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "\"SG 567\",\"SpiceJet\",\"MAA–HYD-MAA\",\"Nov 11, 2025\",\"09:15\",\"Cancelled\",\"Cancelled\",\"Crew said \"\"hold\"\", then cancelled\",\"John Doe\""
        );
    }

    #[test]
    fn test_multiline_remarks_stay_inside_quotes() {
        let entry = ScheduleEntry {
            id: 4,
            flight_no: "AI 101".to_string(),
            airline: "Air India".to_string(),
            route: "DEL–BOM-DEL".to_string(),
            date: "Nov 11, 2025".to_string(),
            time: "06:00".to_string(),
            status: FlightStatus::Cancelled,
            arrival: ArrivalStatus::Cancelled,
            remarks: "a\"b\nc".to_string(),
            signature: "John Doe".to_string(),
            media: Vec::new(),
        };

        let csv = to_csv(&[entry]);
        assert!(csv.ends_with(",\"a\"\"b\nc\",\"John Doe\""));
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_schedule_file_name() {
        let day = NaiveDate::from_ymd_opt(2025, 11, 11).unwrap();
        assert_eq!(schedule_export_file_name(day), "flight-schedule-2025-11-11.csv");
    }
}
