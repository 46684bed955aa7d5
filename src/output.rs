//! Output formatting for listings.
//!
//! Supports a plain-text page rendering, pretty JSON, and CSV rows.

use anyhow::Result;
use csv::WriterBuilder;
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;
use tracing::debug;

use crate::filter::{ALL, RegionFilter};
use crate::listing::Listing;
use crate::records::EnrichedRecord;

/// Logs a listing using Rust's debug pretty-print format.
pub fn print_pretty(listing: &Listing) {
    debug!("{:#?}", listing);
}

/// Serializes a listing as pretty-printed JSON.
pub fn to_json(listing: &Listing) -> Result<String> {
    Ok(serde_json::to_string_pretty(listing)?)
}

/// One CSV row per listed program.
#[derive(Debug, Serialize)]
struct ListingRow<'a> {
    status: &'static str,
    name: &'a str,
    location: &'a str,
    country: &'a str,
    country_code: Option<&'static str>,
    region: Option<&'static str>,
    date_start: &'a str,
    date_end: &'a str,
    deadline: &'a str,
    cost: Option<&'a str>,
    link: &'a str,
    note: Option<&'a str>,
}

impl<'a> ListingRow<'a> {
    fn new(status: &'static str, r: &'a EnrichedRecord) -> Self {
        let info = r.country_info.as_ref();
        Self {
            status,
            name: &r.record.name,
            location: &r.record.location,
            country: &r.record.country,
            country_code: info.map(|i| i.code),
            region: info.map(|i| i.continent.code()),
            date_start: &r.record.date_start,
            date_end: &r.record.date_end,
            deadline: &r.record.deadline,
            cost: r.record.cost.as_deref(),
            link: &r.record.link,
            note: r.record.note.as_deref(),
        }
    }
}

/// Writes open rows first, then closed rows, with a single header line.
pub fn write_csv<W: Write>(writer: W, listing: &Listing) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);

    for r in &listing.open {
        writer.serialize(ListingRow::new("open", r))?;
    }
    for r in &listing.closed {
        writer.serialize(ListingRow::new("closed", r))?;
    }
    writer.flush()?;

    Ok(())
}

pub fn to_csv(listing: &Listing) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, listing)?;
    Ok(String::from_utf8(buf)?)
}

/// Renders the listing the way the page lays it out: region selector, then
/// the open section, then previous schools.
pub fn render_text(listing: &Listing, selected: &RegionFilter) -> String {
    let mut out = String::new();

    let _ = write!(out, "Region:");
    let mark = |on: bool| if on { "*" } else { " " };
    let _ = write!(out, " [{}{}]", mark(*selected == RegionFilter::All), ALL);
    for region in &listing.available_regions {
        let on = selected.as_str() == region.code();
        let _ = write!(out, " [{}{} {}]", mark(on), region.code(), region.name());
    }
    out.push_str("\n\n");

    section(
        &mut out,
        &format!("Application portal open ({} schools)", listing.open_count()),
        &listing.open,
    );
    section(
        &mut out,
        &format!("Previous summer schools ({} schools)", listing.closed_count()),
        &listing.closed,
    );

    out
}

fn section(out: &mut String, title: &str, records: &[EnrichedRecord]) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "-".repeat(title.chars().count()));
    for r in records {
        row(out, r);
    }
    out.push('\n');
}

fn row(out: &mut String, r: &EnrichedRecord) {
    let rec = &r.record;
    let emoji = r.emoji();
    if emoji.is_empty() {
        let _ = writeln!(out, "\n{}", rec.name);
    } else {
        let _ = writeln!(out, "\n{} {}", rec.name, emoji);
    }
    let _ = writeln!(out, "  {}", rec.link);
    let _ = writeln!(
        out,
        "  Dates: {} - {}    Location: {}, {}",
        rec.date_start, rec.date_end, rec.location, rec.country
    );
    let label = if r.is_open {
        "Application deadline"
    } else {
        "Previous application deadline"
    };
    let _ = writeln!(out, "  {label}: {}", rec.deadline);
    if let Some(cost) = &rec.cost {
        let _ = writeln!(out, "  Cost: {cost}");
    }
    if let Some(note) = &rec.note {
        let _ = writeln!(out, "  Note: {note}");
    }
}
