use crate::error::ExportError;
use crate::record::JobListing;
use regex::Regex;
use std::io::Write;

/// Column names of the CSV export, in order
pub const CSV_HEADER: [&str; 7] = [
    "Job Title",
    "Company",
    "Location",
    "Experience",
    "Job Link",
    "Salary",
    "Skills",
];

/// Writes records as CSV, one row per listing, header first
pub fn write_csv<W: Write>(records: &[JobListing], out: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADER)?;

    for rec in records {
        let skills = format_skills(&rec.skills);
        writer.write_record([
            rec.title.as_str(),
            rec.company.as_str(),
            rec.location.as_str(),
            rec.experience.as_str(),
            rec.detail_url.as_str(),
            rec.salary.as_str(),
            skills.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Renders the export in memory, for the shell's download response
pub fn csv_string(records: &[JobListing]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Serializes the skills list as a bracketed, comma-joined field
pub fn format_skills(skills: &[String]) -> String {
    format!("[{}]", skills.join(", "))
}

/// Parses a skills field back into the ordered list `format_skills` wrote
pub fn parse_skills(field: &str) -> Vec<String> {
    let bracketed = Regex::new(r"(?s)^\[(.*)\]$").unwrap();
    let inner = match bracketed.captures(field.trim()) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()),
        None => field.trim(),
    };

    if inner.trim().is_empty() {
        return Vec::new();
    }
    inner.split(", ").map(|s| s.to_string()).collect()
}
