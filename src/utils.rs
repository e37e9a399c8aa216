/// Convert a user-entered role into a safe filename stem
pub fn sanitize_filename_stem(role: &str) -> String {
    let mut name = role.trim().to_string();
    name = name.replace([' ', '/', ':', '?', '&', '=', '#', '%', '"', '\\'], "_");

    if name.is_empty() {
        return "jobs".to_string();
    }

    // Limit filename length
    if name.len() > 60 {
        name.chars().take(60).collect()
    } else {
        name
    }
}

/// Filename offered for the CSV download, derived from the entered role
pub fn export_filename(role: &str) -> String {
    format!("{}_naukri.csv", sanitize_filename_stem(role))
}
