use super::{MAX_JOBS, MIN_JOBS, ViewState};
use crate::export;

/// Renders the whole shell page: form, status line, results table,
/// download link
pub fn render_page(view: &ViewState) -> String {
    let mut page = String::new();

    page.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Naukri Job Scout</title>\n<style>\n\
         body { font-family: sans-serif; margin: 2em; max-width: 70em; }\n\
         table { border-collapse: collapse; margin-top: 1em; }\n\
         th, td { border: 1px solid #999; padding: 0.4em 0.6em; text-align: left; }\n\
         th { background: #164a4c; color: #fff; }\n\
         .status { margin-top: 1em; font-weight: bold; }\n\
         form.inline { display: inline; }\n\
         </style>\n</head>\n<body>\n",
    );

    page.push_str("<h1>Naukri Job Scout</h1>\n");
    page.push_str("<p>Enter the job details and press Search to fetch listings.</p>\n");

    render_form(&mut page, view);

    if let Some(status) = &view.status {
        page.push_str(&format!(
            "<p class=\"status\">{}</p>\n",
            escape(status)
        ));
    }

    if !view.rows.is_empty() {
        render_table(&mut page, view);
        page.push_str("<p><a href=\"/export\">Download the CSV file</a></p>\n");
    }

    page.push_str("</body>\n</html>\n");
    page
}

fn render_form(page: &mut String, view: &ViewState) {
    page.push_str(&format!(
        "<form method=\"post\" action=\"/search\">\n\
         <label>Job role <input type=\"text\" name=\"role\" value=\"{role}\" \
         placeholder=\"e.g. Machine Learning Engineer\"></label><br>\n\
         <label>Location <input type=\"text\" name=\"location\" value=\"{location}\" \
         placeholder=\"e.g. Bangalore\"></label><br>\n\
         <label>Number of jobs <input type=\"number\" name=\"max_jobs\" \
         min=\"{min}\" max=\"{max}\" value=\"{cap}\"></label><br>\n\
         <button type=\"submit\">Search Jobs</button>\n\
         </form>\n\
         <form class=\"inline\" method=\"post\" action=\"/clear\">\n\
         <button type=\"submit\">Clear</button>\n\
         </form>\n",
        role = escape(&view.role),
        location = escape(&view.location),
        min = MIN_JOBS,
        max = MAX_JOBS,
        cap = view.max_jobs,
    ));
}

fn render_table(page: &mut String, view: &ViewState) {
    page.push_str("<table>\n<tr>");
    for column in export::CSV_HEADER {
        page.push_str(&format!("<th>{}</th>", escape(column)));
    }
    page.push_str("</tr>\n");

    for row in &view.rows {
        page.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><a href=\"{link}\">{link}</a></td><td>{}</td><td>{}</td></tr>\n",
            escape(&row.title),
            escape(&row.company),
            escape(&row.location),
            escape(&row.experience),
            escape(&row.salary),
            escape(&export::format_skills(&row.skills)),
            link = escape(&row.detail_url),
        ));
    }

    page.push_str("</table>\n");
}

/// Minimal HTML escaping for user- and portal-derived text
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
