//! Plain-text rendering of generated timetables.
//!
//! Produces the same layout the document exporters use: the section
//! heading (title, room, class teacher, w.e.f. date, periods per day), a
//! header row of period labels, one row per working day, each cell showing the
//! subject code with the faculty in parentheses (or `-` when empty),
//! followed by the faculty details and weekly hours.

use std::fmt::Write;

use crate::models::TimetableResult;

/// Header and body rows of a section's table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRows {
    /// `"Day"` followed by one label per period.
    pub header: Vec<String>,
    /// One row per working day: day name followed by cell texts.
    pub body: Vec<Vec<String>>,
}

/// Builds the table rows for a section.
///
/// Cell text is `"CODE\n(Faculty)"`; empty cells are `"-"`.
pub fn table_rows(result: &TimetableResult) -> TableRows {
    let config = &result.config;

    let header: Vec<String> = std::iter::once("Day".to_string())
        .chain(config.period_timings.iter().map(|t| t.label()))
        .collect();

    let body = config
        .working_days
        .iter()
        .enumerate()
        .map(|(d, day)| {
            let cells = (0..config.period_count()).map(|p| {
                result
                    .grid
                    .get(d, p)
                    .map_or_else(|| "-".to_string(), |c| c.cell_text())
            });
            std::iter::once(day.name().to_string())
                .chain(cells)
                .collect::<Vec<String>>()
        })
        .collect();

    TableRows { header, body }
}

/// Faculty details lines: `"CODE: Faculty (phone) - N Hrs/Week"`.
pub fn faculty_details(result: &TimetableResult) -> Vec<String> {
    result
        .config
        .subjects
        .iter()
        .map(|s| match &s.faculty_phone {
            Some(phone) if !phone.is_empty() => format!(
                "{}: {} ({}) - {} Hrs/Week",
                s.code, s.faculty_name, phone, s.weekly_hours
            ),
            _ => format!("{}: {} - {} Hrs/Week", s.code, s.faculty_name, s.weekly_hours),
        })
        .collect()
}

/// Heading lines: title, room/teacher/w.e.f. line (when any is set) and
/// the number of periods per day. Blank fields are left out.
fn heading(result: &TimetableResult) -> Vec<String> {
    let info = &result.config.info;

    let mut title = labelled(&[
        ("", info.department.as_str()),
        ("", info.course.as_str()),
        ("", info.year.as_str()),
        ("", info.semester.as_str()),
    ])
    .join(" ");
    if !info.section.trim().is_empty() {
        if !title.is_empty() {
            title.push_str(" - ");
        }
        title.push_str(&format!("Section {}", info.section));
    }
    if !info.academic_year.trim().is_empty() {
        if !title.is_empty() {
            title.push(' ');
        }
        title.push_str(&format!("({})", info.academic_year));
    }

    let mut lines = vec![title];
    let details = labelled(&[
        ("Room: ", info.room_number.as_str()),
        ("Class Teacher: ", info.class_teacher.as_str()),
        ("W.E.F.: ", info.wef.as_str()),
    ]);
    if !details.is_empty() {
        lines.push(details.join(" | "));
    }
    lines.push(format!(
        "Total Periods per Day: {}",
        result.config.period_count()
    ));
    lines
}

fn labelled(parts: &[(&str, &str)]) -> Vec<String> {
    parts
        .iter()
        .filter(|(_, v)| !v.trim().is_empty())
        .map(|(k, v)| format!("{k}{v}"))
        .collect()
}

/// Renders a section as an aligned text table under its heading, with the
/// faculty details underneath.
pub fn render_text(result: &TimetableResult) -> String {
    let rows = table_rows(result);
    let flat = |cell: &str| cell.replace('\n', " ");

    let mut widths: Vec<usize> = rows.header.iter().map(|h| h.chars().count()).collect();
    for row in &rows.body {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(flat(cell).chars().count());
        }
    }

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{:<w$}", flat(c)))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    for h in heading(result) {
        let _ = writeln!(out, "{h}");
    }
    let _ = writeln!(out, "{}", line(rows.header.as_slice()));
    let _ = writeln!(
        out,
        "{}",
        widths.iter().map(|&w| "-".repeat(w)).collect::<Vec<_>>().join("-+-")
    );
    for row in &rows.body {
        let _ = writeln!(out, "{}", line(row.as_slice()));
    }

    let details = faculty_details(result);
    if !details.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Faculty Details & Workload");
        for d in details {
            let _ = writeln!(out, "  {d}");
        }
    }
    if !result.conflicts.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Forced conflicts");
        for c in &result.conflicts {
            let _ = writeln!(
                out,
                "  {} ({}) on {} period {}, previously {}",
                c.subject_code,
                c.faculty_name,
                c.day,
                c.period_index,
                c.previous_occupant.as_deref().unwrap_or("-")
            );
        }
    }
    out
}
