use crate::domain::model::{DashboardSummary, Internship, Offer, Student};

fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

pub fn student_list(students: &[Student]) -> String {
    if students.is_empty() {
        return "No students yet.".to_string();
    }

    students
        .iter()
        .map(|s| {
            let details = format!("{} {}", or_empty(&s.dept), or_empty(&s.year));
            format!("[{}] {} — {}\n    {}", s.id, s.roll_no, s.name, details.trim())
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// 下拉選單用的學生標籤
pub fn student_option(student: &Student) -> String {
    format!("{} ({})", student.name, student.roll_no)
}

fn offer_line(offer: &Offer) -> String {
    format!(
        "{} - {} [{}]",
        or_dash(&offer.company),
        or_dash(&offer.role),
        offer.status
    )
}

fn internship_line(internship: &Internship) -> String {
    format!(
        "{} - {} [{}]",
        or_dash(&internship.company),
        or_dash(&internship.role),
        internship.status
    )
}

fn section(title: &str, lines: Vec<String>) -> String {
    if lines.is_empty() {
        format!("{}:\n  None", title)
    } else {
        let body = lines
            .iter()
            .map(|line| format!("  {}", line))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{}:\n{}", title, body)
    }
}

pub fn student_detail(student: &Student) -> String {
    let header = format!(
        "{}\nDept: {}\nEmail: {}",
        student_option(student),
        or_dash(&student.dept),
        or_dash(&student.email)
    );
    let offers = section("Offers", student.offers.iter().map(offer_line).collect());
    let internships = section(
        "Internships",
        student.internships.iter().map(internship_line).collect(),
    );

    format!("{}\n----\n{}\n----\n{}", header, offers, internships)
}

pub fn offer_list(offers: &[Offer]) -> String {
    if offers.is_empty() {
        return "No offers yet.".to_string();
    }

    offers
        .iter()
        .map(|o| {
            let date = o.date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string());
            format!(
                "[{}] student {}: {} ctc {} on {}",
                o.id,
                o.student_id,
                offer_line(o),
                or_dash(&o.ctc),
                date
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn internship_list(internships: &[Internship]) -> String {
    if internships.is_empty() {
        return "No internships yet.".to_string();
    }

    internships
        .iter()
        .map(|i| {
            let start = i.start_date.map(|d| d.to_string()).unwrap_or_else(|| "?".to_string());
            let end = i.end_date.map(|d| d.to_string()).unwrap_or_else(|| "?".to_string());
            format!(
                "[{}] student {}: {} ({} → {}), {} report(s)",
                i.id,
                i.student_id,
                internship_line(i),
                start,
                end,
                i.reports.len()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn dashboard(summary: &DashboardSummary) -> String {
    format!(
        "Total Students: {}\nTotal Offers: {}\nAccepted Offers: {}\nJoined Offers: {}\nOngoing Internships: {}",
        summary.total_students,
        summary.total_offers,
        summary.accepted_offers,
        summary.joined_offers,
        summary.ongoing_internships
    )
}
