//! Plain-text export of the current selection.
//!
//! Produces the formatted document only; writing it to a file or the
//! clipboard is the caller's business.

use crate::models::{localize_digits, Catalog, CourseKey};
use crate::services::summary::summarize;

/// Render the selection as a Persian plain-text document.
///
/// One section per catalog-resolvable course; stale keys are skipped.
/// The footer repeats the aggregate summary, which still counts stale
/// keys the way [`summarize`] does.
pub fn render_selection_text(selection: &[CourseKey], catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("برنامه هفتگی\n");
    out.push_str("============\n\n");

    for key in selection {
        let Some(course) = catalog.find(key) else {
            continue;
        };

        out.push_str(&format!(
            "{} [{}]\n",
            course.name,
            localize_digits(&key.to_string())
        ));
        out.push_str(&format!(
            "  واحد: {}\n",
            localize_digits(&course.units.to_string())
        ));
        if !course.professor.is_empty() {
            out.push_str(&format!("  استاد: {}\n", course.professor));
        }
        for slot in &course.schedule {
            out.push_str(&format!(
                "  {} {}\n",
                slot.day,
                localize_digits(&format!("{} تا {}", slot.start.hhmm(), slot.end.hhmm()))
            ));
        }
        out.push('\n');
    }

    let summary = summarize(selection, catalog);
    out.push_str(&format!(
        "جمع: {} درس، {} واحد\n",
        localize_digits(&summary.count.to_string()),
        localize_digits(&summary.total_units.to_string())
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = "\
# فیزیک
code=PHY
name=فیزیک ۱
units=3
professor=دکتر کریمی
شنبه;08:00;10:00
";

    #[test]
    fn test_export_contains_course_details() {
        let catalog = Catalog::parse(CATALOG);
        let text = render_selection_text(&[CourseKey::new("PHY", 1)], &catalog);

        assert!(text.contains("فیزیک ۱"));
        assert!(text.contains("استاد: دکتر کریمی"));
        assert!(text.contains("شنبه ۰۸:۰۰ تا ۱۰:۰۰"));
        assert!(text.contains("جمع: ۱ درس، ۳ واحد"));
    }

    #[test]
    fn test_stale_key_skipped_but_counted() {
        let catalog = Catalog::parse(CATALOG);
        let selection = vec![CourseKey::new("PHY", 1), CourseKey::new("GONE", 2)];
        let text = render_selection_text(&selection, &catalog);

        assert!(!text.contains("GONE"));
        assert!(text.contains("جمع: ۲ درس، ۳ واحد"));
    }

    #[test]
    fn test_empty_selection_has_zero_footer() {
        let catalog = Catalog::parse(CATALOG);
        let text = render_selection_text(&[], &catalog);
        assert!(text.contains("جمع: ۰ درس، ۰ واحد"));
    }
}
