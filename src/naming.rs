//! Filename and output-directory naming
//!
//! Pure helpers that turn a record label plus a sequence index into a
//! collision-free filename, and generate the per-run output directory name.

use chrono::Local;
use rand::Rng;

/// File extension appended to every report filename
const REPORT_EXTENSION: &str = "pdf";

/// Build the filename for one report
///
/// Appends the 1-based sequence index to the label so filenames stay unique
/// even when labels collide, replaces every character outside
/// `[A-Za-z0-9 .]` with an underscore, and appends `.pdf`. Deterministic and
/// total: any input string yields a valid filename.
///
/// # Examples
///
/// ```
/// use report_dl::naming::report_filename;
///
/// assert_eq!(report_filename("A St", 1), "A St_1.pdf");
/// assert_eq!(report_filename("12 Main St #4", 3), "12 Main St _4_3.pdf");
/// ```
#[must_use]
pub fn report_filename(label: &str, sequence: usize) -> String {
    let raw = format!("{label}_{sequence}");
    let cleaned: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == ' ' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{cleaned}.{REPORT_EXTENSION}")
}

/// Generate the per-run output directory name
///
/// Format: `Reports_<DD-MM-YYYY_HH-MM-SS>_<n>` where `n` is a random number
/// in 1..=1000. The random tag keeps two runs within the same second from
/// colliding.
#[must_use]
pub fn output_dir_name() -> String {
    let timestamp = Local::now().format("%d-%m-%Y_%H-%M-%S");
    let tag = rand::thread_rng().gen_range(1..=1000);
    format!("Reports_{timestamp}_{tag}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_report_filename_appends_sequence_and_extension() {
        assert_eq!(report_filename("A St", 1), "A St_1.pdf");
        assert_eq!(report_filename("B St", 2), "B St_2.pdf");
    }

    #[test]
    fn test_report_filename_unique_across_indices() {
        // Identical labels still yield distinct filenames
        assert_ne!(report_filename("Main St", 1), report_filename("Main St", 2));
    }

    #[test]
    fn test_report_filename_deterministic() {
        assert_eq!(report_filename("Main St", 7), report_filename("Main St", 7));
    }

    #[test]
    fn test_report_filename_sanitizes_illegal_characters() {
        assert_eq!(report_filename("a/b\\c:d", 1), "a_b_c_d_1.pdf");
        assert_eq!(report_filename("No. 7, Elm", 2), "No. 7_ Elm_2.pdf");
    }

    #[test]
    fn test_report_filename_replaces_unicode() {
        let name = report_filename("Grüße Straße", 4);
        assert_eq!(name, "Gr__e Stra_e_4.pdf");
        assert!(
            name.strip_suffix(".pdf")
                .unwrap()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '.' || c == '_')
        );
    }

    #[test]
    fn test_report_filename_keeps_allowed_characters() {
        assert_eq!(report_filename("v1.2 rev A", 9), "v1.2 rev A_9.pdf");
    }

    #[test]
    fn test_report_filename_empty_label() {
        assert_eq!(report_filename("", 1), "_1.pdf");
    }

    #[test]
    fn test_output_dir_name_format() {
        let name = output_dir_name();
        assert!(name.starts_with("Reports_"));

        // Reports_DD-MM-YYYY_HH-MM-SS_<1..=1000>
        let parts: Vec<&str> = name.split('_').collect();
        assert_eq!(parts.len(), 4);
        let tag: u32 = parts[3].parse().unwrap();
        assert!((1..=1000).contains(&tag));
    }
}
