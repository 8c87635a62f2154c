//! Output assembly from final measurements.

use crate::schema::wire::{Annotation, Output};

use super::select::Measurement;

pub const STATUS_NO_POTENTIAL: &str = "No potential for vulnerability found.";
pub const STATUS_FOUND: &str = "Vulnerability found";
pub const STATUS_NOT_FOUND: &str = "No vulnerability found";
pub const STATUS_UNSUPPORTED: &str = "Expression could not be analyzed";

/// Output for a pattern that the screen rejected: score 0, no annotations.
pub fn no_potential() -> Output {
    Output {
        status: STATUS_NO_POTENTIAL.to_string(),
        score: 0,
        annotations: Vec::new(),
    }
}

/// Output for a pattern the matcher cannot time: score 0, no annotations.
pub fn unsupported() -> Output {
    Output {
        status: STATUS_UNSUPPORTED.to_string(),
        score: 0,
        annotations: Vec::new(),
    }
}

/// Build the output from the final, freshly measured generation.
///
/// Every member at or above `ceiling` gets one annotation, in generation
/// order. Status and score follow `timed_out`.
pub fn build_output(measurements: &[Measurement], timed_out: bool, ceiling: f64) -> Output {
    let note = format!("This string gave the expression a run time longer than {ceiling} second");

    let annotations = measurements
        .iter()
        .filter(|m| m.time >= ceiling)
        .map(|m| Annotation {
            entity: m.candidate.clone(),
            note: note.clone(),
        })
        .collect();

    let (status, score) = if timed_out {
        (STATUS_FOUND, 1)
    } else {
        (STATUS_NOT_FOUND, 0)
    };

    Output {
        status: status.to_string(),
        score,
        annotations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(candidate: &str, time: f64) -> Measurement {
        Measurement {
            candidate: candidate.to_string(),
            time,
        }
    }

    #[test]
    fn test_no_potential() {
        let output = no_potential();
        assert_eq!(output.score, 0);
        assert!(output.annotations.is_empty());
        assert_eq!(output.status, STATUS_NO_POTENTIAL);
    }

    #[test]
    fn test_unsupported() {
        let output = unsupported();
        assert_eq!(output.score, 0);
        assert!(output.annotations.is_empty());
        assert_eq!(output.status, STATUS_UNSUPPORTED);
    }

    #[test]
    fn test_annotates_ceiling_hits_in_order() {
        let measurements = vec![
            measurement("late", 1.0),
            measurement("fast", 0.2),
            measurement("early", 1.0),
        ];
        let output = build_output(&measurements, true, 1.0);

        assert_eq!(output.score, 1);
        assert_eq!(output.status, STATUS_FOUND);
        let entities: Vec<_> = output.annotations.iter().map(|a| a.entity.as_str()).collect();
        assert_eq!(entities, vec!["late", "early"]);
        assert_eq!(
            output.annotations[0].note,
            "This string gave the expression a run time longer than 1 second"
        );
    }

    #[test]
    fn test_not_found() {
        let output = build_output(&[measurement("a", 0.1)], false, 1.0);
        assert_eq!(output.score, 0);
        assert_eq!(output.status, STATUS_NOT_FOUND);
        assert!(output.annotations.is_empty());
    }

    #[test]
    fn test_note_references_fractional_ceiling() {
        let output = build_output(&[measurement("a", 0.5)], true, 0.5);
        assert!(output.annotations[0].note.ends_with("than 0.5 second"));
    }
}
