// patex-core/src/integrator.rs
//! The integration half of the core: walks a marked-up version of the
//! reduced text and re-inserts every extracted excerpt at the text position
//! recorded in its span, without letting markup characters consume text
//! positions.
//!
//! Correctness depends on the precondition that the non-markup character
//! sequence of `marked_text` equals the reduced text produced by the
//! extraction run that created `records`. Violations surface as
//! [`PatexError::IntegrationConsistency`] rather than silent corruption.

use log::debug;

use crate::errors::PatexError;
use crate::positioned_text::PositionedText;

/// Re-inserts `records` into `marked_text`, reversing a prior extraction.
///
/// `marked_text` is trimmed once before the scan, mirroring the whitespace
/// trim the annotation tooling applies around the reduced text. Markup is
/// recognized by a literal scan: a tag begins at `<` and ends at `>`, with no
/// nesting or attribute-quoting awareness. Characters inside tags (and the
/// tag delimiters themselves) do not advance the text cursor.
pub fn integrate(marked_text: &str, records: &[PositionedText]) -> Result<String, PatexError> {
    let mut targets: Vec<&PositionedText> = records.iter().collect();
    targets.sort_by_key(|pt| pt.span.start);

    let trimmed = marked_text.trim();
    let inserted_len: usize = targets.iter().map(|t| t.text.len()).sum();
    let mut result = String::with_capacity(trimmed.len() + inserted_len);

    let mut idx = 0usize;
    let mut inside_tag = false;
    let mut text_pos = 0usize;

    for c in trimmed.chars() {
        // First insert text from any targets whose span has been reached.
        flush_pending(&targets, &mut idx, &mut text_pos, &mut result)?;

        // No target may start at or before the cursor now; one that does was
        // missed, meaning the records do not belong to this text.
        if let Some(target) = targets.get(idx) {
            if target.span.start <= text_pos {
                return Err(PatexError::IntegrationConsistency {
                    span: target.span,
                    expected: target.span.start,
                    actual: text_pos,
                });
            }
        }

        // Each char gets copied, markup or not.
        result.push(c);

        if c == '<' {
            inside_tag = true;
        } else if c == '>' {
            inside_tag = false;
        }

        // The cursor advances only for content characters strictly outside
        // markup. The closing '>' itself does not advance it.
        if !inside_tag && c != '>' {
            text_pos += 1;
        }
    }

    // Matches at the very end of the original text have spans starting at
    // the final cursor position; insert them after the scan.
    flush_pending(&targets, &mut idx, &mut text_pos, &mut result)?;

    if let Some(target) = targets.get(idx) {
        return Err(PatexError::IntegrationConsistency {
            span: target.span,
            expected: target.span.start,
            actual: text_pos,
        });
    }

    debug!(
        "Integration complete: {} record(s) re-inserted, final text position {}.",
        records.len(),
        text_pos
    );
    Ok(result)
}

/// Inserts every target whose span contains the current cursor position.
///
/// Overlapping targets insert only their not-yet-covered suffix; targets
/// fully covered by a previous insertion are skipped.
fn flush_pending(
    targets: &[&PositionedText],
    idx: &mut usize,
    text_pos: &mut usize,
    result: &mut String,
) -> Result<(), PatexError> {
    while let Some(target) = targets.get(*idx) {
        if !target.span.contains(*text_pos) {
            break;
        }
        // Spans may overlap, so the insertion begins at the still-missing
        // offset into the target's text.
        let offset = *text_pos - target.span.start;
        let mut inserted = 0usize;
        for ch in target.text.chars().skip(offset) {
            result.push(ch);
            inserted += 1;
        }
        *text_pos += inserted;

        if *text_pos != target.span.stop {
            return Err(PatexError::IntegrationConsistency {
                span: target.span,
                expected: target.span.stop,
                actual: *text_pos,
            });
        }

        // Drop this target and any later ones already covered by the text
        // just inserted.
        while let Some(next) = targets.get(*idx) {
            if next.span.stop <= *text_pos {
                *idx += 1;
            } else {
                break;
            }
        }
    }
    Ok(())
}
